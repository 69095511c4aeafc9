//! Transient per-run state for the partitioners.
//!
//! Everything here is built while edges are consumed and dropped when the
//! owning `run` returns; none of it is persisted. Sizes are bounded by the
//! number of distinct vertices plus the number of partitions, never by the
//! number of edges. Lookups never insert: get-or-create is always an explicit
//! call ([`ActiveMachines::entry`], [`DegreeTable::count_edge`]).

use super::table::PartitionTable;
use super::{Edge, PartitionId, VertexId};
use hashbrown::HashMap;
use itertools::Itertools;

/// First-come mastership: the first partition to claim a vertex owns it.
#[derive(Debug, Default)]
pub struct VertexRegistry {
    masters: HashMap<VertexId, PartitionId>,
}

impl VertexRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn master_of(&self, v: VertexId) -> Option<PartitionId> {
        self.masters.get(&v).copied()
    }

    /// Number of vertices mastered so far.
    pub fn len(&self) -> usize {
        self.masters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.masters.is_empty()
    }

    /// Make `p` the master of `v` unless `v` already has one.
    /// Returns `true` if the claim succeeded.
    pub fn claim(&mut self, v: VertexId, p: PartitionId) -> bool {
        match self.masters.entry(v) {
            hashbrown::hash_map::Entry::Occupied(_) => false,
            hashbrown::hash_map::Entry::Vacant(slot) => {
                slot.insert(p);
                true
            }
        }
    }

    /// Claim both endpoints of `edge` for `p`, mirroring new masters into `table`.
    pub(crate) fn claim_endpoints(
        &mut self,
        (src, dst): Edge,
        p: PartitionId,
        table: &mut PartitionTable,
    ) {
        for v in [src, dst] {
            if self.claim(v, p) {
                table.part_mut(p).add_master(v);
            }
        }
    }
}

/// Sorted, duplicate-free set of partition ids.
///
/// Sets hold at most `n_parts` entries, so a sorted vector beats a hash set
/// on both memory and iteration.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MachineSet(Vec<PartitionId>);

impl MachineSet {
    pub fn insert(&mut self, p: PartitionId) {
        if let Err(at) = self.0.binary_search(&p) {
            self.0.insert(at, p);
        }
    }

    pub fn remove(&mut self, p: PartitionId) -> bool {
        match self.0.binary_search(&p) {
            Ok(at) => {
                self.0.remove(at);
                true
            }
            Err(_) => false,
        }
    }

    pub fn contains(&self, p: PartitionId) -> bool {
        self.0.binary_search(&p).is_ok()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = PartitionId> + '_ {
        self.0.iter().copied()
    }

    /// Ids present in both sets, ascending.
    pub fn intersection<'a>(
        &'a self,
        other: &'a MachineSet,
    ) -> impl Iterator<Item = PartitionId> + 'a {
        self.iter().filter(move |&p| other.contains(p))
    }

    /// Ids present in either set, ascending and deduplicated.
    pub fn union<'a>(&'a self, other: &'a MachineSet) -> impl Iterator<Item = PartitionId> + 'a {
        self.iter().merge(other.iter()).dedup()
    }
}

impl FromIterator<PartitionId> for MachineSet {
    fn from_iter<I: IntoIterator<Item = PartitionId>>(iter: I) -> Self {
        Self(iter.into_iter().sorted_unstable().dedup().collect())
    }
}

/// Per-vertex active machine sets for the greedy vertex-cut.
#[derive(Debug, Default)]
pub struct ActiveMachines {
    sets: HashMap<VertexId, MachineSet>,
}

impl ActiveMachines {
    pub fn new() -> Self {
        Self::default()
    }

    /// The active set of `v`; `None` if `v` has never been placed.
    pub fn get(&self, v: VertexId) -> Option<&MachineSet> {
        self.sets.get(&v)
    }

    /// The active set of `v`, created empty on first use.
    pub fn entry(&mut self, v: VertexId) -> &mut MachineSet {
        self.sets.entry(v).or_default()
    }

    /// Drop `p` from the active set of every vertex in `vertices`.
    pub fn retire<'a, I>(&mut self, p: PartitionId, vertices: I)
    where
        I: IntoIterator<Item = &'a VertexId>,
    {
        for v in vertices {
            if let Some(set) = self.sets.get_mut(v) {
                set.remove(p);
            }
        }
    }

    pub fn len(&self) -> usize {
        self.sets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sets.is_empty()
    }
}

/// Running edge load per partition.
#[derive(Clone, Debug)]
pub struct PartitionLoads(Vec<u64>);

impl PartitionLoads {
    pub fn new(n_parts: usize) -> Self {
        Self(vec![0; n_parts])
    }

    /// Add one edge to `p` and return its new load.
    pub fn increment(&mut self, p: PartitionId) -> u64 {
        self.0[p] += 1;
        self.0[p]
    }

    /// Lowest-load candidate; ties go to the smallest id.
    pub fn least_loaded_of<I>(&self, candidates: I) -> Option<PartitionId>
    where
        I: IntoIterator<Item = PartitionId>,
    {
        candidates.into_iter().min_by_key(|&p| (self.0[p], p))
    }

    /// Globally lowest-load partition; ties go to the smallest id.
    pub fn least_loaded(&self) -> PartitionId {
        self.least_loaded_of(0..self.0.len()).unwrap_or(0)
    }
}

/// Undirected degree (in + out) of every vertex in the stream.
#[derive(Debug, Default)]
pub struct DegreeTable {
    degrees: HashMap<VertexId, u64>,
}

impl DegreeTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one appearance of each endpoint.
    pub fn count_edge(&mut self, (src, dst): Edge) {
        *self.degrees.entry(src).or_insert(0) += 1;
        *self.degrees.entry(dst).or_insert(0) += 1;
    }

    pub fn degree(&self, v: VertexId) -> Option<u64> {
        self.degrees.get(&v).copied()
    }

    pub fn len(&self) -> usize {
        self.degrees.len()
    }

    pub fn is_empty(&self) -> bool {
        self.degrees.is_empty()
    }
}
