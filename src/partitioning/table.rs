//! Per-partition accumulator shared by every strategy.
//!
//! A [`PartitionTable`] always holds exactly `n_parts` [`Partition`] records,
//! indexed `0..n_parts`. Each record owns its master-vertex set, the set of every
//! vertex it has seen (masters plus mirrors), and an [`EdgeLedger`] for local
//! and, under edge-cut, replicated edges.

use super::error::PartitionError;
use super::{Edge, PartitionId, VertexId};
use crate::debug_invariants::DebugInvariants;
use crate::io::EdgeStorage;
use hashbrown::{HashMap, HashSet};
use itertools::Itertools;

/// Edges attributed to one partition: the edges themselves, or just a count.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EdgeLedger {
    List(Vec<Edge>),
    Count(u64),
}

impl EdgeLedger {
    pub fn new(storage: EdgeStorage) -> Self {
        match storage {
            EdgeStorage::List => Self::List(Vec::new()),
            EdgeStorage::Count => Self::Count(0),
        }
    }

    pub fn push(&mut self, edge: Edge) {
        match self {
            Self::List(edges) => edges.push(edge),
            Self::Count(n) => *n += 1,
        }
    }

    pub fn len(&self) -> u64 {
        match self {
            Self::List(edges) => edges.len() as u64,
            Self::Count(n) => *n,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The recorded edges, if this ledger keeps them.
    pub fn as_slice(&self) -> Option<&[Edge]> {
        match self {
            Self::List(edges) => Some(edges),
            Self::Count(_) => None,
        }
    }
}

#[derive(Clone, Debug)]
pub struct Partition {
    id: PartitionId,
    master_vertices: HashSet<VertexId>,
    vertices: HashSet<VertexId>,
    edges: EdgeLedger,
    replicated_edges: EdgeLedger,
}

impl Partition {
    fn new(id: PartitionId, storage: EdgeStorage) -> Self {
        Self {
            id,
            master_vertices: HashSet::new(),
            vertices: HashSet::new(),
            edges: EdgeLedger::new(storage),
            replicated_edges: EdgeLedger::new(storage),
        }
    }

    pub fn id(&self) -> PartitionId {
        self.id
    }

    /// Vertices this partition owns.
    pub fn master_vertices(&self) -> &HashSet<VertexId> {
        &self.master_vertices
    }

    /// Every vertex this partition holds, masters and mirrors alike.
    pub fn vertices(&self) -> &HashSet<VertexId> {
        &self.vertices
    }

    pub fn master_count(&self) -> usize {
        self.master_vertices.len()
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Local edges.
    pub fn edges(&self) -> &EdgeLedger {
        &self.edges
    }

    /// Edge-cut only: edges whose endpoints are mastered elsewhere.
    pub fn replicated_edges(&self) -> &EdgeLedger {
        &self.replicated_edges
    }

    pub fn edge_count(&self) -> u64 {
        self.edges.len()
    }

    pub fn replica_count(&self) -> u64 {
        self.replicated_edges.len()
    }

    /// Local plus replicated edges; the load this partition carries.
    pub fn total_edge_count(&self) -> u64 {
        self.edges.len() + self.replicated_edges.len()
    }

    pub fn is_master(&self, v: VertexId) -> bool {
        self.master_vertices.contains(&v)
    }

    /// Masters in ascending id order, for stable reporting.
    pub fn sorted_masters(&self) -> Vec<VertexId> {
        self.master_vertices.iter().copied().sorted_unstable().collect()
    }

    /// All held vertices in ascending id order.
    pub fn sorted_vertices(&self) -> Vec<VertexId> {
        self.vertices.iter().copied().sorted_unstable().collect()
    }

    pub(crate) fn add_master(&mut self, v: VertexId) {
        self.master_vertices.insert(v);
    }

    pub(crate) fn touch(&mut self, (src, dst): Edge) {
        self.vertices.insert(src);
        self.vertices.insert(dst);
    }

    pub(crate) fn record_edge(&mut self, edge: Edge) {
        self.edges.push(edge);
    }

    pub(crate) fn record_replica(&mut self, edge: Edge) {
        self.replicated_edges.push(edge);
    }
}

/// Partition id → partition record, for one partitioning run.
#[derive(Clone, Debug)]
pub struct PartitionTable {
    parts: Vec<Partition>,
    storage: EdgeStorage,
}

impl PartitionTable {
    pub fn new(n_parts: usize, storage: EdgeStorage) -> Self {
        Self {
            parts: (0..n_parts).map(|id| Partition::new(id, storage)).collect(),
            storage,
        }
    }

    pub fn len(&self) -> usize {
        self.parts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    pub fn storage(&self) -> EdgeStorage {
        self.storage
    }

    pub fn partition(&self, id: PartitionId) -> Option<&Partition> {
        self.parts.get(id)
    }

    /// Partitions in ascending id order.
    pub fn iter(&self) -> impl Iterator<Item = &Partition> + '_ {
        self.parts.iter()
    }

    /// The partition mastering `v`, if any. Linear in the number of partitions.
    pub fn master_of(&self, v: VertexId) -> Option<PartitionId> {
        self.parts.iter().find(|p| p.is_master(v)).map(Partition::id)
    }

    /// Number of distinct vertices mastered anywhere.
    pub fn master_total(&self) -> usize {
        self.parts.iter().map(Partition::master_count).sum()
    }

    pub(crate) fn part_mut(&mut self, id: PartitionId) -> &mut Partition {
        &mut self.parts[id]
    }
}

impl<'a> IntoIterator for &'a PartitionTable {
    type Item = &'a Partition;
    type IntoIter = std::slice::Iter<'a, Partition>;
    fn into_iter(self) -> Self::IntoIter {
        self.parts.iter()
    }
}

impl DebugInvariants for PartitionTable {
    fn debug_assert_invariants(&self) {
        crate::debug_invariants!(self.validate_invariants(), "PartitionTable");
    }

    /// Every held vertex is mastered by exactly one partition, and a
    /// partition holds every vertex it masters.
    fn validate_invariants(&self) -> Result<(), PartitionError> {
        let mut owner: HashMap<VertexId, PartitionId> = HashMap::new();
        for part in &self.parts {
            for &v in &part.master_vertices {
                if let Some(prev) = owner.insert(v, part.id) {
                    return Err(PartitionError::InvariantViolation(format!(
                        "vertex {v} mastered by both partition {prev} and {}",
                        part.id
                    )));
                }
                if !part.vertices.contains(&v) {
                    return Err(PartitionError::InvariantViolation(format!(
                        "partition {} masters vertex {v} without holding it",
                        part.id
                    )));
                }
            }
        }
        for part in &self.parts {
            if let Some(v) = part.vertices.iter().find(|v| !owner.contains_key(*v)) {
                return Err(PartitionError::InvariantViolation(format!(
                    "vertex {v} held by partition {} has no master",
                    part.id
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_has_every_partition() {
        let t = PartitionTable::new(4, EdgeStorage::Count);
        assert_eq!(t.len(), 4);
        assert_eq!(t.iter().map(Partition::id).collect::<Vec<_>>(), vec![0, 1, 2, 3]);
        assert!(t.partition(4).is_none());
        assert!(t.validate_invariants().is_ok());
    }

    #[test]
    fn ledger_counts_or_lists() {
        let mut list = EdgeLedger::new(EdgeStorage::List);
        let mut count = EdgeLedger::new(EdgeStorage::Count);
        for e in [(1, 2), (1, 2), (3, 4)] {
            list.push(e);
            count.push(e);
        }
        assert_eq!(list.len(), 3);
        assert_eq!(count.len(), 3);
        assert_eq!(list.as_slice(), Some(&[(1, 2), (1, 2), (3, 4)][..]));
        assert_eq!(count.as_slice(), None);
    }

    #[test]
    fn detects_double_mastership() {
        let mut t = PartitionTable::new(2, EdgeStorage::List);
        for id in 0..2 {
            let p = t.part_mut(id);
            p.touch((7, 8));
            p.add_master(7);
        }
        t.part_mut(0).add_master(8);
        assert!(matches!(
            t.validate_invariants(),
            Err(PartitionError::InvariantViolation(_))
        ));
    }

    #[test]
    fn detects_unmastered_mirror() {
        let mut t = PartitionTable::new(1, EdgeStorage::List);
        t.part_mut(0).touch((1, 2));
        t.part_mut(0).add_master(1);
        assert!(t.validate_invariants().is_err());
        t.part_mut(0).add_master(2);
        assert!(t.validate_invariants().is_ok());
    }
}
