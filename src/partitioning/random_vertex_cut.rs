//! Random (round-robin) vertex-cut partitioning.
//!
//! Edge `i` goes to partition `i mod N` regardless of its endpoints. A vertex
//! is mastered by the partition of the first edge that mentions it; later
//! appearances elsewhere only mirror it. Single pass.

use super::error::PartitionError;
use super::progress::Progress;
use super::state::VertexRegistry;
use super::table::PartitionTable;
use super::validate_parts;
use crate::debug_invariants::DebugInvariants;
use crate::io::EdgeSource;

/// Deal the edges of `source` round-robin over `n_parts` partitions.
pub fn partition_random_vertex_cut<S: EdgeSource>(
    source: &mut S,
    n_parts: usize,
) -> Result<PartitionTable, PartitionError> {
    run(source, n_parts, 0)
}

pub(crate) fn run<S: EdgeSource>(
    source: &mut S,
    n_parts: usize,
    progress_interval: u64,
) -> Result<PartitionTable, PartitionError> {
    validate_parts(n_parts)?;
    let mut table = PartitionTable::new(n_parts, source.storage());
    let mut masters = VertexRegistry::new();
    let mut next = 0usize;

    source.rewind()?;
    let mut progress = Progress::new("random vertex-cut", progress_interval);
    source.try_for_each_edge(|edge| {
        let p = next;
        masters.claim_endpoints(edge, p, &mut table);
        let part = table.part_mut(p);
        part.record_edge(edge);
        part.touch(edge);
        next = (next + 1) % n_parts;
        progress.tick();
        Ok(())
    })?;
    progress.finish();

    table.debug_assert_invariants();
    Ok(table)
}
