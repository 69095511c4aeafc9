//! Edge-cut partitioning.
//!
//! Vertex ownership is fixed up front: the `i`-th distinct vertex, in order of
//! first appearance in the stream, is mastered by partition `i mod N`. A second
//! pass classifies each edge as local (both endpoints mastered by the same
//! partition) or replicated (recorded in *both* endpoint partitions). Either
//! way both endpoint partitions hold both endpoints.

use super::error::PartitionError;
use super::progress::Progress;
use super::state::VertexRegistry;
use super::table::PartitionTable;
use super::{validate_parts, PartitionId, VertexId};
use crate::debug_invariants::DebugInvariants;
use crate::io::EdgeSource;

/// Edge-cut partition `source` into `n_parts` partitions.
///
/// Reads the source twice; it is rewound before each pass.
///
/// # Errors
/// `InvalidConfiguration` for `n_parts == 0`; `InconsistentRewind` if the
/// second pass does not replay the first; any source error.
pub fn partition_edge_cut<S: EdgeSource>(
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
    let mut owners = VertexRegistry::new();

    // 1. Discover vertices and deal them round-robin.
    source.rewind()?;
    let mut discovery = Progress::new("edge-cut vertex discovery", progress_interval);
    source.try_for_each_edge(|(src, dst)| {
        for v in [src, dst] {
            let p = owners.len() % n_parts;
            if owners.claim(v, p) {
                table.part_mut(p).add_master(v);
            }
        }
        discovery.tick();
        Ok(())
    })?;
    let discovered = discovery.finish();
    log::debug!(
        "edge-cut: {} vertices over {} edges assigned to {} parts",
        owners.len(),
        discovered,
        n_parts
    );

    // 2. Classify edges against the fixed ownership.
    source.rewind()?;
    let mut assignment = Progress::new("edge-cut assignment", progress_interval);
    source.try_for_each_edge(|edge| {
        let src_part = owner(&owners, edge.0)?;
        let dst_part = owner(&owners, edge.1)?;
        if src_part == dst_part {
            table.part_mut(src_part).record_edge(edge);
        } else {
            table.part_mut(src_part).record_replica(edge);
            table.part_mut(dst_part).record_replica(edge);
        }
        table.part_mut(src_part).touch(edge);
        table.part_mut(dst_part).touch(edge);
        assignment.tick();
        Ok(())
    })?;
    let assigned = assignment.finish();
    if assigned != discovered {
        return Err(PartitionError::InconsistentRewind(format!(
            "first pass read {discovered} edges, second pass read {assigned}"
        )));
    }

    table.debug_assert_invariants();
    Ok(table)
}

fn owner(owners: &VertexRegistry, v: VertexId) -> Result<PartitionId, PartitionError> {
    owners.master_of(v).ok_or_else(|| {
        PartitionError::InconsistentRewind(format!("vertex {v} was not seen in the first pass"))
    })
}
