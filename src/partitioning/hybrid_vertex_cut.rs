//! Hybrid (degree-threshold) vertex-cut partitioning.
//!
//! A first pass counts the undirected degree of every vertex. In the second
//! pass an edge `(u, v)` whose destination is high-degree (`degree[v] >
//! threshold`) is routed by its source to `(u - 1) mod N`; otherwise it is
//! routed by its destination to `(v - 1) mod N`. Mastership is first-come,
//! independent of which rule picked the partition.

use super::error::PartitionError;
use super::progress::Progress;
use super::state::{DegreeTable, VertexRegistry};
use super::table::PartitionTable;
use super::{validate_parts, validate_threshold, PartitionId, VertexId};
use crate::debug_invariants::DebugInvariants;
use crate::io::EdgeSource;

/// Hybrid-cut partition `source` into `n_parts` partitions.
///
/// Reads the source twice; it is rewound before each pass.
///
/// # Errors
/// `InvalidConfiguration` for `n_parts == 0` or a negative threshold;
/// `InconsistentRewind` if the second pass does not replay the first.
pub fn partition_hybrid_vertex_cut<S: EdgeSource>(
    source: &mut S,
    n_parts: usize,
    degree_threshold: i64,
) -> Result<PartitionTable, PartitionError> {
    run(source, n_parts, degree_threshold, 0)
}

pub(crate) fn run<S: EdgeSource>(
    source: &mut S,
    n_parts: usize,
    degree_threshold: i64,
    progress_interval: u64,
) -> Result<PartitionTable, PartitionError> {
    validate_parts(n_parts)?;
    validate_threshold(degree_threshold)?;
    let threshold = degree_threshold as u64;

    // 1. Degree census.
    let mut degrees = DegreeTable::new();
    source.rewind()?;
    let mut census = Progress::new("hybrid-cut degree census", progress_interval);
    source.try_for_each_edge(|edge| {
        degrees.count_edge(edge);
        census.tick();
        Ok(())
    })?;
    let counted = census.finish();
    log::debug!("hybrid-cut: degrees of {} vertices counted", degrees.len());

    // 2. Threshold-gated assignment.
    let mut table = PartitionTable::new(n_parts, source.storage());
    let mut masters = VertexRegistry::new();
    let mut high_degree_edges = 0u64;
    source.rewind()?;
    let mut assignment = Progress::new("hybrid-cut assignment", progress_interval);
    source.try_for_each_edge(|edge| {
        let (src, dst) = edge;
        let dst_degree = degrees.degree(dst).ok_or_else(|| {
            PartitionError::InconsistentRewind(format!(
                "vertex {dst} was not seen in the degree census"
            ))
        })?;
        let p = if dst_degree > threshold {
            high_degree_edges += 1;
            route(src, n_parts)
        } else {
            route(dst, n_parts)
        };
        let part = table.part_mut(p);
        part.record_edge(edge);
        part.touch(edge);
        masters.claim_endpoints(edge, p, &mut table);
        assignment.tick();
        Ok(())
    })?;
    let assigned = assignment.finish();
    if assigned != counted {
        return Err(PartitionError::InconsistentRewind(format!(
            "degree census read {counted} edges, assignment read {assigned}"
        )));
    }
    log::debug!("hybrid-cut: {high_degree_edges} of {assigned} edges routed by source");

    table.debug_assert_invariants();
    Ok(table)
}

/// `(v - 1) mod n_parts`, normalized into `[0, n_parts)` for `v <= 0`.
pub fn route(v: VertexId, n_parts: usize) -> PartitionId {
    (i64::from(v) - 1).rem_euclid(n_parts as i64) as PartitionId
}
