//! Greedy heuristic vertex-cut partitioning.
//!
//! Each vertex carries an *active machine set*: the partitions it has been
//! placed on that are still accepting edges. For an edge `(u, v)` the target is
//! chosen, in priority order, as the least-loaded partition of
//!
//! 1. `A(u) ∩ A(v)` when both sets are non-empty and intersect;
//! 2. `A(u) ∪ A(v)` when both are non-empty but disjoint;
//! 3. whichever of `A(u)`, `A(v)` is non-empty;
//! 4. all partitions.
//!
//! Ties go to the smallest partition id. Once a partition's load reaches
//! `mean_load = edges / N` it is removed from the active set of every vertex it
//! holds, so it can only be picked again through case 4. Since case 4 picks a
//! global minimum, which stays below the mean until the final edge, no
//! partition ends more than one edge above `mean_load`.
//!
//! Single pass. The edge count comes from [`EdgeSource::edge_count`], so a
//! streamed file never has to be materialized.

use super::error::PartitionError;
use super::progress::Progress;
use super::state::{ActiveMachines, PartitionLoads, VertexRegistry};
use super::table::PartitionTable;
use super::{validate_parts, Edge, PartitionId};
use crate::debug_invariants::DebugInvariants;
use crate::io::EdgeSource;

/// Greedy vertex-cut partition `source` into `n_parts` partitions.
pub fn partition_greedy_vertex_cut<S: EdgeSource>(
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
    let total = source.edge_count();
    let mean_load = total as f64 / n_parts as f64;
    log::debug!("greedy vertex-cut: {total} edges, mean load {mean_load:.2} per part");

    let mut table = PartitionTable::new(n_parts, source.storage());
    let mut masters = VertexRegistry::new();
    let mut active = ActiveMachines::new();
    let mut loads = PartitionLoads::new(n_parts);
    let mut retired = vec![false; n_parts];

    source.rewind()?;
    let mut progress = Progress::new("greedy vertex-cut", progress_interval);
    source.try_for_each_edge(|edge| {
        let p = choose_partition(&active, &loads, edge);
        let load = loads.increment(p);
        masters.claim_endpoints(edge, p, &mut table);
        let part = table.part_mut(p);
        part.record_edge(edge);
        part.touch(edge);
        active.entry(edge.0).insert(p);
        active.entry(edge.1).insert(p);

        if load as f64 >= mean_load {
            if retired[p] {
                // Only reachable when the source yields more edges than `edge_count`
                // reported: a retired partition is never the global minimum while
                // edges remain. Only this edge's endpoints can have regained `p`.
                active.retire(p, [&edge.0, &edge.1]);
            } else {
                retired[p] = true;
                log::debug!("greedy vertex-cut: partition {p} reached capacity at load {load}");
                active.retire(p, table.part_mut(p).vertices());
            }
        }
        progress.tick();
        Ok(())
    })?;
    let seen = progress.finish();
    if seen != total {
        log::warn!("greedy vertex-cut: source reported {total} edges but yielded {seen}");
    }

    table.debug_assert_invariants();
    Ok(table)
}

/// Pick the target partition for `(src, dst)` under the four-case rule.
pub fn choose_partition(
    active: &ActiveMachines,
    loads: &PartitionLoads,
    (src, dst): Edge,
) -> PartitionId {
    let a_src = active.get(src).filter(|s| !s.is_empty());
    let a_dst = active.get(dst).filter(|s| !s.is_empty());
    let chosen = match (a_src, a_dst) {
        (Some(mu), Some(mv)) => loads
            .least_loaded_of(mu.intersection(mv))
            .or_else(|| loads.least_loaded_of(mu.union(mv))),
        (Some(m), None) | (None, Some(m)) => loads.least_loaded_of(m.iter()),
        (None, None) => None,
    };
    chosen.unwrap_or_else(|| loads.least_loaded())
}
