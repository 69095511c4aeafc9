//! Partitioning metrics utilities.
//!
//! This module provides functions for evaluating a finished [`PartitionTable`],
//! including the replication factor and edge balance, plus the per-partition
//! [`PartitionSummary`] a report writer renders. These read the public table
//! only; nothing here reaches into partitioner state.

use super::table::{Partition, PartitionTable};
use super::PartitionId;
use serde::{Deserialize, Serialize};

/// Reporting counts for one partition.
///
/// `edges` is the partition's total load: local plus replicated edges, which is
/// what the edge-cut report has always printed as the edge figure.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartitionSummary {
    pub id: PartitionId,
    pub masters: usize,
    pub vertices: usize,
    pub replicated_edges: u64,
    pub edges: u64,
}

impl From<&Partition> for PartitionSummary {
    fn from(p: &Partition) -> Self {
        Self {
            id: p.id(),
            masters: p.master_count(),
            vertices: p.vertex_count(),
            replicated_edges: p.replica_count(),
            edges: p.total_edge_count(),
        }
    }
}

/// One summary per partition, in id order.
pub fn summarize(table: &PartitionTable) -> Vec<PartitionSummary> {
    table.iter().map(PartitionSummary::from).collect()
}

/// Average number of partitions holding each vertex (O(parts)).
///
/// `Σ |vertices(p)| / |distinct vertices|`; `1.0` means no vertex is mirrored.
/// Returns `0.0` for an empty table.
pub fn replication_factor(table: &PartitionTable) -> f64 {
    let distinct = table.master_total();
    if distinct == 0 {
        return 0.0;
    }
    total_held(table) as f64 / distinct as f64
}

#[cfg(feature = "rayon")]
fn total_held(table: &PartitionTable) -> usize {
    use rayon::prelude::*;
    let parts: Vec<&Partition> = table.iter().collect();
    parts.par_iter().map(|p| p.vertex_count()).sum()
}

#[cfg(not(feature = "rayon"))]
fn total_held(table: &PartitionTable) -> usize {
    table.iter().map(Partition::vertex_count).sum()
}

/// Heaviest partition load divided by the mean load.
///
/// Loads are [`Partition::total_edge_count`]. Returns `0.0` when there are no edges.
pub fn edge_balance(table: &PartitionTable) -> f64 {
    let loads: Vec<u64> = table.iter().map(Partition::total_edge_count).collect();
    let total: u64 = loads.iter().sum();
    if total == 0 {
        return 0.0;
    }
    let mean = total as f64 / loads.len() as f64;
    let max = loads.iter().copied().max().unwrap_or(0);
    max as f64 / mean
}
