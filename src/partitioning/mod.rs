//! Entry-point for p-way graph partitioning.
//!
//! Four strategies are provided, each consuming an [`EdgeSource`] in source
//! order and filling a fresh [`PartitionTable`]:
//!
//! - [`edge_cut`]: vertices dealt round-robin, cross-partition edges replicated.
//! - [`random_vertex_cut`]: edges dealt round-robin, first touch masters a vertex.
//! - [`greedy_vertex_cut`]: load-aware, locality-seeking online placement.
//! - [`hybrid_vertex_cut`]: degree-thresholded routing by source or destination.

pub mod edge_cut;
pub mod error;
pub mod greedy_vertex_cut;
pub mod hybrid_vertex_cut;
pub mod metrics;
pub mod progress;
pub mod random_vertex_cut;
pub mod state;
pub mod table;

pub use self::error::PartitionError;
pub use self::metrics::*;
pub use self::table::{EdgeLedger, Partition, PartitionTable};

use crate::io::EdgeSource;
use serde::{Deserialize, Serialize};
use std::time::Instant;

/// Opaque vertex identifier, as stored in edge files.
pub type VertexId = i32;

/// Partition ("machine") index in `[0, n_parts)`.
pub type PartitionId = usize;

/// Directed edge `(src, dst)`. Duplicates are independent edges.
pub type Edge = (VertexId, VertexId);

/// Which partitioning policy [`partition`] runs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    EdgeCut,
    #[default]
    RandomVertexCut,
    GreedyVertexCut,
    HybridVertexCut,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PartitionerConfig {
    pub n_parts: usize,
    pub strategy: Strategy,
    /// Hybrid only: a destination with degree above this is "high-degree".
    pub degree_threshold: i64,
    /// Log progress every this many edges; `0` disables.
    pub progress_interval: u64,
}

impl Default for PartitionerConfig {
    fn default() -> Self {
        Self {
            n_parts: 3,
            strategy: Strategy::default(),
            degree_threshold: 3,
            progress_interval: 100_000_000,
        }
    }
}

impl PartitionerConfig {
    /// Reject configurations no strategy can run with.
    pub fn validate(&self) -> Result<(), PartitionError> {
        validate_parts(self.n_parts)?;
        if self.strategy == Strategy::HybridVertexCut {
            validate_threshold(self.degree_threshold)?;
        }
        Ok(())
    }
}

pub(crate) fn validate_parts(n_parts: usize) -> Result<(), PartitionError> {
    if n_parts == 0 {
        return Err(PartitionError::InvalidConfiguration(
            "number of partitions must be at least 1".into(),
        ));
    }
    Ok(())
}

pub(crate) fn validate_threshold(threshold: i64) -> Result<(), PartitionError> {
    if threshold < 0 {
        return Err(PartitionError::InvalidConfiguration(format!(
            "degree threshold must be non-negative, got {threshold}"
        )));
    }
    Ok(())
}

/// Run the strategy selected by `cfg` over `source`.
///
/// The table is returned only if the whole run succeeds.
pub fn partition<S: EdgeSource>(
    source: &mut S,
    cfg: &PartitionerConfig,
) -> Result<PartitionTable, PartitionError> {
    cfg.validate()?;
    let start = Instant::now();
    let table = match cfg.strategy {
        Strategy::EdgeCut => edge_cut::run(source, cfg.n_parts, cfg.progress_interval),
        Strategy::RandomVertexCut => {
            random_vertex_cut::run(source, cfg.n_parts, cfg.progress_interval)
        }
        Strategy::GreedyVertexCut => {
            greedy_vertex_cut::run(source, cfg.n_parts, cfg.progress_interval)
        }
        Strategy::HybridVertexCut => hybrid_vertex_cut::run(
            source,
            cfg.n_parts,
            cfg.degree_threshold,
            cfg.progress_interval,
        ),
    }?;
    log::info!(
        "{:?}: partitioned {} edges into {} parts in {:.3?}",
        cfg.strategy,
        source.edge_count(),
        cfg.n_parts,
        start.elapsed()
    );
    for part in table.iter().filter(|p| p.total_edge_count() == 0) {
        log::warn!("partition {} received no edges", part.id());
    }
    Ok(table)
}

#[cfg(test)]
mod tests;
