//! Edge sources feeding the partitioners.
//!
//! This module provides the [`EdgeSource`] trait together with an in-memory
//! implementation and a streaming reader over fixed-width binary edge files.
//! The partitioners are written once against the trait, so the same code path
//! serves both a fully materialized edge list and a file too large to load.

pub mod binary;
pub mod memory;
pub mod wire;

pub use binary::{load_edges, write_edges, BinaryEdgeFile};
pub use memory::InMemoryEdges;

use crate::partitioning::Edge;
use crate::partitioning::error::PartitionError;

/// How a partition records the edges attributed to it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EdgeStorage {
    /// Keep every edge (in-memory mode).
    List,
    /// Keep only counters; auxiliary state stays O(vertices + partitions).
    Count,
}

/// A finite, restartable sequence of directed edges.
///
/// Implementors must replay exactly the same sequence after [`rewind`](Self::rewind);
/// the two-pass partitioners rely on it.
pub trait EdgeSource {
    /// Next edge in source order, or `None` once the sequence is exhausted.
    fn next_edge(&mut self) -> Result<Option<Edge>, PartitionError>;

    /// Restart the sequence at its first edge.
    fn rewind(&mut self) -> Result<(), PartitionError>;

    /// Total number of edges, known without materializing them.
    fn edge_count(&self) -> u64;

    /// Whether partitions fed from this source keep edge lists or counters.
    fn storage(&self) -> EdgeStorage;

    /// Drive `f` over every remaining edge, stopping at the first error.
    fn try_for_each_edge<F>(&mut self, mut f: F) -> Result<(), PartitionError>
    where
        Self: Sized,
        F: FnMut(Edge) -> Result<(), PartitionError>,
    {
        while let Some(edge) = self.next_edge()? {
            f(edge)?;
        }
        Ok(())
    }
}

impl<S: EdgeSource + ?Sized> EdgeSource for &mut S {
    fn next_edge(&mut self) -> Result<Option<Edge>, PartitionError> {
        (**self).next_edge()
    }
    fn rewind(&mut self) -> Result<(), PartitionError> {
        (**self).rewind()
    }
    fn edge_count(&self) -> u64 {
        (**self).edge_count()
    }
    fn storage(&self) -> EdgeStorage {
        (**self).storage()
    }
}
