//! Fully materialized edge lists.

use super::{EdgeSource, EdgeStorage};
use crate::partitioning::Edge;
use crate::partitioning::error::PartitionError;

/// An edge list held in memory. Rewinding is free.
#[derive(Clone, Debug, Default)]
pub struct InMemoryEdges {
    edges: Vec<Edge>,
    cursor: usize,
}

impl InMemoryEdges {
    pub fn new(edges: Vec<Edge>) -> Self {
        Self { edges, cursor: 0 }
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn into_inner(self) -> Vec<Edge> {
        self.edges
    }
}

impl From<Vec<Edge>> for InMemoryEdges {
    fn from(edges: Vec<Edge>) -> Self {
        Self::new(edges)
    }
}

impl FromIterator<Edge> for InMemoryEdges {
    fn from_iter<I: IntoIterator<Item = Edge>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl EdgeSource for InMemoryEdges {
    fn next_edge(&mut self) -> Result<Option<Edge>, PartitionError> {
        let edge = self.edges.get(self.cursor).copied();
        if edge.is_some() {
            self.cursor += 1;
        }
        Ok(edge)
    }

    fn rewind(&mut self) -> Result<(), PartitionError> {
        self.cursor = 0;
        Ok(())
    }

    fn edge_count(&self) -> u64 {
        self.edges.len() as u64
    }

    fn storage(&self) -> EdgeStorage {
        EdgeStorage::List
    }
}
