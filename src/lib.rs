#![cfg_attr(docsrs, feature(doc_cfg))]
//! # pway-partition
//!
//! pway-partition splits a directed graph, given as a flat list of edges, across
//! `N` logical partitions ("machines") to study the replication and
//! communication trade-offs of distributed graph processing. Partitions are
//! accounting buckets, not processes.
//!
//! ## Strategies
//! - **Edge-cut**: vertices dealt round-robin; edges crossing partitions are
//!   replicated into both endpoint partitions.
//! - **Random vertex-cut**: edges dealt round-robin; first touch masters a vertex.
//! - **Greedy vertex-cut**: locality-seeking, load-aware online placement with
//!   capacity retirement at the mean load.
//! - **Hybrid vertex-cut**: edges into high-degree vertices routed by source,
//!   the rest by destination.
//!
//! Every strategy runs unchanged over an in-memory edge list or a streamed
//! binary edge file; streaming keeps auxiliary state proportional to the number
//! of distinct vertices, never the number of edges.
//!
//! ## Determinism
//!
//! No strategy is randomized. Results depend only on the edge order of the
//! source; ties between equally loaded partitions go to the smallest id.
//!
//! ## Usage
//! ```no_run
//! use pway_partition::prelude::*;
//!
//! # fn main() -> Result<(), PartitionError> {
//! let mut edges = BinaryEdgeFile::open("graph.bin")?;
//! let cfg = PartitionerConfig {
//!     n_parts: 8,
//!     strategy: Strategy::GreedyVertexCut,
//!     ..Default::default()
//! };
//! let table = partition(&mut edges, &cfg)?;
//! for s in summarize(&table) {
//!     println!("{} {} {} {}", s.id, s.masters, s.vertices, s.edges);
//! }
//! # Ok(())
//! # }
//! ```

pub mod debug_invariants;
pub mod io;
pub mod partitioning;

pub use debug_invariants::DebugInvariants;

/// A convenient prelude to import the most-used traits & types:
pub mod prelude {
    pub use crate::debug_invariants::DebugInvariants;
    pub use crate::io::{BinaryEdgeFile, EdgeSource, EdgeStorage, InMemoryEdges};
    pub use crate::partitioning::edge_cut::partition_edge_cut;
    pub use crate::partitioning::greedy_vertex_cut::partition_greedy_vertex_cut;
    pub use crate::partitioning::hybrid_vertex_cut::partition_hybrid_vertex_cut;
    pub use crate::partitioning::random_vertex_cut::partition_random_vertex_cut;
    pub use crate::partitioning::{
        edge_balance, partition, replication_factor, summarize, Edge, Partition, PartitionError,
        PartitionId, PartitionSummary, PartitionTable, PartitionerConfig, Strategy, VertexId,
    };
}
