#![allow(dead_code)]
use pway_partition::prelude::*;
use pway_partition::io::write_edges;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use std::path::PathBuf;
use tempfile::TempDir;

/// The nine-edge, six-vertex graph used throughout the scenarios.
pub fn sample_edges() -> Vec<Edge> {
    vec![
        (1, 4),
        (1, 6),
        (2, 1),
        (2, 5),
        (2, 6),
        (3, 1),
        (3, 4),
        (4, 1),
        (5, 1),
    ]
}

/// `m` random directed edges over vertex ids `0..n`, duplicates allowed.
pub fn random_edges(n: i32, m: usize, seed: u64) -> Vec<Edge> {
    let mut rng = SmallRng::seed_from_u64(seed);
    (0..m)
        .map(|_| (rng.gen_range(0..n), rng.gen_range(0..n)))
        .collect()
}

/// Write `edges` to a fresh binary edge file; keep the `TempDir` alive.
pub fn edge_file(edges: &[Edge]) -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("edges.graph");
    write_edges(&path, edges.iter().copied()).unwrap();
    (dir, path)
}

/// (masters, vertices, local edges, replicated edges) per partition.
pub fn counts(t: &PartitionTable) -> Vec<(usize, usize, u64, u64)> {
    t.iter()
        .map(|p| (p.master_count(), p.vertex_count(), p.edge_count(), p.replica_count()))
        .collect()
}
