mod util;
use util::*;

use hashbrown::HashMap;
use pway_partition::partitioning::hybrid_vertex_cut::route;
use pway_partition::prelude::*;

#[test]
fn random_cut_deals_sample_in_thirds() {
    let edges = sample_edges();
    let t = partition_random_vertex_cut(&mut InMemoryEdges::new(edges.clone()), 3).unwrap();
    let want = [[0, 3, 6], [1, 4, 7], [2, 5, 8]];
    for (p, idx) in want.iter().enumerate() {
        let dealt: Vec<Edge> = idx.iter().map(|&i| edges[i]).collect();
        assert_eq!(t.partition(p).unwrap().edges().as_slice(), Some(&dealt[..]));
    }
    // vertex 1 is first seen in edge 0
    assert_eq!(t.master_of(1), Some(0));
}

#[test]
fn hybrid_sample_against_literal_degrees() {
    let edges = sample_edges();
    let mut degree: HashMap<VertexId, i64> = HashMap::new();
    for &(s, d) in &edges {
        *degree.entry(s).or_default() += 1;
        *degree.entry(d).or_default() += 1;
    }
    let t = partition_hybrid_vertex_cut(&mut InMemoryEdges::new(edges.clone()), 3, 2).unwrap();
    for p in t.iter() {
        for &(s, d) in p.edges().as_slice().unwrap() {
            let want = if degree[&d] > 2 { route(s, 3) } else { route(d, 3) };
            assert_eq!(p.id(), want, "edge ({s},{d})");
        }
    }
    assert_eq!(t.iter().map(|p| p.edge_count()).sum::<u64>(), 9);
}

#[test]
fn every_strategy_masters_each_vertex_once() {
    let edges = sample_edges();
    let tables = [
        partition_edge_cut(&mut InMemoryEdges::new(edges.clone()), 3).unwrap(),
        partition_random_vertex_cut(&mut InMemoryEdges::new(edges.clone()), 3).unwrap(),
        partition_greedy_vertex_cut(&mut InMemoryEdges::new(edges.clone()), 3).unwrap(),
        partition_hybrid_vertex_cut(&mut InMemoryEdges::new(edges.clone()), 3, 2).unwrap(),
    ];
    for t in &tables {
        t.validate_invariants().unwrap();
        for v in 1..=6 {
            let owners = t.iter().filter(|p| p.is_master(v)).count();
            assert_eq!(owners, 1, "vertex {v}");
        }
    }
}

#[test]
fn greedy_sample_is_balanced() {
    let t = partition_greedy_vertex_cut(&mut InMemoryEdges::new(sample_edges()), 3).unwrap();
    assert!(t.iter().all(|p| p.edge_count() == 3));
    assert!((edge_balance(&t) - 1.0).abs() < 1e-9);
}
