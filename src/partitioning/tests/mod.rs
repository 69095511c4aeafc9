use super::*;
use crate::io::InMemoryEdges;

#[test]
fn dispatch_runs_every_strategy() {
    let edges = vec![(1, 2), (2, 3), (3, 1), (1, 4)];
    for strategy in [
        Strategy::EdgeCut,
        Strategy::RandomVertexCut,
        Strategy::GreedyVertexCut,
        Strategy::HybridVertexCut,
    ] {
        let cfg = PartitionerConfig {
            n_parts: 2,
            strategy,
            ..Default::default()
        };
        let t = partition(&mut InMemoryEdges::new(edges.clone()), &cfg)
            .unwrap_or_else(|e| panic!("{strategy:?} failed: {e}"));
        assert_eq!(t.len(), 2);
        assert_eq!(t.master_total(), 4, "{strategy:?}");
    }
}

#[test]
fn config_validation() {
    let mut cfg = PartitionerConfig {
        n_parts: 0,
        ..Default::default()
    };
    assert!(matches!(
        cfg.validate(),
        Err(PartitionError::InvalidConfiguration(_))
    ));
    cfg.n_parts = 2;
    cfg.degree_threshold = -3;
    // only the hybrid strategy reads the threshold
    assert!(cfg.validate().is_ok());
    cfg.strategy = Strategy::HybridVertexCut;
    assert!(cfg.validate().is_err());
}

#[test]
fn config_from_json_fills_defaults() {
    let cfg: PartitionerConfig =
        serde_json::from_str(r#"{"n_parts": 8, "strategy": "greedy_vertex_cut"}"#).unwrap();
    assert_eq!(cfg.n_parts, 8);
    assert_eq!(cfg.strategy, Strategy::GreedyVertexCut);
    assert_eq!(cfg.degree_threshold, 3);
    assert_eq!(cfg.progress_interval, 100_000_000);
}

#[test]
fn invalid_config_touches_no_edges() {
    let mut src = InMemoryEdges::new(vec![(1, 2)]);
    let cfg = PartitionerConfig {
        n_parts: 0,
        strategy: Strategy::EdgeCut,
        ..Default::default()
    };
    assert!(partition(&mut src, &cfg).is_err());
    // cursor untouched: the first edge is still next
    assert_eq!(crate::io::EdgeSource::next_edge(&mut src).unwrap(), Some((1, 2)));
}
