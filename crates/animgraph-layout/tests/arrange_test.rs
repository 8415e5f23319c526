use animgraph_layout::{
    LayoutError, LayoutOptions, LayoutStrategy, Point, RankDir, VisualEdge, VisualNode, arrange,
    arrange_with_options, grid_arrange, layered,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::BTreeMap;

fn node(id: &str) -> VisualNode {
    VisualNode::new(id, 450.0, 180.0)
}

fn edge(i: usize, source: &str, target: &str) -> VisualEdge {
    VisualEdge::new(format!("edge-{i}"), source, target, "input")
}

fn positions(nodes: &[VisualNode]) -> BTreeMap<String, (f64, f64)> {
    nodes
        .iter()
        .map(|n| (n.id.clone(), (n.position.x, n.position.y)))
        .collect()
}

fn overlaps(a: &VisualNode, b: &VisualNode) -> bool {
    a.position.x < b.right()
        && b.position.x < a.right()
        && a.position.y < b.bottom()
        && b.position.y < a.bottom()
}

#[test]
fn arrange_places_a_chain_left_to_right_and_packs_the_rest() {
    let nodes = vec![node("A"), node("B"), node("C")];
    let edges = vec![edge(0, "A", "B")];

    let arranged = arrange(&nodes, &edges);

    assert_eq!(
        arranged.iter().map(|n| n.id.as_str()).collect::<Vec<_>>(),
        vec!["A", "B", "C"]
    );
    assert_eq!(
        positions(&arranged),
        BTreeMap::from([
            ("A".to_string(), (100.0, 100.0)),
            ("B".to_string(), (850.0, 100.0)),
            ("C".to_string(), (1700.0, 0.0)),
        ])
    );
}

#[test]
fn arrange_returns_connected_nodes_before_disconnected_ones() {
    let nodes = vec![node("lonely"), node("A"), node("other"), node("B")];
    let edges = vec![edge(0, "A", "B")];

    let arranged = arrange(&nodes, &edges);

    assert_eq!(
        arranged.iter().map(|n| n.id.as_str()).collect::<Vec<_>>(),
        vec!["A", "B", "lonely", "other"]
    );
    let b = &arranged[1];
    for packed in &arranged[2..] {
        assert!(packed.position.x >= b.right() + 400.0);
        assert_eq!(packed.position.y % 500.0, 0.0);
    }
}

#[test]
fn arrange_with_only_disconnected_nodes_packs_from_the_gap() {
    let nodes: Vec<VisualNode> = ["a", "b", "c", "d", "e"].iter().map(|id| node(id)).collect();

    let result = arrange_with_options(&nodes, &[], &LayoutOptions::default());

    assert_eq!(result.strategy, LayoutStrategy::Layered);
    assert_eq!(
        result
            .nodes
            .iter()
            .map(|n| (n.position.x, n.position.y))
            .collect::<Vec<_>>(),
        vec![
            (400.0, 0.0),
            (900.0, 0.0),
            (1400.0, 0.0),
            (400.0, 500.0),
            (900.0, 500.0),
        ]
    );
}

#[test]
fn arrange_of_nothing_is_empty() {
    assert!(arrange(&[], &[]).is_empty());
}

#[test]
fn edges_to_unknown_nodes_do_not_connect_anything() {
    let nodes = vec![node("A")];
    let edges = vec![edge(0, "A", "ghost")];

    let arranged = arrange(&nodes, &edges);

    assert_eq!(arranged.len(), 1);
    assert_eq!(arranged[0].position, Point::new(400.0, 0.0));
}

#[test]
fn inputs_sit_left_of_the_node_that_consumes_them() {
    let nodes = vec![node("R"), node("B"), node("A"), node("W")];
    let edges = vec![
        edge(0, "A", "B"),
        edge(1, "W", "B"),
        edge(2, "B", "R"),
        edge(3, "A", "R"),
    ];

    let arranged = arrange(&nodes, &edges);
    let pos = positions(&arranged);

    assert!(pos["A"].0 < pos["B"].0);
    assert!(pos["W"].0 < pos["B"].0);
    assert!(pos["B"].0 < pos["R"].0);
    assert_eq!(pos["A"].0, pos["W"].0);
}

#[test]
fn rank_direction_controls_the_flow_axis() {
    let nodes = vec![node("A"), node("B")];
    let edges = vec![edge(0, "A", "B")];

    let at = |rankdir: RankDir| {
        let opts = LayoutOptions::default().with_rankdir(rankdir);
        let p = layered(&nodes, &edges, &opts).unwrap();
        (p["A"], p["B"])
    };

    let (a, b) = at(RankDir::TB);
    assert_eq!(a, Point::new(100.0, 100.0));
    assert_eq!(b, Point::new(100.0, 580.0));

    let (a, b) = at(RankDir::BT);
    assert_eq!(a.x, b.x);
    assert!(a.y > b.y);

    let (a, b) = at(RankDir::LR);
    assert_eq!(a, Point::new(100.0, 100.0));
    assert_eq!(b, Point::new(850.0, 100.0));

    let (a, b) = at(RankDir::RL);
    assert_eq!(a.y, b.y);
    assert!(a.x > b.x);
}

#[test]
fn cycles_still_get_a_layered_layout() {
    let nodes = vec![node("A"), node("B"), node("C")];
    let edges = vec![edge(0, "A", "B"), edge(1, "B", "C"), edge(2, "C", "A")];

    let result = arrange_with_options(&nodes, &edges, &LayoutOptions::default());

    assert_eq!(result.strategy, LayoutStrategy::Layered);
    assert_eq!(result.nodes.len(), 3);
    for (i, a) in result.nodes.iter().enumerate() {
        assert!(a.position.is_finite());
        for b in &result.nodes[i + 1..] {
            assert!(!overlaps(a, b), "{} overlaps {}", a.id, b.id);
        }
    }
}

#[test]
fn self_loops_and_parallel_edges_are_tolerated() {
    let nodes = vec![node("A"), node("B")];
    let edges = vec![
        edge(0, "A", "A"),
        edge(1, "A", "B"),
        edge(2, "A", "B"),
    ];

    let result = arrange_with_options(&nodes, &edges, &LayoutOptions::default());

    assert_eq!(result.strategy, LayoutStrategy::Layered);
    let pos = result.positions();
    assert!(pos["A"].x < pos["B"].x);
}

#[test]
fn long_edges_keep_rank_order() {
    let nodes = vec![node("a"), node("b"), node("c"), node("d")];
    let edges = vec![
        edge(0, "a", "b"),
        edge(1, "b", "c"),
        edge(2, "c", "d"),
        edge(3, "a", "d"),
    ];

    let pos = layered(&nodes, &edges, &LayoutOptions::default()).unwrap();

    assert!(pos["a"].x < pos["b"].x);
    assert!(pos["b"].x < pos["c"].x);
    assert!(pos["c"].x < pos["d"].x);
}

#[test]
fn invalid_sizes_are_reported_and_fall_back_to_the_grid() {
    let nodes = vec![node("A"), VisualNode::new("B", -1.0, 180.0), node("C")];
    let edges = vec![edge(0, "A", "B")];

    assert_eq!(
        layered(&nodes[..2], &edges, &LayoutOptions::default()),
        Err(LayoutError::InvalidNodeSize {
            id: "B".to_string(),
            width: -1.0,
            height: 180.0,
        })
    );

    let result = arrange_with_options(&nodes, &edges, &LayoutOptions::default());
    assert_eq!(result.strategy, LayoutStrategy::Grid);
    assert_eq!(result.nodes, grid_arrange(&nodes));
}

#[test]
fn non_finite_coordinates_fall_back_to_the_grid() {
    let nodes = vec![node("A"), node("B")];
    let edges = vec![edge(0, "A", "B")];
    let opts = LayoutOptions {
        ranksep: f64::NAN,
        ..Default::default()
    };

    assert!(matches!(
        layered(&nodes, &edges, &opts),
        Err(LayoutError::NonFiniteCoordinate { .. })
    ));

    let result = arrange_with_options(&nodes, &edges, &opts);
    assert_eq!(result.strategy, LayoutStrategy::Grid);
    assert_eq!(
        result
            .nodes
            .iter()
            .map(|n| (n.position.x, n.position.y))
            .collect::<Vec<_>>(),
        vec![(0.0, 0.0), (650.0, 0.0)]
    );
}

#[test]
fn bounds_enclose_every_node() {
    let nodes = vec![node("A"), node("B"), node("C")];
    let edges = vec![edge(0, "A", "B")];

    let result = arrange_with_options(&nodes, &edges, &LayoutOptions::default());

    assert_eq!(result.bounds.min_x, 100.0);
    assert_eq!(result.bounds.min_y, 0.0);
    assert_eq!(result.bounds.max_x, 2150.0);
    assert_eq!(result.bounds.max_y, 280.0);
}

#[test]
fn arrange_is_deterministic() {
    let nodes: Vec<VisualNode> = (0..12).map(|i| node(&format!("n{i}"))).collect();
    let edges: Vec<VisualEdge> = (1..12)
        .map(|i| edge(i, &format!("n{i}"), &format!("n{}", i / 3)))
        .collect();

    assert_eq!(arrange(&nodes, &edges), arrange(&nodes, &edges));
}

#[test]
fn random_graphs_layout_without_overlap_or_fallback() {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    for _ in 0..64 {
        let n = rng.gen_range(1..=24);
        let nodes: Vec<VisualNode> = (0..n).map(|i| node(&format!("n{i}"))).collect();
        let edge_count = rng.gen_range(0..=n * 2);
        let edges: Vec<VisualEdge> = (0..edge_count)
            .map(|i| {
                let s = rng.gen_range(0..n);
                let t = rng.gen_range(0..n);
                edge(i, &format!("n{s}"), &format!("n{t}"))
            })
            .collect();

        let result = arrange_with_options(&nodes, &edges, &LayoutOptions::default());

        assert_eq!(result.strategy, LayoutStrategy::Layered);
        assert_eq!(result.nodes.len(), n);
        let mut ids: Vec<&str> = result.nodes.iter().map(|n| n.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), n);

        for (i, a) in result.nodes.iter().enumerate() {
            assert!(a.position.is_finite(), "{a:?}");
            for b in &result.nodes[i + 1..] {
                assert!(!overlaps(a, b), "{a:?} overlaps {b:?}");
            }
        }
    }
}

#[test]
fn layout_options_fill_missing_fields_with_defaults() {
    let opts: LayoutOptions =
        serde_json::from_value(serde_json::json!({ "rankdir": "TB", "nodesep": 50.0 })).unwrap();

    assert_eq!(opts.rankdir, RankDir::TB);
    assert_eq!(opts.nodesep, 50.0);
    assert_eq!(opts.ranksep, 300.0);
    assert_eq!(opts.disconnected_gap, 400.0);
}
