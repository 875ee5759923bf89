mod common;

use campusnav_lib::{
    build_campus, kruskal, load_campus, plan_tree, prim, prune_tree, Error, Feature, MapDocument,
    TreeAlgorithm, TreeRequest,
};

use common::{abc_campus, c, fixture_map_path};

#[test]
fn scenario_raw_tree_keeps_stub_until_pruned() {
    let campus = abc_campus();

    let raw = plan_tree(&campus, &TreeRequest::kruskal().unpruned()).expect("tree");
    assert_eq!(raw.edge_count(), 3);
    assert!(raw.contains_edge("B", "node_0"));
    assert!(!raw.pruned);

    let pruned = plan_tree(&campus, &TreeRequest::kruskal()).expect("tree");
    assert!(pruned.pruned);
    assert_eq!(pruned.edge_count(), 2);
    assert!(pruned.contains_edge("A", "B"));
    assert!(pruned.contains_edge("B", "C"));
    assert!(!pruned.contains_edge("B", "node_0"));
}

#[test]
fn kruskal_and_prim_agree_on_total_weight() {
    let campus = load_campus(fixture_map_path()).expect("fixture loads");
    let graph = campus.graph();
    let start = graph.index_of("Library");

    let by_kruskal = kruskal(graph);
    let by_prim = prim(graph, start);

    // Observatory is isolated: Kruskal returns a forest over two components,
    // Prim spans the Library component only. Both give N-1 edges there.
    assert_eq!(by_kruskal.edge_count(), graph.len() - 2);
    assert_eq!(by_prim.edge_count(), graph.len() - 2);
    assert!((by_kruskal.total_weight - by_prim.total_weight).abs() < 1e-6);
}

#[test]
fn spanning_tree_drops_the_longest_cycle_edge() {
    let campus = load_campus(fixture_map_path()).expect("fixture loads");
    let tree = kruskal(campus.graph());
    // Library - node_4 is the heaviest edge on the only cycle.
    assert!(!tree.contains_edge("Library", "node_4"));
    assert!(tree.contains_edge("node_4", "Student Center"));
}

#[test]
fn fixture_pruning_removes_dead_ends() {
    let campus = load_campus(fixture_map_path()).expect("fixture loads");

    for request in [TreeRequest::kruskal(), TreeRequest::prim().with_start("Library")] {
        let tree = plan_tree(&campus, &request).expect("tree");
        assert_eq!(tree.edge_count(), 5, "{:?}", request.algorithm);
        for stub in ["node_2", "node_3", "node_4"] {
            assert!(tree.edges.iter().all(|edge| edge.a != stub && edge.b != stub));
        }
    }
}

#[test]
fn pruning_twice_changes_nothing() {
    let campus = load_campus(fixture_map_path()).expect("fixture loads");
    let once = plan_tree(&campus, &TreeRequest::kruskal()).expect("tree");
    let twice = prune_tree(&once, |id| campus.is_building(id));
    assert_eq!(once, twice);
}

#[test]
fn prim_start_is_resolved_by_name() {
    let campus = load_campus(fixture_map_path()).expect("fixture loads");
    let tree = plan_tree(&campus, &TreeRequest::prim().with_start("gym").unpruned())
        .expect("tree");
    assert_eq!(tree.algorithm, TreeAlgorithm::Prim);
    assert!(tree.edges[0].a == "Gym");

    let error = plan_tree(&campus, &TreeRequest::prim().with_start("Gymm")).expect_err("unknown");
    assert!(matches!(error, Error::UnknownNode { .. }));
}

#[test]
fn prim_from_isolated_building_is_empty() {
    let campus = load_campus(fixture_map_path()).expect("fixture loads");
    let tree = plan_tree(&campus, &TreeRequest::prim().with_start("Observatory")).expect("tree");
    assert!(tree.is_empty());
    assert_eq!(tree.total_weight, 0.0);
}

#[test]
fn prim_without_start_skips_leading_isolated_building() {
    let doc = MapDocument::new(vec![
        Feature::point(Some("Observatory"), c(5.0, 5.0)),
        Feature::point(Some("A"), c(0.0, 0.0)),
        Feature::point(Some("B"), c(0.0, 0.001)),
        Feature::point(Some("C"), c(0.001, 0.001)),
        Feature::line(vec![c(0.0, 0.0), c(0.0, 0.001), c(0.001, 0.001)]),
    ]);
    let campus = build_campus(&doc).expect("builds");

    let by_prim = plan_tree(&campus, &TreeRequest::prim()).expect("tree");
    let by_kruskal = plan_tree(&campus, &TreeRequest::kruskal()).expect("tree");

    assert_eq!(by_prim.edge_count(), 2);
    assert!(by_prim.contains_edge("A", "B"));
    assert!(by_prim.contains_edge("B", "C"));
    assert!((by_prim.total_weight - by_kruskal.total_weight).abs() < 1e-9);
}
