mod common;

use campusnav_lib::output::walking_minutes;
use campusnav_lib::{
    load_campus, plan_route, plan_tree, RenderMode, Route, RouteSummary, TreeRequest, TreeSummary,
};

use common::fixture_map_path;

#[test]
fn route_summary_annotates_buildings() {
    let campus = load_campus(fixture_map_path()).expect("fixture loads");
    let route = plan_route(&campus, "Library", "Gym").expect("route exists");
    let summary = RouteSummary::from_route(&campus, &route).expect("summary");

    assert_eq!(summary.start, "Library");
    assert_eq!(summary.goal, "Gym");
    assert_eq!(summary.hops, 5);
    assert_eq!(summary.walking_minutes, walking_minutes(route.total_distance));
    assert!(summary.steps[0].building);
    assert!(!summary.steps[1].building);
    assert!(summary.steps.iter().all(|step| step.coordinate.is_some()));

    let buildings: Vec<_> = summary
        .buildings_only()
        .steps
        .into_iter()
        .map(|step| step.id)
        .collect();
    assert_eq!(buildings, vec!["Library", "Science Hall", "Student Center", "Gym"]);
}

#[test]
fn route_summary_serializes_expected_fields() {
    let campus = load_campus(fixture_map_path()).expect("fixture loads");
    let route = plan_route(&campus, "Science Hall", "Student Center").expect("route exists");
    let summary = RouteSummary::from_route(&campus, &route).expect("summary");

    let value = serde_json::to_value(&summary).expect("serializes");
    assert_eq!(value["start"], "Science Hall");
    assert_eq!(value["hops"], 1);
    assert_eq!(value["steps"][1]["id"], "Student Center");
    assert_eq!(value["steps"][1]["building"], true);
    assert!(value["steps"][0]["coordinate"]["lon"].is_number());
}

#[test]
fn empty_route_cannot_be_summarised() {
    let campus = load_campus(fixture_map_path()).expect("fixture loads");
    let route = Route {
        steps: Vec::new(),
        total_distance: 0.0,
    };
    assert!(RouteSummary::from_route(&campus, &route).is_err());
}

#[test]
fn plain_render_lists_every_step() {
    let campus = load_campus(fixture_map_path()).expect("fixture loads");
    let route = plan_route(&campus, "Library", "Gym").expect("route exists");
    let summary = RouteSummary::from_route(&campus, &route).expect("summary");

    let text = summary.render(RenderMode::PlainText);
    assert!(text.starts_with("Route: Library -> Gym (5 hops"));
    assert!(text.contains("node_1"));
    assert_eq!(text.lines().count(), 7);
}

#[test]
fn tree_summary_separates_building_edges() {
    let campus = load_campus(fixture_map_path()).expect("fixture loads");
    let tree = plan_tree(&campus, &TreeRequest::kruskal()).expect("tree");
    let summary = TreeSummary::from_tree(&campus, &tree);

    assert_eq!(summary.all_edges.len(), 5);
    assert_eq!(summary.edge_count, 5);
    assert_eq!(summary.buildings_connected_directly, 1);
    let direct = &summary.edges[0];
    let mut pair = [direct.node1.as_str(), direct.node2.as_str()];
    pair.sort();
    assert_eq!(pair, ["Science Hall", "Student Center"]);
    assert!((summary.building_edges_weight - direct.weight).abs() < 1e-9);

    let value = serde_json::to_value(&summary).expect("serializes");
    assert_eq!(value["algorithm"], "kruskal");
    assert_eq!(value["pruned"], true);
    assert_eq!(value["all_edges"].as_array().map(Vec::len), Some(5));
}

#[test]
fn tree_render_mentions_direct_connections() {
    let campus = load_campus(fixture_map_path()).expect("fixture loads");
    let tree = plan_tree(&campus, &TreeRequest::prim().with_start("Library")).expect("tree");
    let text = TreeSummary::from_tree(&campus, &tree).render(RenderMode::PlainText);

    assert!(text.starts_with("Minimum spanning tree (prim, pruned): 5 edges"));
    assert!(text.contains("Direct building connections: 1"));
}
