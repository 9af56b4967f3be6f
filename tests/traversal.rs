use orthogrid::grid::{AreaBounds, Direction, GridGraph, Node};
use speculoos::prelude::*;

mod common;

use common::graph_with_root;

#[test]
fn test_breadth_first_visits_every_node_once() {
    let (mut graph, root) = graph_with_root();
    graph.add_rectangle(root, 15, 20).unwrap();

    let mut visits = Vec::new();
    graph.traverse_breadth_first(root, |id, _| visits.push(id));

    assert_eq!(visits.len(), 4);
    let mut deduped = visits.clone();
    deduped.sort_unstable();
    deduped.dedup();
    assert_eq!(deduped.len(), visits.len());
}

#[test]
fn test_depth_first_visits_every_node_once() {
    let (mut graph, root) = graph_with_root();
    graph.add_rectangle(root, 15, 20).unwrap();
    graph.add_rectangle(root, 10, 10).unwrap();

    let mut visits = Vec::new();
    graph.traverse_depth_first(root, |id, _| visits.push(id));

    assert_eq!(visits.len(), graph.node_count());
    let mut deduped = visits.clone();
    deduped.sort_unstable();
    deduped.dedup();
    assert_eq!(deduped.len(), visits.len());
}

#[test]
fn test_traversal_total_from_any_start() {
    let (mut graph, root) = graph_with_root();
    graph.add_rectangle(root, 15, 20).unwrap();
    graph.add_rectangle(root, 10, 10).unwrap();

    // A closed graph is fully reachable from every node
    for start in 0..graph.node_count() {
        let mut count = 0;
        graph.traverse_breadth_first(start, |_, _| count += 1);
        assert_eq!(count, graph.node_count(), "from node {start}");
    }
}

#[test]
fn test_traversal_tolerates_invalid_start() {
    let graph = GridGraph::new();
    let mut visited = false;
    graph.traverse_breadth_first(0, |_, _| visited = true);
    graph.traverse_depth_first(0, |_, _| visited = true);
    assert_that(&visited).is_false();
}

#[test]
fn test_find_first_returns_bfs_match() {
    let (mut graph, root) = graph_with_root();
    graph.add_rectangle(root, 15, 20).unwrap();

    let hit = graph.find_first(root, |_, node| node.position.y == 19);
    let position = graph.get_node(hit.unwrap()).unwrap().position;
    assert_eq!(position.y, 19);

    assert_eq!(graph.find_first(root, |_, node| node.position.x == 99), None);
}

#[test]
fn test_find_first_on_empty_graph() {
    let graph = GridGraph::new();
    assert_eq!(graph.find_first(0, |_, _| true), None);
}

#[test]
fn test_collect_nodes_deduplicates() {
    let (mut graph, root) = graph_with_root();
    graph.add_rectangle(root, 15, 20).unwrap();

    let top_row = graph.collect_nodes(root, |_, node| node.position.y == 0);
    assert_eq!(top_row.len(), 2);

    let all = graph.collect_nodes(root, |_, _| true);
    assert_eq!(all.len(), 4);

    let none = graph.collect_nodes(root, |_, _| false);
    assert_that(&none).is_empty();
}

#[test]
fn test_area_bounds_defaults_for_invalid_start() {
    let graph = GridGraph::new();
    assert_eq!(graph.area_bounds(0), AreaBounds::default());
}

#[test]
fn test_area_bounds_tracks_reachable_nodes_only() {
    let mut graph = GridGraph::new();
    let root = graph.add_node(Node::new(2, 3));
    let right = graph.add_node(Node::new(8, 3));
    graph.connect(root, Direction::Right, right).unwrap();

    // A disconnected node does not widen the bounds
    graph.add_node(Node::new(-50, 40));

    let bounds = graph.area_bounds(root);
    assert_eq!(bounds.min_x, 2);
    assert_eq!(bounds.max_x, 8);
    assert_eq!(bounds.min_y, 3);
    assert_eq!(bounds.max_y, 3);
    assert_eq!(bounds.width(), 7);
    assert_eq!(bounds.height(), 1);
}

#[test]
fn test_area_bounds_display() {
    let bounds = AreaBounds {
        min_x: 0,
        max_x: 14,
        min_y: 0,
        max_y: 19,
    };
    assert_eq!(bounds.to_string(), "minX=0, maxX=14, minY=0, maxY=19");
}
