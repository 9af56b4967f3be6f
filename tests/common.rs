#![allow(dead_code)]

use std::collections::HashMap;

use orthogrid::grid::{GridGraph, Node, NodeId, DIRECTIONS};

/// Looks up the reachable node at the given coordinates.
pub fn node_at(graph: &GridGraph, root: NodeId, x: i32, y: i32) -> Option<NodeId> {
    graph.find_first(root, |_, node| node.position.x == x && node.position.y == y)
}

/// Builds a graph holding a single root node at the origin.
pub fn graph_with_root() -> (GridGraph, NodeId) {
    let mut graph = GridGraph::new();
    let root = graph.add_node(Node::new(0, 0));
    (graph, root)
}

/// The number of nodes reachable from `root`.
pub fn reachable_count(graph: &GridGraph, root: NodeId) -> usize {
    let mut count = 0;
    graph.traverse_breadth_first(root, |_, _| count += 1);
    count
}

/// Asserts that every half-edge reachable from `root` has its mirror.
pub fn assert_mutual_adjacency(graph: &GridGraph, root: NodeId) {
    graph.traverse_breadth_first(root, |id, _| {
        for &dir in &DIRECTIONS {
            if let Some(neighbor) = graph.neighbor(id, dir) {
                assert_eq!(
                    graph.neighbor(neighbor, dir.opposite()),
                    Some(id),
                    "node {id} -> {neighbor} ({dir:?}) has no mirror edge"
                );
            }
        }
    });
}

/// Asserts that no two distinct reachable nodes share a position.
pub fn assert_no_duplicate_positions(graph: &GridGraph, root: NodeId) {
    let mut seen: HashMap<(i32, i32), NodeId> = HashMap::new();
    graph.traverse_breadth_first(root, |id, node| {
        let key = (node.position.x, node.position.y);
        if let Some(&other) = seen.get(&key) {
            panic!("nodes {other} and {id} both occupy {key:?}");
        }
        seen.insert(key, id);
    });
}
