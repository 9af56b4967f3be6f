//! Read-only graph traversal primitives.
//!
//! All traversals use explicit worklists rather than call-stack recursion, so
//! depth is bounded by memory and not the stack. Visited tracking is keyed by
//! node handle, which is the node's identity. Queries starting from a handle
//! that is not in the graph are not errors; they return empty or default
//! results.

use std::collections::VecDeque;
use std::fmt;

use crate::grid::direction::DIRECTIONS;
use crate::grid::graph::{GridGraph, Node, NodeId};

/// The minimal axis-aligned box containing every node reachable from a root.
///
/// Derived by full traversal and never persisted; recompute when needed.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct AreaBounds {
    pub min_x: i32,
    pub max_x: i32,
    pub min_y: i32,
    pub max_y: i32,
}

impl AreaBounds {
    /// The number of grid columns the bounds span.
    pub fn width(&self) -> i32 {
        self.max_x - self.min_x + 1
    }

    /// The number of grid rows the bounds span.
    pub fn height(&self) -> i32 {
        self.max_y - self.min_y + 1
    }
}

impl fmt::Display for AreaBounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "minX={}, maxX={}, minY={}, maxY={}",
            self.min_x, self.max_x, self.min_y, self.max_y
        )
    }
}

impl GridGraph {
    /// Visits every node reachable from `start` exactly once, breadth-first.
    ///
    /// Neighbors are expanded in slot order (Up, Left, Down, Right). The
    /// visitor may carry side effects but must not mutate adjacency while the
    /// traversal is running.
    pub fn traverse_breadth_first<F>(&self, start: NodeId, mut visit: F)
    where
        F: FnMut(NodeId, &Node),
    {
        if !self.contains(start) {
            return;
        }

        let mut visited = vec![false; self.node_count()];
        let mut queue = VecDeque::new();
        visited[start] = true;
        queue.push_back(start);

        while let Some(id) = queue.pop_front() {
            visit(id, &self[id]);

            for &dir in &DIRECTIONS {
                if let Some(next) = self.neighbor(id, dir) {
                    if !visited[next] {
                        visited[next] = true;
                        queue.push_back(next);
                    }
                }
            }
        }
    }

    /// Visits every node reachable from `start` exactly once, depth-first.
    ///
    /// Same visitor contract as [`Self::traverse_breadth_first`].
    pub fn traverse_depth_first<F>(&self, start: NodeId, mut visit: F)
    where
        F: FnMut(NodeId, &Node),
    {
        if !self.contains(start) {
            return;
        }

        let mut visited = vec![false; self.node_count()];
        let mut stack = vec![start];

        while let Some(id) = stack.pop() {
            if visited[id] {
                continue;
            }
            visited[id] = true;

            visit(id, &self[id]);

            // Reverse slot order so the first slot is explored first
            for &dir in DIRECTIONS.iter().rev() {
                if let Some(next) = self.neighbor(id, dir) {
                    if !visited[next] {
                        stack.push(next);
                    }
                }
            }
        }
    }

    /// Returns the first node in breadth-first order satisfying `predicate`,
    /// or `None` if nothing matches or `start` is not in the graph.
    pub fn find_first<P>(&self, start: NodeId, mut predicate: P) -> Option<NodeId>
    where
        P: FnMut(NodeId, &Node) -> bool,
    {
        if !self.contains(start) {
            return None;
        }

        let mut visited = vec![false; self.node_count()];
        let mut queue = VecDeque::new();
        visited[start] = true;
        queue.push_back(start);

        while let Some(id) = queue.pop_front() {
            if predicate(id, &self[id]) {
                return Some(id);
            }

            for &dir in &DIRECTIONS {
                if let Some(next) = self.neighbor(id, dir) {
                    if !visited[next] {
                        visited[next] = true;
                        queue.push_back(next);
                    }
                }
            }
        }

        None
    }

    /// Collects every reachable node satisfying `predicate`, in breadth-first
    /// order. The visited guard already deduplicates by identity.
    pub fn collect_nodes<P>(&self, start: NodeId, mut predicate: P) -> Vec<NodeId>
    where
        P: FnMut(NodeId, &Node) -> bool,
    {
        let mut matches = Vec::new();
        self.traverse_breadth_first(start, |id, node| {
            if predicate(id, node) {
                matches.push(id);
            }
        });
        matches
    }

    /// Computes the bounding box of every node reachable from `start`.
    ///
    /// An invalid `start` yields the default zero bounds.
    pub fn area_bounds(&self, start: NodeId) -> AreaBounds {
        let Some(start_node) = self.get_node(start) else {
            return AreaBounds::default();
        };

        let mut bounds = AreaBounds {
            min_x: start_node.position.x,
            max_x: start_node.position.x,
            min_y: start_node.position.y,
            max_y: start_node.position.y,
        };

        self.traverse_breadth_first(start, |_, node| {
            bounds.min_x = bounds.min_x.min(node.position.x);
            bounds.max_x = bounds.max_x.max(node.position.x);
            bounds.min_y = bounds.min_y.min(node.position.y);
            bounds.max_y = bounds.max_y.max(node.position.y);
        });

        bounds
    }
}
