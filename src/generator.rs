//! Sample layout orchestration.
//!
//! Owns the decision of which rectangles to add and in what order; order
//! matters, since later insertions fuse with or cross earlier ones.

use tracing::debug;

use crate::error::LayoutResult;
use crate::grid::{GridGraph, Node, NodeId, DIRECTIONS};

/// Drives graph construction for a sample layout.
pub struct LayoutGenerator;

impl LayoutGenerator {
    /// Builds the sample layout: three overlapping rectangles anchored at the
    /// origin, then dumps the adjacency of the result at debug level.
    pub fn generate() -> LayoutResult<(GridGraph, NodeId)> {
        let mut graph = GridGraph::new();
        let root = graph.add_node(Node::new(0, 0));

        graph.add_rectangle(root, 15, 20)?;
        graph.add_rectangle(root, 10, 10)?;
        graph.add_rectangle(root, 5, 15)?;

        Self::dump_graph(&graph, root);

        Ok((graph, root))
    }

    /// Logs every reachable node with its four adjacency slots, breadth-first.
    pub fn dump_graph(graph: &GridGraph, root: NodeId) {
        graph.traverse_breadth_first(root, |id, node| {
            debug!(
                "({:2}, {:2}) : {}",
                node.position.x,
                node.position.y,
                Self::adjacency_summary(graph, id)
            );
        });
    }

    /// Formats a node's slots as `[U (x, y), L -, D -, R (x, y)]`.
    fn adjacency_summary(graph: &GridGraph, id: NodeId) -> String {
        let labels = ['U', 'L', 'D', 'R'];
        let slots: Vec<String> = DIRECTIONS
            .iter()
            .zip(labels)
            .map(|(&dir, label)| match graph.neighbor(id, dir) {
                Some(neighbor) => {
                    let pos = graph[neighbor].position;
                    format!("{label} ({:2}, {:2})", pos.x, pos.y)
                }
                None => format!("{label} -"),
            })
            .collect();
        format!("[{}]", slots.join(", "))
    }
}
