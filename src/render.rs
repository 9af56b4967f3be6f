//! Box-drawing renderer for grid graphs.
//!
//! Produces a textual debug map: nodes become junction glyphs picked from
//! their adjacency pattern, edges become straight connector runs. Intended for
//! logging and inspection only.

use bitflags::bitflags;
use tracing::debug;

use crate::grid::direction::{Axis, Direction, DIRECTIONS};
use crate::grid::graph::{GridGraph, NodeId};
use crate::grid::traversal::AreaBounds;

bitflags! {
    /// Which adjacency slots of a node are occupied.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct Connections: u8 {
        const UP = 1 << 0;
        const LEFT = 1 << 1;
        const DOWN = 1 << 2;
        const RIGHT = 1 << 3;
    }
}

impl From<Direction> for Connections {
    fn from(dir: Direction) -> Self {
        match dir {
            Direction::Up => Connections::UP,
            Direction::Left => Connections::LEFT,
            Direction::Down => Connections::DOWN,
            Direction::Right => Connections::RIGHT,
        }
    }
}

const HORIZONTAL: char = '─';
const VERTICAL: char = '│';
/// Fallback for endpoints and pass-through points.
const POINT: char = '•';

/// Junction glyphs keyed by the exact adjacency pattern. Evaluated top to
/// bottom, first match wins; nodes matching nothing fall back to [`POINT`].
const NODE_GLYPHS: [(Connections, char); 11] = [
    (Connections::UP.union(Connections::LEFT), '┘'),
    (Connections::UP.union(Connections::RIGHT), '└'),
    (Connections::LEFT.union(Connections::DOWN), '┐'),
    (Connections::DOWN.union(Connections::RIGHT), '┌'),
    (Connections::UP.union(Connections::DOWN).union(Connections::RIGHT), '├'),
    (Connections::UP.union(Connections::LEFT).union(Connections::DOWN), '┤'),
    (Connections::LEFT.union(Connections::DOWN).union(Connections::RIGHT), '┬'),
    (Connections::UP.union(Connections::LEFT).union(Connections::RIGHT), '┴'),
    (Connections::all(), '┼'),
    (Connections::LEFT.union(Connections::RIGHT), '•'),
    (Connections::UP.union(Connections::DOWN), '•'),
];

/// Renders a grid graph as a box-drawing character map.
///
/// The matrix doubles the horizontal resolution: every pair of adjacent node
/// columns gets one extra column in between for the connecting glyph.
pub struct LayoutRenderer {
    bounds: AreaBounds,
    matrix: Vec<Vec<char>>,
}

impl LayoutRenderer {
    /// Renders every node and edge reachable from `root` into a string, one
    /// matrix row per line.
    ///
    /// A `root` that is not part of the graph yields an empty string.
    pub fn render(graph: &GridGraph, root: NodeId) -> String {
        if !graph.contains(root) {
            return String::new();
        }

        let mut renderer = Self::new(graph, root);
        renderer.draw_edges(graph, root);
        renderer.draw_nodes(graph, root);
        renderer.into_text()
    }

    fn new(graph: &GridGraph, root: NodeId) -> Self {
        let bounds = graph.area_bounds(root);
        let width = ((bounds.max_x - bounds.min_x) * 2 + 1) as usize;
        let height = bounds.height() as usize;

        debug!(%bounds, width, height, "Allocating render matrix");

        LayoutRenderer {
            bounds,
            matrix: vec![vec![' '; width]; height],
        }
    }

    /// Writes the glyph for a node cell, mapping grid x to the doubled column.
    fn write_node_cell(&mut self, x: i32, y: i32, glyph: char) {
        let column = ((x - self.bounds.min_x) * 2) as usize;
        let row = (y - self.bounds.min_y) as usize;
        self.matrix[row][column] = glyph;
    }

    /// Draws every edge once by only following Down and Right slots.
    fn draw_edges(&mut self, graph: &GridGraph, root: NodeId) {
        let mut edges = Vec::new();
        graph.traverse_breadth_first(root, |id, _| {
            for dir in [Direction::Down, Direction::Right] {
                if let Some(target) = graph.neighbor(id, dir) {
                    edges.push((id, dir, target));
                }
            }
        });

        for (from, dir, to) in edges {
            let from_pos = graph[from].position;
            let to_pos = graph[to].position;

            match dir.axis() {
                Axis::Y => {
                    for y in (from_pos.y + 1)..to_pos.y {
                        self.write_node_cell(from_pos.x, y, VERTICAL);
                    }
                }
                Axis::X => {
                    let row = (from_pos.y - self.bounds.min_y) as usize;
                    let lower = ((from_pos.x - self.bounds.min_x) * 2 + 1) as usize;
                    let upper = ((to_pos.x - self.bounds.min_x) * 2) as usize;
                    for column in lower..upper {
                        self.matrix[row][column] = HORIZONTAL;
                    }
                }
            }
        }
    }

    /// Draws the junction glyph of every node over the edge runs.
    fn draw_nodes(&mut self, graph: &GridGraph, root: NodeId) {
        let mut cells = Vec::new();
        graph.traverse_breadth_first(root, |id, node| {
            cells.push((node.position, Self::node_glyph(graph, id)));
        });

        for (position, glyph) in cells {
            self.write_node_cell(position.x, position.y, glyph);
        }
    }

    /// Picks the box-drawing glyph matching a node's adjacency pattern.
    fn node_glyph(graph: &GridGraph, id: NodeId) -> char {
        let mut pattern = Connections::empty();
        for &dir in &DIRECTIONS {
            if graph.neighbor(id, dir).is_some() {
                pattern |= Connections::from(dir);
            }
        }

        NODE_GLYPHS
            .iter()
            .find(|(candidate, _)| *candidate == pattern)
            .map(|&(_, glyph)| glyph)
            .unwrap_or(POINT)
    }

    fn into_text(self) -> String {
        let mut text = String::with_capacity(self.matrix.len() * (self.matrix.first().map_or(0, Vec::len) + 1));
        for (index, row) in self.matrix.iter().enumerate() {
            if index > 0 {
                text.push('\n');
            }
            text.extend(row.iter());
        }
        text
    }
}
