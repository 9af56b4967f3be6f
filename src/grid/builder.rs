//! Graph construction: rectangle insertion, line splicing and intersection
//! synthesis.
//!
//! All mutation funnels through [`GridGraph::insert_node`], which keeps the
//! graph planar: collinear overlaps are fused onto one run, and perpendicular
//! line crossings are resolved into explicit intersection nodes. Errors out
//! of these methods indicate a bug in the caller or the algorithm, never bad
//! layout input; callers should treat them as fatal.

use glam::IVec2;
use tracing::{debug, trace};

use crate::error::{GraphError, GraphResult};
use crate::grid::direction::{Axis, Direction, DIRECTIONS};
use crate::grid::graph::{GridGraph, Node, NodeId};
use crate::grid::range::within_range_exclusive;

impl GridGraph {
    /// Builds a closed axis-aligned rectangle with `root` as the top-left
    /// corner.
    ///
    /// Corners are looked up by coordinate and reused when they already exist,
    /// which is what lets overlapping rectangles fuse into a single planar
    /// graph. `width` and `height` count grid cells, so a 15x20 rectangle
    /// spans x in `root.x..=root.x+14` and y in `root.y..=root.y+19`.
    ///
    /// # Errors
    ///
    /// Returns an error if `root` is not in the graph, if either dimension is
    /// smaller than 1, or if an insertion uncovers an inconsistency in the
    /// graph.
    pub fn add_rectangle(&mut self, root: NodeId, width: i32, height: i32) -> GraphResult<()> {
        if width < 1 || height < 1 {
            return Err(GraphError::DegenerateRectangle { width, height });
        }
        let root_pos = self.get_node(root).ok_or(GraphError::NodeNotFound(root))?.position;

        debug!(width, height, x = root_pos.x, y = root_pos.y, "Adding rectangle");

        let top_right = self.get_or_create_node(root, root_pos.x + (width - 1), root_pos.y);
        self.insert_node(Direction::Right, root, top_right)?;

        let top_right_pos = self.position(top_right);
        let bottom_right = self.get_or_create_node(root, top_right_pos.x, top_right_pos.y + (height - 1));
        self.insert_node(Direction::Down, top_right, bottom_right)?;

        let bottom_right_pos = self.position(bottom_right);
        let bottom_left = self.get_or_create_node(root, bottom_right_pos.x - (width - 1), bottom_right_pos.y);
        self.insert_node(Direction::Left, bottom_right, bottom_left)?;

        self.insert_node(Direction::Up, bottom_left, root)
    }

    /// Returns the reachable node at `(x, y)`, creating a fresh unconnected
    /// node if none exists.
    ///
    /// Coordinate lookup (not identity) is used here and only here; reusing
    /// the hit is what upholds the one-node-per-position invariant.
    pub fn get_or_create_node(&mut self, root: NodeId, x: i32, y: i32) -> NodeId {
        let target = IVec2::new(x, y);
        match self.find_first(root, |_, node| node.position == target) {
            Some(existing) => existing,
            None => self.add_node(Node::new(x, y)),
        }
    }

    /// Inserts `node` into the graph along `direction` from `root`.
    ///
    /// The central splice algorithm. If `root` already has a neighbor on that
    /// side, the line is walked until `node` slots in between two existing
    /// nodes; the mirrored case (the inserted node already mid-line from the
    /// other side) walks from the other end. A genuinely new edge is connected
    /// directly and then cleaned up: the node is fused onto any existing
    /// straight run it landed on, and every perpendicular line the new segment
    /// crosses gains an explicit intersection node spliced into both lines.
    ///
    /// # Errors
    ///
    /// Returns an error on an out-of-graph handle, on a misaligned edge, or if
    /// two distinct nodes turn out to share a position. The latter means the
    /// one-node-per-position invariant was already broken and the graph state
    /// is a bug, not bad input.
    pub fn insert_node(&mut self, direction: Direction, root: NodeId, node: NodeId) -> GraphResult<()> {
        if !self.contains(root) {
            return Err(GraphError::NodeNotFound(root));
        }
        if !self.contains(node) {
            return Err(GraphError::NodeNotFound(node));
        }

        let mut direction = direction;
        let mut root = root;
        let mut node = node;

        loop {
            if root == node {
                // Degenerate span; nothing to connect
                return Ok(());
            }

            if let Some(existing) = self.neighbor(root, direction) {
                if existing == node {
                    return Ok(());
                }

                let node_pos = self[node];
                let existing_pos = self[existing];
                if node_pos.farther_than(direction, &existing_pos) {
                    // Keep walking down the line before splicing
                    root = existing;
                } else if node_pos.closer_than(direction, &existing_pos) {
                    trace!(root, node, existing, ?direction, "Splicing node into edge");
                    self.connect(root, direction, node)?;
                    self.connect(existing, direction.opposite(), node)?;
                    return Ok(());
                } else {
                    return Err(GraphError::DuplicatePosition {
                        a: node,
                        b: existing,
                        x: node_pos.position.x,
                        y: node_pos.position.y,
                    });
                }
            } else if self.neighbor(node, direction.opposite()).is_some() {
                // The inserted node is already mid-line on the far side; walk
                // from that end with the roles exchanged.
                direction = direction.opposite();
                std::mem::swap(&mut root, &mut node);
            } else {
                trace!(root, node, ?direction, "Connecting new edge");
                self.connect(root, direction, node)?;
                self.fuse_collinear(root, node)?;
                self.resolve_crossings(direction, root, node)?;
                return Ok(());
            }
        }
    }

    /// Whether `point` lies strictly between `a` and `b` on the straight line
    /// they span.
    fn point_splits_edge(&self, point: IVec2, a: NodeId, b: NodeId) -> bool {
        let a = self.position(a);
        let b = self.position(b);
        if point.x == a.x && point.x == b.x {
            within_range_exclusive(point.y, a.y, b.y)
        } else if point.y == a.y && point.y == b.y {
            within_range_exclusive(point.x, a.x, b.x)
        } else {
            false
        }
    }

    /// Fuses a freshly inserted node onto an existing straight run it landed
    /// on, instead of leaving a stray point just off the line.
    ///
    /// Scans the graph read-only for the first edge (breadth-first, slot
    /// order) whose interior contains the node's position, then splices the
    /// node into that edge.
    fn fuse_collinear(&mut self, root: NodeId, inserted: NodeId) -> GraphResult<()> {
        let inserted_pos = self.position(inserted);

        let mut hit: Option<(NodeId, Direction)> = None;
        self.find_first(root, |id, _| {
            for &dir in &DIRECTIONS {
                if let Some(adjacent) = self.neighbor(id, dir) {
                    if self.point_splits_edge(inserted_pos, adjacent, id) {
                        hit = Some((id, dir));
                        return true;
                    }
                }
            }
            false
        });

        if let Some((id, dir)) = hit {
            trace!(inserted, edge_from = id, ?dir, "Fusing node onto collinear run");
            self.insert_node(dir, id, inserted)?;
        }
        Ok(())
    }

    /// Whether `point` sits strictly inside the span of the segment that ends
    /// at `line_end` and extends `length` cells back along `direction`.
    fn within_segment_span(point: IVec2, line_end: IVec2, direction: Direction, length: i32) -> bool {
        match direction {
            Direction::Up => point.y > line_end.y && point.y < line_end.y + length,
            Direction::Left => point.x > line_end.x && point.x < line_end.x + length,
            Direction::Down => point.y < line_end.y && point.y > line_end.y - length,
            Direction::Right => point.x < line_end.x && point.x > line_end.x - length,
        }
    }

    /// Resolves crossings between the new segment `root`-`inserted` and every
    /// perpendicular edge it passes through.
    ///
    /// Candidate edges are snapshotted in breadth-first order, then each is
    /// re-validated against current adjacency before the intersection node is
    /// synthesized, because earlier splices reroute edges mid-pass. Each hit
    /// materializes (or reuses) the node at the crossing coordinate and
    /// splices it into both lines.
    fn resolve_crossings(&mut self, direction: Direction, root: NodeId, inserted: NodeId) -> GraphResult<()> {
        let root_pos = self.position(root);
        let inserted_pos = self.position(inserted);
        let insert_axis = direction.axis();
        let line_length = match insert_axis {
            Axis::X => (root_pos.x - inserted_pos.x).abs(),
            Axis::Y => (root_pos.y - inserted_pos.y).abs(),
        };

        let mut candidates = Vec::new();
        self.traverse_breadth_first(root, |id, _| {
            for &dir in &DIRECTIONS {
                if self.neighbor(id, dir).is_some() {
                    candidates.push((id, dir));
                }
            }
        });

        for (id, dir) in candidates {
            // Splices from earlier hits may have rerouted this slot
            let Some(adjacent) = self.neighbor(id, dir) else { continue };

            let crossed_axis = dir.axis();
            if crossed_axis == insert_axis {
                continue;
            }

            let node_pos = self.position(id);
            let adjacent_pos = self.position(adjacent);

            let passes_through = match crossed_axis {
                Axis::Y => within_range_exclusive(inserted_pos.y, adjacent_pos.y, node_pos.y),
                Axis::X => within_range_exclusive(inserted_pos.x, adjacent_pos.x, node_pos.x),
            };
            if !passes_through {
                continue;
            }
            if !Self::within_segment_span(node_pos, inserted_pos, direction, line_length) {
                continue;
            }

            let crossing = match insert_axis {
                Axis::Y => self.get_or_create_node(root, inserted_pos.x, node_pos.y),
                Axis::X => self.get_or_create_node(root, node_pos.x, inserted_pos.y),
            };

            debug!(
                x = self.position(crossing).x,
                y = self.position(crossing).y,
                "Resolved line crossing"
            );

            self.insert_node(dir, id, crossing)?;
            self.insert_node(direction, root, crossing)?;
        }

        Ok(())
    }
}
