//! Arena-backed orthogonal grid graph.
//!
//! Nodes are stored in a vector and addressed by their index, which doubles as
//! their identity for cycle detection. Each node carries four adjacency slots,
//! one per compass direction; an undirected edge is a pair of mutual slots.

use glam::IVec2;

use crate::error::{GraphError, GraphResult};
use crate::grid::direction::{Axis, Direction, DIRECTIONS};

/// A unique identifier for a node, represented by its index in the graph's storage.
pub type NodeId = usize;

/// A graph vertex pinned to an integer grid position.
///
/// The position is fixed for the node's lifetime; only adjacency changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Node {
    /// The grid coordinates of the node.
    pub position: IVec2,
}

impl Node {
    pub fn new(x: i32, y: i32) -> Self {
        Node {
            position: IVec2::new(x, y),
        }
    }

    /// Whether this node is farther along `direction` than `other`.
    ///
    /// Comparisons are direction-signed: advancing Up means decreasing y, so
    /// the node with the smaller y is the farther one, and so on for the
    /// other three directions.
    pub fn farther_than(&self, direction: Direction, other: &Node) -> bool {
        match direction {
            Direction::Up => self.position.y < other.position.y,
            Direction::Left => self.position.x < other.position.x,
            Direction::Down => self.position.y > other.position.y,
            Direction::Right => self.position.x > other.position.x,
        }
    }

    /// Whether this node is closer along `direction` than `other`.
    ///
    /// Equal coordinates are neither farther nor closer.
    pub fn closer_than(&self, direction: Direction, other: &Node) -> bool {
        other.farther_than(direction, self)
    }

    /// Value equality on coordinates, ignoring identity and adjacency.
    pub fn coordinates_match(&self, other: &Node) -> bool {
        self.position == other.position
    }
}

/// Per-node adjacency slots, one per compass direction.
///
/// This structure is the adjacency list entry for each node, providing O(1)
/// access to the neighbor in any cardinal direction.
#[derive(Debug, Default, Clone, Copy)]
pub struct Adjacency {
    /// Neighbor above this node, if any.
    pub up: Option<NodeId>,
    /// Neighbor to the left of this node, if any.
    pub left: Option<NodeId>,
    /// Neighbor below this node, if any.
    pub down: Option<NodeId>,
    /// Neighbor to the right of this node, if any.
    pub right: Option<NodeId>,
}

impl Adjacency {
    /// Retrieves the neighbor in the specified direction, if it exists.
    pub fn get(&self, direction: Direction) -> Option<NodeId> {
        match direction {
            Direction::Up => self.up,
            Direction::Left => self.left,
            Direction::Down => self.down,
            Direction::Right => self.right,
        }
    }

    /// Sets the neighbor slot for the specified direction, overwriting any
    /// existing occupant.
    pub fn set(&mut self, direction: Direction, node: Option<NodeId>) {
        match direction {
            Direction::Up => self.up = node,
            Direction::Left => self.left = node,
            Direction::Down => self.down = node,
            Direction::Right => self.right = node,
        }
    }

    /// Iterates over occupied slots in slot order.
    pub fn neighbors(&self) -> impl Iterator<Item = (Direction, NodeId)> + '_ {
        DIRECTIONS.iter().filter_map(|&dir| self.get(dir).map(|id| (dir, id)))
    }

    /// The number of occupied slots.
    pub fn count(&self) -> usize {
        self.neighbors().count()
    }
}

/// An orthogonal graph of grid nodes using an adjacency list representation.
///
/// Nodes are stored in a vector, and their indices serve as their `NodeId`.
/// Adjacency is kept in a parallel vector of [`Adjacency`] slot sets. The
/// graph only grows; nodes are never removed.
#[derive(Debug)]
pub struct GridGraph {
    nodes: Vec<Node>,
    adjacency: Vec<Adjacency>,
}

impl GridGraph {
    /// Creates a new, empty graph.
    pub fn new() -> Self {
        GridGraph {
            nodes: Vec::new(),
            adjacency: Vec::new(),
        }
    }

    /// Adds a new, unconnected node to the graph and returns its ID.
    pub fn add_node(&mut self, node: Node) -> NodeId {
        let id = self.nodes.len();
        self.nodes.push(node);
        self.adjacency.push(Adjacency::default());
        id
    }

    /// Retrieves an immutable reference to a node.
    pub fn get_node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id)
    }

    /// Retrieves the adjacency slots of a node.
    pub fn get_adjacency(&self, id: NodeId) -> Option<&Adjacency> {
        self.adjacency.get(id)
    }

    /// The total number of nodes in the graph.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Whether `id` refers to a node in this graph.
    pub fn contains(&self, id: NodeId) -> bool {
        id < self.nodes.len()
    }

    /// The neighbor of `id` in `direction`, if both exist.
    pub fn neighbor(&self, id: NodeId, direction: Direction) -> Option<NodeId> {
        self.adjacency.get(id)?.get(direction)
    }

    /// The position of a node known to exist.
    ///
    /// Internal shorthand for code paths that have already validated `id`.
    pub(crate) fn position(&self, id: NodeId) -> IVec2 {
        self.nodes[id].position
    }

    /// Connects two existing nodes with a mutual pair of adjacency slots.
    ///
    /// Both half-edges are written together so no half-connected state is ever
    /// observable. The edge must be consistent with the grid: `to` has to sit
    /// strictly farther along `direction` than `from`, on the same row or
    /// column.
    ///
    /// # Errors
    ///
    /// Returns an error if either node does not exist, or if the nodes are not
    /// aligned with `direction`.
    pub fn connect(&mut self, from: NodeId, direction: Direction, to: NodeId) -> GraphResult<()> {
        let from_node = *self.get_node(from).ok_or(GraphError::NodeNotFound(from))?;
        let to_node = *self.get_node(to).ok_or(GraphError::NodeNotFound(to))?;

        let aligned = match direction.axis() {
            Axis::X => from_node.position.y == to_node.position.y,
            Axis::Y => from_node.position.x == to_node.position.x,
        };
        if !aligned || !to_node.farther_than(direction, &from_node) {
            return Err(GraphError::MisalignedEdge { from, to, direction });
        }

        self.adjacency[from].set(direction, Some(to));
        self.adjacency[to].set(direction.opposite(), Some(from));
        Ok(())
    }
}

impl Default for GridGraph {
    fn default() -> Self {
        Self::new()
    }
}

impl std::ops::Index<NodeId> for GridGraph {
    type Output = Node;

    fn index(&self, id: NodeId) -> &Node {
        self.get_node(id).unwrap_or_else(|| panic!("Node {id} not in graph"))
    }
}
