//! Orthogonal grid graph construction and traversal.

pub mod builder;
pub mod direction;
pub mod graph;
pub mod range;
pub mod traversal;

pub use direction::{Axis, Direction, DIRECTIONS};
pub use graph::{Adjacency, GridGraph, Node, NodeId};
pub use traversal::AreaBounds;
