//! Centralized error types for the layout toolkit.
//!
//! This module defines all error types used throughout the crate,
//! providing a consistent error handling approach.

use crate::grid::graph::NodeId;

/// Main error type for layout operations.
///
/// This is the primary error type that should be used in public APIs.
#[derive(thiserror::Error, Debug)]
pub enum LayoutError {
    #[error("Graph error: {0}")]
    Graph(#[from] GraphError),
}

/// Errors raised by graph construction and mutation.
///
/// Every variant here indicates a bug in the calling code or in the insertion
/// algorithm itself, not bad user input; callers should treat these as fatal.
#[derive(thiserror::Error, Debug)]
pub enum GraphError {
    #[error("Node not found in graph: {0}")]
    NodeNotFound(NodeId),

    #[error("Nodes {a} and {b} both occupy ({x}, {y})")]
    DuplicatePosition { a: NodeId, b: NodeId, x: i32, y: i32 },

    #[error("Edge from {from} to {to} is not aligned with direction {direction:?}")]
    MisalignedEdge {
        from: NodeId,
        to: NodeId,
        direction: crate::grid::direction::Direction,
    },

    #[error("Rectangle dimensions must be at least 1x1, got {width}x{height}")]
    DegenerateRectangle { width: i32, height: i32 },
}

/// Result type for layout operations.
pub type LayoutResult<T> = Result<T, LayoutError>;

/// Result type for graph operations.
pub type GraphResult<T> = Result<T, GraphError>;
