//! Procedural orthogonal-grid layout library crate.

pub mod error;
pub mod generator;
pub mod grid;
pub mod render;
