//! **gridwalk-core**: core types for weighted grid pathfinding.
//!
//! This crate provides the foundational types used across the *gridwalk*
//! workspace: geometry primitives and the grid node model searched by
//! `gridwalk-paths`.

pub mod geom;
pub mod grid;
pub mod node;

pub use geom::{Point, Range};
pub use grid::NodeGrid;
pub use node::{GridNode, NodeKind};
