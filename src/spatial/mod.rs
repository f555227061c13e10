//! Spatial data structures for the maze grid
//!
//! This module contains:
//! - The cell buffer and its bounds-aware accessors
//! - Positions, directions and subdivision regions

/// Positions, directions and regions
pub mod geometry;
/// Cell buffer and wall/bounds predicates
pub mod grid;

pub use geometry::{Direction, Position, Region};
pub use grid::{Cell, Grid};
