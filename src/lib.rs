//! Perfect maze generation over a rectangular grid
//!
//! Three generators share one grid model: a randomized depth-first
//! backtracker, a randomized growth algorithm and recursive division.
//! Finished (or partial) grids render as Unicode box-drawing text or as a
//! grayscale raster.

#![forbid(unsafe_code)]

/// Maze generators, step observers and generation entry points
pub mod algorithm;
/// Structural analysis of generated grids
pub mod analysis;
/// Input/output operations and error handling
pub mod io;
/// Text and raster renderers
pub mod render;
/// Grid storage, positions and regions
pub mod spatial;

pub use algorithm::{Algorithm, Maze, MazeConfig, create_maze, generate, generate_with_rng};
pub use io::error::{MazeError, Result};
