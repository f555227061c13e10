//! Structural analysis of generated grids

/// Connectivity, cycle and dead-end statistics
pub mod topology;

pub use topology::Topology;
