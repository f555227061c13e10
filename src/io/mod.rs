//! Input/output: command line, errors, animation, progress and file export

/// Terminal animation of generation steps
pub mod animation;
/// Command-line parsing and orchestration
pub mod cli;
/// Constants and defaults
pub mod configuration;
/// Error types
pub mod error;
/// Raster file export
pub mod image;
/// Step progress bar
pub mod progress;
/// GIF capture of the generation process
pub mod visualization;
