//! Renderers turning a grid into text or pixels

/// Grayscale raster output
pub mod raster;
/// Box-drawing text output
pub mod text;

pub use raster::{RasterOrigin, render_raster};
pub use text::{TextRenderer, render_text};
