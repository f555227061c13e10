//! Raster export of a finished grid

use std::path::Path;

use image::ImageFormat;

use crate::io::error::{MazeError, Result};
use crate::render::{RasterOrigin, render_raster};
use crate::spatial::Grid;

/// Container used when the output path has no recognised extension
pub const DEFAULT_FORMAT: ImageFormat = ImageFormat::Tga;

/// Export the grid as an uncompressed grayscale image
///
/// The container is chosen from the file extension, falling back to TGA.
///
/// # Errors
///
/// Returns an error if:
/// - The parent directory cannot be created
/// - The image cannot be encoded or saved to the specified path
pub fn export_raster(grid: &Grid, origin: RasterOrigin, output_path: &Path) -> Result<()> {
    let image = render_raster(grid, origin);
    let format = ImageFormat::from_path(output_path).unwrap_or(DEFAULT_FORMAT);

    if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| MazeError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    image
        .save_with_format(output_path, format)
        .map_err(|e| MazeError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })?;

    log::debug!(
        "wrote {}x{} {format:?} raster to {}",
        image.width(),
        image.height(),
        output_path.display()
    );
    Ok(())
}
