//! Single-channel raster rendering with a one-pixel frame

use image::{GrayImage, Luma};

use crate::io::configuration::{FLOOR_INTENSITY, WALL_INTENSITY};
use crate::spatial::{Grid, Position};

/// Row order of the produced pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum RasterOrigin {
    /// First stored row is the top of the maze
    #[default]
    TopLeft,
    /// First stored row is the bottom of the maze
    BottomLeft,
}

/// Render `grid` as a `(width + 2) x (height + 2)` grayscale image
///
/// Walls and the frame are `WALL_INTENSITY`, floor is `FLOOR_INTENSITY`.
pub fn render_raster(grid: &Grid, origin: RasterOrigin) -> GrayImage {
    let width = grid.width() + 2;
    let height = grid.height() + 2;

    GrayImage::from_fn(width as u32, height as u32, |px, py| {
        let row = match origin {
            RasterOrigin::TopLeft => py as usize,
            RasterOrigin::BottomLeft => height - 1 - py as usize,
        };
        // Frame pixels map to column or row -1 and past the end, both off-grid
        let cell = Position::new((px as usize).wrapping_sub(1), row.wrapping_sub(1));

        if grid.is_wall(cell) {
            Luma([WALL_INTENSITY])
        } else {
            Luma([FLOOR_INTENSITY])
        }
    })
}
