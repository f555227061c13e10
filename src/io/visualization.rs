//! Frame capture and GIF generation for generation visualization

use std::path::Path;

use image::{DynamicImage, Frame, GrayImage};

use crate::algorithm::observer::StepObserver;
use crate::io::configuration::{FINAL_FRAME_HOLD, VIEWER_MIN_FRAME_DELAY_MS};
use crate::io::error::{MazeError, Result, invalid_parameter};
use crate::render::{RasterOrigin, render_raster};
use crate::spatial::Grid;

/// Captures raster snapshots of the grid while it is generated
///
/// Every `stride`-th step is kept. The finished maze is added with
/// `capture_final` so the animation always ends on the complete grid.
pub struct VisualizationCapture {
    frames: Vec<GrayImage>,
    stride: usize,
    seen: usize,
}

impl VisualizationCapture {
    /// Capture every `stride`-th step; a stride of zero is treated as one
    pub fn new(stride: usize) -> Self {
        Self {
            frames: Vec::new(),
            stride: stride.max(1),
            seen: 0,
        }
    }

    /// Record the finished grid as the last frame
    pub fn capture_final(&mut self, grid: &Grid) {
        self.frames.push(render_raster(grid, RasterOrigin::TopLeft));
    }

    /// Number of captured frames
    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    /// Captured frames in order
    pub fn frames(&self) -> &[GrayImage] {
        &self.frames
    }

    /// Export the captured frames as a GIF with automatic frame skipping
    ///
    /// If `frame_delay_ms` is below what viewers reliably support, frames are
    /// dropped so the apparent animation speed is kept. For example a 10ms
    /// delay against a 50ms viewer minimum keeps every 5th frame. The last
    /// frame is held longer.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - No frames were captured
    /// - File system operations fail
    /// - GIF encoding fails
    pub fn export_gif(&self, output_path: &Path, frame_delay_ms: u32) -> Result<()> {
        if self.frames.is_empty() {
            return Err(invalid_parameter(
                "visualize",
                &output_path.display(),
                &"no frames captured for visualization",
            ));
        }

        let effective_delay_ms = frame_delay_ms.max(VIEWER_MIN_FRAME_DELAY_MS);
        let skip_factor = if frame_delay_ms < VIEWER_MIN_FRAME_DELAY_MS {
            VIEWER_MIN_FRAME_DELAY_MS.div_ceil(frame_delay_ms.max(1)) as usize
        } else {
            1
        };

        let frames = self.select_frames(skip_factor, effective_delay_ms);

        if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| MazeError::FileSystem {
                path: parent.to_path_buf(),
                operation: "create directory",
                source: e,
            })?;
        }

        let file = std::fs::File::create(output_path).map_err(|e| MazeError::FileSystem {
            path: output_path.to_path_buf(),
            operation: "create file",
            source: e,
        })?;

        let mut encoder = image::codecs::gif::GifEncoder::new(file);
        encoder
            .encode_frames(frames)
            .map_err(|e| MazeError::ImageExport {
                path: output_path.to_path_buf(),
                source: e,
            })?;

        Ok(())
    }

    fn select_frames(&self, skip_factor: usize, delay_ms: u32) -> Vec<Frame> {
        let last = self.frames.len().saturating_sub(1);
        self.frames
            .iter()
            .enumerate()
            .filter(|(index, _)| index % skip_factor == 0 || *index == last)
            .map(|(index, snapshot)| {
                let delay = if index == last {
                    delay_ms * FINAL_FRAME_HOLD
                } else {
                    delay_ms
                };
                Frame::from_parts(
                    DynamicImage::ImageLuma8(snapshot.clone()).to_rgba8(),
                    0,
                    0,
                    image::Delay::from_numer_denom_ms(delay, 1),
                )
            })
            .collect()
    }
}

impl StepObserver for VisualizationCapture {
    fn on_step(&mut self, grid: &Grid) -> Result<()> {
        if self.seen % self.stride == 0 {
            self.frames.push(render_raster(grid, RasterOrigin::TopLeft));
        }
        self.seen += 1;
        Ok(())
    }
}
