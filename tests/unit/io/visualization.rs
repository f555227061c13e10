//! Tests for frame capture and GIF export

#[cfg(test)]
mod tests {
    use mazegen::io::visualization::VisualizationCapture;
    use mazegen::{Algorithm, MazeConfig, MazeError, generate};
    use tempfile::TempDir;

    fn captured(stride: usize) -> VisualizationCapture {
        let mut capture = VisualizationCapture::new(stride);
        let config = MazeConfig::new(5, 5, Algorithm::Backtracker).with_seed(9);
        let Ok(maze) = generate(&config, &mut capture) else {
            unreachable!("small mazes always generate");
        };
        capture.capture_final(maze.grid());
        capture
    }

    // Tests that every step plus the final grid is captured
    #[test]
    fn test_captures_every_step() {
        let capture = captured(1);
        assert_eq!(capture.frame_count(), 10);
        assert!(
            capture
                .frames()
                .iter()
                .all(|frame| frame.dimensions() == (7, 7))
        );
    }

    // Tests that the stride thins captured frames
    #[test]
    fn test_stride_skips_steps() {
        // Steps 0, 4 and 8 of nine, then the final grid
        assert_eq!(captured(4).frame_count(), 4);
        assert_eq!(captured(0).frame_count(), 10);
    }

    // Tests writing the animation into a nested directory
    #[test]
    fn test_export_gif_creates_file() {
        let Ok(temp_dir) = TempDir::new() else {
            unreachable!("temporary directories are available in tests");
        };
        let path = temp_dir.path().join("frames").join("maze.gif");

        assert!(captured(1).export_gif(&path, 20).is_ok());
        let size = std::fs::metadata(&path).map(|meta| meta.len()).unwrap_or(0);
        assert!(size > 0);
    }

    // Tests that exporting without frames is rejected
    #[test]
    fn test_export_without_frames_fails() {
        let Ok(temp_dir) = TempDir::new() else {
            unreachable!("temporary directories are available in tests");
        };
        let path = temp_dir.path().join("empty.gif");

        let result = VisualizationCapture::new(1).export_gif(&path, 20);
        assert!(matches!(
            result,
            Err(MazeError::InvalidParameter {
                parameter: "visualize",
                ..
            })
        ));
        assert!(!path.exists());
    }
}
