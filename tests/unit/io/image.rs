//! Tests for raster export

#[cfg(test)]
mod tests {
    use mazegen::algorithm::observer::NoObserver;
    use mazegen::io::image::export_raster;
    use mazegen::render::{RasterOrigin, render_raster};
    use mazegen::{Algorithm, MazeConfig, generate};
    use tempfile::TempDir;

    // Tests that exported files decode back to the rendered pixels
    #[test]
    fn test_export_round_trips_pixels() {
        let Ok(temp_dir) = TempDir::new() else {
            unreachable!("temporary directories are available in tests");
        };
        let config = MazeConfig::new(13, 9, Algorithm::Division).with_seed(5);
        let Ok(maze) = generate(&config, &mut NoObserver) else {
            unreachable!("small mazes always generate");
        };

        for (name, origin) in [
            ("maze.tga", RasterOrigin::TopLeft),
            ("maze.png", RasterOrigin::BottomLeft),
        ] {
            let path = temp_dir.path().join(name);
            assert!(export_raster(maze.grid(), origin, &path).is_ok(), "{name}");

            let Ok(decoded) = image::open(&path) else {
                unreachable!("{name} was just written");
            };
            assert_eq!(decoded.to_luma8(), render_raster(maze.grid(), origin), "{name}");
        }
    }

    // Tests that missing parent directories are created
    #[test]
    fn test_export_creates_parent_directories() {
        let Ok(temp_dir) = TempDir::new() else {
            unreachable!("temporary directories are available in tests");
        };
        let config = MazeConfig::new(5, 5, Algorithm::Growth).with_seed(5);
        let Ok(maze) = generate(&config, &mut NoObserver) else {
            unreachable!("small mazes always generate");
        };
        let path = temp_dir.path().join("a").join("b").join("maze.tga");

        assert!(export_raster(maze.grid(), RasterOrigin::TopLeft, &path).is_ok());
        assert!(path.exists());
    }
}
