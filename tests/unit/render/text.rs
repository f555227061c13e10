//! Tests for box-drawing text rendering

#[cfg(test)]
mod tests {
    use mazegen::render::TextRenderer;
    use mazegen::render::text::{render_text, wall_mask};
    use mazegen::spatial::{Cell, Direction, Grid, Position};
    use mazegen::{Algorithm, MazeConfig, MazeError, generate};
    use mazegen::algorithm::observer::NoObserver;

    fn grid(fill: Cell) -> Grid {
        let Ok(grid) = Grid::new(5, 5, fill) else {
            unreachable!("small grids always allocate");
        };
        grid
    }

    // Tests a solid grid where every wall touches four walls
    #[test]
    fn test_render_all_walls() {
        let Ok(text) = render_text(&grid(Cell::Wall)) else {
            unreachable!("solid grids always render");
        };
        let expected = concat!(
            "┏┳┳┳┳┳┓\n",
            "┣╋╋╋╋╋┫\n",
            "┣╋╋╋╋╋┫\n",
            "┣╋╋╋╋╋┫\n",
            "┣╋╋╋╋╋┫\n",
            "┣╋╋╋╋╋┫\n",
            "┗┻┻┻┻┻┛\n",
        );
        assert_eq!(text, expected);
    }

    // Tests an open grid where the frame never joins inward
    #[test]
    fn test_render_all_floor() {
        let Ok(text) = render_text(&grid(Cell::Empty)) else {
            unreachable!("open grids always render");
        };
        let expected = concat!(
            "┏━━━━━┓\n",
            "┃     ┃\n",
            "┃     ┃\n",
            "┃     ┃\n",
            "┃     ┃\n",
            "┃     ┃\n",
            "┗━━━━━┛\n",
        );
        assert_eq!(text, expected);
    }

    // Tests a horizontal wall joining both sides of the frame
    #[test]
    fn test_render_horizontal_wall() {
        let mut grid = grid(Cell::Empty);
        for x in 0..5 {
            grid.set(Position::new(x, 2), Cell::Wall);
        }

        assert_eq!(wall_mask(&grid, Position::new(2, 2)), 0b1010);
        assert_eq!(wall_mask(&grid, Position::new(0, 2)), 0b1010);

        let Ok(text) = render_text(&grid) else {
            unreachable!("connected walls always render");
        };
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.get(3), Some(&"┣━━━━━┫"));
        assert_eq!(lines.get(2), Some(&"┃     ┃"));
    }

    // Tests the glyph chosen for every non-zero neighbour mask
    #[test]
    fn test_glyph_for_each_mask() {
        let glyphs = [
            '╹', '╺', '┗', '╻', '┃', '┏', '┣', '╸', '┛', '━', '┻', '┓', '┫', '┳', '╋',
        ];
        let center = Position::new(2, 2);

        for (mask, expected) in (1u8..=15).zip(glyphs) {
            let mut grid = grid(Cell::Empty);
            grid.set(center, Cell::Wall);
            for direction in Direction::ALL {
                if mask & direction.bit() != 0 {
                    grid.set(center.step(direction, 1), Cell::Wall);
                }
            }
            assert_eq!(wall_mask(&grid, center), mask);

            let Ok(text) = render_text(&grid) else {
                unreachable!("walls touching the center always render");
            };
            let glyph = text.lines().nth(3).and_then(|line| line.chars().nth(3));
            assert_eq!(glyph, Some(expected), "mask {mask:#06b}");
        }
    }

    // Tests that frontier cells draw as walls
    #[test]
    fn test_frontier_renders_as_wall() {
        let mut with_frontier = grid(Cell::Wall);
        with_frontier.set(Position::new(2, 2), Cell::Frontier);

        assert_eq!(
            render_text(&with_frontier).ok(),
            render_text(&grid(Cell::Wall)).ok()
        );
    }

    // Tests that an isolated wall cell is reported with its coordinates
    #[test]
    fn test_isolated_wall_is_invalid() {
        let mut grid = grid(Cell::Empty);
        grid.set(Position::new(2, 2), Cell::Wall);

        assert_eq!(wall_mask(&grid, Position::new(2, 2)), 0);
        assert!(matches!(
            render_text(&grid),
            Err(MazeError::InvalidRenderState { x: 2, y: 2 })
        ));
    }

    // Tests the framed shape of generated mazes and renderer reuse
    #[test]
    fn test_generated_maze_shape_and_reuse() {
        let mut renderer = TextRenderer::new();

        for algorithm in [Algorithm::Growth, Algorithm::Backtracker, Algorithm::Division] {
            let config = MazeConfig::new(11, 7, algorithm).with_seed(21);
            let Ok(maze) = generate(&config, &mut NoObserver) else {
                unreachable!("small mazes always generate");
            };

            let Ok(first) = renderer.render(maze.grid()).map(str::to_owned) else {
                unreachable!("generated mazes always render");
            };
            assert!(first.ends_with('\n'));
            assert!(!first.ends_with("\n\n"));

            let lines: Vec<&str> = first.lines().collect();
            assert_eq!(lines.len(), 9, "{algorithm:?}");
            for line in &lines {
                assert_eq!(line.chars().count(), 13, "{algorithm:?}: {line}");
            }

            assert_eq!(renderer.render(maze.grid()).ok(), Some(first.as_str()));
        }
    }
}
