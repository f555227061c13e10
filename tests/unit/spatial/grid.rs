//! Tests for grid construction, bounds handling and node iteration

#[cfg(test)]
mod tests {
    use mazegen::spatial::grid::effective_dimension;
    use mazegen::spatial::{Cell, Direction, Grid, Position};

    // Tests that requested dimensions are clamped to five and made odd
    #[test]
    fn test_new_clamps_and_forces_odd_dimensions() {
        let cases = [
            ((0, 0), (5, 5)),
            ((4, 3), (5, 5)),
            ((6, 8), (5, 7)),
            ((10, 11), (9, 11)),
            ((4, 100), (5, 99)),
        ];

        for ((width, height), (expected_width, expected_height)) in cases {
            let Ok(grid) = Grid::new(width, height, Cell::Wall) else {
                unreachable!("small grids always allocate");
            };
            assert_eq!(grid.width(), expected_width, "width for {width}x{height}");
            assert_eq!(grid.height(), expected_height, "height for {width}x{height}");
            assert_eq!(effective_dimension(width), expected_width);
        }
    }

    // Tests that overflowing sizes surface as an allocation error
    #[test]
    fn test_new_reports_overflow_as_allocation_error() {
        let result = Grid::new(usize::MAX, usize::MAX, Cell::Wall);
        assert!(matches!(
            result,
            Err(mazegen::MazeError::Allocation { what: "grid", .. })
        ));
    }

    // Tests the out-of-bounds sentinel on every side of the grid
    #[test]
    fn test_get_returns_sentinel_outside_grid() {
        let Ok(grid) = Grid::new(5, 5, Cell::Empty) else {
            unreachable!("small grids always allocate");
        };
        let corner = Position::new(0, 0);

        assert_eq!(grid.get(corner), Cell::Empty);
        assert_eq!(grid.get(corner.step(Direction::North, 1)), Cell::OutOfBounds);
        assert_eq!(grid.get(corner.step(Direction::West, 2)), Cell::OutOfBounds);
        assert_eq!(grid.get(Position::new(5, 0)), Cell::OutOfBounds);
        assert_eq!(grid.get(Position::new(0, 5)), Cell::OutOfBounds);
        assert!(!grid.contains(Position::new(5, 4)));
        assert!(grid.contains(Position::new(4, 4)));
    }

    // Tests that writes outside the grid and writes of the sentinel are ignored
    #[test]
    fn test_set_ignores_out_of_bounds_and_sentinel() {
        let Ok(mut grid) = Grid::new(5, 5, Cell::Wall) else {
            unreachable!("small grids always allocate");
        };
        let before = grid.clone();

        grid.set(Position::new(7, 7), Cell::Empty);
        grid.set(Position::new(0, 0).step(Direction::North, 1), Cell::Empty);
        grid.set(Position::new(1, 1), Cell::OutOfBounds);
        assert_eq!(grid, before);

        grid.set(Position::new(1, 1), Cell::Empty);
        assert_eq!(grid.get(Position::new(1, 1)), Cell::Empty);
    }

    // Tests that frontier cells and off-grid positions read as walls
    #[test]
    fn test_is_wall_treats_frontier_and_outside_as_wall() {
        let Ok(mut grid) = Grid::new(5, 5, Cell::Empty) else {
            unreachable!("small grids always allocate");
        };
        grid.set(Position::new(2, 2), Cell::Frontier);
        grid.set(Position::new(2, 4), Cell::Wall);

        assert!(grid.is_wall(Position::new(2, 2)));
        assert!(grid.is_wall(Position::new(2, 4)));
        assert!(grid.is_wall(Position::new(9, 0)));
        assert!(grid.is_floor(Position::new(0, 0)));
    }

    // Tests node enumeration covers every even-even position once
    #[test]
    fn test_nodes_enumerates_even_positions() {
        let Ok(grid) = Grid::new(7, 5, Cell::Wall) else {
            unreachable!("small grids always allocate");
        };

        let nodes: Vec<Position> = grid.nodes().collect();
        assert_eq!(grid.node_columns(), 4);
        assert_eq!(grid.node_rows(), 3);
        assert_eq!(nodes.len(), grid.node_count());
        assert_eq!(nodes.len(), 12);
        assert!(nodes.iter().all(|node| node.is_node() && grid.contains(*node)));
        assert_eq!(nodes.first(), Some(&Position::new(0, 0)));
        assert_eq!(nodes.last(), Some(&Position::new(6, 4)));
    }

    // Tests fill and count agree on the whole buffer
    #[test]
    fn test_fill_and_count() {
        let Ok(mut grid) = Grid::new(5, 7, Cell::Wall) else {
            unreachable!("small grids always allocate");
        };
        assert_eq!(grid.count(Cell::Wall), 35);

        grid.fill(Cell::Empty);
        grid.set(Position::new(3, 3), Cell::Frontier);
        assert_eq!(grid.count(Cell::Empty), 34);
        assert_eq!(grid.count(Cell::Frontier), 1);

        grid.fill(Cell::OutOfBounds);
        assert_eq!(grid.count(Cell::OutOfBounds), 0);
    }
}
