//! Tests for step observers and fanout

#[cfg(test)]
mod tests {
    use mazegen::algorithm::observer::{Fanout, NoObserver, StepObserver};
    use mazegen::spatial::{Cell, Grid};
    use mazegen::{Algorithm, MazeConfig, MazeError, Result, generate};

    // Tests that the fanout forwards each step to every observer in order
    #[test]
    fn test_fanout_forwards_to_all() {
        let mut first = 0;
        let mut second = 0;
        let mut count_first = |_: &Grid| -> Result<()> {
            first += 1;
            Ok(())
        };
        let mut count_second = |_: &Grid| -> Result<()> {
            second += 1;
            Ok(())
        };

        let config = MazeConfig::new(9, 9, Algorithm::Backtracker).with_seed(3);
        let steps = {
            let mut fanout = Fanout::new();
            assert!(fanout.is_empty());
            fanout.push(&mut count_first);
            fanout.push(&mut count_second);
            assert_eq!(fanout.len(), 2);

            let Ok(maze) = generate(&config, &mut fanout) else {
                unreachable!("generation without failing observers succeeds");
            };
            maze.steps()
        };

        assert_eq!(steps, 25);
        assert_eq!(first, 25);
        assert_eq!(second, 25);
    }

    // Tests that a failing observer stops later observers and generation
    #[test]
    fn test_fanout_stops_at_first_error() {
        let mut later = 0;
        let mut failing = |_: &Grid| -> Result<()> {
            Err(MazeError::Output {
                operation: "test",
                source: std::io::Error::other("closed"),
            })
        };
        let mut counting = |_: &Grid| -> Result<()> {
            later += 1;
            Ok(())
        };

        let result = {
            let mut fanout = Fanout::new();
            fanout.push(&mut failing);
            fanout.push(&mut counting);
            let Ok(grid) = Grid::new(5, 5, Cell::Wall) else {
                unreachable!("small grids always allocate");
            };
            fanout.on_step(&grid)
        };

        assert!(result.is_err());
        assert_eq!(later, 0);
    }

    // Tests the step count reported for each generator
    #[test]
    fn test_step_counts_per_algorithm() {
        for algorithm in [Algorithm::Backtracker, Algorithm::Growth] {
            let config = MazeConfig::new(11, 7, algorithm).with_seed(12);
            let Ok(maze) = generate(&config, &mut NoObserver) else {
                unreachable!("small mazes always generate");
            };
            assert_eq!(Some(maze.steps()), algorithm.expected_steps(11, 7));
        }

        assert_eq!(Algorithm::Backtracker.expected_steps(11, 7), Some(24));
        assert_eq!(Algorithm::Growth.expected_steps(11, 7), Some(23));
        assert_eq!(Algorithm::Division.expected_steps(11, 7), None);

        let config = MazeConfig::new(11, 7, Algorithm::Division).with_seed(12);
        let Ok(maze) = generate(&config, &mut NoObserver) else {
            unreachable!("small mazes always generate");
        };
        assert!(maze.steps() >= 1);
    }
}
