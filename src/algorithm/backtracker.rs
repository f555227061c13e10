//! Randomized depth-first maze carving
//!
//! Starts from a random node and carves into unvisited neighbours two cells
//! away, backtracking when a node has none left. An explicit stack keeps
//! call depth constant. The direction permutation of a node is drawn when
//! the node is entered.

use rand::Rng;

use crate::algorithm::observer::StepObserver;
use crate::io::error::Result;
use crate::spatial::{Cell, Direction, Grid, Position};

struct Frame {
    position: Position,
    directions: [Direction; 4],
    next: usize,
}

/// Carve a perfect maze into `grid`
///
/// # Errors
///
/// Propagates observer failures
pub fn generate<R: Rng + ?Sized>(
    grid: &mut Grid,
    rng: &mut R,
    observer: &mut dyn StepObserver,
) -> Result<()> {
    grid.fill(Cell::Wall);

    let start = Position::new(
        rng.random_range(0..grid.node_columns()) * 2,
        rng.random_range(0..grid.node_rows()) * 2,
    );
    log::debug!("backtracker starting at ({}, {})", start.x, start.y);

    let mut stack = Vec::with_capacity(grid.node_count().min(1024));
    stack.push(enter(grid, start, rng, observer)?);

    while let Some(frame) = stack.last_mut() {
        let Some(&direction) = frame.directions.get(frame.next) else {
            stack.pop();
            continue;
        };
        frame.next += 1;

        let current = frame.position;
        let neighbor = current.step(direction, 2);
        if grid.get(neighbor) == Cell::Wall {
            grid.set(current.step(direction, 1), Cell::Empty);
            stack.push(enter(grid, neighbor, rng, observer)?);
        }
    }

    Ok(())
}

fn enter<R: Rng + ?Sized>(
    grid: &mut Grid,
    position: Position,
    rng: &mut R,
    observer: &mut dyn StepObserver,
) -> Result<Frame> {
    observer.on_step(grid)?;
    grid.set(position, Cell::Empty);

    Ok(Frame {
        position,
        directions: Direction::shuffled(rng),
        next: 0,
    })
}
