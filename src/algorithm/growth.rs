//! Randomized growth from a single seed node (Prim's-style)
//!
//! Each round absorbs a random frontier cell and joins it to the maze
//! through the first already-open neighbour found in a random direction
//! order. This picks a random cell, then a random side, rather than a
//! uniformly random frontier edge, and the resulting bias is kept.

use rand::Rng;

use crate::algorithm::frontier::FrontierSet;
use crate::algorithm::observer::StepObserver;
use crate::io::configuration::FRONTIER_CAPACITY_FACTOR;
use crate::io::error::Result;
use crate::spatial::{Cell, Direction, Grid, Position};

// Scan order used when queueing neighbours
const QUEUE_ORDER: [Direction; 4] = [
    Direction::North,
    Direction::East,
    Direction::West,
    Direction::South,
];

/// Grow a perfect maze into `grid`
///
/// # Errors
///
/// Returns an allocation error if the frontier cannot grow and propagates
/// observer failures
pub fn generate<R: Rng + ?Sized>(
    grid: &mut Grid,
    rng: &mut R,
    observer: &mut dyn StepObserver,
) -> Result<()> {
    grid.fill(Cell::Wall);

    let capacity = (grid.width() + grid.height()) * FRONTIER_CAPACITY_FACTOR;
    let mut frontier = FrontierSet::with_capacity(capacity)?;

    let start = Position::new(
        rng.random_range(0..grid.node_columns()) * 2,
        rng.random_range(0..grid.node_rows()) * 2,
    );
    log::debug!("growth starting at ({}, {})", start.x, start.y);

    grid.set(start, Cell::Empty);
    queue_unvisited_neighbors(grid, &mut frontier, start)?;

    let mut peak = frontier.len();
    while !frontier.is_empty() {
        observer.on_step(grid)?;

        let Some(current) = frontier.remove_random(rng) else {
            break;
        };
        grid.set(current, Cell::Empty);

        for direction in Direction::shuffled(rng) {
            if grid.get(current.step(direction, 2)) == Cell::Empty {
                grid.set(current.step(direction, 1), Cell::Empty);
                break;
            }
        }

        queue_unvisited_neighbors(grid, &mut frontier, current)?;
        peak = peak.max(frontier.len());
    }

    log::debug!("growth frontier peaked at {peak} cells (initial capacity {capacity})");
    Ok(())
}

/// Queue every wall node two cells away, tagging it so it is queued once
fn queue_unvisited_neighbors(
    grid: &mut Grid,
    frontier: &mut FrontierSet,
    position: Position,
) -> Result<()> {
    for direction in QUEUE_ORDER {
        let neighbor = position.step(direction, 2);
        if grid.get(neighbor) == Cell::Wall {
            grid.set(neighbor, Cell::Frontier);
            frontier.push(neighbor)?;
        }
    }
    Ok(())
}
