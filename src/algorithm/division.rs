//! Recursive division of open space
//!
//! Every divisible region is split by one horizontal and one vertical wall
//! crossing at an odd offset. Three of the four wall arms get a single
//! doorway on a node cell and the fourth stays closed, so the four rooms
//! stay connected without forming a loop.

use rand::Rng;

use crate::algorithm::observer::StepObserver;
use crate::io::error::Result;
use crate::spatial::{Cell, Direction, Grid, Position, Region};

// Order in which doorways are cut
const DOORWAY_ORDER: [Direction; 4] = [
    Direction::North,
    Direction::West,
    Direction::South,
    Direction::East,
];

/// Build a perfect maze in `grid` by subdivision
///
/// Regions are split depth-first in north-west, north-east, south-west,
/// south-east order using an explicit stack.
///
/// # Errors
///
/// Propagates observer failures
pub fn generate<R: Rng + ?Sized>(
    grid: &mut Grid,
    rng: &mut R,
    observer: &mut dyn StepObserver,
) -> Result<()> {
    grid.fill(Cell::Empty);

    let mut pending = vec![Region::new(0, 0, grid.width(), grid.height())];
    let mut divisions = 0usize;

    while let Some(region) = pending.pop() {
        if !region.is_divisible() {
            continue;
        }

        observer.on_step(grid)?;
        let [nw, ne, sw, se] = divide(grid, region, rng);
        divisions += 1;

        pending.extend([se, sw, ne, nw]);
    }

    log::debug!("division split {divisions} regions");
    Ok(())
}

/// Split a single region and return its rooms as north-west, north-east,
/// south-west and south-east
///
/// The region must be divisible and have odd width and height.
pub fn divide<R: Rng + ?Sized>(grid: &mut Grid, region: Region, rng: &mut R) -> [Region; 4] {
    let offset_x = odd_offset(region.width, rng);
    let offset_y = odd_offset(region.height, rng);
    let poi = Position::new(region.x + offset_x, region.y + offset_y);

    for x in region.x..region.x + region.width {
        grid.set(Position::new(x, poi.y), Cell::Wall);
    }
    for y in region.y..region.y + region.height {
        grid.set(Position::new(poi.x, y), Cell::Wall);
    }

    let closed = Direction::ALL
        .get(rng.random_range(0..Direction::ALL.len()))
        .copied()
        .unwrap_or(Direction::North);

    for direction in DOORWAY_ORDER {
        if direction == closed {
            continue;
        }
        let arm = match direction {
            Direction::North => offset_y,
            Direction::West => offset_x,
            Direction::South => region.height - offset_y,
            Direction::East => region.width - offset_x,
        };
        grid.set(poi.step(direction, odd_offset(arm, rng)), Cell::Empty);
    }

    let east_width = region.width - offset_x - 1;
    let south_height = region.height - offset_y - 1;
    [
        Region::new(region.x, region.y, offset_x, offset_y),
        Region::new(poi.x + 1, region.y, east_width, offset_y),
        Region::new(region.x, poi.y + 1, offset_x, south_height),
        Region::new(poi.x + 1, poi.y + 1, east_width, south_height),
    ]
}

/// Random odd number `1 + 2r` with `r` drawn from `[0, max(1, span / 2))`
fn odd_offset<R: Rng + ?Sized>(span: usize, rng: &mut R) -> usize {
    1 + rng.random_range(0..(span / 2).max(1)) * 2
}
