//! Positions, directions and rectangular regions on the maze grid

use rand::Rng;

/// A cell coordinate on the grid
///
/// Stepping past zero wraps around to a coordinate no grid can contain,
/// so a move off the top or left edge reads as out of bounds just like a
/// move off the bottom or right edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Position {
    /// Column
    pub x: usize,
    /// Row
    pub y: usize,
}

impl Position {
    /// Create a position from a column and a row
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Move `distance` cells in `direction`
    #[must_use]
    pub const fn step(self, direction: Direction, distance: usize) -> Self {
        match direction {
            Direction::North => Self::new(self.x, self.y.wrapping_sub(distance)),
            Direction::East => Self::new(self.x.wrapping_add(distance), self.y),
            Direction::South => Self::new(self.x, self.y.wrapping_add(distance)),
            Direction::West => Self::new(self.x.wrapping_sub(distance), self.y),
        }
    }

    /// Both coordinates even: a node of the maze graph
    pub const fn is_node(self) -> bool {
        self.x % 2 == 0 && self.y % 2 == 0
    }

    /// Exactly one coordinate odd: an edge joining two nodes
    pub const fn is_edge(self) -> bool {
        (self.x % 2 == 1) != (self.y % 2 == 1)
    }
}

/// One of the four cardinal directions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Towards row zero
    North,
    /// Towards the last column
    East,
    /// Towards the last row
    South,
    /// Towards column zero
    West,
}

impl Direction {
    /// All directions in clockwise order starting north
    pub const ALL: [Self; 4] = [Self::North, Self::East, Self::South, Self::West];

    /// Bit used for this direction in neighbour masks
    pub const fn bit(self) -> u8 {
        match self {
            Self::North => 1 << 0,
            Self::East => 1 << 1,
            Self::South => 1 << 2,
            Self::West => 1 << 3,
        }
    }

    /// The direction pointing the other way
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::North => Self::South,
            Self::East => Self::West,
            Self::South => Self::North,
            Self::West => Self::East,
        }
    }

    /// Produce the four directions in uniformly random order
    ///
    /// Repeatedly draws one of the `k` directions still in the working list,
    /// fills its slot with the last remaining entry and shrinks the list.
    /// The working list starts as north, south, east, west.
    pub fn shuffled<R: Rng + ?Sized>(rng: &mut R) -> [Self; 4] {
        let mut remaining = [Self::North, Self::South, Self::East, Self::West];
        let mut order = remaining;

        for (k, slot) in (1..=remaining.len()).rev().zip(order.iter_mut()) {
            let pick = rng.random_range(0..k);
            if let (Some(&chosen), Some(&last)) = (remaining.get(pick), remaining.get(k - 1)) {
                *slot = chosen;
                if let Some(entry) = remaining.get_mut(pick) {
                    *entry = last;
                }
            }
        }

        order
    }
}

/// Half-open rectangle of cells under subdivision
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Region {
    /// Leftmost column
    pub x: usize,
    /// Topmost row
    pub y: usize,
    /// Number of columns
    pub width: usize,
    /// Number of rows
    pub height: usize,
}

impl Region {
    /// Create a region from its origin and size
    pub const fn new(x: usize, y: usize, width: usize, height: usize) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Top-left cell of the region
    pub const fn origin(&self) -> Position {
        Position::new(self.x, self.y)
    }

    /// A region one cell thin cannot hold a dividing wall
    pub const fn is_divisible(&self) -> bool {
        self.width > 1 && self.height > 1
    }

    /// Check if a position lies inside the region
    pub const fn contains(&self, position: Position) -> bool {
        position.x >= self.x
            && position.x < self.x + self.width
            && position.y >= self.y
            && position.y < self.y + self.height
    }

    /// Number of cells covered
    pub const fn area(&self) -> usize {
        self.width * self.height
    }
}
