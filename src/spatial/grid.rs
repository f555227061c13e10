//! Maze grid storage with bounds-aware cell access
//!
//! The grid embeds a graph: cells with both coordinates even are nodes,
//! cells with exactly one odd coordinate are the edges between them.
//! Dimensions are always odd so the outermost rows and columns hold nodes.

use ndarray::Array2;

use crate::io::configuration::MIN_DIMENSION;
use crate::io::error::{Result, allocation_error};
use crate::spatial::geometry::Position;

/// State of a single grid cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    /// Open floor
    Empty,
    /// Blocked or not yet carved
    Wall,
    /// Wall queued for absorption by the growth generator
    Frontier,
    /// Returned for coordinates outside the grid, never stored
    OutOfBounds,
}

/// Rectangular cell buffer of odd width and height
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    /// Cells indexed by `[row, column]`
    cells: Array2<Cell>,
}

impl Grid {
    /// Create a grid filled with `fill`
    ///
    /// Each dimension is raised to at least five and then made odd by
    /// decrementing even values.
    ///
    /// # Errors
    ///
    /// Returns an allocation error if the cell buffer cannot be reserved
    pub fn new(width: usize, height: usize, fill: Cell) -> Result<Self> {
        let width = effective_dimension(width);
        let height = effective_dimension(height);

        let len = width.checked_mul(height).ok_or_else(|| {
            allocation_error("grid", usize::MAX, &format!("{width}x{height} overflows"))
        })?;

        let mut buffer = Vec::new();
        buffer
            .try_reserve_exact(len)
            .map_err(|err| allocation_error("grid", len, &err))?;
        buffer.resize(len, fill);

        let cells = Array2::from_shape_vec((height, width), buffer)
            .map_err(|err| allocation_error("grid", len, &err))?;

        Ok(Self { cells })
    }

    /// Number of columns
    pub fn width(&self) -> usize {
        self.cells.ncols()
    }

    /// Number of rows
    pub fn height(&self) -> usize {
        self.cells.nrows()
    }

    /// Check if a position lies on the grid
    pub fn contains(&self, position: Position) -> bool {
        position.x < self.width() && position.y < self.height()
    }

    /// Read a cell, `Cell::OutOfBounds` outside the grid
    pub fn get(&self, position: Position) -> Cell {
        self.cells
            .get([position.y, position.x])
            .copied()
            .unwrap_or(Cell::OutOfBounds)
    }

    /// Write a cell; positions outside the grid are left untouched
    pub fn set(&mut self, position: Position, cell: Cell) {
        if cell == Cell::OutOfBounds {
            return;
        }
        if let Some(slot) = self.cells.get_mut([position.y, position.x]) {
            *slot = cell;
        }
    }

    /// Anything that is not open floor, including everything off the grid
    pub fn is_wall(&self, position: Position) -> bool {
        self.get(position) != Cell::Empty
    }

    /// Open floor on the grid
    pub fn is_floor(&self, position: Position) -> bool {
        !self.is_wall(position)
    }

    /// Overwrite every cell
    pub fn fill(&mut self, cell: Cell) {
        if cell != Cell::OutOfBounds {
            self.cells.fill(cell);
        }
    }

    /// Number of nodes along the horizontal axis
    pub fn node_columns(&self) -> usize {
        self.width().div_ceil(2)
    }

    /// Number of nodes along the vertical axis
    pub fn node_rows(&self) -> usize {
        self.height().div_ceil(2)
    }

    /// Total number of graph nodes
    pub fn node_count(&self) -> usize {
        self.node_columns() * self.node_rows()
    }

    /// Iterate node positions row by row
    pub fn nodes(&self) -> impl Iterator<Item = Position> + use<> {
        let columns = self.node_columns();
        let rows = self.node_rows();
        (0..rows).flat_map(move |row| {
            (0..columns).map(move |column| Position::new(column * 2, row * 2))
        })
    }

    /// Count cells in the given state
    pub fn count(&self, cell: Cell) -> usize {
        self.cells.iter().filter(|&&stored| stored == cell).count()
    }
}

/// Dimension actually used for a requested width or height
pub const fn effective_dimension(requested: usize) -> usize {
    let clamped = if requested < MIN_DIMENSION {
        MIN_DIMENSION
    } else {
        requested
    };

    if clamped % 2 == 0 { clamped - 1 } else { clamped }
}
