//! Unicode box-drawing rendering of a grid with a one-cell frame

use crate::io::error::{MazeError, Result};
use crate::spatial::{Direction, Grid, Position};

/// Wall glyphs indexed by neighbour mask (north 1, east 2, south 4, west 8)
///
/// A wall cell without any wall neighbour has no glyph.
const WALL_GLYPHS: [Option<char>; 16] = [
    None,
    Some('╹'),
    Some('╺'),
    Some('┗'),
    Some('╻'),
    Some('┃'),
    Some('┏'),
    Some('┣'),
    Some('╸'),
    Some('┛'),
    Some('━'),
    Some('┻'),
    Some('┓'),
    Some('┫'),
    Some('┳'),
    Some('╋'),
];

const FLOOR: char = ' ';

/// Renders grids into a reusable text buffer
#[derive(Debug, Clone, Default)]
pub struct TextRenderer {
    buffer: String,
}

impl TextRenderer {
    /// Create a renderer with an empty buffer
    pub const fn new() -> Self {
        Self {
            buffer: String::new(),
        }
    }

    /// Render `grid` and borrow the result
    ///
    /// The frame adds one glyph on every side; each line, frame lines
    /// included, ends with a newline.
    ///
    /// # Errors
    ///
    /// Returns `MazeError::InvalidRenderState` if a wall cell has no wall
    /// neighbour
    pub fn render(&mut self, grid: &Grid) -> Result<&str> {
        let width = grid.width();
        let height = grid.height();

        self.buffer.clear();
        self.buffer.reserve((width + 3) * (height + 2) * '━'.len_utf8());

        self.buffer.push('┏');
        for x in 0..width {
            self.buffer
                .push(frame_glyph(grid, Position::new(x, 0), '┳', '━'));
        }
        self.buffer.push('┓');
        self.buffer.push('\n');

        for y in 0..height {
            self.buffer
                .push(frame_glyph(grid, Position::new(0, y), '┣', '┃'));
            for x in 0..width {
                self.buffer.push(cell_glyph(grid, Position::new(x, y))?);
            }
            self.buffer
                .push(frame_glyph(grid, Position::new(width - 1, y), '┫', '┃'));
            self.buffer.push('\n');
        }

        self.buffer.push('┗');
        for x in 0..width {
            self.buffer
                .push(frame_glyph(grid, Position::new(x, height - 1), '┻', '━'));
        }
        self.buffer.push('┛');
        self.buffer.push('\n');

        Ok(self.buffer.as_str())
    }
}

/// Render `grid` into a fresh string
///
/// # Errors
///
/// Returns `MazeError::InvalidRenderState` if a wall cell has no wall
/// neighbour
pub fn render_text(grid: &Grid) -> Result<String> {
    let mut renderer = TextRenderer::new();
    renderer.render(grid).map(str::to_owned)
}

/// Neighbour mask of a cell: one bit per adjacent wall
pub fn wall_mask(grid: &Grid, position: Position) -> u8 {
    Direction::ALL
        .iter()
        .filter(|&&direction| grid.is_wall(position.step(direction, 1)))
        .fold(0, |mask, direction| mask | direction.bit())
}

fn cell_glyph(grid: &Grid, position: Position) -> Result<char> {
    if grid.is_floor(position) {
        return Ok(FLOOR);
    }

    WALL_GLYPHS
        .get(usize::from(wall_mask(grid, position)))
        .copied()
        .flatten()
        .ok_or(MazeError::InvalidRenderState {
            x: position.x,
            y: position.y,
        })
}

// Frame pieces join with the wall they touch
fn frame_glyph(grid: &Grid, position: Position, joined: char, plain: char) -> char {
    if grid.is_wall(position) { joined } else { plain }
}
