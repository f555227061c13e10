//! Maze constants and runtime configuration defaults

/// Smallest width or height a grid is clamped up to
pub const MIN_DIMENSION: usize = 5;

// Safety limit to prevent excessive memory allocation from the command line
/// Maximum grid dimension accepted by the CLI
pub const MAX_GRID_DIMENSION: u32 = 10_000;

/// Longest per-step animation delay accepted by the CLI (in milliseconds)
pub const MAX_STEP_DELAY_MS: u64 = 1000;

// Observed upper bound for the frontier during growth; the set still grows past it
/// Initial frontier reservation is `(width + height) * FRONTIER_CAPACITY_FACTOR`
pub const FRONTIER_CAPACITY_FACTOR: usize = 4;

// Raster intensities
/// Pixel value for walls and the frame
pub const WALL_INTENSITY: u8 = 0;
/// Pixel value for floor cells
pub const FLOOR_INTENSITY: u8 = 255;

// Visualization settings
/// Delay between GIF animation frames
pub const GIF_FRAME_DELAY_MS: u32 = 20;
/// Minimum frame delay that viewers reliably support (in milliseconds)
pub const VIEWER_MIN_FRAME_DELAY_MS: u32 = 50;
/// Default number of generation steps between captured frames
pub const DEFAULT_FRAME_STRIDE: usize = 1;
/// Final frame is held this many times longer than the others
pub const FINAL_FRAME_HOLD: u32 = 25;
