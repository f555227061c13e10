//! Error types for maze generation, rendering and export

use std::fmt;
use std::path::PathBuf;

/// Main error type for all maze operations
#[derive(Debug)]
pub enum MazeError {
    /// A buffer could not be allocated
    ///
    /// Fatal for the request that triggered it and never retried.
    Allocation {
        /// Which buffer was being allocated
        what: &'static str,
        /// Number of elements requested
        cells: usize,
        /// Allocator or overflow description
        reason: String,
    },

    /// A wall cell has no wall neighbours at all
    ///
    /// No line-drawing glyph exists for an isolated wall, so the grid
    /// cannot be a correctly generated maze.
    InvalidRenderState {
        /// Column of the offending cell
        x: usize,
        /// Row of the offending cell
        y: usize,
    },

    /// Parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Failed to save a raster or animation to disk
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Writing to the terminal or another text sink failed
    Output {
        /// Description of the write that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl fmt::Display for MazeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Allocation {
                what,
                cells,
                reason,
            } => {
                write!(f, "Failed to allocate {what} ({cells} cells): {reason}")
            }
            Self::InvalidRenderState { x, y } => {
                write!(
                    f,
                    "Wall cell at ({x}, {y}) has no wall neighbours; grid is not a valid maze"
                )
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
            Self::Output { operation, source } => {
                write!(f, "Output error during {operation}: {source}")
            }
        }
    }
}

impl std::error::Error for MazeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } | Self::Output { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for maze results
pub type Result<T> = std::result::Result<T, MazeError>;

impl From<image::ImageError> for MazeError {
    fn from(err: image::ImageError) -> Self {
        Self::ImageExport {
            path: PathBuf::from("<unknown>"),
            source: err,
        }
    }
}

impl From<std::io::Error> for MazeError {
    fn from(err: std::io::Error) -> Self {
        Self::Output {
            operation: "write",
            source: err,
        }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> MazeError {
    MazeError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create an allocation error
pub fn allocation_error(what: &'static str, cells: usize, reason: &impl ToString) -> MazeError {
    MazeError::Allocation {
        what,
        cells,
        reason: reason.to_string(),
    }
}
