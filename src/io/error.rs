//! Error types and path context for maze operations

use std::fmt;
use std::ops::Range;
use std::path::{Path, PathBuf};

use crate::spatial::Position;

/// Main error type for all maze operations
#[derive(Debug)]
pub enum MazeError {
    /// Grid dimensions or cell size cannot describe a drawable maze
    InvalidDimensions {
        /// Requested number of columns
        grid_width: usize,
        /// Requested number of rows
        grid_height: usize,
        /// Requested cell edge length in pixels
        cell_size: u32,
        /// Explanation of why the dimensions were rejected
        reason: &'static str,
    },

    /// Failed to load an image artifact from the filesystem
    ImageLoad {
        /// Path to the image file
        path: PathBuf,
        /// Underlying image loading error
        source: image::ImageError,
    },

    /// Failed to save an image artifact to disk
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

    /// Depth-first search exhausted its stack without reaching the end cell
    ///
    /// Only possible when the wall graph is not connected, which a generated
    /// maze never is.
    NoPathFound {
        /// Cell the search started from
        start: Position,
        /// Cell the search was looking for
        end: Position,
    },

    /// A cell range reaches outside the grid
    OutOfBounds {
        /// Requested row range
        rows: Range<usize>,
        /// Requested column range
        cols: Range<usize>,
        /// Grid dimensions (rows, cols)
        grid_dimensions: (usize, usize),
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

    /// Structured maze data does not describe a valid maze
    InvalidRecord {
        /// Description of what's wrong with the record
        reason: String,
    },

    /// JSON encoding or decoding failed
    Serialization {
        /// File being read or written
        path: PathBuf,
        /// Underlying JSON error
        source: serde_json::Error,
    },
}

impl fmt::Display for MazeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDimensions {
                grid_width,
                grid_height,
                cell_size,
                reason,
            } => {
                write!(
                    f,
                    "Invalid maze dimensions {grid_width}x{grid_height} cells at {cell_size}px: {reason}"
                )
            }
            Self::ImageLoad { path, source } => {
                write!(f, "Failed to load image '{}': {source}", path.display())
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
            Self::NoPathFound { start, end } => {
                write!(
                    f,
                    "No path found from ({}, {}) to ({}, {})",
                    start[0], start[1], end[0], end[1]
                )
            }
            Self::OutOfBounds {
                rows,
                cols,
                grid_dimensions,
            } => {
                write!(
                    f,
                    "Cell range rows {}..{} cols {}..{} is outside the {}x{} grid",
                    rows.start, rows.end, cols.start, cols.end, grid_dimensions.0, grid_dimensions.1
                )
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::InvalidRecord { reason } => {
                write!(f, "Invalid maze record: {reason}")
            }
            Self::Serialization { path, source } => {
                write!(
                    f,
                    "Failed to encode or decode maze data '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for MazeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageLoad { source, .. } | Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            Self::Serialization { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for maze results
pub type Result<T> = std::result::Result<T, MazeError>;

/// Attaches the path and operation to I/O results
pub trait WithPath<T> {
    /// Convert the error into a [`MazeError::FileSystem`] naming `path`
    ///
    /// # Errors
    ///
    /// Propagates the original error with the path and operation applied
    fn with_path(self, path: &Path, operation: &'static str) -> Result<T>;
}

impl<T> WithPath<T> for std::result::Result<T, std::io::Error> {
    fn with_path(self, path: &Path, operation: &'static str) -> Result<T> {
        self.map_err(|source| MazeError::FileSystem {
            path: path.to_path_buf(),
            operation,
            source,
        })
    }
}

impl From<serde_json::Error> for MazeError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            path: PathBuf::from("<memory>"),
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

/// Create an invalid record error
pub fn invalid_record(reason: &impl ToString) -> MazeError {
    MazeError::InvalidRecord {
        reason: reason.to_string(),
    }
}
