//! Error types for parsing, assembly, and scanning

use std::fmt;
use std::path::{Path, PathBuf};

use crate::algorithm::fingerprints::TileClass;
use crate::spatial::tiles::Fingerprint;

/// Main error type for all puzzle operations
#[derive(Debug)]
pub enum PuzzleError {
    /// Input text does not describe a well-formed set of tiles
    Format {
        /// 1-based tile block index (0 when the problem concerns the whole input)
        block: usize,
        /// Description of what's wrong with the block
        reason: String,
    },

    /// No tile in a pool presents the mirror of a required edge
    ///
    /// Signals either an unsolvable input or a matching bug. There is no
    /// alternate search strategy, so this is never retried.
    NotFound {
        /// Edge fingerprint that had to be matched
        fingerprint: Fingerprint,
        /// Pool that was searched
        class: TileClass,
    },

    /// Internal invariant broken during classification or assembly
    Consistency {
        /// Description of the violated invariant
        reason: String,
    },

    /// Command-line parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
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

    /// Failed to save the assembled picture to disk
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },
}

impl fmt::Display for PuzzleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Format { block: 0, reason } => write!(f, "Malformed input: {reason}"),
            Self::Format { block, reason } => {
                write!(f, "Malformed tile block {block}: {reason}")
            }
            Self::NotFound { fingerprint, class } => {
                write!(
                    f,
                    "No {class} tile matches edge fingerprint {fingerprint:#b}"
                )
            }
            Self::Consistency { reason } => write!(f, "Assembly consistency error: {reason}"),
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
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
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export picture to '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for PuzzleError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::FileSystem { source, .. } => Some(source),
            Self::ImageExport { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for puzzle results
pub type Result<T> = std::result::Result<T, PuzzleError>;

/// Attaches a path and operation to raw I/O failures
pub trait WithPath<T> {
    /// Convert an I/O error into [`PuzzleError::FileSystem`]
    ///
    /// # Errors
    ///
    /// Propagates the original error with the path and operation applied
    fn with_path(self, path: &Path, operation: &'static str) -> Result<T>;
}

impl<T> WithPath<T> for std::result::Result<T, std::io::Error> {
    fn with_path(self, path: &Path, operation: &'static str) -> Result<T> {
        self.map_err(|source| PuzzleError::FileSystem {
            path: path.to_path_buf(),
            operation,
            source,
        })
    }
}

/// Create a format error for a tile block
pub fn format_error(block: usize, reason: &impl ToString) -> PuzzleError {
    PuzzleError::Format {
        block,
        reason: reason.to_string(),
    }
}

/// Create a consistency error
pub fn consistency_error(reason: &impl ToString) -> PuzzleError {
    PuzzleError::Consistency {
        reason: reason.to_string(),
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> PuzzleError {
    PuzzleError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}
