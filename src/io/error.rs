//! Error types for rule extraction, collapse and grid I/O

use std::fmt;
use std::path::PathBuf;

/// Main error type for all collapse operations
#[derive(Debug)]
pub enum CollapseError {
    /// Sample or seed grid is malformed
    ///
    /// Covers empty grids, ragged rows, seed tiles missing from the
    /// dictionary and seeds whose size differs from the requested output.
    InvalidInput {
        /// Description of what's wrong with the grid
        reason: String,
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

    /// An attempt produced a cell with no remaining candidates
    ///
    /// Recovered by the driver, which discards the attempt and retries.
    Divergence {
        /// Attempt in which the contradiction occurred (1-based)
        attempt: usize,
        /// Collapse step at which the contradiction occurred
        step: usize,
        /// Grid indices of the first contradicted cell
        position: [usize; 2],
    },

    /// Every allowed attempt diverged
    ExhaustedAttempts {
        /// Number of attempts consumed
        attempts: usize,
    },

    /// Color palette could not be parsed
    PaletteParse {
        /// Path of the palette file
        path: PathBuf,
        /// Description of the failure
        reason: String,
    },

    /// Failed to save a rendered image to disk
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
}

impl fmt::Display for CollapseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidInput { reason } => {
                write!(f, "Invalid input grid: {reason}")
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::Divergence {
                attempt,
                step,
                position,
            } => {
                write!(
                    f,
                    "Attempt {attempt} diverged at step {step}: cell ({}, {}) has no candidates",
                    position[0], position[1]
                )
            }
            Self::ExhaustedAttempts { attempts } => {
                write!(f, "Failed to collapse: all {attempts} attempts diverged")
            }
            Self::PaletteParse { path, reason } => {
                write!(f, "Failed to parse palette '{}': {reason}", path.display())
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
        }
    }
}

impl std::error::Error for CollapseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for collapse results
pub type Result<T> = std::result::Result<T, CollapseError>;

impl From<std::io::Error> for CollapseError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Create an invalid input error
pub fn invalid_input(reason: &impl ToString) -> CollapseError {
    CollapseError::InvalidInput {
        reason: reason.to_string(),
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> CollapseError {
    CollapseError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Check that a grid given as rows is non-empty and rectangular
///
/// Returns the `(rows, cols)` shape on success.
///
/// # Errors
///
/// Returns `InvalidInput` if there are no rows, the first row is empty, or
/// any row length differs from the first row's.
pub fn validate_rectangular<T>(rows: &[Vec<T>], what: &str) -> Result<(usize, usize)> {
    let Some(first) = rows.first() else {
        return Err(invalid_input(&format!("{what} grid has no rows")));
    };
    let cols = first.len();
    if cols == 0 {
        return Err(invalid_input(&format!("{what} grid has an empty first row")));
    }
    if let Some((index, row)) = rows.iter().enumerate().find(|(_, row)| row.len() != cols) {
        return Err(invalid_input(&format!(
            "{what} grid is ragged: row {index} has {} cells, expected {cols}",
            row.len()
        )));
    }
    Ok((rows.len(), cols))
}
