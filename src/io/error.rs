//! Error types and context management for board operations

use std::fmt;
use std::path::PathBuf;

use crate::spatial::coordinate::GridCoordinate;

/// Main error type for all board operations
#[derive(Debug)]
pub enum BoardError {
    /// Board configuration rejected before build
    InvalidConfiguration {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// A query or overlay referenced a coordinate outside the built grid
    ///
    /// Recoverable: the coordinate is skipped and the rest of the operation
    /// proceeds.
    CoordinateOutOfRange {
        /// The offending coordinate
        coordinate: GridCoordinate,
        /// Operation that referenced it
        operation: &'static str,
    },

    /// Selection state reached a combination the transition table never produces
    InvariantViolation {
        /// Description of the broken invariant
        reason: String,
    },

    /// Overlay definition text could not be parsed
    OverlayParse {
        /// 1-based line number (0 when unknown)
        line: usize,
        /// Description of the problem
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
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidConfiguration {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid configuration '{parameter}' = '{value}': {reason}")
            }
            Self::CoordinateOutOfRange {
                coordinate,
                operation,
            } => {
                write!(
                    f,
                    "Coordinate ({coordinate}) is outside the board during {operation}"
                )
            }
            Self::InvariantViolation { reason } => {
                write!(f, "Selection invariant violated: {reason}")
            }
            Self::OverlayParse { line, reason } => {
                write!(f, "Overlay definition error on line {line}: {reason}")
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

impl std::error::Error for BoardError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for board results
pub type Result<T> = std::result::Result<T, BoardError>;

/// Additional context to enrich error messages
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    /// File being read when the error occurred
    pub path: Option<PathBuf>,
    /// 1-based line number within that file
    pub line: Option<usize>,
    /// Operation being performed
    pub operation: Option<&'static str>,
}

/// Enriches errors with file and operation information
pub trait WithContext<T> {
    /// Add error context to a Result
    ///
    /// # Errors
    ///
    /// Propagates the original error with additional context applied
    fn with_context(self, context: ErrorContext) -> Result<T>;

    /// Add just the operation context
    ///
    /// # Errors
    ///
    /// Propagates the original error with the operation context applied
    fn with_operation(self, operation: &'static str) -> Result<T>;
}

impl<T, E> WithContext<T> for std::result::Result<T, E>
where
    E: Into<BoardError>,
{
    fn with_context(self, context: ErrorContext) -> Result<T> {
        self.map_err(|e| {
            let mut error = e.into();
            match &mut error {
                BoardError::FileSystem {
                    path, operation, ..
                } => {
                    if let Some(context_path) = context.path {
                        *path = context_path;
                    }
                    if let Some(context_operation) = context.operation {
                        *operation = context_operation;
                    }
                }
                BoardError::OverlayParse { line, .. } => {
                    if let Some(context_line) = context.line {
                        *line = context_line;
                    }
                }
                BoardError::CoordinateOutOfRange { operation, .. } => {
                    if let Some(context_operation) = context.operation {
                        *operation = context_operation;
                    }
                }
                _ => {}
            }
            error
        })
    }

    fn with_operation(self, operation: &'static str) -> Result<T> {
        self.with_context(ErrorContext {
            operation: Some(operation),
            ..Default::default()
        })
    }
}

impl From<std::io::Error> for BoardError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Create an invalid configuration error
pub fn invalid_configuration(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> BoardError {
    BoardError::InvalidConfiguration {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create a coordinate out of range error
pub const fn out_of_range(coordinate: GridCoordinate, operation: &'static str) -> BoardError {
    BoardError::CoordinateOutOfRange {
        coordinate,
        operation,
    }
}

/// Create an overlay parse error for a given line
pub fn overlay_parse(line: usize, reason: &impl ToString) -> BoardError {
    BoardError::OverlayParse {
        line,
        reason: reason.to_string(),
    }
}
