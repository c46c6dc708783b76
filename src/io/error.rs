//! Error types for grid access, generator configuration and sprite export

use std::fmt;
use std::path::PathBuf;

use crate::generation::overrides::OverrideKind;
use crate::spatial::Coordinate;

/// Main error type for all sprite generation operations
#[derive(Debug)]
pub enum SpriteError {
    /// Grid or generator constructed with a zero width or height
    InvalidDimension {
        /// Requested width
        width: usize,
        /// Requested height
        height: usize,
    },

    /// Coordinate lies outside the bounds of the grid or stage it was checked against
    InvalidCoordinate {
        /// The rejected coordinate
        coordinate: Coordinate,
        /// Width of the entity doing the check
        width: usize,
        /// Height of the entity doing the check
        height: usize,
    },

    /// Coordinate added to one override set while present in the opposing set
    ConflictingOverride {
        /// The rejected coordinate
        coordinate: Coordinate,
        /// The set that already holds the coordinate
        existing: OverrideKind,
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

    /// Failed to save a rasterized sprite to disk
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

impl fmt::Display for SpriteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDimension { width, height } => {
                write!(
                    f,
                    "Invalid dimensions {width}x{height}: width and height must be positive"
                )
            }
            Self::InvalidCoordinate {
                coordinate,
                width,
                height,
            } => {
                write!(
                    f,
                    "Coordinate {coordinate} does not lie in the {width}x{height} grid"
                )
            }
            Self::ConflictingOverride {
                coordinate,
                existing,
            } => {
                write!(f, "Coordinate {coordinate} is already {existing}")
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
                    "Failed to export sprite to '{}': {source}",
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

impl std::error::Error for SpriteError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for sprite generation results
pub type Result<T> = std::result::Result<T, SpriteError>;

impl From<image::ImageError> for SpriteError {
    fn from(err: image::ImageError) -> Self {
        Self::ImageExport {
            path: PathBuf::from("<unknown>"),
            source: err,
        }
    }
}

impl From<std::io::Error> for SpriteError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> SpriteError {
    SpriteError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create an out-of-bounds coordinate error
pub const fn invalid_coordinate(coordinate: Coordinate, width: usize, height: usize) -> SpriteError {
    SpriteError::InvalidCoordinate {
        coordinate,
        width,
        height,
    }
}
