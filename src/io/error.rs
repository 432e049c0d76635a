//! Error types for measure lookup, sequencing, reconstruction and file handling

use std::fmt;
use std::path::PathBuf;

/// Main error type for all curriculum operations
#[derive(Debug)]
pub enum CurriculumError {
    /// Measure identifier has no registry entry
    UnknownMeasure {
        /// The identifier that was looked up
        id: String,
    },

    /// Two patches that must share a shape do not
    ShapeMismatch {
        /// Input index of the patch providing the expected shape
        first: usize,
        /// Input index of the offending patch
        second: usize,
        /// Shape of the first patch (height, width, channels)
        expected: (usize, usize, usize),
        /// Shape of the second patch (height, width, channels)
        found: (usize, usize, usize),
    },

    /// A distance measure was about to compare bit-identical patches
    ///
    /// Distance measures require distinct inputs; two equal patches would
    /// collapse to a zero distance that carries no ordering information.
    IdenticalPatches {
        /// Input index of the reference patch
        first: usize,
        /// Input index of the candidate patch
        second: usize,
    },

    /// Image and patch dimensions do not tile each other
    Dimension {
        /// Description of the violated tiling constraint
        reason: String,
    },

    /// A sequence length differs from the one it must match
    LengthMismatch {
        /// Which sequence was checked
        what: &'static str,
        /// Required length
        expected: usize,
        /// Observed length
        found: usize,
    },

    /// Failed to load source image from filesystem
    ImageLoad {
        /// Path to the image file
        path: PathBuf,
        /// Underlying image loading error
        source: image::ImageError,
    },

    /// Failed to save the rebuilt image to disk
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

    /// Parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },
}

impl fmt::Display for CurriculumError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownMeasure { id } => {
                write!(f, "Unknown measure '{id}'")
            }
            Self::ShapeMismatch {
                first,
                second,
                expected,
                found,
            } => {
                write!(
                    f,
                    "Patch {second} has shape {}x{}x{} but patch {first} has shape {}x{}x{}",
                    found.0, found.1, found.2, expected.0, expected.1, expected.2
                )
            }
            Self::IdenticalPatches { first, second } => {
                write!(
                    f,
                    "Patches {first} and {second} are identical; distance measures need distinct patches"
                )
            }
            Self::Dimension { reason } => {
                write!(f, "Dimension error: {reason}")
            }
            Self::LengthMismatch {
                what,
                expected,
                found,
            } => {
                write!(f, "Length mismatch for {what}: expected {expected}, found {found}")
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
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
        }
    }
}

impl std::error::Error for CurriculumError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageLoad { source, .. } | Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for curriculum results
pub type Result<T> = std::result::Result<T, CurriculumError>;

impl From<std::io::Error> for CurriculumError {
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
) -> CurriculumError {
    CurriculumError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create a dimension error
pub fn dimension_error(reason: &impl ToString) -> CurriculumError {
    CurriculumError::Dimension {
        reason: reason.to_string(),
    }
}
