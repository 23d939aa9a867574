//! Error types for taxon range operations

use crate::format::RangeType;

/// Broad classes of failures, used by callers to decide on recovery
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// Malformed input: missing columns, unknown tokens, unparsable numbers
    Format,
    /// Input that contradicts data already seen
    Consistency,
    /// Pixel ids or resolutions outside the pixelation
    Bounds,
    /// Failures of the underlying reader or writer
    Io,
}

impl core::fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let msg = match self {
            ErrorCategory::Format => "format",
            ErrorCategory::Consistency => "consistency",
            ErrorCategory::Bounds => "bounds",
            ErrorCategory::Io => "io",
        };
        write!(f, "{msg}")
    }
}

/// Errors that can occur while building or validating taxon ranges
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RangeError {
    /// Field is not a valid integer
    InvalidInteger,
    /// Field is not a valid decimal number
    InvalidNumber,
    /// Density is negative, NaN or infinite
    InvalidDensity,
    /// Unknown range type token
    InvalidType,
    /// Pixelation resolution cannot be built
    InvalidEquator(usize),
    /// Resolution differs from the one bound to the collection
    EquatorMismatch { got: usize, want: usize },
    /// Range type differs from the first one seen for the taxon
    TypeMismatch { got: RangeType, want: RangeType },
    /// Age differs from the first one seen for the taxon
    AgeMismatch { got: i64, want: i64 },
    /// Pixel id outside of the pixelation
    PixelOutOfBounds { pixel: usize, len: usize },
    /// Density field without any positive value
    EmptyRange,
}

impl RangeError {
    /// Category of this error
    pub const fn category(&self) -> ErrorCategory {
        match self {
            RangeError::InvalidInteger
            | RangeError::InvalidNumber
            | RangeError::InvalidDensity
            | RangeError::InvalidType => ErrorCategory::Format,
            RangeError::EquatorMismatch { .. }
            | RangeError::TypeMismatch { .. }
            | RangeError::AgeMismatch { .. }
            | RangeError::EmptyRange => ErrorCategory::Consistency,
            RangeError::InvalidEquator(_) | RangeError::PixelOutOfBounds { .. } => {
                ErrorCategory::Bounds
            }
        }
    }
}

impl core::fmt::Display for RangeError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            RangeError::InvalidInteger => write!(f, "invalid integer"),
            RangeError::InvalidNumber => write!(f, "invalid number"),
            RangeError::InvalidDensity => write!(f, "invalid density"),
            RangeError::InvalidType => write!(f, "invalid range type"),
            RangeError::InvalidEquator(eq) => write!(f, "invalid equator value {eq}"),
            RangeError::EquatorMismatch { got, want } => {
                write!(f, "invalid equator: got {got}, want {want}")
            }
            RangeError::TypeMismatch { got, want } => {
                write!(f, "invalid type: got \"{got}\", want \"{want}\"")
            }
            RangeError::AgeMismatch { got, want } => {
                write!(f, "invalid age: got {got}, want {want}")
            }
            RangeError::PixelOutOfBounds { pixel, len } => {
                write!(f, "invalid pixel value {pixel} (pixelation has {len} pixels)")
            }
            RangeError::EmptyRange => write!(f, "range without positive density values"),
        }
    }
}

impl core::error::Error for RangeError {}

/// Result type for taxon range operations
pub type Result<T> = core::result::Result<T, RangeError>;
