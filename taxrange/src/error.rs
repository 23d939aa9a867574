//! Error type for range collections and their TSV codec

use taxrange_core::{Column, ErrorCategory, RangeError};

/// Errors returned by collection and codec operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The underlying reader or writer failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The stream ended before a header row was found
    #[error("while reading header: no header row")]
    MissingHeader,

    /// A required column is absent from the header row
    #[error("expecting field \"{0}\"")]
    MissingColumn(Column),

    /// A row does not have as many fields as the header
    #[error("on row {line}: wrong number of fields: got {got}, want {want}")]
    FieldCount { line: usize, got: usize, want: usize },

    /// A field of a data row is invalid
    #[error("on row {line}: field \"{column}\": {source}")]
    Field {
        line: usize,
        column: Column,
        #[source]
        source: RangeError,
    },

    /// The stream has a header but no data rows
    #[error("while reading data: no data rows")]
    NoData,

    /// A mutation was rejected
    #[error(transparent)]
    Range(#[from] RangeError),
}

impl Error {
    /// Category of this error
    pub fn category(&self) -> ErrorCategory {
        match self {
            Error::Io(_) => ErrorCategory::Io,
            Error::MissingHeader | Error::MissingColumn(_) | Error::FieldCount { .. } => {
                ErrorCategory::Format
            }
            Error::NoData => ErrorCategory::Consistency,
            Error::Field { source, .. } => source.category(),
            Error::Range(err) => err.category(),
        }
    }

    /// Line number of the offending row, if the error comes from a data row
    pub fn line(&self) -> Option<usize> {
        match self {
            Error::FieldCount { line, .. } | Error::Field { line, .. } => Some(*line),
            _ => None,
        }
    }
}

/// Result type for collection and codec operations
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_error_message() {
        let err = Error::Field {
            line: 4,
            column: Column::Age,
            source: RangeError::AgeMismatch { got: 10, want: 0 },
        };
        assert_eq!(
            err.to_string(),
            "on row 4: field \"age\": invalid age: got 10, want 0"
        );
        assert_eq!(err.category(), ErrorCategory::Consistency);
        assert_eq!(err.line(), Some(4));
    }

    #[test]
    fn test_error_categories() {
        assert_eq!(Error::MissingColumn(Column::Pixel).category(), ErrorCategory::Format);
        assert_eq!(Error::NoData.category(), ErrorCategory::Consistency);
        assert_eq!(
            Error::from(RangeError::PixelOutOfBounds { pixel: 5, len: 5 }).category(),
            ErrorCategory::Bounds
        );
        let io = std::io::Error::new(std::io::ErrorKind::Other, "disk full");
        assert_eq!(Error::from(io).category(), ErrorCategory::Io);
        assert_eq!(Error::MissingHeader.line(), None);
    }
}
