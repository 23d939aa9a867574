//! Parsing utilities for range file fields
//!
//! This module provides pure parsing functions for the numeric fields of
//! range files, mapping failures onto `RangeError`.

use crate::RangeError;

/// Parse a non-negative integer field (equator or pixel id)
pub fn parse_index(field: &str) -> Result<usize, RangeError> {
    field.parse().map_err(|_| RangeError::InvalidInteger)
}

/// Parse an age field
pub fn parse_age(field: &str) -> Result<i64, RangeError> {
    field.parse().map_err(|_| RangeError::InvalidInteger)
}

/// Parse a density field
///
/// Densities must be finite and non-negative. They are not required to be
/// scaled, values are rescaled once the whole file is read.
pub fn parse_density(field: &str) -> Result<f64, RangeError> {
    let density: f64 = field.parse().map_err(|_| RangeError::InvalidNumber)?;
    if !density.is_finite() || density < 0.0 {
        return Err(RangeError::InvalidDensity);
    }
    Ok(density)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_index() {
        assert_eq!(parse_index("0"), Ok(0));
        assert_eq!(parse_index("360"), Ok(360));
        assert_eq!(parse_index("34661"), Ok(34661));

        // Invalid cases
        assert_eq!(parse_index(""), Err(RangeError::InvalidInteger));
        assert_eq!(parse_index("-1"), Err(RangeError::InvalidInteger));
        assert_eq!(parse_index("12a"), Err(RangeError::InvalidInteger));
        assert_eq!(parse_index("1.5"), Err(RangeError::InvalidInteger));
    }

    #[test]
    fn test_parse_age() {
        assert_eq!(parse_age("0"), Ok(0));
        assert_eq!(parse_age("230000000"), Ok(230_000_000));
        assert_eq!(parse_age("-5"), Ok(-5));

        assert_eq!(parse_age(""), Err(RangeError::InvalidInteger));
        assert_eq!(parse_age("230 Ma"), Err(RangeError::InvalidInteger));
    }

    #[test]
    fn test_parse_density() {
        assert_eq!(parse_density("1.000000"), Ok(1.0));
        assert_eq!(parse_density("0.2"), Ok(0.2));
        assert_eq!(parse_density("0"), Ok(0.0));
        assert_eq!(parse_density("12.5"), Ok(12.5));

        assert_eq!(parse_density(""), Err(RangeError::InvalidNumber));
        assert_eq!(parse_density("high"), Err(RangeError::InvalidNumber));
        assert_eq!(parse_density("-0.5"), Err(RangeError::InvalidDensity));
        assert_eq!(parse_density("NaN"), Err(RangeError::InvalidDensity));
        assert_eq!(parse_density("inf"), Err(RangeError::InvalidDensity));
    }
}
