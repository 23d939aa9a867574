//! Range type definitions
//!
//! A taxon range is either a set of presence points or a continuous
//! density field over the pixelation.

/// Type of a range map
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum RangeType {
    /// Presence/absence pixelation: every occupied pixel has density 1.0
    #[default]
    Points,
    /// Continuous range map (a range from literature, a distribution model,
    /// or a density estimation), scaled so the maximum density is 1.0
    Range,
}

impl RangeType {
    /// Token used in range files
    pub const fn as_str(&self) -> &'static str {
        match self {
            RangeType::Points => "points",
            RangeType::Range => "range",
        }
    }

    /// Parse a type token, ignoring case
    ///
    /// An empty token means `Points`.
    pub fn parse(token: &str) -> crate::Result<Self> {
        if token.is_empty() || token.eq_ignore_ascii_case("points") {
            Ok(RangeType::Points)
        } else if token.eq_ignore_ascii_case("range") {
            Ok(RangeType::Range)
        } else {
            Err(crate::RangeError::InvalidType)
        }
    }
}

impl core::fmt::Display for RangeType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl core::str::FromStr for RangeType {
    type Err = crate::RangeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::RangeError;

    #[test]
    fn test_parse_range_type() {
        assert_eq!(RangeType::parse("points"), Ok(RangeType::Points));
        assert_eq!(RangeType::parse("Range"), Ok(RangeType::Range));
        assert_eq!(RangeType::parse("POINTS"), Ok(RangeType::Points));
        assert_eq!(RangeType::parse(""), Ok(RangeType::Points));

        assert_eq!(RangeType::parse("raster"), Err(RangeError::InvalidType));
        assert_eq!(RangeType::parse(" points"), Err(RangeError::InvalidType));
    }

    #[test]
    fn test_range_type_tokens() {
        assert_eq!(RangeType::Points.as_str(), "points");
        assert_eq!(RangeType::Range.as_str(), "range");
        assert_eq!("range".parse::<RangeType>(), Ok(RangeType::Range));
    }
}
