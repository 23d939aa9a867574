//! Codec configuration
//!
//! The tabular layout itself is fixed; the configuration only covers the
//! informational comment lines written before the header, and how the
//! density normalization pass is scheduled.

use taxrange_core::constants::SCHEMA_DESCRIPTION;

/// Configuration for reading and writing range files
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CodecConfig {
    /// Schema description written as the first comment line
    pub description: Option<String>,
    /// Whether to write a comment with the generation time
    pub timestamp: bool,
    /// Number of taxa from which densities are normalized in parallel
    pub parallel_threshold: usize,
}

impl CodecConfig {
    /// Set the schema description comment, `None` to omit it
    pub fn with_description(mut self, description: Option<&str>) -> Self {
        self.description = description.map(str::to_owned);
        self
    }

    /// Enable or disable the generation time comment
    pub fn with_timestamp(mut self, timestamp: bool) -> Self {
        self.timestamp = timestamp;
        self
    }

    /// Set the number of taxa from which normalization runs in parallel
    pub fn with_parallel_threshold(mut self, parallel_threshold: usize) -> Self {
        self.parallel_threshold = parallel_threshold;
        self
    }

    /// Configuration that writes only the header and data rows
    pub fn bare() -> Self {
        Self::default().with_description(None).with_timestamp(false)
    }

    /// Whether a collection of `taxa` taxa is normalized in parallel
    pub fn normalize_in_parallel(&self, taxa: usize) -> bool {
        taxa >= self.parallel_threshold
    }
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            description: Some(SCHEMA_DESCRIPTION.to_owned()),
            timestamp: true,
            parallel_threshold: 1_000,
        }
    }
}
