//! Format constants for taxon range files

/// Field delimiter of range files
pub const DELIMITER: char = '\t';

/// Lines starting with this marker are ignored by readers
pub const COMMENT_MARKER: char = '#';

/// Row terminator written by encoders (readers also accept a bare `\n`)
pub const LINE_TERMINATOR: &str = "\r\n";

/// Number of decimals used when writing densities
pub const DENSITY_PRECISION: usize = 6;

/// Smallest density that survives a round trip through the text format
pub const MIN_DENSITY: f64 = 1e-6;

/// Default schema description written as the first comment line
pub const SCHEMA_DESCRIPTION: &str = "taxon distribution range models";
