//! Line-level helpers for the tabular format
//!
//! These functions only look at the text of a line; they never read
//! or buffer input.

use crate::format::constants::{COMMENT_MARKER, DELIMITER};

/// Strip the row terminator (`\r\n` or `\n`) from a line
pub fn trim_line_terminator(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}

/// Whether a line carries no record: empty, or a comment
pub fn is_skippable_line(line: &str) -> bool {
    line.is_empty() || line.starts_with(COMMENT_MARKER)
}

/// Split a row into its fields
pub fn split_fields(line: &str) -> core::str::Split<'_, char> {
    line.split(DELIMITER)
}
