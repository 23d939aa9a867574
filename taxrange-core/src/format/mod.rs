//! Tabular format definitions for taxon range files
//!
//! This module contains pure definitions for the TSV layout of range files:
//! the column set, the range type tokens and the format constants.
//! No I/O operations - only format specifications.

pub mod constants;
pub mod header;
pub mod range_type;

// Re-export format definitions
pub use header::{Column, ColumnMap};
pub use range_type::RangeType;
