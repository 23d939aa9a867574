//! Field validation utilities for range files
//!
//! This module contains pure validation functions with no I/O dependencies.
//! All functions operate on single fields or lines of the tabular format.

pub mod bounds;
pub mod format;
pub mod parsing;

pub use bounds::{validate_equator, validate_pixel};
pub use format::{is_skippable_line, split_fields, trim_line_terminator};
pub use parsing::{parse_age, parse_density, parse_index};
