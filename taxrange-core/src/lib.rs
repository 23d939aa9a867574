#![no_std]

//! taxrange core - taxon range format definitions
//!
//! This crate provides the pure definitions shared by every taxon range
//! implementation: the error taxonomy, range types, the tabular column layout,
//! field parsing and validation, canonical taxon names, the taxon record and
//! the pixelation/storage traits. It performs no I/O.

#[cfg(feature = "alloc")]
extern crate alloc;

pub mod error;
pub mod format;
#[cfg(feature = "alloc")]
pub mod name;
#[cfg(feature = "alloc")]
pub mod taxon;
pub mod traits;
pub mod validation;

pub use error::*;
pub use format::*;
#[cfg(feature = "alloc")]
pub use name::canonical_name;
#[cfg(feature = "alloc")]
pub use taxon::{PixelMap, Taxon};
pub use traits::*;
pub use validation::*;
