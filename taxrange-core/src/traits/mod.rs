//! Abstract interfaces for taxon range collections
//!
//! This module defines the trait abstractions the range implementations
//! are built on. Traits are pure interfaces - no concrete implementations.

pub mod backend;
pub mod pixelation;

pub use backend::StorageBackend;
pub use pixelation::Pixelation;
