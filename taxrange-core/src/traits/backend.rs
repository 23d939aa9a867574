//! Storage backend traits for range files
//!
//! This module defines the abstract interface for the byte sources range
//! files are decoded from. It is a pure interface with no implementations.

/// Trait for backends that hold the bytes of a range file
///
/// This trait provides a minimal interface for accessing the underlying
/// byte data of a storage backend, regardless of how it's implemented
/// (memory-mapped files, in-memory buffers, etc.).
pub trait StorageBackend {
    /// Get a slice of the underlying data
    fn as_slice(&self) -> &[u8];

    /// Get the size of the data in bytes
    ///
    /// Default implementation uses the slice length.
    fn size(&self) -> usize {
        self.as_slice().len()
    }
}

impl StorageBackend for [u8] {
    fn as_slice(&self) -> &[u8] {
        self
    }
}

#[cfg(feature = "alloc")]
impl StorageBackend for alloc::vec::Vec<u8> {
    fn as_slice(&self) -> &[u8] {
        self
    }
}
