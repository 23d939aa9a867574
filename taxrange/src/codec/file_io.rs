//! File I/O for range files
//!
//! Files are decoded from a [`StorageBackend`]: a read-only memory map with
//! the `mmap` feature, or the file contents read into memory without it.

use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use taxrange_core::{Pixelation, StorageBackend};

use super::{Decoder, Encoder};
use crate::{CodecConfig, Collection, Result};

/// A range file on disk
#[derive(Debug, Clone)]
pub struct RangeFile {
    path: PathBuf,
    config: CodecConfig,
}

impl RangeFile {
    /// Refer to a range file, using the default codec configuration
    pub fn new<Q: AsRef<Path>>(path: Q) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            config: CodecConfig::default(),
        }
    }

    /// Set the codec configuration used to read and write the file
    pub fn with_config(mut self, config: CodecConfig) -> Self {
        self.config = config;
        self
    }

    /// Path of the file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read a collection, building its pixelation from the file
    pub fn open<P: Pixelation, Q: AsRef<Path>>(path: Q) -> Result<Collection<P>> {
        Self::new(path).read(None)
    }

    /// Read a collection whose rows must all use `pixelation`
    pub fn open_with<P: Pixelation, Q: AsRef<Path>>(
        path: Q,
        pixelation: P,
    ) -> Result<Collection<P>> {
        Self::new(path).read(Some(pixelation))
    }

    /// Write a collection into a new file, replacing any existing one
    pub fn create<P: Pixelation, Q: AsRef<Path>>(
        path: Q,
        collection: &Collection<P>,
    ) -> Result<()> {
        Self::new(path).write(collection)
    }

    /// Read the file into a collection
    pub fn read<P: Pixelation>(&self, pixelation: Option<P>) -> Result<Collection<P>> {
        let backend = load(&self.path)?;
        tracing::info!(
            path = %self.path.display(),
            bytes = backend.size(),
            "reading range file"
        );
        Decoder::with_config(self.config.clone()).read_backend(&backend, pixelation)
    }

    /// Write a collection into the file
    pub fn write<P: Pixelation>(&self, collection: &Collection<P>) -> Result<()> {
        let file = File::create(&self.path)?;
        tracing::info!(
            path = %self.path.display(),
            taxa = collection.len(),
            "writing range file"
        );
        Encoder::with_config(self.config.clone()).write(collection, BufWriter::new(file))
    }
}

/// Read-only memory map of a range file
#[cfg(feature = "mmap")]
#[derive(Debug)]
enum MappedFile {
    Mapped(memmap2::Mmap),
    /// Empty files cannot be mapped
    Empty,
}

#[cfg(feature = "mmap")]
impl StorageBackend for MappedFile {
    fn as_slice(&self) -> &[u8] {
        match self {
            MappedFile::Mapped(map) => &map[..],
            MappedFile::Empty => &[],
        }
    }
}

#[cfg(feature = "mmap")]
fn load(path: &Path) -> Result<MappedFile> {
    let file = File::open(path)?;
    if file.metadata()?.len() == 0 {
        return Ok(MappedFile::Empty);
    }

    // SAFETY: Read-only mapping; the file is not modified while decoding
    let map = unsafe { memmap2::MmapOptions::new().map(&file)? };
    Ok(MappedFile::Mapped(map))
}

#[cfg(not(feature = "mmap"))]
fn load(path: &Path) -> Result<Vec<u8>> {
    Ok(std::fs::read(path)?)
}
