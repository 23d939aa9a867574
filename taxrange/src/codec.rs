//! TSV codec for range collections
//!
//! Range collections are stored as tab-delimited text. Lines starting with
//! `#` are comments. The first non-comment line is a header naming the
//! columns, followed by one row per pixel of each taxon:
//!
//! ```text
//! # taxon distribution range models
//! taxon	type	age	equator	pixel	density
//! Brontostoma discus	points	0	360	17319	1.000000
//! Brontostoma discus	points	0	360	19117	1.000000
//! Eoraptor lunensis	range	230000000	360	34661	0.200000
//! Eoraptor lunensis	range	230000000	360	34662	0.500000
//! Eoraptor lunensis	range	230000000	360	34663	1.000000
//! ```
//!
//! - `taxon`: the name of the taxon
//! - `type`: `points` for a presence/absence pixelation, `range` for a
//!   density range (an empty value means `points`)
//! - `age`: the age of the range map
//! - `equator`: the number of pixels at the equator of the pixelation
//! - `pixel`: a pixel id
//! - `density`: the density at the pixel, only read for `range` taxa

pub mod decode;
pub mod encode;
pub mod file_io;

use std::io::{Read, Write};

use taxrange_core::Pixelation;

pub use decode::Decoder;
pub use encode::Encoder;
pub use file_io::RangeFile;

use crate::{Collection, Result};

/// Read a collection from a TSV stream
///
/// If `pixelation` is `None` the pixelation is built from the `equator`
/// column of the first data row; otherwise every row must match it.
pub fn read_tsv<P: Pixelation, R: Read>(reader: R, pixelation: Option<P>) -> Result<Collection<P>> {
    match pixelation {
        Some(pixelation) => Decoder::new().read_with(reader, pixelation),
        None => Decoder::new().read(reader),
    }
}

/// Write a collection as a TSV stream
pub fn write_tsv<P: Pixelation, W: Write>(collection: &Collection<P>, writer: W) -> Result<()> {
    Encoder::new().write(collection, writer)
}
