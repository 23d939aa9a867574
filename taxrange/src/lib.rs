//! taxrange - Taxon range collections over a pixelated sphere
//!
//! This library stores the geographic ranges of taxa as maps from pixel ids
//! of an isolatitude pixelation to densities, and reads and writes them as
//! tab-delimited text.
//!
//! ## Architecture
//!
//! taxrange follows a definition/implementation separation:
//!
//! - **taxrange-core**: Error taxonomy, column layout, field parsing and
//!   validation, taxon records and the pixelation/storage traits (no I/O)
//! - **taxrange**: The isolatitude pixelation, collections and the TSV codec
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use taxrange::{Collection, RangeFile};
//!
//! fn example() -> taxrange::Result<()> {
//!     let mut coll = Collection::with_equator(360)?;
//!     coll.add("Brontostoma discus", 0, 4.27, -72.54);
//!     coll.set("Eoraptor lunensis", 230_000_000, [(34661, 0.2), (34663, 1.0)])?;
//!     RangeFile::create("ranges.tab", &coll)?;
//!
//!     let coll: Collection = RangeFile::open("ranges.tab")?;
//!     for taxon in coll.iter() {
//!         println!("{}: {} pixels", taxon.name(), taxon.len());
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Points and density ranges**: presence pixels, or densities scaled so
//!   the most likely pixel is 1.0
//! - **Canonical names**: lookups ignore case and repeated whitespace
//! - **Memory-mapped I/O**: range files are decoded from a read-only map
//! - **Parallel normalization**: density ranges of large files are rescaled
//!   with rayon

pub use taxrange_core::{
    // Names and records
    canonical_name, PixelMap, Taxon,
    // Format definitions
    Column, RangeType,
    // Traits
    Pixelation, StorageBackend,
    // Error handling
    ErrorCategory, RangeError,
};

pub mod codec;
pub mod collection;
pub mod config;
pub mod error;
pub mod pixelation;

pub use codec::{read_tsv, write_tsv, Decoder, Encoder, RangeFile};
pub use collection::{AddOutcome, Collection};
pub use config::CodecConfig;
pub use error::{Error, Result};
pub use pixelation::Isolatitude;
