//! Writing range collections as TSV streams

use std::io::{BufWriter, Write};

use chrono::{SecondsFormat, Utc};
use taxrange_core::constants::{COMMENT_MARKER, DELIMITER, DENSITY_PRECISION, LINE_TERMINATOR};
use taxrange_core::{Column, Pixelation};

use crate::{CodecConfig, Collection, Result};

/// Encoder for TSV range files
///
/// Taxa are written in name order and the pixels of each taxon in id order,
/// so equal collections always produce the same data rows.
#[derive(Debug, Clone, Default)]
pub struct Encoder {
    config: CodecConfig,
}

impl Encoder {
    /// Create an encoder with the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an encoder with a given configuration
    pub fn with_config(config: CodecConfig) -> Self {
        Self { config }
    }

    /// Write a collection, returning once the writer has been flushed
    pub fn write<P: Pixelation, W: Write>(
        &self,
        collection: &Collection<P>,
        writer: W,
    ) -> Result<()> {
        let mut out = BufWriter::new(writer);

        if let Some(description) = &self.config.description {
            write!(out, "{COMMENT_MARKER} {description}{LINE_TERMINATOR}")?;
        }
        if self.config.timestamp {
            let now = Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true);
            write!(out, "{COMMENT_MARKER} data saved on: {now}{LINE_TERMINATOR}")?;
        }

        for (i, column) in Column::ALL.iter().enumerate() {
            if i > 0 {
                write!(out, "{DELIMITER}")?;
            }
            write!(out, "{}", column.name())?;
        }
        write!(out, "{LINE_TERMINATOR}")?;

        let equator = collection.pixelation().equator();
        let mut rows = 0;
        for taxon in collection.iter() {
            let (name, range_type, age) = (taxon.name(), taxon.range_type(), taxon.age());
            for (pixel, density) in taxon.sorted_pixels() {
                write!(
                    out,
                    "{name}{DELIMITER}{range_type}{DELIMITER}{age}{DELIMITER}{equator}\
                     {DELIMITER}{pixel}{DELIMITER}{density:.prec$}{LINE_TERMINATOR}",
                    prec = DENSITY_PRECISION,
                )?;
                rows += 1;
            }
        }
        out.flush()?;

        tracing::debug!(taxa = collection.len(), rows, "encoded range collection");
        Ok(())
    }
}
