//! Reading range collections from TSV streams
//!
//! Rows are validated one at a time as they are read. Densities of `range`
//! taxa can only be scaled once every row of the taxon is known, so the
//! whole collection is buffered and normalized in a second pass.

use std::io::{BufRead, BufReader, Read};

use hashbrown::HashMap;
use rayon::prelude::*;
use taxrange_core::{
    canonical_name, is_skippable_line, parse_age, parse_density, parse_index, split_fields,
    trim_line_terminator, validate_equator, validate_pixel, Column, ColumnMap, Pixelation,
    RangeError, RangeType, StorageBackend, Taxon,
};

use crate::{CodecConfig, Collection, Error, Result};

/// Decoder for TSV range files
#[derive(Debug, Clone, Default)]
pub struct Decoder {
    config: CodecConfig,
}

impl Decoder {
    /// Create a decoder with the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a decoder with a given configuration
    pub fn with_config(config: CodecConfig) -> Self {
        Self { config }
    }

    /// Read a collection, building its pixelation from the first data row
    pub fn read<P: Pixelation, R: Read>(&self, reader: R) -> Result<Collection<P>> {
        self.decode(reader, None)
    }

    /// Read a collection whose rows must all use `pixelation`
    pub fn read_with<P: Pixelation, R: Read>(
        &self,
        reader: R,
        pixelation: P,
    ) -> Result<Collection<P>> {
        self.decode(reader, Some(pixelation))
    }

    /// Read a collection from the bytes held by a storage backend
    pub fn read_backend<P: Pixelation, B: StorageBackend + ?Sized>(
        &self,
        backend: &B,
        pixelation: Option<P>,
    ) -> Result<Collection<P>> {
        self.decode(backend.as_slice(), pixelation)
    }

    fn decode<P: Pixelation, R: Read>(
        &self,
        reader: R,
        mut pixelation: Option<P>,
    ) -> Result<Collection<P>> {
        let mut lines = Lines::new(reader);

        let Some((_, header)) = lines.next_row()? else {
            return Err(Error::MissingHeader);
        };
        let columns = ColumnMap::from_header(split_fields(header)).map_err(Error::MissingColumn)?;

        let mut taxa: HashMap<String, Taxon> = HashMap::new();
        let mut rows = 0;
        while let Some((line, row)) = lines.next_row()? {
            let fields: Vec<&str> = split_fields(row).collect();
            if fields.len() != columns.width() {
                return Err(Error::FieldCount {
                    line,
                    got: fields.len(),
                    want: columns.width(),
                });
            }
            let field = |column: Column| fields[columns.position(column)];
            let at = |column: Column| {
                move |source: RangeError| Error::Field {
                    line,
                    column,
                    source,
                }
            };
            rows += 1;

            let equator = parse_index(field(Column::Equator)).map_err(at(Column::Equator))?;
            let pixel_count = bind_pixelation(&mut pixelation, equator)
                .map_err(at(Column::Equator))?
                .pixel_count();

            let range_type = RangeType::parse(field(Column::Type)).map_err(at(Column::Type))?;
            let age = parse_age(field(Column::Age)).map_err(at(Column::Age))?;

            let name = canonical_name(field(Column::Taxon));
            if name.is_empty() {
                continue;
            }
            let taxon = taxa
                .entry(name)
                .or_insert_with_key(|name| Taxon::new(name.clone(), range_type, age));
            taxon.check(range_type, age).map_err(|source| {
                let column = match source {
                    RangeError::TypeMismatch { .. } => Column::Type,
                    _ => Column::Age,
                };
                Error::Field { line, column, source }
            })?;

            let pixel = parse_index(field(Column::Pixel)).map_err(at(Column::Pixel))?;
            validate_pixel(pixel, pixel_count).map_err(at(Column::Pixel))?;

            match taxon.range_type() {
                RangeType::Points => {
                    taxon.insert_point(pixel);
                }
                RangeType::Range => {
                    let density =
                        parse_density(field(Column::Density)).map_err(at(Column::Density))?;
                    taxon.insert_density(pixel, density);
                }
            }
        }

        let Some(pixelation) = pixelation.filter(|_| rows > 0) else {
            return Err(Error::NoData);
        };
        self.normalize(&mut taxa);

        tracing::debug!(
            equator = pixelation.equator(),
            taxa = taxa.len(),
            rows,
            "decoded range collection"
        );
        Ok(Collection::from_parts(pixelation, taxa))
    }

    /// Scale the densities of `range` taxa so their maximum is 1.0
    fn normalize(&self, taxa: &mut HashMap<String, Taxon>) {
        fn scale(taxon: &mut Taxon) {
            if taxon.range_type() == RangeType::Range {
                let max = taxon.max_density();
                taxon.scale(max);
            }
        }

        if self.config.normalize_in_parallel(taxa.len()) {
            taxa.par_values_mut().for_each(scale);
        } else {
            taxa.values_mut().for_each(scale);
        }

        // Taxa whose every row had a zero density
        taxa.retain(|name, taxon| {
            if taxon.is_empty() {
                tracing::warn!(taxon = %name, "dropping range without positive densities");
                return false;
            }
            true
        });
    }
}

/// Bind the pixelation on the first row, then check every row against it
fn bind_pixelation<P: Pixelation>(
    slot: &mut Option<P>,
    equator: usize,
) -> std::result::Result<&P, RangeError> {
    let pixelation = match slot.take() {
        Some(pixelation) => pixelation,
        None => P::with_equator(equator)?,
    };
    let pixelation = slot.insert(pixelation);
    validate_equator(equator, pixelation.equator())?;
    Ok(pixelation)
}

/// Line reader that skips comments and blank lines
struct Lines<R> {
    reader: BufReader<R>,
    buf: String,
    /// 1-based number of the last line read
    line: usize,
}

impl<R: Read> Lines<R> {
    fn new(reader: R) -> Self {
        Self {
            reader: BufReader::new(reader),
            buf: String::new(),
            line: 0,
        }
    }

    /// Next line with a record and its number, without the terminator
    fn next_row(&mut self) -> Result<Option<(usize, &str)>> {
        loop {
            self.buf.clear();
            if self.reader.read_line(&mut self.buf)? == 0 {
                return Ok(None);
            }
            self.line += 1;
            if !is_skippable_line(trim_line_terminator(&self.buf)) {
                return Ok(Some((self.line, trim_line_terminator(&self.buf))));
            }
        }
    }
}
