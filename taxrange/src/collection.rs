//! Collections of taxon ranges
//!
//! A `Collection` maps canonical taxon names to their range maps, all of
//! them defined on the same pixelation. Names given to any method are
//! canonicalized first, so "homo  SAPIENS" and "Homo sapiens" refer to the
//! same taxon; names without visible characters are ignored.

use std::io::{Read, Write};

use hashbrown::HashMap;
use taxrange_core::{canonical_name, PixelMap, Pixelation, RangeError, RangeType, Taxon};

use crate::codec::{Decoder, Encoder};
use crate::{Isolatitude, Result};

/// Result of adding a presence point to a collection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    /// The pixel was added to the taxon range
    Inserted,
    /// The pixel was already part of the taxon range
    Duplicate,
    /// The taxon has a density range, points are not added to it
    TypeConflict,
    /// The taxon name is empty
    EmptyName,
}

impl AddOutcome {
    /// Whether the point was dropped without touching the collection
    pub fn is_rejected(&self) -> bool {
        matches!(self, AddOutcome::TypeConflict | AddOutcome::EmptyName)
    }
}

/// A collection of taxon range maps on a single pixelation
#[derive(Debug, Clone)]
pub struct Collection<P = Isolatitude> {
    pixelation: P,
    taxa: HashMap<String, Taxon>,
}

impl Collection<Isolatitude> {
    /// Create an empty collection on an isolatitude pixelation
    pub fn with_equator(equator: usize) -> Result<Self> {
        Ok(Self::new(Isolatitude::new(equator)?))
    }
}

impl<P: Pixelation> Collection<P> {
    /// Create an empty collection
    pub fn new(pixelation: P) -> Self {
        Self {
            pixelation,
            taxa: HashMap::new(),
        }
    }

    pub(crate) fn from_parts(pixelation: P, taxa: HashMap<String, Taxon>) -> Self {
        Self { pixelation, taxa }
    }

    /// Read a collection from a TSV stream, taking the pixelation from it
    pub fn read_tsv<R: Read>(reader: R) -> Result<Self> {
        Decoder::new().read(reader)
    }

    /// Read a collection from a TSV stream that must use `pixelation`
    pub fn read_tsv_with<R: Read>(reader: R, pixelation: P) -> Result<Self> {
        Decoder::new().read_with(reader, pixelation)
    }

    /// Write the collection as a TSV stream
    pub fn write_tsv<W: Write>(&self, writer: W) -> Result<()> {
        Encoder::new().write(self, writer)
    }

    /// Add a presence point to a taxon at a given age (in years)
    ///
    /// The point is converted to a pixel of the collection's pixelation.
    /// A taxon that does not exist is created with a `points` range; the age
    /// is only used in that case. If the taxon has a density range the point
    /// is dropped.
    pub fn add(&mut self, name: &str, age: i64, lat: f64, lon: f64) -> AddOutcome {
        let pixel = self.pixelation.pixel(lat, lon);
        self.insert_point(name, age, pixel)
    }

    /// Add a presence pixel to a taxon at a given age (in years)
    ///
    /// Same as `add`, for data that is already pixelated.
    pub fn add_pixel(&mut self, name: &str, age: i64, pixel: usize) -> Result<AddOutcome> {
        self.pixelation.validate(pixel)?;
        Ok(self.insert_point(name, age, pixel))
    }

    fn insert_point(&mut self, name: &str, age: i64, pixel: usize) -> AddOutcome {
        let name = canonical_name(name);
        if name.is_empty() {
            return AddOutcome::EmptyName;
        }

        let taxon = self
            .taxa
            .entry(name)
            .or_insert_with_key(|name| Taxon::new(name.clone(), RangeType::Points, age));
        if taxon.range_type() != RangeType::Points {
            tracing::debug!(
                taxon = taxon.name(),
                pixel,
                "point dropped: taxon has a density range"
            );
            return AddOutcome::TypeConflict;
        }

        if taxon.insert_point(pixel) {
            AddOutcome::Inserted
        } else {
            AddOutcome::Duplicate
        }
    }

    /// Set a density range for a taxon at a given age (in years)
    ///
    /// Densities are scaled so the largest is 1.0. Any previous range of
    /// the taxon is replaced. If a pixel is outside the pixelation, or no
    /// density is positive, the collection is left untouched.
    pub fn set<I>(&mut self, name: &str, age: i64, field: I) -> Result<()>
    where
        I: IntoIterator<Item = (usize, f64)>,
    {
        let name = canonical_name(name);
        if name.is_empty() {
            return Ok(());
        }

        let field: Vec<_> = field.into_iter().collect();
        for &(pixel, _) in &field {
            self.pixelation.validate(pixel)?;
        }

        let taxon = Taxon::from_densities(name.clone(), age, field)?;
        self.taxa.insert(name, taxon);
        Ok(())
    }

    /// Set the pixels of a taxon as a `points` range at a given age
    ///
    /// Only the pixel ids of `field` are used: every pixel gets a density
    /// of 1.0. Any previous range of the taxon is replaced.
    pub fn set_pixels<I>(&mut self, name: &str, age: i64, field: I) -> Result<()>
    where
        I: IntoIterator<Item = (usize, f64)>,
    {
        let name = canonical_name(name);
        if name.is_empty() {
            return Ok(());
        }

        let pixels: Vec<_> = field.into_iter().map(|(pixel, _)| pixel).collect();
        if pixels.is_empty() {
            return Err(RangeError::EmptyRange.into());
        }
        for &pixel in &pixels {
            self.pixelation.validate(pixel)?;
        }

        let taxon = Taxon::from_points(name.clone(), age, pixels);
        self.taxa.insert(name, taxon);
        Ok(())
    }

    /// Range map of a taxon
    ///
    /// The map goes from pixel ids to densities scaled so the maximum is
    /// 1.0 (for `points` ranges, every pixel is at 1.0).
    pub fn range(&self, name: &str) -> Option<&PixelMap> {
        self.taxon(name).map(Taxon::pixels)
    }

    /// Type of the range map of a taxon
    pub fn range_type(&self, name: &str) -> Option<RangeType> {
        self.taxon(name).map(Taxon::range_type)
    }

    /// Age of the range map of a taxon, 0 if the taxon is unknown
    pub fn age(&self, name: &str) -> i64 {
        self.taxon(name).map_or(0, Taxon::age)
    }

    /// Number of pixels in the range of a taxon
    pub fn pixel_count(&self, name: &str) -> usize {
        self.taxon(name).map_or(0, Taxon::len)
    }

    /// Full record of a taxon
    pub fn taxon(&self, name: &str) -> Option<&Taxon> {
        let name = canonical_name(name);
        if name.is_empty() {
            return None;
        }
        self.taxa.get(&name)
    }

    /// Whether the taxon is in the collection
    pub fn has_taxon(&self, name: &str) -> bool {
        self.taxon(name).is_some()
    }

    /// Remove a taxon, returns `true` if it was present
    pub fn delete(&mut self, name: &str) -> bool {
        let name = canonical_name(name);
        !name.is_empty() && self.taxa.remove(&name).is_some()
    }

    /// Names of the taxa in the collection, sorted
    pub fn taxa(&self) -> Vec<String> {
        let mut names: Vec<_> = self.taxa.keys().cloned().collect();
        names.sort_unstable();
        names
    }

    /// Taxon records sorted by name
    pub fn iter(&self) -> impl Iterator<Item = &Taxon> {
        let mut taxa: Vec<_> = self.taxa.values().collect();
        taxa.sort_unstable_by(|a, b| a.name().cmp(b.name()));
        taxa.into_iter()
    }

    /// Pixelation of the collection
    pub fn pixelation(&self) -> &P {
        &self.pixelation
    }

    /// Number of taxa
    pub fn len(&self) -> usize {
        self.taxa.len()
    }

    /// Whether the collection has no taxa
    pub fn is_empty(&self) -> bool {
        self.taxa.is_empty()
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use taxrange_core::ErrorCategory;

    pub(crate) fn make_collection() -> Collection {
        let mut coll = Collection::with_equator(360).unwrap();
        let data: [(&str, i64, &[(f64, f64)]); 3] = [
            ("Brontostoma discus", 0, &[(4.27, -72.54), (8.67, -83.56)]),
            (
                "Rhododendron ericoides",
                0,
                &[(4.08, 118.52), (3.86, 115.55), (6.08, 116.55), (6.15, 116.65)],
            ),
            ("Megazostrodon rudnerae", 201_600_000, &[(-44.1, -1.4)]),
        ];
        for (name, age, points) in data {
            for &(lat, lon) in points {
                coll.add(name, age, lat, lon);
            }
        }

        let rng = [
            (34661, 0.0833333),
            (34662, 0.2083333),
            (34663, 0.4166667),
            (34664, 0.2083333),
            (34665, 0.0833333),
        ];
        coll.set("Eoraptor lunensis", 230_000_000, rng).unwrap();
        coll
    }

    fn points(pixels: &[usize]) -> PixelMap {
        pixels.iter().map(|&px| (px, 1.0)).collect()
    }

    pub(crate) fn check_collection<P: Pixelation>(coll: &Collection<P>) {
        assert_eq!(coll.pixelation().equator(), 360);

        let taxa = [
            "Brontostoma discus",
            "Eoraptor lunensis",
            "Megazostrodon rudnerae",
            "Rhododendron ericoides",
        ];
        assert_eq!(coll.taxa(), taxa);
        for name in taxa {
            assert!(coll.has_taxon(name), "taxon {name:?} not found");
        }

        let tests = [
            ("Brontostoma discus", 0, &[17319, 19117][..]),
            ("Rhododendron ericoides", 0, &[18588, 19305, 19308][..]),
            ("Megazostrodon rudnerae", 201_600_000, &[34957][..]),
        ];
        for (name, age, pixels) in tests {
            assert_eq!(coll.range_type(name), Some(RangeType::Points), "taxon {name:?}");
            assert_eq!(coll.age(name), age, "taxon {name:?}");
            assert_eq!(coll.range(name), Some(&points(pixels)), "taxon {name:?}");
        }

        let name = "Eoraptor lunensis";
        assert_eq!(coll.range_type(name), Some(RangeType::Range));
        assert_eq!(coll.age(name), 230_000_000);
        let rng = coll.range(name).unwrap();
        let want: [(usize, f64); 5] = [
            (34661, 0.2),
            (34662, 0.5),
            (34663, 1.0),
            (34664, 0.5),
            (34665, 0.2),
        ];
        assert_eq!(rng.len(), want.len());
        for (px, density) in want {
            let got = rng[&px];
            assert!((got - density).abs() < 0.001, "pixel {px}: got {got}, want {density}");
        }
    }

    #[test]
    fn test_new_collection() {
        let coll = make_collection();
        check_collection(&coll);
        assert_eq!(coll.len(), 4);
    }

    #[test]
    fn test_add_points() {
        let mut coll = Collection::with_equator(360).unwrap();
        let name = "Brontostoma discus";
        assert_eq!(coll.add(name, 0, 4.27, -72.54), AddOutcome::Inserted);
        assert_eq!(coll.add(name, 0, 8.67, -83.56), AddOutcome::Inserted);
        assert_eq!(coll.add(name, 0, 8.67, -83.56), AddOutcome::Duplicate);

        assert_eq!(coll.range_type(name), Some(RangeType::Points));
        assert_eq!(coll.range(name), Some(&points(&[17319, 19117])));
    }

    #[test]
    fn test_add_pixel() {
        let mut coll = Collection::with_equator(360).unwrap();
        assert_eq!(coll.add_pixel("Homo sapiens", 0, 100).unwrap(), AddOutcome::Inserted);
        assert_eq!(coll.add_pixel("homo  SAPIENS", 0, 200).unwrap(), AddOutcome::Inserted);
        assert_eq!(coll.range("Homo sapiens"), Some(&points(&[100, 200])));

        let err = coll.add_pixel("Homo sapiens", 0, 41_258).unwrap_err();
        assert_eq!(err.category(), ErrorCategory::Bounds);
        assert_eq!(coll.pixel_count("Homo sapiens"), 2);
    }

    #[test]
    fn test_add_to_density_range_is_ignored() {
        let mut coll = make_collection();
        let name = "Eoraptor lunensis";
        let before = coll.range(name).cloned();

        assert_eq!(coll.add(name, 0, 4.27, -72.54), AddOutcome::TypeConflict);
        assert_eq!(coll.add_pixel(name, 0, 10).unwrap(), AddOutcome::TypeConflict);
        assert!(AddOutcome::TypeConflict.is_rejected());

        assert_eq!(coll.range_type(name), Some(RangeType::Range));
        assert_eq!(coll.range(name).cloned(), before);
        assert_eq!(coll.age(name), 230_000_000);
    }

    #[test]
    fn test_empty_names_are_ignored() {
        let mut coll = Collection::with_equator(360).unwrap();
        assert_eq!(coll.add("  ", 0, 0.0, 0.0), AddOutcome::EmptyName);
        assert_eq!(coll.add_pixel("", 0, 1).unwrap(), AddOutcome::EmptyName);
        coll.set(" \t", 0, [(1, 1.0)]).unwrap();
        coll.set_pixels("", 0, [(1, 1.0)]).unwrap();
        assert!(coll.is_empty());
        assert!(!coll.has_taxon(""));
        assert!(!coll.delete(""));
    }

    #[test]
    fn test_names_without_single_char_upper_case() {
        let mut coll = Collection::with_equator(360).unwrap();
        assert_eq!(coll.add_pixel("ßeta", 0, 5).unwrap(), AddOutcome::Inserted);
        assert_eq!(coll.taxa(), ["ßeta"]);
        for name in coll.taxa() {
            assert!(coll.has_taxon(&name), "taxon {name:?} not found");
        }
        assert!(coll.has_taxon("ßETA"));
    }

    #[test]
    fn test_set_scales_densities() {
        let mut coll = Collection::with_equator(360).unwrap();
        coll.set("Eoraptor lunensis", 230_000_000, [(10, 3.0), (11, 6.0), (12, 1.5)])
            .unwrap();
        let rng = coll.range("eoraptor lunensis").unwrap();
        let max = rng.values().copied().fold(0.0, f64::max);
        assert_eq!(max, 1.0);
        assert_eq!(rng[&10], 0.5);
        assert_eq!(rng[&12], 0.25);
    }

    #[test]
    fn test_set_replaces_points() {
        let mut coll = make_collection();
        let name = "Brontostoma discus";
        coll.set(name, 5, [(1, 0.5), (2, 0.25)]).unwrap();
        assert_eq!(coll.range_type(name), Some(RangeType::Range));
        assert_eq!(coll.age(name), 5);
        assert_eq!(coll.range(name).unwrap().len(), 2);
    }

    #[test]
    fn test_set_rejects_out_of_bounds_pixel() {
        let mut coll = make_collection();
        let name = "Eoraptor lunensis";
        let err = coll.set(name, 0, [(34661, 0.5), (41_258, 1.0)]).unwrap_err();
        assert!(matches!(
            err,
            crate::Error::Range(RangeError::PixelOutOfBounds { pixel: 41_258, .. })
        ));

        // The previous range is kept
        assert_eq!(coll.age(name), 230_000_000);
        assert_eq!(coll.range(name).unwrap().len(), 5);
    }

    #[test]
    fn test_set_rejects_empty_field() {
        let mut coll = Collection::with_equator(360).unwrap();
        let err = coll.set("Eoraptor lunensis", 0, Vec::new()).unwrap_err();
        assert_eq!(err.category(), ErrorCategory::Consistency);
        assert!(!coll.has_taxon("Eoraptor lunensis"));
    }

    #[test]
    fn test_set_pixels() {
        let mut coll = make_collection();
        let name = "Eoraptor lunensis";
        let rng = [(34662, 0.21), (34663, 0.42), (34664, 0.21), (34665, 0.08)];
        coll.set_pixels(name, 230_000_000, rng).unwrap();

        assert_eq!(coll.range_type(name), Some(RangeType::Points));
        assert_eq!(coll.age(name), 230_000_000);
        assert_eq!(coll.range(name), Some(&points(&[34662, 34663, 34664, 34665])));
        assert!(!coll.range(name).unwrap().contains_key(&34661));

        // Points can be added again
        assert_eq!(coll.add_pixel(name, 0, 34661).unwrap(), AddOutcome::Inserted);
    }

    #[test]
    fn test_set_pixels_bounds() {
        let mut coll = Collection::with_equator(360).unwrap();
        assert!(coll.set_pixels("A", 0, [(41_258, 1.0)]).is_err());
        assert!(coll.set_pixels("A", 0, Vec::new()).is_err());
        assert!(coll.is_empty());
    }

    #[test]
    fn test_unknown_taxon() {
        let coll = make_collection();
        assert_eq!(coll.range("Homo sapiens"), None);
        assert_eq!(coll.range_type("Homo sapiens"), None);
        assert_eq!(coll.age("Homo sapiens"), 0);
        assert_eq!(coll.pixel_count("Homo sapiens"), 0);
        assert!(!coll.has_taxon("Homo sapiens"));
    }

    #[test]
    fn test_delete() {
        let mut coll = make_collection();
        assert!(coll.delete("  megazostrodon RUDNERAE"));
        assert!(!coll.delete("Megazostrodon rudnerae"));
        assert!(!coll.has_taxon("Megazostrodon rudnerae"));
        assert_eq!(
            coll.taxa(),
            ["Brontostoma discus", "Eoraptor lunensis", "Rhododendron ericoides"]
        );
    }

    #[test]
    fn test_iter_is_sorted() {
        let coll = make_collection();
        let names: Vec<_> = coll.iter().map(Taxon::name).collect();
        assert_eq!(names, coll.taxa());
    }
}
