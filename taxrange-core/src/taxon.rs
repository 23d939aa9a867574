//! Taxon range records
//!
//! A `Taxon` holds the range map of a single taxon: its type, the age of the
//! map and the density at every occupied pixel. Pixels with no density are
//! never stored.

use alloc::string::String;
use alloc::vec::Vec;

use crate::format::constants::MIN_DENSITY;
use crate::{RangeError, RangeType, Result};

/// Pixel id to density map
pub type PixelMap = hashbrown::HashMap<usize, f64>;

/// Range map of a single taxon
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Taxon {
    name: String,
    range_type: RangeType,
    age: i64,
    pixels: PixelMap,
}

impl Taxon {
    /// Create an empty record
    ///
    /// The name is expected to be in canonical form already.
    pub fn new(name: String, range_type: RangeType, age: i64) -> Self {
        Self {
            name,
            range_type,
            age,
            pixels: PixelMap::new(),
        }
    }

    /// Create a presence/absence record from a set of pixels
    pub fn from_points<I>(name: String, age: i64, pixels: I) -> Self
    where
        I: IntoIterator<Item = usize>,
    {
        let mut taxon = Self::new(name, RangeType::Points, age);
        taxon.pixels = pixels.into_iter().map(|px| (px, 1.0)).collect();
        taxon
    }

    /// Create a density record, scaled so the maximum density is 1.0
    ///
    /// Non-positive values are ignored, as are values that fall below
    /// `MIN_DENSITY` once scaled.
    pub fn from_densities<I>(name: String, age: i64, field: I) -> Result<Self>
    where
        I: IntoIterator<Item = (usize, f64)>,
    {
        let mut taxon = Self::new(name, RangeType::Range, age);
        taxon.pixels = field
            .into_iter()
            .filter(|&(_, d)| d.is_finite() && d > 0.0)
            .collect();

        let max = taxon.max_density();
        if max <= 0.0 {
            return Err(RangeError::EmptyRange);
        }
        taxon.scale(max);
        Ok(taxon)
    }

    /// Canonical name of the taxon
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Type of the range map
    pub fn range_type(&self) -> RangeType {
        self.range_type
    }

    /// Age of the range map
    pub fn age(&self) -> i64 {
        self.age
    }

    /// Density at every occupied pixel
    pub fn pixels(&self) -> &PixelMap {
        &self.pixels
    }

    /// Number of occupied pixels
    pub fn len(&self) -> usize {
        self.pixels.len()
    }

    /// Whether the record has no occupied pixel
    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    /// Check that a row's type and age agree with the record
    pub fn check(&self, range_type: RangeType, age: i64) -> Result<()> {
        if self.range_type != range_type {
            return Err(RangeError::TypeMismatch {
                got: range_type,
                want: self.range_type,
            });
        }
        if self.age != age {
            return Err(RangeError::AgeMismatch {
                got: age,
                want: self.age,
            });
        }
        Ok(())
    }

    /// Mark a pixel as present, returns `true` if it was not already there
    pub fn insert_point(&mut self, pixel: usize) -> bool {
        self.pixels.insert(pixel, 1.0).is_none()
    }

    /// Set the raw (unscaled) density of a pixel
    ///
    /// A zero density removes the pixel. Call `scale` once every density
    /// is in place.
    pub fn insert_density(&mut self, pixel: usize, density: f64) {
        if density > 0.0 {
            self.pixels.insert(pixel, density);
        } else {
            self.pixels.remove(&pixel);
        }
    }

    /// Largest stored density, 0.0 for an empty record
    pub fn max_density(&self) -> f64 {
        self.pixels.values().copied().fold(0.0, f64::max)
    }

    /// Divide every density by `max` and drop the ones below `MIN_DENSITY`
    ///
    /// Densities are only divided if `max` is positive and not already 1.0;
    /// values below `MIN_DENSITY` are dropped in every case.
    pub fn scale(&mut self, max: f64) {
        let divide = max > 0.0 && max != 1.0;
        self.pixels.retain(|_, d| {
            if divide {
                *d /= max;
            }
            *d >= MIN_DENSITY
        });
    }

    /// Pixels with their densities, in ascending pixel order
    pub fn sorted_pixels(&self) -> Vec<(usize, f64)> {
        let mut pixels: Vec<_> = self.pixels.iter().map(|(&px, &d)| (px, d)).collect();
        pixels.sort_unstable_by_key(|&(px, _)| px);
        pixels
    }
}
