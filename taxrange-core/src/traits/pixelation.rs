//! Pixelation trait for taxon range collections
//!
//! A pixelation discretizes the sphere into cells identified by integer
//! ids. Collections only rely on this interface, so any discretization
//! with a fixed number of cells can back a collection.

use crate::Result;

/// Discretization of the sphere into numbered pixels
///
/// Pixel ids run from `0` to `pixel_count() - 1`.
pub trait Pixelation {
    /// Build a pixelation with `equator` pixels on the equatorial ring
    ///
    /// Fails with `RangeError::InvalidEquator` if the resolution is not
    /// supported.
    fn with_equator(equator: usize) -> Result<Self>
    where
        Self: Sized;

    /// Number of pixels on the equatorial ring
    fn equator(&self) -> usize;

    /// Total number of pixels
    fn pixel_count(&self) -> usize;

    /// Id of the pixel that contains a point
    ///
    /// Latitude and longitude are in degrees.
    fn pixel(&self, lat: f64, lon: f64) -> usize;

    /// Latitude and longitude (in degrees) of the center of a pixel
    ///
    /// Returns `None` if the id is out of range.
    fn coordinates(&self, pixel: usize) -> Option<(f64, f64)>;

    /// Whether a pixel id belongs to this pixelation
    fn contains(&self, pixel: usize) -> bool {
        pixel < self.pixel_count()
    }

    /// Validate a pixel id against this pixelation
    fn validate(&self, pixel: usize) -> Result<()> {
        crate::validate_pixel(pixel, self.pixel_count())
    }
}
