//! Isolatitude pixelation of the sphere
//!
//! The sphere is cut into rings of constant latitude, evenly spaced from
//! the north pole to the south pole, with one ring on the equator. Each ring
//! is divided into pixels of roughly the same width, so the number of pixels
//! in a ring is proportional to the sine of its colatitude. Pixel ids are
//! assigned ring by ring from the north pole, west to east starting at
//! longitude -180.

use taxrange_core::{Pixelation, RangeError};

/// One ring of constant latitude
#[derive(Debug, Clone, Copy, PartialEq)]
struct Ring {
    /// Id of the westernmost pixel of the ring
    first: usize,
    /// Number of pixels in the ring
    count: usize,
    /// Latitude of the ring, in degrees
    lat: f64,
}

/// Isolatitude pixelation with a given number of pixels at the equator
#[derive(Debug, Clone, PartialEq)]
pub struct Isolatitude {
    equator: usize,
    /// Latitude distance between rings, in degrees
    ring_step: f64,
    rings: Vec<Ring>,
    len: usize,
}

impl Isolatitude {
    /// Smallest supported equator (three rings: both poles and the equator)
    pub const MIN_EQUATOR: usize = 4;

    /// Largest supported equator (pixels about 150 m wide at the equator)
    pub const MAX_EQUATOR: usize = 1 << 18;

    /// Create a pixelation with `equator` pixels on the equatorial ring
    pub fn new(equator: usize) -> Result<Self, RangeError> {
        if !(Self::MIN_EQUATOR..=Self::MAX_EQUATOR).contains(&equator) {
            return Err(RangeError::InvalidEquator(equator));
        }

        // An odd number of rings puts a ring on the equator
        let mut ring_count = equator / 2;
        if ring_count % 2 == 0 {
            ring_count += 1;
        }
        let ring_step = 180.0 / (ring_count - 1) as f64;

        let mut rings = Vec::with_capacity(ring_count);
        let mut first = 0;
        for r in 0..ring_count {
            let colat = r as f64 * ring_step;
            let count = ((equator as f64 * colat.to_radians().sin()).round() as usize).max(1);
            rings.push(Ring {
                first,
                count,
                lat: 90.0 - colat,
            });
            first = first
                .checked_add(count)
                .ok_or(RangeError::InvalidEquator(equator))?;
        }

        Ok(Self {
            equator,
            ring_step,
            rings,
            len: first,
        })
    }

    /// Number of rings
    pub fn rings(&self) -> usize {
        self.rings.len()
    }

    /// Number of pixels in the ring that contains a pixel
    pub fn ring_len(&self, pixel: usize) -> Option<usize> {
        self.ring_of(pixel).map(|ring| ring.count)
    }

    fn ring_of(&self, pixel: usize) -> Option<&Ring> {
        if pixel >= self.len {
            return None;
        }
        let idx = self.rings.partition_point(|ring| ring.first <= pixel);
        self.rings.get(idx.checked_sub(1)?)
    }
}

impl Pixelation for Isolatitude {
    fn with_equator(equator: usize) -> Result<Self, RangeError> {
        Self::new(equator)
    }

    fn equator(&self) -> usize {
        self.equator
    }

    fn pixel_count(&self) -> usize {
        self.len
    }

    fn pixel(&self, lat: f64, lon: f64) -> usize {
        let colat = 90.0 - lat.clamp(-90.0, 90.0);
        let r = ((colat / self.ring_step).round() as usize).min(self.rings.len() - 1);
        let ring = &self.rings[r];

        let n = ring.count as i64;
        let col = ((lon + 180.0) * ring.count as f64 / 360.0).round() as i64;
        ring.first + col.rem_euclid(n) as usize
    }

    fn coordinates(&self, pixel: usize) -> Option<(f64, f64)> {
        let ring = self.ring_of(pixel)?;
        let col = pixel - ring.first;
        let lon = col as f64 * 360.0 / ring.count as f64 - 180.0;
        Some((ring.lat, lon))
    }
}
