//! Pixel bounds and resolution validation
//!
//! Pure checks of pixel ids and resolutions against a pixelation.

use crate::RangeError;

/// Validate that a pixel id lies within a pixelation of `len` pixels
pub const fn validate_pixel(pixel: usize, len: usize) -> Result<(), RangeError> {
    if pixel >= len {
        return Err(RangeError::PixelOutOfBounds { pixel, len });
    }
    Ok(())
}

/// Validate that a resolution matches the one bound to a collection
pub const fn validate_equator(got: usize, want: usize) -> Result<(), RangeError> {
    if got != want {
        return Err(RangeError::EquatorMismatch { got, want });
    }
    Ok(())
}
