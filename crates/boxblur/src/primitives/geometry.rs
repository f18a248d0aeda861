//! Image geometry for tightly packed RGBA buffers.
//!
//! ## Purpose
//!
//! This module provides [`Dimensions`], the width/height pair that describes
//! how a flat byte buffer maps onto pixels. Every other layer indexes pixels
//! through it, so the layout rules live in one place.
//!
//! ## Key concepts
//!
//! * **Layout**: `[R, G, B, A]` per pixel, row-major, no padding between rows.
//! * **Byte length**: `width * height * CHANNELS`.
//!
//! ## Invariants
//!
//! * Constructing `Dimensions` does not validate; see `Validator::validate_dimensions`.

/// Number of interleaved 8-bit channels per pixel.
pub const CHANNELS: usize = 4;

/// Width and height of an RGBA image in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Dimensions {
    /// Pixels per row.
    pub width: usize,

    /// Number of rows.
    pub height: usize,
}

impl Dimensions {
    /// Create a new geometry descriptor.
    #[inline]
    pub const fn new(width: usize, height: usize) -> Self {
        Self { width, height }
    }

    /// Total number of pixels.
    #[inline]
    pub const fn pixel_count(&self) -> usize {
        self.width * self.height
    }

    /// Byte length of one row.
    #[inline]
    pub const fn row_bytes(&self) -> usize {
        self.width * CHANNELS
    }

    /// Byte length of the whole buffer.
    #[inline]
    pub const fn byte_len(&self) -> usize {
        self.pixel_count() * CHANNELS
    }

    /// Byte length of the whole buffer, or `None` if it overflows `usize`.
    #[inline]
    pub fn checked_byte_len(&self) -> Option<usize> {
        self.width
            .checked_mul(self.height)
            .and_then(|px| px.checked_mul(CHANNELS))
    }

    /// Byte offset of the pixel at `(x, y)`.
    #[inline]
    pub const fn offset(&self, x: usize, y: usize) -> usize {
        (y * self.width + x) * CHANNELS
    }
}
