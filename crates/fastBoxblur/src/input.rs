//! Input abstractions for box blurring.
//!
//! ## Purpose
//!
//! This module lets `apply` accept several pixel containers (slices, vectors,
//! ndarray arrays) through a single interface.
//!
//! ## Design notes
//!
//! * **Zero-copy**: Every implementation hands out a view of the caller's memory.
//! * **Fail-fast validation**: Arrays must be in standard (row-major, contiguous)
//!   layout; anything else is rejected before any byte is written.
//!
//! ## Key concepts
//!
//! * **PixelInput Trait**: Types that can lend a mutable, contiguous byte view.
//! * **Image Shape**: A 3-D array of shape `(height, width, 4)` carries its own geometry.
//!
//! ## Non-goals
//!
//! * This module does not convert between pixel formats or element types.

// External dependencies
use ndarray::{ArrayBase, DataMut, Dimension, Ix3};

// Export dependencies from boxblur crate
use boxblur::internals::primitives::errors::BlurError;
use boxblur::internals::primitives::geometry::{CHANNELS, Dimensions};

/// Trait for types that can be blurred in place.
pub trait PixelInput {
    /// Borrow the pixels as one contiguous, mutable RGBA byte slice.
    fn as_pixels_mut(&mut self) -> Result<&mut [u8], BlurError>;
}

impl PixelInput for [u8] {
    fn as_pixels_mut(&mut self) -> Result<&mut [u8], BlurError> {
        Ok(self)
    }
}

impl PixelInput for Vec<u8> {
    fn as_pixels_mut(&mut self) -> Result<&mut [u8], BlurError> {
        Ok(self.as_mut_slice())
    }
}

impl<S, D> PixelInput for ArrayBase<S, D>
where
    S: DataMut<Elem = u8>,
    D: Dimension,
{
    fn as_pixels_mut(&mut self) -> Result<&mut [u8], BlurError> {
        self.as_slice_mut().ok_or_else(|| {
            BlurError::InvalidInput("ndarray input must be contiguous in memory".to_string())
        })
    }
}

/// Geometry of a `(height, width, 4)` image array.
pub fn image_dimensions<S>(image: &ArrayBase<S, Ix3>) -> Result<Dimensions, BlurError>
where
    S: DataMut<Elem = u8>,
{
    let (height, width, channels) = image.dim();
    if channels != CHANNELS {
        return Err(BlurError::InvalidInput(format!(
            "image array must have shape (height, width, 4), got (_, _, {channels})"
        )));
    }
    Ok(Dimensions::new(width, height))
}
