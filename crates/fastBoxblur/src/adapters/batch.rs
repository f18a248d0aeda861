//! Batch adapter for parallel box blurring.
//!
//! ## Purpose
//!
//! This module provides the batch execution adapter of the extension crate:
//! one complete RGBA image in memory, blurred in place, with the two passes
//! optionally spread across CPU cores.
//!
//! ## Design notes
//!
//! * **Delegation**: Wraps `boxblur`'s batch builder; validation and
//!   diagnostics are inherited unchanged.
//! * **Parallelism**: Installs the rayon row-band pass (fastBoxblur extension).
//! * **Inputs**: Accepts any [`PixelInput`] and 3-D `ndarray` images.
//!
//! ## Key concepts
//!
//! * **Parallel by default**: `parallel(false)` restores the sequential routine.
//! * **Band height**: `chunk_rows` rows per unit of parallel work.
//!
//! ## Invariants
//!
//! * Parallel and sequential execution produce identical bytes.
//! * The buffer is untouched whenever an error is returned.
//!
//! ## Non-goals
//!
//! * This adapter does not create or size thread pools.

// Feature-gated imports
#[cfg(feature = "cpu")]
use crate::engine::executor::separable_pass_parallel;

// External dependencies
use ndarray::{ArrayBase, DataMut, Ix3};
use std::result::Result;

// Export dependencies from boxblur crate
use boxblur::internals::adapters::batch::{BatchBlur, BatchBlurBuilder};
use boxblur::internals::engine::output::BlurResult;
use boxblur::internals::primitives::buffer::BlurBuffer;
use boxblur::internals::primitives::errors::BlurError;

// Internal dependencies
use crate::input::{PixelInput, image_dimensions};

// ============================================================================
// Extended Batch Blur Builder
// ============================================================================

/// Builder for the batch blur processor with parallel support.
#[derive(Debug, Clone)]
pub struct ParallelBatchBlurBuilder {
    /// Base builder from the boxblur crate
    pub base: BatchBlurBuilder,
}

impl Default for ParallelBatchBlurBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ParallelBatchBlurBuilder {
    /// Create a new batch builder with default parameters.
    ///
    /// # Defaults
    ///
    /// * All base parameters from boxblur BatchBlurBuilder
    /// * parallel: true (fastBoxblur extension)
    fn new() -> Self {
        let base = BatchBlurBuilder::default().parallel(true);
        Self { base }
    }

    /// Set parallel execution mode.
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.base = self.base.parallel(parallel);
        self
    }

    /// Set rows per parallel band.
    pub fn chunk_rows(mut self, chunk_rows: usize) -> Self {
        self.base = self.base.chunk_rows(chunk_rows);
        self
    }

    // ========================================================================
    // Shared Setters
    // ========================================================================

    /// Set the window radius.
    pub fn radius(mut self, radius: usize) -> Self {
        self.base = self.base.radius(radius);
        self
    }

    /// Enable returning diagnostics in the result.
    pub fn return_diagnostics(mut self, enabled: bool) -> Self {
        self.base = self.base.return_diagnostics(enabled);
        self
    }

    // ========================================================================
    // Build Method
    // ========================================================================

    /// Build the batch processor.
    pub fn build(self) -> Result<ParallelBatchBlur, BlurError> {
        let mut builder = self.base;

        #[cfg(feature = "cpu")]
        {
            if builder.parallel.unwrap_or(true) {
                builder = builder.custom_pass(separable_pass_parallel);
            } else {
                builder.custom_pass = None;
            }
        }
        #[cfg(not(feature = "cpu"))]
        {
            // Fallback to sequential if cpu feature is disabled
            builder.custom_pass = None;
            builder.parallel = Some(false);
        }

        // Validation is centralized in the boxblur crate
        let inner = builder.build()?;

        Ok(ParallelBatchBlur { inner })
    }
}

// ============================================================================
// Extended Batch Blur Processor
// ============================================================================

/// Batch blur processor with parallel support.
#[derive(Debug, Clone)]
pub struct ParallelBatchBlur {
    inner: BatchBlur,
}

impl ParallelBatchBlur {
    /// Configured window radius.
    pub fn radius(&self) -> usize {
        self.inner.radius()
    }

    /// Blur `pixels` in place.
    pub fn apply<I>(
        &self,
        pixels: &mut I,
        width: usize,
        height: usize,
    ) -> Result<BlurResult, BlurError>
    where
        I: PixelInput + ?Sized,
    {
        self.inner.apply(pixels.as_pixels_mut()?, width, height)
    }

    /// Blur `pixels` in place, using `buffer` as scratch space.
    pub fn apply_with_buffer<I>(
        &self,
        pixels: &mut I,
        width: usize,
        height: usize,
        buffer: &mut BlurBuffer,
    ) -> Result<BlurResult, BlurError>
    where
        I: PixelInput + ?Sized,
    {
        self.inner
            .apply_with_buffer(pixels.as_pixels_mut()?, width, height, buffer)
    }

    /// Blur a `(height, width, 4)` image array in place.
    pub fn apply_image<S>(&self, image: &mut ArrayBase<S, Ix3>) -> Result<BlurResult, BlurError>
    where
        S: DataMut<Elem = u8>,
    {
        let dims = image_dimensions(image)?;
        self.inner
            .apply(image.as_pixels_mut()?, dims.width, dims.height)
    }
}
