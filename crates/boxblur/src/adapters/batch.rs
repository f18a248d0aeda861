//! Batch adapter for in-memory blurring.
//!
//! ## Purpose
//!
//! This module provides the batch execution adapter: one complete RGBA image
//! in memory, blurred in place in a single call.
//!
//! ## Design notes
//!
//! * **Processing**: Validates, optionally snapshots for diagnostics, executes.
//! * **Delegation**: Delegates computation to the execution engine.
//! * **Reusable**: A built `BatchBlur` holds only configuration and can be
//!   applied to any number of buffers, including concurrently.
//!
//! ## Key concepts
//!
//! * **Builder Pattern**: Fluent API for configuration with sensible defaults.
//! * **All-or-nothing**: Validation completes before the buffer is touched.
//!
//! ## Invariants
//!
//! * The buffer length must equal `width * height * 4`.
//! * Width and height must be non-zero.
//! * The buffer length is never changed.
//!
//! ## Non-goals
//!
//! * This adapter does not tile images or carry state between frames.

// External dependencies
use log::warn;

// Internal dependencies
use crate::engine::executor::{BlurConfig, BlurExecutor, BlurPassFn, DEFAULT_CHUNK_ROWS};
use crate::engine::output::BlurResult;
use crate::engine::validator::Validator;
use crate::evaluation::diagnostics::Diagnostics;
use crate::primitives::buffer::BlurBuffer;
use crate::primitives::errors::BlurError;
use crate::primitives::geometry::Dimensions;

/// Radius applied when none is configured; the fixed radius of the canvas demo.
pub const DEFAULT_RADIUS: usize = 5;

// ============================================================================
// Batch Blur Builder
// ============================================================================

/// Builder for the batch blur processor.
#[derive(Debug, Clone)]
pub struct BatchBlurBuilder {
    /// Window half-width in pixels.
    pub radius: usize,

    /// Whether to compute diagnostic statistics.
    pub return_diagnostics: bool,

    // ++++++++++++++++++++++++++++++++++++++
    // +               DEV                  +
    // ++++++++++++++++++++++++++++++++++++++
    /// Rows per parallel band.
    #[doc(hidden)]
    pub chunk_rows: usize,

    /// Custom two-pass routine.
    #[doc(hidden)]
    pub custom_pass: Option<BlurPassFn>,

    /// Parallel execution hint.
    #[doc(hidden)]
    pub parallel: Option<bool>,

    /// Tracks if any parameter was set multiple times (for validation)
    #[doc(hidden)]
    pub(crate) duplicate_param: Option<&'static str>,
}

impl Default for BatchBlurBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl BatchBlurBuilder {
    /// Create a new batch builder with default parameters.
    fn new() -> Self {
        Self {
            radius: DEFAULT_RADIUS,
            return_diagnostics: false,
            chunk_rows: DEFAULT_CHUNK_ROWS,
            custom_pass: None,
            parallel: None,
            duplicate_param: None,
        }
    }

    // ========================================================================
    // Setters
    // ========================================================================

    /// Set the window radius.
    pub fn radius(mut self, radius: usize) -> Self {
        self.radius = radius;
        self
    }

    /// Enable returning diagnostics in the result.
    pub fn return_diagnostics(mut self, enabled: bool) -> Self {
        self.return_diagnostics = enabled;
        self
    }

    // ++++++++++++++++++++++++++++++++++++++
    // +               DEV                  +
    // ++++++++++++++++++++++++++++++++++++++

    /// Set parallel execution hint.
    #[doc(hidden)]
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = Some(parallel);
        self
    }

    /// Set rows per parallel band.
    #[doc(hidden)]
    pub fn chunk_rows(mut self, chunk_rows: usize) -> Self {
        self.chunk_rows = chunk_rows;
        self
    }

    /// Set a custom two-pass routine.
    #[doc(hidden)]
    pub fn custom_pass(mut self, pass: BlurPassFn) -> Self {
        self.custom_pass = Some(pass);
        self
    }

    // ========================================================================
    // Build Method
    // ========================================================================

    /// Build the batch processor.
    pub fn build(self) -> Result<BatchBlur, BlurError> {
        // Check for duplicate parameter configuration
        Validator::validate_no_duplicates(self.duplicate_param)?;

        // Validate band height
        Validator::validate_chunk_rows(self.chunk_rows)?;

        let parallel = self.parallel.unwrap_or(false);
        if parallel && self.custom_pass.is_none() {
            warn!("parallel execution requested without a parallel pass; running sequentially");
        }

        Ok(BatchBlur {
            config: BlurConfig {
                radius: self.radius,
                parallel,
                chunk_rows: self.chunk_rows,
                custom_pass: self.custom_pass,
            },
            return_diagnostics: self.return_diagnostics,
        })
    }
}

// ============================================================================
// Batch Blur Processor
// ============================================================================

/// Batch blur processor.
#[derive(Debug, Clone)]
pub struct BatchBlur {
    config: BlurConfig,
    return_diagnostics: bool,
}

impl BatchBlur {
    /// Configured window radius.
    pub fn radius(&self) -> usize {
        self.config.radius
    }

    /// Blur `pixels` in place.
    pub fn apply(
        &self,
        pixels: &mut [u8],
        width: usize,
        height: usize,
    ) -> Result<BlurResult, BlurError> {
        self.execute(pixels, Dimensions::new(width, height), None)
    }

    /// Blur `pixels` in place, using `buffer` as scratch space.
    pub fn apply_with_buffer(
        &self,
        pixels: &mut [u8],
        width: usize,
        height: usize,
        buffer: &mut BlurBuffer,
    ) -> Result<BlurResult, BlurError> {
        self.execute(pixels, Dimensions::new(width, height), Some(buffer))
    }

    fn execute(
        &self,
        pixels: &mut [u8],
        dims: Dimensions,
        buffer: Option<&mut BlurBuffer>,
    ) -> Result<BlurResult, BlurError> {
        Validator::validate_buffer(pixels, dims)?;

        let before = self.return_diagnostics.then(|| pixels.to_vec());

        let output = BlurExecutor::from_config(&self.config).run(pixels, dims, buffer);

        let diagnostics = before.map(|before| Diagnostics::compute(&before, pixels));

        Ok(BlurResult {
            dimensions: dims,
            radius: self.config.radius,
            parallel_used: output.parallel_used,
            diagnostics,
        })
    }
}
