//! High-level API for box blurring.
//!
//! ## Purpose
//!
//! This module provides the primary user-facing entry points: the one-shot
//! [`blur`] function, and a fluent builder for callers that want diagnostics,
//! scratch reuse, or an extension crate's parallel pass.
//!
//! ## Design notes
//!
//! * **Ergonomic**: Fluent builder with sensible defaults for all parameters.
//! * **Polymorphic**: Marker types transition to specialized adapter builders,
//!   which is how extension crates substitute their own batch builder.
//! * **Validated**: Parameters are validated when `.build()` is called on the adapter.
//!
//! ### Configuration Flow
//!
//! 1. Create a [`BlurBuilder`] via `BoxBlur::new()`.
//! 2. Chain configuration methods (`.radius()`, `.return_diagnostics()`).
//! 3. Select an adapter via `.adapter(Batch)` and call `.build()`.

// Internal dependencies
use crate::adapters::batch::BatchBlurBuilder;
use crate::engine::executor::{BlurExecutor, BlurPassFn};
use crate::engine::validator::Validator;

// Publicly re-exported types
pub use crate::adapters::batch::{BatchBlur, DEFAULT_RADIUS};
pub use crate::engine::output::BlurResult;
pub use crate::evaluation::diagnostics::Diagnostics;
pub use crate::primitives::buffer::BlurBuffer;
pub use crate::primitives::errors::BlurError;
pub use crate::primitives::geometry::{CHANNELS, Dimensions};

/// Marker types for selecting execution adapters.
#[allow(non_snake_case)]
pub mod Adapter {
    pub use super::Batch;
}

// ============================================================================
// One-shot Entry Point
// ============================================================================

/// Blur an RGBA buffer in place with a separable box filter.
///
/// `pixels` must hold exactly `width * height * 4` bytes, row-major, with
/// `[R, G, B, A]` per pixel. Each output channel is the truncating mean of the
/// `(2 * radius + 1)²` neighbourhood, clipped to the image. A radius of 0
/// leaves the buffer unchanged.
///
/// On error, the buffer is left untouched.
///
/// ```rust
/// let mut pixels = vec![255u8; 4 * 4 * 4];
/// boxblur::blur(&mut pixels, 4, 4, 2)?;
/// assert!(pixels.iter().all(|&b| b == 255));
/// # Result::<(), boxblur::prelude::BlurError>::Ok(())
/// ```
pub fn blur(
    pixels: &mut [u8],
    width: usize,
    height: usize,
    radius: usize,
) -> Result<(), BlurError> {
    let dims = Dimensions::new(width, height);
    Validator::validate_buffer(pixels, dims)?;

    BlurExecutor::new().radius(radius).run(pixels, dims, None);
    Ok(())
}

// ============================================================================
// Builder
// ============================================================================

/// Fluent builder for configuring blur parameters and execution modes.
#[derive(Debug, Clone, Default)]
pub struct BlurBuilder {
    /// Window half-width in pixels.
    pub radius: Option<usize>,

    /// Compute before/after diagnostics.
    pub return_diagnostics: Option<bool>,

    // ======================================
    // DEV
    // ======================================
    /// Rows per parallel band.
    #[doc(hidden)]
    pub chunk_rows: Option<usize>,

    /// Custom two-pass routine.
    #[doc(hidden)]
    pub custom_pass: Option<BlurPassFn>,

    /// Parallel execution hint.
    #[doc(hidden)]
    pub parallel: Option<bool>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,
}

impl BlurBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Select an execution adapter to transition to an execution builder.
    pub fn adapter<A>(self, _adapter: A) -> A::Output
    where
        A: BlurAdapter,
    {
        A::convert(self)
    }

    /// Set the window radius (default: 5).
    pub fn radius(mut self, radius: usize) -> Self {
        if self.radius.is_some() {
            self.duplicate_param = Some("radius");
        }
        self.radius = Some(radius);
        self
    }

    /// Include before/after diagnostics in the result.
    pub fn return_diagnostics(mut self) -> Self {
        if self.return_diagnostics.is_some() {
            self.duplicate_param = Some("return_diagnostics");
        }
        self.return_diagnostics = Some(true);
        self
    }

    // ======================================
    // DEV
    // ======================================

    /// Set rows per parallel band.
    #[doc(hidden)]
    pub fn chunk_rows(mut self, chunk_rows: usize) -> Self {
        if self.chunk_rows.is_some() {
            self.duplicate_param = Some("chunk_rows");
        }
        self.chunk_rows = Some(chunk_rows);
        self
    }

    /// Set a custom two-pass routine.
    #[doc(hidden)]
    pub fn custom_pass(mut self, pass: BlurPassFn) -> Self {
        self.custom_pass = Some(pass);
        self
    }

    /// Set parallel execution hint.
    #[doc(hidden)]
    pub fn parallel(mut self, parallel: bool) -> Self {
        if self.parallel.is_some() {
            self.duplicate_param = Some("parallel");
        }
        self.parallel = Some(parallel);
        self
    }
}

// ============================================================================
// Adapters
// ============================================================================

/// Trait for transitioning from a generic builder to an execution builder.
pub trait BlurAdapter {
    /// The output execution builder.
    type Output;

    /// Convert a generic [`BlurBuilder`] into a specialized execution builder.
    fn convert(builder: BlurBuilder) -> Self::Output;
}

/// Marker for in-memory batch processing.
#[derive(Debug, Clone, Copy)]
pub struct Batch;

impl BlurAdapter for Batch {
    type Output = BatchBlurBuilder;

    fn convert(builder: BlurBuilder) -> Self::Output {
        let mut result = BatchBlurBuilder::default();

        // Override with user-provided values
        if let Some(radius) = builder.radius {
            result.radius = radius;
        }
        if let Some(rd) = builder.return_diagnostics {
            result.return_diagnostics = rd;
        }

        // ======================================
        // DEV
        // ======================================

        if let Some(cr) = builder.chunk_rows {
            result.chunk_rows = cr;
        }
        if let Some(cp) = builder.custom_pass {
            result.custom_pass = Some(cp);
        }
        if let Some(p) = builder.parallel {
            result.parallel = Some(p);
        }
        result.duplicate_param = builder.duplicate_param;

        result
    }
}
