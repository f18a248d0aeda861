//! High-level API for box blurring with parallel execution support.
//!
//! ## Purpose
//!
//! This module provides the primary user-facing entry points of the extension
//! crate. It re-uses the `boxblur` builder and swaps in adapters that spread
//! both passes across all available CPU cores.
//!
//! ## Design notes
//!
//! * **Fluent Integration**: Re-uses the base `boxblur` builder pattern.
//! * **Parallel-First**: Defaults to parallel execution.
//! * **Transparent**: The `Batch` marker selects the parallel builder.
//!
//! ### Configuration Flow
//!
//! 1. Create a [`BlurBuilder`] via `BoxBlur::new()`.
//! 2. Chain configuration methods (`.radius()`, `.return_diagnostics()`).
//! 3. Select an adapter via `.adapter(Batch)` to get a parallel execution builder.

// Feature-gated imports
#[cfg(feature = "cpu")]
use crate::engine::executor::separable_pass_parallel;

// External dependencies
use log::trace;

// Import base marker types for delegation
use boxblur::internals::api::Batch as BaseBatch;
use boxblur::internals::engine::executor::BlurExecutor;
use boxblur::internals::engine::validator::Validator;

// Internal dependencies
use crate::adapters::batch::ParallelBatchBlurBuilder;
use crate::input::PixelInput;

// Publicly re-exported types
pub use boxblur::internals::api::{BlurAdapter, BlurBuilder, DEFAULT_RADIUS};
pub use boxblur::internals::engine::executor::DEFAULT_CHUNK_ROWS;
pub use boxblur::internals::engine::output::BlurResult;
pub use boxblur::internals::evaluation::diagnostics::Diagnostics;
pub use boxblur::internals::primitives::buffer::BlurBuffer;
pub use boxblur::internals::primitives::errors::BlurError;
pub use boxblur::internals::primitives::geometry::Dimensions;

// ============================================================================
// Adapter Module
// ============================================================================

/// Adapter selection namespace.
#[allow(non_snake_case)]
pub mod Adapter {
    pub use super::Batch;
}

// ============================================================================
// One-shot Entry Point
// ============================================================================

/// Blur an RGBA buffer in place, running both passes in parallel.
///
/// Same contract and output as `boxblur::blur`. Without the `cpu` feature
/// this runs the sequential routine.
pub fn blur<I>(pixels: &mut I, width: usize, height: usize, radius: usize) -> Result<(), BlurError>
where
    I: PixelInput + ?Sized,
{
    let pixels = pixels.as_pixels_mut()?;
    let dims = Dimensions::new(width, height);
    Validator::validate_buffer(pixels, dims)?;

    #[cfg(feature = "cpu")]
    let executor = BlurExecutor::new()
        .radius(radius)
        .parallel(true)
        .custom_pass(Some(separable_pass_parallel));
    #[cfg(not(feature = "cpu"))]
    let executor = BlurExecutor::new().radius(radius);

    let output = executor.run(pixels, dims, None);
    trace!(
        "blur {}x{} radius {} done (parallel: {})",
        width, height, radius, output.parallel_used
    );
    Ok(())
}

// ============================================================================
// Adapter Marker Types
// ============================================================================

/// Marker for parallel in-memory batch processing.
#[derive(Debug, Clone, Copy)]
pub struct Batch;

impl BlurAdapter for Batch {
    type Output = ParallelBatchBlurBuilder;

    fn convert(builder: BlurBuilder) -> Self::Output {
        // Determine parallel mode: user choice OR default to true for fastBoxblur Batch
        let parallel = builder.parallel.unwrap_or(true);

        // Delegate to base implementation to create base builder
        let mut base = <BaseBatch as BlurAdapter>::convert(builder);
        base = base.parallel(parallel);

        // Wrap with extension fields
        ParallelBatchBlurBuilder { base }
    }
}
