//! Execution engine for the separable box blur.
//!
//! ## Purpose
//!
//! This module runs the two passes of the blur over a validated buffer. It
//! owns the policy for the intermediate buffer and decides whether the
//! sequential routine or an injected pass function does the work.
//!
//! ## Design notes
//!
//! * **Two passes, one scratch**: Rows are blurred from the caller's buffer into
//!   scratch, then columns are blurred from scratch back into the caller's buffer.
//! * **Pluggable**: Extension crates supply a [`BlurPassFn`] (e.g., a rayon
//!   row-band pass) that replaces the sequential routine when `parallel` is set.
//! * **Shared primitives**: Sequential and injected passes are expected to use
//!   the same band functions, so results are bit-identical.
//!
//! ## Key concepts
//!
//! * **Identity shortcut**: Radius 0 leaves the buffer untouched and allocates nothing.
//! * **Scratch reuse**: Callers may pass a [`BlurBuffer`]; otherwise one is allocated per call.
//!
//! ## Invariants
//!
//! * Inputs reaching the executor have already been validated.
//! * The caller's buffer is written only by the final (vertical) pass.
//!
//! ## Non-goals
//!
//! * This module does not validate geometry (handled by `validator`).
//! * This module does not implement parallelism itself.

// External dependencies
use log::{debug, trace};

// Internal dependencies
use crate::algorithms::horizontal::horizontal_pass;
use crate::algorithms::vertical::vertical_pass;
pub use crate::primitives::buffer::BlurBuffer;
use crate::primitives::geometry::Dimensions;

// ============================================================================
// Type Definitions
// ============================================================================

/// Signature for a custom two-pass routine.
#[doc(hidden)]
pub type BlurPassFn = fn(
    &mut [u8],  // pixels (input, and output of the vertical pass)
    &mut [u8],  // scratch (output of the horizontal pass)
    Dimensions, // geometry
    usize,      // radius
    usize,      // chunk_rows
);

/// Default number of rows per parallel band.
pub const DEFAULT_CHUNK_ROWS: usize = 64;

/// Output from blur execution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExecutorOutput {
    /// Whether the injected pass function ran instead of the sequential one.
    pub parallel_used: bool,

    /// Whether the call was an identity (radius 0) and no pass ran at all.
    pub identity: bool,
}

// ============================================================================
// Configuration
// ============================================================================

/// Configuration for blur execution.
#[derive(Debug, Clone)]
pub struct BlurConfig {
    /// Half-width of the box window in pixels.
    pub radius: usize,

    /// Run `custom_pass` instead of the sequential routine when available.
    pub parallel: bool,

    /// Rows per band handed to `custom_pass`.
    pub chunk_rows: usize,

    /// Custom two-pass routine.
    #[doc(hidden)]
    pub custom_pass: Option<BlurPassFn>,
}

impl Default for BlurConfig {
    fn default() -> Self {
        Self {
            radius: 0,
            parallel: false,
            chunk_rows: DEFAULT_CHUNK_ROWS,
            custom_pass: None,
        }
    }
}

// ============================================================================
// Executor
// ============================================================================

/// Unified executor for the separable box blur.
#[derive(Debug, Clone, Default)]
pub struct BlurExecutor {
    config: BlurConfig,
}

impl BlurExecutor {
    /// Create an executor with default settings (radius 0, sequential).
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an executor from an existing configuration.
    pub fn from_config(config: &BlurConfig) -> Self {
        Self {
            config: config.clone(),
        }
    }

    /// Set the window radius.
    pub fn radius(mut self, radius: usize) -> Self {
        self.config.radius = radius;
        self
    }

    /// Set the parallel execution hint.
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.config.parallel = parallel;
        self
    }

    /// Set rows per parallel band.
    pub fn chunk_rows(mut self, chunk_rows: usize) -> Self {
        self.config.chunk_rows = chunk_rows;
        self
    }

    /// Set a custom two-pass routine.
    #[doc(hidden)]
    pub fn custom_pass(mut self, pass: Option<BlurPassFn>) -> Self {
        self.config.custom_pass = pass;
        self
    }

    /// Run with an explicit configuration.
    pub fn run_with_config(
        pixels: &mut [u8],
        dims: Dimensions,
        config: BlurConfig,
        buffer: Option<&mut BlurBuffer>,
    ) -> ExecutorOutput {
        Self { config }.run(pixels, dims, buffer)
    }

    /// Blur `pixels` in place.
    ///
    /// `pixels.len()` must equal `dims.byte_len()`.
    pub fn run(
        &self,
        pixels: &mut [u8],
        dims: Dimensions,
        buffer: Option<&mut BlurBuffer>,
    ) -> ExecutorOutput {
        debug_assert_eq!(pixels.len(), dims.byte_len(), "run: unvalidated buffer");

        let radius = self.config.radius;
        if radius == 0 {
            trace!("radius 0 on {}x{}: identity", dims.width, dims.height);
            return ExecutorOutput {
                parallel_used: false,
                identity: true,
            };
        }

        let mut owned;
        let buffer = match buffer {
            Some(buffer) => buffer,
            None => {
                owned = BlurBuffer::with_capacity(pixels.len());
                &mut owned
            }
        };
        let scratch = buffer.prepare(pixels.len());

        let pass = match self.config.custom_pass {
            Some(pass) if self.config.parallel => Some(pass),
            _ => None,
        };

        debug!(
            "blurring {}x{} with radius {} ({})",
            dims.width,
            dims.height,
            radius,
            if pass.is_some() {
                "custom pass"
            } else {
                "sequential"
            }
        );

        match pass {
            Some(pass) => pass(pixels, scratch, dims, radius, self.config.chunk_rows),
            None => Self::separable_pass(pixels, scratch, dims, radius, self.config.chunk_rows),
        }

        ExecutorOutput {
            parallel_used: pass.is_some(),
            identity: false,
        }
    }

    /// Sequential two-pass routine. Matches [`BlurPassFn`]; `chunk_rows` is unused.
    pub fn separable_pass(
        pixels: &mut [u8],
        scratch: &mut [u8],
        dims: Dimensions,
        radius: usize,
        _chunk_rows: usize,
    ) {
        horizontal_pass(pixels, scratch, dims, radius);
        vertical_pass(scratch, pixels, dims, radius);
    }
}
