//! Error types for blur operations.
//!
//! ## Purpose
//!
//! This module defines the error conditions that can occur before a blur is
//! applied: malformed geometry, buffers that do not match their geometry, and
//! builder misconfiguration.
//!
//! ## Design notes
//!
//! * **Contextual**: Errors carry the offending values (e.g., expected vs. actual length).
//! * **All-or-nothing**: Every variant is raised before the first byte of the buffer is written.
//! * **No-std**: Supports `no_std` environments by using `alloc` for dynamic messages.
//! * **Trait Implementation**: Implements `Display` and `std::error::Error` (when `std` is enabled).
//!
//! ## Key concepts
//!
//! 1. **Contract violations**: Zero dimensions, overflowing byte length, buffer length mismatch.
//! 2. **Configuration errors**: Invalid band height, parameters set twice.
//! 3. **Input adaptation**: Containers that cannot be viewed as a contiguous RGBA slice.
//!
//! ## Invariants
//!
//! * Degenerate but valid inputs (radius 0, 1-pixel lines, huge radii) are never errors.
//!
//! ## Non-goals
//!
//! * This module does not perform the validation logic itself.
//! * This module does not attempt partial recovery.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::String;
#[cfg(feature = "std")]
use std::error::Error;
#[cfg(feature = "std")]
use std::string::String;

// External dependencies
use core::fmt::{Display, Formatter, Result};

// ============================================================================
// Error Type
// ============================================================================

/// Error type for blur operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlurError {
    /// Width and height must both be at least 1.
    InvalidDimensions {
        /// Requested width in pixels.
        width: usize,
        /// Requested height in pixels.
        height: usize,
    },

    /// `width * height * 4` does not fit in `usize`.
    DimensionOverflow {
        /// Requested width in pixels.
        width: usize,
        /// Requested height in pixels.
        height: usize,
    },

    /// Buffer length must equal `width * height * 4`.
    MismatchedBuffer {
        /// Byte length implied by the geometry.
        expected: usize,
        /// Byte length of the buffer provided.
        got: usize,
    },

    /// Parallel bands must contain at least one row.
    InvalidChunkRows(usize),

    /// Generic invalid input error with a descriptive message.
    InvalidInput(String),

    /// Parameter was set multiple times in the builder.
    DuplicateParameter {
        /// Name of the parameter that was set multiple times.
        parameter: &'static str,
    },
}

// ============================================================================
// Display Implementation
// ============================================================================

impl Display for BlurError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::InvalidDimensions { width, height } => {
                write!(
                    f,
                    "Invalid dimensions: {width}x{height} (width and height must be > 0)"
                )
            }
            Self::DimensionOverflow { width, height } => {
                write!(
                    f,
                    "Dimension overflow: {width}x{height}x4 bytes exceeds the addressable size"
                )
            }
            Self::MismatchedBuffer { expected, got } => {
                write!(
                    f,
                    "Buffer length mismatch: expected {expected} bytes (width * height * 4), got {got}"
                )
            }
            Self::InvalidChunkRows(rows) => {
                write!(f, "Invalid chunk_rows: {rows} (must be at least 1)")
            }
            Self::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            Self::DuplicateParameter { parameter } => {
                write!(
                    f,
                    "Parameter '{parameter}' was set multiple times. Each parameter can only be configured once."
                )
            }
        }
    }
}

// ============================================================================
// Standard Error Trait
// ============================================================================

#[cfg(feature = "std")]
impl Error for BlurError {}
