//! Input validation for blur configuration and pixel buffers.
//!
//! ## Purpose
//!
//! This module checks every precondition of a blur call before any byte is
//! written: non-zero geometry, a byte length that fits in `usize`, and a
//! buffer whose length matches that geometry exactly.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Efficiency**: All checks are O(1); no pixel data is inspected.
//!
//! ## Invariants
//!
//! * A buffer that passes `validate_buffer` can be indexed with
//!   `Dimensions::offset` for every in-range `(x, y)` without panicking.
//! * Validation logic is deterministic and side-effect free.
//!
//! ## Non-goals
//!
//! * This module does not truncate, pad, or otherwise repair buffers.
//! * This module does not perform the blur itself.

// Internal dependencies
use crate::primitives::errors::BlurError;
use crate::primitives::geometry::Dimensions;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for blur configuration and input buffers.
///
/// Provides static methods that return `Result<(), BlurError>` and fail fast
/// upon identifying the first violation.
pub struct Validator;

impl Validator {
    // ========================================================================
    // Core Input Validation
    // ========================================================================

    /// Validate geometry: both sides non-zero and the byte length addressable.
    pub fn validate_dimensions(dims: Dimensions) -> Result<usize, BlurError> {
        let Dimensions { width, height } = dims;

        // Check 1: Non-zero sides
        if width == 0 || height == 0 {
            return Err(BlurError::InvalidDimensions { width, height });
        }

        // Check 2: Byte length fits in usize
        dims.checked_byte_len()
            .ok_or(BlurError::DimensionOverflow { width, height })
    }

    /// Validate a pixel buffer against its geometry.
    pub fn validate_buffer(pixels: &[u8], dims: Dimensions) -> Result<(), BlurError> {
        let expected = Self::validate_dimensions(dims)?;

        if pixels.len() != expected {
            return Err(BlurError::MismatchedBuffer {
                expected,
                got: pixels.len(),
            });
        }

        Ok(())
    }

    // ========================================================================
    // Parameter Validation
    // ========================================================================

    /// Validate the number of rows per parallel band.
    pub fn validate_chunk_rows(chunk_rows: usize) -> Result<(), BlurError> {
        if chunk_rows == 0 {
            return Err(BlurError::InvalidChunkRows(chunk_rows));
        }
        Ok(())
    }

    /// Validate that no parameters were set multiple times in the builder.
    pub fn validate_no_duplicates(duplicate_param: Option<&'static str>) -> Result<(), BlurError> {
        if let Some(param) = duplicate_param {
            return Err(BlurError::DuplicateParameter { parameter: param });
        }
        Ok(())
    }
}
