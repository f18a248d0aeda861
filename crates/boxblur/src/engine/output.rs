//! Output types for blur operations.
//!
//! ## Purpose
//!
//! This module defines [`BlurResult`], the summary returned by the model API.
//! The blurred pixels themselves stay in the caller's buffer; the result only
//! records how the call was executed and, optionally, what it changed.
//!
//! ## Invariants
//!
//! * `BlurResult` never owns pixel data.
//! * `diagnostics` is `Some` only when requested.

// External dependencies
use core::fmt::{Display, Formatter, Result};

// Internal dependencies
use crate::evaluation::diagnostics::Diagnostics;
use crate::primitives::geometry::Dimensions;

/// Summary of a completed blur call.
#[derive(Debug, Clone, PartialEq)]
pub struct BlurResult {
    /// Geometry of the blurred buffer.
    pub dimensions: Dimensions,

    /// Window radius that was applied.
    pub radius: usize,

    /// Whether the injected (parallel) pass ran.
    pub parallel_used: bool,

    /// Change metrics, if requested.
    pub diagnostics: Option<Diagnostics>,
}

impl BlurResult {
    /// Whether the call left the buffer unchanged by construction (radius 0).
    pub fn is_identity(&self) -> bool {
        self.radius == 0
    }
}

impl Display for BlurResult {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        writeln!(f, "Summary:")?;
        writeln!(
            f,
            "  Image:     {}x{} ({} pixels)",
            self.dimensions.width,
            self.dimensions.height,
            self.dimensions.pixel_count()
        )?;
        writeln!(f, "  Radius:    {}", self.radius)?;
        writeln!(
            f,
            "  Execution: {}",
            if self.parallel_used {
                "parallel"
            } else {
                "sequential"
            }
        )?;

        if let Some(diag) = &self.diagnostics {
            writeln!(f)?;
            writeln!(f, "{}", diag)?;
        }

        Ok(())
    }
}
