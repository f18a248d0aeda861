//! Diagnostic metrics describing what a blur did to an image.
//!
//! ## Purpose
//!
//! This module summarises the difference between a buffer before and after
//! blurring: how far channel means moved, how many pixels changed and by how
//! much. It is opt-in because it needs a copy of the input.
//!
//! ## Design notes
//!
//! * **Byte-level**: Error metrics treat every channel byte as one sample.
//! * **Channel means**: Reported separately for R, G, B and A.
//!
//! ## Key concepts
//!
//! * **Residual Metrics**: RMSE and MAE of `after - before` over all bytes.
//! * **Change Counts**: Pixels with any channel changed, and the largest byte change.
//!
//! ## Invariants
//!
//! * RMSE >= MAE >= 0.
//! * `changed_pixels == 0` iff `max_change == 0`.
//!
//! ## Non-goals
//!
//! * This module does not perform the blur.
//! * This module does not compute perceptual or color-space aware metrics.

// External dependencies
use core::fmt::{Display, Formatter, Result};
use num_traits::Float;

// Internal dependencies
use crate::primitives::geometry::CHANNELS;

// ============================================================================
// Diagnostics Structure
// ============================================================================

/// Summary of the changes a blur made to one buffer.
#[derive(Debug, Clone, PartialEq)]
pub struct Diagnostics {
    /// Per-channel mean of the input, in RGBA order.
    pub mean_before: [f64; CHANNELS],

    /// Per-channel mean of the output, in RGBA order.
    pub mean_after: [f64; CHANNELS],

    /// Largest absolute change of any single byte.
    pub max_change: u8,

    /// Number of pixels with at least one changed channel.
    pub changed_pixels: usize,

    /// Root mean squared byte change.
    pub rmse: f64,

    /// Mean absolute byte change.
    pub mae: f64,
}

impl Diagnostics {
    /// Compare two RGBA buffers of equal length.
    pub fn compute(before: &[u8], after: &[u8]) -> Self {
        debug_assert_eq!(before.len(), after.len(), "compute: length mismatch");

        let mut sum_before = [0u64; CHANNELS];
        let mut sum_after = [0u64; CHANNELS];
        let mut abs_sum = 0u64;
        let mut sq_sum = 0u64;
        let mut max_change = 0u8;
        let mut changed_pixels = 0usize;

        for (b_px, a_px) in before
            .chunks_exact(CHANNELS)
            .zip(after.chunks_exact(CHANNELS))
        {
            let mut pixel_changed = false;
            for c in 0..CHANNELS {
                sum_before[c] += u64::from(b_px[c]);
                sum_after[c] += u64::from(a_px[c]);

                let diff = b_px[c].abs_diff(a_px[c]);
                if diff > 0 {
                    pixel_changed = true;
                }
                max_change = max_change.max(diff);
                abs_sum += u64::from(diff);
                sq_sum += u64::from(diff) * u64::from(diff);
            }
            if pixel_changed {
                changed_pixels += 1;
            }
        }

        let pixels = before.len() / CHANNELS;
        let bytes = before.len();

        Self {
            mean_before: Self::means(&sum_before, pixels),
            mean_after: Self::means(&sum_after, pixels),
            max_change,
            changed_pixels,
            rmse: if bytes == 0 {
                0.0
            } else {
                Float::sqrt(sq_sum as f64 / bytes as f64)
            },
            mae: if bytes == 0 {
                0.0
            } else {
                abs_sum as f64 / bytes as f64
            },
        }
    }

    /// Largest absolute difference between the before and after channel means.
    pub fn max_mean_shift(&self) -> f64 {
        self.mean_before
            .iter()
            .zip(&self.mean_after)
            .map(|(&b, &a)| Float::abs(a - b))
            .fold(0.0, f64::max)
    }

    fn means(sums: &[u64; CHANNELS], pixels: usize) -> [f64; CHANNELS] {
        let mut out = [0.0; CHANNELS];
        if pixels == 0 {
            return out;
        }
        for (o, &s) in out.iter_mut().zip(sums) {
            *o = s as f64 / pixels as f64;
        }
        out
    }
}

// ============================================================================
// Display Implementation
// ============================================================================

impl Display for Diagnostics {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        writeln!(f, "Blur Diagnostics:")?;
        writeln!(
            f,
            "  Mean before:    R {:.3}  G {:.3}  B {:.3}  A {:.3}",
            self.mean_before[0], self.mean_before[1], self.mean_before[2], self.mean_before[3]
        )?;
        writeln!(
            f,
            "  Mean after:     R {:.3}  G {:.3}  B {:.3}  A {:.3}",
            self.mean_after[0], self.mean_after[1], self.mean_after[2], self.mean_after[3]
        )?;
        writeln!(f, "  Changed pixels: {}", self.changed_pixels)?;
        writeln!(f, "  Max change:     {}", self.max_change)?;
        writeln!(f, "  RMSE:           {:.6}", self.rmse)?;
        write!(f, "  MAE:            {:.6}", self.mae)
    }
}
