//! Per-channel running sums for the sliding box filter.
//!
//! ## Purpose
//!
//! A box filter output is the mean of the samples inside its window. Keeping
//! one running sum per channel lets the window slide one sample at a time in
//! constant work: add the sample that enters, subtract the sample that leaves.
//!
//! ## Design notes
//!
//! * **Width**: Sums are `u64`, so even a line of `usize::MAX / 4` samples at
//!   255 cannot overflow on 64-bit targets.
//! * **Rounding**: Averages use truncating integer division (floor for
//!   non-negative values). This is fixed, not configurable.
//! * **Channels**: R, G, B and A are summed independently; alpha is not
//!   premultiplied or otherwise special-cased.
//!
//! ## Invariants
//!
//! * A sample is only subtracted after it was added, so sums never underflow.
//! * `average(count)` requires `count >= 1`.

// Internal dependencies
use crate::primitives::geometry::CHANNELS;

/// Running per-channel sums of RGBA samples.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ChannelSums([u64; CHANNELS]);

impl ChannelSums {
    /// Add one RGBA pixel (first four bytes of `px`).
    #[inline]
    pub fn add(&mut self, px: &[u8]) {
        for (sum, &v) in self.0.iter_mut().zip(&px[..CHANNELS]) {
            *sum += u64::from(v);
        }
    }

    /// Remove one RGBA pixel previously added.
    #[inline]
    pub fn sub(&mut self, px: &[u8]) {
        for (sum, &v) in self.0.iter_mut().zip(&px[..CHANNELS]) {
            debug_assert!(*sum >= u64::from(v), "sub: sample was never added");
            *sum -= u64::from(v);
        }
    }

    /// Truncating per-channel mean over `count` samples.
    #[inline]
    pub fn average(&self, count: usize) -> [u8; CHANNELS] {
        debug_assert!(count >= 1, "average: empty window");

        let count = count as u64;
        let mut out = [0u8; CHANNELS];
        for (o, &sum) in out.iter_mut().zip(&self.0) {
            // A mean of u8 samples always fits in u8.
            *o = (sum / count) as u8;
        }
        out
    }

    /// Raw sums, in RGBA order.
    #[inline]
    pub fn totals(&self) -> [u64; CHANNELS] {
        self.0
    }
}
