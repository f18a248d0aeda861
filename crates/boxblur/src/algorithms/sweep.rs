//! One-dimensional sliding box filter over a strided line of RGBA pixels.
//!
//! ## Purpose
//!
//! Both blur passes reduce to the same operation: walk a line of pixels (a row
//! with a stride of one pixel, or a column with a stride of one row) and write
//! the clipped-window mean at each position. This module implements that walk
//! once.
//!
//! ## Design notes
//!
//! * **Clipped windows**: The window at `i` is `[max(i - r, 0), min(i + r, len - 1)]`
//!   and the mean divides by the number of samples actually covered.
//! * **Constant work per step**: The window sum is seeded once, then updated by
//!   one subtraction and one addition per output.
//! * **Partial spans**: A sweep may cover any sub-range of the line. The seed is
//!   computed for the first position of the span, so disjoint spans of one line
//!   produce exactly what a single full-line sweep would.
//!
//! ## Invariants
//!
//! * Output for a position depends only on the source line, never on other outputs.
//! * No index outside `[0, len)` is ever read, for any radius.

// External dependencies
use core::ops::Range;

// Internal dependencies
use crate::math::accumulator::ChannelSums;
use crate::primitives::geometry::CHANNELS;
use crate::primitives::window::Window;

/// Addressing of a line of pixels inside a flat byte buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Line {
    /// Byte offset of sample 0.
    pub offset: usize,

    /// Byte distance between consecutive samples.
    pub stride: usize,
}

impl Line {
    /// Line whose samples are adjacent pixels (a row).
    #[inline]
    pub const fn contiguous(offset: usize) -> Self {
        Self {
            offset,
            stride: CHANNELS,
        }
    }

    /// Line whose samples are `stride` bytes apart (a column).
    #[inline]
    pub const fn strided(offset: usize, stride: usize) -> Self {
        Self { offset, stride }
    }

    /// Byte offset of sample `i`.
    #[inline]
    pub const fn at(&self, i: usize) -> usize {
        self.offset + i * self.stride
    }
}

/// Box-filter positions `span` of a source line of `len` samples.
///
/// The output for position `i` is written at `dst_line.at(i - span.start)`,
/// so `dst` may be a band that only holds the span being computed.
pub fn sweep_line(
    src: &[u8],
    src_line: Line,
    dst: &mut [u8],
    dst_line: Line,
    len: usize,
    radius: usize,
    span: Range<usize>,
) {
    debug_assert!(span.end <= len, "sweep_line: span exceeds line length");

    if span.is_empty() {
        return;
    }

    let pixel = |i: usize| {
        let at = src_line.at(i);
        &src[at..at + CHANNELS]
    };

    // Seed the running sums with the window of the first position.
    let mut sums = ChannelSums::default();
    let seed = Window::clamped(span.start, radius, len);
    for i in seed.left..=seed.right {
        sums.add(pixel(i));
    }

    let start = span.start;
    for center in span {
        let window = Window::clamped(center, radius, len);
        let out = dst_line.at(center - start);
        dst[out..out + CHANNELS].copy_from_slice(&sums.average(window.count()));

        if let Some(idx) = Window::leaving(center, radius) {
            sums.sub(pixel(idx));
        }
        if let Some(idx) = Window::entering(center, radius, len) {
            sums.add(pixel(idx));
        }
    }
}
