//! Horizontal pass of the separable blur.
//!
//! Each output row is the sliding-window mean of the same source row. Rows are
//! independent, so a band of rows can be computed without any other band.

// Internal dependencies
use crate::algorithms::sweep::{Line, sweep_line};
use crate::primitives::geometry::Dimensions;

/// Blur rows `first_row..first_row + n` of `src` into `dst_band`.
///
/// `dst_band` holds exactly `n` full rows; `n` is derived from its length.
pub fn horizontal_band(
    src: &[u8],
    dst_band: &mut [u8],
    dims: Dimensions,
    radius: usize,
    first_row: usize,
) {
    let row_bytes = dims.row_bytes();
    debug_assert!(
        dst_band.len() % row_bytes == 0,
        "horizontal_band: band must hold whole rows"
    );

    let rows = dst_band.len() / row_bytes;
    for r in 0..rows {
        let y = first_row + r;
        sweep_line(
            src,
            Line::contiguous(dims.offset(0, y)),
            dst_band,
            Line::contiguous(r * row_bytes),
            dims.width,
            radius,
            0..dims.width,
        );
    }
}

/// Blur every row of `src` into `dst`.
#[inline]
pub fn horizontal_pass(src: &[u8], dst: &mut [u8], dims: Dimensions, radius: usize) {
    horizontal_band(src, dst, dims, radius, 0);
}
