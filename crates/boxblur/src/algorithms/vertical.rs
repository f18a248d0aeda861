//! Vertical pass of the separable blur.
//!
//! Each output pixel is the sliding-window mean of its source column. A band
//! of output rows re-seeds every column sum from the window of its own first
//! row, so bands can be computed independently and still match a single sweep.

// Internal dependencies
use crate::algorithms::sweep::{Line, sweep_line};
use crate::primitives::geometry::Dimensions;

/// Blur output rows `first_row..first_row + n` column-wise from `src` into `dst_band`.
///
/// `src` is the full image; `dst_band` holds exactly `n` full rows.
pub fn vertical_band(
    src: &[u8],
    dst_band: &mut [u8],
    dims: Dimensions,
    radius: usize,
    first_row: usize,
) {
    let row_bytes = dims.row_bytes();
    debug_assert!(
        dst_band.len() % row_bytes == 0,
        "vertical_band: band must hold whole rows"
    );

    let rows = dst_band.len() / row_bytes;
    let span = first_row..first_row + rows;
    for x in 0..dims.width {
        sweep_line(
            src,
            Line::strided(dims.offset(x, 0), row_bytes),
            dst_band,
            Line::strided(dims.offset(x, 0), row_bytes),
            dims.height,
            radius,
            span.clone(),
        );
    }
}

/// Blur every column of `src` into `dst`.
#[inline]
pub fn vertical_pass(src: &[u8], dst: &mut [u8], dims: Dimensions, radius: usize) {
    vertical_band(src, dst, dims, radius, 0);
}
