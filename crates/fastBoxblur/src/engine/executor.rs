//! Parallel execution engine for the separable box blur.
//!
//! ## Purpose
//!
//! This module provides the parallel two-pass routine that is injected into
//! the `boxblur` crate's execution engine. Both passes are split into bands of
//! whole output rows that rayon processes on all available cores.
//!
//! ## Design notes
//!
//! * **Implementation**: Provides a drop-in replacement for the sequential pass
//!   (`BlurPassFn` signature).
//! * **Parallelism**: Uses `rayon` `par_chunks_mut` over the destination buffer
//!   of each pass; bands are disjoint mutable slices.
//! * **Shared kernels**: Each band calls the same band functions the sequential
//!   routine uses, so output is bit-identical for every band height.
//!
//! ## Key concepts
//!
//! * **Horizontal bands**: Rows are independent; a band reads its own source rows.
//! * **Vertical bands**: A band reads the whole scratch image and re-seeds every
//!   column sum from its first row.
//! * **Integration**: Plugs into the `boxblur` executor via the `custom_pass` hook.
//!
//! ## Invariants
//!
//! * `pixels` and `scratch` both hold exactly `dims.byte_len()` bytes.
//! * Band `i` covers output rows `i * chunk_rows .. (i + 1) * chunk_rows`.
//!
//! ## Non-goals
//!
//! * This module does not validate input data (handled by `validator`).
//! * This module does not manage thread pools; rayon's global pool is used.

// External dependencies
use log::debug;
use rayon::prelude::*;

// Export dependencies from boxblur crate
use boxblur::internals::algorithms::horizontal::horizontal_band;
use boxblur::internals::algorithms::vertical::vertical_band;
use boxblur::internals::primitives::geometry::Dimensions;

// ============================================================================
// Parallel Blur Function
// ============================================================================

/// Run both blur passes over row bands in parallel.
pub fn separable_pass_parallel(
    pixels: &mut [u8],
    scratch: &mut [u8],
    dims: Dimensions,
    radius: usize,
    chunk_rows: usize,
) {
    let chunk_rows = chunk_rows.max(1);
    let band_bytes = chunk_rows.saturating_mul(dims.row_bytes());
    if band_bytes == 0 {
        return;
    }

    debug!(
        "parallel blur {}x{} radius {}: {} bands of {} rows",
        dims.width,
        dims.height,
        radius,
        dims.height.div_ceil(chunk_rows),
        chunk_rows
    );

    // Pass 1: rows of `pixels` into `scratch`.
    {
        let src: &[u8] = pixels;
        scratch
            .par_chunks_mut(band_bytes)
            .enumerate()
            .for_each(|(band, dst)| {
                horizontal_band(src, dst, dims, radius, band * chunk_rows);
            });
    }

    // Pass 2: columns of `scratch` back into `pixels`.
    let src: &[u8] = scratch;
    pixels
        .par_chunks_mut(band_bytes)
        .enumerate()
        .for_each(|(band, dst)| {
            vertical_band(src, dst, dims, radius, band * chunk_rows);
        });
}
