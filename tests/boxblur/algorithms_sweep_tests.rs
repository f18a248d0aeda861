#![cfg(feature = "dev")]
//! Tests for the one-dimensional sweep and the two blur passes.
//!
//! These tests verify:
//! - Sliding-window means along contiguous and strided lines
//! - Partial spans reproduce the corresponding slice of a full sweep
//! - Band-wise passes match whole-image passes exactly
//!
//! ## Test Organization
//!
//! 1. **Line Addressing** - Contiguous and strided offsets
//! 2. **Sweep** - Full and partial spans
//! 3. **Passes** - Horizontal and vertical, whole and banded

use boxblur::internals::algorithms::horizontal::{horizontal_band, horizontal_pass};
use boxblur::internals::algorithms::sweep::{Line, sweep_line};
use boxblur::internals::algorithms::vertical::{vertical_band, vertical_pass};
use boxblur::internals::primitives::geometry::Dimensions;

// ============================================================================
// Helper Functions
// ============================================================================

/// Gray RGBA pixels from a list of intensities (alpha 255).
fn gray_line(values: &[u8]) -> Vec<u8> {
    values.iter().flat_map(|&v| [v, v, v, 255]).collect()
}

fn reds(buf: &[u8]) -> Vec<u8> {
    buf.chunks_exact(4).map(|p| p[0]).collect()
}

fn noise(dims: Dimensions) -> Vec<u8> {
    (0..dims.byte_len())
        .map(|i| ((i * 7919 + 13) % 251) as u8)
        .collect()
}

// ============================================================================
// Line Addressing Tests
// ============================================================================

/// Test contiguous lines step one pixel at a time.
#[test]
fn test_line_contiguous() {
    let line = Line::contiguous(8);
    assert_eq!(line.at(0), 8);
    assert_eq!(line.at(3), 20);
}

/// Test strided lines step by the given byte distance.
#[test]
fn test_line_strided() {
    let line = Line::strided(4, 40);
    assert_eq!(line.at(0), 4);
    assert_eq!(line.at(2), 84);
}

// ============================================================================
// Sweep Tests
// ============================================================================

/// Test the sliding mean of a short row with clipped edges.
#[test]
fn test_sweep_full_row() {
    let src = gray_line(&[0, 10, 20, 30]);
    let mut dst = vec![0u8; src.len()];

    sweep_line(
        &src,
        Line::contiguous(0),
        &mut dst,
        Line::contiguous(0),
        4,
        1,
        0..4,
    );

    // (0+10)/2, (0+10+20)/3, (10+20+30)/3, (20+30)/2
    assert_eq!(reds(&dst), vec![5, 10, 20, 25]);
    assert!(dst.chunks_exact(4).all(|p| p[3] == 255));
}

/// Test a partial span matches the same positions of a full sweep.
#[test]
fn test_sweep_partial_span_matches_full() {
    let values: Vec<u8> = (0..16).map(|i| (i * 37 % 256) as u8).collect();
    let src = gray_line(&values);

    for radius in 0..20 {
        let mut full = vec![0u8; src.len()];
        sweep_line(
            &src,
            Line::contiguous(0),
            &mut full,
            Line::contiguous(0),
            16,
            radius,
            0..16,
        );

        for start in 0..16 {
            for end in start..=16 {
                let mut part = vec![0u8; (end - start) * 4];
                sweep_line(
                    &src,
                    Line::contiguous(0),
                    &mut part,
                    Line::contiguous(0),
                    16,
                    radius,
                    start..end,
                );
                assert_eq!(
                    &part[..],
                    &full[start * 4..end * 4],
                    "radius={radius} span={start}..{end}"
                );
            }
        }
    }
}

/// Test sweeping a column through a strided line.
#[test]
fn test_sweep_strided_column() {
    // 2x3 image; column 1 holds 90, 0, 30.
    let dims = Dimensions::new(2, 3);
    let mut src = vec![0u8; dims.byte_len()];
    for (y, v) in [90u8, 0, 30].into_iter().enumerate() {
        let at = dims.offset(1, y);
        src[at..at + 4].copy_from_slice(&[v, v, v, 255]);
    }

    let mut dst = vec![0u8; dims.byte_len()];
    let line = Line::strided(dims.offset(1, 0), dims.row_bytes());
    sweep_line(&src, line, &mut dst, line, 3, 1, 0..3);

    // (90+0)/2, (90+0+30)/3, (0+30)/2
    let column: Vec<u8> = (0..3).map(|y| dst[dims.offset(1, y)]).collect();
    assert_eq!(column, vec![45, 40, 15]);

    // Column 0 was never written.
    assert!((0..3).all(|y| dst[dims.offset(0, y)] == 0));
}

/// Test an empty span writes nothing.
#[test]
fn test_sweep_empty_span() {
    let src = gray_line(&[1, 2, 3]);
    let mut dst = vec![0u8; 0];
    sweep_line(
        &src,
        Line::contiguous(0),
        &mut dst,
        Line::contiguous(0),
        3,
        1,
        2..2,
    );
    assert!(dst.is_empty());
}

// ============================================================================
// Pass Tests
// ============================================================================

/// Test the horizontal pass only mixes pixels within a row.
#[test]
fn test_horizontal_pass_rows_independent() {
    let dims = Dimensions::new(3, 2);
    let src = gray_line(&[0, 0, 0, 90, 90, 90]);
    let mut dst = vec![0u8; dims.byte_len()];

    horizontal_pass(&src, &mut dst, dims, 5);

    assert_eq!(reds(&dst), vec![0, 0, 0, 90, 90, 90]);
}

/// Test the vertical pass only mixes pixels within a column.
#[test]
fn test_vertical_pass_columns_independent() {
    let dims = Dimensions::new(2, 3);
    let src = gray_line(&[0, 60, 0, 60, 0, 60]);
    let mut dst = vec![0u8; dims.byte_len()];

    vertical_pass(&src, &mut dst, dims, 5);

    assert_eq!(reds(&dst), vec![0, 60, 0, 60, 0, 60]);
}

/// Test horizontal bands reproduce the whole-image pass.
#[test]
fn test_horizontal_bands_match_pass() {
    let dims = Dimensions::new(7, 11);
    let src = noise(dims);

    for radius in [1, 2, 4, 9] {
        let mut whole = vec![0u8; dims.byte_len()];
        horizontal_pass(&src, &mut whole, dims, radius);

        for band_rows in [1, 2, 3, 5, 11] {
            let mut banded = vec![0u8; dims.byte_len()];
            for (i, band) in banded.chunks_mut(band_rows * dims.row_bytes()).enumerate() {
                horizontal_band(&src, band, dims, radius, i * band_rows);
            }
            assert_eq!(banded, whole, "radius={radius} band_rows={band_rows}");
        }
    }
}

/// Test vertical bands reproduce the whole-image pass.
#[test]
fn test_vertical_bands_match_pass() {
    let dims = Dimensions::new(5, 13);
    let src = noise(dims);

    for radius in [1, 2, 3, 6, 20] {
        let mut whole = vec![0u8; dims.byte_len()];
        vertical_pass(&src, &mut whole, dims, radius);

        for band_rows in [1, 2, 4, 7, 13] {
            let mut banded = vec![0u8; dims.byte_len()];
            for (i, band) in banded.chunks_mut(band_rows * dims.row_bytes()).enumerate() {
                vertical_band(&src, band, dims, radius, i * band_rows);
            }
            assert_eq!(banded, whole, "radius={radius} band_rows={band_rows}");
        }
    }
}
