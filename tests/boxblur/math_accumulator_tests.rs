#![cfg(feature = "dev")]
//! Tests for running channel sums.
//!
//! ## Test Organization
//!
//! 1. **Accumulation** - Add and remove samples
//! 2. **Averaging** - Truncating division, channel independence

use boxblur::internals::math::accumulator::ChannelSums;

// ============================================================================
// Accumulation Tests
// ============================================================================

/// Test sums start at zero.
#[test]
fn test_sums_default_zero() {
    assert_eq!(ChannelSums::default().totals(), [0, 0, 0, 0]);
}

/// Test add and sub are inverse operations.
#[test]
fn test_add_then_sub() {
    let mut sums = ChannelSums::default();
    sums.add(&[10, 20, 30, 40]);
    sums.add(&[1, 2, 3, 4]);
    assert_eq!(sums.totals(), [11, 22, 33, 44]);

    sums.sub(&[10, 20, 30, 40]);
    assert_eq!(sums.totals(), [1, 2, 3, 4]);
}

/// Test only the first four bytes of a longer slice are read.
#[test]
fn test_add_reads_one_pixel() {
    let mut sums = ChannelSums::default();
    sums.add(&[1, 2, 3, 4, 200, 200, 200, 200]);
    assert_eq!(sums.totals(), [1, 2, 3, 4]);
}

/// Test sums of many saturated samples do not overflow.
#[test]
fn test_large_sums() {
    let mut sums = ChannelSums::default();
    for _ in 0..100_000 {
        sums.add(&[255, 255, 255, 255]);
    }
    assert_eq!(sums.totals(), [25_500_000; 4]);
    assert_eq!(sums.average(100_000), [255; 4]);
}

// ============================================================================
// Averaging Tests
// ============================================================================

/// Test averaging truncates toward zero.
#[test]
fn test_average_truncates() {
    let mut sums = ChannelSums::default();
    sums.add(&[255, 1, 2, 100]);
    sums.add(&[0, 0, 0, 101]);
    sums.add(&[0, 0, 0, 101]);

    // 255/3 = 85, 1/3 = 0, 2/3 = 0, 302/3 = 100
    assert_eq!(sums.average(3), [85, 0, 0, 100]);
}

/// Test averaging a single sample returns it unchanged.
#[test]
fn test_average_single() {
    let mut sums = ChannelSums::default();
    sums.add(&[7, 8, 9, 10]);
    assert_eq!(sums.average(1), [7, 8, 9, 10]);
}
