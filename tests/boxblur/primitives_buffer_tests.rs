#![cfg(feature = "dev")]
//! Tests for geometry and scratch buffers.
//!
//! ## Test Organization
//!
//! 1. **Geometry** - Byte lengths, offsets, overflow detection
//! 2. **Scratch Buffer** - Sizing and reuse

use boxblur::internals::primitives::buffer::{BlurBuffer, Slot};
use boxblur::internals::primitives::geometry::{CHANNELS, Dimensions};

// ============================================================================
// Geometry Tests
// ============================================================================

/// Test derived sizes of a small image.
#[test]
fn test_dimensions_sizes() {
    let dims = Dimensions::new(3, 2);
    assert_eq!(CHANNELS, 4);
    assert_eq!(dims.pixel_count(), 6);
    assert_eq!(dims.row_bytes(), 12);
    assert_eq!(dims.byte_len(), 24);
    assert_eq!(dims.checked_byte_len(), Some(24));
}

/// Test row-major pixel offsets.
#[test]
fn test_dimensions_offset() {
    let dims = Dimensions::new(3, 2);
    assert_eq!(dims.offset(0, 0), 0);
    assert_eq!(dims.offset(2, 0), 8);
    assert_eq!(dims.offset(0, 1), 12);
    assert_eq!(dims.offset(2, 1), 20);
}

/// Test overflow is reported rather than wrapped.
#[test]
fn test_dimensions_checked_overflow() {
    assert_eq!(Dimensions::new(usize::MAX, 2).checked_byte_len(), None);
    assert_eq!(Dimensions::new(usize::MAX / 4 + 1, 1).checked_byte_len(), None);
    assert_eq!(
        Dimensions::new(usize::MAX / 4, 1).checked_byte_len(),
        Some(usize::MAX / 4 * 4)
    );
}

// ============================================================================
// Scratch Buffer Tests
// ============================================================================

/// Test `prepare` returns a slice of exactly the requested length.
#[test]
fn test_buffer_prepare_len() {
    let mut buffer = BlurBuffer::default();
    assert_eq!(buffer.prepare(48).len(), 48);
    assert_eq!(buffer.prepare(16).len(), 16);
    assert_eq!(buffer.prepare(64).len(), 64);
}

/// Test shrinking does not release the allocation.
#[test]
fn test_buffer_keeps_capacity() {
    let mut buffer = BlurBuffer::with_capacity(256);
    assert!(buffer.capacity() >= 256);

    buffer.prepare(256);
    buffer.prepare(8);
    assert!(buffer.capacity() >= 256);
}

/// Test slot resizing fills with defaults.
#[test]
fn test_slot_ensure_len() {
    let mut slot: Slot<u8> = Slot::new(4);
    slot.ensure_len(3);
    assert_eq!(&slot[..], &[0, 0, 0]);

    slot[1] = 9;
    slot.ensure_len(2);
    assert_eq!(&slot[..], &[0, 9]);
}
