//! Scratch memory for blur passes.
//!
//! ## Purpose
//!
//! The separable blur cannot write its first pass into the caller's buffer,
//! since later pixels on the same row still need the original values. This
//! module owns that single intermediate buffer and lets callers recycle it
//! across calls.
//!
//! ## Design notes
//!
//! * **Centralized Ownership**: `BlurBuffer` holds all scratch space for one call.
//! * **Lazy Expansion**: Grown on demand via `ensure_len` but never shrunk.
//! * **Explicit**: Buffers are passed in explicitly, never cached in globals,
//!   so independent images can be blurred concurrently with one buffer each.
//!
//! ## Invariants
//!
//! * After `ensure_len(n)`, the scratch slice has exactly `n` bytes.
//! * Capacity is monotonically increasing.
//!
//! ## Non-goals
//!
//! * Thread-local automatic caching.
//! * Aggressive memory reclamation.

// Feature-gated dependencies
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::ops::{Deref, DerefMut};

// ============================================================================
// Slot - Unified Vector Abstraction
// ============================================================================

/// A reusable vector slot with automatic capacity management.
#[derive(Debug, Clone)]
pub struct Slot<T>(Vec<T>);

impl<T> Slot<T> {
    /// Create a new slot with the given initial capacity.
    #[inline]
    pub fn new(capacity: usize) -> Self {
        Self(Vec::with_capacity(capacity))
    }
}

impl<T: Clone + Default> Slot<T> {
    /// Resize to exactly `len` elements, reusing the existing allocation when possible.
    #[inline]
    pub fn ensure_len(&mut self, len: usize) {
        self.0.resize(len, T::default());
    }
}

impl<T> Default for Slot<T> {
    fn default() -> Self {
        Self(Vec::new())
    }
}

impl<T> Deref for Slot<T> {
    type Target = Vec<T>;
    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<T> DerefMut for Slot<T> {
    #[inline]
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

// ============================================================================
// BlurBuffer - Working Memory for the Blur Executor
// ============================================================================

/// Working memory for the blur executor.
///
/// Holds the intermediate image written by the horizontal pass and read by
/// the vertical pass. Reusing one `BlurBuffer` across calls avoids
/// reallocating when many images of similar size are blurred in sequence.
#[derive(Debug, Clone, Default)]
pub struct BlurBuffer {
    /// Output of the horizontal pass.
    pub scratch: Slot<u8>,
}

impl BlurBuffer {
    /// Create a buffer pre-sized for images of `byte_len` bytes.
    pub fn with_capacity(byte_len: usize) -> Self {
        Self {
            scratch: Slot::new(byte_len),
        }
    }

    /// Prepare the scratch slice for an image of `byte_len` bytes.
    #[inline]
    pub fn prepare(&mut self, byte_len: usize) -> &mut [u8] {
        self.scratch.ensure_len(byte_len);
        &mut self.scratch[..]
    }

    /// Currently reserved scratch capacity in bytes.
    pub fn capacity(&self) -> usize {
        self.scratch.capacity()
    }
}
