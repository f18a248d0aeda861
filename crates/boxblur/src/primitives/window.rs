//! Windowing primitives for the sliding box filter.
//!
//! A window is the inclusive run of positions on one line (a row or a column)
//! that contribute to the output at a given center. Windows are clipped to the
//! line rather than padded, so positions near an edge average fewer samples.

// Inclusive window bounds `[left, right]` on a line of `len` samples.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Window {
    // Left boundary index (inclusive).
    pub left: usize,

    // Right boundary index (inclusive).
    pub right: usize,
}

impl Window {
    // Window of half-width `radius` around `center`, clipped to `[0, len - 1]`.
    #[inline]
    pub fn clamped(center: usize, radius: usize, len: usize) -> Self {
        debug_assert!(len >= 1, "clamped: line must contain at least one sample");
        debug_assert!(center < len, "clamped: center out of bounds");

        Self {
            left: center.saturating_sub(radius),
            right: center.saturating_add(radius).min(len - 1),
        }
    }

    // Index that drops out when the center moves from `center` to `center + 1`.
    #[inline]
    pub fn leaving(center: usize, radius: usize) -> Option<usize> {
        center.checked_sub(radius)
    }

    // Index that joins when the center moves from `center` to `center + 1`.
    #[inline]
    pub fn entering(center: usize, radius: usize, len: usize) -> Option<usize> {
        let idx = center.saturating_add(radius).saturating_add(1);
        (idx < len).then_some(idx)
    }

    // Number of samples covered by the window.
    #[inline]
    pub fn count(&self) -> usize {
        self.right - self.left + 1
    }
}
