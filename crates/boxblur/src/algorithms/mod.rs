//! Layer 3: Algorithms
//!
//! This layer provides the separable box blur: a one-dimensional sliding
//! window sweep, applied along rows and then along columns.

/// Strided one-dimensional box filter.
pub mod sweep;

/// Row-wise pass.
pub mod horizontal;

/// Column-wise pass.
pub mod vertical;
