//! Layer 5: Engine
//!
//! This layer provides the parallel execution engine for box blurring.
//! It distributes row bands of both passes across CPU cores.

// Parallel execution engine using CPU threads
#[cfg(feature = "cpu")]
pub mod executor;
