//! Layer 2: Math
//!
//! # Purpose
//!
//! This layer provides the arithmetic used by the blur passes: per-channel
//! running sums and the truncating average that turns them into pixels.
//!
//! # Architecture
//!
//! ```text
//! Layer 7: API
//!   ↓
//! Layer 6: Adapters
//!   ↓
//! Layer 5: Engine
//!   ↓
//! Layer 4: Evaluation
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Per-channel running sums.
pub mod accumulator;
