//! Layer 4: Evaluation
//!
//! # Purpose
//!
//! This layer provides post-processing of blur results: optional diagnostics
//! comparing a buffer before and after the blur.
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
//! Layer 4: Evaluation ← You are here
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Before/after change metrics.
pub mod diagnostics;
