//! Layer 5: Engine
//!
//! # Purpose
//!
//! This layer orchestrates a blur call: validation, scratch management, and
//! dispatch of the two passes to either the sequential routine or an
//! injected pass (e.g., the parallel pass of an extension crate).
//!
//! # Architecture
//!
//! ```text
//! Layer 7: API
//!   ↓
//! Layer 6: Adapters
//!   ↓
//! Layer 5: Engine ← You are here
//!   ↓
//! Layer 4: Evaluation
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Unified execution engine for the separable blur.
pub mod executor;

/// Validation utilities.
pub mod validator;

/// Output types for blur operations.
pub mod output;
