//! Layer 6: Adapters
//!
//! This layer provides user-facing APIs that adapt the engine layer for
//! different execution modes:
//!
//! - **Batch**: Unified adapter for parallel/sequential execution

// Unified batch adapter for box blurring.
pub mod batch;
