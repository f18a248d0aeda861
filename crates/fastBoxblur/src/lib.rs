//! # fastBoxblur (Parallel Separable Box Blur for RGBA Pixel Buffers)
//!
//! The `boxblur` kernel with both passes spread across all CPU cores, plus
//! `ndarray` input support. Output is byte-for-byte identical to the
//! sequential crate for every radius and band height.
//!
//! ## How it works
//!
//! Each pass of the separable blur writes whole output rows. The image is cut
//! into bands of `chunk_rows` rows and rayon blurs the bands independently:
//!
//! ```text
//!  pixels ──(rows, per band)──► scratch ──(columns, per band)──► pixels
//!          band 0 │ band 1 │ …            band 0 │ band 1 │ …
//! ```
//!
//! A vertical band re-seeds its column sums from the window of its own first
//! row, so no band depends on another band's output.
//!
//! ## Quick Start
//!
//! ```rust
//! let mut pixels = vec![0u8; 64 * 64 * 4];
//! pixels[0] = 255;
//!
//! fastBoxblur::blur(&mut pixels, 64, 64, 5)?;
//! # Result::<(), fastBoxblur::prelude::BlurError>::Ok(())
//! ```
//!
//! ## Builder API
//!
//! ```rust
//! use fastBoxblur::prelude::*;
//! use ndarray::Array3;
//!
//! let model = BoxBlur::new()
//!     .radius(3)              // Window half-width in pixels
//!     .return_diagnostics()   // Before/after change metrics
//!     .adapter(Batch)         // Parallel by default
//!     .chunk_rows(16)         // Rows per unit of parallel work
//!     .build()?;
//!
//! // Shape (height, width, 4)
//! let mut image = Array3::<u8>::zeros((32, 48, 4));
//! image[[16, 24, 0]] = 255;
//!
//! let result = model.apply_image(&mut image)?;
//! assert!(result.parallel_used);
//! println!("{}", result);
//! # Result::<(), BlurError>::Ok(())
//! ```
//!
//! ## Feature Flags
//!
//! * `cpu` (default): rayon row-band pass. Without it every call runs the
//!   sequential routine.
//! * `dev`: exposes internal modules for tests and benchmarks.

#![allow(non_snake_case)]

// Layer 5: Engine - orchestration and execution control.
mod engine;

// Layer 6: Adapters - execution mode adapters.
mod adapters;

// High-level fluent API for box blurring.
mod api;

// Input data handling.
mod input;

pub use api::blur;

/// Parallel execution engine.
#[cfg(feature = "cpu")]
pub mod parallel {
    pub use crate::engine::executor::separable_pass_parallel;
}

// Standard fastBoxblur prelude.
pub mod prelude {
    pub use crate::adapters::batch::ParallelBatchBlur;
    pub use crate::api::{
        Adapter::Batch, BlurBuffer, BlurBuilder as BoxBlur, BlurError, BlurResult,
        DEFAULT_CHUNK_ROWS, DEFAULT_RADIUS, Diagnostics, Dimensions, blur,
    };
    pub use crate::input::PixelInput;
}

// Internal modules for development and testing.
//
// This module re-exports internal modules for development and testing purposes.
// It is only available with the `dev` feature enabled.
#[cfg(feature = "dev")]
pub mod internals {
    pub mod engine {
        pub use crate::engine::*;
    }
    pub mod adapters {
        pub use crate::adapters::*;
    }
    pub mod api {
        pub use crate::api::*;
    }
    pub mod input {
        pub use crate::input::*;
    }
}
