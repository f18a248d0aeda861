//! # boxblur (Separable Box Blur for RGBA Pixel Buffers)
//!
//! A small, dependency-light blur kernel: hand it a tightly packed RGBA byte
//! buffer with its width and height, and it blurs the buffer in place.
//!
//! ## How it works
//!
//! The blur is a box filter computed as two one-dimensional passes: every row
//! is averaged over a window of `2 * radius + 1` pixels into a scratch buffer,
//! then every column of the scratch buffer is averaged back into the caller's
//! buffer. A running per-channel sum slides along each line, so the cost is
//! linear in the pixel count and independent of the radius.
//!
//! Windows are clipped at the image border and divided by the number of
//! pixels they actually cover, so edges neither darken nor brighten. Channel
//! means use truncating integer division. Alpha is blurred like any other
//! channel.
//!
//! ## Quick Start
//!
//! ```rust
//! // A 3x3 black image with one white pixel in the middle.
//! let mut pixels = vec![0u8; 3 * 3 * 4];
//! for px in pixels.chunks_exact_mut(4) {
//!     px[3] = 255;
//! }
//! pixels[16..20].copy_from_slice(&[255, 255, 255, 255]);
//!
//! boxblur::blur(&mut pixels, 3, 3, 1)?;
//!
//! assert_eq!(&pixels[16..20], &[28, 28, 28, 255]); // center: 255 / 9
//! assert_eq!(&pixels[0..4], &[63, 63, 63, 255]); // corner: 255 / 4
//! # Result::<(), boxblur::prelude::BlurError>::Ok(())
//! ```
//!
//! ## Builder API
//!
//! ```rust
//! use boxblur::prelude::*;
//!
//! let model = BoxBlur::new()
//!     .radius(2)                // Window half-width in pixels
//!     .return_diagnostics()     // Before/after change metrics
//!     .adapter(Batch)
//!     .build()?;
//!
//! let mut pixels = vec![0u8; 8 * 8 * 4];
//! pixels[0] = 255;
//!
//! let result = model.apply(&mut pixels, 8, 8)?;
//! println!("{}", result);
//! # Result::<(), BlurError>::Ok(())
//! ```
//!
//! ## Result and Error Handling
//!
//! Every entry point validates before writing: a zero dimension, a byte
//! length that overflows `usize`, or a buffer whose length is not exactly
//! `width * height * 4` returns a [`BlurError`](prelude::BlurError) and leaves
//! the buffer untouched.
//!
//! ## Minimal Usage (no_std / Embedded)
//!
//! Disable default features to remove the standard library dependency; only
//! `alloc` is required, for the single scratch buffer.
//!
//! ```toml
//! [dependencies]
//! boxblur = { version = "0.1", default-features = false }
//! ```
//!
//! ## License
//!
//! See the repository for license information and contribution guidelines.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

// Layer 1: Primitives - data structures and basic utilities.
mod primitives;

// Layer 2: Math - running sums and averaging.
mod math;

// Layer 3: Algorithms - separable box filter passes.
mod algorithms;

// Layer 4: Evaluation - post-processing and diagnostics.
mod evaluation;

// Layer 5: Engine - orchestration and execution control.
mod engine;

// Layer 6: Adapters - execution mode adapters.
mod adapters;

// High-level fluent API for blurring.
mod api;

pub use api::blur;

// Standard boxblur prelude.
pub mod prelude {
    pub use crate::api::{
        Adapter::Batch, BatchBlur, BlurBuffer, BlurBuilder as BoxBlur, BlurError, BlurResult,
        CHANNELS, DEFAULT_RADIUS, Diagnostics, Dimensions, blur,
    };
}

// Internal modules for development and testing.
//
// This module re-exports internal modules for development and testing purposes.
// It is only available with the `dev` feature enabled.
#[cfg(feature = "dev")]
pub mod internals {
    pub mod primitives {
        pub use crate::primitives::*;
    }
    pub mod math {
        pub use crate::math::*;
    }
    pub mod algorithms {
        pub use crate::algorithms::*;
    }
    pub mod engine {
        pub use crate::engine::*;
    }
    pub mod evaluation {
        pub use crate::evaluation::*;
    }
    pub mod adapters {
        pub use crate::adapters::*;
    }
    pub mod api {
        pub use crate::api::*;
    }
}
