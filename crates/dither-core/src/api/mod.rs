//! Public API for the dither-core crate.
//!
//! This module provides the high-level entry point: the [`Pipeline`]
//! builder, which chains tonal adjustment, scaling, and dithering.

mod pipeline;

pub use pipeline::Pipeline;
