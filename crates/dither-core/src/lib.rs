//! dither-core: Tonal adjustment and dithering for RGBA pixel buffers
//!
//! This library implements the ditherlab processing chain: tonal
//! adjustments, palette quantization, and four dithering strategies over
//! raw interleaved RGBA bytes.
//!
//! # Quick Start
//!
//! The [`Pipeline`] builder is the primary entry point:
//!
//! ```
//! use dither_core::{AdjustmentParams, DitherAlgorithm, DitherParams, Pipeline, PixelBuffer};
//!
//! let source = PixelBuffer::filled(4, 4, [128, 128, 128, 255]).unwrap();
//!
//! let pipeline = Pipeline::new()
//!     .adjustments(AdjustmentParams::new().contrast(120))
//!     .dither(DitherParams::new().algorithm(DitherAlgorithm::Atkinson));
//!
//! let result = pipeline.run(&source).unwrap();
//! assert_eq!(result.width(), 4);
//! assert_eq!(result.height(), 4);
//! ```
//!
//! # Processing Model
//!
//! Every stage consumes and produces [`PixelBuffer`], interleaved RGBA
//! bytes in row-major order. The chain is:
//!
//! ```text
//! RGBA input
//!     |
//!     v
//! [Tonal adjustments]   contrast, highlights, midtones, blur,
//!     |                 luminance, invert -- fixed order
//!     v
//! [Downscale]           nearest neighbor by the pixelation factor
//!     |
//!     v
//! [Dither]              gray via Rec. 601 luma, quantize against
//!     |                 the palette, diffuse or threshold
//!     v
//! [Upscale]             nearest neighbor back to source dimensions
//! ```
//!
//! Two rules hold everywhere and keep the pipeline deterministic:
//!
//! - Brightness always derives from the same Rec. 601 weights ([`luma`]).
//! - Every channel write rounds to the nearest integer and clamps into
//!   `0..=255`.
//!
//! The error diffusion strategies accumulate quantization error directly
//! in the RGB bytes of downstream pixels rather than in a side buffer, so
//! the clamp applies at every propagation step and identical inputs
//! produce identical outputs byte for byte.
//!
//! # Dithering Strategies
//!
//! Four strategies are available via [`DitherAlgorithm`]:
//!
//! - Floyd-Steinberg (classic 4-entry kernel -- default)
//! - Atkinson (propagates 6/8 of the error, lifts highlights)
//! - Sierra (10-entry three-row kernel, smooth gradients)
//! - Bayer (ordered threshold matrix, no diffusion, crisp patterns)

pub mod adjust;
pub mod api;
pub mod buffer;
pub mod dither;
pub mod error;
pub mod palette;
pub mod scale;


pub use adjust::{apply_adjustments, AdjustmentParams};
pub use api::Pipeline;
pub use buffer::{luma, luma_u8, PixelBuffer};
pub use dither::{
    Atkinson, Bayer, Dither, DitherAlgorithm, DitherParams, FloydSteinberg, MatrixSize, Sierra,
};
pub use error::PipelineError;
pub use palette::{Palette, PaletteKind, GRAYSCALE_LEVELS};
pub use scale::{downsample, upsample};
