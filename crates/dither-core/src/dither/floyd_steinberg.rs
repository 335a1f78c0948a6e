//! Floyd-Steinberg error diffusion dithering algorithm.
//!
//! Floyd-Steinberg is the most widely known error diffusion algorithm.
//! It distributes 100% of the quantization error to 4 neighbors, producing
//! smooth gradients, and is the pipeline's default strategy.

use crate::buffer::PixelBuffer;
use crate::palette::Palette;

use super::{diffuse_with_kernel, Dither, DitherParams, FLOYD_STEINBERG};

/// Floyd-Steinberg error diffusion dithering.
///
/// The classic error diffusion algorithm, distributing 100% of quantization
/// error to 4 neighboring pixels.
///
/// # Algorithm
///
/// The Floyd-Steinberg kernel distributes error to 4 neighbors:
///
/// ```text
///        X   7
///    3   5   1
/// ```
///
/// Weights: 7/16 right, 3/16 bottom-left, 5/16 bottom, 1/16 bottom-right.
/// Total: 16/16 = 100% error propagation.
///
/// # Example
///
/// ```
/// use dither_core::{Dither, DitherParams, FloydSteinberg, Palette, PaletteKind, PixelBuffer};
///
/// let mut buffer = PixelBuffer::filled(2, 2, [64, 64, 64, 255]).unwrap();
/// let palette = Palette::for_kind(PaletteKind::Bw);
/// FloydSteinberg.dither(&mut buffer, &palette, &DitherParams::default());
/// ```
pub struct FloydSteinberg;

impl Dither for FloydSteinberg {
    fn dither(&self, buffer: &mut PixelBuffer, palette: &Palette, _params: &DitherParams) {
        diffuse_with_kernel(buffer, palette, &FLOYD_STEINBERG);
    }
}
