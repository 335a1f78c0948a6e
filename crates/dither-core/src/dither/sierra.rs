//! Sierra error diffusion dithering algorithm.
//!
//! Sierra (also known as Sierra-3) spreads quantization error over three
//! rows and up to two columns in each direction, producing smoother
//! gradients than the tighter Floyd-Steinberg kernel.

use crate::buffer::PixelBuffer;
use crate::palette::Palette;

use super::{diffuse_with_kernel, Dither, DitherParams, SIERRA};

/// Sierra (full) error diffusion dithering.
///
/// Distributes 100% of quantization error to 10 neighbors over 3 rows.
///
/// # Algorithm
///
/// ```text
///            X   5   3
///    2   4   5   4   2
///        2   3   2
/// ```
///
/// Total: 32/32 = 100% error propagation. The wide spread softens the
/// diagonal "worm" artifacts error diffusion is prone to.
pub struct Sierra;

impl Dither for Sierra {
    fn dither(&self, buffer: &mut PixelBuffer, palette: &Palette, _params: &DitherParams) {
        diffuse_with_kernel(buffer, palette, &SIERRA);
    }
}
