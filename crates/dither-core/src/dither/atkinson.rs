//! Atkinson error diffusion dithering algorithm.
//!
//! Atkinson dithering propagates only 75% of the quantization error,
//! which keeps flat regions clean at the cost of detail near pure black
//! and pure white.

use crate::buffer::PixelBuffer;
use crate::palette::Palette;

use super::{diffuse_with_kernel, Dither, DitherParams, ATKINSON};

/// Atkinson error diffusion dithering.
///
/// Distributes quantization error to 6 neighbors at 1/8 each, discarding
/// the remaining 2/8.
///
/// # Algorithm
///
/// ```text
///        X   1   1
///    1   1   1
///        1
/// ```
///
/// Each neighbor receives `error / 8`; total propagation is 6/8 = 75%.
/// The discarded quarter compresses shadows and highlights toward their
/// quantized value, giving the characteristic high-contrast Atkinson look.
pub struct Atkinson;

impl Dither for Atkinson {
    fn dither(&self, buffer: &mut PixelBuffer, palette: &Palette, _params: &DitherParams) {
        diffuse_with_kernel(buffer, palette, &ATKINSON);
    }
}
