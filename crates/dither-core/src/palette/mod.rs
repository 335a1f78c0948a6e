//! Output palettes and gray quantization.
//!
//! This module provides the finite sets of output intensities the dithering
//! strategies quantize into, along with nearest-level lookup.

mod palette;

pub use palette::{Palette, PaletteKind, GRAYSCALE_LEVELS};
