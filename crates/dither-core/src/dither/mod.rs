//! Dithering strategies over RGBA pixel buffers.
//!
//! This module converts continuous-tone images to a small set of gray
//! output intensities, trading color depth for spatial patterns.
//!
//! # Strategies
//!
//! - **Floyd-Steinberg**: classic error diffusion, 100% propagation (default)
//! - **Atkinson**: error diffusion with 75% propagation, cleaner flats
//! - **Sierra**: wide three-row error diffusion, smoother gradients
//! - **Bayer**: ordered dithering with a threshold matrix, no error state
//!
//! # Architecture
//!
//! All strategies implement the [`Dither`] trait and mutate the working
//! buffer in place. The error diffusion variants share one loop,
//! [`diffuse_with_kernel`], parameterized by a [`Kernel`]; accumulated
//! error lives directly in the pixel bytes, so every intermediate value is
//! rounded and clamped back into the 0-255 range as it is written. The
//! result is fully deterministic: same buffer and parameters, same bytes.
//!
//! # Example
//!
//! ```
//! use dither_core::{Dither, DitherParams, FloydSteinberg, Palette, PaletteKind, PixelBuffer};
//!
//! let mut buffer = PixelBuffer::filled(4, 4, [128, 128, 128, 255]).unwrap();
//! let palette = Palette::for_kind(PaletteKind::Bw);
//! FloydSteinberg.dither(&mut buffer, &palette, &DitherParams::default());
//!
//! // Every color channel is now 0 or 255.
//! assert!(buffer.data().chunks(4).all(|p| p[0] == 0 || p[0] == 255));
//! ```

mod atkinson;
mod bayer;
mod floyd_steinberg;
mod kernel;
mod options;
mod sierra;

pub use atkinson::Atkinson;
pub use bayer::Bayer;
pub use floyd_steinberg::FloydSteinberg;
pub use kernel::{Kernel, ATKINSON, FLOYD_STEINBERG, SIERRA};
pub use options::{DitherParams, MatrixSize, MAX_SCALE, MIN_SCALE};
pub use sierra::Sierra;

use serde::{Deserialize, Deserializer, Serialize};

use crate::buffer::{clamp_u8, luma_u8, PixelBuffer};
use crate::palette::Palette;

/// Dithering strategy selection.
///
/// The set of strategies is closed; callers select one with this enum and
/// resolve external names through [`from_key`](DitherAlgorithm::from_key),
/// which maps anything unrecognized to the default instead of failing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum DitherAlgorithm {
    /// Floyd-Steinberg error diffusion (100% propagation).
    ///
    /// Classic algorithm with full error propagation; the default.
    #[default]
    FloydSteinberg,

    /// Atkinson error diffusion (75% propagation).
    ///
    /// Drops a quarter of the error for cleaner flat regions at the cost
    /// of shadow and highlight detail.
    Atkinson,

    /// Sierra (full) error diffusion (100% propagation, 10 neighbors).
    ///
    /// Three-row kernel, spreads error wider than Floyd-Steinberg for
    /// smoother gradients.
    Sierra,

    /// Bayer ordered dithering.
    ///
    /// Threshold-matrix comparison per pixel, no error state. Produces
    /// the characteristic crosshatch pattern.
    Bayer,
}

impl DitherAlgorithm {
    /// Resolve an algorithm name.
    ///
    /// Unknown names fall back to Floyd-Steinberg with a warning rather
    /// than failing, so a stale or misspelled selection still renders.
    pub fn from_key(key: &str) -> Self {
        match key {
            "floyd-steinberg" => Self::FloydSteinberg,
            "atkinson" => Self::Atkinson,
            "sierra" => Self::Sierra,
            "bayer" => Self::Bayer,
            other => {
                tracing::warn!(
                    algorithm = %other,
                    "Unknown dithering algorithm, falling back to floyd-steinberg"
                );
                Self::FloydSteinberg
            }
        }
    }

    /// Canonical name, the inverse of [`from_key`](Self::from_key).
    pub fn key(&self) -> &'static str {
        match self {
            Self::FloydSteinberg => "floyd-steinberg",
            Self::Atkinson => "atkinson",
            Self::Sierra => "sierra",
            Self::Bayer => "bayer",
        }
    }

    /// The strategy implementation for this selection.
    pub fn strategy(&self) -> &'static dyn Dither {
        match self {
            Self::FloydSteinberg => &FloydSteinberg,
            Self::Atkinson => &Atkinson,
            Self::Sierra => &Sierra,
            Self::Bayer => &Bayer,
        }
    }
}

impl<'de> Deserialize<'de> for DitherAlgorithm {
    /// Deserialize through [`from_key`](Self::from_key) so unknown names
    /// fall back instead of rejecting the whole message.
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let key = String::deserialize(deserializer)?;
        Ok(Self::from_key(&key))
    }
}

/// Trait for dithering strategies.
///
/// Implementations quantize a working buffer in place: the R, G, and B of
/// every pixel are replaced with a single palette intensity, and alpha is
/// left untouched. Gray values come from the shared Rec. 601 luma.
pub trait Dither {
    /// Dither the buffer against a palette.
    ///
    /// `params` carries strategy-specific settings; the error diffusion
    /// strategies ignore it, Bayer reads the threshold matrix size.
    fn dither(&self, buffer: &mut PixelBuffer, palette: &Palette, params: &DitherParams);
}

// ============================================================================
// Shared error diffusion loop
// ============================================================================

/// Core error diffusion algorithm parameterized by kernel.
///
/// Scans row-major. Each pixel's gray level is the rounded luma of its
/// current, error-adjusted RGB bytes; the palette intensity replaces all
/// three color channels; and the signed integer error (gray minus
/// quantized) is spread into forward neighbors through the kernel. Every
/// neighbor write rounds and clamps into the byte range immediately, and
/// shares aimed outside the image are dropped.
pub(crate) fn diffuse_with_kernel(buffer: &mut PixelBuffer, palette: &Palette, kernel: &Kernel) {
    let width = buffer.width() as i32;
    let height = buffer.height() as i32;
    let divisor = kernel.divisor as f32;
    let data = buffer.data_mut();

    for y in 0..height {
        for x in 0..width {
            let idx = (y * width + x) as usize * PixelBuffer::CHANNELS;
            let gray = luma_u8(data[idx], data[idx + 1], data[idx + 2]);
            let quantized = palette.quantize(gray);
            data[idx] = quantized;
            data[idx + 1] = quantized;
            data[idx + 2] = quantized;

            let error = gray as i32 - quantized as i32;
            if error == 0 {
                continue;
            }

            for &(dx, dy, weight) in kernel.entries {
                let nx = x + dx;
                let ny = y + dy;
                if nx < 0 || nx >= width || ny >= height {
                    continue;
                }
                let nidx = (ny * width + nx) as usize * PixelBuffer::CHANNELS;
                let share = error as f32 * weight as f32 / divisor;
                for channel in 0..3 {
                    data[nidx + channel] = clamp_u8(data[nidx + channel] as f32 + share);
                }
            }
        }
    }
}
