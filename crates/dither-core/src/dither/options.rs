//! Dithering parameters.
//!
//! This module provides the [`DitherParams`] struct configuring strategy
//! selection, working resolution, output palette, and the Bayer threshold
//! matrix size.

use serde::{Deserialize, Serialize};

use crate::dither::DitherAlgorithm;
use crate::palette::PaletteKind;

/// Smallest downsampling factor (native resolution).
pub const MIN_SCALE: u32 = 1;

/// Largest downsampling factor.
pub const MAX_SCALE: u32 = 10;

/// Bayer threshold matrix size.
///
/// Only 2x2, 4x4, and 8x8 matrices exist. Arbitrary numbers snap to the
/// nearest size (ties go up), so a serialized `3` becomes [`Four`] and a
/// `6` becomes [`Eight`] instead of failing.
///
/// [`Four`]: MatrixSize::Four
/// [`Eight`]: MatrixSize::Eight
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "u8", into = "u8")]
pub enum MatrixSize {
    /// 2x2 matrix: coarse 4-level thresholding.
    Two,
    /// 4x4 matrix: the classic Bayer pattern.
    #[default]
    Four,
    /// 8x8 matrix: finest pattern, 64 threshold levels.
    Eight,
}

impl MatrixSize {
    /// Side length of the matrix.
    #[inline]
    pub fn n(&self) -> u32 {
        match self {
            Self::Two => 2,
            Self::Four => 4,
            Self::Eight => 8,
        }
    }

    /// Number of cells, the threshold denominator.
    #[inline]
    pub fn cells(&self) -> u32 {
        self.n() * self.n()
    }
}

impl From<u8> for MatrixSize {
    /// Snap an arbitrary size to the nearest available matrix.
    fn from(n: u8) -> Self {
        match n {
            0..=2 => Self::Two,
            3..=5 => Self::Four,
            _ => Self::Eight,
        }
    }
}

impl From<MatrixSize> for u8 {
    fn from(size: MatrixSize) -> Self {
        size.n() as u8
    }
}

/// Configuration for the dither stage.
///
/// Covers everything downstream of tonal adjustment: which strategy runs,
/// at what working resolution, into which palette, and (for Bayer) with
/// which threshold matrix.
///
/// # Defaults
///
/// - Algorithm: Floyd-Steinberg
/// - Scale: 1 (native resolution)
/// - Palette: black/white
/// - Matrix size: 4x4
///
/// # Example
///
/// ```
/// use dither_core::{DitherAlgorithm, DitherParams, MatrixSize, PaletteKind};
///
/// let params = DitherParams::new()
///     .algorithm(DitherAlgorithm::Bayer)
///     .scale(4)
///     .palette(PaletteKind::Grayscale)
///     .matrix_size(MatrixSize::Eight);
///
/// assert_eq!(params.scale, 4);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct DitherParams {
    /// Which dithering strategy to run.
    pub algorithm: DitherAlgorithm,

    /// Downsampling factor in `1..=10`; dithering runs on the reduced
    /// buffer and the result is stretched back to native size.
    pub scale: u32,

    /// Output intensity palette.
    pub palette: PaletteKind,

    /// Bayer threshold matrix size (ignored by error diffusion).
    pub matrix_size: MatrixSize,
}

impl Default for DitherParams {
    fn default() -> Self {
        Self {
            algorithm: DitherAlgorithm::default(),
            scale: MIN_SCALE,
            palette: PaletteKind::default(),
            matrix_size: MatrixSize::default(),
        }
    }
}

impl DitherParams {
    /// Create default dither parameters.
    ///
    /// This is equivalent to `DitherParams::default()` but more
    /// discoverable.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the dithering strategy.
    #[inline]
    pub fn algorithm(mut self, algorithm: DitherAlgorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    /// Set the downsampling factor, clamped to `1..=10`.
    #[inline]
    pub fn scale(mut self, scale: u32) -> Self {
        self.scale = scale.clamp(MIN_SCALE, MAX_SCALE);
        self
    }

    /// Set the output palette.
    #[inline]
    pub fn palette(mut self, palette: PaletteKind) -> Self {
        self.palette = palette;
        self
    }

    /// Set the Bayer threshold matrix size.
    #[inline]
    pub fn matrix_size(mut self, size: MatrixSize) -> Self {
        self.matrix_size = size;
        self
    }

    /// Clamp every field into its allowed range.
    ///
    /// Enum fields are closed sets already; only the scale needs
    /// normalizing after deserialization.
    pub fn clamped(self) -> Self {
        Self {
            scale: self.scale.clamp(MIN_SCALE, MAX_SCALE),
            ..self
        }
    }
}
