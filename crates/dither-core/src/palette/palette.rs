//! Palette construction and nearest-level matching.
//!
//! Output is always achromatic: a palette is an ascending list of gray
//! intensities, and quantization maps an 8-bit gray value to the nearest
//! list entry. Two palettes exist, pure black/white and 8-level grayscale.

use serde::{Deserialize, Serialize};

/// Number of levels in the grayscale palette.
pub const GRAYSCALE_LEVELS: usize = 8;

/// Which set of output intensities to quantize into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaletteKind {
    /// Two levels: pure black and pure white.
    #[default]
    Bw,
    /// Eight evenly spaced gray levels.
    Grayscale,
}

impl PaletteKind {
    /// Resolve a palette name.
    ///
    /// `"bw"` selects black/white; anything else selects grayscale, with a
    /// warning for names other than `"grayscale"`.
    pub fn from_key(key: &str) -> Self {
        match key {
            "bw" => Self::Bw,
            "grayscale" => Self::Grayscale,
            other => {
                tracing::warn!(palette = %other, "Unknown palette name, using grayscale");
                Self::Grayscale
            }
        }
    }

    /// Canonical name, the inverse of [`from_key`](Self::from_key).
    pub fn key(&self) -> &'static str {
        match self {
            Self::Bw => "bw",
            Self::Grayscale => "grayscale",
        }
    }
}

/// A finite ascending set of gray output intensities.
///
/// # Example
///
/// ```
/// use dither_core::{Palette, PaletteKind};
///
/// let palette = Palette::for_kind(PaletteKind::Bw);
/// assert_eq!(palette.levels(), &[0, 255]);
/// assert_eq!(palette.quantize(127), 0);
/// assert_eq!(palette.quantize(128), 255);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    kind: PaletteKind,
    levels: Vec<u8>,
}

impl Palette {
    /// Build the palette for a [`PaletteKind`].
    ///
    /// Grayscale levels are spaced `255 / (n - 1)` apart and rounded,
    /// yielding `[0, 36, 73, 109, 146, 182, 219, 255]`.
    pub fn for_kind(kind: PaletteKind) -> Self {
        let levels = match kind {
            PaletteKind::Bw => vec![0, 255],
            PaletteKind::Grayscale => {
                let step = 255.0 / (GRAYSCALE_LEVELS - 1) as f32;
                (0..GRAYSCALE_LEVELS)
                    .map(|i| (i as f32 * step).round() as u8)
                    .collect()
            }
        };
        Self { kind, levels }
    }

    /// The kind this palette was built for.
    #[inline]
    pub fn kind(&self) -> PaletteKind {
        self.kind
    }

    /// The output intensities in ascending order.
    #[inline]
    pub fn levels(&self) -> &[u8] {
        &self.levels
    }

    /// Number of levels.
    #[inline]
    pub fn len(&self) -> usize {
        self.levels.len()
    }

    /// Always false; palettes have at least two levels.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    /// Spacing between adjacent levels.
    #[inline]
    pub fn step(&self) -> f32 {
        255.0 / (self.levels.len() - 1) as f32
    }

    /// Intensity at a level index, clamped to the last level.
    #[inline]
    pub fn level(&self, index: usize) -> u8 {
        self.levels[index.min(self.levels.len() - 1)]
    }

    /// Index of the level [`quantize`](Self::quantize) would select.
    ///
    /// Black/white splits at 128 (ties go white). Grayscale rounds
    /// `gray / step` and clamps to the last index.
    #[inline]
    pub fn level_index(&self, gray: u8) -> usize {
        match self.kind {
            PaletteKind::Bw => usize::from(gray >= 128),
            PaletteKind::Grayscale => {
                let index = (gray as f32 / self.step()).round() as usize;
                index.min(self.levels.len() - 1)
            }
        }
    }

    /// Map an 8-bit gray value to the nearest allowed intensity.
    #[inline]
    pub fn quantize(&self, gray: u8) -> u8 {
        self.levels[self.level_index(gray)]
    }
}
