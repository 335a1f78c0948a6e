//! Tonal adjustment parameters.
//!
//! This module provides the [`AdjustmentParams`] struct describing the
//! pre-dither tonal corrections: contrast, highlights, midtones, blur,
//! luminance offset, and inversion.

use serde::{Deserialize, Serialize};

/// Neutral contrast value (no change).
pub const NEUTRAL_CONTRAST: i32 = 100;

/// Contrast range.
pub const CONTRAST_RANGE: (i32, i32) = (0, 200);

/// Range shared by highlights, midtones, and luminance.
pub const TONE_RANGE: (i32, i32) = (-100, 100);

/// Blur strength range. Strengths above [`MAX_BLUR_RADIUS`] are capped
/// to that radius at application time.
pub const BLUR_RANGE: (i32, i32) = (0, 10);

/// Largest box blur radius actually applied.
pub const MAX_BLUR_RADIUS: i32 = 5;

/// Tonal corrections applied before scaling and dithering.
///
/// All values are plain integers from interactive controls. Out-of-range
/// values are clamped, never rejected; the builder methods clamp on write
/// and [`clamped()`](AdjustmentParams::clamped) normalizes a whole struct
/// that arrived over a serialized boundary.
///
/// Transforms run in a fixed order: contrast, highlights, midtones, blur,
/// luminance, invert. Each is skipped at its neutral value, so the default
/// struct leaves a buffer untouched.
///
/// # Example
///
/// ```
/// use dither_core::AdjustmentParams;
///
/// let params = AdjustmentParams::new()
///     .contrast(140)
///     .blur(2)
///     .invert(true);
///
/// assert!(!params.is_neutral());
/// assert!(AdjustmentParams::default().is_neutral());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct AdjustmentParams {
    /// Contrast in `0..=200`; 100 is neutral.
    pub contrast: i32,

    /// Highlight lift in `-100..=100`; 0 is neutral.
    pub highlights: i32,

    /// Midtone gain in `-100..=100`; 0 is neutral.
    pub midtones: i32,

    /// Box blur strength in `0..=10`; 0 is neutral.
    pub blur: i32,

    /// Brightness offset in `-100..=100`; 0 is neutral.
    pub luminance: i32,

    /// Invert all color channels.
    pub invert: bool,
}

impl Default for AdjustmentParams {
    fn default() -> Self {
        Self {
            contrast: NEUTRAL_CONTRAST,
            highlights: 0,
            midtones: 0,
            blur: 0,
            luminance: 0,
            invert: false,
        }
    }
}

impl AdjustmentParams {
    /// Create neutral adjustment parameters.
    ///
    /// This is equivalent to `AdjustmentParams::default()` but more
    /// discoverable.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set contrast, clamped to `0..=200`.
    #[inline]
    pub fn contrast(mut self, value: i32) -> Self {
        self.contrast = value.clamp(CONTRAST_RANGE.0, CONTRAST_RANGE.1);
        self
    }

    /// Set highlight lift, clamped to `-100..=100`.
    #[inline]
    pub fn highlights(mut self, value: i32) -> Self {
        self.highlights = value.clamp(TONE_RANGE.0, TONE_RANGE.1);
        self
    }

    /// Set midtone gain, clamped to `-100..=100`.
    #[inline]
    pub fn midtones(mut self, value: i32) -> Self {
        self.midtones = value.clamp(TONE_RANGE.0, TONE_RANGE.1);
        self
    }

    /// Set box blur strength, clamped to `0..=10`.
    #[inline]
    pub fn blur(mut self, value: i32) -> Self {
        self.blur = value.clamp(BLUR_RANGE.0, BLUR_RANGE.1);
        self
    }

    /// Set brightness offset, clamped to `-100..=100`.
    #[inline]
    pub fn luminance(mut self, value: i32) -> Self {
        self.luminance = value.clamp(TONE_RANGE.0, TONE_RANGE.1);
        self
    }

    /// Set channel inversion.
    #[inline]
    pub fn invert(mut self, enabled: bool) -> Self {
        self.invert = enabled;
        self
    }

    /// Clamp every field into its allowed range.
    ///
    /// Deserialized parameters bypass the builder methods, so boundary
    /// code normalizes them with this before they reach the pipeline.
    pub fn clamped(self) -> Self {
        Self::default()
            .contrast(self.contrast)
            .highlights(self.highlights)
            .midtones(self.midtones)
            .blur(self.blur)
            .luminance(self.luminance)
            .invert(self.invert)
    }

    /// True when every field is at its neutral value.
    ///
    /// A neutral struct means the adjustment stage is skipped entirely and
    /// the source buffer feeds the dither stage directly.
    pub fn is_neutral(&self) -> bool {
        self.contrast == NEUTRAL_CONTRAST
            && self.highlights == 0
            && self.midtones == 0
            && self.blur == 0
            && self.luminance == 0
            && !self.invert
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_is_neutral() {
        let params = AdjustmentParams::default();
        assert_eq!(params.contrast, 100);
        assert_eq!(params.highlights, 0);
        assert_eq!(params.midtones, 0);
        assert_eq!(params.blur, 0);
        assert_eq!(params.luminance, 0);
        assert!(!params.invert);
        assert!(params.is_neutral());
    }

    #[test]
    fn test_new_equals_default() {
        assert_eq!(AdjustmentParams::new(), AdjustmentParams::default());
    }

    #[test]
    fn test_contrast_clamps() {
        assert_eq!(AdjustmentParams::new().contrast(250).contrast, 200);
        assert_eq!(AdjustmentParams::new().contrast(-5).contrast, 0);
        assert_eq!(AdjustmentParams::new().contrast(150).contrast, 150);
    }

    #[test]
    fn test_tone_fields_clamp() {
        assert_eq!(AdjustmentParams::new().highlights(101).highlights, 100);
        assert_eq!(AdjustmentParams::new().midtones(-200).midtones, -100);
        assert_eq!(AdjustmentParams::new().luminance(999).luminance, 100);
    }

    #[test]
    fn test_blur_clamps() {
        assert_eq!(AdjustmentParams::new().blur(-1).blur, 0);
        assert_eq!(AdjustmentParams::new().blur(11).blur, 10);
    }

    #[test]
    fn test_each_field_breaks_neutrality() {
        assert!(!AdjustmentParams::new().contrast(99).is_neutral());
        assert!(!AdjustmentParams::new().highlights(1).is_neutral());
        assert!(!AdjustmentParams::new().midtones(-1).is_neutral());
        assert!(!AdjustmentParams::new().blur(1).is_neutral());
        assert!(!AdjustmentParams::new().luminance(1).is_neutral());
        assert!(!AdjustmentParams::new().invert(true).is_neutral());
    }

    #[test]
    fn test_clamped_normalizes_deserialized_values() {
        let json = r#"{"contrast":500,"highlights":-500,"blur":99}"#;
        let params: AdjustmentParams = serde_json::from_str(json).unwrap();
        // Raw deserialization keeps the wild values.
        assert_eq!(params.contrast, 500);
        let clamped = params.clamped();
        assert_eq!(clamped.contrast, 200);
        assert_eq!(clamped.highlights, -100);
        assert_eq!(clamped.blur, 10);
        // Untouched fields keep their defaults.
        assert_eq!(clamped.midtones, 0);
    }

    #[test]
    fn test_builder_chaining() {
        let params = AdjustmentParams::new()
            .contrast(120)
            .highlights(30)
            .midtones(-20)
            .blur(3)
            .luminance(10)
            .invert(true);
        assert_eq!(params.contrast, 120);
        assert_eq!(params.highlights, 30);
        assert_eq!(params.midtones, -20);
        assert_eq!(params.blur, 3);
        assert_eq!(params.luminance, 10);
        assert!(params.invert);
    }
}
