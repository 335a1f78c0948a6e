//! Pipeline builder -- the primary ergonomic entry point for the crate.
//!
//! [`Pipeline`] wraps the full processing chain (tonal adjustments,
//! downscaling, dithering, upscaling) behind fluent configuration.

use tracing::debug;

use crate::adjust::{apply_adjustments, AdjustmentParams};
use crate::buffer::PixelBuffer;
use crate::dither::DitherParams;
use crate::error::PipelineError;
use crate::palette::Palette;
use crate::scale::{downsample, upsample};

/// High-level processing pipeline for RGBA pixel buffers.
///
/// `Pipeline` is the recommended entry point for the crate. It applies the
/// complete chain behind a fluent builder API with sensible defaults:
/// neutral adjustments, Floyd-Steinberg, black/white palette, scale 1.
///
/// # Design
///
/// - Configuration methods consume and return `self` (standard builder
///   pattern) and clamp their parameters into the documented ranges
/// - [`run()`](Self::run) takes `&self` so the pipeline is **reusable**
///   across multiple buffers
/// - Output dimensions always equal input dimensions; pixelation from
///   `scale > 1` happens by dithering a reduced buffer and scaling it back
///
/// # Example
///
/// ```
/// use dither_core::{AdjustmentParams, DitherParams, Pipeline, PixelBuffer};
///
/// let source = PixelBuffer::filled(4, 4, [128, 128, 128, 255]).unwrap();
///
/// let pipeline = Pipeline::new()
///     .adjustments(AdjustmentParams::new().contrast(140))
///     .dither(DitherParams::new().scale(2));
///
/// let result = pipeline.run(&source).unwrap();
/// assert_eq!(result.width(), 4);
/// assert_eq!(result.height(), 4);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Pipeline {
    adjustments: AdjustmentParams,
    dither: DitherParams,
}

impl Pipeline {
    /// Create a pipeline with neutral adjustments and default dithering.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the tonal adjustment parameters.
    ///
    /// Out-of-range values are clamped into their documented ranges.
    #[inline]
    pub fn adjustments(mut self, params: AdjustmentParams) -> Self {
        self.adjustments = params.clamped();
        self
    }

    /// Set the dithering parameters.
    ///
    /// Out-of-range values are clamped into their documented ranges.
    #[inline]
    pub fn dither(mut self, params: DitherParams) -> Self {
        self.dither = params.clamped();
        self
    }

    /// Process a buffer through the full chain.
    ///
    /// 1. Tonal adjustments (skipped entirely when neutral)
    /// 2. Downscale by the pixelation factor
    /// 3. Dither against the configured palette
    /// 4. Upscale back to the source dimensions
    ///
    /// The pipeline is reusable -- `run()` takes `&self`. Returns an error
    /// only when the buffer's size invariant does not hold, which can happen
    /// for buffers that entered through deserialization.
    pub fn run(&self, source: &PixelBuffer) -> Result<PixelBuffer, PipelineError> {
        source.validate()?;

        if self.adjustments.is_neutral() {
            Ok(self.render(source))
        } else {
            Ok(self.render(&apply_adjustments(source, &self.adjustments)))
        }
    }

    /// Dither an already-adjusted buffer, handling the scale round trip.
    fn render(&self, adjusted: &PixelBuffer) -> PixelBuffer {
        let scale = self.dither.scale;
        let mut working = downsample(adjusted, scale);
        let palette = Palette::for_kind(self.dither.palette);

        debug!(
            algorithm = self.dither.algorithm.key(),
            scale,
            width = working.width(),
            height = working.height(),
            "Dithering working buffer"
        );

        self.dither
            .algorithm
            .strategy()
            .dither(&mut working, &palette, &self.dither);

        if scale > 1 {
            upsample(&working, adjusted.width(), adjusted.height())
        } else {
            working
        }
    }
}
