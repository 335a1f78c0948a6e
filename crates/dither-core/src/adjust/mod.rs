//! Pre-dither tonal adjustments.
//!
//! This module provides [`AdjustmentParams`] for describing tonal
//! corrections and [`apply_adjustments`] for running them over a buffer.
//! The adjustment stage is deliberately separate from dithering: its output
//! depends only on the source image and the parameters, which lets callers
//! cache it across dither-parameter changes.

mod blur;
mod options;
mod stage;

pub use options::{
    AdjustmentParams, BLUR_RANGE, CONTRAST_RANGE, MAX_BLUR_RADIUS, NEUTRAL_CONTRAST, TONE_RANGE,
};
pub use stage::apply_adjustments;
