//! Ditherlab - tonal adjustment and dithering for raw RGBA pixel buffers.
//!
//! The pixel work (adjustments, palette quantization, scaling, dithering)
//! lives in the `dither-core` crate. This crate wraps it in a processing
//! coordinator: a dedicated background worker task, a debounced job
//! submitter, the adjusted-buffer cache, and request-id supersession so a
//! stale result is never published over a newer one.

pub mod coordinator;
pub mod error;

pub use coordinator::{
    AdjustedCache, Coordinator, Debouncer, Job, JobOutcome, ParamChange, QUIET_PERIOD,
};
pub use error::ProcessError;

// The core types every caller needs alongside the coordinator.
pub use dither_core::{
    apply_adjustments, AdjustmentParams, DitherAlgorithm, DitherParams, MatrixSize, Palette,
    PaletteKind, Pipeline, PipelineError, PixelBuffer,
};
