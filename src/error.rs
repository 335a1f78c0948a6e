use thiserror::Error;

use dither_core::PipelineError;

/// Errors surfaced by the processing coordinator.
///
/// Parameter problems never appear here: out-of-range values are clamped at
/// the boundary and unknown algorithm names fall back to the default, so
/// the only failures left are a missing source image, a stopped worker, and
/// buffers that fail the pipeline's size checks.
#[derive(Debug, Error)]
pub enum ProcessError {
    #[error("No source image registered")]
    NoImage,

    #[error("Processing worker is not running")]
    WorkerUnavailable,

    #[error("Pipeline error: {0}")]
    Pipeline(#[from] PipelineError),
}
