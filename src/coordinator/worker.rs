//! Background processing worker.
//!
//! One dedicated task owns the pixel pipeline. Jobs travel in over an mpsc
//! channel and outcomes travel back over another; the task never dies on a
//! failing job -- the failure becomes an error outcome and the loop keeps
//! serving.

use serde::{Deserialize, Serialize};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use dither_core::{
    apply_adjustments, AdjustmentParams, DitherParams, Pipeline, PipelineError, PixelBuffer,
};

use super::cache::AdjustedCache;

/// Jobs that may queue up before the worker drains them.
pub(crate) const JOB_QUEUE_CAPACITY: usize = 16;

/// A processing request, snapshotted at dispatch time.
///
/// The job owns a private copy of the source buffer for its whole lifetime;
/// nothing mutates it while the worker runs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Job {
    /// Correlates the eventual outcome with this dispatch.
    pub request_id: u64,
    /// Cache key component identifying the source image.
    pub image_id: u64,
    /// Private copy of the native-resolution RGBA buffer.
    pub source: PixelBuffer,
    /// Tonal corrections, already clamped into range.
    pub adjustments: AdjustmentParams,
    /// Dither settings, already clamped into range.
    pub dither: DitherParams,
}

/// Worker reply, correlated by request id.
///
/// Serializes as `{request_id, buffer}` or `{request_id, error}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum JobOutcome {
    /// The processed buffer at the source's native dimensions.
    Success { request_id: u64, buffer: PixelBuffer },
    /// A pipeline fault, reported instead of crashing the worker.
    Failure { request_id: u64, error: String },
}

impl JobOutcome {
    /// The request this outcome answers.
    pub fn request_id(&self) -> u64 {
        match self {
            Self::Success { request_id, .. } | Self::Failure { request_id, .. } => *request_id,
        }
    }
}

/// Run the full pipeline for one parameter set, going through the
/// adjusted-buffer cache.
///
/// Neutral adjustments bypass the adjustment stage entirely and leave the
/// cache untouched; non-neutral adjustments reuse the cached buffer when
/// the (image, parameters) key matches and populate it otherwise.
pub(crate) async fn run_pipeline(
    cache: &AdjustedCache,
    image_id: u64,
    source: &PixelBuffer,
    adjustments: &AdjustmentParams,
    dither: &DitherParams,
) -> Result<PixelBuffer, PipelineError> {
    source.validate()?;

    let render = Pipeline::new().dither(*dither);

    if adjustments.is_neutral() {
        return render.run(source);
    }

    let adjusted = match cache.get(image_id, adjustments).await {
        Some(buffer) => {
            debug!(image_id, "Reusing cached adjusted buffer");
            buffer
        }
        None => {
            let adjusted = apply_adjustments(source, adjustments);
            cache.store(image_id, *adjustments, adjusted.clone()).await;
            adjusted
        }
    };

    render.run(&adjusted)
}

/// Start the dedicated worker task.
///
/// The task ends when the job channel closes or every outcome receiver is
/// gone.
pub(crate) fn spawn_worker(
    cache: AdjustedCache,
    mut jobs: mpsc::Receiver<Job>,
    outcomes: mpsc::Sender<JobOutcome>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        debug!("Processing worker started");

        while let Some(job) = jobs.recv().await {
            let request_id = job.request_id;
            debug!(
                request_id,
                image_id = job.image_id,
                algorithm = job.dither.algorithm.key(),
                scale = job.dither.scale,
                "Processing job"
            );

            let outcome = match run_pipeline(
                &cache,
                job.image_id,
                &job.source,
                &job.adjustments,
                &job.dither,
            )
            .await
            {
                Ok(buffer) => JobOutcome::Success { request_id, buffer },
                Err(e) => {
                    warn!(request_id, error = %e, "Job failed");
                    JobOutcome::Failure {
                        request_id,
                        error: e.to_string(),
                    }
                }
            };

            if outcomes.send(outcome).await.is_err() {
                break;
            }
        }

        debug!("Processing worker stopped");
    })
}
