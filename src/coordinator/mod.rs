//! Processing coordinator.
//!
//! The coordinator owns everything around the pixel pipeline: the
//! registered source image, the adjusted-buffer cache, the background
//! worker task, and the supersession contract that keeps stale results
//! from ever being published.
//!
//! Two contracts are offered:
//!
//! - [`process`](Coordinator::process) runs the full pipeline inline and
//!   returns the buffer.
//! - [`submit`](Coordinator::submit) dispatches a [`Job`] to the worker
//!   task and returns its request id; [`next_outcome`](Coordinator::next_outcome)
//!   delivers the matching [`JobOutcome`], silently discarding outcomes
//!   that a later dispatch has superseded.

mod cache;
mod debounce;
mod worker;

pub use cache::AdjustedCache;
pub use debounce::{Debouncer, ParamChange, QUIET_PERIOD};
pub use worker::{Job, JobOutcome};

use std::sync::atomic::{AtomicU64, Ordering};

use tokio::sync::{mpsc, Mutex, RwLock};
use tracing::{debug, info};

use dither_core::{AdjustmentParams, DitherParams, PixelBuffer};

use crate::error::ProcessError;

/// The registered native-resolution image and its cache identity.
struct SourceImage {
    id: u64,
    buffer: PixelBuffer,
}

/// Orchestrates the pipeline, the cache, and the background worker.
///
/// Construction spawns the worker task, so a `Coordinator` must be created
/// inside a tokio runtime. All methods take `&self`; the coordinator is
/// made to be shared behind an [`Arc`](std::sync::Arc).
pub struct Coordinator {
    source: RwLock<Option<SourceImage>>,
    cache: AdjustedCache,
    next_image_id: AtomicU64,
    next_request_id: AtomicU64,
    latest_accepted: AtomicU64,
    job_tx: mpsc::Sender<Job>,
    outcome_rx: Mutex<mpsc::Receiver<JobOutcome>>,
}

impl Coordinator {
    /// Create a coordinator and start its worker task.
    pub fn new() -> Self {
        let cache = AdjustedCache::new();
        let (job_tx, job_rx) = mpsc::channel(worker::JOB_QUEUE_CAPACITY);
        let (outcome_tx, outcome_rx) = mpsc::channel(worker::JOB_QUEUE_CAPACITY);
        worker::spawn_worker(cache.clone(), job_rx, outcome_tx);

        Self {
            source: RwLock::new(None),
            cache,
            next_image_id: AtomicU64::new(1),
            next_request_id: AtomicU64::new(1),
            latest_accepted: AtomicU64::new(0),
            job_tx,
            outcome_rx: Mutex::new(outcome_rx),
        }
    }

    /// Register a new source image and return its identity.
    ///
    /// Invalidates the adjusted-buffer cache: cached adjustments belong to
    /// the previous image. The buffer's size invariant is checked when it
    /// is first processed, not here, so buffers that arrived over a
    /// serialized boundary surface their fault as a job outcome.
    pub async fn set_image(&self, buffer: PixelBuffer) -> u64 {
        let id = self.next_image_id.fetch_add(1, Ordering::Relaxed);
        self.cache.invalidate().await;

        let mut source = self.source.write().await;
        *source = Some(SourceImage { id, buffer });
        info!(image_id = id, "Source image registered");
        id
    }

    /// Run the full pipeline inline for the registered image.
    ///
    /// Caller-supplied parameters are clamped into range first. The
    /// adjusted-buffer cache is consulted and populated exactly as for a
    /// worker job.
    pub async fn process(
        &self,
        adjustments: AdjustmentParams,
        dither: DitherParams,
    ) -> Result<PixelBuffer, ProcessError> {
        let adjustments = adjustments.clamped();
        let dither = dither.clamped();

        let source = self.source.read().await;
        let source = source.as_ref().ok_or(ProcessError::NoImage)?;
        let result =
            worker::run_pipeline(&self.cache, source.id, &source.buffer, &adjustments, &dither)
                .await?;
        Ok(result)
    }

    /// Dispatch a job for the registered image and return its request id.
    ///
    /// The latest-accepted register is updated before the job reaches the
    /// worker, so any outcome still in flight for an earlier request is
    /// already stale by the time it arrives. The job carries a private
    /// copy of the source buffer.
    pub async fn submit(
        &self,
        adjustments: AdjustmentParams,
        dither: DitherParams,
    ) -> Result<u64, ProcessError> {
        let (image_id, source) = {
            let guard = self.source.read().await;
            let image = guard.as_ref().ok_or(ProcessError::NoImage)?;
            (image.id, image.buffer.clone())
        };

        let request_id = self.next_request_id.fetch_add(1, Ordering::Relaxed);
        self.latest_accepted.store(request_id, Ordering::SeqCst);

        let job = Job {
            request_id,
            image_id,
            source,
            adjustments: adjustments.clamped(),
            dither: dither.clamped(),
        };

        debug!(request_id, image_id, "Dispatching job");
        self.job_tx
            .send(job)
            .await
            .map_err(|_| ProcessError::WorkerUnavailable)?;
        Ok(request_id)
    }

    /// Check an inbound outcome against the latest-accepted register.
    ///
    /// Returns the outcome only when it answers the most recently
    /// dispatched request; anything else has been superseded and is
    /// discarded, never published.
    pub fn publish(&self, outcome: JobOutcome) -> Option<JobOutcome> {
        let latest = self.latest_accepted.load(Ordering::SeqCst);
        if outcome.request_id() == latest {
            Some(outcome)
        } else {
            debug!(
                request_id = outcome.request_id(),
                latest, "Discarding superseded outcome"
            );
            None
        }
    }

    /// Await the next publishable outcome.
    ///
    /// Stale outcomes are drained and discarded along the way. Returns
    /// `None` only when the worker has stopped.
    pub async fn next_outcome(&self) -> Option<JobOutcome> {
        let mut rx = self.outcome_rx.lock().await;
        while let Some(outcome) = rx.recv().await {
            if let Some(accepted) = self.publish(outcome) {
                return Some(accepted);
            }
        }
        None
    }

    /// The most recently dispatched request id, 0 before any dispatch.
    pub fn latest_request_id(&self) -> u64 {
        self.latest_accepted.load(Ordering::SeqCst)
    }

    /// The adjusted-buffer cache.
    pub fn cache(&self) -> &AdjustedCache {
        &self.cache
    }
}

impl Default for Coordinator {
    fn default() -> Self {
        Self::new()
    }
}
