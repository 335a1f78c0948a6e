//! Debounced job submission.
//!
//! Interactive controls mutate parameters far faster than the pipeline can
//! run. The debouncer coalesces them: every mutation resets a single-shot
//! timer, and only after a quiet period does the settled parameter state
//! become one job.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{sleep_until, Instant};
use tracing::{debug, warn};

use dither_core::{AdjustmentParams, DitherParams};

use super::Coordinator;

/// Quiet period before a settled parameter state is dispatched.
pub const QUIET_PERIOD: Duration = Duration::from_millis(100);

/// A parameter mutation from an interactive control.
#[derive(Debug, Clone, Copy)]
pub enum ParamChange {
    /// Replace the tonal adjustment parameters.
    Adjustments(AdjustmentParams),
    /// Replace the dither parameters.
    Dither(DitherParams),
}

/// Coalesces parameter mutations into at most one job per settled state.
///
/// Mutations recorded through [`update`](Self::update) reset the quiet
/// timer; when it finally fires, the current parameter state is submitted
/// to the coordinator as a single job. Dropping the debouncer stops the
/// timer task; a still-pending state is not flushed.
pub struct Debouncer {
    tx: mpsc::UnboundedSender<ParamChange>,
    _task: JoinHandle<()>,
}

impl Debouncer {
    /// Start a debouncer with the standard 100 ms quiet period.
    pub fn new(coordinator: Arc<Coordinator>) -> Self {
        Self::with_quiet_period(coordinator, QUIET_PERIOD)
    }

    /// Start a debouncer with a custom quiet period. Tests use short
    /// periods to keep runs fast.
    pub fn with_quiet_period(coordinator: Arc<Coordinator>, quiet: Duration) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        let task = tokio::spawn(run(coordinator, rx, quiet));
        Self { tx, _task: task }
    }

    /// Record a parameter mutation, resetting the quiet timer.
    pub fn update(&self, change: ParamChange) {
        // A closed channel means the timer task is gone; nothing to do.
        let _ = self.tx.send(change);
    }
}

async fn run(
    coordinator: Arc<Coordinator>,
    mut rx: mpsc::UnboundedReceiver<ParamChange>,
    quiet: Duration,
) {
    let mut adjustments = AdjustmentParams::default();
    let mut dither = DitherParams::default();
    let mut deadline: Option<Instant> = None;

    loop {
        tokio::select! {
            change = rx.recv() => match change {
                Some(ParamChange::Adjustments(params)) => {
                    adjustments = params;
                    deadline = Some(Instant::now() + quiet);
                }
                Some(ParamChange::Dither(params)) => {
                    dither = params;
                    deadline = Some(Instant::now() + quiet);
                }
                None => break,
            },
            // Guard keeps the arm unpolled while no mutation is pending.
            _ = async { sleep_until(deadline.unwrap()).await }, if deadline.is_some() => {
                deadline = None;
                debug!("Parameters settled, dispatching job");
                if let Err(e) = coordinator.submit(adjustments, dither).await {
                    warn!(error = %e, "Debounced dispatch failed");
                }
            }
        }
    }
}
