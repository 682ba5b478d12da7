//! The UI-owning execution context.
//!
//! The vendor SDK is not safe to drive from arbitrary threads, so every
//! SDK-mutating call is posted onto a single scheduler task that owns the
//! adapter handle. Posting is fire-and-forget: the caller's operation
//! resolves as soon as the job is accepted, never when the native UI work
//! completes. There is no cancellation and no timeout.

use std::sync::Arc;

use bridge_traits::BeaconSdk;
use tokio::sync::mpsc;
use tracing::{debug, error};

use crate::error::{BeaconError, Result};

pub(crate) type Job = Box<dyn FnOnce(&dyn BeaconSdk) -> bridge_traits::Result<()> + Send>;

/// Handle to the single task that executes SDK calls in post order.
pub(crate) struct UiScheduler {
    tx: mpsc::UnboundedSender<Job>,
}

impl UiScheduler {
    /// Spawn the scheduler task. Must run inside a tokio runtime.
    pub(crate) fn spawn(sdk: Arc<dyn BeaconSdk>) -> UiScheduler {
        let (tx, mut rx) = mpsc::unbounded_channel::<Job>();

        tokio::spawn(async move {
            while let Some(job) = rx.recv().await {
                // Adapter failures happen after the originating call already
                // resolved; logging is all that is left to do.
                if let Err(err) = job(sdk.as_ref()) {
                    error!(error = %err, "Beacon SDK call failed");
                }
            }
            debug!("UI scheduler shut down");
        });

        UiScheduler { tx }
    }

    /// Queue a job. Resolves at schedule time, not completion time.
    pub(crate) fn post(&self, job: Job) -> Result<()> {
        self.tx
            .send(job)
            .map_err(|_| BeaconError::Dispatch("UI scheduler is no longer running".to_owned()))
    }
}
