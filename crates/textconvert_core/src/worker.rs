//! Background worker that runs port calls off the UI thread.
//!
//! The worker owns a current-thread tokio runtime. Every job is spawned as its
//! own task, so slow and fast conversions overlap and may finish out of order;
//! ordering is reconciled by the engine using the ticket carried on each
//! outcome.

use crate::buffer::IndentWidth;
use crate::error::PortError;
use crate::ports::{ConversionPort, FormatPort};
use crate::side::Side;
use crossbeam_channel::{Receiver, RecvTimeoutError, TryRecvError};
use std::thread;
use std::time::{Duration, Instant};
use tokio::sync::mpsc::{unbounded_channel, UnboundedSender};
use tracing::error;

/// Which step of a pane write a job performs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum JobStage {
    /// Conversion from the opposite pane's text.
    Convert,
    /// Beautify of text already destined for the target pane.
    Format,
}

pub(crate) enum PortCall {
    Convert(ConversionPort),
    Format(FormatPort, IndentWidth),
}

pub(crate) struct SyncJob {
    pub(crate) target: Side,
    pub(crate) ticket: u64,
    pub(crate) stage: JobStage,
    pub(crate) input: String,
    pub(crate) call: PortCall,
}

/// Result of one job, tagged with the ticket it was issued under.
#[derive(Debug)]
pub(crate) struct SyncOutcome {
    pub(crate) target: Side,
    pub(crate) ticket: u64,
    pub(crate) stage: JobStage,
    /// The text the port was called with; the fallback when formatting fails.
    pub(crate) input: String,
    pub(crate) result: Result<String, PortError>,
    pub(crate) elapsed: Duration,
}

impl SyncOutcome {
    fn worker_gone(job: SyncJob) -> Self {
        Self {
            target: job.target,
            ticket: job.ticket,
            stage: job.stage,
            input: job.input,
            result: Err(PortError::WorkerGone),
            elapsed: Duration::ZERO,
        }
    }
}

/// Channel endpoints of the conversion worker.
pub(crate) struct ConversionWorker {
    job_tx: UnboundedSender<SyncJob>,
    outcome_rx: Receiver<SyncOutcome>,
}

impl ConversionWorker {
    /// Queues `job`; when the worker is gone the job comes back as a failed
    /// outcome so the caller can fall back immediately.
    pub(crate) fn submit(&self, job: SyncJob) -> Result<(), SyncOutcome> {
        self.job_tx
            .send(job)
            .map_err(|err| SyncOutcome::worker_gone(err.0))
    }

    pub(crate) fn try_recv(&self) -> Option<SyncOutcome> {
        match self.outcome_rx.try_recv() {
            Ok(outcome) => Some(outcome),
            Err(TryRecvError::Empty | TryRecvError::Disconnected) => None,
        }
    }

    pub(crate) fn recv_timeout(&self, timeout: Duration) -> Result<SyncOutcome, RecvTimeoutError> {
        self.outcome_rx.recv_timeout(timeout)
    }
}

async fn run_job(job: SyncJob, timeout: Option<Duration>) -> SyncOutcome {
    let started = Instant::now();
    let SyncJob {
        target,
        ticket,
        stage,
        input,
        call,
    } = job;
    let future = match &call {
        PortCall::Convert(port) => port.call(input.clone()),
        PortCall::Format(port, indent) => port.call(input.clone(), *indent),
    };
    let result = match timeout {
        Some(limit) => tokio::time::timeout(limit, future)
            .await
            .unwrap_or(Err(PortError::TimedOut(limit))),
        None => future.await,
    };
    SyncOutcome {
        target,
        ticket,
        stage,
        input,
        result,
        elapsed: started.elapsed(),
    }
}

/// Spawns the conversion worker thread and returns its channel endpoints.
///
/// # Panics
/// Panics if the worker thread cannot be spawned.
pub(crate) fn spawn_conversion_worker(timeout: Option<Duration>) -> ConversionWorker {
    let (job_tx, mut job_rx) = unbounded_channel::<SyncJob>();
    let (outcome_tx, outcome_rx) = crossbeam_channel::unbounded();

    thread::Builder::new()
        .name("textconvert-sync".to_string())
        .spawn(move || {
            let runtime = match tokio::runtime::Builder::new_current_thread()
                .enable_time()
                .build()
            {
                Ok(runtime) => runtime,
                Err(err) => {
                    error!("failed to start conversion runtime: {}", err);
                    return;
                }
            };
            runtime.block_on(async move {
                while let Some(job) = job_rx.recv().await {
                    let outcome_tx = outcome_tx.clone();
                    tokio::spawn(async move {
                        let _ = outcome_tx.send(run_job(job, timeout).await);
                    });
                }
            });
            // Sync ports that ignored their timeout still hold blocking threads.
            runtime.shutdown_background();
        })
        .expect("spawn conversion worker");

    ConversionWorker { job_tx, outcome_rx }
}
