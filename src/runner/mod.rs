//! Run orchestration: one worker thread per sort
//!
//! - [`Orchestrator`]: starts runs and enforces at most one in flight
//! - [`RunHandle`]: the polling side of a run (live step count, step events)
//! - [`RunReport`]: metrics captured once a run completes
//!
//! # Execution Model
//!
//! The worker thread owns the dataset for the whole run and sorts it to
//! completion without suspending. The polling side only reads: the shared
//! [`StepCounter`] and the [`StepEvent`]s that arrive over an unbounded
//! channel. Runs cannot be cancelled.

mod report;

pub use report::{format_clock, RunReport};

use crate::dataset::{Bar, Preset};
use crate::instrument::{Probe, StepCounter, StepEvent};
use crate::sorting::{Algorithm, SortError};
use crossbeam_channel::{Receiver, TryRecvError};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::{Instant, SystemTime};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RunError {
    /// A sort is already running
    #[error("A sort is already running")]
    Busy,

    /// The worker thread panicked before producing a report
    #[error("Sort worker panicked")]
    WorkerPanicked,

    #[error(transparent)]
    Sort(#[from] SortError),

    #[error("Failed to spawn sort worker: {0}")]
    Spawn(#[from] std::io::Error),
}

/// Everything a run needs; the dataset is moved to the worker
#[derive(Debug, Clone)]
pub struct RunRequest {
    pub algorithm: Algorithm,
    pub preset: Preset,
    pub delay_ms: u64,
    pub data: Vec<Bar>,
}

/// Clears the busy flag when the run's handle goes away
struct BusyGuard(Arc<AtomicBool>);

impl Drop for BusyGuard {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

/// Starts sorts and refuses to overlap them
#[derive(Debug, Clone, Default)]
pub struct Orchestrator {
    busy: Arc<AtomicBool>,
}

impl Orchestrator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_busy(&self) -> bool {
        self.busy.load(Ordering::Acquire)
    }

    /// Start `request` on a fresh worker thread.
    ///
    /// The orchestrator stays busy until the returned handle is joined or
    /// dropped; starting again before that fails with [`RunError::Busy`].
    pub fn start(&self, request: RunRequest) -> Result<RunHandle, RunError> {
        if self
            .busy
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            log::warn!("rejected {} run: a sort is already running", request.algorithm);
            return Err(RunError::Busy);
        }
        let guard = BusyGuard(Arc::clone(&self.busy));

        let counter = StepCounter::new();
        counter.reset();
        let (tx, rx) = crossbeam_channel::unbounded::<StepEvent>();

        log::info!(
            "starting {} sort over {} {} values (delay {} ms)",
            request.algorithm,
            request.data.len(),
            request.preset,
            request.delay_ms
        );

        let worker_counter = counter.clone();
        let worker = thread::Builder::new()
            .name("sortty-worker".to_string())
            .spawn(move || {
                let RunRequest {
                    algorithm,
                    preset,
                    delay_ms,
                    mut data,
                } = request;
                let mut tx = tx;

                let started_at = SystemTime::now();
                let clock = Instant::now();
                {
                    let mut probe = Probe::with_observer(worker_counter.clone(), &mut tx);
                    let high = data.len().saturating_sub(1);
                    if !data.is_empty() {
                        algorithm.sort(&mut data, 0, high, &mut probe);
                    }
                }
                let elapsed = clock.elapsed();
                let finished_at = SystemTime::now();
                let steps = worker_counter.get();

                log::info!(
                    "{} sort finished: {} steps in {} ns",
                    algorithm,
                    steps,
                    elapsed.as_nanos()
                );

                RunReport {
                    algorithm,
                    preset,
                    delay_ms,
                    started_at,
                    finished_at,
                    elapsed,
                    steps,
                    data,
                }
            })?;

        Ok(RunHandle {
            counter,
            events: rx,
            worker,
            _busy: guard,
        })
    }

    /// Start a run by catalog index, as the selection list reports it.
    ///
    /// An index outside the catalog fails before anything is started.
    pub fn start_selection(
        &self,
        selection: usize,
        preset: Preset,
        delay_ms: u64,
        data: Vec<Bar>,
    ) -> Result<RunHandle, RunError> {
        let algorithm = Algorithm::from_index(selection)?;
        self.start(RunRequest {
            algorithm,
            preset,
            delay_ms,
            data,
        })
    }

    /// Start a run and wait for it, discarding step events
    pub fn run_blocking(&self, request: RunRequest) -> Result<RunReport, RunError> {
        self.start(request)?.join()
    }
}

/// Polling side of an in-flight run
pub struct RunHandle {
    counter: StepCounter,
    events: Receiver<StepEvent>,
    worker: JoinHandle<RunReport>,
    _busy: BusyGuard,
}

impl RunHandle {
    /// Live step count; safe to call while the worker is sorting
    pub fn steps(&self) -> u64 {
        self.counter.get()
    }

    pub fn counter(&self) -> &StepCounter {
        &self.counter
    }

    /// Next queued step event, if any, without blocking
    pub fn try_next_event(&self) -> Option<StepEvent> {
        match self.events.try_recv() {
            Ok(event) => Some(event),
            Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => None,
        }
    }

    /// Every step event queued so far, without blocking
    pub fn drain_events(&self) -> Vec<StepEvent> {
        self.events.try_iter().collect()
    }

    pub fn pending_events(&self) -> usize {
        self.events.len()
    }

    /// True once the worker has returned
    pub fn is_finished(&self) -> bool {
        self.worker.is_finished()
    }

    /// Wait for the worker and take its report, releasing the orchestrator.
    ///
    /// Step events still queued are discarded.
    pub fn join(self) -> Result<RunReport, RunError> {
        self.worker.join().map_err(|_| {
            log::error!("sort worker panicked");
            RunError::WorkerPanicked
        })
    }
}
