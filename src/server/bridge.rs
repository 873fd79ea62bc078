//! Blocking hand-off from request threads to the gateway executor.
//!
//! Request handling is synchronous; Discord operations are asynchronous and must run on
//! the gateway executor. [`Bridge::submit`] packages a future as a unit of work, queues
//! it on the executor, and blocks the calling thread on a single-result channel until
//! the work finishes or the deadline passes.
//!
//! A timeout only ends the wait. The work keeps running on the executor and its result
//! is dropped when it eventually arrives; nothing is cancelled mid-flight.

use std::{
    future::Future,
    sync::mpsc::{self as std_mpsc, RecvTimeoutError},
    time::{Duration, Instant},
};

use dioxus_logger::tracing;
use tokio::sync::mpsc;

use crate::server::{error::bridge::BridgeError, executor::UnitOfWork};

/// Thread-safe handle for submitting work to the gateway executor.
///
/// Cheap to clone; every clone feeds the same executor queue. Safe to use from any
/// number of request threads at once. Submissions from different callers are
/// independent and carry no ordering guarantee relative to each other.
#[derive(Clone)]
pub struct Bridge {
    jobs: mpsc::UnboundedSender<UnitOfWork>,
    timeout: Duration,
}

impl Bridge {
    pub(crate) fn new(jobs: mpsc::UnboundedSender<UnitOfWork>, timeout: Duration) -> Self {
        Self { jobs, timeout }
    }

    /// Whether the executor behind this bridge still accepts work.
    pub fn is_available(&self) -> bool {
        !self.jobs.is_closed()
    }

    /// Runs `work` on the gateway executor and blocks until it completes or the
    /// timeout elapses.
    ///
    /// Must not be called from the executor thread itself or from inside an async
    /// task; request handlers reach it through `spawn_blocking`.
    ///
    /// # Arguments
    /// - `work` - Asynchronous operation producing the outcome
    ///
    /// # Returns
    /// - `Ok(T)` / `Err(E)` - The outcome produced by `work`
    /// - `Err(BridgeError::Timeout)` - No result within the timeout; `work` continues
    ///   in the background
    /// - `Err(BridgeError::ExecutorUnavailable)` - The executor has stopped, reported
    ///   immediately rather than after the timeout
    /// - `Err(BridgeError::WorkAborted)` - The executor dropped `work` without a result
    pub fn submit<F, T, E>(&self, work: F) -> Result<T, E>
    where
        F: Future<Output = Result<T, E>> + Send + 'static,
        T: Send + 'static,
        E: From<BridgeError> + Send + 'static,
    {
        let pending = self.enqueue(work)?;
        pending.wait(&self.jobs)?
    }

    fn enqueue<F, R>(&self, work: F) -> Result<PendingOperation<R>, BridgeError>
    where
        F: Future<Output = R> + Send + 'static,
        R: Send + 'static,
    {
        let (result_tx, result_rx) = std_mpsc::sync_channel(1);

        let job: UnitOfWork = Box::pin(async move {
            let outcome = work.await;
            if result_tx.send(outcome).is_err() {
                tracing::debug!("Gateway operation finished after its caller stopped waiting");
            }
        });

        self.jobs
            .send(job)
            .map_err(|_| BridgeError::ExecutorUnavailable)?;

        Ok(PendingOperation {
            result: result_rx,
            deadline: Instant::now() + self.timeout,
            timeout: self.timeout,
        })
    }
}

/// A submitted unit of work awaiting its single result.
///
/// Lives only for the duration of one `submit` call; dropping it discards the result.
struct PendingOperation<R> {
    result: std_mpsc::Receiver<R>,
    deadline: Instant,
    timeout: Duration,
}

impl<R> PendingOperation<R> {
    /// Blocks until the result arrives, the deadline passes, or the executor drops the
    /// work.
    fn wait(self, jobs: &mpsc::UnboundedSender<UnitOfWork>) -> Result<R, BridgeError> {
        let remaining = self.deadline.saturating_duration_since(Instant::now());

        match self.result.recv_timeout(remaining) {
            Ok(outcome) => Ok(outcome),
            Err(RecvTimeoutError::Timeout) => {
                tracing::warn!(
                    "Gateway operation did not complete within {:?}",
                    self.timeout
                );
                Err(BridgeError::Timeout(self.timeout))
            }
            Err(RecvTimeoutError::Disconnected) if jobs.is_closed() => {
                Err(BridgeError::ExecutorUnavailable)
            }
            Err(RecvTimeoutError::Disconnected) => {
                tracing::error!("Gateway operation was dropped before producing a result");
                Err(BridgeError::WorkAborted)
            }
        }
    }
}

#[cfg(test)]
mod test;
