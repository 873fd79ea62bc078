//! Dedicated thread hosting the Discord gateway's asynchronous executor.
//!
//! The executor is a single-threaded Tokio runtime running on its own OS thread. It owns
//! the bot connection and every mutating Discord operation. Work reaches it through a
//! queue: each queued unit is spawned as its own task, so units interleave at their await
//! points and a unit that never completes does not hold up the ones behind it.
//!
//! The executor is started once during bootstrap and never restarted. When its thread
//! exits, the queue's receiving half is dropped, which is how [`Bridge`] detects that
//! no more work can run.

use std::{future::Future, pin::Pin, thread, time::Duration};

use dioxus_logger::tracing;
use tokio::sync::{mpsc, oneshot};

use crate::server::bridge::Bridge;

/// Name given to the executor's OS thread.
const EXECUTOR_THREAD_NAME: &str = "discord-gateway";

/// A self-contained asynchronous operation queued onto the executor.
pub type UnitOfWork = Pin<Box<dyn Future<Output = ()> + Send + 'static>>;

/// Handle to the running gateway executor thread.
pub struct GatewayExecutor {
    jobs: mpsc::UnboundedSender<UnitOfWork>,
    shutdown: Option<oneshot::Sender<()>>,
    thread: Option<thread::JoinHandle<()>>,
}

impl GatewayExecutor {
    /// Starts the executor thread and its single-threaded runtime.
    ///
    /// # Returns
    /// - `Ok(GatewayExecutor)` - The thread is running and accepting work
    /// - `Err(std::io::Error)` - Failed to build the runtime or spawn the thread
    pub fn start() -> Result<Self, std::io::Error> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()?;

        let (jobs, queue) = mpsc::unbounded_channel();
        let (shutdown, stop) = oneshot::channel();

        let thread = thread::Builder::new()
            .name(EXECUTOR_THREAD_NAME.to_string())
            .spawn(move || {
                runtime.block_on(run(queue, stop));
                // Dropping the runtime cancels whatever work is still in flight.
                drop(runtime);
                tracing::info!("Gateway executor stopped");
            })?;

        tracing::debug!("Gateway executor started on thread '{}'", EXECUTOR_THREAD_NAME);

        Ok(Self {
            jobs,
            shutdown: Some(shutdown),
            thread: Some(thread),
        })
    }

    /// Creates a bridge that submits work to this executor and waits up to `timeout`
    /// for each result.
    pub fn bridge(&self, timeout: Duration) -> Bridge {
        Bridge::new(self.jobs.clone(), timeout)
    }

    /// Stops the executor and waits for its thread to exit.
    ///
    /// Work still in flight is cancelled; callers blocked on it observe
    /// `BridgeError::ExecutorUnavailable`. Blocks the calling thread, so async callers
    /// should run it through `spawn_blocking`.
    pub fn shutdown(mut self) {
        self.signal_shutdown();

        if let Some(thread) = self.thread.take() {
            if thread.join().is_err() {
                tracing::error!("Gateway executor thread panicked during shutdown");
            }
        }
    }

    fn signal_shutdown(&mut self) {
        if let Some(shutdown) = self.shutdown.take() {
            let _ = shutdown.send(());
        }
    }
}

impl Drop for GatewayExecutor {
    fn drop(&mut self) {
        self.signal_shutdown();
    }
}

/// Dispatch loop: spawns each queued unit as its own task until shutdown is signalled
/// or every sender is gone.
async fn run(mut queue: mpsc::UnboundedReceiver<UnitOfWork>, mut stop: oneshot::Receiver<()>) {
    loop {
        tokio::select! {
            job = queue.recv() => match job {
                Some(job) => {
                    tokio::spawn(job);
                }
                None => break,
            },
            _ = &mut stop => break,
        }
    }

    // Refuse further submissions before in-flight work is torn down.
    queue.close();
    drop(queue);
}

#[cfg(test)]
mod tests {
    use std::time::Instant;

    use super::*;
    use crate::server::error::bridge::BridgeError;

    /// Tests that a freshly started executor accepts work.
    ///
    /// Expected: running before shutdown, not running after
    #[test]
    fn reports_running_until_shutdown() {
        let executor = GatewayExecutor::start().unwrap();
        let bridge = executor.bridge(Duration::from_secs(1));

        assert!(bridge.is_available());

        executor.shutdown();

        assert!(!bridge.is_available());
    }

    /// Tests that work blocked on the executor is released when it stops.
    ///
    /// Verifies that a caller waiting on a never-completing unit does not wait for its
    /// full timeout once the executor is shut down from another thread.
    ///
    /// Expected: Err(ExecutorUnavailable) well before the 30 second timeout
    #[test]
    fn shutdown_releases_waiting_callers() {
        let executor = GatewayExecutor::start().unwrap();
        let bridge = executor.bridge(Duration::from_secs(30));

        let waiter = thread::spawn(move || {
            let started = Instant::now();
            let result: Result<(), BridgeError> = bridge.submit(std::future::pending());
            (result, started.elapsed())
        });

        thread::sleep(Duration::from_millis(100));
        executor.shutdown();

        let (result, elapsed) = waiter.join().unwrap();
        assert_eq!(result, Err(BridgeError::ExecutorUnavailable));
        assert!(elapsed < Duration::from_secs(5));
    }

    /// Tests that dropping the handle also stops the executor.
    ///
    /// Expected: the bridge reports unavailable shortly after drop
    #[test]
    fn drop_stops_executor() {
        let executor = GatewayExecutor::start().unwrap();
        let bridge = executor.bridge(Duration::from_secs(1));

        drop(executor);

        let deadline = Instant::now() + Duration::from_secs(5);
        while bridge.is_available() && Instant::now() < deadline {
            thread::sleep(Duration::from_millis(10));
        }
        assert!(!bridge.is_available());
    }
}
