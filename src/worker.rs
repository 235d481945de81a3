//! Named background threads with explicit cancellation and bounded joins.
//!
//! Every worker loop blocks on [`StopToken::wait`] between iterations, so a
//! stop request wakes it immediately instead of at the next poll.

use crate::error::AppError;
use log::{error, warn};
use std::sync::mpsc::{self, RecvTimeoutError};
use std::sync::{Arc, Condvar, Mutex, MutexGuard, PoisonError};
use std::thread::{self, JoinHandle};
use std::time::Duration;

/// Cancellation flag that can be waited on.
#[derive(Debug, Clone, Default)]
pub struct StopToken {
    inner: Arc<(Mutex<bool>, Condvar)>,
}

impl StopToken {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, bool> {
        self.inner.0.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn stop(&self) {
        *self.lock() = true;
        self.inner.1.notify_all();
    }

    pub fn is_stopped(&self) -> bool {
        *self.lock()
    }

    /// Block for up to `timeout`. Returns true if a stop was requested,
    /// either before or during the wait.
    pub fn wait(&self, timeout: Duration) -> bool {
        let guard = self.lock();
        let (guard, _result) = self
            .inner
            .1
            .wait_timeout_while(guard, timeout, |stopped| !*stopped)
            .unwrap_or_else(PoisonError::into_inner);
        *guard
    }
}

/// A running background thread plus the token that stops it.
///
/// Dropping a `Worker` requests a stop but does not wait for the thread.
pub struct Worker {
    name: &'static str,
    stop: StopToken,
    // Disconnects when the thread's closure returns or unwinds.
    done: mpsc::Receiver<()>,
    handle: Option<JoinHandle<()>>,
}

impl Worker {
    pub fn spawn<F>(name: &'static str, body: F) -> Result<Self, AppError>
    where
        F: FnOnce(StopToken) + Send + 'static,
    {
        let stop = StopToken::new();
        let token = stop.clone();
        let (done_tx, done) = mpsc::channel::<()>();

        let handle = thread::Builder::new()
            .name(format!("wakelock-{name}"))
            .spawn(move || {
                let _done = done_tx;
                body(token);
            })
            .map_err(|source| AppError::Spawn { worker: name, source })?;

        Ok(Self {
            name,
            stop,
            done,
            handle: Some(handle),
        })
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn is_finished(&self) -> bool {
        self.handle.as_ref().map_or(true, JoinHandle::is_finished)
    }

    /// Ask the thread to stop without waiting.
    pub fn request_stop(&self) {
        self.stop.stop();
    }

    /// Wait up to `timeout` for the thread to exit, then join it. A thread
    /// still running at the deadline is detached.
    pub fn join_timeout(mut self, timeout: Duration) -> Result<(), AppError> {
        match self.done.recv_timeout(timeout) {
            Err(RecvTimeoutError::Disconnected) | Ok(()) => {}
            Err(RecvTimeoutError::Timeout) => {
                warn!("{} thread still running after {timeout:?}, detaching", self.name);
                self.handle.take();
                return Err(AppError::JoinTimeout {
                    worker: self.name,
                    timeout_ms: timeout.as_millis(),
                });
            }
        }

        match self.handle.take().map(JoinHandle::join) {
            Some(Err(_)) => {
                error!("{} thread panicked", self.name);
                Err(AppError::WorkerPanicked { worker: self.name })
            }
            Some(Ok(())) | None => Ok(()),
        }
    }

    /// Request a stop and wait for it, bounded by `timeout`.
    pub fn stop(self, timeout: Duration) -> Result<(), AppError> {
        self.request_stop();
        self.join_timeout(timeout)
    }
}

impl Drop for Worker {
    fn drop(&mut self) {
        self.stop.stop();
    }
}
