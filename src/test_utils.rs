//! Shared test utilities for WakeLock.
//!
//! Fakes for the OS boundary and the presentation layer, plus a polling
//! helper for assertions about background threads.

#![cfg(test)]

use crate::error::InhibitError;
use crate::models::View;
use crate::platform::{Platform, ProcessSource, SleepInhibitor};
use crate::session::Presenter;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::{Duration, Instant};

/// Route `log` output through the test harness. Safe to call repeatedly.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Poll `condition` every few milliseconds until it holds or `timeout`
/// passes. Returns the final value of the condition.
pub fn wait_until<F: FnMut() -> bool>(timeout: Duration, mut condition: F) -> bool {
    let deadline = Instant::now() + timeout;
    loop {
        if condition() {
            return true;
        }
        if Instant::now() >= deadline {
            return false;
        }
        thread::sleep(Duration::from_millis(5));
    }
}

#[derive(Default)]
struct FakeState {
    created: AtomicUsize,
    keep_awake_calls: AtomicUsize,
    release_calls: AtomicUsize,
    scans: AtomicUsize,
    fail_create: AtomicBool,
    fail_keep_awake: AtomicBool,
    processes: Mutex<Vec<String>>,
}

/// Platform double: counts inhibitor calls and serves a scripted process list.
#[derive(Clone, Default)]
pub struct FakePlatform {
    state: Arc<FakeState>,
}

impl FakePlatform {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_processes(names: &[&str]) -> Self {
        let platform = Self::new();
        platform.set_processes(names);
        platform
    }

    pub fn shared(&self) -> Arc<dyn Platform> {
        Arc::new(self.clone())
    }

    pub fn set_processes(&self, names: &[&str]) {
        *self.state.processes.lock().unwrap() = names.iter().map(|n| (*n).to_string()).collect();
    }

    pub fn fail_create(&self, fail: bool) {
        self.state.fail_create.store(fail, Ordering::SeqCst);
    }

    pub fn fail_keep_awake(&self, fail: bool) {
        self.state.fail_keep_awake.store(fail, Ordering::SeqCst);
    }

    pub fn inhibitors_created(&self) -> usize {
        self.state.created.load(Ordering::SeqCst)
    }

    pub fn keep_awake_calls(&self) -> usize {
        self.state.keep_awake_calls.load(Ordering::SeqCst)
    }

    pub fn release_calls(&self) -> usize {
        self.state.release_calls.load(Ordering::SeqCst)
    }

    pub fn scans(&self) -> usize {
        self.state.scans.load(Ordering::SeqCst)
    }
}

impl Platform for FakePlatform {
    fn sleep_inhibitor(&self) -> Result<Box<dyn SleepInhibitor>, InhibitError> {
        if self.state.fail_create.load(Ordering::SeqCst) {
            return Err(InhibitError::Unavailable("fake".into()));
        }
        self.state.created.fetch_add(1, Ordering::SeqCst);
        Ok(Box::new(FakeInhibitor {
            state: Arc::clone(&self.state),
        }))
    }

    fn process_source(&self) -> Box<dyn ProcessSource> {
        Box::new(FakeProcesses {
            state: Arc::clone(&self.state),
        })
    }
}

struct FakeInhibitor {
    state: Arc<FakeState>,
}

impl SleepInhibitor for FakeInhibitor {
    fn keep_awake(&mut self) -> Result<(), InhibitError> {
        self.state.keep_awake_calls.fetch_add(1, Ordering::SeqCst);
        if self.state.fail_keep_awake.load(Ordering::SeqCst) {
            return Err(InhibitError::Rejected("fake".into()));
        }
        Ok(())
    }

    fn release(&mut self) {
        self.state.release_calls.fetch_add(1, Ordering::SeqCst);
    }
}

struct FakeProcesses {
    state: Arc<FakeState>,
}

impl ProcessSource for FakeProcesses {
    fn process_names(&mut self) -> Vec<String> {
        self.state.scans.fetch_add(1, Ordering::SeqCst);
        self.state.processes.lock().unwrap().clone()
    }
}

/// Presenter that keeps every view it is asked to render.
#[derive(Clone, Default)]
pub struct RecordingPresenter {
    views: Arc<Mutex<Vec<View>>>,
}

impl RecordingPresenter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn views(&self) -> Vec<View> {
        self.views.lock().unwrap().clone()
    }

    pub fn last(&self) -> Option<View> {
        self.views.lock().unwrap().last().cloned()
    }

    /// Number of times the displayed status changed to `status`.
    pub fn transitions_to(&self, status: &str) -> usize {
        let views = self.views.lock().unwrap();
        let mut previous: Option<&str> = None;
        let mut count = 0;
        for view in views.iter() {
            if view.status == status && previous != Some(status) {
                count += 1;
            }
            previous = Some(view.status.as_str());
        }
        count
    }
}

impl Presenter for RecordingPresenter {
    fn render(&mut self, view: &View) {
        self.views.lock().unwrap().push(view.clone());
    }
}
