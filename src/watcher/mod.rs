use crate::constants::WATCH_POLL_INTERVAL;
use crate::dispatch::Event;
use crate::error::AppError;
use crate::models::TargetSignature;
use crate::platform::ProcessSource;
use crate::worker::{StopToken, Worker};
use log::debug;
use std::sync::mpsc::Sender;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct WatcherConfig {
    pub target: TargetSignature,
    pub poll_interval: Duration,
}

impl Default for WatcherConfig {
    fn default() -> Self {
        Self {
            target: TargetSignature::default(),
            poll_interval: WATCH_POLL_INTERVAL,
        }
    }
}

/// What the controller should do after a presence observation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Activate,
    Deactivate,
}

/// Target present and idle -> start; target gone and running -> stop.
/// Anything else leaves the session alone.
pub fn presence_transition(present: bool, active: bool) -> Option<Transition> {
    match (present, active) {
        (true, false) => Some(Transition::Activate),
        (false, true) => Some(Transition::Deactivate),
        (true, true) | (false, false) => None,
    }
}

/// Spawn the presence watcher. It scans immediately, then once per poll
/// interval, and reports every observation to the dispatch thread.
pub fn spawn(
    source: Box<dyn ProcessSource>,
    config: WatcherConfig,
    events: Sender<Event>,
) -> Result<Worker, AppError> {
    Worker::spawn("watcher", move |stop| {
        run(source, &config, &events, &stop);
    })
}

pub fn run(
    mut source: Box<dyn ProcessSource>,
    config: &WatcherConfig,
    events: &Sender<Event>,
    stop: &StopToken,
) {
    while !stop.is_stopped() {
        let present = config.target.is_present(source.process_names());
        debug!("Presence scan for {}: {present}", config.target);

        if events.send(Event::Presence { present }).is_err() {
            debug!("Dispatcher gone, watcher exiting");
            break;
        }

        if stop.wait(config.poll_interval) {
            break;
        }
    }
}
