//! The dispatch thread: the only place the session controller runs.
//!
//! Front-ends and workers never touch the controller. They post [`Event`]s
//! into one channel and the dispatch loop applies them in order.

use crate::error::AppError;
use crate::models::SessionId;
use crate::platform::Platform;
use crate::session::{Config, Presenter, SessionController};
use crate::worker::Worker;
use log::{debug, info, warn};
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

#[derive(Debug)]
pub enum Event {
    /// Manual start/stop
    Toggle,
    /// Flip auto-run
    ToggleAuto,
    /// Set auto-run to an explicit value
    SetAutoTrigger { enabled: bool },
    /// Watcher observation
    Presence { present: bool },
    /// Reporter tick
    Elapsed { session: SessionId, text: String },
    Shutdown,
}

/// Front-end side of the dispatch thread.
pub struct SessionHandle {
    events: Sender<Event>,
    dispatcher: Mutex<Option<Worker>>,
    shutdown_timeout: Duration,
}

impl SessionHandle {
    /// Start the dispatch thread. The presenter receives the initial view
    /// right away and every change after that.
    pub fn spawn(
        config: Config,
        platform: Arc<dyn Platform>,
        presenter: Box<dyn Presenter>,
    ) -> Result<Self, AppError> {
        let (events, inbox) = mpsc::channel();
        // Watcher, inhibitor and reporter are joined one after another.
        let shutdown_timeout = config.session.join_timeout.saturating_mul(4);
        let controller = SessionController::new(config, platform, events.clone(), presenter);

        let dispatcher = Worker::spawn("dispatch", move |_stop| run(controller, &inbox))?;

        Ok(Self {
            events,
            dispatcher: Mutex::new(Some(dispatcher)),
            shutdown_timeout,
        })
    }

    fn send(&self, event: Event) -> Result<(), AppError> {
        self.events.send(event).map_err(|_| AppError::DispatcherGone)
    }

    pub fn toggle(&self) -> Result<(), AppError> {
        self.send(Event::Toggle)
    }

    pub fn toggle_auto(&self) -> Result<(), AppError> {
        self.send(Event::ToggleAuto)
    }

    pub fn set_auto_trigger(&self, enabled: bool) -> Result<(), AppError> {
        self.send(Event::SetAutoTrigger { enabled })
    }

    /// Stop auto-run and any active session, then wait (bounded) for the
    /// dispatch thread. Later commands fail with `DispatcherGone`.
    pub fn shutdown(&self) -> Result<(), AppError> {
        let dispatcher = self
            .dispatcher
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take();

        let Some(dispatcher) = dispatcher else {
            return Ok(());
        };

        if self.send(Event::Shutdown).is_err() {
            debug!("Dispatcher already gone");
        }
        dispatcher.join_timeout(self.shutdown_timeout)
    }
}

impl Drop for SessionHandle {
    fn drop(&mut self) {
        if self.events.send(Event::Shutdown).is_err() {
            debug!("Dispatcher already gone");
        }
    }
}

fn run(mut controller: SessionController, inbox: &Receiver<Event>) {
    controller.render();

    while let Ok(event) = inbox.recv() {
        match event {
            Event::Toggle => controller.toggle(),
            Event::ToggleAuto => controller.toggle_auto(),
            Event::SetAutoTrigger { enabled } => controller.set_auto_trigger(enabled),
            Event::Presence { present } => controller.on_presence(present),
            Event::Elapsed { session, text } => controller.on_elapsed(session, text),
            Event::Shutdown => break,
        }
    }

    controller.shutdown();
    info!("Dispatcher stopped");
}

/// Log-only wrapper for front-end callbacks that cannot return errors.
pub fn log_send_error(result: Result<(), AppError>) {
    if let Err(e) = result {
        warn!("{e}");
    }
}
