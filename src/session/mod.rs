use crate::constants::{JOIN_TIMEOUT, RENEW_INTERVAL, REPORT_INTERVAL};
use crate::dispatch::Event;
use crate::models::view::runtime_text;
use crate::models::{format_elapsed, Session, SessionId, SessionState, View};
use crate::platform::Platform;
use crate::watcher::{self, presence_transition, Transition, WatcherConfig};
use crate::worker::Worker;
use crate::{inhibitor, reporter};
use log::{debug, error, info, warn};
use std::sync::mpsc::Sender;
use std::sync::Arc;
use std::time::Duration;

/// Receives every view change. Called only from the dispatch thread.
pub trait Presenter: Send {
    fn render(&mut self, view: &View);
}

#[derive(Debug, Clone)]
pub struct SessionConfig {
    pub renew_interval: Duration,
    pub report_interval: Duration,
    pub join_timeout: Duration,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            renew_interval: RENEW_INTERVAL,
            report_interval: REPORT_INTERVAL,
            join_timeout: JOIN_TIMEOUT,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Config {
    pub session: SessionConfig,
    pub watcher: WatcherConfig,
}

struct ActiveSession {
    session: Session,
    runtime: Option<String>,
    inhibitor: Worker,
    reporter: Worker,
}

/// Owns the wake-lock state. Single writer: lives on the dispatch thread and
/// is only reached through [`crate::dispatch::SessionHandle`] messages.
pub struct SessionController {
    config: Config,
    platform: Arc<dyn Platform>,
    events: Sender<Event>,
    presenter: Box<dyn Presenter>,
    active: Option<ActiveSession>,
    watcher: Option<Worker>,
    next_id: u64,
}

impl SessionController {
    pub fn new(
        config: Config,
        platform: Arc<dyn Platform>,
        events: Sender<Event>,
        presenter: Box<dyn Presenter>,
    ) -> Self {
        Self {
            config,
            platform,
            events,
            presenter,
            active: None,
            watcher: None,
            next_id: 1,
        }
    }

    pub fn state(&self) -> SessionState {
        SessionState::from_session(
            self.active.as_ref().map(|a| &a.session),
            self.auto_trigger_enabled(),
        )
    }

    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    pub fn auto_trigger_enabled(&self) -> bool {
        self.watcher.is_some()
    }

    pub fn current_session(&self) -> Option<SessionId> {
        self.active.as_ref().map(|a| a.session.id)
    }

    pub fn view(&self) -> View {
        let auto = self.auto_trigger_enabled();
        match &self.active {
            Some(active) => {
                let runtime = active
                    .runtime
                    .clone()
                    .unwrap_or_else(|| runtime_text(active.session.elapsed()));
                View::running(runtime, auto)
            }
            None => View::stopped(auto),
        }
    }

    pub fn render(&mut self) {
        let view = self.view();
        self.presenter.render(&view);
    }

    /// Flip between running and stopped.
    pub fn toggle(&mut self) {
        if self.is_active() {
            self.deactivate();
        } else {
            self.activate(false);
        }
    }

    fn activate(&mut self, auto_started: bool) {
        let session = Session::new(SessionId(self.next_id), auto_started);
        self.next_id += 1;

        let inhibitor = match inhibitor::spawn(
            Arc::clone(&self.platform),
            self.config.session.renew_interval,
        ) {
            Ok(worker) => worker,
            Err(e) => {
                error!("Failed to start session {}: {e}", session.id);
                return;
            }
        };

        let reporter = match reporter::spawn(
            session.id,
            session.started_at,
            self.events.clone(),
            self.config.session.report_interval,
        ) {
            Ok(worker) => worker,
            Err(e) => {
                error!("Failed to start session {}: {e}", session.id);
                if let Err(e) = inhibitor.stop(self.config.session.join_timeout) {
                    warn!("{e}");
                }
                return;
            }
        };

        info!(
            "Session {} started{}",
            session.id,
            if auto_started { " automatically" } else { "" }
        );
        self.active = Some(ActiveSession {
            session,
            runtime: None,
            inhibitor,
            reporter,
        });
        self.render();
    }

    /// Stop both workers and wait for them (bounded) before reporting
    /// "stopped", so no inhibitor call can follow.
    fn deactivate(&mut self) {
        let Some(active) = self.active.take() else {
            return;
        };

        active.inhibitor.request_stop();
        active.reporter.request_stop();
        let timeout = self.config.session.join_timeout;
        for worker in [active.inhibitor, active.reporter] {
            if let Err(e) = worker.join_timeout(timeout) {
                warn!("{e}");
            }
        }

        info!(
            "Session {} stopped after {}",
            active.session.id,
            format_elapsed(active.session.elapsed())
        );
        self.render();
    }

    pub fn toggle_auto(&mut self) {
        let enable = !self.auto_trigger_enabled();
        self.set_auto_trigger(enable);
    }

    /// Start or stop the presence watcher. Disabling never stops a running
    /// session.
    pub fn set_auto_trigger(&mut self, enabled: bool) {
        if enabled == self.auto_trigger_enabled() {
            return;
        }

        if enabled {
            match watcher::spawn(
                self.platform.process_source(),
                self.config.watcher.clone(),
                self.events.clone(),
            ) {
                Ok(worker) => {
                    info!("Auto-run enabled for {}", self.config.watcher.target);
                    self.watcher = Some(worker);
                }
                Err(e) => error!("Failed to enable auto-run: {e}"),
            }
        } else if let Some(worker) = self.watcher.take() {
            if let Err(e) = worker.stop(self.config.session.join_timeout) {
                warn!("{e}");
            }
            info!("Auto-run disabled");
        }

        self.render();
    }

    /// Apply a watcher observation.
    pub fn on_presence(&mut self, present: bool) {
        if !self.auto_trigger_enabled() {
            debug!("Ignoring presence report, auto-run is off");
            return;
        }

        match presence_transition(present, self.is_active()) {
            Some(Transition::Activate) => {
                info!("{} detected, auto-starting", self.config.watcher.target);
                self.activate(true);
            }
            Some(Transition::Deactivate) => {
                info!("{} closed, auto-stopping", self.config.watcher.target);
                self.deactivate();
            }
            None => {}
        }
    }

    /// Apply a reporter tick. Ticks from an earlier session are dropped.
    pub fn on_elapsed(&mut self, session: SessionId, runtime: String) {
        match self.active.as_mut() {
            Some(active) if active.session.id == session => {
                active.runtime = Some(runtime);
                self.render();
            }
            Some(_) | None => debug!("Dropping stale runtime tick from session {session}"),
        }
    }

    /// Stop the watcher and any running session, each join bounded.
    pub fn shutdown(&mut self) {
        if let Some(worker) = self.watcher.take() {
            if let Err(e) = worker.stop(self.config.session.join_timeout) {
                warn!("{e}");
            }
        }
        self.deactivate();
    }
}
