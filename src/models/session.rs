use std::fmt;
use std::time::{Duration, Instant};

/// Identifies one activation of the wake lock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SessionId(pub u64);

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// An active wake-lock session. Only exists while the lock is held, so
/// "has a start time" and "is active" cannot disagree.
#[derive(Debug, Clone)]
pub struct Session {
    pub id: SessionId,
    pub started_at: Instant,
    /// True when the presence watcher started this session
    pub auto_started: bool,
}

impl Session {
    pub fn new(id: SessionId, auto_started: bool) -> Self {
        Self {
            id,
            started_at: Instant::now(),
            auto_started,
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.started_at.elapsed()
    }
}

/// Snapshot of the controller's externally visible state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionState {
    pub active: bool,
    pub start_time: Option<Instant>,
    pub auto_trigger_enabled: bool,
}

impl SessionState {
    pub fn from_session(session: Option<&Session>, auto_trigger_enabled: bool) -> Self {
        Self {
            active: session.is_some(),
            start_time: session.map(|s| s.started_at),
            auto_trigger_enabled,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_starts_now() {
        let before = Instant::now();
        let session = Session::new(SessionId(1), false);

        assert!(session.started_at >= before);
        assert!(session.elapsed() < Duration::from_secs(5));
        assert!(!session.auto_started);
    }

    #[test]
    fn test_state_from_session() {
        let session = Session::new(SessionId(3), true);

        let state = SessionState::from_session(Some(&session), true);
        assert!(state.active);
        assert_eq!(state.start_time, Some(session.started_at));
        assert!(state.auto_trigger_enabled);

        let state = SessionState::from_session(None, false);
        assert!(!state.active);
        assert!(state.start_time.is_none());
    }

    #[test]
    fn test_session_id_display() {
        assert_eq!(SessionId(42).to_string(), "#42");
    }
}
