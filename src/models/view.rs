use crate::constants::{
    BUTTON_START, BUTTON_STOP, RUNTIME_PREFIX, STATUS_RUNNING, STATUS_STOPPED,
};
use std::time::Duration;

/// Everything the presentation layer displays.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct View {
    pub status: String,
    pub elapsed: String,
    pub button: String,
    pub auto_trigger: bool,
}

impl View {
    pub fn running(runtime: String, auto_trigger: bool) -> Self {
        Self {
            status: STATUS_RUNNING.to_string(),
            elapsed: runtime,
            button: BUTTON_STOP.to_string(),
            auto_trigger,
        }
    }

    pub fn stopped(auto_trigger: bool) -> Self {
        Self {
            status: STATUS_STOPPED.to_string(),
            elapsed: runtime_text(Duration::ZERO),
            button: BUTTON_START.to_string(),
            auto_trigger,
        }
    }
}

/// Format a duration as `H:MM:SS`. Hours are not wrapped into days.
pub fn format_elapsed(elapsed: Duration) -> String {
    let total = elapsed.as_secs();
    let hours = total / 3600;
    let minutes = (total % 3600) / 60;
    let seconds = total % 60;
    format!("{hours}:{minutes:02}:{seconds:02}")
}

pub fn runtime_text(elapsed: Duration) -> String {
    format!("{RUNTIME_PREFIX} {}", format_elapsed(elapsed))
}
