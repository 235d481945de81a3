// src/constants.rs

use std::time::Duration;

/// How often the sleep assertion is renewed while a session is active
pub const RENEW_INTERVAL: Duration = Duration::from_secs(60);

/// How often the elapsed runtime is refreshed
pub const REPORT_INTERVAL: Duration = Duration::from_secs(1);

/// How often the presence watcher scans the process table
pub const WATCH_POLL_INTERVAL: Duration = Duration::from_secs(10);

/// Upper bound for joining a worker thread during shutdown
pub const JOIN_TIMEOUT: Duration = Duration::from_secs(2);

/// Maximum target signature length (MAX_PATH on Windows)
pub const MAX_TARGET_LEN: usize = 260;

/// Process name that triggers auto-run
#[cfg(target_os = "windows")]
pub const DEFAULT_TARGET: &str = "Code.exe";

/// Process name that triggers auto-run
#[cfg(target_os = "macos")]
pub const DEFAULT_TARGET: &str = "Code";

/// Process name that triggers auto-run
#[cfg(not(any(target_os = "windows", target_os = "macos")))]
pub const DEFAULT_TARGET: &str = "code";

/// Whether the default target must equal the whole process name. A bare
/// "code" substring also hits codesign, Xcode and every *decoder* process.
pub const DEFAULT_TARGET_EXACT: bool = cfg!(not(target_os = "windows"));

pub const STATUS_RUNNING: &str = "Status: Running";
pub const STATUS_STOPPED: &str = "Status: Stopped";
pub const BUTTON_START: &str = "Start";
pub const BUTTON_STOP: &str = "Stop";
pub const RUNTIME_PREFIX: &str = "Runtime:";
pub const AUTO_TRIGGER_LABEL: &str = "Auto-run when VS Code is open";
