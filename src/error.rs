use thiserror::Error;

/// Application error type
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Invalid {field}: {reason}")]
    InvalidInput { field: &'static str, reason: String },

    #[error("Could not start {worker} thread: {source}")]
    Spawn {
        worker: &'static str,
        #[source]
        source: std::io::Error,
    },

    #[error("{worker} thread did not stop within {timeout_ms} ms")]
    JoinTimeout { worker: &'static str, timeout_ms: u128 },

    #[error("{worker} thread panicked")]
    WorkerPanicked { worker: &'static str },

    #[error("Session dispatcher is no longer running")]
    DispatcherGone,

    #[cfg(feature = "tray")]
    #[error("Tray error: {0}")]
    Tray(#[from] tauri::Error),
}

/// Failures of the platform sleep assertion.
///
/// These are logged and never reach the user: the worst outcome is that the
/// machine is allowed to sleep.
#[derive(Debug, Error)]
pub enum InhibitError {
    #[error("Sleep inhibition is not supported on this platform")]
    Unsupported,

    #[error("Power manager unavailable: {0}")]
    Unavailable(String),

    #[error("Power manager rejected the request: {0}")]
    Rejected(String),
}
