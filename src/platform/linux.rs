use super::SleepInhibitor;
use crate::error::InhibitError;
use x11rb::connection::Connection;
use x11rb::protocol::xproto::{ConnectionExt, ScreenSaver};
use x11rb::rust_connection::RustConnection;

/// Keeps an X11 session awake by resetting the server's idle timer, the
/// same thing real input does. Needs renewing before the idle timeout.
pub struct X11Inhibitor {
    conn: RustConnection,
}

impl X11Inhibitor {
    pub fn new() -> Result<Self, InhibitError> {
        let (conn, _screen_num) =
            x11rb::connect(None).map_err(|e| InhibitError::Unavailable(e.to_string()))?;
        Ok(Self { conn })
    }
}

impl SleepInhibitor for X11Inhibitor {
    fn keep_awake(&mut self) -> Result<(), InhibitError> {
        self.conn
            .force_screen_saver(ScreenSaver::RESET)
            .map_err(|e| InhibitError::Unavailable(e.to_string()))?
            .check()
            .map_err(|e| InhibitError::Rejected(e.to_string()))?;
        self.conn
            .flush()
            .map_err(|e| InhibitError::Unavailable(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[ignore] // Requires X11 display
    fn test_keep_awake() {
        let mut inhibitor = X11Inhibitor::new().unwrap();
        inhibitor.keep_awake().unwrap();
        inhibitor.keep_awake().unwrap();
    }
}
