use crate::error::AppError;
use crate::platform::{Platform, SleepInhibitor};
use crate::worker::{StopToken, Worker};
use log::{debug, warn};
use std::sync::Arc;
use std::time::Duration;

/// Spawn the renewal loop for one session.
pub fn spawn(platform: Arc<dyn Platform>, renew_interval: Duration) -> Result<Worker, AppError> {
    Worker::spawn("inhibitor", move |stop| {
        run(platform.as_ref(), &stop, renew_interval);
    })
}

/// Assert "stay awake" now and again every `renew_interval` until stopped,
/// then release. Failures are logged and retried on the next renewal.
pub fn run(platform: &dyn Platform, stop: &StopToken, renew_interval: Duration) {
    let mut inhibitor: Option<Box<dyn SleepInhibitor>> = None;

    while !stop.is_stopped() {
        if inhibitor.is_none() {
            match platform.sleep_inhibitor() {
                Ok(created) => inhibitor = Some(created),
                Err(e) => warn!("Could not create sleep inhibitor: {e}"),
            }
        }

        if let Some(active) = inhibitor.as_mut() {
            match active.keep_awake() {
                Ok(()) => debug!("Sleep inhibition asserted"),
                Err(e) => warn!("Failed to assert sleep inhibition: {e}"),
            }
        }

        if stop.wait(renew_interval) {
            break;
        }
    }

    if let Some(mut active) = inhibitor {
        active.release();
        debug!("Sleep inhibition released");
    }
}
