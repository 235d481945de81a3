use super::SleepInhibitor;
use crate::error::InhibitError;
use objc2::rc::Retained;
use objc2::runtime::{NSObjectProtocol, ProtocolObject};
use objc2_foundation::{NSActivityOptions, NSProcessInfo, NSString};

type Activity = Retained<ProtocolObject<dyn NSObjectProtocol>>;

/// Holds an `NSProcessInfo` activity that disables idle system and display
/// sleep. Each renewal begins a fresh activity before ending the previous
/// one, so the assertion never lapses in between.
pub struct ActivityInhibitor {
    activity: Option<Activity>,
}

impl ActivityInhibitor {
    pub fn new() -> Result<Self, InhibitError> {
        Ok(Self { activity: None })
    }

    #[allow(unsafe_code, reason = "Foundation activity API")]
    fn end(activity: &Activity) {
        // SAFETY: the token came from beginActivityWithOptions_reason.
        unsafe { NSProcessInfo::processInfo().endActivity(activity) };
    }
}

impl SleepInhibitor for ActivityInhibitor {
    #[allow(unsafe_code, reason = "Foundation activity API")]
    fn keep_awake(&mut self) -> Result<(), InhibitError> {
        let options = NSActivityOptions::NSActivityUserInitiated
            | NSActivityOptions::NSActivityIdleDisplaySleepDisabled
            | NSActivityOptions::NSActivityIdleSystemSleepDisabled;
        let reason = NSString::from_str("WakeLock session");

        // SAFETY: options are documented flags; reason outlives the call.
        let activity = unsafe {
            NSProcessInfo::processInfo().beginActivityWithOptions_reason(options, &reason)
        };

        if let Some(previous) = self.activity.replace(activity) {
            Self::end(&previous);
        }
        Ok(())
    }

    fn release(&mut self) {
        if let Some(activity) = self.activity.take() {
            Self::end(&activity);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn current(inhibitor: &ActivityInhibitor) -> *const ProtocolObject<dyn NSObjectProtocol> {
        Retained::as_ptr(inhibitor.activity.as_ref().unwrap())
    }

    #[test]
    fn test_renewal_replaces_activity() {
        let mut inhibitor = ActivityInhibitor::new().unwrap();

        inhibitor.keep_awake().unwrap();
        let first = current(&inhibitor);
        inhibitor.keep_awake().unwrap();
        let second = current(&inhibitor);

        assert_ne!(first, second);

        inhibitor.release();
        assert!(inhibitor.activity.is_none());
    }
}
