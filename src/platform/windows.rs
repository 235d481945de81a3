use super::SleepInhibitor;
use crate::error::InhibitError;
use windows::Win32::System::Power::{
    SetThreadExecutionState, ES_AWAYMODE_REQUIRED, ES_CONTINUOUS, ES_SYSTEM_REQUIRED,
};

/// `SetThreadExecutionState` with away-mode. The state belongs to the calling
/// thread and is cleared when that thread exits.
pub struct ExecutionStateInhibitor;

impl ExecutionStateInhibitor {
    pub fn new() -> Result<Self, InhibitError> {
        Ok(Self)
    }
}

impl SleepInhibitor for ExecutionStateInhibitor {
    #[allow(unsafe_code, reason = "documented Win32 call with constant flags")]
    fn keep_awake(&mut self) -> Result<(), InhibitError> {
        // SAFETY: no pointers involved; flags are valid EXECUTION_STATE bits.
        let previous = unsafe {
            SetThreadExecutionState(ES_CONTINUOUS | ES_SYSTEM_REQUIRED | ES_AWAYMODE_REQUIRED)
        };

        if previous.0 == 0 {
            return Err(InhibitError::Rejected(
                "SetThreadExecutionState returned NULL".into(),
            ));
        }
        Ok(())
    }

    #[allow(unsafe_code, reason = "documented Win32 call with constant flags")]
    fn release(&mut self) {
        // SAFETY: as above; ES_CONTINUOUS alone clears the thread's request.
        let _ = unsafe { SetThreadExecutionState(ES_CONTINUOUS) };
    }
}
