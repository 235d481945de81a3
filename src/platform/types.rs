use crate::error::InhibitError;

/// Native "keep the machine awake" assertion.
///
/// Created on the thread that renews it: on Windows the execution state is
/// bound to the calling thread.
pub trait SleepInhibitor {
    /// Assert (or re-assert) that the system must stay awake.
    fn keep_awake(&mut self) -> Result<(), InhibitError>;

    /// Drop the assertion. Called once when the renewal loop exits.
    fn release(&mut self) {}
}

/// Read-only view of the process table.
pub trait ProcessSource: Send {
    /// Names of all running processes visible to the current user.
    /// Entries that cannot be read are skipped.
    fn process_names(&mut self) -> Vec<String>;
}

/// Factory for the OS facing pieces, so the session logic can run against
/// fakes in tests.
pub trait Platform: Send + Sync {
    fn sleep_inhibitor(&self) -> Result<Box<dyn SleepInhibitor>, InhibitError>;
    fn process_source(&self) -> Box<dyn ProcessSource>;
}
