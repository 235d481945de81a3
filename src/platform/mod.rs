pub mod process;
pub mod types;

pub use process::SystemProcesses;
pub use types::{Platform, ProcessSource, SleepInhibitor};

use crate::error::InhibitError;

#[cfg(target_os = "macos")]
pub mod macos;

#[cfg(target_os = "linux")]
pub mod linux;

#[cfg(target_os = "windows")]
pub mod windows;

#[cfg(target_os = "macos")]
pub use macos::ActivityInhibitor as NativeInhibitor;

#[cfg(target_os = "linux")]
pub use linux::X11Inhibitor as NativeInhibitor;

#[cfg(target_os = "windows")]
pub use windows::ExecutionStateInhibitor as NativeInhibitor;

// No native mechanism on other platforms; sessions still run but only log.
#[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
pub struct NativeInhibitor;

#[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
impl NativeInhibitor {
    pub fn new() -> Result<Self, InhibitError> {
        Ok(Self)
    }
}

#[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
impl SleepInhibitor for NativeInhibitor {
    fn keep_awake(&mut self) -> Result<(), InhibitError> {
        Err(InhibitError::Unsupported)
    }
}

/// The real OS: native sleep assertion plus sysinfo process table.
#[derive(Debug, Default, Clone, Copy)]
pub struct NativePlatform;

impl NativePlatform {
    pub fn new() -> Self {
        Self
    }
}

impl Platform for NativePlatform {
    fn sleep_inhibitor(&self) -> Result<Box<dyn SleepInhibitor>, InhibitError> {
        Ok(Box::new(NativeInhibitor::new()?))
    }

    fn process_source(&self) -> Box<dyn ProcessSource> {
        Box::new(SystemProcesses::new())
    }
}
