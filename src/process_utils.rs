use crate::error::{LauncherError, Result};
use std::ffi::OsStr;
use sysinfo::{ProcessesToUpdate, System};

/// Anything that can answer "is a process with this name running".
pub trait ProcessTable {
    fn is_process_running(&self, proc_name: &str) -> Result<bool>;
}

/// The OS process table, read through sysinfo.
pub struct SystemProcesses;

impl ProcessTable for SystemProcesses {
    fn is_process_running(&self, proc_name: &str) -> Result<bool> {
        if !sysinfo::IS_SUPPORTED_SYSTEM {
            return Err(LauncherError::ProcessList);
        }
        let mut system = System::new();
        system.refresh_processes(ProcessesToUpdate::All, true);
        let wanted = OsStr::new(proc_name);
        Ok(system
            .processes()
            .values()
            .any(|process| process.name() == wanted))
    }
}

/// Fails with `SteamNotRunning` unless `proc_name` shows up in `table`.
pub fn require_running<T: ProcessTable + ?Sized>(table: &T, proc_name: &str) -> Result<()> {
    if table.is_process_running(proc_name)? {
        log::debug!("Found running process {proc_name}");
        Ok(())
    } else {
        Err(LauncherError::SteamNotRunning)
    }
}
