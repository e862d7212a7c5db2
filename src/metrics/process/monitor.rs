use super::{ProcessInfo, Snapshot, TerminateError};
use log::{debug, info, warn};
use sysinfo::{Pid, Process, ProcessesToUpdate, Signal, System};

const BYTES_PER_MB: f32 = 1024.0 * 1024.0;

/// Where snapshots come from and where termination requests go.
pub trait ProcessSource {
    /// Enumerates every process that can currently be inspected.
    fn capture(&mut self) -> Snapshot;

    /// Sends a graceful termination request to `pid`.
    fn terminate(&mut self, pid: Pid) -> Result<(), TerminateError>;
}

/// Monitors system processes through `sysinfo`.
///
/// The `System` is kept between captures so CPU usage is measured against the
/// previous refresh.
#[derive(Debug)]
pub struct ProcessMonitor {
    system: System,
}

impl Default for ProcessMonitor {
    fn default() -> Self {
        Self::new()
    }
}

impl ProcessMonitor {
    pub fn new() -> Self {
        Self {
            system: System::new(),
        }
    }

    pub fn collect_process_info(process: &Process) -> Option<ProcessInfo> {
        // Linux lists tasks next to processes; they share the parent's memory.
        if process.thread_kind().is_some() {
            return None;
        }
        Some(ProcessInfo {
            pid: process.pid(),
            name: process.name().to_string_lossy().into_owned(),
            cpu_usage: process.cpu_usage(),
            memory_mb: process.memory() as f32 / BYTES_PER_MB,
        })
    }

    fn refresh_one(&mut self, pid: Pid) -> bool {
        self.system.refresh_processes(ProcessesToUpdate::Some(&[pid]), true);
        self.system.process(pid).is_some()
    }
}

impl ProcessSource for ProcessMonitor {
    fn capture(&mut self) -> Snapshot {
        self.system.refresh_processes(ProcessesToUpdate::All, true);

        let mut records: Vec<_> = self
            .system
            .processes()
            .values()
            .filter_map(Self::collect_process_info)
            .collect();
        records.sort_by_key(|record| record.pid);

        debug!("Captured {} processes", records.len());
        Snapshot::from_records(records)
    }

    fn terminate(&mut self, pid: Pid) -> Result<(), TerminateError> {
        if !self.refresh_one(pid) {
            return Err(TerminateError::NotFound(pid));
        }

        let sent = self
            .system
            .process(pid)
            .map(|process| process.kill_with(Signal::Term));

        match sent {
            Some(Some(true)) => {
                info!("Sent SIGTERM to process {}", pid);
                Ok(())
            }
            Some(Some(false)) => {
                // Either the process exited under us or we may not signal it.
                if self.refresh_one(pid) {
                    warn!("Not allowed to terminate process {}", pid);
                    Err(TerminateError::AccessDenied(pid))
                } else {
                    Err(TerminateError::NotFound(pid))
                }
            }
            Some(None) => {
                warn!("Graceful termination is not supported on this platform");
                Err(TerminateError::AccessDenied(pid))
            }
            None => Err(TerminateError::NotFound(pid)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capture_lists_current_process() {
        let mut monitor = ProcessMonitor::new();
        let snapshot = monitor.capture();
        let own_pid = Pid::from_u32(std::process::id());

        assert!(!snapshot.is_empty());
        assert!(snapshot.records().iter().any(|record| record.pid == own_pid));
    }

    #[test]
    fn test_capture_is_in_pid_order() {
        let mut monitor = ProcessMonitor::new();
        let snapshot = monitor.capture();

        assert!(snapshot
            .records()
            .windows(2)
            .all(|pair| pair[0].pid < pair[1].pid));
    }

    #[test]
    fn test_capture_values_are_non_negative() {
        let mut monitor = ProcessMonitor::new();
        monitor.capture();
        let snapshot = monitor.capture();

        for record in snapshot.records() {
            assert!(record.cpu_usage >= 0.0);
            assert!(record.memory_mb >= 0.0);
        }
    }

    #[test]
    fn test_terminate_missing_process() {
        let mut monitor = ProcessMonitor::new();
        let pid = Pid::from_u32(u32::MAX - 1);

        assert_eq!(monitor.terminate(pid), Err(TerminateError::NotFound(pid)));
    }

    #[cfg(unix)]
    #[test]
    fn test_terminate_sends_sigterm() -> std::io::Result<()> {
        use std::os::unix::process::ExitStatusExt;

        let mut child = std::process::Command::new("sleep").arg("30").spawn()?;
        let mut monitor = ProcessMonitor::new();

        let result = monitor.terminate(Pid::from_u32(child.id()));
        let status = child.wait()?;

        assert_eq!(result, Ok(()));
        assert_eq!(status.signal(), Some(15));
        Ok(())
    }
}
