mod hover;
mod monitor;
mod series;
mod sorter;
mod terminator;

pub use hover::*;
pub use monitor::*;
pub use series::*;
pub use sorter::*;
pub use terminator::*;

use std::collections::HashSet;
use sysinfo::Pid;

/// One process as seen during a single sampling cycle.
#[derive(Debug, Clone, PartialEq)]
pub struct ProcessInfo {
    pub pid: Pid,
    pub name: String,
    pub cpu_usage: f32,
    pub memory_mb: f32,
}

impl ProcessInfo {
    pub fn new(pid: u32, name: impl Into<String>, cpu_usage: f32, memory_mb: f32) -> Self {
        Self {
            pid: Pid::from_u32(pid),
            name: name.into(),
            cpu_usage,
            memory_mb,
        }
    }
}

/// All processes captured at one instant, in enumeration order.
///
/// A PID appears at most once. A snapshot is rebuilt every cycle and never
/// compared against the previous one.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Snapshot {
    records: Vec<ProcessInfo>,
}

impl Snapshot {
    /// Builds a snapshot, keeping the first record seen for a repeated PID.
    /// PID 0 is not a real process and is dropped.
    pub fn from_records(records: impl IntoIterator<Item = ProcessInfo>) -> Self {
        let mut seen = HashSet::new();
        let records = records
            .into_iter()
            .filter(|record| record.pid.as_u32() > 0 && seen.insert(record.pid))
            .collect();
        Self { records }
    }

    pub fn records(&self) -> &[ProcessInfo] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Ordering of the process table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortType {
    /// Ascending PID.
    Pid,
    /// Descending CPU usage.
    Cpu,
    /// Descending resident memory.
    Memory,
}

impl SortType {
    pub const ALL: [SortType; 3] = [SortType::Pid, SortType::Cpu, SortType::Memory];

    pub fn label(self) -> &'static str {
        match self {
            SortType::Pid => "PID",
            SortType::Cpu => "CPU",
            SortType::Memory => "Memory",
        }
    }
}

impl Default for SortType {
    fn default() -> Self {
        Self::Pid
    }
}

/// Which plot a value belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MetricType {
    Cpu,
    Memory,
}
