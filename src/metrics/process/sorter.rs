use super::{ProcessInfo, Snapshot, SortType};

/// Orders a snapshot for the process table.
///
/// The sort is stable, so records with equal CPU or memory keep their
/// enumeration order. The snapshot itself is left untouched.
pub fn order(snapshot: &Snapshot, sort_type: SortType) -> Vec<ProcessInfo> {
    let mut processes = snapshot.records().to_vec();

    match sort_type {
        SortType::Pid => processes.sort_by_key(|p| p.pid),
        SortType::Cpu => processes.sort_by(|a, b| b.cpu_usage.total_cmp(&a.cpu_usage)),
        SortType::Memory => processes.sort_by(|a, b| b.memory_mb.total_cmp(&a.memory_mb)),
    }

    processes
}
