use super::{MetricType, Snapshot};
use sysinfo::Pid;

/// Plot data for the latest snapshot: three index-aligned sequences.
///
/// Always in enumeration order, never in table order. The table follows the
/// operator's sort choice while the plots keep PID on the x axis, so the two
/// orders are intentionally independent.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Series {
    pids: Vec<Pid>,
    cpu: Vec<f32>,
    memory: Vec<f32>,
}

/// Projects every record of `snapshot` into a [`Series`].
pub fn build(snapshot: &Snapshot) -> Series {
    let len = snapshot.len();
    let mut series = Series {
        pids: Vec::with_capacity(len),
        cpu: Vec::with_capacity(len),
        memory: Vec::with_capacity(len),
    };

    for record in snapshot.records() {
        series.pids.push(record.pid);
        series.cpu.push(record.cpu_usage);
        series.memory.push(record.memory_mb);
    }

    series
}

impl Series {
    pub fn len(&self) -> usize {
        self.pids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pids.is_empty()
    }

    pub fn pids(&self) -> &[Pid] {
        &self.pids
    }

    pub fn cpu(&self) -> &[f32] {
        &self.cpu
    }

    pub fn memory(&self) -> &[f32] {
        &self.memory
    }

    pub fn values(&self, metric: MetricType) -> &[f32] {
        match metric {
            MetricType::Cpu => &self.cpu,
            MetricType::Memory => &self.memory,
        }
    }

    /// `[pid, value]` pairs ready for a line plot.
    pub fn points(&self, metric: MetricType) -> Vec<[f64; 2]> {
        self.pids
            .iter()
            .zip(self.values(metric))
            .map(|(pid, value)| [pid.as_u32() as f64, *value as f64])
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::process::ProcessInfo;

    #[test]
    fn test_build_keeps_enumeration_order() {
        let snapshot = Snapshot::from_records(vec![
            ProcessInfo::new(5, "b", 70.0, 1.5),
            ProcessInfo::new(2, "a", 30.0, 2.5),
        ]);
        let series = build(&snapshot);

        assert_eq!(series.pids(), &[Pid::from_u32(5), Pid::from_u32(2)]);
        assert_eq!(series.cpu(), &[70.0, 30.0]);
        assert_eq!(series.memory(), &[1.5, 2.5]);
    }

    #[test]
    fn test_build_lengths_match_snapshot() {
        let snapshot = Snapshot::from_records(
            (1..=25).map(|pid| ProcessInfo::new(pid, "p", pid as f32, 1.0)),
        );
        let series = build(&snapshot);

        assert_eq!(series.len(), snapshot.len());
        assert_eq!(series.cpu().len(), snapshot.len());
        assert_eq!(series.memory().len(), snapshot.len());
    }

    #[test]
    fn test_build_empty_snapshot() {
        let series = build(&Snapshot::default());

        assert!(series.is_empty());
        assert!(series.cpu().is_empty());
        assert!(series.memory().is_empty());
        assert!(series.points(MetricType::Memory).is_empty());
    }

    #[test]
    fn test_points_pair_pid_with_metric() {
        let snapshot = Snapshot::from_records(vec![ProcessInfo::new(12, "x", 4.0, 256.0)]);
        let series = build(&snapshot);

        assert_eq!(series.points(MetricType::Cpu), vec![[12.0, 4.0]]);
        assert_eq!(series.points(MetricType::Memory), vec![[12.0, 256.0]]);
    }
}
