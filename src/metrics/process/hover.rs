use super::{MetricType, Series};
use sysinfo::Pid;

/// Annotation for the point under the cursor.
#[derive(Debug, Clone, PartialEq)]
pub struct HoverLabel {
    pub metric: MetricType,
    pub pid: Pid,
    pub text: String,
    /// Plot coordinate the annotation points at.
    pub anchor: [f64; 2],
}

/// Maps a cursor position on a plot back to the process under it.
///
/// `x` is rounded to the nearest PID, halfway values going to the even one.
/// That PID must be present in `series`; there is no fallback to a
/// neighbouring PID. `y` does not take part in the lookup. Returns `None`
/// for gaps, out-of-range and non-finite coordinates.
pub fn resolve(metric: MetricType, x: f64, _y: f64, series: &Series) -> Option<HoverLabel> {
    let rounded = x.round_ties_even();
    if !rounded.is_finite() || rounded < 1.0 || rounded > u32::MAX as f64 {
        return None;
    }
    let pid = Pid::from_u32(rounded as u32);

    let index = series.pids().iter().position(|p| *p == pid)?;
    let value = *series.values(metric).get(index)?;

    let text = match metric {
        MetricType::Cpu => format!("PID: {}, CPU Usage: {:.1}%", pid, value),
        MetricType::Memory => format!("PID: {}, Memory Usage: {:.2} MB", pid, value),
    };

    Some(HoverLabel {
        metric,
        pid,
        text,
        anchor: [pid.as_u32() as f64, value as f64],
    })
}
