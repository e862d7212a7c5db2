use super::process::{HoverLabel, ProcessInfo, Series, TerminateError};
use sysinfo::Pid;

/// Result of an operator request, as shown to the operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Success,
    NotFound,
    AccessDenied,
    InvalidInput,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub outcome: Outcome,
    pub message: String,
}

impl Notification {
    pub fn terminated(pid: Pid) -> Self {
        Self {
            outcome: Outcome::Success,
            message: format!("Process {} terminated.", pid),
        }
    }

    pub fn is_error(&self) -> bool {
        self.outcome != Outcome::Success
    }
}

impl From<&TerminateError> for Notification {
    fn from(err: &TerminateError) -> Self {
        let outcome = match err {
            TerminateError::InvalidInput(_) => Outcome::InvalidInput,
            TerminateError::NotFound(_) => Outcome::NotFound,
            TerminateError::AccessDenied(_) => Outcome::AccessDenied,
        };
        Self {
            outcome,
            message: err.to_string(),
        }
    }
}

/// Everything the core publishes. The implementor decides how to redraw.
pub trait Presenter {
    fn render_table(&mut self, processes: &[ProcessInfo]);
    fn render_series(&mut self, series: &Series);
    fn render_annotation(&mut self, label: Option<&HoverLabel>);
    fn notify(&mut self, notification: Notification);
}
