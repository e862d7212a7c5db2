use super::ProcessSource;
use log::{info, warn};
use sysinfo::Pid;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TerminateError {
    #[error("'{0}' is not a valid PID")]
    InvalidInput(String),
    #[error("Process {0} not found")]
    NotFound(Pid),
    #[error("Access denied while terminating process {0}")]
    AccessDenied(Pid),
}

/// Parses operator input into a PID. Zero and negative values are rejected.
pub fn parse_pid(text: &str) -> Result<Pid, TerminateError> {
    let trimmed = text.trim();
    match trimmed.parse::<u32>() {
        Ok(pid) if pid > 0 => Ok(Pid::from_u32(pid)),
        _ => Err(TerminateError::InvalidInput(trimmed.to_string())),
    }
}

/// Validates `text` and asks `source` to terminate the process it names.
///
/// Malformed input never reaches the source.
pub fn terminate<S: ProcessSource + ?Sized>(
    source: &mut S,
    text: &str,
) -> Result<Pid, TerminateError> {
    let pid = parse_pid(text)?;
    info!("Termination requested for process {}", pid);

    match source.terminate(pid) {
        Ok(()) => Ok(pid),
        Err(err) => {
            warn!("{}", err);
            Err(err)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::process::Snapshot;

    #[derive(Default)]
    struct CountingSource {
        calls: Vec<Pid>,
        result: Option<TerminateError>,
    }

    impl ProcessSource for CountingSource {
        fn capture(&mut self) -> Snapshot {
            Snapshot::default()
        }

        fn terminate(&mut self, pid: Pid) -> Result<(), TerminateError> {
            self.calls.push(pid);
            match self.result.clone() {
                Some(err) => Err(err),
                None => Ok(()),
            }
        }
    }

    #[test]
    fn test_parse_pid() {
        assert_eq!(parse_pid("42"), Ok(Pid::from_u32(42)));
        assert_eq!(parse_pid("  42 \n"), Ok(Pid::from_u32(42)));
    }

    #[test]
    fn test_parse_pid_rejects_bad_input() {
        for text in ["", "abc", "0", "-5", "4.2", "99999999999"] {
            assert!(
                matches!(parse_pid(text), Err(TerminateError::InvalidInput(_))),
                "{text:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_invalid_input_does_not_reach_source() {
        let mut source = CountingSource::default();
        let result = terminate(&mut source, "twelve");

        assert_eq!(result, Err(TerminateError::InvalidInput("twelve".into())));
        assert!(source.calls.is_empty());
    }

    #[test]
    fn test_terminate_forwards_pid() {
        let mut source = CountingSource::default();

        assert_eq!(terminate(&mut source, "123"), Ok(Pid::from_u32(123)));
        assert_eq!(source.calls, vec![Pid::from_u32(123)]);
    }

    #[test]
    fn test_terminate_reports_source_failure() {
        let pid = Pid::from_u32(99999);
        let mut source = CountingSource {
            result: Some(TerminateError::NotFound(pid)),
            ..Default::default()
        };

        assert_eq!(
            terminate(&mut source, "99999"),
            Err(TerminateError::NotFound(pid))
        );
    }
}
