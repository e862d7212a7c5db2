use crate::components::UserAction;
use crate::metrics::process::{parse_pid, ProcessInfo};

#[derive(Default)]
pub struct ProcessTable {
    pub rows: Vec<ProcessInfo>,
    pub pid_input: String,
    /// PID text waiting for the operator to confirm.
    pub pending_termination: Option<String>,
}

impl ProcessTable {
    /// Well-formed input waits for confirmation. Malformed input is passed on
    /// straight away so it can be reported.
    pub fn request_termination(&mut self) -> Option<UserAction> {
        if self.pending_termination.is_some() {
            return None;
        }
        let text = self.pid_input.trim().to_string();
        match parse_pid(&text) {
            Ok(_) => {
                self.pending_termination = Some(text);
                None
            }
            Err(_) => Some(UserAction::Terminate(text)),
        }
    }

    pub fn confirm_termination(&mut self) -> Option<UserAction> {
        self.pending_termination.take().map(UserAction::Terminate)
    }

    pub fn cancel_termination(&mut self) {
        self.pending_termination = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_input(text: &str) -> ProcessTable {
        ProcessTable {
            pid_input: text.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_valid_pid_needs_confirmation() {
        let mut table = with_input(" 1234 ");

        assert_eq!(table.request_termination(), None);
        assert_eq!(table.pending_termination.as_deref(), Some("1234"));
        assert_eq!(
            table.confirm_termination(),
            Some(UserAction::Terminate("1234".into()))
        );
        assert_eq!(table.pending_termination, None);
    }

    #[test]
    fn test_confirm_fires_once() {
        let mut table = with_input("77");
        table.request_termination();

        assert!(table.confirm_termination().is_some());
        assert_eq!(table.confirm_termination(), None);
    }

    #[test]
    fn test_repeated_request_while_pending_is_ignored() {
        let mut table = with_input("77");
        table.request_termination();
        table.pid_input = "88".into();

        assert_eq!(table.request_termination(), None);
        assert_eq!(table.pending_termination.as_deref(), Some("77"));
    }

    #[test]
    fn test_invalid_input_is_reported_without_confirmation() {
        let mut table = with_input("abc");

        assert_eq!(
            table.request_termination(),
            Some(UserAction::Terminate("abc".into()))
        );
        assert_eq!(table.pending_termination, None);
    }

    #[test]
    fn test_cancel() {
        let mut table = with_input("5");
        table.request_termination();
        table.cancel_termination();

        assert_eq!(table.confirm_termination(), None);
    }
}
