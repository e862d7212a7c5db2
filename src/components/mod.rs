mod dashboard;
mod process_table;
mod settings;
mod usage_plots;

pub use dashboard::*;
pub use process_table::*;
pub use settings::*;
pub use usage_plots::*;

use crate::metrics::process::{MetricType, SortType};

/// Operator input collected while drawing a frame, handled after drawing.
#[derive(Debug, Clone, PartialEq)]
pub enum UserAction {
    SortChanged(SortType),
    Refresh,
    Terminate(String),
    CursorMoved(MetricType, f64, f64),
    CursorLeft,
}
