use crate::components::{ProcessTable, UsagePlots};
use crate::metrics::presenter::{Notification, Presenter};
use crate::metrics::process::{HoverLabel, ProcessInfo, Series};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Processes,
    Graphs,
}

/// View state the UI draws from. Filled in by the scheduler between frames.
#[derive(Default)]
pub struct Dashboard {
    pub tab: Tab,
    pub table: ProcessTable,
    pub plots: UsagePlots,
    pub notification: Option<Notification>,
}

impl Presenter for Dashboard {
    fn render_table(&mut self, processes: &[ProcessInfo]) {
        self.table.rows.clear();
        self.table.rows.extend_from_slice(processes);
    }

    fn render_series(&mut self, series: &Series) {
        self.plots.series = series.clone();
    }

    fn render_annotation(&mut self, label: Option<&HoverLabel>) {
        self.plots.annotation = label.cloned();
    }

    fn notify(&mut self, notification: Notification) {
        self.notification = Some(notification);
    }
}
