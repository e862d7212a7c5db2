pub mod presenter;
pub mod process;

use log::debug;
use presenter::{Notification, Presenter};
use process::{MetricType, ProcessInfo, ProcessMonitor, ProcessSource, Series, SortType};
use std::time::{Duration, Instant};

pub const DEFAULT_UPDATE_INTERVAL_MS: u64 = 1000;

/// Drives sampling on a fixed cadence and owns the state of the latest tick.
///
/// Everything runs on the caller's thread: a tick captures one snapshot and
/// derives both the ordered table and the plot series from it. Sort changes,
/// manual refreshes and successful terminations tick immediately without
/// moving the next timed tick.
#[derive(Debug)]
pub struct Scheduler<S = ProcessMonitor> {
    source: S,
    sort_type: SortType,
    update_interval: Duration,
    next_tick: Option<Instant>,
    table: Vec<ProcessInfo>,
    series: Series,
    ticks: u64,
}

impl Default for Scheduler<ProcessMonitor> {
    fn default() -> Self {
        Self::new(
            ProcessMonitor::new(),
            Duration::from_millis(DEFAULT_UPDATE_INTERVAL_MS),
        )
    }
}

impl<S: ProcessSource> Scheduler<S> {
    pub fn new(source: S, update_interval: Duration) -> Self {
        Self {
            source,
            sort_type: SortType::default(),
            update_interval,
            next_tick: None,
            table: Vec::new(),
            series: Series::default(),
            ticks: 0,
        }
    }

    pub fn sort_type(&self) -> SortType {
        self.sort_type
    }

    pub fn update_interval(&self) -> Duration {
        self.update_interval
    }

    /// Takes effect when the next timed tick is armed.
    pub fn set_update_interval(&mut self, interval: Duration) {
        self.update_interval = interval;
    }

    pub fn table(&self) -> &[ProcessInfo] {
        &self.table
    }

    pub fn series(&self) -> &Series {
        &self.series
    }

    /// Number of ticks run so far, timed or not.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn should_update(&self, now: Instant) -> bool {
        self.next_tick.map_or(true, |due| now >= due)
    }

    /// Runs the timed tick if it is due. Returns whether a tick ran.
    pub fn poll(&mut self, now: Instant, presenter: &mut dyn Presenter) -> bool {
        if !self.should_update(now) {
            return false;
        }
        self.tick(presenter);
        // Re-arm from now so a stalled loop does not burst through missed ticks.
        self.next_tick = Some(now + self.update_interval);
        true
    }

    pub fn time_until_next_tick(&self, now: Instant) -> Duration {
        self.next_tick
            .map_or(Duration::ZERO, |due| due.saturating_duration_since(now))
    }

    pub fn on_sort_changed(&mut self, sort_type: SortType, presenter: &mut dyn Presenter) {
        self.sort_type = sort_type;
        self.tick(presenter);
    }

    pub fn on_refresh_requested(&mut self, presenter: &mut dyn Presenter) {
        self.tick(presenter);
    }

    /// Handles an explicit termination request typed by the operator.
    ///
    /// The outcome is always reported through `notify`; only a success
    /// triggers an immediate re-sample.
    pub fn on_terminate_requested(&mut self, pid_text: &str, presenter: &mut dyn Presenter) {
        match process::terminate(&mut self.source, pid_text) {
            Ok(pid) => {
                presenter.notify(Notification::terminated(pid));
                self.tick(presenter);
            }
            Err(err) => presenter.notify(Notification::from(&err)),
        }
    }

    pub fn on_cursor_moved(
        &self,
        metric: MetricType,
        x: f64,
        y: f64,
        presenter: &mut dyn Presenter,
    ) {
        let label = process::resolve(metric, x, y, &self.series);
        presenter.render_annotation(label.as_ref());
    }

    fn tick(&mut self, presenter: &mut dyn Presenter) {
        let snapshot = self.source.capture();
        self.table = process::order(&snapshot, self.sort_type);
        self.series = process::build(&snapshot);
        self.ticks += 1;

        debug!(
            "Tick {}: {} processes sorted by {}",
            self.ticks,
            self.table.len(),
            self.sort_type.label()
        );

        presenter.render_table(&self.table);
        presenter.render_series(&self.series);
    }
}
