use crate::components::{show_settings_window, Dashboard, Settings, UserAction};
use crate::metrics::presenter::Presenter;
use crate::metrics::Scheduler;
use std::time::Instant;

/// We derive Deserialize/Serialize so we can persist app state on shutdown.
#[derive(serde::Deserialize, serde::Serialize)]
#[serde(default)] // if we add new fields, give them default values when deserializing old state
pub struct TaskManagerApp {
    #[serde(skip)]
    scheduler: Scheduler,
    #[serde(skip)]
    dashboard: Dashboard,
    settings: Settings,
}

impl Default for TaskManagerApp {
    fn default() -> Self {
        Self {
            scheduler: Scheduler::default(),
            dashboard: Dashboard::default(),
            settings: Settings::default(),
        }
    }
}

impl TaskManagerApp {
    /// Called once before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        // Load previous app state (if any).
        // Note that you must enable the `persistence` feature for this to work.
        if let Some(storage) = cc.storage {
            return eframe::get_value(storage, eframe::APP_KEY).unwrap_or_default();
        }

        Default::default()
    }

    /// Handles the frame's actions. Returns whether the view changed and needs
    /// another frame to show it.
    fn dispatch_all(&mut self, actions: Vec<UserAction>) -> bool {
        let annotation_before = self.dashboard.plots.annotation.clone();
        let resampled = actions.iter().any(|action| {
            !matches!(
                action,
                UserAction::CursorMoved(..) | UserAction::CursorLeft
            )
        });

        for action in actions {
            self.dispatch(action);
        }

        resampled || self.dashboard.plots.annotation != annotation_before
    }

    fn dispatch(&mut self, action: UserAction) {
        let dashboard = &mut self.dashboard;
        match action {
            UserAction::SortChanged(sort_type) => {
                self.scheduler.on_sort_changed(sort_type, dashboard)
            }
            UserAction::Refresh => self.scheduler.on_refresh_requested(dashboard),
            UserAction::Terminate(pid_text) => {
                self.scheduler.on_terminate_requested(&pid_text, dashboard)
            }
            UserAction::CursorMoved(metric, x, y) => {
                self.scheduler.on_cursor_moved(metric, x, y, dashboard)
            }
            UserAction::CursorLeft => dashboard.render_annotation(None),
        }
    }
}

impl eframe::App for TaskManagerApp {
    /// Called by the frame work to save state before shutdown.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, eframe::APP_KEY, self);
    }

    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.settings.apply(ctx);
        self.scheduler.set_update_interval(self.settings.update_interval());
        self.scheduler.poll(Instant::now(), &mut self.dashboard);

        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("File", |ui| {
                    if ui.button("Quit").clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });

                ui.add_space(16.0);
                egui::widgets::global_theme_preference_buttons(ui);

                ui.add_space(16.0);
                if ui.button("⚙").clicked() {
                    self.settings.show();
                }

                ui.add_space(16.0);
                self.dashboard.show_tabs(ui);
            });
        });

        show_settings_window(ctx, &mut self.settings);

        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.label(format!(
                "{} processes, refreshed every {} ms",
                self.dashboard.table.rows.len(),
                self.scheduler.update_interval().as_millis()
            ));
        });

        let mut actions = Vec::new();
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Task Manager");
            self.dashboard.show(ui, self.scheduler.sort_type(), &mut actions);
        });

        if self.dispatch_all(actions) {
            ctx.request_repaint();
        }

        ctx.request_repaint_after(self.scheduler.time_until_next_tick(Instant::now()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::process::{MetricType, SortType};

    #[test]
    fn test_resample_requests_a_new_frame() {
        let mut app = TaskManagerApp::default();

        assert!(app.dispatch_all(vec![UserAction::Refresh]));
        assert!(app.dispatch_all(vec![UserAction::SortChanged(SortType::Memory)]));
        assert!(app.dispatch_all(vec![UserAction::Terminate("abc".into())]));
    }

    #[test]
    fn test_idle_cursor_does_not_request_frames() {
        let mut app = TaskManagerApp::default();

        assert!(!app.dispatch_all(Vec::new()));
        assert!(!app.dispatch_all(vec![UserAction::CursorLeft]));
        assert!(!app.dispatch_all(vec![UserAction::CursorMoved(MetricType::Cpu, -3.0, 0.0)]));
    }

    #[test]
    fn test_new_annotation_requests_a_frame() {
        let mut app = TaskManagerApp::default();
        app.dispatch_all(vec![UserAction::Refresh]);
        let own_pid = std::process::id() as f64;

        let hover = UserAction::CursorMoved(MetricType::Cpu, own_pid, 0.0);

        assert!(app.dispatch_all(vec![hover.clone()]));
        assert!(!app.dispatch_all(vec![hover]));
        assert!(app.dispatch_all(vec![UserAction::CursorLeft]));
    }
}
