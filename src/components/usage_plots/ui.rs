use super::state::UsagePlots;
use crate::components::UserAction;
use crate::metrics::process::MetricType;
use egui_plot::{Legend, Line, Plot, PlotPoint, PlotPoints, Points, Text};

impl UsagePlots {
    pub fn show(&self, ui: &mut egui::Ui, actions: &mut Vec<UserAction>) {
        if self.series.is_empty() {
            ui.label("No processes visible");
        }

        let height = (ui.available_height() / 2.0 - 8.0).max(120.0);
        let cpu_pointer = self.usage_plot(ui, MetricType::Cpu, height);
        ui.add_space(8.0);
        let memory_pointer = self.usage_plot(ui, MetricType::Memory, height);

        match (cpu_pointer, memory_pointer) {
            (Some(point), _) => {
                actions.push(UserAction::CursorMoved(MetricType::Cpu, point.x, point.y))
            }
            (None, Some(point)) => {
                actions.push(UserAction::CursorMoved(MetricType::Memory, point.x, point.y))
            }
            (None, None) if self.annotation.is_some() => actions.push(UserAction::CursorLeft),
            (None, None) => {}
        }
    }

    /// Draws one metric against PID and returns the hovered plot coordinate.
    fn usage_plot(
        &self,
        ui: &mut egui::Ui,
        metric: MetricType,
        height: f32,
    ) -> Option<PlotPoint> {
        let (id, title, y_label, color) = match metric {
            MetricType::Cpu => ("cpu_plot", "CPU Usage", "CPU %", egui::Color32::LIGHT_BLUE),
            MetricType::Memory => (
                "memory_plot",
                "Memory Usage",
                "Memory (MB)",
                egui::Color32::LIGHT_RED,
            ),
        };
        let points = self.series.points(metric);

        ui.label(title);
        let plot = Plot::new(id)
            .height(height)
            .legend(Legend::default())
            .x_axis_label("PID")
            .y_axis_label(y_label)
            .include_y(0.0)
            .show_x(false)
            .show_y(false)
            .allow_drag(false)
            .allow_zoom(false)
            .allow_scroll(false)
            .allow_boxed_zoom(false)
            .allow_double_click_reset(false);

        plot.show(ui, |plot_ui| {
            plot_ui.line(
                Line::new(PlotPoints::from(points.clone()))
                    .color(color)
                    .name(title),
            );
            plot_ui.points(Points::new(PlotPoints::from(points)).color(color).radius(2.0));

            if let Some(label) = self.annotation_for(metric) {
                let [x, y] = label.anchor;
                plot_ui.points(Points::new(vec![label.anchor]).color(color).radius(5.0));
                plot_ui.text(
                    Text::new(PlotPoint::new(x, y), label.text.clone())
                        .anchor(egui::Align2::LEFT_BOTTOM),
                );
            }

            plot_ui.pointer_coordinate()
        })
        .inner
    }
}
