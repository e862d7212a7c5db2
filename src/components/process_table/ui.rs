use super::state::ProcessTable;
use crate::components::UserAction;
use crate::metrics::process::SortType;

impl ProcessTable {
    pub fn show(&mut self, ui: &mut egui::Ui, sort_type: SortType, actions: &mut Vec<UserAction>) {
        ui.horizontal(|ui| {
            ui.label("Sort by:");
            let mut selected = sort_type;
            for option in SortType::ALL {
                if ui.radio_value(&mut selected, option, option.label()).clicked() {
                    actions.push(UserAction::SortChanged(option));
                }
            }

            ui.add_space(16.0);
            if ui.button("Refresh").clicked() {
                actions.push(UserAction::Refresh);
            }
        });

        ui.horizontal(|ui| {
            ui.label("PID to terminate:");
            let response = ui.add(
                egui::TextEdit::singleline(&mut self.pid_input)
                    .hint_text("PID")
                    .desired_width(120.0),
            );
            let submitted =
                response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));

            let button = ui.add_enabled(
                self.pending_termination.is_none(),
                egui::Button::new("Terminate"),
            );
            if button.clicked() || submitted {
                actions.extend(self.request_termination());
            }
        });

        self.show_confirmation(ui.ctx(), actions);

        ui.separator();
        ui.monospace(format!(
            "{:<10} {:<30} {:<10} {:<10}",
            "PID", "Name", "CPU%", "Memory(MB)"
        ));

        let row_height = ui.text_style_height(&egui::TextStyle::Monospace);
        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show_rows(ui, row_height, self.rows.len(), |ui, range| {
                for process in &self.rows[range] {
                    let row = format!(
                        "{:<10} {:<30} {:<10.1} {:<10.2}",
                        process.pid.as_u32(),
                        process.name,
                        process.cpu_usage,
                        process.memory_mb
                    );
                    let label = egui::Label::new(egui::RichText::new(row).monospace())
                        .sense(egui::Sense::click());
                    if ui.add(label).on_hover_text("Click to select").clicked() {
                        self.pid_input = process.pid.as_u32().to_string();
                    }
                }
            });
    }

    fn show_confirmation(&mut self, ctx: &egui::Context, actions: &mut Vec<UserAction>) {
        let Some(pid) = self.pending_termination.clone() else {
            return;
        };

        egui::Window::new("Confirm termination")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
            .show(ctx, |ui| {
                ui.label(format!("Send a termination request to process {}?", pid));
                ui.horizontal(|ui| {
                    if ui.button("Terminate").clicked() {
                        actions.extend(self.confirm_termination());
                    }
                    if ui.button("Cancel").clicked() {
                        self.cancel_termination();
                    }
                });
            });
    }
}
