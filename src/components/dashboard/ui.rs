use super::state::{Dashboard, Tab};
use crate::components::UserAction;
use crate::metrics::process::SortType;

impl Dashboard {
    pub fn show_tabs(&mut self, ui: &mut egui::Ui) {
        ui.selectable_value(&mut self.tab, Tab::Processes, "Processes");
        ui.selectable_value(&mut self.tab, Tab::Graphs, "Graphs");
    }

    pub fn show(&mut self, ui: &mut egui::Ui, sort_type: SortType, actions: &mut Vec<UserAction>) {
        self.show_notification(ui);

        match self.tab {
            Tab::Processes => self.table.show(ui, sort_type, actions),
            Tab::Graphs => self.plots.show(ui, actions),
        }
    }

    fn show_notification(&mut self, ui: &mut egui::Ui) {
        let Some(notification) = &self.notification else {
            return;
        };

        let mut dismissed = false;
        ui.horizontal(|ui| {
            let color = if notification.is_error() {
                ui.visuals().error_fg_color
            } else {
                ui.visuals().strong_text_color()
            };
            ui.colored_label(color, notification.message.as_str());
            if ui.small_button("❌").clicked() {
                dismissed = true;
            }
        });
        ui.separator();

        if dismissed {
            self.notification = None;
        }
    }
}
