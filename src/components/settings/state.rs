use crate::metrics::DEFAULT_UPDATE_INTERVAL_MS;
use std::ops::RangeInclusive;
use std::time::Duration;

pub const UPDATE_INTERVAL_RANGE_MS: RangeInclusive<u64> = 250..=10_000;

#[derive(serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct Settings {
    pub scale: f32,
    pub font_size: f32,
    pub update_interval_ms: u64,
    #[serde(skip)]
    show_window: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            scale: 1.2,
            font_size: 15.0,
            update_interval_ms: DEFAULT_UPDATE_INTERVAL_MS,
            show_window: false,
        }
    }
}

impl Settings {
    pub fn show(&mut self) {
        self.show_window = true;
    }

    pub fn is_visible(&self) -> bool {
        self.show_window
    }

    pub fn hide(&mut self) {
        self.show_window = false;
    }

    /// Sampling cadence, clamped so a hand-edited value cannot stall or flood the loop.
    pub fn update_interval(&self) -> Duration {
        let ms = self.update_interval_ms.clamp(
            *UPDATE_INTERVAL_RANGE_MS.start(),
            *UPDATE_INTERVAL_RANGE_MS.end(),
        );
        Duration::from_millis(ms)
    }

    pub fn apply(&self, ctx: &egui::Context) {
        ctx.set_pixels_per_point(self.scale);

        let mut style = (*ctx.style()).clone();
        style.text_styles = [
            (
                egui::TextStyle::Heading,
                egui::FontId::new(self.font_size + 4.0, egui::FontFamily::Proportional),
            ),
            (
                egui::TextStyle::Body,
                egui::FontId::new(self.font_size, egui::FontFamily::Proportional),
            ),
            (
                egui::TextStyle::Monospace,
                egui::FontId::new(self.font_size, egui::FontFamily::Monospace),
            ),
            (
                egui::TextStyle::Button,
                egui::FontId::new(self.font_size, egui::FontFamily::Proportional),
            ),
            (
                egui::TextStyle::Small,
                egui::FontId::new(self.font_size - 2.0, egui::FontFamily::Proportional),
            ),
        ]
        .into();
        ctx.set_style(style);
    }
}
