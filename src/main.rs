#![warn(clippy::all, rust_2018_idioms)]

use taskman::TaskManagerApp;

fn main() -> Result<(), eframe::Error> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Task Manager")
            .with_inner_size([900.0, 700.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    log::info!("Starting task manager");
    eframe::run_native(
        "Task Manager",
        native_options,
        Box::new(|cc| Ok(Box::new(TaskManagerApp::new(cc)))),
    )
}
