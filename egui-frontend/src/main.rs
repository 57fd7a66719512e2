use eframe::egui;
use log::info;

mod ui;

use ui::SmartStayApp;

fn main() -> Result<(), eframe::Error> {
    env_logger::init();
    info!("Starting SmartStay egui application");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 750.0])
            .with_min_inner_size([800.0, 600.0])
            .with_title("SmartStay Hotel Management")
            .with_resizable(true),
        ..Default::default()
    };

    info!("Launching egui window");
    eframe::run_native(
        "SmartStay Hotel Management",
        options,
        Box::new(|cc| Ok(Box::new(SmartStayApp::new(cc)))),
    )
}
