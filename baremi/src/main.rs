//! Baremi - a bilingual running-total calculator
//!
//! Tap a preset to add or subtract it; flip the switch to change sign.

mod app;

use app::BaremiApp;
use baremicore::logging;
use baremicore::storage::Settings;
use eframe::NativeOptions;

fn main() -> eframe::Result<()> {
    let path = Settings::config_path();
    let loaded = Settings::load(&path);
    let level = loaded.as_ref().map(|s| s.log_level.as_str()).unwrap_or("info");
    logging::init(level);
    let settings = Settings::or_default(&path, loaded);

    tracing::info!(language = settings.language.code(), "starting baremi");

    let options = NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([400.0, 760.0])
            .with_min_inner_size([360.0, 640.0])
            .with_title("Baremi"),
        ..Default::default()
    };

    eframe::run_native(
        "baremi",
        options,
        Box::new(move |cc| Box::new(BaremiApp::new(cc, &settings))),
    )
}
