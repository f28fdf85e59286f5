use anyhow::{anyhow, Result};
use eframe::egui;
use log::info;

mod app;
mod config;
mod controller;
mod download;
mod error;
mod localizations;
mod models;
mod theme;
mod ui;

use app::YtdlApp;
use config::Settings;
use controller::FormController;
use localizations::Localizations;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let settings = Settings::load()?;
    let localizer = Localizations::new();
    let title = localizer.get("app-title");
    info!("Starting {title} ({})", localizer.current_lang());
    let app = YtdlApp::new(FormController::new(settings, localizer));

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([480.0, 320.0])
            .with_min_inner_size([400.0, 280.0])
            .with_title(&title),
        ..Default::default()
    };

    eframe::run_native(
        &title,
        options,
        Box::new(|cc| {
            cc.egui_ctx.set_visuals(egui::Visuals::light());
            Box::new(app)
        }),
    )
    .map_err(|e| anyhow!("Failed to run the window: {e}"))
}
