#![deny(missing_docs)]

//! Entry point for the egui-based NeuroScan UI.
#![cfg_attr(
    all(not(debug_assertions), target_os = "windows"),
    windows_subsystem = "windows"
)]
use eframe::egui;
use neuroscan::config::{self, PortalConfig};
use neuroscan::egui_app::ui::{MIN_VIEWPORT_SIZE, PortalApp};
use neuroscan::logging;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    if let Err(err) = logging::init() {
        eprintln!("Logging disabled: {err}");
    }

    let config = match config::load_or_default() {
        Ok(config) => config,
        Err(err) => {
            tracing::warn!("Config load failed: {err}; using defaults");
            PortalConfig::default()
        }
    };
    tracing::info!("Portal backend at {}", config.base_url);

    let viewport = egui::ViewportBuilder::default()
        .with_inner_size(egui::vec2(1080.0, 760.0))
        .with_min_inner_size(MIN_VIEWPORT_SIZE);
    let native_options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };

    eframe::run_native(
        "NeuroScan",
        native_options,
        Box::new(move |_cc| Ok(Box::new(PortalApp::new(config)))),
    )?;
    Ok(())
}
