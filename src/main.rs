//! Entry point for the egui-based widget property pane.
use eframe::egui;
use widget_pane::egui_app::ui::{EguiApp, MIN_VIEWPORT_SIZE};
use widget_pane::logging;
use widget_pane::widgets::config::{self, AppSettings};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let settings = match config::load_or_default() {
        Ok(settings) => settings,
        Err(err) => {
            eprintln!("Using default settings: {err}");
            AppSettings::default()
        }
    };

    if let Err(err) = logging::init(&settings.logging) {
        eprintln!("Logging disabled: {err}");
    }
    tracing::info!(
        max_name_length = settings.title_bar.max_name_length,
        persist_delay_ms = settings.registry.persist_delay_ms,
        "Starting widget pane"
    );

    let viewport = egui::ViewportBuilder::default()
        .with_min_inner_size(MIN_VIEWPORT_SIZE)
        .with_inner_size([960.0, 600.0]);
    let native_options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };

    eframe::run_native(
        "Widget Pane",
        native_options,
        Box::new(move |_cc| Ok(Box::new(EguiApp::new(settings)))),
    )?;
    Ok(())
}
