//! egui renderer for the application UI.

mod canvas_panel;
mod helpers;
pub mod style;
mod title_bar;

use std::time::Duration;

use crate::egui_app::controller::{EguiController, TracingTelemetry};
use crate::widgets::config::AppSettings;
use eframe::egui::{self, Frame, RichText, Vec2};

/// Minimum window size the layout is designed for.
pub const MIN_VIEWPORT_SIZE: Vec2 = Vec2::new(720.0, 420.0);

/// How often to repaint while registry mutations are in flight.
const PENDING_REPAINT_INTERVAL: Duration = Duration::from_millis(50);

/// Renders the egui UI using the shared controller state.
pub struct EguiApp {
    controller: EguiController,
    visuals_set: bool,
}

impl EguiApp {
    /// Create the app with loaded settings, seeding demo widgets when enabled.
    pub fn new(settings: AppSettings) -> Self {
        let mut controller = EguiController::new(settings, Box::new(TracingTelemetry));
        controller.seed_demo_widgets();
        Self {
            controller,
            visuals_set: false,
        }
    }

    fn apply_visuals(&mut self, ctx: &egui::Context) {
        if self.visuals_set {
            return;
        }
        let mut visuals = egui::Visuals::dark();
        style::apply_visuals(&mut visuals);
        ctx.set_visuals(visuals);
        self.visuals_set = true;
    }

    fn render_status(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("status_bar")
            .frame(Frame::new().fill(style::palette().bg_primary))
            .show(ctx, |ui| {
                let status = &self.controller.ui.status;
                ui.horizontal(|ui| {
                    ui.add_space(8.0);
                    ui.painter().circle_filled(
                        ui.cursor().min + egui::vec2(6.0, 10.0),
                        6.0,
                        status.badge_color,
                    );
                    ui.add_space(16.0);
                    ui.label(RichText::new(&status.badge_label).strong());
                    ui.separator();
                    ui.label(&status.text);
                });
            });
    }
}

impl eframe::App for EguiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.apply_visuals(ctx);
        self.controller.poll_registry();
        self.render_status(ctx);
        egui::SidePanel::left("canvas_panel")
            .resizable(true)
            .default_width(220.0)
            .show(ctx, |ui| self.render_canvas_panel(ui));
        egui::CentralPanel::default().show(ctx, |ui| self.render_property_pane(ui));
        if self.controller.has_pending_mutations() {
            ctx.request_repaint_after(PENDING_REPAINT_INTERVAL);
        }
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        self.controller.shutdown();
    }
}
