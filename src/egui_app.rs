//! Property pane UI: controller, view state and egui renderer.
pub mod controller;
pub mod state;
pub mod ui;
