//! Library exports for reuse in the binary and integration tests.
/// Application directory resolution.
pub mod app_dirs;
/// Shared egui UI modules.
pub mod egui_app;
/// Tracing subscriber setup.
pub mod logging;
/// Widget registry, naming rules and settings.
pub mod widgets;
