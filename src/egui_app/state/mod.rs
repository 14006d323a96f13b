//! Shared state types for the egui UI.

mod canvas;
mod status;
mod title;

pub use canvas::{CanvasState, WidgetRowView};
pub use status::StatusBarState;
pub use title::TitleBarState;

/// Top-level UI model consumed by the egui renderer.
#[derive(Clone, Debug, Default)]
pub struct UiState {
    /// Title bar of the open property pane; `None` when the pane is closed.
    pub title: Option<TitleBarState>,
    pub canvas: CanvasState,
    pub status: StatusBarState,
}
