use crate::egui_app::controller::EditMode;
use crate::widgets::{WidgetId, WidgetType};

/// View model for the property pane title bar.
#[derive(Clone, Debug, PartialEq)]
pub struct TitleBarState {
    pub widget_id: WidgetId,
    pub widget_type: WidgetType,
    /// Staged name; mirrors the canonical name unless an edit is in flight.
    pub name: String,
    /// Canonical name, shown as the editor placeholder.
    pub placeholder: String,
    pub mode: EditMode,
    /// A rename is being persisted; drives the spinner.
    pub updating: bool,
    /// Ask the renderer to focus the name editor on the next frame.
    pub focus_requested: bool,
}
