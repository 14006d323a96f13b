use crate::widgets::{WidgetId, WidgetType};

/// Widget list shown beside the property pane.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CanvasState {
    pub rows: Vec<WidgetRowView>,
    pub selected: Option<WidgetId>,
}

/// Display data for one widget row.
#[derive(Clone, Debug, PartialEq)]
pub struct WidgetRowView {
    pub id: WidgetId,
    pub name: String,
    pub widget_type: WidgetType,
}
