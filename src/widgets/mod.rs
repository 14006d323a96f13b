//! Widget registry: the authoritative owner of widget names.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub mod commands;
pub mod config;
mod config_defaults;
pub mod naming;
pub mod registry;

pub use commands::{CommandSender, RegistryCommand, RegistryEvent, RejectReason};
pub use registry::{WidgetNames, WidgetRegistry};

/// Identifier for a widget on the canvas.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct WidgetId(String);

impl WidgetId {
    /// Create a new unique widget identifier.
    pub fn new() -> Self {
        Self(Uuid::new_v4().simple().to_string())
    }

    /// Rehydrate a widget identifier from a stored string.
    pub fn from_string(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow the identifier as a string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for WidgetId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for WidgetId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Kinds of widgets that can be placed on the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WidgetType {
    Button,
    Input,
    Text,
    Container,
    Table,
    Image,
    Dropdown,
    Checkbox,
}

impl WidgetType {
    /// Every widget type, in palette order.
    pub const ALL: [WidgetType; 8] = [
        WidgetType::Button,
        WidgetType::Input,
        WidgetType::Text,
        WidgetType::Container,
        WidgetType::Table,
        WidgetType::Image,
        WidgetType::Dropdown,
        WidgetType::Checkbox,
    ];

    /// Prefix used when generating default names (`Button1`, `Button2`, ...).
    pub fn name_prefix(self) -> &'static str {
        match self {
            WidgetType::Button => "Button",
            WidgetType::Input => "Input",
            WidgetType::Text => "Text",
            WidgetType::Container => "Container",
            WidgetType::Table => "Table",
            WidgetType::Image => "Image",
            WidgetType::Dropdown => "Dropdown",
            WidgetType::Checkbox => "Checkbox",
        }
    }

    /// Stable identifier reported in telemetry.
    pub fn as_str(self) -> &'static str {
        match self {
            WidgetType::Button => "BUTTON_WIDGET",
            WidgetType::Input => "INPUT_WIDGET",
            WidgetType::Text => "TEXT_WIDGET",
            WidgetType::Container => "CONTAINER_WIDGET",
            WidgetType::Table => "TABLE_WIDGET",
            WidgetType::Image => "IMAGE_WIDGET",
            WidgetType::Dropdown => "DROP_DOWN_WIDGET",
            WidgetType::Checkbox => "CHECKBOX_WIDGET",
        }
    }

    /// Path segment of the widget's documentation page.
    pub fn docs_slug(self) -> &'static str {
        match self {
            WidgetType::Button => "button",
            WidgetType::Input => "input",
            WidgetType::Text => "text",
            WidgetType::Container => "container",
            WidgetType::Table => "table",
            WidgetType::Image => "image",
            WidgetType::Dropdown => "dropdown",
            WidgetType::Checkbox => "checkbox",
        }
    }
}

/// A widget as stored by the registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WidgetRecord {
    pub id: WidgetId,
    pub widget_type: WidgetType,
    pub name: String,
}
