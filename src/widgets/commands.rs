//! One-way messages into the registry and the events it reports back.

use std::sync::mpsc::Sender;

use super::WidgetId;

/// Mutation requests accepted by the registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistryCommand {
    Rename { widget_id: WidgetId, new_name: String },
    Copy { widget_id: WidgetId },
    Delete { widget_id: WidgetId },
}

impl RegistryCommand {
    /// Widget the command targets.
    pub fn widget_id(&self) -> &WidgetId {
        match self {
            RegistryCommand::Rename { widget_id, .. }
            | RegistryCommand::Copy { widget_id }
            | RegistryCommand::Delete { widget_id } => widget_id,
        }
    }
}

/// Why the registry refused a rename.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RejectReason {
    /// Another widget already uses the name.
    NameInUse,
    /// Nothing usable was left after sanitizing.
    InvalidName,
    /// The widget no longer exists.
    UnknownWidget,
}

impl std::fmt::Display for RejectReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RejectReason::NameInUse => f.write_str("name already in use"),
            RejectReason::InvalidName => f.write_str("name is not a valid identifier"),
            RejectReason::UnknownWidget => f.write_str("widget no longer exists"),
        }
    }
}

/// Outcomes applied by the registry, reported from [`super::WidgetRegistry::poll`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistryEvent {
    Renamed {
        widget_id: WidgetId,
        old_name: String,
        new_name: String,
    },
    RenameRejected {
        widget_id: WidgetId,
        attempted: String,
        reason: RejectReason,
    },
    Copied {
        source_id: WidgetId,
        copy_id: WidgetId,
    },
    Deleted {
        widget_id: WidgetId,
        /// Name the widget had when it was removed.
        name: String,
    },
}

/// Fire-and-forget handle for sending commands to the registry.
#[derive(Debug, Clone)]
pub struct CommandSender {
    tx: Sender<RegistryCommand>,
}

impl CommandSender {
    pub(super) fn new(tx: Sender<RegistryCommand>) -> Self {
        Self { tx }
    }

    /// Queue a command. A registry that has gone away only produces a warning.
    pub fn send(&self, command: RegistryCommand) {
        if let Err(err) = self.tx.send(command) {
            tracing::warn!(
                widget_id = %err.0.widget_id(),
                "Registry is gone; dropping command"
            );
        }
    }
}
