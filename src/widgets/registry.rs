use std::collections::{BTreeSet, VecDeque};
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::time::{Duration, Instant};

use super::commands::{CommandSender, RegistryCommand, RegistryEvent, RejectReason};
use super::naming::{next_widget_name, sanitize_widget_name};
use super::{WidgetId, WidgetRecord, WidgetType};

/// Read access to the registry's naming state.
///
/// Callers query this at every decision point instead of holding on to a
/// copy, since names may change between events.
pub trait WidgetNames {
    /// Current authoritative name of a widget, `None` once it is gone.
    fn canonical_name(&self, widget_id: &WidgetId) -> Option<&str>;
    /// Snapshot of every name currently in use.
    fn existing_names(&self) -> BTreeSet<&str>;
    /// Whether a rename for the widget is still being persisted.
    fn is_updating(&self, widget_id: &WidgetId) -> bool;
}

struct PendingCommand {
    command: RegistryCommand,
    received_at: Instant,
}

/// In-memory widget store that applies commands after a persistence delay.
pub struct WidgetRegistry {
    widgets: Vec<WidgetRecord>,
    rx: Receiver<RegistryCommand>,
    pending: VecDeque<PendingCommand>,
    persist_delay: Duration,
    max_name_len: usize,
}

impl WidgetRegistry {
    /// Create an empty registry and the sender used to feed it commands.
    pub fn channel(persist_delay: Duration, max_name_len: usize) -> (Self, CommandSender) {
        let (tx, rx) = mpsc::channel();
        let registry = Self {
            widgets: Vec::new(),
            rx,
            pending: VecDeque::new(),
            persist_delay,
            max_name_len,
        };
        (registry, CommandSender::new(tx))
    }

    pub fn widgets(&self) -> &[WidgetRecord] {
        &self.widgets
    }

    pub fn get(&self, widget_id: &WidgetId) -> Option<&WidgetRecord> {
        self.widgets.iter().find(|widget| &widget.id == widget_id)
    }

    /// Add a widget with the next free default name for its type.
    pub fn create(&mut self, widget_type: WidgetType) -> WidgetId {
        let name = self.next_name(widget_type);
        self.insert_named(widget_type, name)
    }

    /// Add a widget with an explicit name.
    pub fn insert_named(&mut self, widget_type: WidgetType, name: impl Into<String>) -> WidgetId {
        let id = WidgetId::new();
        let name = name.into();
        tracing::debug!(widget_id = %id, %name, "Widget created");
        self.widgets.push(WidgetRecord {
            id: id.clone(),
            widget_type,
            name,
        });
        id
    }

    /// True while any received command has not been applied yet.
    pub fn has_pending(&self) -> bool {
        !self.pending.is_empty()
    }

    /// Receive queued commands and apply the ones whose delay has elapsed.
    pub fn poll(&mut self, now: Instant) -> Vec<RegistryEvent> {
        self.drain_channel(now);
        let mut events = Vec::new();
        while let Some(next) = self.pending.front() {
            if now.saturating_duration_since(next.received_at) < self.persist_delay {
                break;
            }
            let Some(pending) = self.pending.pop_front() else {
                break;
            };
            if let Some(event) = self.apply(pending.command) {
                events.push(event);
            }
        }
        events
    }

    fn drain_channel(&mut self, now: Instant) {
        loop {
            match self.rx.try_recv() {
                Ok(command) => self.pending.push_back(PendingCommand {
                    command,
                    received_at: now,
                }),
                Err(TryRecvError::Empty | TryRecvError::Disconnected) => break,
            }
        }
    }

    fn apply(&mut self, command: RegistryCommand) -> Option<RegistryEvent> {
        match command {
            RegistryCommand::Rename {
                widget_id,
                new_name,
            } => Some(self.apply_rename(widget_id, new_name)),
            RegistryCommand::Copy { widget_id } => self.apply_copy(widget_id),
            RegistryCommand::Delete { widget_id } => self.apply_delete(widget_id),
        }
    }

    fn apply_rename(&mut self, widget_id: WidgetId, attempted: String) -> RegistryEvent {
        let name = sanitize_widget_name(&attempted, self.max_name_len);
        let reject = |reason: RejectReason| {
            tracing::info!(widget_id = %widget_id, %attempted, %reason, "Rename rejected");
            RegistryEvent::RenameRejected {
                widget_id: widget_id.clone(),
                attempted: attempted.clone(),
                reason,
            }
        };
        if name.is_empty() {
            return reject(RejectReason::InvalidName);
        }
        if self.name_taken_by_other(&name, &widget_id) {
            return reject(RejectReason::NameInUse);
        }
        let Some(widget) = self.widgets.iter_mut().find(|w| w.id == widget_id) else {
            return reject(RejectReason::UnknownWidget);
        };
        let old_name = std::mem::replace(&mut widget.name, name.clone());
        tracing::info!(widget_id = %widget_id, %old_name, new_name = %name, "Widget renamed");
        RegistryEvent::Renamed {
            widget_id,
            old_name,
            new_name: name,
        }
    }

    fn apply_copy(&mut self, source_id: WidgetId) -> Option<RegistryEvent> {
        let Some(widget_type) = self.get(&source_id).map(|w| w.widget_type) else {
            tracing::debug!(widget_id = %source_id, "Copy requested for unknown widget");
            return None;
        };
        let copy_id = self.create(widget_type);
        Some(RegistryEvent::Copied { source_id, copy_id })
    }

    fn apply_delete(&mut self, widget_id: WidgetId) -> Option<RegistryEvent> {
        let index = self.widgets.iter().position(|w| w.id == widget_id);
        let Some(index) = index else {
            tracing::debug!(widget_id = %widget_id, "Delete requested for unknown widget");
            return None;
        };
        let removed = self.widgets.remove(index);
        tracing::info!(widget_id = %widget_id, name = %removed.name, "Widget deleted");
        Some(RegistryEvent::Deleted {
            widget_id,
            name: removed.name,
        })
    }

    fn name_taken_by_other(&self, name: &str, widget_id: &WidgetId) -> bool {
        self.widgets
            .iter()
            .any(|widget| &widget.id != widget_id && widget.name == name)
    }

    fn next_name(&self, widget_type: WidgetType) -> String {
        next_widget_name(widget_type.name_prefix(), |candidate| {
            self.widgets.iter().any(|widget| widget.name == candidate)
        })
    }
}

impl WidgetNames for WidgetRegistry {
    fn canonical_name(&self, widget_id: &WidgetId) -> Option<&str> {
        self.get(widget_id).map(|widget| widget.name.as_str())
    }

    fn existing_names(&self) -> BTreeSet<&str> {
        self.widgets.iter().map(|widget| widget.name.as_str()).collect()
    }

    fn is_updating(&self, widget_id: &WidgetId) -> bool {
        self.pending.iter().any(|pending| {
            matches!(
                &pending.command,
                RegistryCommand::Rename { widget_id: id, .. } if id == widget_id
            )
        })
    }
}

#[cfg(test)]
#[path = "registry_tests.rs"]
mod registry_tests;
