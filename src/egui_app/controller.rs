//! Maintains app state and bridges the widget registry to the egui UI.

mod edit_mode;
mod rename;
mod telemetry;
mod title_actions;
mod title_session;

#[cfg(test)]
mod test_support;

pub use edit_mode::{EditMode, EditModeGate, ExitTrigger};
pub use rename::{CommitOutcome, NoOpReason, RenameController, RenameDispatch};
pub use telemetry::{PROPERTY_PANE_CLOSE_CLICK, TelemetrySink, TracingTelemetry};
pub use title_session::{SyncChange, TitleSession};

use crate::egui_app::state::{TitleBarState, UiState, WidgetRowView};
use crate::egui_app::ui::style::StatusTone;
use crate::widgets::config::AppSettings;
use crate::widgets::{
    CommandSender, RegistryEvent, WidgetId, WidgetNames, WidgetRegistry, WidgetType,
};
use std::time::Instant;

/// Owns the registry and the mounted title, and keeps [`UiState`] in sync.
pub struct EguiController {
    pub ui: UiState,
    registry: WidgetRegistry,
    commands: CommandSender,
    title: Option<TitleSession>,
    settings: AppSettings,
    telemetry: Box<dyn TelemetrySink>,
}

impl EguiController {
    pub fn new(settings: AppSettings, telemetry: Box<dyn TelemetrySink>) -> Self {
        let (registry, commands) = WidgetRegistry::channel(
            settings.registry.persist_delay(),
            settings.title_bar.max_name_length,
        );
        Self {
            ui: UiState::default(),
            registry,
            commands,
            title: None,
            settings,
            telemetry,
        }
    }

    pub fn settings(&self) -> &AppSettings {
        &self.settings
    }

    /// Read-only view of the registry.
    pub fn widgets(&self) -> &WidgetRegistry {
        &self.registry
    }

    /// Populate the canvas with a starter set of widgets when enabled in config.
    pub fn seed_demo_widgets(&mut self) {
        if !self.settings.demo.seed_widgets {
            return;
        }
        for widget_type in [
            WidgetType::Button,
            WidgetType::Button,
            WidgetType::Input,
            WidgetType::Text,
            WidgetType::Table,
        ] {
            self.registry.create(widget_type);
        }
        self.refresh_ui();
    }

    pub fn selected_widget(&self) -> Option<&WidgetId> {
        self.title.as_ref().map(TitleSession::widget_id)
    }

    /// Open the property pane for `widget_id`, closing the current one first.
    pub fn select_widget(&mut self, widget_id: &WidgetId) -> Result<(), String> {
        if self.selected_widget() == Some(widget_id) {
            return Ok(());
        }
        if self.registry.get(widget_id).is_none() {
            let message = format!("Widget {widget_id} no longer exists");
            self.set_status(message.clone(), StatusTone::Error);
            return Err(message);
        }
        self.mount_title(widget_id.clone(), false);
        self.refresh_ui();
        Ok(())
    }

    /// Create a widget, select it and open its name for editing.
    pub fn add_widget(&mut self, widget_type: WidgetType) -> WidgetId {
        let widget_id = self.registry.create(widget_type);
        self.mount_title(widget_id.clone(), true);
        self.refresh_ui();
        if let Some(name) = self.registry.canonical_name(&widget_id) {
            self.set_status(format!("Added {name}"), StatusTone::Info);
        }
        widget_id
    }

    /// Whether the registry still has mutations in flight.
    pub fn has_pending_mutations(&self) -> bool {
        self.registry.has_pending()
    }

    /// Apply registry progress and reconcile the mounted title with it.
    pub fn poll_registry(&mut self) {
        let events = self.registry.poll(Instant::now());
        for event in events {
            self.handle_registry_event(event);
        }
        self.sync_title();
        self.refresh_ui();
    }

    /// Final teardown; an open edit gets its last commit attempt.
    pub fn shutdown(&mut self) {
        self.unmount_title();
        if self.registry.has_pending() {
            tracing::warn!("Shutting down with registry mutations still pending");
        }
    }

    fn mount_title(&mut self, widget_id: WidgetId, start_editing: bool) {
        self.unmount_title();
        let session = TitleSession::mount(
            widget_id,
            &self.registry,
            start_editing,
            self.settings.title_bar.max_name_length,
        );
        let focus = session.is_editing();
        self.title = Some(session);
        self.refresh_title();
        if let Some(title) = self.ui.title.as_mut() {
            title.focus_requested = focus;
        }
    }

    fn unmount_title(&mut self) -> Option<CommitOutcome> {
        let session = self.title.take()?;
        let attempted = session.staged_name().to_string();
        let outcome = session.unmount(&self.registry, &mut self.commands);
        if let Some(outcome) = outcome {
            self.report_commit(outcome, &attempted);
        }
        self.ui.title = None;
        outcome
    }

    fn sync_title(&mut self) {
        let Some(session) = self.title.as_mut() else {
            return;
        };
        if session.sync(&self.registry) == SyncChange::TargetLost {
            // The widget is gone; there is nothing left to show or commit.
            self.title = None;
            self.ui.title = None;
        }
    }

    fn handle_registry_event(&mut self, event: RegistryEvent) {
        match event {
            RegistryEvent::Renamed {
                old_name, new_name, ..
            } => {
                if old_name != new_name {
                    self.set_status(format!("Renamed {old_name} to {new_name}"), StatusTone::Info);
                }
            }
            RegistryEvent::RenameRejected {
                widget_id,
                attempted,
                reason,
            } => {
                if let Some(session) = self.title.as_mut()
                    && session.widget_id() == &widget_id
                {
                    session.on_rename_rejected(&self.registry);
                }
                self.set_status(
                    format!("Could not rename to {attempted}: {reason}"),
                    StatusTone::Warning,
                );
            }
            RegistryEvent::Copied { source_id, copy_id } => {
                let source = self.registry.canonical_name(&source_id).unwrap_or("widget");
                let copy = self.registry.canonical_name(&copy_id).unwrap_or("copy");
                let message = format!("Copied {source} as {copy}");
                self.set_status(message, StatusTone::Info);
            }
            RegistryEvent::Deleted { name, .. } => {
                self.set_status(format!("Deleted {name}"), StatusTone::Info);
            }
        }
    }

    fn report_commit(&mut self, outcome: CommitOutcome, attempted: &str) {
        match outcome {
            CommitOutcome::Accepted => {
                self.set_status(format!("Renaming to {attempted}"), StatusTone::Busy);
            }
            CommitOutcome::RejectedDuplicate => {
                self.set_status(
                    format!("{attempted} is already in use"),
                    StatusTone::Warning,
                );
            }
            CommitOutcome::NoOp(_) => {}
        }
    }

    pub(crate) fn refresh_ui(&mut self) {
        self.ui.canvas.rows = self
            .registry
            .widgets()
            .iter()
            .map(|widget| WidgetRowView {
                id: widget.id.clone(),
                name: widget.name.clone(),
                widget_type: widget.widget_type,
            })
            .collect();
        self.ui.canvas.selected = self.selected_widget().cloned();
        self.refresh_title();
    }

    fn refresh_title(&mut self) {
        let Some(session) = self.title.as_ref() else {
            self.ui.title = None;
            return;
        };
        let widget_id = session.widget_id();
        let Some(widget) = self.registry.get(widget_id) else {
            self.ui.title = None;
            return;
        };
        let focus_requested = self
            .ui
            .title
            .as_ref()
            .is_some_and(|title| title.focus_requested && &title.widget_id == widget_id);
        self.ui.title = Some(TitleBarState {
            widget_id: widget_id.clone(),
            widget_type: widget.widget_type,
            name: session.staged_name().to_string(),
            placeholder: widget.name.clone(),
            mode: session.mode(),
            updating: self.registry.is_updating(widget_id),
            focus_requested,
        });
    }

    fn set_status(&mut self, text: impl Into<String>, tone: StatusTone) {
        self.ui.status.set(text, tone);
    }
}
