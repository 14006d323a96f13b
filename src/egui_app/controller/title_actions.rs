use super::*;
use crate::widgets::RegistryCommand;
use serde_json::json;

impl EguiController {
    /// Double-click on the title name.
    pub fn begin_title_edit(&mut self) {
        let Some(session) = self.title.as_mut() else {
            return;
        };
        if !session.begin_edit() {
            return;
        }
        self.refresh_title();
        if let Some(title) = self.ui.title.as_mut() {
            title.focus_requested = true;
        }
    }

    /// Keystrokes from the title editor. Dropped unless editing.
    pub fn title_input(&mut self, raw_input: &str) {
        let Some(session) = self.title.as_mut() else {
            return;
        };
        if session.input(raw_input) {
            self.refresh_title();
        }
    }

    /// Leave title edit mode, committing the staged name once.
    pub fn finish_title_edit(&mut self, trigger: ExitTrigger) -> Option<CommitOutcome> {
        let session = self.title.as_mut()?;
        // A rejected duplicate resets staging, so remember what was submitted.
        let attempted = session.staged_name().to_string();
        let outcome = session.finish_edit(trigger, &self.registry, &mut self.commands)?;
        self.report_commit(outcome, &attempted);
        // Pick the command up right away so the spinner shows this frame.
        self.poll_registry();
        Some(outcome)
    }

    pub fn copy_selected_widget(&mut self) -> Result<(), String> {
        let widget_id = self.require_selection("copy")?;
        self.commands.send(RegistryCommand::Copy { widget_id });
        self.poll_registry();
        Ok(())
    }

    pub fn delete_selected_widget(&mut self) -> Result<(), String> {
        let widget_id = self.require_selection("delete")?;
        self.commands.send(RegistryCommand::Delete { widget_id });
        self.poll_registry();
        Ok(())
    }

    /// Open the documentation page for the selected widget's type.
    pub fn open_widget_help(&mut self) -> Result<(), String> {
        let url = self.help_url().ok_or_else(|| "No widget selected".to_string())?;
        match open::that(&url) {
            Ok(()) => {
                self.set_status(format!("Opened {url}"), StatusTone::Info);
                Ok(())
            }
            Err(err) => {
                let message = format!("Could not open {url}: {err}");
                tracing::warn!(%url, error = %err, "Failed to open widget docs");
                self.set_status(message.clone(), StatusTone::Error);
                Err(message)
            }
        }
    }

    /// Documentation link for the selected widget.
    pub fn help_url(&self) -> Option<String> {
        let widget_id = self.selected_widget()?;
        let widget = self.registry.get(widget_id)?;
        let base = self.settings.title_bar.docs_base_url.trim_end_matches('/');
        Some(format!("{base}/{}", widget.widget_type.docs_slug()))
    }

    /// Close button: record the click, then close the pane with a final commit.
    pub fn close_property_pane(&mut self) {
        let Some(session) = self.title.as_ref() else {
            return;
        };
        let widget_id = session.widget_id().clone();
        let widget_type = self
            .registry
            .get(&widget_id)
            .map_or("", |widget| widget.widget_type.as_str());
        self.telemetry.log_event(
            PROPERTY_PANE_CLOSE_CLICK,
            json!({
                "widgetType": widget_type,
                "widgetId": widget_id.as_str(),
            }),
        );
        self.unmount_title();
        self.refresh_ui();
    }

    fn require_selection(&mut self, action: &str) -> Result<WidgetId, String> {
        match self.selected_widget() {
            Some(widget_id) => Ok(widget_id.clone()),
            None => {
                let message = format!("Select a widget to {action}");
                self.set_status(message.clone(), StatusTone::Warning);
                Err(message)
            }
        }
    }
}
