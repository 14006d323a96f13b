use super::rename::RenameDispatch;
use super::telemetry::TelemetrySink;
use super::*;
use crate::widgets::WidgetId;
use std::cell::RefCell;
use std::collections::{BTreeSet, HashSet};
use std::rc::Rc;

/// Registry stand-in with directly editable names.
#[derive(Default)]
pub(crate) struct FakeNames {
    pub names: Vec<(WidgetId, String)>,
    pub siblings: Vec<String>,
    pub updating: HashSet<WidgetId>,
}

impl FakeNames {
    /// One widget with the given canonical name plus sibling names.
    pub(crate) fn single(name: &str, siblings: &[&str]) -> (Self, WidgetId) {
        let id = WidgetId::from_string("widget-1");
        let fake = Self {
            names: vec![(id.clone(), name.to_string())],
            siblings: siblings.iter().map(|s| s.to_string()).collect(),
            updating: HashSet::new(),
        };
        (fake, id)
    }

    pub(crate) fn rename(&mut self, widget_id: &WidgetId, name: &str) {
        if let Some(entry) = self.names.iter_mut().find(|(id, _)| id == widget_id) {
            entry.1 = name.to_string();
        }
    }

    pub(crate) fn remove(&mut self, widget_id: &WidgetId) {
        self.names.retain(|(id, _)| id != widget_id);
    }
}

impl WidgetNames for FakeNames {
    fn canonical_name(&self, widget_id: &WidgetId) -> Option<&str> {
        self.names
            .iter()
            .find(|(id, _)| id == widget_id)
            .map(|(_, name)| name.as_str())
    }

    fn existing_names(&self) -> BTreeSet<&str> {
        self.names
            .iter()
            .map(|(_, name)| name.as_str())
            .chain(self.siblings.iter().map(String::as_str))
            .collect()
    }

    fn is_updating(&self, widget_id: &WidgetId) -> bool {
        self.updating.contains(widget_id)
    }
}

/// Collects dispatched renames in order.
#[derive(Default)]
pub(crate) struct RecordingDispatch {
    pub sent: Vec<(WidgetId, String)>,
}

impl RecordingDispatch {
    pub(crate) fn names(&self) -> Vec<&str> {
        self.sent.iter().map(|(_, name)| name.as_str()).collect()
    }
}

impl RenameDispatch for RecordingDispatch {
    fn commit_mutation(&mut self, widget_id: &WidgetId, new_name: &str) {
        self.sent.push((widget_id.clone(), new_name.to_string()));
    }
}

/// Telemetry sink whose events stay readable after the controller takes ownership.
#[derive(Clone, Default)]
pub(crate) struct RecordingTelemetry {
    pub events: Rc<RefCell<Vec<(String, serde_json::Value)>>>,
}

impl TelemetrySink for RecordingTelemetry {
    fn log_event(&mut self, name: &str, properties: serde_json::Value) {
        self.events.borrow_mut().push((name.to_string(), properties));
    }
}

/// Controller over an instant registry seeded with the given widget names.
pub(crate) fn controller_with_widgets(
    names: &[(WidgetType, &str)],
) -> (EguiController, RecordingTelemetry, Vec<WidgetId>) {
    let mut settings = AppSettings::default();
    settings.registry.persist_delay_ms = 0;
    settings.demo.seed_widgets = false;
    let telemetry = RecordingTelemetry::default();
    let mut controller = EguiController::new(settings, Box::new(telemetry.clone()));
    let ids = names
        .iter()
        .map(|(widget_type, name)| controller.registry.insert_named(*widget_type, *name))
        .collect();
    controller.refresh_ui();
    (controller, telemetry, ids)
}
