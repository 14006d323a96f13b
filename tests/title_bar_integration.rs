mod support;

use support::config_env::ConfigHomeGuard;

use widget_pane::egui_app::controller::{
    CommitOutcome, EditMode, EguiController, ExitTrigger, NoOpReason, TracingTelemetry,
};
use widget_pane::widgets::config::{self, AppSettings};
use widget_pane::widgets::{WidgetId, WidgetNames};
use tempfile::TempDir;

struct PaneHarness {
    _config: ConfigHomeGuard,
    _temp: TempDir,
    pub controller: EguiController,
}

impl PaneHarness {
    /// Controller built from a config file written to a temp app dir.
    fn with_settings(edit: impl FnOnce(&mut AppSettings)) -> Self {
        let temp = tempfile::tempdir().expect("create tempdir");
        let guard = ConfigHomeGuard::set(temp.path().join("config"));
        let mut settings = AppSettings::default();
        settings.registry.persist_delay_ms = 0;
        edit(&mut settings);
        config::save(&settings).expect("save config");
        let loaded = config::load_or_default().expect("load config");
        let mut controller = EguiController::new(loaded, Box::new(TracingTelemetry));
        controller.seed_demo_widgets();
        Self {
            _config: guard,
            _temp: temp,
            controller,
        }
    }

    fn widget_named(&self, name: &str) -> WidgetId {
        self.controller
            .ui
            .canvas
            .rows
            .iter()
            .find(|row| row.name == name)
            .map(|row| row.id.clone())
            .expect("seeded widget")
    }

    fn rename(&mut self, widget_id: &WidgetId, raw: &str, trigger: ExitTrigger) -> Option<CommitOutcome> {
        self.controller.select_widget(widget_id).expect("select widget");
        self.controller.begin_title_edit();
        self.controller.title_input(raw);
        self.controller.finish_title_edit(trigger)
    }
}

#[test]
fn saved_name_limit_applies_to_staging_and_registry() {
    let mut harness = PaneHarness::with_settings(|settings| {
        settings.title_bar.max_name_length = 8;
    });
    assert_eq!(harness.controller.settings().title_bar.max_name_length, 8);
    let button = harness.widget_named("Button1");

    let outcome = harness.rename(&button, "Submit Button!", ExitTrigger::Confirm);

    assert_eq!(outcome, Some(CommitOutcome::Accepted));
    assert_eq!(
        harness.controller.widgets().canonical_name(&button),
        Some("SubmitBu")
    );
}

#[test]
fn seeded_sibling_name_is_rejected() {
    let mut harness = PaneHarness::with_settings(|_| {});
    let button = harness.widget_named("Button1");

    let outcome = harness.rename(&button, "Input1", ExitTrigger::FocusLost);

    assert_eq!(outcome, Some(CommitOutcome::RejectedDuplicate));
    let title = harness.controller.ui.title.as_ref().expect("title open");
    assert_eq!(title.name, "Button1");
    assert_eq!(title.mode, EditMode::Viewing);
    assert_eq!(
        harness.controller.widgets().canonical_name(&button),
        Some("Button1")
    );
}

#[test]
fn renaming_then_reopening_with_same_value_is_a_noop() {
    let mut harness = PaneHarness::with_settings(|_| {});
    let table = harness.widget_named("Table1");

    assert_eq!(
        harness.rename(&table, "Orders", ExitTrigger::Confirm),
        Some(CommitOutcome::Accepted)
    );
    harness.controller.begin_title_edit();
    assert_eq!(
        harness.controller.finish_title_edit(ExitTrigger::FocusLost),
        Some(CommitOutcome::NoOp(NoOpReason::Unchanged))
    );
    assert!(!harness.controller.has_pending_mutations());
}

#[test]
fn disabled_seeding_leaves_canvas_empty() {
    let harness = PaneHarness::with_settings(|settings| {
        settings.demo.seed_widgets = false;
    });
    assert!(harness.controller.ui.canvas.rows.is_empty());
    assert!(harness.controller.ui.title.is_none());
}
