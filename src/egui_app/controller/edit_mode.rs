use super::rename::{CommitOutcome, RenameController, RenameDispatch};
use crate::widgets::WidgetNames;

/// Whether the title name is shown as a label or as an editor.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum EditMode {
    #[default]
    Viewing,
    Editing,
}

/// What ended an editing session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExitTrigger {
    /// The editor lost keyboard focus.
    FocusLost,
    /// Enter was pressed.
    Confirm,
    /// Escape was pressed; the staged edit is abandoned before committing.
    Cancel,
    /// The title bar is going away while editing.
    Teardown,
}

/// Two-state gate deciding whether keystrokes reach the rename controller.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EditModeGate {
    mode: EditMode,
}

impl EditModeGate {
    /// `start_editing` opens freshly created widgets straight into rename mode.
    pub fn new(start_editing: bool) -> Self {
        let mode = if start_editing {
            EditMode::Editing
        } else {
            EditMode::Viewing
        };
        Self { mode }
    }

    pub fn mode(&self) -> EditMode {
        self.mode
    }

    pub fn is_editing(&self) -> bool {
        self.mode == EditMode::Editing
    }

    pub fn accepts_input(&self) -> bool {
        self.is_editing()
    }

    /// Enter editing. Returns `false` when already editing.
    pub fn request_edit(&mut self) -> bool {
        if self.is_editing() {
            return false;
        }
        self.mode = EditMode::Editing;
        true
    }

    /// Leave editing, committing the staged name exactly once first.
    ///
    /// Returns `None` without committing when not editing.
    pub fn exit<N>(
        &mut self,
        trigger: ExitTrigger,
        rename: &mut RenameController,
        names: &N,
        dispatch: &mut dyn RenameDispatch,
    ) -> Option<CommitOutcome>
    where
        N: WidgetNames + ?Sized,
    {
        if !self.is_editing() {
            return None;
        }
        if trigger == ExitTrigger::Cancel {
            let canonical = rename
                .widget_id()
                .and_then(|id| names.canonical_name(id))
                .map(str::to_string);
            if let Some(canonical) = canonical {
                rename.abandon(&canonical);
            }
        }
        let candidate = rename.staged_name().to_string();
        let outcome = rename.commit(Some(&candidate), names, dispatch);
        self.mode = EditMode::Viewing;
        tracing::debug!(?trigger, ?outcome, "Left title edit mode");
        Some(outcome)
    }

    /// Drop back to viewing without committing; used when the widget vanished.
    pub fn force_viewing(&mut self) -> bool {
        let was_editing = self.is_editing();
        self.mode = EditMode::Viewing;
        was_editing
    }
}
