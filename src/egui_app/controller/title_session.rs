//! One mount of the property pane title for one widget.
//!
//! The session is the only place where edit mode and staging meet:
//! keystrokes are staged only while the gate is editing, leaving edit mode
//! commits through the gate, and [`TitleSession::unmount`] consumes the session
//! so the final commit cannot be skipped by accident.

use super::edit_mode::{EditMode, EditModeGate, ExitTrigger};
use super::rename::{CommitOutcome, NoOpReason, RenameController, RenameDispatch};
use crate::widgets::{WidgetId, WidgetNames};

/// What [`TitleSession::sync`] had to reconcile.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SyncChange {
    None,
    /// The canonical name changed elsewhere and staging was reset.
    CanonicalChanged,
    /// The widget disappeared from the registry.
    TargetLost,
}

#[derive(Debug)]
pub struct TitleSession {
    widget_id: WidgetId,
    /// Canonical name as of the last sync, used only to detect external changes.
    observed_canonical: Option<String>,
    rename: RenameController,
    gate: EditModeGate,
}

impl TitleSession {
    /// Mount the title for `widget_id`, staging its current canonical name.
    pub fn mount<N>(widget_id: WidgetId, names: &N, start_editing: bool, max_name_len: usize) -> Self
    where
        N: WidgetNames + ?Sized,
    {
        let canonical = names.canonical_name(&widget_id).map(str::to_string);
        let rename = RenameController::new(
            Some(widget_id.clone()),
            canonical.as_deref().unwrap_or_default(),
            max_name_len,
        );
        let gate = EditModeGate::new(start_editing && canonical.is_some());
        tracing::debug!(widget_id = %widget_id, editing = gate.is_editing(), "Title mounted");
        Self {
            widget_id,
            observed_canonical: canonical,
            rename,
            gate,
        }
    }

    pub fn widget_id(&self) -> &WidgetId {
        &self.widget_id
    }

    pub fn staged_name(&self) -> &str {
        self.rename.staged_name()
    }

    pub fn mode(&self) -> EditMode {
        self.gate.mode()
    }

    pub fn is_editing(&self) -> bool {
        self.gate.is_editing()
    }

    /// Stage raw input. Ignored (returns `false`) unless editing.
    pub fn input(&mut self, raw_input: &str) -> bool {
        if !self.gate.accepts_input() {
            return false;
        }
        self.rename.stage(raw_input);
        true
    }

    /// Double-click on the name. Returns `false` when already editing or the
    /// widget is gone.
    pub fn begin_edit(&mut self) -> bool {
        if self.observed_canonical.is_none() {
            return false;
        }
        self.gate.request_edit()
    }

    /// Leave edit mode through `trigger`, committing once.
    pub fn finish_edit<N>(
        &mut self,
        trigger: ExitTrigger,
        names: &N,
        dispatch: &mut dyn RenameDispatch,
    ) -> Option<CommitOutcome>
    where
        N: WidgetNames + ?Sized,
    {
        let outcome = self.gate.exit(trigger, &mut self.rename, names, dispatch)?;
        let revert = match outcome {
            CommitOutcome::NoOp(NoOpReason::Empty | NoOpReason::Unchanged) => true,
            // A repeat of a rename still in flight keeps showing it; once the
            // registry has settled the repeat means it was refused.
            CommitOutcome::NoOp(NoOpReason::AlreadyCommitted) => {
                !names.is_updating(&self.widget_id)
            }
            _ => false,
        };
        if revert && let Some(canonical) = names.canonical_name(&self.widget_id) {
            self.rename.abandon(canonical);
        }
        Some(outcome)
    }

    /// Reconcile with the registry after external events.
    pub fn sync<N>(&mut self, names: &N) -> SyncChange
    where
        N: WidgetNames + ?Sized,
    {
        let Some(current) = names.canonical_name(&self.widget_id) else {
            if self.observed_canonical.take().is_some() || self.gate.is_editing() {
                if self.gate.force_viewing() {
                    tracing::info!(widget_id = %self.widget_id, "Widget vanished while renaming");
                }
                return SyncChange::TargetLost;
            }
            return SyncChange::None;
        };
        if self.observed_canonical.as_deref() == Some(current) {
            return SyncChange::None;
        }
        self.observed_canonical = Some(current.to_string());
        self.rename.on_canonical_changed(current);
        SyncChange::CanonicalChanged
    }

    /// The registry refused a rename this session sent; show the real name again.
    ///
    /// A draft typed since then is left alone.
    pub fn on_rename_rejected<N>(&mut self, names: &N)
    where
        N: WidgetNames + ?Sized,
    {
        if self.gate.is_editing() {
            return;
        }
        if let Some(canonical) = names.canonical_name(&self.widget_id) {
            self.rename.abandon(canonical);
        }
    }

    /// Tear the session down, committing once if an edit is still open.
    pub fn unmount<N>(mut self, names: &N, dispatch: &mut dyn RenameDispatch) -> Option<CommitOutcome>
    where
        N: WidgetNames + ?Sized,
    {
        let outcome = self.gate.exit(ExitTrigger::Teardown, &mut self.rename, names, dispatch);
        tracing::debug!(widget_id = %self.widget_id, ?outcome, "Title unmounted");
        outcome
    }
}

#[cfg(test)]
#[path = "title_session_tests.rs"]
mod title_session_tests;
