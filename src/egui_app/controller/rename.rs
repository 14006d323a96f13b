//! Staging and committing widget renames.

use crate::widgets::naming::sanitize_widget_name;
use crate::widgets::{CommandSender, RegistryCommand, WidgetId, WidgetNames};

/// Receiver of rename mutations. Dispatch is one-way: nothing comes back.
pub trait RenameDispatch {
    fn commit_mutation(&mut self, widget_id: &WidgetId, new_name: &str);
}

impl RenameDispatch for CommandSender {
    fn commit_mutation(&mut self, widget_id: &WidgetId, new_name: &str) {
        self.send(RegistryCommand::Rename {
            widget_id: widget_id.clone(),
            new_name: new_name.to_string(),
        });
    }
}

/// Result of a commit attempt.
#[must_use]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CommitOutcome {
    /// Nothing was dispatched and no state changed.
    NoOp(NoOpReason),
    /// The name is used by a sibling. The display reverted, but the mutation
    /// was still sent so the registry can make the final call.
    RejectedDuplicate,
    /// The mutation was sent and the staged name now shows the new value.
    Accepted,
}

impl CommitOutcome {
    /// Whether a mutation request went out.
    pub fn dispatched(self) -> bool {
        !matches!(self, CommitOutcome::NoOp(_))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoOpReason {
    /// No widget to rename, or it no longer exists.
    MissingTarget,
    /// Candidate was absent or blank.
    Empty,
    /// Candidate matches the current name after trimming.
    Unchanged,
    /// Candidate was already committed during this mount.
    AlreadyCommitted,
}

/// Owns the in-progress name for one widget and decides when to commit it.
#[derive(Debug)]
pub struct RenameController {
    widget_id: Option<WidgetId>,
    staged: String,
    last_committed: Option<String>,
    max_name_len: usize,
}

impl RenameController {
    /// Start staging from the widget's current canonical name.
    pub fn new(widget_id: Option<WidgetId>, canonical: &str, max_name_len: usize) -> Self {
        Self {
            widget_id,
            staged: canonical.to_string(),
            last_committed: None,
            max_name_len,
        }
    }

    pub fn widget_id(&self) -> Option<&WidgetId> {
        self.widget_id.as_ref()
    }

    /// The value currently shown in the name field.
    pub fn staged_name(&self) -> &str {
        &self.staged
    }

    pub fn last_committed(&self) -> Option<&str> {
        self.last_committed.as_deref()
    }

    /// Replace the staged value with sanitized keystroke input.
    pub fn stage(&mut self, raw_input: &str) {
        self.staged = sanitize_widget_name(raw_input, self.max_name_len);
    }

    /// The canonical name changed outside this controller; unsaved edits are dropped.
    pub fn on_canonical_changed(&mut self, canonical: &str) {
        if self.staged != canonical {
            tracing::debug!(
                staged = %self.staged,
                %canonical,
                "Canonical name changed; discarding staged edit"
            );
        }
        self.staged = canonical.to_string();
    }

    /// Throw away the staged edit.
    pub fn abandon(&mut self, canonical: &str) {
        self.staged = canonical.to_string();
    }

    /// Validate `candidate` against the registry and dispatch it if warranted.
    pub fn commit<N>(
        &mut self,
        candidate: Option<&str>,
        names: &N,
        dispatch: &mut dyn RenameDispatch,
    ) -> CommitOutcome
    where
        N: WidgetNames + ?Sized,
    {
        let Some(widget_id) = self.widget_id.as_ref() else {
            return CommitOutcome::NoOp(NoOpReason::MissingTarget);
        };
        let Some(canonical) = names.canonical_name(widget_id) else {
            return CommitOutcome::NoOp(NoOpReason::MissingTarget);
        };
        let candidate = candidate.map(str::trim).unwrap_or_default();
        if candidate.is_empty() {
            return CommitOutcome::NoOp(NoOpReason::Empty);
        }
        if candidate == canonical.trim() {
            return CommitOutcome::NoOp(NoOpReason::Unchanged);
        }
        if self.last_committed.as_deref() == Some(candidate) {
            return CommitOutcome::NoOp(NoOpReason::AlreadyCommitted);
        }

        self.last_committed = Some(candidate.to_string());
        let outcome = if names.existing_names().contains(candidate) {
            tracing::info!(
                widget_id = %widget_id,
                %candidate,
                "Name already in use; reverting display and forwarding to registry"
            );
            self.staged = canonical.to_string();
            CommitOutcome::RejectedDuplicate
        } else {
            self.staged = candidate.to_string();
            CommitOutcome::Accepted
        };
        tracing::debug!(widget_id = %widget_id, new_name = %candidate, ?outcome, "Rename dispatched");
        dispatch.commit_mutation(widget_id, candidate);
        outcome
    }
}

#[cfg(test)]
#[path = "rename_tests.rs"]
mod rename_tests;
