//! Entry-form state transitions between the draft and the roster store.

use shared::domain::{DraftField, MemberDraft};
use tracing::debug;

/// Where the form sits in its edit cycle. `Clean` means the draft is
/// all-empty, as freshly constructed or immediately after a submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormPhase {
    Clean,
    Editing,
}

/// The entry form's private state: the in-progress draft plus its phase.
///
/// The form validates nothing. Empty fields ride through a submission
/// unchanged; the store accepts them as-is.
pub struct EntryForm {
    draft: MemberDraft,
    phase: FormPhase,
}

impl EntryForm {
    pub fn new() -> Self {
        Self {
            draft: MemberDraft::default(),
            phase: FormPhase::Clean,
        }
    }

    pub fn draft(&self) -> &MemberDraft {
        &self.draft
    }

    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    /// Overwrites exactly the named draft field, leaving the other two
    /// untouched. Any edit moves the form into (or keeps it in) `Editing`,
    /// including an edit that clears the field.
    pub fn apply_edit(&mut self, field: DraftField, value: impl Into<String>) {
        self.draft = std::mem::take(&mut self.draft).with_field(field, value);
        self.phase = FormPhase::Editing;
    }

    /// Hands the current draft off for appending and resets the form to the
    /// all-empty `Clean` phase. The draft leaves unmodified, empty fields
    /// included; submitting twice in a row yields two all-empty drafts.
    pub fn take_submission(&mut self) -> MemberDraft {
        self.phase = FormPhase::Clean;
        let draft = std::mem::take(&mut self.draft);
        debug!(draft_empty = draft.is_empty(), "entry form submitted");
        draft
    }
}

impl Default for EntryForm {
    fn default() -> Self {
        Self::new()
    }
}
