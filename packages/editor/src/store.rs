//! # Draft Store
//!
//! Single owner of the session state: the draft document, its pending
//! suggestions, the editing flag, the active locale and the stage/mode the
//! teacher picked.
//!
//! Every change to the document bumps [`DraftStore::version`], so a
//! presentation layer can tell whether it needs to re-render.

use crate::edits::Edit;
use crate::errors::EditorError;
use crate::overlay::{Suggestion, SuggestionOverlay, SuggestionTarget};
use crate::reconcile;
use ikasnova_common::{EducationalStage, GenerationMode, Locale};
use ikasnova_model::{Activity, LearningSituation};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

/// Session state for one authoring session
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DraftStore {
    document: Option<LearningSituation>,
    overlay: Option<SuggestionOverlay>,
    editing: bool,
    locale: Locale,
    stage: Option<EducationalStage>,
    mode: Option<GenerationMode>,
    version: u64,
}

impl DraftStore {
    pub fn new(locale: Locale) -> Self {
        Self {
            locale,
            ..Default::default()
        }
    }

    pub fn document(&self) -> Option<&LearningSituation> {
        self.document.as_ref()
    }

    pub fn overlay(&self) -> Option<&SuggestionOverlay> {
        self.overlay.as_ref()
    }

    pub fn is_editing(&self) -> bool {
        self.editing
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn stage(&self) -> Option<EducationalStage> {
        self.stage
    }

    pub fn mode(&self) -> Option<GenerationMode> {
        self.mode
    }

    /// Bumped on every document change
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Pending suggestions in document order, empty when there is no overlay
    pub fn suggestions(&self) -> Vec<Suggestion> {
        self.overlay
            .as_ref()
            .map(SuggestionOverlay::suggestions)
            .unwrap_or_default()
    }

    pub fn has_suggestions(&self) -> bool {
        self.overlay.as_ref().is_some_and(|o| !o.is_empty())
    }

    fn set_document(&mut self, document: LearningSituation) {
        self.document = Some(document);
        self.version += 1;
    }

    /// Start from the empty template with editing on
    pub fn start_manual(&mut self, grade: &str, subject: &str, topic: &str) {
        info!(grade, subject, topic, "starting manual draft");
        self.set_document(LearningSituation::template(grade, subject, topic));
        self.overlay = None;
        self.editing = true;
    }

    /// Load a fully generated document for reading
    pub fn load_generated(&mut self, document: LearningSituation) {
        info!(activities = document.activities.len(), "loading generated draft");
        self.set_document(document);
        self.overlay = None;
        self.editing = false;
    }

    /// Load a document extracted from an uploaded file, ready for editing
    pub fn load_extracted(&mut self, document: LearningSituation) {
        info!(activities = document.activities.len(), "loading extracted draft");
        self.set_document(document);
        self.overlay = None;
        self.editing = true;
    }

    /// Reconcile a reviewed proposal against the draft.
    ///
    /// Returns whether any suggestion was recorded. Without a draft nothing
    /// happens and `false` is returned.
    pub fn apply_review(&mut self, proposed: &LearningSituation) -> bool {
        let Some(current) = self.document.as_ref() else {
            warn!("review result dropped: no document loaded");
            return false;
        };

        let outcome = reconcile::reconcile(current, proposed);
        info!(
            suggestions = outcome.overlay.len(),
            "review reconciled into draft"
        );

        self.set_document(outcome.document);
        self.overlay = outcome.has_suggestions.then_some(outcome.overlay);
        self.editing = true;
        outcome.has_suggestions
    }

    /// Replace the draft with its translation and switch locale.
    ///
    /// Pending suggestions are in the old language and are discarded.
    pub fn apply_translation(&mut self, document: LearningSituation, target: Locale) {
        info!(from = %self.locale, to = %target, "applying translation");
        self.set_document(document);
        self.overlay = None;
        self.locale = target;
    }

    /// Append an activity at the end of the sequence
    pub fn append_activity(&mut self, activity: Activity) -> Result<(), EditorError> {
        self.apply_edit(Edit::AppendActivity { activity })
    }

    /// Apply a field-level user edit
    pub fn apply_edit(&mut self, edit: Edit) -> Result<(), EditorError> {
        let document = self.document.as_mut().ok_or(EditorError::NoDocument)?;
        edit.apply(document)?;
        self.version += 1;
        debug!(version = self.version, "edit applied");

        if edit.reshapes_activities() {
            if let Some(overlay) = self.overlay.as_ref() {
                let stale: Vec<usize> = overlay.activities.keys().copied().collect();
                if !stale.is_empty() {
                    warn!(
                        indices = ?stale,
                        "activity list reshaped while activity suggestions are pending; \
                         suggestions keep their original positions"
                    );
                }
            }
        }

        Ok(())
    }

    /// Replace the whole document with a user-edited version
    pub fn replace_document(&mut self, document: LearningSituation) {
        self.set_document(document);
    }

    /// Write a suggested value into the draft and clear it from the overlay.
    ///
    /// Returns `false` when there is no draft or no overlay.
    pub fn accept_suggestion(&mut self, suggestion: Suggestion) -> bool {
        let (Some(document), Some(overlay)) = (self.document.as_ref(), self.overlay.as_ref()) else {
            debug!("nothing to accept");
            return false;
        };

        debug!(suggestion = ?suggestion.target(), "accepting suggestion");
        let (document, overlay) =
            reconcile::accept_suggestion(document.clone(), overlay.clone(), suggestion);
        self.set_document(document);
        self.overlay = Some(overlay);
        true
    }

    /// Accept whatever value is pending at `target`.
    ///
    /// Returns `false` when nothing is pending there.
    pub fn accept_pending(&mut self, target: SuggestionTarget) -> bool {
        match self.overlay.as_ref().and_then(|o| o.get(target)) {
            Some(suggestion) => self.accept_suggestion(suggestion),
            None => false,
        }
    }

    /// Drop the pending value at `target`. The draft is not modified.
    pub fn reject_suggestion(&mut self, target: SuggestionTarget) -> bool {
        let Some(overlay) = self.overlay.take() else {
            return false;
        };

        let had_target = overlay.get(target).is_some();
        debug!(suggestion = ?target, "rejecting suggestion");
        self.overlay = Some(reconcile::reject_suggestion(overlay, target));
        had_target
    }

    pub fn set_editing(&mut self, editing: bool) {
        self.editing = editing;
    }

    pub fn toggle_editing(&mut self) -> bool {
        self.editing = !self.editing;
        self.editing
    }

    pub fn set_locale(&mut self, locale: Locale) {
        self.locale = locale;
    }

    pub fn toggle_locale(&mut self) -> Locale {
        self.locale = self.locale.other();
        self.locale
    }

    pub fn select_stage(&mut self, stage: Option<EducationalStage>) {
        self.stage = stage;
    }

    pub fn select_mode(&mut self, mode: Option<GenerationMode>) {
        self.mode = mode;
    }

    /// Back to the initial state. The locale is kept.
    pub fn reset(&mut self) {
        info!("resetting draft store");
        if self.document.take().is_some() {
            self.version += 1;
        }
        self.overlay = None;
        self.stage = None;
        self.mode = None;
        self.editing = false;
    }
}
