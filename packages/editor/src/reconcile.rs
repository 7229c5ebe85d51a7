//! # Suggestion Reconciliation
//!
//! Merges a provider-proposed document into the current draft.
//!
//! ## Decision per field
//!
//! | current | proposed | equal | outcome                          |
//! |---------|----------|-------|----------------------------------|
//! | empty   | filled   | -     | auto-fill the draft              |
//! | filled  | any      | no    | record a suggestion, keep draft  |
//! | any     | any      | yes   | nothing                          |
//! | empty   | empty    | no    | nothing                          |
//!
//! A scalar is empty when it has fewer than [`MIN_FILLED_CHARS`] characters
//! after trimming. A list is empty when it has no elements. Activities are
//! matched by position; proposed activities past the end of the draft are
//! appended wholesale and never become suggestions.
//!
//! All functions here are pure: they take the state they need and return the
//! new state.

use crate::overlay::{ActivitySuggestion, Suggestion, SuggestionOverlay, SuggestionTarget};
use ikasnova_model::{ActivityField, LearningSituation, ListField, TextField};
use tracing::{debug, warn};

/// Shortest trimmed text that counts as filled in
pub const MIN_FILLED_CHARS: usize = 3;

/// Result of one reconciliation pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReconcileOutcome {
    pub document: LearningSituation,
    pub overlay: SuggestionOverlay,
    pub has_suggestions: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Decision {
    AutoFill,
    Suggest,
    Keep,
}

fn decide(current_empty: bool, proposed_empty: bool, equal: bool) -> Decision {
    if equal {
        Decision::Keep
    } else if current_empty {
        if proposed_empty {
            Decision::Keep
        } else {
            Decision::AutoFill
        }
    } else {
        Decision::Suggest
    }
}

/// Text with fewer than three non-surrounding-whitespace characters
pub fn is_empty_text(value: &str) -> bool {
    value.trim().chars().count() < MIN_FILLED_CHARS
}

pub fn is_empty_list(items: &[String]) -> bool {
    items.is_empty()
}

/// Reconcile `proposed` against `current`.
///
/// Empty draft fields take the proposed value directly. Filled fields that
/// differ keep their value and the proposal goes to the returned overlay.
pub fn reconcile(current: &LearningSituation, proposed: &LearningSituation) -> ReconcileOutcome {
    let mut document = current.clone();
    let mut overlay = SuggestionOverlay::default();

    for field in TextField::ALL {
        let cur = current.text(field);
        let new = proposed.text(field);
        match decide(is_empty_text(cur), is_empty_text(new), cur == new) {
            Decision::AutoFill => {
                debug!(field = %field, "auto-filling empty field");
                *document.text_mut(field) = new.to_string();
            }
            Decision::Suggest => {
                debug!(field = %field, "recording suggestion");
                *overlay.text_slot(field) = Some(new.to_string());
            }
            Decision::Keep => {}
        }
    }

    for field in ListField::ALL {
        let cur = current.list(field);
        let new = proposed.list(field);
        match decide(is_empty_list(cur), is_empty_list(new), cur == new) {
            Decision::AutoFill => {
                debug!(field = %field, items = new.len(), "auto-filling empty list");
                *document.list_mut(field) = new.to_vec();
            }
            Decision::Suggest => {
                debug!(field = %field, items = new.len(), "recording list suggestion");
                *overlay.list_slot(field) = Some(new.to_vec());
            }
            Decision::Keep => {}
        }
    }

    for (index, new_activity) in proposed.activities.iter().enumerate() {
        let Some(cur_activity) = current.activities.get(index) else {
            debug!(index, "appending proposed activity");
            document.activities.push(new_activity.clone());
            continue;
        };

        let mut entry = ActivitySuggestion::default();
        for field in ActivityField::ALL {
            let cur = cur_activity.field(field);
            let new = new_activity.field(field);
            match decide(is_empty_text(cur), is_empty_text(new), cur == new) {
                Decision::AutoFill => {
                    *document.activities[index].field_mut(field) = new.to_string();
                }
                Decision::Suggest => {
                    *entry.field_slot(field) = Some(new.to_string());
                }
                Decision::Keep => {}
            }
        }

        if !entry.is_empty() {
            debug!(index, keys = entry.len(), "recording activity suggestions");
            overlay.activities.insert(index, entry);
        }
    }

    let has_suggestions = !overlay.is_empty();
    ReconcileOutcome {
        document,
        overlay,
        has_suggestions,
    }
}

/// Write the suggested value into the document and drop it from the overlay.
///
/// Accepting a suggestion for an activity index the document no longer has
/// leaves the document untouched; the overlay key is still cleared.
pub fn accept_suggestion(
    mut document: LearningSituation,
    mut overlay: SuggestionOverlay,
    suggestion: Suggestion,
) -> (LearningSituation, SuggestionOverlay) {
    let target = suggestion.target();

    match suggestion {
        Suggestion::Text { field, value } => {
            *document.text_mut(field) = value;
        }
        Suggestion::List { field, value } => {
            *document.list_mut(field) = value;
        }
        Suggestion::Activity {
            index,
            field,
            value,
        } => match document.activities.get_mut(index) {
            Some(activity) => *activity.field_mut(field) = value,
            None => {
                warn!(
                    index,
                    activities = document.activities.len(),
                    "accepted suggestion targets a missing activity"
                );
            }
        },
    }

    overlay.remove(target);
    (document, overlay)
}

/// Discard the pending value at `target`. The document is not involved.
pub fn reject_suggestion(mut overlay: SuggestionOverlay, target: SuggestionTarget) -> SuggestionOverlay {
    overlay.remove(target);
    overlay
}

#[cfg(test)]
mod tests {
    use super::*;
    use ikasnova_model::Activity;

    #[test]
    fn test_emptiness_threshold() {
        assert!(is_empty_text(""));
        assert!(is_empty_text("  ab  "));
        assert!(!is_empty_text("abc"));
        // counted in characters, not bytes
        assert!(is_empty_text("ñá"));
        assert!(!is_empty_text("ñáé"));
        // two scalars outside the BMP
        assert!(is_empty_text("𝔸𝔹"));
    }

    #[test]
    fn test_decision_table() {
        assert_eq!(decide(true, false, false), Decision::AutoFill);
        assert_eq!(decide(true, true, false), Decision::Keep);
        assert_eq!(decide(false, false, false), Decision::Suggest);
        assert_eq!(decide(false, true, false), Decision::Suggest);
        assert_eq!(decide(false, false, true), Decision::Keep);
        assert_eq!(decide(true, true, true), Decision::Keep);
    }

    #[test]
    fn test_short_text_is_overwritten() {
        let current = LearningSituation {
            situation_number: "1".to_string(),
            ..Default::default()
        };
        let proposed = LearningSituation {
            situation_number: "SdA 12".to_string(),
            ..Default::default()
        };

        let outcome = reconcile(&current, &proposed);
        assert_eq!(outcome.document.situation_number, "SdA 12");
        assert!(!outcome.has_suggestions);
    }

    #[test]
    fn test_extra_activities_appended() {
        let current = LearningSituation {
            activities: vec![Activity::default()],
            ..Default::default()
        };
        let extra = Activity {
            description: "Salida al mercado".to_string(),
            ..Default::default()
        };
        let proposed = LearningSituation {
            activities: vec![Activity::default(), extra.clone()],
            ..Default::default()
        };

        let outcome = reconcile(&current, &proposed);
        assert_eq!(outcome.document.activities, vec![Activity::default(), extra]);
        assert!(outcome.overlay.activities.is_empty());
    }

    #[test]
    fn test_shorter_proposal_keeps_trailing_activities() {
        let kept = Activity {
            description: "Debate final".to_string(),
            ..Default::default()
        };
        let current = LearningSituation {
            activities: vec![Activity::default(), kept.clone()],
            ..Default::default()
        };
        let proposed = LearningSituation::default();

        let outcome = reconcile(&current, &proposed);
        assert_eq!(outcome.document.activities[1], kept);
    }

    #[test]
    fn test_accept_missing_activity_only_clears_overlay() {
        let mut overlay = SuggestionOverlay::default();
        overlay.activities.insert(
            4,
            ActivitySuggestion {
                grouping: Some("Parejas".to_string()),
                ..Default::default()
            },
        );
        let document = LearningSituation::default();

        let (doc, overlay) = accept_suggestion(
            document.clone(),
            overlay,
            Suggestion::Activity {
                index: 4,
                field: ActivityField::Grouping,
                value: "Parejas".to_string(),
            },
        );

        assert_eq!(doc, document);
        assert!(overlay.is_empty());
    }
}
