//! # Field-level Edits
//!
//! Operations a teacher performs by hand on the draft while editing mode is
//! on. Each edit is validated against the document before it is applied, so
//! a rejected edit leaves the document untouched.
//!
//! ### SetText / SetList
//! - Atomic replacement of the whole value
//!
//! ### SetListFromText
//! - One element per non-blank line of the editor text
//!
//! ### SetActivityField / RemoveActivity
//! - Addressed by position; fails when the index is past the end
//!
//! ### AddActivity / AppendActivity
//! - Always succeed, adding at the end of the sequence

use ikasnova_model::{list_from_text, Activity, ActivityField, LearningSituation, ListField, TextField};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// User edit on a draft document
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Edit {
    /// Replace a scalar field
    #[serde(rename_all = "camelCase")]
    SetText { field: TextField, value: String },

    /// Replace a list field
    #[serde(rename_all = "camelCase")]
    SetList { field: ListField, items: Vec<String> },

    /// Replace a list field from multi-line text
    #[serde(rename_all = "camelCase")]
    SetListFromText { field: ListField, text: String },

    /// Replace one field of one activity
    #[serde(rename_all = "camelCase")]
    SetActivityField {
        index: usize,
        field: ActivityField,
        value: String,
    },

    /// Append a blank activity
    AddActivity,

    /// Remove the activity at `index`
    #[serde(rename_all = "camelCase")]
    RemoveActivity { index: usize },

    /// Append a fully formed activity
    #[serde(rename_all = "camelCase")]
    AppendActivity { activity: Activity },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EditError {
    #[error("Activity {index} does not exist (document has {len})")]
    ActivityOutOfRange { index: usize, len: usize },
}

impl Edit {
    /// Apply edit to the document with validation
    pub fn apply(&self, doc: &mut LearningSituation) -> Result<(), EditError> {
        self.validate(doc)?;

        match self {
            Edit::SetText { field, value } => {
                *doc.text_mut(*field) = value.clone();
            }
            Edit::SetList { field, items } => {
                *doc.list_mut(*field) = items.clone();
            }
            Edit::SetListFromText { field, text } => {
                *doc.list_mut(*field) = list_from_text(text);
            }
            Edit::SetActivityField {
                index,
                field,
                value,
            } => {
                *doc.activities[*index].field_mut(*field) = value.clone();
            }
            Edit::AddActivity => {
                doc.activities.push(Activity::default());
            }
            Edit::RemoveActivity { index } => {
                doc.activities.remove(*index);
            }
            Edit::AppendActivity { activity } => {
                doc.activities.push(activity.clone());
            }
        }

        Ok(())
    }

    /// Check the edit can be applied without changing anything
    pub fn validate(&self, doc: &LearningSituation) -> Result<(), EditError> {
        match self {
            Edit::SetActivityField { index, .. } | Edit::RemoveActivity { index } => {
                if *index >= doc.activities.len() {
                    return Err(EditError::ActivityOutOfRange {
                        index: *index,
                        len: doc.activities.len(),
                    });
                }
                Ok(())
            }
            _ => Ok(()),
        }
    }

    /// Whether the edit shifts activity positions
    pub fn reshapes_activities(&self) -> bool {
        matches!(self, Edit::RemoveActivity { .. })
    }
}
