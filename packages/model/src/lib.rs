//! # Ikasnova Model
//!
//! Data definitions for a Learning Situation (*Situación de Aprendizaje*)
//! and its activities. No behavior beyond field access lives here; the
//! reconciliation rules are in `ikasnova-editor`.

mod document;
mod fields;

pub use document::{list_from_text, Activity, LearningSituation, TEMPLATE_ACTIVITY_COUNT};
pub use fields::{ActivityField, DocumentField, ListField, TextField, UnknownField};
