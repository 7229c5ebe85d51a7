//! Error types for the editor

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EditorError {
    #[error("Edit error: {0}")]
    Edit(#[from] crate::edits::EditError),

    #[error("No document loaded")]
    NoDocument,
}
