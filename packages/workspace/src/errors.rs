use crate::loading::ActionKind;
use ikasnova_common::{Labels, Locale};
use ikasnova_editor::EditorError;
use ikasnova_export::ExportError;
use ikasnova_provider::ProviderError;

#[derive(Debug, thiserror::Error)]
pub enum WorkspaceError {
    #[error("No educational stage selected")]
    StageMissing,

    #[error("No generation mode selected")]
    ModeMissing,

    #[error("Mode {0} does not create documents from a form")]
    UnsupportedMode(ikasnova_common::GenerationMode),

    #[error("Missing required input: {0}")]
    MissingInput(&'static str),

    #[error("No document loaded")]
    NoDocument,

    #[error("A {0} request is already in progress")]
    Busy(ActionKind),

    #[error("Provider error: {0}")]
    Provider(#[from] ProviderError),

    #[error("Editor error: {0}")]
    Editor(#[from] EditorError),

    #[error("Export error: {0}")]
    Export(#[from] ExportError),
}

pub type WorkspaceResult<T> = Result<T, WorkspaceError>;

impl WorkspaceError {
    /// Message shown to the teacher when `action` fails with this error
    pub fn user_message(&self, action: Option<ActionKind>, locale: Locale) -> &'static str {
        let t = Labels::for_locale(locale);
        match self {
            WorkspaceError::StageMissing => t.err_stage_missing,
            WorkspaceError::ModeMissing
            | WorkspaceError::UnsupportedMode(_)
            | WorkspaceError::MissingInput(_) => t.err_missing_input,
            WorkspaceError::NoDocument | WorkspaceError::Editor(EditorError::NoDocument) => {
                t.err_no_document
            }
            WorkspaceError::Provider(err) if err.is_connection() => t.err_connection,
            WorkspaceError::Export(_) => t.err_export,
            _ => match action {
                Some(ActionKind::Generate) => t.err_generate,
                Some(ActionKind::Review) => t.err_review,
                Some(ActionKind::Translate) => t.err_translate,
                Some(ActionKind::GenerateActivity) => t.err_activity,
                Some(ActionKind::Extract) => t.err_extract,
                None => t.err_unexpected,
            },
        }
    }
}
