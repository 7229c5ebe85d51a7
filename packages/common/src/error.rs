use thiserror::Error;

/// Errors raised while reading the shared vocabulary (locales, stages, modes)
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommonError {
    #[error("Unknown locale: {0} (expected \"es\" or \"eu\")")]
    UnknownLocale(String),

    #[error("Unknown educational stage: {0}")]
    UnknownStage(String),

    #[error("Unknown generation mode: {0} (expected auto, manual or upload)")]
    UnknownMode(String),
}
