//! Core trait for content providers.
//!
//! A provider turns a topic, a draft or an uploaded file into a proposed
//! document. The editor only relies on the shape of what comes back.

use crate::upload::UploadedFile;
use async_trait::async_trait;
use ikasnova_common::{EducationalStage, Locale};
use ikasnova_model::{Activity, LearningSituation};
use serde::{Deserialize, Serialize};

/// Error types for provider calls.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProviderError {
    /// No API key configured
    #[error("API key not found (set {0})")]
    MissingCredentials(String),

    /// Request never got a response
    #[error("Network error: {0}")]
    Network(String),

    /// Non-success HTTP status
    #[error("HTTP {status}: {body}")]
    Http { status: u16, body: String },

    /// Response carried no content
    #[error("Provider returned an empty response")]
    EmptyResponse,

    /// Response content did not match the expected shape
    #[error("Malformed response: {0}")]
    Malformed(String),

    /// Request could not be built
    #[error("Could not encode request: {0}")]
    Encode(String),
}

impl ProviderError {
    /// Failures caused by connectivity or credentials rather than content
    pub fn is_connection(&self) -> bool {
        match self {
            ProviderError::MissingCredentials(_) | ProviderError::Network(_) => true,
            ProviderError::Http { status, .. } => matches!(status, 401 | 403),
            _ => false,
        }
    }
}

/// Inputs for generating a document from scratch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRequest {
    pub grade: String,
    pub subject: String,
    pub topic: String,
    pub stage: EducationalStage,
    pub locale: Locale,
    /// Competencies, criteria or knowledge the teacher wants emphasized
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extra_notes: Option<String>,
}

/// Source of proposed document content.
#[async_trait]
pub trait ContentProvider: Send + Sync {
    /// Provider identifier (e.g. model name)
    fn id(&self) -> &str;

    /// Generate a complete document from a topic.
    async fn generate(&self, request: &GenerateRequest) -> Result<LearningSituation, ProviderError>;

    /// Propose an improved version of `document`.
    async fn review(
        &self,
        document: &LearningSituation,
        stage: EducationalStage,
        locale: Locale,
    ) -> Result<LearningSituation, ProviderError>;

    /// Translate every value of `document` into `target`, keeping its structure.
    async fn translate(
        &self,
        document: &LearningSituation,
        target: Locale,
    ) -> Result<LearningSituation, ProviderError>;

    /// Read a document out of an uploaded PDF or image.
    async fn extract_from_file(
        &self,
        file: &UploadedFile,
        locale: Locale,
        stage: EducationalStage,
    ) -> Result<LearningSituation, ProviderError>;

    /// Develop a single activity from a short idea.
    async fn generate_activity(
        &self,
        prompt: &str,
        context: &LearningSituation,
        locale: Locale,
    ) -> Result<Activity, ProviderError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_connection_errors() {
        assert!(ProviderError::MissingCredentials("GEMINI_API_KEY".into()).is_connection());
        assert!(ProviderError::Network("refused".into()).is_connection());
        assert!(ProviderError::Http {
            status: 403,
            body: String::new()
        }
        .is_connection());
        assert!(!ProviderError::Http {
            status: 500,
            body: String::new()
        }
        .is_connection());
        assert!(!ProviderError::EmptyResponse.is_connection());
    }
}
