//! Gemini `generateContent` backend.
//!
//! Each action is one POST to `{base_url}/v1beta/models/{model}:generateContent`
//! with a system instruction, the user parts, and a generation config that
//! pins the response to JSON matching a declared schema.

use async_trait::async_trait;
use ikasnova_common::{EducationalStage, Locale};
use ikasnova_model::{Activity, LearningSituation};
use reqwest::{header, Client};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, info, warn};

use crate::prompts::{self, Prompt};
use crate::schema;
use crate::traits::{ContentProvider, GenerateRequest, ProviderError};
use crate::upload::UploadedFile;

pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";
pub const DEFAULT_API_KEY_ENV: &str = "GEMINI_API_KEY";

/// Connection settings for [`GeminiProvider`]
#[derive(Debug, Clone)]
pub struct GeminiSettings {
    pub base_url: String,
    pub model: String,
    /// Resolved key, or `None` when the environment had none
    pub api_key: Option<String>,
    /// Name of the variable the key should come from, for error messages
    pub api_key_env: String,
    pub timeout: Duration,
}

impl Default for GeminiSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            api_key: None,
            api_key_env: DEFAULT_API_KEY_ENV.to_string(),
            timeout: Duration::from_secs(120),
        }
    }
}

/// Gemini-backed content provider.
pub struct GeminiProvider {
    client: Client,
    settings: GeminiSettings,
}

impl GeminiProvider {
    pub fn new(settings: GeminiSettings) -> Result<Self, ProviderError> {
        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::CONTENT_TYPE,
            header::HeaderValue::from_static("application/json"),
        );

        let client = Client::builder()
            .default_headers(headers)
            .timeout(settings.timeout)
            .build()
            .map_err(|e| ProviderError::Network(e.to_string()))?;

        Ok(Self { client, settings })
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.settings.base_url.trim_end_matches('/'),
            self.settings.model
        )
    }

    fn api_key(&self) -> Result<&str, ProviderError> {
        self.settings
            .api_key
            .as_deref()
            .filter(|k| !k.is_empty())
            .ok_or_else(|| ProviderError::MissingCredentials(self.settings.api_key_env.clone()))
    }

    /// Send one request and return the concatenated text of the first candidate
    async fn generate_content(
        &self,
        action: &'static str,
        prompt: Prompt,
        inline: Option<&UploadedFile>,
        response_schema: serde_json::Value,
    ) -> Result<String, ProviderError> {
        let api_key = self.api_key()?;

        let mut parts = Vec::new();
        if let Some(file) = inline {
            parts.push(Part::inline(file));
        }
        parts.push(Part::text(prompt.user));

        let body = GenerateContentRequest {
            system_instruction: Content {
                role: None,
                parts: vec![Part::text(prompt.system)],
            },
            contents: vec![Content {
                role: Some("user".to_string()),
                parts,
            }],
            generation_config: GenerationConfig {
                response_mime_type: "application/json".to_string(),
                response_schema,
                temperature: prompt.temperature,
            },
        };

        info!(
            action,
            model = %self.settings.model,
            temperature = prompt.temperature,
            "calling provider"
        );

        let response = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| ProviderError::Network(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            warn!(action, status, "provider request failed");
            return Err(ProviderError::Http { status, body });
        }

        let parsed: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| ProviderError::Malformed(e.to_string()))?;

        let text: String = parsed
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content)
            .map(|content| {
                content
                    .parts
                    .into_iter()
                    .filter_map(|p| p.text)
                    .collect::<String>()
            })
            .unwrap_or_default();

        if text.trim().is_empty() {
            return Err(ProviderError::EmptyResponse);
        }

        debug!(action, bytes = text.len(), "provider responded");
        Ok(text)
    }
}

/// Decode the JSON text returned by the provider
pub fn parse_payload<T: DeserializeOwned>(text: &str) -> Result<T, ProviderError> {
    serde_json::from_str(text).map_err(|e| ProviderError::Malformed(e.to_string()))
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest {
    system_instruction: Content,
    contents: Vec<Content>,
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Part {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    inline_data: Option<InlineData>,
}

impl Part {
    fn text(text: String) -> Self {
        Self {
            text: Some(text),
            ..Default::default()
        }
    }

    fn inline(file: &UploadedFile) -> Self {
        Self {
            inline_data: Some(InlineData {
                mime_type: file.mime_type.clone(),
                data: file.data.clone(),
            }),
            ..Default::default()
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct InlineData {
    mime_type: String,
    data: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    response_mime_type: String,
    response_schema: serde_json::Value,
    temperature: f32,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<Content>,
}

#[async_trait]
impl ContentProvider for GeminiProvider {
    fn id(&self) -> &str {
        &self.settings.model
    }

    async fn generate(&self, request: &GenerateRequest) -> Result<LearningSituation, ProviderError> {
        let text = self
            .generate_content(
                "generate",
                prompts::generate(request),
                None,
                schema::document_schema(request.locale),
            )
            .await?;
        parse_payload(&text)
    }

    async fn review(
        &self,
        document: &LearningSituation,
        stage: EducationalStage,
        locale: Locale,
    ) -> Result<LearningSituation, ProviderError> {
        let prompt = prompts::review(document, stage, locale)?;
        let text = self
            .generate_content("review", prompt, None, schema::document_schema(locale))
            .await?;
        parse_payload(&text)
    }

    async fn translate(
        &self,
        document: &LearningSituation,
        target: Locale,
    ) -> Result<LearningSituation, ProviderError> {
        let prompt = prompts::translate(document, target)?;
        let text = self
            .generate_content("translate", prompt, None, schema::document_schema(target))
            .await?;
        parse_payload(&text)
    }

    async fn extract_from_file(
        &self,
        file: &UploadedFile,
        locale: Locale,
        stage: EducationalStage,
    ) -> Result<LearningSituation, ProviderError> {
        let text = self
            .generate_content(
                "extract",
                prompts::extract(locale, stage),
                Some(file),
                schema::document_schema(locale),
            )
            .await?;
        parse_payload(&text)
    }

    async fn generate_activity(
        &self,
        prompt: &str,
        context: &LearningSituation,
        locale: Locale,
    ) -> Result<Activity, ProviderError> {
        let text = self
            .generate_content(
                "activity",
                prompts::activity(prompt, context, locale),
                None,
                schema::activity_schema(None),
            )
            .await?;
        parse_payload(&text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_trims_trailing_slash() {
        let provider = GeminiProvider::new(GeminiSettings {
            base_url: "http://localhost:9999/".to_string(),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(
            provider.endpoint(),
            "http://localhost:9999/v1beta/models/gemini-2.5-flash:generateContent"
        );
        assert_eq!(provider.id(), "gemini-2.5-flash");
    }

    #[test]
    fn test_part_wire_shape() {
        let file = UploadedFile {
            mime_type: "application/pdf".to_string(),
            data: "JVBERi0=".to_string(),
        };
        let json = serde_json::to_value(Part::inline(&file)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "inlineData": { "mimeType": "application/pdf", "data": "JVBERi0=" } })
        );
    }

    #[test]
    fn test_parse_payload_reports_malformed() {
        let err = parse_payload::<LearningSituation>("not json").unwrap_err();
        assert!(matches!(err, ProviderError::Malformed(_)));
    }
}
