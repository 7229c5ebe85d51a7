//! Gemini backend against a local mock server

use ikasnova_common::{EducationalStage, Locale};
use ikasnova_model::LearningSituation;
use ikasnova_provider::{
    ContentProvider, GeminiProvider, GeminiSettings, GenerateRequest, ProviderError, UploadedFile,
};
use serde_json::json;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn settings(server: &MockServer, api_key: Option<&str>) -> GeminiSettings {
    GeminiSettings {
        base_url: server.uri(),
        api_key: api_key.map(str::to_string),
        ..Default::default()
    }
}

fn candidate(text: &str) -> serde_json::Value {
    json!({
        "candidates": [
            { "content": { "role": "model", "parts": [ { "text": text } ] } }
        ]
    })
}

fn request() -> GenerateRequest {
    GenerateRequest {
        grade: "6º Primaria".to_string(),
        subject: "Ciencias Sociales".to_string(),
        topic: "La Edad Media en Navarra".to_string(),
        stage: EducationalStage::Primaria,
        locale: Locale::Es,
        extra_notes: None,
    }
}

const MODEL_PATH: &str = "/v1beta/models/gemini-2.5-flash:generateContent";

#[tokio::test]
async fn test_generate_parses_document() {
    let server = MockServer::start().await;
    let payload = json!({
        "title": "Castillos y villas",
        "stageArea": "6º Primaria - Ciencias Sociales",
        "stageObjectives": ["h) Conocer la historia"],
        "activities": [ { "description": "Visita virtual", "sessions": "2" } ]
    })
    .to_string();

    Mock::given(method("POST"))
        .and(path(MODEL_PATH))
        .and(header("x-goog-api-key", "secret"))
        .and(body_partial_json(json!({
            "generationConfig": { "responseMimeType": "application/json" }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(candidate(&payload)))
        .expect(1)
        .mount(&server)
        .await;

    let provider = GeminiProvider::new(settings(&server, Some("secret"))).unwrap();
    let doc = provider.generate(&request()).await.unwrap();

    assert_eq!(doc.title, "Castillos y villas");
    assert_eq!(doc.stage_objectives, vec!["h) Conocer la historia"]);
    assert_eq!(doc.activities[0].sessions, "2");
    assert_eq!(doc.method, "");
}

#[tokio::test]
async fn test_extract_sends_inline_file_first() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(MODEL_PATH))
        .and(body_partial_json(json!({
            "contents": [ { "role": "user", "parts": [
                { "inlineData": { "mimeType": "application/pdf", "data": "JVBERi0xLjQ=" } },
                { "text": "Analiza el documento, adapta el contenido al currículo de Navarra y rellena el JSON." }
            ] } ]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(candidate(r#"{"title":"Extraída"}"#)))
        .mount(&server)
        .await;

    let provider = GeminiProvider::new(settings(&server, Some("secret"))).unwrap();
    let file = UploadedFile::from_base64("JVBERi0xLjQ=", "application/pdf").unwrap();
    let doc = provider
        .extract_from_file(&file, Locale::Es, EducationalStage::Eso)
        .await
        .unwrap();

    assert_eq!(doc.title, "Extraída");
}

#[tokio::test]
async fn test_http_error_is_reported() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(MODEL_PATH))
        .respond_with(ResponseTemplate::new(403).set_body_string("API key not valid"))
        .mount(&server)
        .await;

    let provider = GeminiProvider::new(settings(&server, Some("bad"))).unwrap();
    let err = provider
        .review(&LearningSituation::default(), EducationalStage::Eso, Locale::Es)
        .await
        .unwrap_err();

    assert_eq!(
        err,
        ProviderError::Http {
            status: 403,
            body: "API key not valid".to_string()
        }
    );
    assert!(err.is_connection());
}

#[tokio::test]
async fn test_empty_candidates_is_empty_response() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(MODEL_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "candidates": [] })))
        .mount(&server)
        .await;

    let provider = GeminiProvider::new(settings(&server, Some("secret"))).unwrap();
    let err = provider
        .translate(&LearningSituation::default(), Locale::Eu)
        .await
        .unwrap_err();

    assert_eq!(err, ProviderError::EmptyResponse);
}

#[tokio::test]
async fn test_non_json_text_is_malformed() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(MODEL_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(candidate("Lo siento, no puedo.")))
        .mount(&server)
        .await;

    let provider = GeminiProvider::new(settings(&server, Some("secret"))).unwrap();
    let err = provider
        .generate_activity("Juego de rol", &LearningSituation::default(), Locale::Es)
        .await
        .unwrap_err();

    assert!(matches!(err, ProviderError::Malformed(_)));
}

#[tokio::test]
async fn test_missing_key_fails_before_request() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let provider = GeminiProvider::new(settings(&server, None)).unwrap();
    let err = provider.generate(&request()).await.unwrap_err();

    assert_eq!(
        err,
        ProviderError::MissingCredentials("GEMINI_API_KEY".to_string())
    );
}
