use ikasnova_common::{EducationalStage, GenerationMode, Labels, Locale};
use ikasnova_editor::SuggestionTarget;
use ikasnova_export::ExportFormat;
use ikasnova_model::{Activity, LearningSituation, TextField};
use ikasnova_provider::{MockProvider, ProviderError, UploadedFile};
use ikasnova_workspace::{ActionKind, CreateRequest, Workspace, WorkspaceError};
use std::time::Duration;

fn request() -> CreateRequest {
    CreateRequest {
        grade: "3º Primaria".to_string(),
        subject: "Ciencias".to_string(),
        topic: "El ciclo del agua".to_string(),
        extra_notes: None,
    }
}

fn drafted() -> LearningSituation {
    LearningSituation {
        situation_number: "7".to_string(),
        title: "Gotas viajeras".to_string(),
        description_goal: "Observamos la lluvia durante una semana.".to_string(),
        activities: vec![Activity {
            description: "Construir un pluviómetro".to_string(),
            sessions: "2".to_string(),
            ..Default::default()
        }],
        ..Default::default()
    }
}

fn workspace_with(provider: MockProvider, mode: GenerationMode) -> Workspace<MockProvider> {
    let ws = Workspace::new(provider, Locale::Es);
    ws.update_store(|s| {
        s.select_stage(Some(EducationalStage::Primaria));
        s.select_mode(Some(mode));
    });
    ws
}

#[tokio::test]
async fn test_auto_generation_loads_document_read_only() {
    let ws = workspace_with(MockProvider::new().with_generated(drafted()), GenerationMode::Auto);

    ws.create(request()).await.unwrap();

    let store = ws.snapshot();
    assert_eq!(store.document(), Some(&drafted()));
    assert!(!store.is_editing());
    assert!(ws.last_error().is_none());
}

#[tokio::test]
async fn test_manual_mode_skips_provider() {
    let ws = workspace_with(MockProvider::new(), GenerationMode::Manual);

    ws.create(request()).await.unwrap();

    assert_eq!(ws.provider().call_count(), 0);
    let store = ws.snapshot();
    assert!(store.is_editing());
    assert_eq!(store.document().map(|d| d.title.as_str()), Some("El ciclo del agua"));
}

#[tokio::test]
async fn test_manual_mode_requires_stage() {
    let ws = Workspace::new(MockProvider::new(), Locale::Es);
    ws.update_store(|s| s.select_mode(Some(GenerationMode::Manual)));

    let err = ws.create(request()).await.unwrap_err();

    assert!(matches!(err, WorkspaceError::StageMissing));
    assert!(ws.snapshot().document().is_none());
    assert_eq!(
        ws.last_error().as_deref(),
        Some(Labels::for_locale(Locale::Es).err_stage_missing)
    );
}

#[tokio::test]
async fn test_manual_mode_requires_every_form_field() {
    let ws = workspace_with(MockProvider::new(), GenerationMode::Manual);

    let err = ws.create(CreateRequest::default()).await.unwrap_err();
    assert!(matches!(err, WorkspaceError::MissingInput("grade")));

    let err = ws
        .create(CreateRequest {
            subject: String::new(),
            ..request()
        })
        .await
        .unwrap_err();
    assert!(matches!(err, WorkspaceError::MissingInput("subject")));

    assert!(ws.snapshot().document().is_none());
    assert_eq!(ws.snapshot().version(), 0);
    assert_eq!(
        ws.last_error().as_deref(),
        Some(Labels::for_locale(Locale::Es).err_missing_input)
    );
}

#[tokio::test]
async fn test_generation_requires_stage() {
    let ws = Workspace::new(MockProvider::new(), Locale::Es);
    ws.update_store(|s| s.select_mode(Some(GenerationMode::Auto)));

    let err = ws.create(request()).await.unwrap_err();

    assert!(matches!(err, WorkspaceError::StageMissing));
    assert_eq!(ws.provider().call_count(), 0);
    assert_eq!(
        ws.last_error().as_deref(),
        Some(Labels::for_locale(Locale::Es).err_stage_missing)
    );
}

#[tokio::test]
async fn test_generation_requires_topic() {
    let ws = workspace_with(MockProvider::new(), GenerationMode::Auto);
    let err = ws
        .create(CreateRequest {
            topic: "  ".to_string(),
            ..request()
        })
        .await
        .unwrap_err();
    assert!(matches!(err, WorkspaceError::MissingInput("topic")));
}

#[tokio::test]
async fn test_review_records_suggestions_and_fills_gaps() {
    let mut reviewed = drafted();
    reviewed.title = "Gotas que viajan".to_string();
    reviewed.method = "Aprendizaje basado en proyectos".to_string();

    let ws = workspace_with(
        MockProvider::new()
            .with_generated(drafted())
            .with_reviewed(reviewed),
        GenerationMode::Auto,
    );
    ws.create(request()).await.unwrap();

    assert!(ws.review().await.unwrap());

    let store = ws.snapshot();
    let doc = store.document().unwrap();
    assert_eq!(doc.title, "Gotas viajeras");
    assert_eq!(doc.method, "Aprendizaje basado en proyectos");
    assert_eq!(
        store.overlay().and_then(|o| o.title.as_deref()),
        Some("Gotas que viajan")
    );
    assert!(store.is_editing());

    let target = SuggestionTarget::Text {
        field: TextField::Title,
    };
    assert!(ws.update_store(|s| s.accept_pending(target)));
    assert_eq!(ws.snapshot().document().unwrap().title, "Gotas que viajan");
    assert!(!ws.snapshot().has_suggestions());
}

#[tokio::test]
async fn test_review_without_document() {
    let ws = workspace_with(MockProvider::new(), GenerationMode::Auto);
    let err = ws.review().await.unwrap_err();
    assert!(matches!(err, WorkspaceError::NoDocument));
    assert_eq!(
        ws.last_error().as_deref(),
        Some(Labels::for_locale(Locale::Es).err_no_document)
    );
}

#[tokio::test]
async fn test_failed_review_leaves_draft_untouched() {
    let ws = workspace_with(
        MockProvider::new().with_failure(ProviderError::Http {
            status: 500,
            body: "internal".to_string(),
        }),
        GenerationMode::Manual,
    );
    ws.create(request()).await.unwrap();
    let before = ws.snapshot();

    assert!(ws.review().await.is_err());

    let after = ws.snapshot();
    assert_eq!(after.document(), before.document());
    assert_eq!(after.version(), before.version());
    assert_eq!(
        ws.last_error().as_deref(),
        Some(Labels::for_locale(Locale::Es).err_review)
    );

    ws.dismiss_error();
    assert!(ws.last_error().is_none());
}

#[tokio::test]
async fn test_connection_failure_message() {
    let ws = workspace_with(
        MockProvider::new().with_failure(ProviderError::MissingCredentials("GEMINI_API_KEY".into())),
        GenerationMode::Auto,
    );
    assert!(ws.create(request()).await.is_err());
    assert_eq!(
        ws.last_error().as_deref(),
        Some(Labels::for_locale(Locale::Es).err_connection)
    );
}

#[tokio::test]
async fn test_same_action_cannot_overlap() {
    let ws = workspace_with(
        MockProvider::new()
            .with_generated(drafted())
            .with_delay(Duration::from_millis(50)),
        GenerationMode::Auto,
    );
    ws.create(request()).await.unwrap();

    let (first, second) = tokio::join!(ws.review(), ws.review());

    assert!(first.is_ok());
    assert!(matches!(second, Err(WorkspaceError::Busy(ActionKind::Review))));
    // generate + one review
    assert_eq!(ws.provider().call_count(), 2);
    assert!(ws.last_error().is_none());
    assert!(!ws.loading().any());
}

#[tokio::test]
async fn test_different_actions_may_overlap() {
    let ws = workspace_with(
        MockProvider::new()
            .with_generated(drafted())
            .with_delay(Duration::from_millis(20)),
        GenerationMode::Auto,
    );
    ws.create(request()).await.unwrap();

    let (review, activity) = tokio::join!(ws.review(), ws.generate_activity("Salida al río"));

    assert!(review.is_ok());
    assert!(activity.is_ok());
    assert_eq!(ws.snapshot().document().unwrap().activities.len(), 2);
}

#[tokio::test]
async fn test_translation_switches_locale_and_keeps_numbers() {
    let mut translated = drafted();
    translated.situation_number = "zazpi".to_string();
    translated.title = "Tanta bidaiariak".to_string();
    translated.activities[0].sessions = "bi".to_string();

    let ws = workspace_with(
        MockProvider::new()
            .with_generated(drafted())
            .with_translated(translated),
        GenerationMode::Auto,
    );
    ws.create(request()).await.unwrap();

    assert_eq!(ws.translate().await.unwrap(), Locale::Eu);

    let store = ws.snapshot();
    let doc = store.document().unwrap();
    assert_eq!(store.locale(), Locale::Eu);
    assert_eq!(doc.title, "Tanta bidaiariak");
    assert_eq!(doc.situation_number, "7");
    assert_eq!(doc.activities[0].sessions, "2");
}

#[tokio::test]
async fn test_translation_discards_pending_suggestions() {
    let mut reviewed = drafted();
    reviewed.title = "Otra propuesta".to_string();
    let ws = workspace_with(
        MockProvider::new()
            .with_generated(drafted())
            .with_reviewed(reviewed),
        GenerationMode::Auto,
    );
    ws.create(request()).await.unwrap();
    assert!(ws.review().await.unwrap());

    ws.translate().await.unwrap();

    assert!(ws.snapshot().overlay().is_none());
}

#[tokio::test]
async fn test_generated_activity_is_appended() {
    let activity = Activity {
        description: "Maqueta del ciclo".to_string(),
        sessions: "3".to_string(),
        ..Default::default()
    };
    let ws = workspace_with(
        MockProvider::new()
            .with_generated(drafted())
            .with_activity(activity.clone()),
        GenerationMode::Auto,
    );
    ws.create(request()).await.unwrap();

    ws.generate_activity("maqueta").await.unwrap();

    let store = ws.snapshot();
    assert_eq!(store.document().unwrap().activities.last(), Some(&activity));
}

#[tokio::test]
async fn test_blank_activity_prompt_is_refused() {
    let ws = workspace_with(MockProvider::new(), GenerationMode::Manual);
    ws.create(request()).await.unwrap();

    let err = ws.generate_activity("   ").await.unwrap_err();
    assert!(matches!(err, WorkspaceError::MissingInput("prompt")));
    assert_eq!(ws.provider().call_count(), 0);
}

#[tokio::test]
async fn test_import_switches_to_upload_mode() {
    let ws = Workspace::new(MockProvider::new().with_extracted(drafted()), Locale::Es);
    ws.update_store(|s| s.select_stage(Some(EducationalStage::Eso)));
    let file = UploadedFile::from_bytes(b"\x89PNG", "image/png").unwrap();

    ws.import_file(file).await.unwrap();

    assert_eq!(ws.snapshot().mode(), Some(GenerationMode::Upload));
}

#[tokio::test]
async fn test_import_opens_editor() {
    let ws = workspace_with(
        MockProvider::new().with_extracted(drafted()),
        GenerationMode::Upload,
    );
    let file = UploadedFile::from_bytes(b"%PDF-1.4", "application/pdf").unwrap();

    ws.import_file(file).await.unwrap();

    let store = ws.snapshot();
    assert_eq!(store.document(), Some(&drafted()));
    assert!(store.is_editing());
}

#[tokio::test]
async fn test_upload_mode_does_not_create_from_form() {
    let ws = workspace_with(MockProvider::new(), GenerationMode::Upload);
    let err = ws.create(request()).await.unwrap_err();
    assert!(matches!(
        err,
        WorkspaceError::UnsupportedMode(GenerationMode::Upload)
    ));
}

#[tokio::test]
async fn test_export_writes_named_file() {
    let dir = tempfile::tempdir().unwrap();
    let ws = workspace_with(MockProvider::new().with_generated(drafted()), GenerationMode::Auto);
    ws.create(request()).await.unwrap();

    let path = ws.export(dir.path(), ExportFormat::Markdown).unwrap();

    assert!(path.exists());
    let content = std::fs::read_to_string(&path).unwrap();
    assert!(content.starts_with("# Gotas viajeras"));
}

#[tokio::test]
async fn test_export_without_document() {
    let dir = tempfile::tempdir().unwrap();
    let ws = workspace_with(MockProvider::new(), GenerationMode::Auto);
    assert!(matches!(
        ws.export(dir.path(), ExportFormat::Json),
        Err(WorkspaceError::NoDocument)
    ));
    assert_eq!(
        ws.last_error().as_deref(),
        Some(Labels::for_locale(Locale::Es).err_no_document)
    );
}

#[tokio::test]
async fn test_reset_returns_to_stage_selection() {
    let ws = workspace_with(MockProvider::new().with_generated(drafted()), GenerationMode::Auto);
    ws.create(request()).await.unwrap();

    ws.reset();

    let store = ws.snapshot();
    assert!(store.document().is_none());
    assert!(store.stage().is_none());
    assert_eq!(store.locale(), Locale::Es);
}
