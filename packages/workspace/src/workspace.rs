//! # Authoring workspace
//!
//! Runs provider-backed actions against one [`DraftStore`]:
//!
//! 1. refuse if the same action class is already running
//! 2. validate inputs and snapshot what the provider needs
//! 3. call the provider without holding the store lock
//! 4. apply the result to the store
//!
//! A failed action leaves the store as it was and records a localized,
//! dismissible message in [`Workspace::last_error`].

use crate::errors::{WorkspaceError, WorkspaceResult};
use crate::loading::{ActionKind, LoadingFlags, LoadingGuard};
use crate::translation::restore_numeric_values;
use ikasnova_common::{EducationalStage, GenerationMode, Locale};
use ikasnova_editor::DraftStore;
use ikasnova_export::{write_export, ExportFormat};
use ikasnova_model::LearningSituation;
use ikasnova_provider::{ContentProvider, GenerateRequest, UploadedFile};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tracing::{info, warn};

/// Form inputs for starting a document
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateRequest {
    pub grade: String,
    pub subject: String,
    pub topic: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extra_notes: Option<String>,
}

#[derive(Debug, Default)]
struct SessionState {
    store: DraftStore,
    last_error: Option<String>,
}

pub struct Workspace<P> {
    provider: P,
    state: Mutex<SessionState>,
    loading: Arc<LoadingFlags>,
}

fn required(value: &str, name: &'static str) -> WorkspaceResult<()> {
    if value.trim().is_empty() {
        Err(WorkspaceError::MissingInput(name))
    } else {
        Ok(())
    }
}

impl<P: ContentProvider> Workspace<P> {
    pub fn new(provider: P, locale: Locale) -> Self {
        Self {
            provider,
            state: Mutex::new(SessionState {
                store: DraftStore::new(locale),
                last_error: None,
            }),
            loading: LoadingFlags::new(),
        }
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    pub fn loading(&self) -> Arc<LoadingFlags> {
        Arc::clone(&self.loading)
    }

    fn lock(&self) -> MutexGuard<'_, SessionState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Read the store
    pub fn with_store<R>(&self, f: impl FnOnce(&DraftStore) -> R) -> R {
        f(&self.lock().store)
    }

    /// Synchronous local changes: edits, accept/reject, toggles
    pub fn update_store<R>(&self, f: impl FnOnce(&mut DraftStore) -> R) -> R {
        f(&mut self.lock().store)
    }

    /// Copy of the current store
    pub fn snapshot(&self) -> DraftStore {
        self.lock().store.clone()
    }

    pub fn last_error(&self) -> Option<String> {
        self.lock().last_error.clone()
    }

    pub fn dismiss_error(&self) {
        self.lock().last_error = None;
    }

    /// Clear the session back to stage selection
    pub fn reset(&self) {
        let mut state = self.lock();
        state.store.reset();
        state.last_error = None;
    }

    fn begin(&self, action: ActionKind) -> WorkspaceResult<LoadingGuard> {
        let guard = self
            .loading
            .begin(action)
            .ok_or(WorkspaceError::Busy(action))?;
        self.lock().last_error = None;
        info!(action = %action, "action started");
        Ok(guard)
    }

    fn finish<T>(&self, action: Option<ActionKind>, result: WorkspaceResult<T>) -> WorkspaceResult<T> {
        if let Err(err) = &result {
            if !matches!(err, WorkspaceError::Busy(_)) {
                let mut state = self.lock();
                let message = err.user_message(action, state.store.locale());
                warn!(action = ?action, error = %err, "action failed");
                state.last_error = Some(message.to_string());
            }
        }
        result
    }

    /// Start a document according to the selected mode.
    ///
    /// Both form modes need a stage and a grade, subject and topic. Manual
    /// mode fills the empty template locally. Auto mode asks the
    /// provider for a complete document. Upload mode goes through
    /// [`Workspace::import_file`] instead.
    pub async fn create(&self, request: CreateRequest) -> WorkspaceResult<()> {
        let mode = self.with_store(DraftStore::mode);
        match mode {
            Some(GenerationMode::Manual) => {
                self.dismiss_error();
                let result = self.validate_form(&request).map(|_| {
                    self.update_store(|store| {
                        store.start_manual(&request.grade, &request.subject, &request.topic)
                    })
                });
                self.finish(None, result)
            }
            Some(GenerationMode::Auto) => {
                let result = self.generate(request).await;
                self.finish(Some(ActionKind::Generate), result)
            }
            Some(GenerationMode::Upload) => {
                self.finish(None, Err(WorkspaceError::UnsupportedMode(GenerationMode::Upload)))
            }
            None => self.finish(None, Err(WorkspaceError::ModeMissing)),
        }
    }

    /// Stage selected and every form field filled in
    fn validate_form(&self, request: &CreateRequest) -> WorkspaceResult<EducationalStage> {
        let stage = self
            .with_store(DraftStore::stage)
            .ok_or(WorkspaceError::StageMissing)?;
        required(&request.grade, "grade")?;
        required(&request.subject, "subject")?;
        required(&request.topic, "topic")?;
        Ok(stage)
    }

    async fn generate(&self, request: CreateRequest) -> WorkspaceResult<()> {
        let _guard = self.begin(ActionKind::Generate)?;

        let stage = self.validate_form(&request)?;
        let locale = self.with_store(DraftStore::locale);

        let document = self
            .provider
            .generate(&GenerateRequest {
                grade: request.grade,
                subject: request.subject,
                topic: request.topic,
                stage,
                locale,
                extra_notes: request.extra_notes,
            })
            .await?;

        self.update_store(|store| store.load_generated(document));
        Ok(())
    }

    /// Ask the provider to review the draft and reconcile its proposal.
    ///
    /// Returns whether suggestions are now pending.
    pub async fn review(&self) -> WorkspaceResult<bool> {
        let result = self.run_review().await;
        self.finish(Some(ActionKind::Review), result)
    }

    async fn run_review(&self) -> WorkspaceResult<bool> {
        let _guard = self.begin(ActionKind::Review)?;

        let (document, stage, locale) = self.with_store(|s| {
            let stage = s.stage().ok_or(WorkspaceError::StageMissing)?;
            let document = s.document().cloned().ok_or(WorkspaceError::NoDocument)?;
            Ok::<_, WorkspaceError>((document, stage, s.locale()))
        })?;

        let proposed = self.provider.review(&document, stage, locale).await?;
        Ok(self.update_store(|store| store.apply_review(&proposed)))
    }

    /// Translate the draft into the other locale and switch to it.
    ///
    /// Returns the new locale.
    pub async fn translate(&self) -> WorkspaceResult<Locale> {
        let result = self.run_translate().await;
        self.finish(Some(ActionKind::Translate), result)
    }

    async fn run_translate(&self) -> WorkspaceResult<Locale> {
        let _guard = self.begin(ActionKind::Translate)?;

        let (document, target) = self.with_store(|s| {
            let document = s.document().cloned().ok_or(WorkspaceError::NoDocument)?;
            Ok::<_, WorkspaceError>((document, s.locale().other()))
        })?;

        let translated = self.provider.translate(&document, target).await?;
        let translated = restore_numeric_values(&document, translated);

        self.update_store(|store| store.apply_translation(translated, target));
        Ok(target)
    }

    /// Develop an activity from a short idea and append it to the draft
    pub async fn generate_activity(&self, prompt: &str) -> WorkspaceResult<()> {
        let result = self.run_generate_activity(prompt).await;
        self.finish(Some(ActionKind::GenerateActivity), result)
    }

    async fn run_generate_activity(&self, prompt: &str) -> WorkspaceResult<()> {
        let _guard = self.begin(ActionKind::GenerateActivity)?;
        required(prompt, "prompt")?;

        let (context, locale) = self.with_store(|s| {
            let document = s.document().cloned().ok_or(WorkspaceError::NoDocument)?;
            Ok::<_, WorkspaceError>((document, s.locale()))
        })?;

        let activity = self
            .provider
            .generate_activity(prompt.trim(), &context, locale)
            .await?;

        self.update_store(|store| store.append_activity(activity))?;
        Ok(())
    }

    /// Extract a document from an uploaded file and open it for editing
    pub async fn import_file(&self, file: UploadedFile) -> WorkspaceResult<()> {
        let result = self.run_import(file).await;
        self.finish(Some(ActionKind::Extract), result)
    }

    async fn run_import(&self, file: UploadedFile) -> WorkspaceResult<()> {
        let _guard = self.begin(ActionKind::Extract)?;

        let (stage, locale) = self.with_store(|s| (s.stage(), s.locale()));
        let stage = stage.ok_or(WorkspaceError::StageMissing)?;

        info!(mime = %file.mime_type, bytes = file.size(), "importing file");
        let document = self.provider.extract_from_file(&file, locale, stage).await?;

        self.update_store(|store| {
            store.select_mode(Some(GenerationMode::Upload));
            store.load_extracted(document);
        });
        Ok(())
    }

    /// Write the draft to `dir` in `format`
    pub fn export(&self, dir: &Path, format: ExportFormat) -> WorkspaceResult<PathBuf> {
        let result = self.with_store(|s| -> WorkspaceResult<PathBuf> {
            let document: &LearningSituation = s.document().ok_or(WorkspaceError::NoDocument)?;
            Ok(write_export(dir, format, document, s.locale())?)
        });
        self.finish(None, result)
    }
}
