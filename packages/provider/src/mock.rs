//! Mock provider for testing.

use async_trait::async_trait;
use ikasnova_common::{EducationalStage, Locale};
use ikasnova_model::{Activity, LearningSituation};
use std::sync::atomic::{AtomicU32, Ordering};
use std::time::Duration;

use crate::traits::{ContentProvider, GenerateRequest, ProviderError};
use crate::upload::UploadedFile;

/// Mock provider for testing.
///
/// Returns canned documents per action. Without a canned value, `review`
/// and `translate` echo their input and `generate` returns the empty
/// template for the requested topic.
#[derive(Default)]
pub struct MockProvider {
    generated: Option<LearningSituation>,
    reviewed: Option<LearningSituation>,
    translated: Option<LearningSituation>,
    extracted: Option<LearningSituation>,
    activity: Option<Activity>,
    failure: Option<ProviderError>,
    delay: Option<Duration>,
    call_count: AtomicU32,
}

impl MockProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_generated(mut self, document: LearningSituation) -> Self {
        self.generated = Some(document);
        self
    }

    pub fn with_reviewed(mut self, document: LearningSituation) -> Self {
        self.reviewed = Some(document);
        self
    }

    pub fn with_translated(mut self, document: LearningSituation) -> Self {
        self.translated = Some(document);
        self
    }

    pub fn with_extracted(mut self, document: LearningSituation) -> Self {
        self.extracted = Some(document);
        self
    }

    pub fn with_activity(mut self, activity: Activity) -> Self {
        self.activity = Some(activity);
        self
    }

    /// Make every call fail with `error`
    pub fn with_failure(mut self, error: ProviderError) -> Self {
        self.failure = Some(error);
        self
    }

    /// Hold every call for `delay` before answering
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Get the number of calls made.
    pub fn call_count(&self) -> u32 {
        self.call_count.load(Ordering::SeqCst)
    }

    async fn begin(&self) -> Result<(), ProviderError> {
        self.call_count.fetch_add(1, Ordering::SeqCst);
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        match &self.failure {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl ContentProvider for MockProvider {
    fn id(&self) -> &str {
        "mock"
    }

    async fn generate(&self, request: &GenerateRequest) -> Result<LearningSituation, ProviderError> {
        self.begin().await?;
        Ok(self.generated.clone().unwrap_or_else(|| {
            LearningSituation::template(&request.grade, &request.subject, &request.topic)
        }))
    }

    async fn review(
        &self,
        document: &LearningSituation,
        _stage: EducationalStage,
        _locale: Locale,
    ) -> Result<LearningSituation, ProviderError> {
        self.begin().await?;
        Ok(self.reviewed.clone().unwrap_or_else(|| document.clone()))
    }

    async fn translate(
        &self,
        document: &LearningSituation,
        _target: Locale,
    ) -> Result<LearningSituation, ProviderError> {
        self.begin().await?;
        Ok(self.translated.clone().unwrap_or_else(|| document.clone()))
    }

    async fn extract_from_file(
        &self,
        _file: &UploadedFile,
        _locale: Locale,
        _stage: EducationalStage,
    ) -> Result<LearningSituation, ProviderError> {
        self.begin().await?;
        Ok(self.extracted.clone().unwrap_or_default())
    }

    async fn generate_activity(
        &self,
        prompt: &str,
        _context: &LearningSituation,
        _locale: Locale,
    ) -> Result<Activity, ProviderError> {
        self.begin().await?;
        Ok(self.activity.clone().unwrap_or_else(|| Activity {
            description: prompt.to_string(),
            ..Default::default()
        }))
    }
}
