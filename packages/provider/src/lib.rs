//! Remote content provider abstraction.
//!
//! Provides a trait-based interface over the service that drafts, reviews,
//! translates and extracts Learning Situations:
//! - Gemini `generateContent` over HTTP
//! - Mock provider for testing

pub mod gemini;
pub mod mock;
pub mod prompts;
pub mod schema;
pub mod traits;
pub mod upload;

pub use gemini::{GeminiProvider, GeminiSettings};
pub use mock::MockProvider;
pub use traits::{ContentProvider, GenerateRequest, ProviderError};
pub use upload::{UploadError, UploadedFile};
