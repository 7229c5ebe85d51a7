//! # Ikasnova Editor
//!
//! Draft lifecycle and suggestion reconciliation for Learning Situations.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │ provider: topic / file / draft → proposal   │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ editor: DraftStore + reconciliation         │
//! │  - Load generated / extracted drafts        │
//! │  - Merge reviews into a suggestion overlay  │
//! │  - Accept / reject suggestions              │
//! │  - Apply field-level edits                  │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ export: draft → Markdown / paged text       │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## Core Principles
//!
//! 1. **The teacher's text wins**: filled fields are never overwritten by a
//!    proposal, only annotated with a suggestion
//! 2. **Empty fields are filled**: nothing to lose, so no confirmation asked
//! 3. **Positional activities**: activities have no identity, only an index
//! 4. **Explicit state**: one [`DraftStore`] owns the session
//!
//! ## Usage
//!
//! ```rust,ignore
//! use ikasnova_editor::{DraftStore, SuggestionTarget};
//! use ikasnova_common::Locale;
//! use ikasnova_model::TextField;
//!
//! let mut store = DraftStore::new(Locale::Es);
//! store.start_manual("3º Primaria", "Matemáticas", "El mercado");
//!
//! // Reviewed proposal from the provider
//! if store.apply_review(&proposed) {
//!     for suggestion in store.suggestions() {
//!         println!("{:?}", suggestion);
//!     }
//!     store.accept_pending(SuggestionTarget::Text { field: TextField::Title });
//! }
//! ```

mod edits;
mod errors;
mod overlay;
mod reconcile;
mod store;

pub use edits::{Edit, EditError};
pub use errors::EditorError;
pub use overlay::{ActivitySuggestion, Suggestion, SuggestionOverlay, SuggestionTarget};
pub use reconcile::{
    accept_suggestion, is_empty_list, is_empty_text, reconcile, reject_suggestion,
    ReconcileOutcome, MIN_FILLED_CHARS,
};
pub use store::DraftStore;
