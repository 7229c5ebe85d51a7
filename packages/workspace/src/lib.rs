//! # Ikasnova Workspace
//!
//! One authoring session: a [`DraftStore`](ikasnova_editor::DraftStore), the
//! content provider, and per-action loading flags.

pub mod errors;
pub mod loading;
pub mod translation;
mod workspace;

pub use errors::{WorkspaceError, WorkspaceResult};
pub use loading::{ActionKind, LoadingFlags, LoadingGuard};
pub use translation::{is_numeric_value, restore_numeric_values};
pub use workspace::{CreateRequest, Workspace};
