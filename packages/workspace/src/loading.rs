//! Per-action loading flags.
//!
//! Each action class has its own flag so that, say, a review can run while
//! an activity is being generated, but two reviews cannot. A flag is held by
//! a [`LoadingGuard`] and cleared when the guard drops, whichever way the
//! action ends.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Class of provider-backed action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ActionKind {
    Generate,
    Review,
    Translate,
    GenerateActivity,
    Extract,
}

impl ActionKind {
    pub const ALL: [ActionKind; 5] = [
        ActionKind::Generate,
        ActionKind::Review,
        ActionKind::Translate,
        ActionKind::GenerateActivity,
        ActionKind::Extract,
    ];
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ActionKind::Generate => "generate",
            ActionKind::Review => "review",
            ActionKind::Translate => "translate",
            ActionKind::GenerateActivity => "generate-activity",
            ActionKind::Extract => "extract",
        })
    }
}

#[derive(Debug, Default)]
pub struct LoadingFlags {
    generate: AtomicBool,
    review: AtomicBool,
    translate: AtomicBool,
    generate_activity: AtomicBool,
    extract: AtomicBool,
}

impl LoadingFlags {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    fn flag(&self, kind: ActionKind) -> &AtomicBool {
        match kind {
            ActionKind::Generate => &self.generate,
            ActionKind::Review => &self.review,
            ActionKind::Translate => &self.translate,
            ActionKind::GenerateActivity => &self.generate_activity,
            ActionKind::Extract => &self.extract,
        }
    }

    pub fn is_loading(&self, kind: ActionKind) -> bool {
        self.flag(kind).load(Ordering::SeqCst)
    }

    pub fn any(&self) -> bool {
        ActionKind::ALL.iter().any(|k| self.is_loading(*k))
    }

    /// Raise the flag for `kind`, or `None` if it is already raised
    pub fn begin(self: &Arc<Self>, kind: ActionKind) -> Option<LoadingGuard> {
        self.flag(kind)
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .ok()
            .map(|_| LoadingGuard {
                flags: Arc::clone(self),
                kind,
            })
    }
}

/// Clears its flag on drop
#[derive(Debug)]
pub struct LoadingGuard {
    flags: Arc<LoadingFlags>,
    kind: ActionKind,
}

impl LoadingGuard {
    pub fn kind(&self) -> ActionKind {
        self.kind
    }
}

impl Drop for LoadingGuard {
    fn drop(&mut self) {
        self.flags.flag(self.kind).store(false, Ordering::SeqCst);
    }
}
