//! Browser bindings.
//!
//! Everything crosses the boundary as JSON strings in the same camelCase
//! shape the provider returns, so the presentation layer never needs its own
//! copy of the reconciliation rules.

use ikasnova_common::{EducationalStage, GenerationMode, Locale};
use ikasnova_editor::{DraftStore, Edit, SuggestionOverlay, SuggestionTarget};
use ikasnova_export::{export_file_name, render_markdown};
use ikasnova_model::LearningSituation;
use serde::de::DeserializeOwned;
use serde::Serialize;
use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

fn from_json<T: DeserializeOwned>(json: &str, what: &str) -> Result<T, String> {
    serde_json::from_str(json).map_err(|e| format!("Invalid {}: {}", what, e))
}

fn to_json<T: Serialize>(value: &T) -> Result<String, String> {
    serde_json::to_string(value).map_err(|e| format!("Serialization error: {}", e))
}

fn parse<T: std::str::FromStr>(value: &str) -> Result<T, String>
where
    T::Err: std::fmt::Display,
{
    value.parse().map_err(|e: T::Err| e.to_string())
}

fn js(err: String) -> JsValue {
    JsValue::from_str(&err)
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ReconcileJson {
    document: LearningSituation,
    overlay: SuggestionOverlay,
    has_suggestions: bool,
}

fn reconcile_json(current_json: &str, proposed_json: &str) -> Result<String, String> {
    let current: LearningSituation = from_json(current_json, "current document")?;
    let proposed: LearningSituation = from_json(proposed_json, "proposed document")?;
    let outcome = ikasnova_editor::reconcile(&current, &proposed);
    to_json(&ReconcileJson {
        document: outcome.document,
        overlay: outcome.overlay,
        has_suggestions: outcome.has_suggestions,
    })
}

/// Reconcile a proposed document against the current one.
///
/// Returns `{ document, overlay, hasSuggestions }`.
#[wasm_bindgen(js_name = reconcile)]
pub fn reconcile_js(current_json: &str, proposed_json: &str) -> Result<String, JsValue> {
    reconcile_json(current_json, proposed_json).map_err(js)
}

/// Draft store owned by the page
#[wasm_bindgen]
pub struct DraftSession {
    store: DraftStore,
}

impl DraftSession {
    fn with_locale(locale: &str) -> Result<Self, String> {
        Ok(Self {
            store: DraftStore::new(parse(locale)?),
        })
    }

    fn load(&mut self, json: &str, extracted: bool) -> Result<(), String> {
        let document = from_json(json, "document")?;
        if extracted {
            self.store.load_extracted(document);
        } else {
            self.store.load_generated(document);
        }
        Ok(())
    }

    fn edit(&mut self, edit_json: &str) -> Result<(), String> {
        let edit: Edit = from_json(edit_json, "edit")?;
        self.store.apply_edit(edit).map_err(|e| e.to_string())
    }

    fn target(target_json: &str) -> Result<SuggestionTarget, String> {
        from_json(target_json, "suggestion target")
    }
}

#[wasm_bindgen]
impl DraftSession {
    #[wasm_bindgen(constructor)]
    pub fn new(locale: &str) -> Result<DraftSession, JsValue> {
        Self::with_locale(locale).map_err(js)
    }

    /// Rebuild a session from [`DraftSession::state`] output
    #[wasm_bindgen(js_name = restore)]
    pub fn restore(state_json: &str) -> Result<DraftSession, JsValue> {
        let store = from_json(state_json, "session state").map_err(js)?;
        Ok(Self { store })
    }

    /// Whole session state as JSON
    pub fn state(&self) -> Result<String, JsValue> {
        to_json(&self.store).map_err(js)
    }

    #[wasm_bindgen(getter)]
    pub fn version(&self) -> f64 {
        self.store.version() as f64
    }

    #[wasm_bindgen(getter)]
    pub fn locale(&self) -> String {
        self.store.locale().code().to_string()
    }

    #[wasm_bindgen(js_name = toggleLocale)]
    pub fn toggle_locale(&mut self) -> String {
        self.store.toggle_locale().code().to_string()
    }

    #[wasm_bindgen(js_name = isEditing)]
    pub fn is_editing(&self) -> bool {
        self.store.is_editing()
    }

    #[wasm_bindgen(js_name = setEditing)]
    pub fn set_editing(&mut self, editing: bool) {
        self.store.set_editing(editing);
    }

    #[wasm_bindgen(js_name = selectStage)]
    pub fn select_stage(&mut self, stage: Option<String>) -> Result<(), JsValue> {
        let stage = stage
            .map(|s| parse::<EducationalStage>(&s))
            .transpose()
            .map_err(js)?;
        self.store.select_stage(stage);
        Ok(())
    }

    #[wasm_bindgen(js_name = selectMode)]
    pub fn select_mode(&mut self, mode: Option<String>) -> Result<(), JsValue> {
        let mode = mode
            .map(|m| parse::<GenerationMode>(&m))
            .transpose()
            .map_err(js)?;
        self.store.select_mode(mode);
        Ok(())
    }

    #[wasm_bindgen(js_name = startManual)]
    pub fn start_manual(&mut self, grade: &str, subject: &str, topic: &str) {
        self.store.start_manual(grade, subject, topic);
    }

    #[wasm_bindgen(js_name = loadGenerated)]
    pub fn load_generated(&mut self, document_json: &str) -> Result<(), JsValue> {
        self.load(document_json, false).map_err(js)
    }

    #[wasm_bindgen(js_name = loadExtracted)]
    pub fn load_extracted(&mut self, document_json: &str) -> Result<(), JsValue> {
        self.load(document_json, true).map_err(js)
    }

    /// Reconcile a reviewed document. Returns whether suggestions are pending.
    #[wasm_bindgen(js_name = applyReview)]
    pub fn apply_review(&mut self, proposed_json: &str) -> Result<bool, JsValue> {
        let proposed: LearningSituation = from_json(proposed_json, "document").map_err(js)?;
        Ok(self.store.apply_review(&proposed))
    }

    /// Replace the draft with a translation (numeric values already restored)
    #[wasm_bindgen(js_name = applyTranslation)]
    pub fn apply_translation(&mut self, document_json: &str, target: &str) -> Result<(), JsValue> {
        let document = from_json(document_json, "document").map_err(js)?;
        let target: Locale = parse(target).map_err(js)?;
        self.store.apply_translation(document, target);
        Ok(())
    }

    /// Apply an edit such as `{"type":"setText","field":"title","value":"..."}`
    #[wasm_bindgen(js_name = applyEdit)]
    pub fn apply_edit(&mut self, edit_json: &str) -> Result<(), JsValue> {
        self.edit(edit_json).map_err(js)
    }

    /// Accept the pending value at a target such as `{"kind":"text","field":"title"}`
    #[wasm_bindgen(js_name = acceptSuggestion)]
    pub fn accept_suggestion(&mut self, target_json: &str) -> Result<bool, JsValue> {
        let target = Self::target(target_json).map_err(js)?;
        Ok(self.store.accept_pending(target))
    }

    #[wasm_bindgen(js_name = rejectSuggestion)]
    pub fn reject_suggestion(&mut self, target_json: &str) -> Result<bool, JsValue> {
        let target = Self::target(target_json).map_err(js)?;
        Ok(self.store.reject_suggestion(target))
    }

    /// Pending suggestions as a JSON array
    pub fn suggestions(&self) -> Result<String, JsValue> {
        to_json(&self.store.suggestions()).map_err(js)
    }

    #[wasm_bindgen(js_name = hasSuggestions)]
    pub fn has_suggestions(&self) -> bool {
        self.store.has_suggestions()
    }

    pub fn document(&self) -> Option<String> {
        self.store.document().and_then(|d| to_json(d).ok())
    }

    pub fn overlay(&self) -> Option<String> {
        self.store.overlay().and_then(|o| to_json(o).ok())
    }

    #[wasm_bindgen(js_name = toMarkdown)]
    pub fn to_markdown(&self) -> Option<String> {
        self.store
            .document()
            .map(|d| render_markdown(d, self.store.locale()))
    }

    /// Download name for the draft, e.g. `Ikasnova_SdA_7_eu.md`
    #[wasm_bindgen(js_name = exportFileName)]
    pub fn export_file_name(&self, extension: &str) -> Option<String> {
        self.store.document().map(|d| {
            export_file_name(&d.situation_number, self.store.locale(), extension)
        })
    }

    pub fn reset(&mut self) {
        self.store.reset();
    }
}
