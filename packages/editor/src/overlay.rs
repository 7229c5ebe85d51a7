//! # Suggestion Overlay
//!
//! Pending proposals held next to the draft until the teacher accepts or
//! rejects them.
//!
//! The overlay mirrors the document field by field: one optional slot per
//! scalar field, one per list field, and a sparse map from activity index to
//! an [`ActivitySuggestion`] that mirrors the activity's fields. A slot is
//! `Some` only while a proposal is pending.
//!
//! ## Invariants
//!
//! - A pending value differed from the draft when the reconciliation pass
//!   produced it.
//! - No per-activity entry is ever left empty: removing its last key removes
//!   the entry.
//! - Activity entries are addressed by position. Nothing re-indexes them if
//!   the activity list changes shape afterwards.

use ikasnova_model::{ActivityField, ListField, TextField};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Pending suggestions for a whole document
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuggestionOverlay {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prog_unit_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub situation_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stage_area: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub links_other_areas: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description_goal: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ods_challenges: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timing_relation: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stage_objectives: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key_competencies_descriptors: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub specific_competencies: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub evaluation_criteria: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub basic_knowledge: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub method: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pedagogical_models: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub techniques: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub didactic_strategies: Option<String>,

    /// Sparse: only indices with at least one pending field are present
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub activities: BTreeMap<usize, ActivitySuggestion>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub design_eval: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub implementation_eval: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub improvement_proposal: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bibliography: Option<String>,
}

/// Pending suggestions for one activity
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivitySuggestion {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sessions: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grouping: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resources: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub evaluable_products: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub eval_tools: Option<String>,
}

/// A single pending proposal together with its value
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Suggestion {
    Text { field: TextField, value: String },
    List { field: ListField, value: Vec<String> },
    Activity { index: usize, field: ActivityField, value: String },
}

/// Address of a pending proposal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum SuggestionTarget {
    Text { field: TextField },
    List { field: ListField },
    Activity { index: usize, field: ActivityField },
}

impl Suggestion {
    pub fn target(&self) -> SuggestionTarget {
        match self {
            Suggestion::Text { field, .. } => SuggestionTarget::Text { field: *field },
            Suggestion::List { field, .. } => SuggestionTarget::List { field: *field },
            Suggestion::Activity { index, field, .. } => SuggestionTarget::Activity {
                index: *index,
                field: *field,
            },
        }
    }
}

impl SuggestionOverlay {
    pub fn text(&self, field: TextField) -> Option<&str> {
        match field {
            TextField::ProgUnitNumber => self.prog_unit_number.as_deref(),
            TextField::SituationNumber => self.situation_number.as_deref(),
            TextField::Title => self.title.as_deref(),
            TextField::StageArea => self.stage_area.as_deref(),
            TextField::LinksOtherAreas => self.links_other_areas.as_deref(),
            TextField::DescriptionGoal => self.description_goal.as_deref(),
            TextField::OdsChallenges => self.ods_challenges.as_deref(),
            TextField::TimingRelation => self.timing_relation.as_deref(),
            TextField::Method => self.method.as_deref(),
            TextField::PedagogicalModels => self.pedagogical_models.as_deref(),
            TextField::Techniques => self.techniques.as_deref(),
            TextField::DidacticStrategies => self.didactic_strategies.as_deref(),
            TextField::DesignEval => self.design_eval.as_deref(),
            TextField::ImplementationEval => self.implementation_eval.as_deref(),
            TextField::ImprovementProposal => self.improvement_proposal.as_deref(),
            TextField::Bibliography => self.bibliography.as_deref(),
        }
    }

    pub fn text_slot(&mut self, field: TextField) -> &mut Option<String> {
        match field {
            TextField::ProgUnitNumber => &mut self.prog_unit_number,
            TextField::SituationNumber => &mut self.situation_number,
            TextField::Title => &mut self.title,
            TextField::StageArea => &mut self.stage_area,
            TextField::LinksOtherAreas => &mut self.links_other_areas,
            TextField::DescriptionGoal => &mut self.description_goal,
            TextField::OdsChallenges => &mut self.ods_challenges,
            TextField::TimingRelation => &mut self.timing_relation,
            TextField::Method => &mut self.method,
            TextField::PedagogicalModels => &mut self.pedagogical_models,
            TextField::Techniques => &mut self.techniques,
            TextField::DidacticStrategies => &mut self.didactic_strategies,
            TextField::DesignEval => &mut self.design_eval,
            TextField::ImplementationEval => &mut self.implementation_eval,
            TextField::ImprovementProposal => &mut self.improvement_proposal,
            TextField::Bibliography => &mut self.bibliography,
        }
    }

    pub fn list(&self, field: ListField) -> Option<&[String]> {
        match field {
            ListField::StageObjectives => self.stage_objectives.as_deref(),
            ListField::KeyCompetenciesDescriptors => self.key_competencies_descriptors.as_deref(),
            ListField::SpecificCompetencies => self.specific_competencies.as_deref(),
            ListField::EvaluationCriteria => self.evaluation_criteria.as_deref(),
            ListField::BasicKnowledge => self.basic_knowledge.as_deref(),
        }
    }

    pub fn list_slot(&mut self, field: ListField) -> &mut Option<Vec<String>> {
        match field {
            ListField::StageObjectives => &mut self.stage_objectives,
            ListField::KeyCompetenciesDescriptors => &mut self.key_competencies_descriptors,
            ListField::SpecificCompetencies => &mut self.specific_competencies,
            ListField::EvaluationCriteria => &mut self.evaluation_criteria,
            ListField::BasicKnowledge => &mut self.basic_knowledge,
        }
    }

    /// Pending value for `target`, if any
    pub fn get(&self, target: SuggestionTarget) -> Option<Suggestion> {
        match target {
            SuggestionTarget::Text { field } => self.text(field).map(|value| Suggestion::Text {
                field,
                value: value.to_string(),
            }),
            SuggestionTarget::List { field } => self.list(field).map(|value| Suggestion::List {
                field,
                value: value.to_vec(),
            }),
            SuggestionTarget::Activity { index, field } => self
                .activities
                .get(&index)
                .and_then(|entry| entry.field(field))
                .map(|value| Suggestion::Activity {
                    index,
                    field,
                    value: value.to_string(),
                }),
        }
    }

    /// Drop the pending value at `target`.
    ///
    /// Returns whether something was removed. An activity entry whose last
    /// key goes away is removed as well.
    pub fn remove(&mut self, target: SuggestionTarget) -> bool {
        match target {
            SuggestionTarget::Text { field } => self.text_slot(field).take().is_some(),
            SuggestionTarget::List { field } => self.list_slot(field).take().is_some(),
            SuggestionTarget::Activity { index, field } => {
                let Some(entry) = self.activities.get_mut(&index) else {
                    return false;
                };
                let removed = entry.field_slot(field).take().is_some();
                if entry.is_empty() {
                    self.activities.remove(&index);
                }
                removed
            }
        }
    }

    /// Every pending suggestion, in document order
    pub fn suggestions(&self) -> Vec<Suggestion> {
        let mut out = Vec::new();

        for field in TextField::ALL {
            if let Some(value) = self.text(field) {
                out.push(Suggestion::Text {
                    field,
                    value: value.to_string(),
                });
            }
        }

        for field in ListField::ALL {
            if let Some(value) = self.list(field) {
                out.push(Suggestion::List {
                    field,
                    value: value.to_vec(),
                });
            }
        }

        for (index, entry) in &self.activities {
            for field in ActivityField::ALL {
                if let Some(value) = entry.field(field) {
                    out.push(Suggestion::Activity {
                        index: *index,
                        field,
                        value: value.to_string(),
                    });
                }
            }
        }

        out
    }

    /// Number of pending keys (activity keys counted individually)
    pub fn len(&self) -> usize {
        let top = TextField::ALL.iter().filter(|f| self.text(**f).is_some()).count()
            + ListField::ALL.iter().filter(|f| self.list(**f).is_some()).count();
        top + self.activities.values().map(ActivitySuggestion::len).sum::<usize>()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl ActivitySuggestion {
    pub fn field(&self, field: ActivityField) -> Option<&str> {
        match field {
            ActivityField::Description => self.description.as_deref(),
            ActivityField::Sessions => self.sessions.as_deref(),
            ActivityField::Grouping => self.grouping.as_deref(),
            ActivityField::Resources => self.resources.as_deref(),
            ActivityField::EvaluableProducts => self.evaluable_products.as_deref(),
            ActivityField::EvalTools => self.eval_tools.as_deref(),
        }
    }

    pub fn field_slot(&mut self, field: ActivityField) -> &mut Option<String> {
        match field {
            ActivityField::Description => &mut self.description,
            ActivityField::Sessions => &mut self.sessions,
            ActivityField::Grouping => &mut self.grouping,
            ActivityField::Resources => &mut self.resources,
            ActivityField::EvaluableProducts => &mut self.evaluable_products,
            ActivityField::EvalTools => &mut self.eval_tools,
        }
    }

    pub fn len(&self) -> usize {
        ActivityField::ALL
            .iter()
            .filter(|f| self.field(**f).is_some())
            .count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn overlay_with_activity(index: usize, field: ActivityField, value: &str) -> SuggestionOverlay {
        let mut overlay = SuggestionOverlay::default();
        let mut entry = ActivitySuggestion::default();
        *entry.field_slot(field) = Some(value.to_string());
        overlay.activities.insert(index, entry);
        overlay
    }

    #[test]
    fn test_removing_last_activity_key_drops_entry() {
        let mut overlay = overlay_with_activity(1, ActivityField::Description, "D");

        let removed = overlay.remove(SuggestionTarget::Activity {
            index: 1,
            field: ActivityField::Description,
        });

        assert!(removed);
        assert!(overlay.activities.get(&1).is_none());
        assert!(overlay.is_empty());
    }

    #[test]
    fn test_removing_one_of_two_activity_keys_keeps_entry() {
        let mut overlay = overlay_with_activity(0, ActivityField::Description, "D");
        overlay.activities.get_mut(&0).unwrap().sessions = Some("4".to_string());

        overlay.remove(SuggestionTarget::Activity {
            index: 0,
            field: ActivityField::Sessions,
        });

        let entry = overlay.activities.get(&0).unwrap();
        assert_eq!(entry.description.as_deref(), Some("D"));
        assert_eq!(entry.len(), 1);
    }

    #[test]
    fn test_remove_missing_key_is_noop() {
        let mut overlay = SuggestionOverlay::default();
        assert!(!overlay.remove(SuggestionTarget::Text { field: TextField::Title }));
        assert!(!overlay.remove(SuggestionTarget::Activity {
            index: 3,
            field: ActivityField::Grouping,
        }));
    }

    #[test]
    fn test_suggestions_listed_in_document_order() {
        let mut overlay = overlay_with_activity(2, ActivityField::EvalTools, "Rúbrica");
        overlay.bibliography = Some("LOMLOE".to_string());
        overlay.title = Some("Nuevo".to_string());
        overlay.basic_knowledge = Some(vec!["Números".to_string()]);

        let targets: Vec<SuggestionTarget> =
            overlay.suggestions().iter().map(Suggestion::target).collect();

        assert_eq!(
            targets,
            vec![
                SuggestionTarget::Text { field: TextField::Title },
                SuggestionTarget::Text { field: TextField::Bibliography },
                SuggestionTarget::List { field: ListField::BasicKnowledge },
                SuggestionTarget::Activity {
                    index: 2,
                    field: ActivityField::EvalTools
                },
            ]
        );
        assert_eq!(overlay.len(), 4);
    }

    #[test]
    fn test_sparse_json_shape() {
        let mut overlay = overlay_with_activity(1, ActivityField::Description, "D");
        overlay.method = Some("ABP".to_string());

        let value = serde_json::to_value(&overlay).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "method": "ABP",
                "activities": { "1": { "description": "D" } }
            })
        );

        let back: SuggestionOverlay = serde_json::from_value(value).unwrap();
        assert_eq!(back, overlay);
    }
}
