//! # Learning Situation record
//!
//! The document a teacher authors: a header, six numbered sections and an
//! ordered list of activities. Activities carry no identity of their own, so
//! every operation addresses them by position.
//!
//! Deserialization is lenient. Missing fields and `null` values read as empty
//! text or empty lists, which lets partial drafts and partial provider
//! payloads share the same type.

use crate::fields::{ActivityField, ListField, TextField};
use serde::{Deserialize, Deserializer, Serialize};

/// Number of blank activities in a fresh template
pub const TEMPLATE_ACTIVITY_COUNT: usize = 3;

/// Full Learning Situation document
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LearningSituation {
    // Header
    #[serde(deserialize_with = "nullable")]
    pub prog_unit_number: String,
    #[serde(deserialize_with = "nullable")]
    pub situation_number: String,

    // 1. Identification
    #[serde(deserialize_with = "nullable")]
    pub title: String,
    #[serde(deserialize_with = "nullable")]
    pub stage_area: String,
    #[serde(deserialize_with = "nullable")]
    pub links_other_areas: String,
    #[serde(deserialize_with = "nullable")]
    pub description_goal: String,
    #[serde(deserialize_with = "nullable")]
    pub ods_challenges: String,
    #[serde(deserialize_with = "nullable")]
    pub timing_relation: String,

    // 2. Curriculum links
    #[serde(deserialize_with = "nullable")]
    pub stage_objectives: Vec<String>,
    #[serde(deserialize_with = "nullable")]
    pub key_competencies_descriptors: Vec<String>,
    #[serde(deserialize_with = "nullable")]
    pub specific_competencies: Vec<String>,
    #[serde(deserialize_with = "nullable")]
    pub evaluation_criteria: Vec<String>,
    #[serde(deserialize_with = "nullable")]
    pub basic_knowledge: Vec<String>,

    // 3. Methodology
    #[serde(deserialize_with = "nullable")]
    pub method: String,
    #[serde(deserialize_with = "nullable")]
    pub pedagogical_models: String,
    #[serde(deserialize_with = "nullable")]
    pub techniques: String,
    #[serde(deserialize_with = "nullable")]
    pub didactic_strategies: String,

    // 4. Activity sequence
    #[serde(deserialize_with = "nullable")]
    pub activities: Vec<Activity>,

    // 5. Teaching practice evaluation
    #[serde(deserialize_with = "nullable")]
    pub design_eval: String,
    #[serde(deserialize_with = "nullable")]
    pub implementation_eval: String,
    #[serde(deserialize_with = "nullable")]
    pub improvement_proposal: String,

    // 6. Bibliography
    #[serde(deserialize_with = "nullable")]
    pub bibliography: String,
}

/// One teaching activity within the sequence
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Activity {
    #[serde(deserialize_with = "nullable")]
    pub description: String,
    #[serde(deserialize_with = "nullable")]
    pub sessions: String,
    #[serde(deserialize_with = "nullable")]
    pub grouping: String,
    #[serde(deserialize_with = "nullable")]
    pub resources: String,
    #[serde(deserialize_with = "nullable")]
    pub evaluable_products: String,
    #[serde(deserialize_with = "nullable")]
    pub eval_tools: String,
}

/// Treat an explicit `null` like a missing value
fn nullable<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl LearningSituation {
    /// Empty template used when the teacher writes the document by hand.
    ///
    /// The title is seeded with the topic, the stage/area line with
    /// `"<grade> - <subject>"` when both are given, and the sequence starts
    /// with [`TEMPLATE_ACTIVITY_COUNT`] blank activities.
    pub fn template(grade: &str, subject: &str, topic: &str) -> Self {
        let stage_area = if !grade.is_empty() && !subject.is_empty() {
            format!("{} - {}", grade, subject)
        } else {
            String::new()
        };

        Self {
            title: topic.to_string(),
            stage_area,
            activities: vec![Activity::default(); TEMPLATE_ACTIVITY_COUNT],
            ..Default::default()
        }
    }

    pub fn text(&self, field: TextField) -> &str {
        match field {
            TextField::ProgUnitNumber => &self.prog_unit_number,
            TextField::SituationNumber => &self.situation_number,
            TextField::Title => &self.title,
            TextField::StageArea => &self.stage_area,
            TextField::LinksOtherAreas => &self.links_other_areas,
            TextField::DescriptionGoal => &self.description_goal,
            TextField::OdsChallenges => &self.ods_challenges,
            TextField::TimingRelation => &self.timing_relation,
            TextField::Method => &self.method,
            TextField::PedagogicalModels => &self.pedagogical_models,
            TextField::Techniques => &self.techniques,
            TextField::DidacticStrategies => &self.didactic_strategies,
            TextField::DesignEval => &self.design_eval,
            TextField::ImplementationEval => &self.implementation_eval,
            TextField::ImprovementProposal => &self.improvement_proposal,
            TextField::Bibliography => &self.bibliography,
        }
    }

    pub fn text_mut(&mut self, field: TextField) -> &mut String {
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

    pub fn list(&self, field: ListField) -> &[String] {
        match field {
            ListField::StageObjectives => &self.stage_objectives,
            ListField::KeyCompetenciesDescriptors => &self.key_competencies_descriptors,
            ListField::SpecificCompetencies => &self.specific_competencies,
            ListField::EvaluationCriteria => &self.evaluation_criteria,
            ListField::BasicKnowledge => &self.basic_knowledge,
        }
    }

    pub fn list_mut(&mut self, field: ListField) -> &mut Vec<String> {
        match field {
            ListField::StageObjectives => &mut self.stage_objectives,
            ListField::KeyCompetenciesDescriptors => &mut self.key_competencies_descriptors,
            ListField::SpecificCompetencies => &mut self.specific_competencies,
            ListField::EvaluationCriteria => &mut self.evaluation_criteria,
            ListField::BasicKnowledge => &mut self.basic_knowledge,
        }
    }
}

impl Activity {
    pub fn field(&self, field: ActivityField) -> &str {
        match field {
            ActivityField::Description => &self.description,
            ActivityField::Sessions => &self.sessions,
            ActivityField::Grouping => &self.grouping,
            ActivityField::Resources => &self.resources,
            ActivityField::EvaluableProducts => &self.evaluable_products,
            ActivityField::EvalTools => &self.eval_tools,
        }
    }

    pub fn field_mut(&mut self, field: ActivityField) -> &mut String {
        match field {
            ActivityField::Description => &mut self.description,
            ActivityField::Sessions => &mut self.sessions,
            ActivityField::Grouping => &mut self.grouping,
            ActivityField::Resources => &mut self.resources,
            ActivityField::EvaluableProducts => &mut self.evaluable_products,
            ActivityField::EvalTools => &mut self.eval_tools,
        }
    }
}

/// Split multi-line editor text into list elements, one per non-blank line
pub fn list_from_text(text: &str) -> Vec<String> {
    text.lines()
        .map(|line| line.trim_end_matches('\r'))
        .filter(|line| !line.trim().is_empty())
        .map(str::to_string)
        .collect()
}
