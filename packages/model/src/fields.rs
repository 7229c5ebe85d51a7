//! Field names of the document and of its activities.
//!
//! Fields are split by value type: scalar text, sequence of text, and the
//! per-activity text fields. Reconciliation rules differ per type, so each
//! type gets its own enum rather than one stringly-typed key.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Scalar text fields of the document, in document order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TextField {
    ProgUnitNumber,
    SituationNumber,
    Title,
    StageArea,
    LinksOtherAreas,
    DescriptionGoal,
    OdsChallenges,
    TimingRelation,
    Method,
    PedagogicalModels,
    Techniques,
    DidacticStrategies,
    DesignEval,
    ImplementationEval,
    ImprovementProposal,
    Bibliography,
}

/// Sequence-of-text fields of the document, in document order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ListField {
    StageObjectives,
    KeyCompetenciesDescriptors,
    SpecificCompetencies,
    EvaluationCriteria,
    BasicKnowledge,
}

/// Text fields of an activity, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ActivityField {
    Description,
    Sessions,
    Grouping,
    Resources,
    EvaluableProducts,
    EvalTools,
}

/// Any top-level document field other than the activity sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocumentField {
    Text(TextField),
    List(ListField),
}

/// Unrecognized field name
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown field: {0}")]
pub struct UnknownField(pub String);

impl TextField {
    pub const ALL: [TextField; 16] = [
        TextField::ProgUnitNumber,
        TextField::SituationNumber,
        TextField::Title,
        TextField::StageArea,
        TextField::LinksOtherAreas,
        TextField::DescriptionGoal,
        TextField::OdsChallenges,
        TextField::TimingRelation,
        TextField::Method,
        TextField::PedagogicalModels,
        TextField::Techniques,
        TextField::DidacticStrategies,
        TextField::DesignEval,
        TextField::ImplementationEval,
        TextField::ImprovementProposal,
        TextField::Bibliography,
    ];

    /// Key used on the wire (camelCase)
    pub fn json_name(self) -> &'static str {
        match self {
            TextField::ProgUnitNumber => "progUnitNumber",
            TextField::SituationNumber => "situationNumber",
            TextField::Title => "title",
            TextField::StageArea => "stageArea",
            TextField::LinksOtherAreas => "linksOtherAreas",
            TextField::DescriptionGoal => "descriptionGoal",
            TextField::OdsChallenges => "odsChallenges",
            TextField::TimingRelation => "timingRelation",
            TextField::Method => "method",
            TextField::PedagogicalModels => "pedagogicalModels",
            TextField::Techniques => "techniques",
            TextField::DidacticStrategies => "didacticStrategies",
            TextField::DesignEval => "designEval",
            TextField::ImplementationEval => "implementationEval",
            TextField::ImprovementProposal => "improvementProposal",
            TextField::Bibliography => "bibliography",
        }
    }
}

impl ListField {
    pub const ALL: [ListField; 5] = [
        ListField::StageObjectives,
        ListField::KeyCompetenciesDescriptors,
        ListField::SpecificCompetencies,
        ListField::EvaluationCriteria,
        ListField::BasicKnowledge,
    ];

    pub fn json_name(self) -> &'static str {
        match self {
            ListField::StageObjectives => "stageObjectives",
            ListField::KeyCompetenciesDescriptors => "keyCompetenciesDescriptors",
            ListField::SpecificCompetencies => "specificCompetencies",
            ListField::EvaluationCriteria => "evaluationCriteria",
            ListField::BasicKnowledge => "basicKnowledge",
        }
    }
}

impl ActivityField {
    pub const ALL: [ActivityField; 6] = [
        ActivityField::Description,
        ActivityField::Sessions,
        ActivityField::Grouping,
        ActivityField::Resources,
        ActivityField::EvaluableProducts,
        ActivityField::EvalTools,
    ];

    pub fn json_name(self) -> &'static str {
        match self {
            ActivityField::Description => "description",
            ActivityField::Sessions => "sessions",
            ActivityField::Grouping => "grouping",
            ActivityField::Resources => "resources",
            ActivityField::EvaluableProducts => "evaluableProducts",
            ActivityField::EvalTools => "evalTools",
        }
    }
}

impl DocumentField {
    pub fn json_name(self) -> &'static str {
        match self {
            DocumentField::Text(field) => field.json_name(),
            DocumentField::List(field) => field.json_name(),
        }
    }
}

/// Case-, underscore- and dash-insensitive comparison so that `stage_area`,
/// `stage-area` and `stageArea` all name the same field
fn same_name(input: &str, json_name: &str) -> bool {
    let normalized: String = input
        .chars()
        .filter(|c| *c != '_' && *c != '-')
        .flat_map(char::to_lowercase)
        .collect();
    normalized == json_name.to_lowercase()
}

fn lookup<T: Copy>(input: &str, all: &[T], name: fn(T) -> &'static str) -> Option<T> {
    all.iter().copied().find(|field| same_name(input.trim(), name(*field)))
}

impl FromStr for TextField {
    type Err = UnknownField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        lookup(s, &TextField::ALL, TextField::json_name).ok_or_else(|| UnknownField(s.to_string()))
    }
}

impl FromStr for ListField {
    type Err = UnknownField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        lookup(s, &ListField::ALL, ListField::json_name).ok_or_else(|| UnknownField(s.to_string()))
    }
}

impl FromStr for ActivityField {
    type Err = UnknownField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        lookup(s, &ActivityField::ALL, ActivityField::json_name)
            .ok_or_else(|| UnknownField(s.to_string()))
    }
}

impl FromStr for DocumentField {
    type Err = UnknownField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<TextField>()
            .map(DocumentField::Text)
            .or_else(|_| s.parse::<ListField>().map(DocumentField::List))
    }
}

impl fmt::Display for TextField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.json_name())
    }
}

impl fmt::Display for ListField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.json_name())
    }
}

impl fmt::Display for ActivityField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.json_name())
    }
}

impl fmt::Display for DocumentField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.json_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_accepts_camel_and_snake_case() {
        assert_eq!("stageArea".parse::<TextField>().unwrap(), TextField::StageArea);
        assert_eq!("stage_area".parse::<TextField>().unwrap(), TextField::StageArea);
        assert_eq!("eval-tools".parse::<ActivityField>().unwrap(), ActivityField::EvalTools);
    }

    #[test]
    fn test_unknown_field_message() {
        let err = "actividades".parse::<ActivityField>().unwrap_err();
        assert_eq!(err, UnknownField("actividades".to_string()));
        assert_eq!(err.to_string(), "Unknown field: actividades");
    }

    #[test]
    fn test_document_field_picks_the_right_kind() {
        assert_eq!(
            "basicKnowledge".parse::<DocumentField>().unwrap(),
            DocumentField::List(ListField::BasicKnowledge)
        );
        assert_eq!(
            "method".parse::<DocumentField>().unwrap(),
            DocumentField::Text(TextField::Method)
        );
        assert!("activities".parse::<DocumentField>().is_err());
    }

    #[test]
    fn test_json_name_matches_serde_name() {
        for field in TextField::ALL {
            let json = serde_json::to_string(&field).unwrap();
            assert_eq!(json, format!("\"{}\"", field.json_name()));
        }
        for field in ActivityField::ALL {
            let json = serde_json::to_string(&field).unwrap();
            assert_eq!(json, format!("\"{}\"", field.json_name()));
        }
    }
}
