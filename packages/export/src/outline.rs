//! Format-neutral outline of a document.
//!
//! Both renderers walk the same outline, so every field lands under the same
//! numbered section whichever format is produced.

use ikasnova_common::{Labels, Locale};
use ikasnova_model::LearningSituation;

/// How a scalar field is laid out
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldStyle {
    /// Label and value on one line
    Inline,
    /// Label line followed by the value as a paragraph
    Block,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    Field {
        label: &'static str,
        value: String,
        style: FieldStyle,
    },
    List {
        label: &'static str,
        items: Vec<String>,
    },
    Activity {
        number: usize,
        sessions: String,
        fields: Vec<(&'static str, String)>,
    },
    Paragraph(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub number: u8,
    pub title: &'static str,
    pub blocks: Vec<Block>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outline {
    pub title: String,
    pub header: Vec<(&'static str, String)>,
    pub sections: Vec<Section>,
    pub activity_label: &'static str,
    pub watermark: &'static str,
}

fn field(label: &'static str, value: &str, style: FieldStyle) -> Block {
    Block::Field {
        label,
        value: value.to_string(),
        style,
    }
}

fn list(label: &'static str, items: &[String]) -> Block {
    Block::List {
        label,
        items: items.to_vec(),
    }
}

pub fn build_outline(doc: &LearningSituation, locale: Locale) -> Outline {
    let t = Labels::for_locale(locale);

    let identification = Section {
        number: 1,
        title: t.section_identification,
        blocks: vec![
            field(t.stage_area, &doc.stage_area, FieldStyle::Inline),
            field(t.timing, &doc.timing_relation, FieldStyle::Inline),
            field(t.description_goal, &doc.description_goal, FieldStyle::Block),
            field(t.links_other_areas, &doc.links_other_areas, FieldStyle::Block),
            field(t.ods_challenges, &doc.ods_challenges, FieldStyle::Block),
        ],
    };

    let curriculum = Section {
        number: 2,
        title: t.section_curriculum,
        blocks: vec![
            list(t.stage_objectives, &doc.stage_objectives),
            list(t.key_competencies, &doc.key_competencies_descriptors),
            list(t.specific_competencies, &doc.specific_competencies),
            list(t.evaluation_criteria, &doc.evaluation_criteria),
            list(t.basic_knowledge, &doc.basic_knowledge),
        ],
    };

    let methodology = Section {
        number: 3,
        title: t.section_methodology,
        blocks: vec![
            field(t.method, &doc.method, FieldStyle::Inline),
            field(t.pedagogical_models, &doc.pedagogical_models, FieldStyle::Inline),
            field(t.techniques, &doc.techniques, FieldStyle::Inline),
            field(t.didactic_strategies, &doc.didactic_strategies, FieldStyle::Inline),
        ],
    };

    let activities = Section {
        number: 4,
        title: t.section_activities,
        blocks: doc
            .activities
            .iter()
            .enumerate()
            .map(|(i, act)| Block::Activity {
                number: i + 1,
                sessions: act.sessions.clone(),
                fields: vec![
                    (t.activity_description, act.description.clone()),
                    (t.activity_grouping, act.grouping.clone()),
                    (t.activity_resources, act.resources.clone()),
                    (t.activity_products, act.evaluable_products.clone()),
                    (t.activity_tools, act.eval_tools.clone()),
                ],
            })
            .collect(),
    };

    let evaluation = Section {
        number: 5,
        title: t.section_evaluation,
        blocks: vec![
            field(t.design_eval, &doc.design_eval, FieldStyle::Inline),
            field(t.implementation_eval, &doc.implementation_eval, FieldStyle::Inline),
            field(t.improvement_proposal, &doc.improvement_proposal, FieldStyle::Inline),
        ],
    };

    let bibliography = Section {
        number: 6,
        title: t.section_bibliography,
        blocks: vec![Block::Paragraph(doc.bibliography.clone())],
    };

    Outline {
        title: doc.title.clone(),
        header: vec![
            (t.prog_unit, doc.prog_unit_number.clone()),
            (t.situation_number, doc.situation_number.clone()),
        ],
        sections: vec![
            identification,
            curriculum,
            methodology,
            activities,
            evaluation,
            bibliography,
        ],
        activity_label: t.activity,
        watermark: t.watermark,
    }
}
