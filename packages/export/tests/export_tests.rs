//! Rendering and writing exports

use ikasnova_common::Locale;
use ikasnova_export::{
    render_markdown, render_paginated, write_export, ExportFormat, PageLayout, PAGE_BREAK,
};
use ikasnova_model::{Activity, LearningSituation, ListField, TextField};

fn populated() -> LearningSituation {
    let mut doc = LearningSituation::default();
    for field in TextField::ALL {
        *doc.text_mut(field) = format!("valor-{}", field.json_name());
    }
    for field in ListField::ALL {
        *doc.list_mut(field) = vec![
            format!("{}-a", field.json_name()),
            format!("{}-b", field.json_name()),
        ];
    }
    doc.activities = (1..=3)
        .map(|i| Activity {
            description: format!("descripcion-{}", i),
            sessions: format!("sesiones-{}", i),
            grouping: format!("agrupamiento-{}", i),
            resources: format!("recursos-{}", i),
            evaluable_products: format!("productos-{}", i),
            eval_tools: format!("instrumentos-{}", i),
        })
        .collect();
    doc
}

/// Split Markdown into `(section number, body)` pairs on `## N.` headings
fn sections(md: &str) -> Vec<(u8, String)> {
    let mut out: Vec<(u8, String)> = Vec::new();
    for line in md.lines() {
        if let Some(rest) = line.strip_prefix("## ") {
            let number = rest.split('.').next().unwrap().parse().unwrap();
            out.push((number, String::new()));
        } else if let Some((_, body)) = out.last_mut() {
            body.push_str(line);
            body.push('\n');
        }
    }
    out
}

fn section_of(field: &str) -> u8 {
    match field {
        "stageArea" | "linksOtherAreas" | "descriptionGoal" | "odsChallenges" | "timingRelation" => 1,
        "stageObjectives"
        | "keyCompetenciesDescriptors"
        | "specificCompetencies"
        | "evaluationCriteria"
        | "basicKnowledge" => 2,
        "method" | "pedagogicalModels" | "techniques" | "didacticStrategies" => 3,
        "designEval" | "implementationEval" | "improvementProposal" => 5,
        "bibliography" => 6,
        _ => 0,
    }
}

#[test]
fn test_markdown_renders_each_field_once_in_its_section() {
    let doc = populated();
    let md = render_markdown(&doc, Locale::Es);
    let sections = sections(&md);
    assert_eq!(
        sections.iter().map(|(n, _)| *n).collect::<Vec<_>>(),
        vec![1, 2, 3, 4, 5, 6]
    );

    for field in TextField::ALL {
        let value = doc.text(field);
        assert_eq!(md.matches(value).count(), 1, "{} not rendered once", field);

        let expected = section_of(field.json_name());
        if expected != 0 {
            let (_, body) = &sections[expected as usize - 1];
            assert!(body.contains(value), "{} outside section {}", field, expected);
        }
    }

    for field in ListField::ALL {
        let (_, body) = &sections[1];
        for item in doc.list(field) {
            assert_eq!(md.matches(item.as_str()).count(), 1);
            assert!(body.lines().any(|l| l == format!("- {}", item)));
        }
    }

    let (_, activities) = &sections[3];
    for activity in &doc.activities {
        for value in [
            &activity.description,
            &activity.sessions,
            &activity.grouping,
            &activity.resources,
            &activity.evaluable_products,
            &activity.eval_tools,
        ] {
            assert_eq!(md.matches(value.as_str()).count(), 1, "{} not rendered once", value);
            assert!(activities.contains(value.as_str()));
        }
    }
}

#[test]
fn test_markdown_activity_heading() {
    let md = render_markdown(&populated(), Locale::Eu);
    assert!(md.contains("### Jarduera 2 (sesiones-2)"));
    assert!(md.contains("* **Taldekatzea:** agrupamiento-2"));
}

#[test]
fn test_paginated_pages_have_fixed_height_and_numbers() {
    let layout = PageLayout {
        width: 40,
        lines_per_page: 20,
    };
    let text = render_paginated(&populated(), Locale::Es, &layout);
    let pages: Vec<&str> = text.split(PAGE_BREAK).collect();
    assert!(pages.len() > 1);

    for (i, page) in pages.iter().enumerate() {
        let lines: Vec<&str> = page.lines().collect();
        assert_eq!(lines.len(), 20, "page {} height", i + 1);
        assert_eq!(lines[19].trim(), (i + 1).to_string());
        assert!(lines.iter().all(|l| l.chars().count() <= 40));
    }
}

#[test]
fn test_paginated_keeps_every_value() {
    let doc = populated();
    let text = render_paginated(&doc, Locale::Es, &PageLayout::default());
    for field in TextField::ALL.iter().filter(|f| **f != TextField::Title) {
        assert!(text.contains(doc.text(*field)), "{} missing", field);
    }
    assert!(text.contains("VALOR-TITLE"));
    assert!(text.contains("  - basicKnowledge-b"));
}

#[test]
fn test_write_export_uses_standard_name() {
    let dir = tempfile::tempdir().unwrap();
    let mut doc = populated();
    doc.situation_number = "12".to_string();

    let md = write_export(dir.path(), ExportFormat::Markdown, &doc, Locale::Es).unwrap();
    assert_eq!(md.file_name().unwrap(), "Ikasnova_SdA_12_es.md");
    assert!(std::fs::read_to_string(&md).unwrap().starts_with("# valor-title"));

    doc.situation_number.clear();
    let pages = write_export(
        &dir.path().join("out"),
        ExportFormat::Paginated(PageLayout::default()),
        &doc,
        Locale::Eu,
    )
    .unwrap();
    assert_eq!(pages.file_name().unwrap(), "Ikasnova_SdA_00_eu.txt");
    assert!(pages.exists());
}

#[test]
fn test_json_export_reads_back() {
    let dir = tempfile::tempdir().unwrap();
    let doc = populated();

    let path = write_export(dir.path(), "json".parse().unwrap(), &doc, Locale::Es).unwrap();
    let back: LearningSituation =
        serde_json::from_str(&std::fs::read_to_string(path).unwrap()).unwrap();
    assert_eq!(back, doc);
}
