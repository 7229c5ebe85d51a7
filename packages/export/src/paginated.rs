//! # Paginated plain-text renderer
//!
//! Lays the outline out on fixed-size pages:
//!
//! - lines are word-wrapped to `width` characters
//! - each page has `lines_per_page` lines, the last one holding the page
//!   number centered
//! - pages are separated by a form feed (`\x0c`)
//! - a heading never ends a page when something follows it

use crate::outline::{build_outline, Block, FieldStyle, Outline};
use ikasnova_common::Locale;
use ikasnova_model::LearningSituation;
use serde::{Deserialize, Serialize};

/// Blank separator plus page number
const FOOTER_LINES: usize = 2;
const MIN_WIDTH: usize = 20;

pub const PAGE_BREAK: char = '\x0c';

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PageLayout {
    pub width: usize,
    pub lines_per_page: usize,
}

impl Default for PageLayout {
    fn default() -> Self {
        Self {
            width: 80,
            lines_per_page: 60,
        }
    }
}

impl PageLayout {
    fn text_width(&self) -> usize {
        self.width.max(MIN_WIDTH)
    }

    fn body_height(&self) -> usize {
        self.lines_per_page.saturating_sub(FOOTER_LINES).max(1)
    }
}

#[derive(Debug, Clone)]
struct Line {
    text: String,
    keep_with_next: bool,
}

impl Line {
    fn plain(text: String) -> Self {
        Self {
            text,
            keep_with_next: false,
        }
    }

    fn heading(text: String) -> Self {
        Self {
            text,
            keep_with_next: true,
        }
    }

    fn blank() -> Self {
        Self::plain(String::new())
    }
}

/// Word-wrap `text` to `width` characters.
///
/// `first` prefixes the first line, `rest` every following one. Words longer
/// than a line are split.
fn wrap(text: &str, width: usize, first: &str, rest: &str) -> Vec<String> {
    let mut out = Vec::new();
    let mut prefix = first;

    for paragraph in text.lines() {
        let mut line = String::from(prefix);
        let mut len = prefix.chars().count();
        let mut empty = true;
        let mut had_words = false;

        for word in paragraph.split_whitespace() {
            had_words = true;
            let mut word = word;
            while !word.is_empty() {
                let word_len = word.chars().count();
                let needed = if empty { word_len } else { word_len + 1 };

                if len + needed <= width {
                    if !empty {
                        line.push(' ');
                    }
                    line.push_str(word);
                    len += needed;
                    empty = false;
                    break;
                }

                if !empty {
                    out.push(std::mem::replace(&mut line, String::from(rest)));
                    prefix = rest;
                    len = rest.chars().count();
                    empty = true;
                    continue;
                }

                let room = width.saturating_sub(len).max(1);
                let split = word
                    .char_indices()
                    .nth(room)
                    .map(|(i, _)| i)
                    .unwrap_or(word.len());
                line.push_str(&word[..split]);
                out.push(std::mem::replace(&mut line, String::from(rest)));
                prefix = rest;
                len = rest.chars().count();
                word = &word[split..];
            }
        }

        if !empty {
            out.push(line);
        } else if !had_words {
            out.push(line.trim_end().to_string());
        }
        prefix = rest;
    }

    out
}

fn lay_out(outline: &Outline, width: usize) -> Vec<Line> {
    let mut lines = Vec::new();
    let push_wrapped = |lines: &mut Vec<Line>, text: &str, first: &str, rest: &str| {
        lines.extend(wrap(text, width, first, rest).into_iter().map(Line::plain));
    };
    let push_heading = |lines: &mut Vec<Line>, text: &str| {
        lines.extend(wrap(text, width, "", "  ").into_iter().map(Line::heading));
    };

    push_wrapped(&mut lines, &outline.title.to_uppercase(), "", "");
    let header: Vec<String> = outline
        .header
        .iter()
        .map(|(label, value)| format!("{}: {}", label, value))
        .collect();
    push_wrapped(&mut lines, &header.join(" | "), "", "");

    for section in &outline.sections {
        lines.push(Line::blank());
        push_heading(
            &mut lines,
            &format!("{}. {}", section.number, section.title.to_uppercase()),
        );

        for block in &section.blocks {
            match block {
                Block::Field {
                    label,
                    value,
                    style: FieldStyle::Inline,
                } => {
                    push_wrapped(&mut lines, &format!("{}: {}", label, value), "", "  ");
                }
                Block::Field {
                    label,
                    value,
                    style: FieldStyle::Block,
                } => {
                    push_heading(&mut lines, &format!("{}:", label));
                    push_wrapped(&mut lines, value, "  ", "  ");
                }
                Block::List { label, items } => {
                    push_heading(&mut lines, &format!("{}:", label));
                    for item in items {
                        push_wrapped(&mut lines, item, "  - ", "    ");
                    }
                }
                Block::Activity {
                    number,
                    sessions,
                    fields,
                } => {
                    push_heading(
                        &mut lines,
                        &format!("{} {} ({})", outline.activity_label, number, sessions),
                    );
                    for (label, value) in fields {
                        push_wrapped(&mut lines, &format!("{}: {}", label, value), "  ", "    ");
                    }
                }
                Block::Paragraph(text) => {
                    push_wrapped(&mut lines, text, "", "");
                }
            }
        }
    }

    lines.push(Line::blank());
    push_wrapped(&mut lines, outline.watermark, "", "");
    lines
}

/// Lines that must share a page when a heading starts at `start`: the
/// heading's own wrapped lines plus the line after them
fn heading_group(lines: &[Line], start: usize) -> usize {
    let run = lines[start..]
        .iter()
        .take_while(|line| line.keep_with_next)
        .count();
    if start + run < lines.len() {
        run + 1
    } else {
        run
    }
}

fn paginate(lines: Vec<Line>, body_height: usize) -> Vec<Vec<String>> {
    let mut pages = Vec::new();
    let mut current: Vec<String> = Vec::new();

    for i in 0..lines.len() {
        let line = &lines[i];
        if current.len() == body_height {
            pages.push(std::mem::take(&mut current));
        }
        if current.is_empty() && line.text.is_empty() {
            continue;
        }

        let starts_heading = line.keep_with_next && (i == 0 || !lines[i - 1].keep_with_next);
        if starts_heading && !current.is_empty() {
            let group = heading_group(&lines, i);
            if group <= body_height && current.len() + group > body_height {
                pages.push(std::mem::take(&mut current));
            }
        }
        current.push(line.text.clone());
    }

    if !current.is_empty() || pages.is_empty() {
        pages.push(current);
    }
    pages
}

fn centered(text: &str, width: usize) -> String {
    let pad = width.saturating_sub(text.chars().count()) / 2;
    format!("{}{}", " ".repeat(pad), text)
}

/// Render `doc` as paginated plain text with labels in `locale`
pub fn render_paginated(doc: &LearningSituation, locale: Locale, layout: &PageLayout) -> String {
    render_outline_paginated(&build_outline(doc, locale), layout)
}

pub fn render_outline_paginated(outline: &Outline, layout: &PageLayout) -> String {
    let width = layout.text_width();
    let body_height = layout.body_height();
    let pages = paginate(lay_out(outline, width), body_height);

    let rendered: Vec<String> = pages
        .into_iter()
        .enumerate()
        .map(|(i, mut body)| {
            body.resize(body_height, String::new());
            body.push(String::new());
            body.push(centered(&(i + 1).to_string(), width));
            let mut page = body.join("\n");
            page.push('\n');
            page
        })
        .collect();

    rendered.join(&PAGE_BREAK.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_respects_width_and_prefixes() {
        let lines = wrap("uno dos tres cuatro cinco seis", 12, "- ", "  ");
        assert_eq!(lines, vec!["- uno dos", "  tres", "  cuatro", "  cinco seis"]);
        assert!(lines.iter().all(|l| l.chars().count() <= 12));
    }

    #[test]
    fn test_wrap_splits_long_words() {
        let lines = wrap("abcdefghij", 4, "", "");
        assert_eq!(lines, vec!["abcd", "efgh", "ij"]);
    }

    #[test]
    fn test_wrap_counts_characters() {
        let lines = wrap("ñññ ááá", 7, "", "");
        assert_eq!(lines, vec!["ñññ ááá"]);
    }

    #[test]
    fn test_wrap_keeps_paragraph_breaks() {
        let lines = wrap("primero\n\nsegundo", 40, "  ", "  ");
        assert_eq!(lines, vec!["  primero", "", "  segundo"]);
    }

    #[test]
    fn test_heading_moves_to_next_page() {
        let lines = vec![
            Line::plain("a".into()),
            Line::heading("H".into()),
            Line::plain("b".into()),
        ];
        let pages = paginate(lines, 2);
        assert_eq!(pages, vec![vec!["a".to_string()], vec!["H".to_string(), "b".to_string()]]);
    }

    #[test]
    fn test_wrapped_heading_stays_together_with_next_line() {
        let mut lines = vec![Line::plain("a".into()), Line::plain("b".into())];
        lines.extend(wrap("Encabezado largo que ocupa dos", 20, "", "  ").into_iter().map(Line::heading));
        lines.push(Line::plain("c".into()));

        let pages = paginate(lines, 4);

        assert_eq!(pages[0], vec!["a".to_string(), "b".to_string()]);
        assert_eq!(pages[1].len(), 3);
        assert_eq!(pages[1][2], "c");
    }

    #[test]
    fn test_long_headings_are_wrapped_to_width() {
        let doc = LearningSituation {
            activities: vec![ikasnova_model::Activity {
                sessions: "sesión ".repeat(20),
                ..Default::default()
            }],
            ..Default::default()
        };
        let layout = PageLayout {
            width: 40,
            lines_per_page: 30,
        };

        let text = render_paginated(&doc, Locale::Es, &layout);

        for page in text.split(PAGE_BREAK) {
            assert_eq!(page.lines().count(), 30);
            assert!(page.lines().all(|l| l.chars().count() <= 40), "{}", page);
        }
        assert!(text.contains("Descripción y finalidad"));
    }

    #[test]
    fn test_centered_page_number() {
        assert_eq!(centered("3", 9), "    3");
    }
}
