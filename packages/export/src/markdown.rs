//! Markdown renderer

use crate::outline::{build_outline, Block, FieldStyle, Outline};
use ikasnova_common::Locale;
use ikasnova_model::LearningSituation;

struct Context {
    buffer: String,
}

impl Context {
    fn new() -> Self {
        Self {
            buffer: String::new(),
        }
    }

    fn add_line(&mut self, text: &str) {
        self.buffer.push_str(text);
        self.buffer.push('\n');
    }

    fn blank(&mut self) {
        if !self.buffer.is_empty() && !self.buffer.ends_with("\n\n") {
            self.buffer.push('\n');
        }
    }

    fn get_output(self) -> String {
        let mut out = self.buffer.trim_end().to_string();
        out.push('\n');
        out
    }
}

/// Render `doc` as Markdown with labels in `locale`
pub fn render_markdown(doc: &LearningSituation, locale: Locale) -> String {
    render_outline(&build_outline(doc, locale))
}

pub fn render_outline(outline: &Outline) -> String {
    let mut ctx = Context::new();

    ctx.add_line(&format!("# {}", outline.title));
    ctx.blank();

    let header: Vec<String> = outline
        .header
        .iter()
        .map(|(label, value)| format!("**{}:** {}", label, value))
        .collect();
    ctx.add_line(&header.join(" | "));
    ctx.blank();
    ctx.add_line("---");
    ctx.blank();

    for section in &outline.sections {
        ctx.add_line(&format!("## {}. {}", section.number, section.title));
        for block in &section.blocks {
            render_block(&mut ctx, block, outline.activity_label);
        }
        ctx.blank();
    }

    ctx.add_line("---");
    ctx.add_line(&format!("*{}*", outline.watermark));
    ctx.get_output()
}

fn render_block(ctx: &mut Context, block: &Block, activity_label: &str) {
    match block {
        Block::Field {
            label,
            value,
            style: FieldStyle::Inline,
        } => {
            ctx.add_line(&format!("* **{}:** {}", label, value));
        }
        Block::Field {
            label,
            value,
            style: FieldStyle::Block,
        } => {
            ctx.add_line(&format!("* **{}:**", label));
            ctx.add_line(value);
            ctx.blank();
        }
        Block::List { label, items } => {
            ctx.blank();
            ctx.add_line(&format!("### {}", label));
            for item in items {
                ctx.add_line(&format!("- {}", item));
            }
        }
        Block::Activity {
            number,
            sessions,
            fields,
        } => {
            ctx.blank();
            ctx.add_line(&format!("### {} {} ({})", activity_label, number, sessions));
            for (label, value) in fields {
                ctx.add_line(&format!("* **{}:** {}", label, value));
            }
        }
        Block::Paragraph(text) => {
            ctx.add_line(text);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_line() {
        let doc = LearningSituation {
            title: "El agua".to_string(),
            prog_unit_number: "4".to_string(),
            situation_number: "2".to_string(),
            ..Default::default()
        };
        let md = render_markdown(&doc, Locale::Es);
        let mut lines = md.lines();
        assert_eq!(lines.next(), Some("# El agua"));
        assert_eq!(lines.next(), Some(""));
        assert_eq!(
            lines.next(),
            Some("**Unidad de Programación Nº:** 4 | **SdA Nº:** 2")
        );
    }

    #[test]
    fn test_ends_with_watermark() {
        let md = render_markdown(&LearningSituation::default(), Locale::Eu);
        assert!(md.ends_with("---\n*Irakaslearen lan-dokumentua*\n"));
    }
}
