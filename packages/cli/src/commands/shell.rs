//! Line parser for the interactive session.
//!
//! One command per line, first word is the verb. Multi-part arguments are
//! separated with `|` so grades and topics can contain spaces:
//!
//! ```text
//! new 3º Primaria | Ciencias | El ciclo del agua
//! list basicKnowledge El agua | Estados de la materia
//! activity 2 grouping Parejas
//! accept 2.grouping
//! ```

use ikasnova_common::{EducationalStage, GenerationMode};
use ikasnova_editor::SuggestionTarget;
use ikasnova_model::{ActivityField, DocumentField, ListField, TextField};
use ikasnova_workspace::CreateRequest;
use std::path::PathBuf;
use thiserror::Error;

pub const HELP: &str = "\
Commands:
  stage <infantil|primaria|eso|bachillerato|fp|none>
  mode <auto|manual|upload|none>
  new <grade> | <subject> | <topic> [| <notes>]
  upload <file.pdf|png|jpg|webp>
  show                          print the draft
  set <field> <text>            replace a text field
  list <field> <a> | <b> ...    replace a list field
  activity <n> <field> <text>   replace a field of activity n
  add-activity
  remove-activity <n>
  generate-activity <idea>
  review
  suggestions
  accept <target|all>           target: field name or n.field
  reject <target|all>
  translate
  lang                          switch interface language
  edit                          toggle editing mode
  export <md|pages|json>
  error [clear]
  reset
  help
  quit";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ShellError {
    #[error("Unknown command: {0} (type `help`)")]
    UnknownCommand(String),

    #[error("Usage: {0}")]
    Usage(&'static str),

    #[error("{0}")]
    Invalid(String),
}

/// Which pending suggestions an accept/reject applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    All,
    One(SuggestionTarget),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    Stage(Option<EducationalStage>),
    Mode(Option<GenerationMode>),
    New(CreateRequest),
    Upload(PathBuf),
    Show,
    Set { field: TextField, value: String },
    List { field: ListField, items: Vec<String> },
    Activity { index: usize, field: ActivityField, value: String },
    AddActivity,
    RemoveActivity(usize),
    GenerateActivity(String),
    Review,
    Suggestions,
    Accept(Selection),
    Reject(Selection),
    Translate,
    Lang,
    Edit,
    Export(String),
    Error { clear: bool },
    Reset,
    Help,
    Quit,
}

fn split_word(input: &str) -> (&str, &str) {
    let input = input.trim();
    match input.split_once(char::is_whitespace) {
        Some((head, rest)) => (head, rest.trim()),
        None => (input, ""),
    }
}

fn non_empty(rest: &str, usage: &'static str) -> Result<String, ShellError> {
    if rest.is_empty() {
        Err(ShellError::Usage(usage))
    } else {
        Ok(rest.to_string())
    }
}

fn invalid(err: impl std::fmt::Display) -> ShellError {
    ShellError::Invalid(err.to_string())
}

/// 1-based position as typed, 0-based index as stored
fn parse_position(word: &str, usage: &'static str) -> Result<usize, ShellError> {
    match word.parse::<usize>() {
        Ok(n) if n >= 1 => Ok(n - 1),
        _ => Err(ShellError::Usage(usage)),
    }
}

fn parse_optional<T: std::str::FromStr>(rest: &str, usage: &'static str) -> Result<Option<T>, ShellError>
where
    T::Err: std::fmt::Display,
{
    match rest {
        "" => Err(ShellError::Usage(usage)),
        "none" => Ok(None),
        value => value.parse().map(Some).map_err(invalid),
    }
}

/// Parse `title`, `basicKnowledge` or `2.grouping`
pub fn parse_target(input: &str) -> Result<SuggestionTarget, ShellError> {
    if let Some((position, field)) = input.split_once('.') {
        let index = parse_position(position, "accept <n.field>")?;
        let field = field.parse::<ActivityField>().map_err(invalid)?;
        return Ok(SuggestionTarget::Activity { index, field });
    }

    match input.parse::<DocumentField>().map_err(invalid)? {
        DocumentField::Text(field) => Ok(SuggestionTarget::Text { field }),
        DocumentField::List(field) => Ok(SuggestionTarget::List { field }),
    }
}

/// Inverse of [`parse_target`]
pub fn format_target(target: SuggestionTarget) -> String {
    match target {
        SuggestionTarget::Text { field } => field.to_string(),
        SuggestionTarget::List { field } => field.to_string(),
        SuggestionTarget::Activity { index, field } => format!("{}.{}", index + 1, field),
    }
}

fn parse_selection(rest: &str, usage: &'static str) -> Result<Selection, ShellError> {
    match rest {
        "" => Err(ShellError::Usage(usage)),
        "all" => Ok(Selection::All),
        target => parse_target(target).map(Selection::One),
    }
}

fn parse_new(rest: &str) -> Result<CreateRequest, ShellError> {
    const USAGE: &str = "new <grade> | <subject> | <topic> [| <notes>]";

    let parts: Vec<&str> = rest.split('|').map(str::trim).collect();
    match parts.as_slice() {
        [grade, subject, topic] => Ok(CreateRequest {
            grade: grade.to_string(),
            subject: subject.to_string(),
            topic: topic.to_string(),
            extra_notes: None,
        }),
        [grade, subject, topic, notes] => Ok(CreateRequest {
            grade: grade.to_string(),
            subject: subject.to_string(),
            topic: topic.to_string(),
            extra_notes: Some(notes.to_string()).filter(|n| !n.is_empty()),
        }),
        _ => Err(ShellError::Usage(USAGE)),
    }
}

/// Parse one input line. Blank lines yield `None`.
pub fn parse_line(line: &str) -> Result<Option<ShellCommand>, ShellError> {
    let (verb, rest) = split_word(line);
    if verb.is_empty() {
        return Ok(None);
    }

    let command = match verb {
        "stage" => ShellCommand::Stage(parse_optional(rest, "stage <name|none>")?),
        "mode" => ShellCommand::Mode(parse_optional(rest, "mode <auto|manual|upload|none>")?),
        "new" => ShellCommand::New(parse_new(rest)?),
        "upload" => ShellCommand::Upload(PathBuf::from(non_empty(rest, "upload <file>")?)),
        "show" => ShellCommand::Show,
        "set" => {
            const USAGE: &str = "set <field> <text>";
            let (field, value) = split_word(rest);
            if field.is_empty() {
                return Err(ShellError::Usage(USAGE));
            }
            ShellCommand::Set {
                field: field.parse().map_err(invalid)?,
                value: value.to_string(),
            }
        }
        "list" => {
            const USAGE: &str = "list <field> <a> | <b> ...";
            let (field, items) = split_word(rest);
            if field.is_empty() {
                return Err(ShellError::Usage(USAGE));
            }
            ShellCommand::List {
                field: field.parse().map_err(invalid)?,
                items: items
                    .split('|')
                    .map(str::trim)
                    .filter(|item| !item.is_empty())
                    .map(String::from)
                    .collect(),
            }
        }
        "activity" => {
            const USAGE: &str = "activity <n> <field> <text>";
            let (position, rest) = split_word(rest);
            let (field, value) = split_word(rest);
            if field.is_empty() {
                return Err(ShellError::Usage(USAGE));
            }
            ShellCommand::Activity {
                index: parse_position(position, USAGE)?,
                field: field.parse().map_err(invalid)?,
                value: value.to_string(),
            }
        }
        "add-activity" => ShellCommand::AddActivity,
        "remove-activity" => {
            ShellCommand::RemoveActivity(parse_position(rest, "remove-activity <n>")?)
        }
        "generate-activity" => {
            ShellCommand::GenerateActivity(non_empty(rest, "generate-activity <idea>")?)
        }
        "review" => ShellCommand::Review,
        "suggestions" => ShellCommand::Suggestions,
        "accept" => ShellCommand::Accept(parse_selection(rest, "accept <target|all>")?),
        "reject" => ShellCommand::Reject(parse_selection(rest, "reject <target|all>")?),
        "translate" => ShellCommand::Translate,
        "lang" => ShellCommand::Lang,
        "edit" => ShellCommand::Edit,
        "export" => ShellCommand::Export(non_empty(rest, "export <md|pages|json>")?),
        "error" => match rest {
            "" => ShellCommand::Error { clear: false },
            "clear" => ShellCommand::Error { clear: true },
            _ => return Err(ShellError::Usage("error [clear]")),
        },
        "reset" => ShellCommand::Reset,
        "help" | "?" => ShellCommand::Help,
        "quit" | "exit" => ShellCommand::Quit,
        other => return Err(ShellError::UnknownCommand(other.to_string())),
    };

    Ok(Some(command))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(line: &str) -> ShellCommand {
        parse_line(line).unwrap().unwrap()
    }

    #[test]
    fn test_blank_line() {
        assert_eq!(parse_line("   ").unwrap(), None);
    }

    #[test]
    fn test_new_splits_on_pipes() {
        assert_eq!(
            parse("new 3º Primaria | Ciencias | El ciclo del agua"),
            ShellCommand::New(CreateRequest {
                grade: "3º Primaria".to_string(),
                subject: "Ciencias".to_string(),
                topic: "El ciclo del agua".to_string(),
                extra_notes: None,
            })
        );
        assert_eq!(
            parse_line("new solo un tema"),
            Err(ShellError::Usage("new <grade> | <subject> | <topic> [| <notes>]"))
        );
    }

    #[test]
    fn test_stage_and_mode() {
        assert_eq!(parse("stage eso"), ShellCommand::Stage(Some(EducationalStage::Eso)));
        assert_eq!(parse("stage none"), ShellCommand::Stage(None));
        assert_eq!(parse("mode manual"), ShellCommand::Mode(Some(GenerationMode::Manual)));
        assert!(matches!(parse_line("stage universidad"), Err(ShellError::Invalid(_))));
    }

    #[test]
    fn test_field_edits() {
        assert_eq!(
            parse("set stage_area 2º ESO - Historia"),
            ShellCommand::Set {
                field: TextField::StageArea,
                value: "2º ESO - Historia".to_string(),
            }
        );
        assert_eq!(
            parse("list basicKnowledge El agua |  | Estados de la materia"),
            ShellCommand::List {
                field: ListField::BasicKnowledge,
                items: vec!["El agua".to_string(), "Estados de la materia".to_string()],
            }
        );
        assert_eq!(
            parse("activity 2 grouping Parejas"),
            ShellCommand::Activity {
                index: 1,
                field: ActivityField::Grouping,
                value: "Parejas".to_string(),
            }
        );
        assert_eq!(
            parse_line("activity 0 grouping Parejas"),
            Err(ShellError::Usage("activity <n> <field> <text>"))
        );
    }

    #[test]
    fn test_targets() {
        for input in ["title", "basicKnowledge", "3.evalTools"] {
            assert_eq!(format_target(parse_target(input).unwrap()), input);
        }
        assert_eq!(parse("accept all"), ShellCommand::Accept(Selection::All));
        assert_eq!(
            parse("reject 1.sessions"),
            ShellCommand::Reject(Selection::One(SuggestionTarget::Activity {
                index: 0,
                field: ActivityField::Sessions,
            }))
        );
        assert!(parse_target("activities").is_err());
    }

    #[test]
    fn test_unknown_command() {
        assert_eq!(
            parse_line("print"),
            Err(ShellError::UnknownCommand("print".to_string()))
        );
    }
}
