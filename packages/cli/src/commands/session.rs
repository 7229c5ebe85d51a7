use crate::commands::render::parse_format;
use crate::commands::shell::{format_target, parse_line, Selection, ShellCommand, HELP};
use crate::config::Config;
use anyhow::Result;
use clap::Args;
use colored::Colorize;
use ikasnova_common::{Labels, Locale};
use ikasnova_editor::{DraftStore, Edit, Suggestion};
use ikasnova_export::render_markdown;
use ikasnova_provider::{ContentProvider, GeminiProvider, UploadedFile};
use ikasnova_workspace::{Workspace, WorkspaceError, WorkspaceResult};
use std::io::Write;
use std::path::{Path, PathBuf};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::debug;

#[derive(Debug, Args)]
pub struct SessionArgs {
    /// Language to start in (defaults to the configured locale)
    #[arg(short, long)]
    pub locale: Option<Locale>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Shell-wide settings taken from the config
pub struct SessionContext {
    pub config: Config,
    pub out_dir: PathBuf,
}

pub async fn session(args: SessionArgs, cwd: &Path) -> Result<()> {
    let config = Config::load(cwd)?;
    let locale = args.locale.unwrap_or(config.default_locale);
    let provider = GeminiProvider::new(config.gemini_settings())?;
    let workspace = Workspace::new(provider, locale);
    let ctx = SessionContext {
        out_dir: config.get_out_dir(cwd),
        config,
    };

    println!(
        "{} {}",
        Labels::for_locale(locale).app_title.bright_blue().bold(),
        format!("({})", locale.language_name()).dimmed()
    );
    println!("{}", "Type `help` for commands.".dimmed());

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        print!("{} ", "ikasnova>".bright_blue());
        std::io::stdout().flush()?;

        let Some(line) = lines.next_line().await? else {
            break;
        };

        match parse_line(&line) {
            Ok(Some(command)) => {
                if execute(&workspace, command, &ctx).await? == Flow::Quit {
                    break;
                }
            }
            Ok(None) => {}
            Err(err) => println!("{} {}", "✗".red(), err),
        }
    }

    Ok(())
}

/// Report the outcome of a workspace action
fn report<T>(workspace_error: Option<String>, result: WorkspaceResult<T>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(WorkspaceError::Busy(action)) => {
            println!("{} {} already running", "⏳".yellow(), action);
            None
        }
        Err(err) => {
            debug!(error = %err, "action failed");
            let message = workspace_error.unwrap_or_else(|| err.to_string());
            println!("{} {}", "✗".red(), message.red());
            None
        }
    }
}

fn apply_edit<P: ContentProvider>(workspace: &Workspace<P>, edit: Edit) {
    if !workspace.with_store(DraftStore::is_editing) {
        println!("{} Editing is off. Type `edit` first.", "⚠️".yellow());
        return;
    }
    match workspace.update_store(|store| store.apply_edit(edit)) {
        Ok(()) => println!("  {} updated", "✓".green()),
        Err(err) => println!("{} {}", "✗".red(), err),
    }
}

fn print_suggestions(suggestions: &[Suggestion]) {
    if suggestions.is_empty() {
        println!("  No pending suggestions");
        return;
    }
    for suggestion in suggestions {
        let value = match suggestion {
            Suggestion::Text { value, .. } | Suggestion::Activity { value, .. } => value.clone(),
            Suggestion::List { value, .. } => value.join(" | "),
        };
        println!(
            "  {} {}",
            format!("{}:", format_target(suggestion.target())).bright_white(),
            value
        );
    }
}

/// Run one shell command against the workspace
pub async fn execute<P: ContentProvider>(
    workspace: &Workspace<P>,
    command: ShellCommand,
    ctx: &SessionContext,
) -> Result<Flow> {
    match command {
        ShellCommand::Stage(stage) => {
            workspace.update_store(|s| s.select_stage(stage));
            let locale = workspace.with_store(DraftStore::locale);
            match stage {
                Some(stage) => println!("  {} {}", "✓".green(), stage.label(locale)),
                None => println!("  {} stage cleared", "✓".green()),
            }
        }
        ShellCommand::Mode(mode) => {
            workspace.update_store(|s| s.select_mode(mode));
            println!("  {} mode {}", "✓".green(), mode.map(|m| m.to_string()).unwrap_or_else(|| "none".into()));
        }
        ShellCommand::New(request) => {
            let result = workspace.create(request).await;
            if report(workspace.last_error(), result).is_some() {
                println!("  {} draft ready", "✓".green());
            }
        }
        ShellCommand::Upload(path) => match UploadedFile::from_path(&path) {
            Ok(file) => {
                let result = workspace.import_file(file).await;
                if report(workspace.last_error(), result).is_some() {
                    println!("  {} {} imported", "✓".green(), path.display());
                }
            }
            Err(err) => println!("{} {}", "✗".red(), err),
        },
        ShellCommand::Show => {
            let store = workspace.snapshot();
            match store.document() {
                Some(document) => {
                    println!("{}", render_markdown(document, store.locale()));
                    if store.has_suggestions() {
                        println!(
                            "{} {} pending suggestions (type `suggestions`)",
                            "💡".yellow(),
                            store.suggestions().len()
                        );
                    }
                }
                None => println!("  No draft yet"),
            }
        }
        ShellCommand::Set { field, value } => apply_edit(workspace, Edit::SetText { field, value }),
        ShellCommand::List { field, items } => apply_edit(workspace, Edit::SetList { field, items }),
        ShellCommand::Activity { index, field, value } => {
            apply_edit(workspace, Edit::SetActivityField { index, field, value })
        }
        ShellCommand::AddActivity => apply_edit(workspace, Edit::AddActivity),
        ShellCommand::RemoveActivity(index) => apply_edit(workspace, Edit::RemoveActivity { index }),
        ShellCommand::GenerateActivity(prompt) => {
            let result = workspace.generate_activity(&prompt).await;
            if report(workspace.last_error(), result).is_some() {
                println!("  {} activity added", "✓".green());
            }
        }
        ShellCommand::Review => {
            let result = workspace.review().await;
            match report(workspace.last_error(), result) {
                Some(true) => print_suggestions(&workspace.with_store(DraftStore::suggestions)),
                Some(false) => println!("  {} nothing to suggest", "✓".green()),
                None => {}
            }
        }
        ShellCommand::Suggestions => {
            print_suggestions(&workspace.with_store(DraftStore::suggestions));
        }
        ShellCommand::Accept(selection) => {
            let accepted = workspace.update_store(|store| match selection {
                Selection::All => store
                    .suggestions()
                    .into_iter()
                    .filter(|s| store.accept_suggestion(s.clone()))
                    .count(),
                Selection::One(target) => usize::from(store.accept_pending(target)),
            });
            println!("  {} {} accepted", "✓".green(), accepted);
        }
        ShellCommand::Reject(selection) => {
            let rejected = workspace.update_store(|store| match selection {
                Selection::All => store
                    .suggestions()
                    .into_iter()
                    .filter(|s| store.reject_suggestion(s.target()))
                    .count(),
                Selection::One(target) => usize::from(store.reject_suggestion(target)),
            });
            println!("  {} {} rejected", "✓".green(), rejected);
        }
        ShellCommand::Translate => {
            let result = workspace.translate().await;
            if let Some(locale) = report(workspace.last_error(), result) {
                println!("  {} {}", "✓".green(), locale.language_name());
            }
        }
        ShellCommand::Lang => {
            let locale = workspace.update_store(DraftStore::toggle_locale);
            println!("  {} {}", "✓".green(), locale.language_name());
        }
        ShellCommand::Edit => {
            let editing = workspace.update_store(DraftStore::toggle_editing);
            println!("  {} editing {}", "✓".green(), if editing { "on" } else { "off" });
        }
        ShellCommand::Export(name) => match parse_format(&name, &ctx.config) {
            Ok(format) => {
                let result = workspace.export(&ctx.out_dir, format);
                if let Some(path) = report(workspace.last_error(), result) {
                    println!("  {} {}", "✓".green(), path.display());
                }
            }
            Err(err) => println!("{} {}", "✗".red(), err),
        },
        ShellCommand::Error { clear } => {
            if clear {
                workspace.dismiss_error();
            } else {
                match workspace.last_error() {
                    Some(message) => println!("{} {}", "✗".red(), message),
                    None => println!("  No error"),
                }
            }
        }
        ShellCommand::Reset => {
            workspace.reset();
            println!("  {} session cleared", "✓".green());
        }
        ShellCommand::Help => println!("{}", HELP),
        ShellCommand::Quit => return Ok(Flow::Quit),
    }

    Ok(Flow::Continue)
}
