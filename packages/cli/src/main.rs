mod commands;
mod config;

use clap::{Parser, Subcommand};
use colored::Colorize;
use commands::{init, render_file, session, InitArgs, RenderArgs, SessionArgs};
use tracing_subscriber::EnvFilter;

/// Ikasnova CLI - Draft, review and translate Learning Situations
#[derive(Parser, Debug)]
#[command(name = "ikasnova")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Write a default ikasnova.config.json
    Init(InitArgs),

    /// Start an interactive authoring session
    Session(SessionArgs),

    /// Render a document JSON file as Markdown, pages or JSON
    Render(RenderArgs),
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match std::env::current_dir() {
        Ok(cwd) => match cli.command {
            Command::Init(args) => init(args, &cwd),
            Command::Session(args) => session(args, &cwd).await,
            Command::Render(args) => render_file(args, &cwd),
        },
        Err(err) => Err(anyhow::anyhow!("Cannot get current directory: {}", err)),
    };

    if let Err(err) = result {
        eprintln!();
        eprintln!("{} {}", "Error:".red().bold(), err);
        eprintln!();
        std::process::exit(1);
    }
}
