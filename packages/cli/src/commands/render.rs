use crate::config::Config;
use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use ikasnova_common::Locale;
use ikasnova_export::{render, write_export, ExportFormat};
use ikasnova_model::LearningSituation;
use std::path::{Path, PathBuf};

#[derive(Debug, Args)]
pub struct RenderArgs {
    /// Document JSON file
    pub input: PathBuf,

    /// Output format (md, pages, json)
    #[arg(short, long, default_value = "md")]
    pub format: String,

    /// Language of the section labels (defaults to the configured locale)
    #[arg(short, long)]
    pub locale: Option<Locale>,

    /// Write into the export directory instead of stdout
    #[arg(long)]
    pub save: bool,

    /// Export directory (overrides config)
    #[arg(short, long)]
    pub out_dir: Option<PathBuf>,
}

/// Resolve a format name, applying the configured page layout
pub fn parse_format(name: &str, config: &Config) -> Result<ExportFormat> {
    let format: ExportFormat = name.parse()?;
    Ok(match format {
        ExportFormat::Paginated(_) => ExportFormat::Paginated(config.page_layout),
        other => other,
    })
}

pub fn load_document(path: &Path) -> Result<LearningSituation> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Cannot read {}", path.display()))?;
    let document = serde_json::from_str(&content)
        .with_context(|| format!("{} is not a Learning Situation document", path.display()))?;
    Ok(document)
}

pub fn render_file(args: RenderArgs, cwd: &Path) -> Result<()> {
    let config = Config::load(cwd)?;
    let format = parse_format(&args.format, &config)?;
    let locale = args.locale.unwrap_or(config.default_locale);
    let document = load_document(&cwd.join(&args.input))?;

    if args.save {
        let out_dir = args
            .out_dir
            .map(|dir| cwd.join(dir))
            .unwrap_or_else(|| config.get_out_dir(cwd));
        let path = write_export(&out_dir, format, &document, locale)?;
        println!("  {} {} → {}", "✓".green(), args.input.display(), path.display());
    } else {
        print!("{}", render(&document, format, locale)?);
    }

    Ok(())
}
