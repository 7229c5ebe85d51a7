//! # Ikasnova Export
//!
//! Renders a Learning Situation for download.
//!
//! Both renderers share one outline (title, header line, six numbered
//! sections, watermark), so a field always appears under the same section:
//!
//! - [`render_markdown`]: Markdown, list fields one line per element
//! - [`render_paginated`]: fixed-size plain-text pages with a centered page
//!   number, separated by form feeds
//!
//! [`write_export`] writes either one, or the raw JSON, under the standard
//! file name.

mod error;
mod filename;
mod markdown;
mod outline;
mod paginated;

pub use error::{ExportError, ExportResult};
pub use filename::{export_file_name, FALLBACK_NUMBER};
pub use markdown::render_markdown;
pub use outline::{build_outline, Block, FieldStyle, Outline, Section};
pub use paginated::{render_paginated, PageLayout, PAGE_BREAK};

use ikasnova_common::Locale;
use ikasnova_model::LearningSituation;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Markdown,
    Paginated(PageLayout),
    Json,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Markdown => "md",
            ExportFormat::Paginated(_) => "txt",
            ExportFormat::Json => "json",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ExportFormat::Markdown => "md",
            ExportFormat::Paginated(_) => "pages",
            ExportFormat::Json => "json",
        })
    }
}

impl FromStr for ExportFormat {
    type Err = ExportError;

    fn from_str(s: &str) -> ExportResult<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "md" | "markdown" => Ok(ExportFormat::Markdown),
            "pages" | "paginated" | "txt" => Ok(ExportFormat::Paginated(PageLayout::default())),
            "json" => Ok(ExportFormat::Json),
            other => Err(ExportError::UnknownFormat(other.to_string())),
        }
    }
}

/// Render `document` in `format` without touching the filesystem
pub fn render(document: &LearningSituation, format: ExportFormat, locale: Locale) -> ExportResult<String> {
    match format {
        ExportFormat::Markdown => Ok(render_markdown(document, locale)),
        ExportFormat::Paginated(layout) => Ok(render_paginated(document, locale, &layout)),
        ExportFormat::Json => Ok(serde_json::to_string_pretty(document)?),
    }
}

/// Write `document` into `dir` under its standard file name.
///
/// Returns the written path.
pub fn write_export(
    dir: &Path,
    format: ExportFormat,
    document: &LearningSituation,
    locale: Locale,
) -> ExportResult<PathBuf> {
    let content = render(document, format, locale)?;
    let path = dir.join(export_file_name(
        &document.situation_number,
        locale,
        format.extension(),
    ));

    let write = |path: &Path| -> std::io::Result<()> {
        std::fs::create_dir_all(dir)?;
        std::fs::write(path, content.as_bytes())
    };
    write(&path).map_err(|source| ExportError::Write {
        path: path.clone(),
        source,
    })?;

    info!(path = %path.display(), format = %format, "document exported");
    Ok(path)
}
