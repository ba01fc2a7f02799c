use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use isaac_context::resolver::{self, PageContext};
use isaac_context::{select_theme, UrlPageContext};
use isaac_core::{ContentDocument, SiteTheme, UserContext};

/// Developer tool for inspecting page-context resolution.
#[derive(Parser)]
#[command(name = "isaac-context", version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Resolve the page context for a content document.
    Resolve {
        /// Content document JSON ({"tags": [...], "audience": [...]}).
        #[arg(long)]
        doc: PathBuf,
        /// Previous page context JSON ({"stage": ..., "subject": ...}).
        #[arg(long)]
        previous: Option<PathBuf>,
        /// Registered user contexts JSON ([{"stage": ..., "examBoard": ...}]).
        #[arg(long)]
        user_contexts: Option<PathBuf>,
        /// Also print which rule fired on each axis.
        #[arg(long)]
        explain: bool,
    },
    /// Select the display theme for a set of content tags.
    Theme {
        /// Theme of the nearest themed ancestor, if any.
        #[arg(long)]
        current: Option<SiteTheme>,
        /// Content tags.
        tags: Vec<String>,
    },
    /// Parse a page context from a URL path.
    Url {
        /// URL path, e.g. /physics/a_level/questions.
        path: String,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Resolve {
            doc,
            previous,
            user_contexts,
            explain,
        } => {
            tracing::info!(doc = %doc.display(), "resolving page context");
            let doc: ContentDocument = read_json(&doc)?;
            let previous: Option<PageContext> =
                previous.as_deref().map(read_json).transpose()?;
            let user_contexts: Option<Vec<UserContext>> =
                user_contexts.as_deref().map(read_json).transpose()?;

            let resolution = resolver::resolve_explained(
                previous.as_ref(),
                user_contexts.as_deref(),
                Some(&doc),
            );
            tracing::info!(
                stage_rule = ?resolution.stage_rule,
                subject_rule = ?resolution.subject_rule,
                "resolution complete"
            );
            if explain {
                println!("{}", serde_json::to_string_pretty(&resolution)?);
            } else {
                println!("{}", serde_json::to_string_pretty(&resolution.context)?);
            }
        }
        Command::Theme { current, tags } => {
            let theme = select_theme(&|| current, &tags);
            println!("{theme}");
        }
        Command::Url { path } => {
            let context = UrlPageContext::from_path(&path);
            println!("{}", serde_json::to_string_pretty(&context)?);
        }
    }

    Ok(())
}

fn read_json<T: serde::de::DeserializeOwned>(path: &std::path::Path) -> Result<T> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("failed to parse {}", path.display()))
}
