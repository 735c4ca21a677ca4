//! dirlist - a browsable directory index engine.
//!
//! Usage:
//!   dirlist                      List the web root
//!   dirlist docs/api             List a sub-directory
//!   dirlist -c config.json ...   Load listing configuration
//!   dirlist --format json ...    Emit the listing as JSON
//!   dirlist --help               Show help

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use color_eyre::eyre::{Context, Result};

use dirlist_core::{ListerConfig, MessageKind, MessageSink};
use dirlist_engine::DirectoryLister;

#[derive(Parser)]
#[command(
    name = "dirlist",
    version,
    about = "A browsable directory index engine",
    long_about = "dirlist resolves a relative path against a web root, rejects unsafe \
                  or disallowed paths, and prints the resulting directory listing with \
                  breadcrumb navigation."
)]
struct Cli {
    /// Relative path to list (defaults to the web root)
    #[arg(default_value = "")]
    path: String,

    /// Web root directory on disk
    #[arg(short, long, default_value = ".")]
    root: PathBuf,

    /// Application URL used for breadcrumb and parent links
    #[arg(short, long, default_value = "http://localhost/")]
    url: String,

    /// Configuration file (JSON); defaults are used when absent
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, default_value = "text")]
    format: OutputFormat,
}

#[derive(Debug, Clone, Copy, ValueEnum, Default)]
enum OutputFormat {
    #[default]
    Text,
    Json,
}

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();

    let (config, config_missing) = load_config(cli.config.as_deref())?;

    // The config message is recorded before resolution runs so it prints
    // ahead of any path error.
    let mut messages = MessageSink::new();
    if config_missing {
        messages.push(
            MessageKind::Error,
            "Unable to locate application config file",
        );
    }

    let mut lister = DirectoryLister::with_messages(&cli.root, cli.url, config, &cli.path, messages);

    let listing = lister.list_directory();
    let breadcrumbs = lister.list_breadcrumbs();

    match cli.format {
        OutputFormat::Text => {
            for crumb in &breadcrumbs {
                print!("{} ", crumb.label);
            }
            println!("  ({})", lister.listed_path());
            println!("{}", "─".repeat(70));

            if listing.is_empty() {
                println!(" (empty)");
            }
            for entry in listing.values() {
                println!(
                    " {:<40} {:>8} {:>20}  {}",
                    entry.name,
                    entry.size_display(),
                    entry.modified_display(),
                    entry.icon
                );
            }

            if let Some(messages) = lister.system_messages() {
                println!("{}", "─".repeat(70));
                for message in messages {
                    println!(" [{}] {}", message.kind, message.text);
                }
            }
        }
        OutputFormat::Json => {
            let output = serde_json::json!({
                "path": lister.listed_path(),
                "listing": listing,
                "breadcrumbs": breadcrumbs,
                "messages": lister.system_messages(),
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }

    Ok(())
}

/// Load the listing configuration.
///
/// A missing file is not fatal: the engine runs with defaults and the
/// absence is reported as a message (the core never checks for the config
/// file itself). Unparseable JSON is a hard error.
fn load_config(path: Option<&std::path::Path>) -> Result<(ListerConfig, bool)> {
    let Some(path) = path else {
        return Ok((ListerConfig::default(), false));
    };

    if !path.exists() {
        return Ok((ListerConfig::default(), true));
    }

    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("reading config file {}", path.display()))?;
    let config = serde_json::from_str(&raw)
        .with_context(|| format!("parsing config file {}", path.display()))?;

    Ok((config, false))
}
