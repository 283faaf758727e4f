//! word-paste - clean Word clipboard content into list items
//!
//! Reads pasted content from a file or stdin and prints one JSON string per
//! item, or the rendered list markup with `--html`.

use anyhow::{Context, Result};
use clap::Parser;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use word_paste::{render_list, NormalizerSettings, SettingsFile, WordListNormalizer};

#[derive(Debug, Parser)]
#[command(version, about = "Clean Word clipboard content into list items", long_about = None)]
struct Cli {
    /// Print the rendered list markup instead of one JSON string per item
    #[arg(long)]
    html: bool,

    /// Path to a JSON settings file
    #[arg(long)]
    settings: Option<PathBuf>,

    /// Pasted content to read, or `-` for stdin
    input: Option<PathBuf>,
}

impl Cli {
    /// Input file, or `None` for stdin
    fn input_path(&self) -> Option<&Path> {
        self.input.as_deref().filter(|path| *path != Path::new("-"))
    }
}

fn load_settings(path: Option<&Path>) -> Result<NormalizerSettings> {
    match path {
        Some(path) => SettingsFile::new(path)
            .load_sync()
            .with_context(|| format!("failed to read settings {}", path.display())),
        None => Ok(NormalizerSettings::default()),
    }
}

fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display())),
        None => {
            let mut content = String::new();
            std::io::stdin()
                .read_to_string(&mut content)
                .context("failed to read stdin")?;
            Ok(content)
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let settings = load_settings(cli.settings.as_deref())?;
    let content = read_input(cli.input_path())?;

    let items = WordListNormalizer::with_settings(&settings).normalize(&content);
    tracing::info!("extracted {} list items", items.len());

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    if cli.html {
        writeln!(out, "{}", render_list(&items, &settings.list_style))?;
    } else {
        for item in &items {
            writeln!(out, "{}", serde_json::to_string(item)?)?;
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    run(&cli)
}
