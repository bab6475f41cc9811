pub mod config;
pub mod import;
pub mod output;

use std::fs::File;
use std::io::{self, BufWriter};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use simpletester_core::{SimpleTesterImporter, SIMPLETESTER};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Config;
use crate::output::{ImportReport, OutputFormat};

#[derive(Parser, Debug)]
#[command(name = "simpletester-import", about = "Convert SimpleTester databases into flashcard notes", version)]
pub struct Cli {
    /// Database files, or directories to scan for *.dat and *.txt files
    #[arg(required = true)]
    pub paths: Vec<PathBuf>,

    /// Text encoding of the input files (default: windows-1250)
    #[arg(long)]
    pub encoding: Option<String>,

    /// Output format
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Write notes to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

pub fn run() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let cli = Cli::parse();
    let config = Config::from_env()?.with_overrides(cli.encoding.clone(), cli.format);
    let report = import_all(&cli.paths, &config)?;

    match &cli.output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("failed to create {}", path.display()))?;
            output::write_report(&mut BufWriter::new(file), &report, config.format)?;
        }
        None => output::write_report(&mut io::stdout().lock(), &report, config.format)?,
    }

    tracing::info!(
        files = report.sources.len(),
        notes = report.note_count(),
        "Import finished"
    );
    Ok(())
}

/// Import every file reachable from `paths`. Fails on the first bad file.
pub fn import_all(paths: &[PathBuf], config: &Config) -> Result<ImportReport> {
    let importer = SimpleTesterImporter::with_encoding(config.encoding.as_str());
    let files = import::collect_files(paths, &SIMPLETESTER)?;

    tracing::info!(
        files = files.len(),
        encoding = %config.encoding,
        "Importing SimpleTester files"
    );

    let sources = files
        .iter()
        .map(|path| import::import_file(path, &importer))
        .collect::<Result<Vec<_>>>()?;

    Ok(ImportReport::new(sources))
}
