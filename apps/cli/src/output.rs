//! Writing imported notes to a sink.

use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::Serialize;
use simpletester_core::Note;
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Plain,
    Json,
}

/// Notes imported from one file.
#[derive(Debug, Clone, Serialize)]
pub struct SourceReport {
    pub path: String,
    pub notes: Vec<Note>,
}

/// Result of an import run.
#[derive(Debug, Clone, Serialize)]
pub struct ImportReport {
    pub imported_at: DateTime<Utc>,
    pub sources: Vec<SourceReport>,
}

impl ImportReport {
    pub fn new(sources: Vec<SourceReport>) -> Self {
        Self {
            imported_at: Utc::now(),
            sources,
        }
    }

    pub fn note_count(&self) -> usize {
        self.sources.iter().map(|s| s.notes.len()).sum()
    }
}

/// Write the report in the requested format.
pub fn write_report<W: Write>(writer: &mut W, report: &ImportReport, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *writer, report)?;
            writeln!(writer)?;
        }
        OutputFormat::Plain => {
            for note in report.sources.iter().flat_map(|s| &s.notes) {
                writeln!(writer, "{}", note.question_field)?;
                writeln!(writer, "---")?;
                writeln!(writer, "{}", note.answer_field)?;
                writeln!(writer)?;
            }
        }
    }
    writer.flush()?;
    Ok(())
}
