//! Core library for importing SimpleTester flashcard databases.
//!
//! Provides:
//! - Line decoding for legacy-encoded database files
//! - Positional parser for the SimpleTester line format
//! - Conversion of questions into two-field notes
//! - Importer descriptors for plugin hosts

pub mod decode;
pub mod error;
pub mod importer;
pub mod note;
pub mod parser;
pub mod types;

pub use decode::{decode_lines, DEFAULT_ENCODING};
pub use error::{DecodeError, Error, FormatError, RangeError, Result};
pub use importer::{ImporterDescriptor, SimpleTesterImporter, SIMPLETESTER};
pub use note::{build_note, build_notes};
pub use parser::{parse_lines, LineParser};
pub use types::{Note, Question, NOTE_FIELD_COUNT};

/// Parse a line sequence and convert every question into a note.
///
/// Nothing is returned unless the whole input is valid.
pub fn import_lines<S: AsRef<str>>(lines: &[S]) -> Result<Vec<Note>> {
    let questions = parse_lines(lines)?;
    Ok(build_notes(&questions)?)
}
