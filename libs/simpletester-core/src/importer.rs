//! Importer descriptors for plugin hosts.
//!
//! A host lists the available descriptors, shows their labels in its file
//! picker and calls `construct` for the one the user chose. Registration is
//! left to the host.

use crate::decode::{decode_lines, DEFAULT_ENCODING};
use crate::error::Result;
use crate::types::{Note, NOTE_FIELD_COUNT};
use std::path::Path;

/// Static description of an importer.
#[derive(Debug, Clone, Copy)]
pub struct ImporterDescriptor {
    /// Stable identifier.
    pub name: &'static str,
    /// Human-readable label for file pickers.
    pub label: &'static str,
    /// File extensions handled, lowercase and without the dot.
    pub extensions: &'static [&'static str],
    pub construct: fn() -> SimpleTesterImporter,
}

impl ImporterDescriptor {
    /// Check whether `path` has one of this importer's extensions.
    pub fn matches(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .map_or(false, |ext| {
                self.extensions
                    .iter()
                    .any(|known| known.eq_ignore_ascii_case(ext))
            })
    }
}

pub const SIMPLETESTER: ImporterDescriptor = ImporterDescriptor {
    name: "simpletester",
    label: "SimpleTester File (*.dat *.txt)",
    extensions: &["dat", "txt"],
    construct: SimpleTesterImporter::new,
};

static DESCRIPTORS: &[ImporterDescriptor] = &[SIMPLETESTER];

/// All importers this crate provides.
pub fn descriptors() -> &'static [ImporterDescriptor] {
    DESCRIPTORS
}

/// Get a descriptor by name.
pub fn find(name: &str) -> Option<&'static ImporterDescriptor> {
    descriptors().iter().find(|d| d.name == name)
}

/// Get the first descriptor accepting `path`.
pub fn for_path(path: &Path) -> Option<&'static ImporterDescriptor> {
    descriptors().iter().find(|d| d.matches(path))
}

/// Imports SimpleTester databases from raw bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimpleTesterImporter {
    encoding: String,
}

impl SimpleTesterImporter {
    pub fn new() -> Self {
        Self::with_encoding(DEFAULT_ENCODING)
    }

    pub fn with_encoding(encoding: impl Into<String>) -> Self {
        Self {
            encoding: encoding.into(),
        }
    }

    pub fn encoding(&self) -> &str {
        &self.encoding
    }

    /// Number of fields in the notes this importer creates.
    pub fn fields(&self) -> usize {
        NOTE_FIELD_COUNT
    }

    /// Decode `bytes` and convert the database into notes.
    pub fn import_bytes(&self, bytes: &[u8]) -> Result<Vec<Note>> {
        let lines = decode_lines(bytes, &self.encoding)?;
        crate::import_lines(&lines)
    }
}

impl Default for SimpleTesterImporter {
    fn default() -> Self {
        Self::new()
    }
}
