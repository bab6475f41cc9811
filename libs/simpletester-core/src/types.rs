//! Core types for SimpleTester imports.

use serde::{Deserialize, Serialize};

/// Number of fields in every note produced by the importer.
pub const NOTE_FIELD_COUNT: usize = 2;

/// A multiple-choice question read from a SimpleTester database.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub text: String,
    pub answers: Vec<String>,
    /// Zero-based index into `answers`.
    pub correct_index: usize,
    /// 1-based line of the question text in the source.
    pub line: usize,
}

impl Question {
    /// The correct answer text, if the index is in bounds.
    pub fn correct_answer(&self) -> Option<&str> {
        self.answers.get(self.correct_index).map(String::as_str)
    }
}

/// A two-field flashcard note.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub question_field: String,
    pub answer_field: String,
}

impl Note {
    /// Fields in storage order: question side, then answer side.
    pub fn fields(&self) -> [&str; NOTE_FIELD_COUNT] {
        [&self.question_field, &self.answer_field]
    }
}
