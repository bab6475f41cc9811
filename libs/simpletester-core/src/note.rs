//! Conversion of questions into two-field notes.

use crate::error::RangeError;
use crate::types::{Note, Question};

/// Letters used to label answers, in order.
pub const ANSWER_LABELS: &[u8; 26] = b"abcdefghijklmnopqrstuvwxyz";

/// Label for the answer at `index`, or None past the end of the alphabet.
pub fn answer_label(index: usize) -> Option<char> {
    ANSWER_LABELS.get(index).map(|&b| b as char)
}

/// Convert one question into a note.
///
/// The question field holds the prompt, a blank line, then every labeled
/// answer on its own line. The answer field holds the correct labeled answer.
pub fn build_note(question: &Question) -> Result<Note, RangeError> {
    if question.answers.len() > ANSWER_LABELS.len() {
        return Err(RangeError::TooManyAnswers {
            count: question.answers.len(),
            max: ANSWER_LABELS.len(),
        });
    }

    let labeled: Vec<String> = question
        .answers
        .iter()
        .zip(ANSWER_LABELS.iter())
        .map(|(answer, &letter)| format!("{}) {}", letter as char, answer))
        .collect();

    let answer_field = labeled
        .get(question.correct_index)
        .cloned()
        .ok_or(RangeError::CorrectIndexOutOfRange {
            index: question.correct_index,
            len: labeled.len(),
        })?;

    Ok(Note {
        question_field: format!("{}\n\n{}", question.text, labeled.join("\n")),
        answer_field,
    })
}

/// Convert every question, stopping at the first failure.
pub fn build_notes(questions: &[Question]) -> Result<Vec<Note>, RangeError> {
    questions.iter().map(build_note).collect()
}
