//! Line parser for SimpleTester databases.
//!
//! # Format
//! ```text
//! 1
//! What is 2+2?
//! 2
//! 3
//! 4
//! 2
//! ```
//!
//! The first line is a format version and is ignored. Each block after it
//! holds the question, the answer count N, N answers and the 1-based number
//! of the correct answer. There are no separators: blank lines are data.

use crate::error::FormatError;
use crate::types::Question;

/// Parse a full line sequence into questions.
pub fn parse_lines<S: AsRef<str>>(lines: &[S]) -> Result<Vec<Question>, FormatError> {
    LineParser::new(lines).all_questions()
}

/// Cursor over a SimpleTester line sequence.
///
/// Every line is consumed exactly once, left to right.
#[derive(Debug)]
pub struct LineParser<'a, S> {
    lines: &'a [S],
    next: usize,
}

impl<'a, S: AsRef<str>> LineParser<'a, S> {
    pub fn new(lines: &'a [S]) -> Self {
        Self { lines, next: 0 }
    }

    /// Zero-based index of the next unread line.
    pub fn position(&self) -> usize {
        self.next
    }

    pub fn is_at_end(&self) -> bool {
        self.next >= self.lines.len()
    }

    /// Read the format-version marker. Its value is not checked.
    pub fn version(&mut self) -> Result<&'a str, FormatError> {
        self.next_line("format version")
    }

    /// Read the question block starting at the cursor.
    pub fn next_question(&mut self) -> Result<Question, FormatError> {
        let line = self.next + 1;
        let text = self.next_line("question text")?.to_string();

        let (count_line, count) = self.next_integer("answer count")?;
        if count < 0 {
            return Err(FormatError::NegativeCount {
                line: count_line,
                value: count,
            });
        }
        let count = count as usize;

        let remaining = self.lines.len() - self.next;
        let mut answers = Vec::with_capacity(count.min(remaining));
        for _ in 0..count {
            answers.push(self.next_line("answer")?.to_string());
        }

        let (index_line, number) = self.next_integer("correct answer number")?;
        if number < 1 || number > count as i64 {
            return Err(FormatError::CorrectIndexOutOfRange {
                line: index_line,
                value: number,
                count,
            });
        }

        Ok(Question {
            text,
            answers,
            correct_index: (number - 1) as usize,
            line,
        })
    }

    /// Read the version marker, then every question block until the end.
    pub fn all_questions(&mut self) -> Result<Vec<Question>, FormatError> {
        self.version()?;

        let mut questions = Vec::new();
        while !self.is_at_end() {
            questions.push(self.next_question()?);
        }

        tracing::debug!(questions = questions.len(), "parsed SimpleTester lines");
        Ok(questions)
    }

    fn next_line(&mut self, expected: &'static str) -> Result<&'a str, FormatError> {
        let line = self.lines.get(self.next).ok_or(FormatError::Truncated {
            line: self.next + 1,
            expected,
        })?;
        self.next += 1;
        Ok(line.as_ref())
    }

    fn next_integer(&mut self, expected: &'static str) -> Result<(usize, i64), FormatError> {
        let line = self.next + 1;
        let raw = self.next_line(expected)?;
        let value = raw
            .trim()
            .parse::<i64>()
            .map_err(|_| FormatError::InvalidInteger {
                line,
                value: raw.to_string(),
            })?;
        Ok((line, value))
    }
}
