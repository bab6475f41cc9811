//! Error types for simpletester-core.

use thiserror::Error;

/// Result type alias using Error.
pub type Result<T> = std::result::Result<T, Error>;

/// Structural problems found while parsing a SimpleTester line sequence.
///
/// Line numbers are 1-based and count the format-version line.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    #[error("truncated input: expected {expected} at line {line}")]
    Truncated { line: usize, expected: &'static str },

    #[error("invalid integer at line {line}: {value:?}")]
    InvalidInteger { line: usize, value: String },

    #[error("negative answer count at line {line}: {value}")]
    NegativeCount { line: usize, value: i64 },

    #[error("correct answer {value} at line {line} is outside 1..={count}")]
    CorrectIndexOutOfRange { line: usize, value: i64, count: usize },
}

/// Errors raised while turning a question into a note.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RangeError {
    #[error("question has {count} answers, at most {max} can be labeled")]
    TooManyAnswers { count: usize, max: usize },

    #[error("correct answer index {index} out of bounds for {len} answers")]
    CorrectIndexOutOfRange { index: usize, len: usize },
}

/// Errors turning raw bytes into lines.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("unknown encoding: {0}")]
    UnknownEncoding(String),

    #[error("input is not valid {encoding}")]
    Malformed { encoding: &'static str },
}

/// Any failure of the import pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error(transparent)]
    Format(#[from] FormatError),

    #[error(transparent)]
    Range(#[from] RangeError),

    #[error(transparent)]
    Decode(#[from] DecodeError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_error_display() {
        let error = FormatError::InvalidInteger {
            line: 3,
            value: "two".to_string(),
        };
        assert_eq!(error.to_string(), "invalid integer at line 3: \"two\"");
    }

    #[test]
    fn truncated_display() {
        let error = FormatError::Truncated {
            line: 7,
            expected: "answer",
        };
        assert_eq!(error.to_string(), "truncated input: expected answer at line 7");
    }

    #[test]
    fn wrapped_errors_are_transparent() {
        let error: Error = RangeError::TooManyAnswers { count: 27, max: 26 }.into();
        assert_eq!(
            error.to_string(),
            "question has 27 answers, at most 26 can be labeled"
        );
    }
}
