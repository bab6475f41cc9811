//! Fixtures for SimpleTester database content.

/// Generate a UTF-8 database with `num_questions` questions of three answers.
///
/// Question `i` (1-based) has answers `Answer i.a`, `Answer i.b`,
/// `Answer i.c`, with the second one correct.
pub fn sample_database(num_questions: usize) -> String {
    let mut lines = vec!["1".to_string()];
    for i in 1..=num_questions {
        lines.push(format!("Question {}?", i));
        lines.push("3".to_string());
        for letter in ["a", "b", "c"] {
            lines.push(format!("Answer {}.{}", i, letter));
        }
        lines.push("2".to_string());
    }
    lines.join("\r\n") + "\r\n"
}

/// A short windows-1250 database with Czech text.
pub fn czech_database() -> Vec<u8> {
    // "Hlavní město?" / "Praha" / "Brno"
    b"1\r\nHlavn\xed m\xecsto?\r\n2\r\nPraha\r\nBrno\r\n1\r\n".to_vec()
}
