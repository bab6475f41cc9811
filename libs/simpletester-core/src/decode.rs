//! Decoding raw database bytes into lines.

use crate::error::DecodeError;
use encoding_rs::Encoding;

/// Encoding SimpleTester databases are written in.
pub const DEFAULT_ENCODING: &str = "windows-1250";

/// Decode `bytes` with the encoding named by `label` and split into lines.
///
/// A byte-order mark overrides the label. Lines end at `\n`, `\r\n` or `\r`
/// and have trailing whitespace removed.
pub fn decode_lines(bytes: &[u8], label: &str) -> Result<Vec<String>, DecodeError> {
    let labeled = Encoding::for_label(label.trim().as_bytes())
        .ok_or_else(|| DecodeError::UnknownEncoding(label.to_string()))?;

    let (encoding, body) = match Encoding::for_bom(bytes) {
        Some((encoding, bom_len)) => (encoding, &bytes[bom_len..]),
        None => (labeled, bytes),
    };

    let text = encoding
        .decode_without_bom_handling_and_without_replacement(body)
        .ok_or(DecodeError::Malformed {
            encoding: encoding.name(),
        })?;

    Ok(split_lines(&text))
}

/// Split text on any line terminator and strip trailing whitespace.
pub fn split_lines(text: &str) -> Vec<String> {
    text.replace("\r\n", "\n")
        .replace('\r', "\n")
        .lines()
        .map(|line| line.trim_end().to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn decode_windows_1250() {
        // "Ko\u{161}ice" in windows-1250
        let bytes = b"1\nKo\x9aice\n";
        let lines = decode_lines(bytes, DEFAULT_ENCODING).unwrap();
        assert_eq!(lines, vec!["1".to_string(), "Košice".to_string()]);
    }

    #[test]
    fn handles_all_terminators() {
        let lines = decode_lines(b"a\r\nb\rc\nd", "utf-8").unwrap();
        assert_eq!(lines, vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn keeps_inner_blank_lines() {
        let lines = split_lines("a\n\nb\n\n");
        assert_eq!(lines, vec!["a", "", "b", ""]);
    }

    #[test]
    fn strips_trailing_whitespace_only() {
        let lines = split_lines("  indented  \t\nnext ");
        assert_eq!(lines, vec!["  indented", "next"]);
    }

    #[test]
    fn bom_overrides_label() {
        let bytes = b"\xef\xbb\xbf1\n\xc5\xa1";
        let lines = decode_lines(bytes, DEFAULT_ENCODING).unwrap();
        assert_eq!(lines, vec!["1", "š"]);
    }

    #[test]
    fn label_is_case_insensitive() {
        assert!(decode_lines(b"1", "Windows-1250").is_ok());
        assert!(decode_lines(b"1", "cp1250").is_ok());
    }

    #[test]
    fn reject_unknown_encoding() {
        assert_eq!(
            decode_lines(b"1", "klingon"),
            Err(DecodeError::UnknownEncoding("klingon".to_string()))
        );
    }

    #[test]
    fn reject_malformed_utf8() {
        assert_eq!(
            decode_lines(b"1\n\xff", "utf-8"),
            Err(DecodeError::Malformed { encoding: "UTF-8" })
        );
    }
}
