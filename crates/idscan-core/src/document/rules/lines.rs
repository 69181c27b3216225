//! Line tokenizer shared by all field extractors.

/// Split raw OCR text into trimmed, non-empty lines.
///
/// Any run of `\r`/`\n` acts as a single break. Line order is preserved
/// since several extractors rely on position.
pub fn split_lines(text: &str) -> Vec<&str> {
    text.split(['\r', '\n'])
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_lines_trims_and_drops_blanks() {
        let text = "  Government of India \r\n\r\n\n   \nRahul Kumar\r\nDOB: 05/06/1990  ";
        assert_eq!(
            split_lines(text),
            vec!["Government of India", "Rahul Kumar", "DOB: 05/06/1990"]
        );
    }

    #[test]
    fn test_split_lines_empty_input() {
        assert!(split_lines("").is_empty());
        assert!(split_lines(" \r\n\t\n ").is_empty());
    }
}
