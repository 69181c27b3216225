//! Holder name extraction.

use super::patterns::{contains_any, CAPITALIZED_PAIR, LATIN_LETTER, NAME_BLACKLIST};
use super::{ExtractionMatch, FieldExtractor, Strategy};

/// Name field extractor.
///
/// On identity cards the name sits a few lines above the date of birth,
/// so the resolved date is used as a positional anchor when available.
pub struct NameExtractor<'a> {
    date_of_birth: Option<&'a str>,
}

impl<'a> NameExtractor<'a> {
    /// Create a name extractor without a date anchor.
    pub fn new() -> Self {
        Self {
            date_of_birth: None,
        }
    }

    /// Anchor the backward scan on an already resolved date of birth.
    pub fn with_date_of_birth(mut self, date_of_birth: Option<&'a str>) -> Self {
        self.date_of_birth = date_of_birth.filter(|d| !d.is_empty());
        self
    }

    /// Walk upwards from the first line containing the date of birth.
    pub fn above_date(&self, lines: &[&str]) -> Option<ExtractionMatch<String>> {
        let dob = self.date_of_birth?;
        let anchor = lines.iter().position(|l| l.contains(dob))?;

        (0..anchor)
            .rev()
            .find(|&i| looks_like_name(lines[i]))
            .map(|i| ExtractionMatch::new(lines[i].to_string(), Strategy::AboveDate, i))
    }

    /// First line opening with two capitalized words.
    pub fn capitalized_pair(&self, lines: &[&str]) -> Option<ExtractionMatch<String>> {
        lines
            .iter()
            .position(|l| CAPITALIZED_PAIR.is_match(l))
            .map(|i| ExtractionMatch::new(lines[i].to_string(), Strategy::Fallback, i))
    }
}

impl Default for NameExtractor<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for NameExtractor<'_> {
    type Output = ExtractionMatch<String>;

    fn extract(&self, lines: &[&str]) -> Option<Self::Output> {
        self.above_date(lines)
            .or_else(|| self.capitalized_pair(lines))
    }
}

/// Extract the holder name, optionally anchored on the date of birth.
pub fn extract_name(lines: &[&str], date_of_birth: Option<&str>) -> Option<String> {
    NameExtractor::new()
        .with_date_of_birth(date_of_birth)
        .extract(lines)
        .map(|m| m.value)
}

// Lines are pre-trimmed, so any space is an interior one.
fn looks_like_name(line: &str) -> bool {
    !contains_any(line, NAME_BLACKLIST) && LATIN_LETTER.is_match(line) && line.contains(' ')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_above_date() {
        let lines = [
            "Government of India",
            "RAHUL KUMAR SHARMA",
            "DOB: 05/06/1990",
            "MALE",
        ];
        let result = NameExtractor::new()
            .with_date_of_birth(Some("05/06/1990"))
            .extract(&lines)
            .unwrap();
        assert_eq!(result.value, "RAHUL KUMAR SHARMA");
        assert_eq!(result.strategy, Strategy::AboveDate);
        assert_eq!(result.line, 1);
    }

    #[test]
    fn test_skips_blacklisted_and_single_word_lines() {
        let lines = [
            "Priya Nair",
            "Aadhaar Card",
            "PRIYA",
            "4521",
            "Date of Birth 12/12/1992",
        ];
        assert_eq!(
            extract_name(&lines, Some("12/12/1992")),
            Some("Priya Nair".to_string())
        );
    }

    #[test]
    fn test_anchor_is_first_line_with_date() {
        let lines = [
            "Anil Verma",
            "DOB 01/01/1980",
            "Sunil Verma",
            "Printed 01/01/1980",
        ];
        assert_eq!(
            extract_name(&lines, Some("01/01/1980")),
            Some("Anil Verma".to_string())
        );
    }

    #[test]
    fn test_falls_back_to_capitalized_pair() {
        // Nothing acceptable above the date line.
        let lines = ["DOB: 05/06/1990", "Rahul Sharma", "MALE"];
        let result = NameExtractor::new()
            .with_date_of_birth(Some("05/06/1990"))
            .extract(&lines)
            .unwrap();
        assert_eq!(result.value, "Rahul Sharma");
        assert_eq!(result.strategy, Strategy::Fallback);
    }

    #[test]
    fn test_without_date_uses_fallback_only() {
        let lines = ["GOVERNMENT OF INDIA", "Meera Joshi", "FEMALE"];
        assert_eq!(extract_name(&lines, None), Some("Meera Joshi".to_string()));
        assert_eq!(extract_name(&lines, Some("")), Some("Meera Joshi".to_string()));
    }

    #[test]
    fn test_no_name() {
        let lines = ["GOVERNMENT OF INDIA", "1234 5678 9012"];
        assert_eq!(extract_name(&lines, None), None);
    }
}
