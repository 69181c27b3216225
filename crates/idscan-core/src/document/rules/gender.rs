//! Gender extraction.

use super::patterns::GENDER;
use super::{ExtractionMatch, FieldExtractor, Strategy};

/// Gender field extractor. Values are reported uppercase (`MALE`, `FEMALE`).
pub struct GenderExtractor;

impl GenderExtractor {
    pub fn new() -> Self {
        Self
    }

    /// First whole-word `male` / `female`, any casing.
    pub fn keyword(&self, lines: &[&str]) -> Option<ExtractionMatch<String>> {
        lines.iter().enumerate().find_map(|(i, line)| {
            GENDER
                .captures(line)
                .map(|caps| ExtractionMatch::new(caps[1].to_uppercase(), Strategy::Pattern, i))
        })
    }
}

impl Default for GenderExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for GenderExtractor {
    type Output = ExtractionMatch<String>;

    fn extract(&self, lines: &[&str]) -> Option<Self::Output> {
        self.keyword(lines)
    }
}

pub fn extract_gender(lines: &[&str]) -> Option<String> {
    GenderExtractor::new().extract(lines).map(|m| m.value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_gender() {
        assert_eq!(extract_gender(&["Gender: Male"]), Some("MALE".to_string()));
        assert_eq!(extract_gender(&["/ FEMALE"]), Some("FEMALE".to_string()));
        assert_eq!(extract_gender(&["female"]), Some("FEMALE".to_string()));
    }

    #[test]
    fn test_gender_needs_whole_word() {
        assert_eq!(extract_gender(&["Kamalesh Rao", "Males"]), None);
        assert_eq!(extract_gender(&[]), None);
    }
}
