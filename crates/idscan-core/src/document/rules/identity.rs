//! Identity (Aadhaar) number extraction, normalization and validation.

use crate::error::ValidationError;

use super::patterns::{IDENTITY_NUMBER, NON_DIGIT};
use super::{ExtractionMatch, FieldExtractor, Strategy};

/// Number of digits in a valid identity number.
pub const IDENTITY_NUMBER_LEN: usize = 12;

/// Identity number field extractor.
pub struct IdentityNumberExtractor;

impl IdentityNumberExtractor {
    /// Create a new identity number extractor.
    pub fn new() -> Self {
        Self
    }

    /// First line holding a 4-4-4 grouped or bare 12-digit number.
    ///
    /// Dashes and commas are read as group separators.
    pub fn grouped_digits(&self, lines: &[&str]) -> Option<ExtractionMatch<String>> {
        lines.iter().enumerate().find_map(|(i, line)| {
            let cleaned = line.replace(['-', ','], " ");
            let m = IDENTITY_NUMBER.find(&cleaned)?;
            let digits = normalize_identity_number(m.as_str());

            is_valid_identity_number(&digits)
                .then(|| ExtractionMatch::new(format_identity_number(&digits), Strategy::Pattern, i))
        })
    }
}

impl Default for IdentityNumberExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for IdentityNumberExtractor {
    type Output = ExtractionMatch<String>;

    fn extract(&self, lines: &[&str]) -> Option<Self::Output> {
        self.grouped_digits(lines)
    }
}

/// Extract the identity number as `XXXX XXXX XXXX`.
pub fn extract_identity_number(lines: &[&str]) -> Option<String> {
    IdentityNumberExtractor::new().extract(lines).map(|m| m.value)
}

/// Strip everything but digits.
///
/// Digits from any script are kept as-is, matching what [`IDENTITY_NUMBER`]
/// accepts. The result is not length-checked; see [`is_valid_identity_number`].
pub fn normalize_identity_number(input: &str) -> String {
    NON_DIGIT.replace_all(input, "").into_owned()
}

/// Check that an identity number normalizes to exactly 12 digits.
pub fn is_valid_identity_number(input: &str) -> bool {
    digit_count(&normalize_identity_number(input)) == IDENTITY_NUMBER_LEN
}

/// Normalize a user-supplied identity number, rejecting wrong lengths.
pub fn validate_identity_number(input: Option<&str>) -> Result<String, ValidationError> {
    let digits = normalize_identity_number(input.unwrap_or_default());
    let len = digit_count(&digits);
    if len != IDENTITY_NUMBER_LEN {
        return Err(ValidationError::IdentityNumberLength { digits, len });
    }
    Ok(digits)
}

/// Format an identity number as three space-separated groups of four.
pub fn format_identity_number(number: &str) -> String {
    let digits = normalize_identity_number(number);

    if digit_count(&digits) != IDENTITY_NUMBER_LEN {
        return number.to_string();
    }

    let chars: Vec<char> = digits.chars().collect();
    chars
        .chunks(4)
        .map(|group| group.iter().collect::<String>())
        .collect::<Vec<_>>()
        .join(" ")
}

// Non-ASCII digits are multibyte, so count chars rather than bytes.
fn digit_count(digits: &str) -> usize {
    digits.chars().count()
}
