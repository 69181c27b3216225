//! Common regex patterns and keyword tables for identity document extraction.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Day-month-year with a consistent separator: 05/06/1990, 5-6-90
    pub static ref DATE_DMY: Regex = Regex::new(
        r"\b(\d{1,2}/\d{1,2}/\d{2,4}|\d{1,2}-\d{1,2}-\d{2,4})\b"
    ).unwrap();

    // Identity number: 4-4-4 groups or a bare 12-digit run
    pub static ref IDENTITY_NUMBER: Regex = Regex::new(
        r"\b(\d{4}\s*\d{4}\s*\d{4}|\d{12})\b"
    ).unwrap();

    // Anything that is not a digit, in any script
    pub static ref NON_DIGIT: Regex = Regex::new(
        r"\D"
    ).unwrap();

    // Indian postal code (PIN)
    pub static ref POSTAL_CODE: Regex = Regex::new(
        r"\b\d{6}\b"
    ).unwrap();

    pub static ref GENDER: Regex = Regex::new(
        r"(?i)\b(male|female)\b"
    ).unwrap();

    // "Rahul Sharma ..." at the start of a line
    pub static ref CAPITALIZED_PAIR: Regex = Regex::new(
        r"^[A-Z][a-z]+\s+[A-Z][a-z]+"
    ).unwrap();

    pub static ref LATIN_LETTER: Regex = Regex::new(
        r"[A-Za-z]"
    ).unwrap();
}

/// Lowercase markers of the date-of-birth label, including OCR-spaced spelling.
pub const DOB_LABELS: &[&str] = &["dob", "d o b"];

/// Lowercase tokens that disqualify a line from being the holder's name.
pub const NAME_BLACKLIST: &[&str] = &[
    "aadhaar",
    "vid",
    "address",
    "dob",
    "date",
    "authority",
    "sign",
];

/// Lowercase tokens that end an address block. The line itself is not kept.
pub const ADDRESS_STOP_WORDS: &[&str] = &["aadhar", "vid", "dob", "male", "female", "authority"];

/// Lowercase address label.
pub const ADDRESS_LABEL: &str = "address";

/// Returns true if the lowercased `line` contains any of `keywords`.
pub fn contains_any(line: &str, keywords: &[&str]) -> bool {
    let lower = line.to_lowercase();
    keywords.iter().any(|k| lower.contains(k))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_date_requires_consistent_separator() {
        assert!(DATE_DMY.is_match("05/06/1990"));
        assert!(DATE_DMY.is_match("5-6-90"));
        assert!(!DATE_DMY.is_match("05/06-1990"));
        assert!(!DATE_DMY.is_match("105/06/1990"));
    }

    #[test]
    fn test_contains_any_is_case_insensitive() {
        assert!(contains_any("Government of India AADHAAR", NAME_BLACKLIST));
        assert!(!contains_any("Rahul Kumar", NAME_BLACKLIST));
    }
}
