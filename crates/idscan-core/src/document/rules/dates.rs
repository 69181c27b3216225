//! Date of birth extraction.

use chrono::NaiveDate;
use tracing::trace;

use super::patterns::{contains_any, DATE_DMY, DOB_LABELS};
use super::{ExtractionMatch, FieldExtractor, Strategy};

/// Date of birth field extractor.
pub struct DateOfBirthExtractor;

impl DateOfBirthExtractor {
    pub fn new() -> Self {
        Self
    }

    /// Look at the first "DOB" label line and the line right after it.
    ///
    /// Only the first label line is ever considered, even if it yields nothing.
    pub fn by_label(&self, lines: &[&str]) -> Option<ExtractionMatch<String>> {
        let idx = lines.iter().position(|l| contains_any(l, DOB_LABELS))?;
        trace!("DOB label at line {}", idx);

        [idx, idx + 1]
            .into_iter()
            .filter_map(|i| lines.get(i).map(|l| (i, *l)))
            .find_map(|(i, line)| {
                DATE_DMY
                    .find(line)
                    .map(|m| ExtractionMatch::new(m.as_str().to_string(), Strategy::Label, i))
            })
    }

    /// First date-shaped token anywhere in the document.
    pub fn anywhere(&self, lines: &[&str]) -> Option<ExtractionMatch<String>> {
        lines.iter().enumerate().find_map(|(i, line)| {
            DATE_DMY
                .find(line)
                .map(|m| ExtractionMatch::new(m.as_str().to_string(), Strategy::Pattern, i))
        })
    }
}

impl Default for DateOfBirthExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for DateOfBirthExtractor {
    type Output = ExtractionMatch<String>;

    fn extract(&self, lines: &[&str]) -> Option<Self::Output> {
        self.by_label(lines).or_else(|| self.anywhere(lines))
    }
}

/// Extract the date of birth, verbatim, from tokenized lines.
pub fn extract_date_of_birth(lines: &[&str]) -> Option<String> {
    DateOfBirthExtractor::new().extract(lines).map(|m| m.value)
}

/// Interpret a day-month-year string such as `05/06/1990` or `5-6-90`.
pub fn parse_date_of_birth(s: &str) -> Option<NaiveDate> {
    let caps = DATE_DMY.captures(s)?;
    let mut parts = caps[1].split(['/', '-']);

    let day: u32 = parts.next()?.parse().ok()?;
    let month: u32 = parts.next()?.parse().ok()?;
    let year = parse_year(parts.next()?)?;

    NaiveDate::from_ymd_opt(year, month, day)
}

fn parse_year(s: &str) -> Option<i32> {
    let year: i32 = s.parse().ok()?;
    match s.len() {
        // Two-digit year: assume 2000s for 00-50, 1900s for 51-99
        2 if year <= 50 => Some(2000 + year),
        2 => Some(1900 + year),
        4 => Some(year),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_date_on_label_line() {
        let lines = ["Rahul Kumar", "DOB: 05/06/1990", "MALE"];
        let result = DateOfBirthExtractor::new().extract(&lines).unwrap();
        assert_eq!(result.value, "05/06/1990");
        assert_eq!(result.strategy, Strategy::Label);
        assert_eq!(result.line, 1);
    }

    #[test]
    fn test_date_on_line_after_label() {
        let lines = ["Issued 01/01/2020", "D O B", "12-11-1985"];
        let result = DateOfBirthExtractor::new().extract(&lines).unwrap();
        assert_eq!(result.value, "12-11-1985");
        assert_eq!(result.line, 2);
    }

    #[test]
    fn test_only_first_label_is_considered() {
        // The first label yields nothing, so the pattern fallback wins
        // over the second label's date.
        let lines = ["DOB", "unreadable", "Issue 02/03/2015", "DOB 07/08/1970"];
        let result = DateOfBirthExtractor::new().extract(&lines).unwrap();
        assert_eq!(result.value, "02/03/2015");
        assert_eq!(result.strategy, Strategy::Pattern);
    }

    #[test]
    fn test_label_is_case_insensitive() {
        let lines = ["Year of Birth / DoB : 1-2-88"];
        assert_eq!(extract_date_of_birth(&lines), Some("1-2-88".to_string()));
    }

    #[test]
    fn test_no_date() {
        let lines = ["Government of India", "Rahul Kumar"];
        assert_eq!(extract_date_of_birth(&lines), None);
        assert_eq!(extract_date_of_birth(&[]), None);
    }

    #[test]
    fn test_parse_date_of_birth() {
        assert_eq!(
            parse_date_of_birth("05/06/1990"),
            NaiveDate::from_ymd_opt(1990, 6, 5)
        );
        assert_eq!(
            parse_date_of_birth("1-2-88"),
            NaiveDate::from_ymd_opt(1988, 2, 1)
        );
        assert_eq!(
            parse_date_of_birth("15/01/24"),
            NaiveDate::from_ymd_opt(2024, 1, 15)
        );
        assert_eq!(parse_date_of_birth("31/02/1990"), None);
        assert_eq!(parse_date_of_birth("05/06/199"), None);
        assert_eq!(parse_date_of_birth(""), None);
    }
}
