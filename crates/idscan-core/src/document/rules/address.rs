//! Address extraction.

use super::patterns::{contains_any, ADDRESS_LABEL, ADDRESS_STOP_WORDS, POSTAL_CODE};
use super::{ExtractionMatch, FieldExtractor, Strategy};

/// Default number of lines collected after the address label.
pub const DEFAULT_MAX_ADDRESS_LINES: usize = 6;

/// Address field extractor.
pub struct AddressExtractor {
    max_lines: usize,
}

impl AddressExtractor {
    /// Create a new address extractor.
    pub fn new() -> Self {
        Self {
            max_lines: DEFAULT_MAX_ADDRESS_LINES,
        }
    }

    /// Set how many lines after the label may belong to the address.
    pub fn with_max_lines(mut self, max_lines: usize) -> Self {
        self.max_lines = max_lines;
        self
    }

    /// Collect the lines following the first "Address" label.
    ///
    /// A line with a postal code is kept and ends the block; a line with a
    /// stop word ends the block and is dropped.
    pub fn by_label(&self, lines: &[&str]) -> Option<ExtractionMatch<String>> {
        let label = lines.iter().position(|l| is_address_label(l))?;

        let mut parts = Vec::new();
        for line in lines.iter().skip(label + 1).take(self.max_lines) {
            if POSTAL_CODE.is_match(line) {
                parts.push(*line);
                break;
            }
            if contains_any(line, ADDRESS_STOP_WORDS) {
                break;
            }
            parts.push(*line);
        }

        let address = parts.join(", ").trim().to_string();
        if address.is_empty() {
            return None;
        }

        Some(ExtractionMatch::new(address, Strategy::Label, label))
    }
}

impl Default for AddressExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for AddressExtractor {
    type Output = ExtractionMatch<String>;

    fn extract(&self, lines: &[&str]) -> Option<Self::Output> {
        self.by_label(lines)
    }
}

/// Extract the address block from tokenized lines.
pub fn extract_address(lines: &[&str]) -> Option<String> {
    AddressExtractor::new().extract(lines).map(|m| m.value)
}

fn is_address_label(line: &str) -> bool {
    let lower = line.to_lowercase();
    lower.starts_with(ADDRESS_LABEL) || lower.contains("address:")
}
