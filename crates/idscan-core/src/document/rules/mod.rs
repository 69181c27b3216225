//! Rule-based field extractors for identity documents.
//!
//! Every extractor works on the same [`lines`] sequence and tries a fixed
//! chain of named strategies, returning the first hit.

pub mod address;
pub mod dates;
pub mod gender;
pub mod identity;
pub mod lines;
pub mod name;
pub mod patterns;

pub use address::{extract_address, AddressExtractor};
pub use dates::{extract_date_of_birth, parse_date_of_birth, DateOfBirthExtractor};
pub use gender::{extract_gender, GenderExtractor};
pub use identity::{
    extract_identity_number, format_identity_number, is_valid_identity_number,
    normalize_identity_number, validate_identity_number, IdentityNumberExtractor,
    IDENTITY_NUMBER_LEN,
};
pub use lines::split_lines;
pub use name::{extract_name, NameExtractor};
pub use patterns::*;

use serde::Serialize;

/// Trait for field extractors.
pub trait FieldExtractor {
    /// The type of value this extractor produces.
    type Output;

    /// Extract the field from a tokenized line sequence.
    fn extract(&self, lines: &[&str]) -> Option<Self::Output>;
}

/// The heuristic that resolved a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    /// Value found on or right after a label line ("DOB", "Address").
    Label,
    /// Value found by its position relative to another field.
    AboveDate,
    /// Value found by pattern alone, first line wins.
    Pattern,
    /// Last-resort shape match.
    Fallback,
}

impl Strategy {
    /// Confidence attached to values resolved by this strategy.
    pub fn confidence(self) -> f32 {
        match self {
            Strategy::Label => 0.95,
            Strategy::AboveDate => 0.85,
            Strategy::Pattern | Strategy::Fallback => 0.7,
        }
    }
}

/// A resolved field with where and how it was found.
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractionMatch<T> {
    /// Extracted value.
    pub value: T,
    /// Strategy that produced the value.
    pub strategy: Strategy,
    /// Confidence score (0.0 - 1.0).
    pub confidence: f32,
    /// Index of the line the value was taken from.
    pub line: usize,
}

impl<T> ExtractionMatch<T> {
    pub fn new(value: T, strategy: Strategy, line: usize) -> Self {
        Self {
            value,
            strategy,
            confidence: strategy.confidence(),
            line,
        }
    }
}
