//! Cage label value object (caja).
//!
//! A label is one uppercase strain prefix letter followed by a decimal number
//! without leading zeros, e.g. `A1`, `B23`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::Strain;
use crate::domain::foundation::ValidationError;

/// A well-formed cage label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CageLabel {
    prefix: char,
    number: u64,
}

impl CageLabel {
    /// Largest number a label may carry. Keeps every label within ten
    /// characters, well inside the `cage_label` columns.
    pub const MAX_NUMBER: u64 = 999_999_999;

    const MAX_DIGITS: usize = 9;

    /// Builds a label for a strain and number.
    pub fn new(strain: Strain, number: u64) -> Self {
        Self {
            prefix: strain.prefix(),
            number,
        }
    }

    /// Parses a label in canonical form. No case folding is applied.
    ///
    /// # Errors
    ///
    /// - `EmptyField` for an empty string
    /// - `InvalidFormat` for anything that is not `<LETTER><digits>` with no
    ///   leading zeros, or whose number exceeds [`CageLabel::MAX_NUMBER`]
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        let mut chars = raw.chars();
        let prefix = chars
            .next()
            .ok_or_else(|| ValidationError::empty_field("cage_label"))?;
        if !prefix.is_ascii_uppercase() {
            return Err(ValidationError::invalid_format(
                "cage_label",
                "must start with an uppercase letter",
            ));
        }

        let digits = chars.as_str();
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ValidationError::invalid_format(
                "cage_label",
                "must end with a number",
            ));
        }
        if digits.len() > 1 && digits.starts_with('0') {
            return Err(ValidationError::invalid_format(
                "cage_label",
                "number must not have leading zeros",
            ));
        }

        if digits.len() > Self::MAX_DIGITS {
            return Err(ValidationError::invalid_format(
                "cage_label",
                "number is too large",
            ));
        }

        let number = digits
            .parse::<u64>()
            .map_err(|_| ValidationError::invalid_format("cage_label", "number is too large"))?;

        Ok(Self { prefix, number })
    }

    /// Upper-cases and trims user input. Applied at the request boundary only.
    pub fn normalize_input(raw: &str) -> String {
        raw.trim().to_uppercase()
    }

    /// Strain prefix letter.
    pub fn prefix(&self) -> char {
        self.prefix
    }

    /// Numeric part.
    pub fn number(&self) -> u64 {
        self.number
    }

    /// The registered strain owning this prefix, if any.
    pub fn strain(&self) -> Option<Strain> {
        Strain::from_prefix(self.prefix)
    }
}

impl fmt::Display for CageLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.prefix, self.number)
    }
}

impl FromStr for CageLabel {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CageLabel::parse(s)
    }
}

impl Serialize for CageLabel {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for CageLabel {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        CageLabel::parse(&raw).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_canonical_labels() {
        let label = CageLabel::parse("B23").unwrap();
        assert_eq!(label.prefix(), 'B');
        assert_eq!(label.number(), 23);
        assert_eq!(label.strain(), Some(Strain::Cd45_1));
        assert_eq!(label.to_string(), "B23");
    }

    #[test]
    fn rejects_malformed_labels() {
        for raw in ["", "A", "a1", "1A", "A01", "A-1", "A1x", "AB1", "A+1"] {
            assert!(CageLabel::parse(raw).is_err(), "accepted {raw:?}");
        }
    }

    #[test]
    fn number_is_capped() {
        let top = CageLabel::parse("A999999999").unwrap();
        assert_eq!(top.number(), CageLabel::MAX_NUMBER);
        assert!(top.to_string().len() <= 20);

        for raw in ["A1000000000", "A18446744073709551615", "A99999999999999999999"] {
            assert!(CageLabel::parse(raw).is_err(), "accepted {raw:?}");
        }
    }

    #[test]
    fn zero_is_well_formed() {
        assert_eq!(CageLabel::parse("C0").unwrap().number(), 0);
    }

    #[test]
    fn prefix_outside_registry_parses_but_has_no_strain() {
        let label = CageLabel::parse("Z9").unwrap();
        assert_eq!(label.strain(), None);
    }

    #[test]
    fn new_uses_strain_prefix() {
        assert_eq!(CageLabel::new(Strain::Rag1Het, 7).to_string(), "C7");
    }

    #[test]
    fn normalize_input_uppercases_and_trims() {
        assert_eq!(CageLabel::normalize_input("  a12 "), "A12");
    }
}
