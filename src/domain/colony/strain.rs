//! Strain registry (cepas).
//!
//! The colony houses a fixed, closed set of strains. Each strain owns one cage
//! label prefix letter; the mapping is 1:1 and never changes while the process
//! runs.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// A strain housed in the colony.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Strain {
    /// C57BL/6J background, prefix `A`.
    C57B6J,
    /// CD45.1 congenic, prefix `B`.
    Cd45_1,
    /// RAG1 heterozygous, prefix `C`.
    Rag1Het,
}

/// A strain name outside the registry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unrecognized strain: '{name}'")]
pub struct InvalidStrainError {
    pub name: String,
}

impl InvalidStrainError {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Name index over [`Strain::ALL`], built on first use.
static NAME_INDEX: Lazy<HashMap<&'static str, Strain>> =
    Lazy::new(|| Strain::ALL.iter().map(|s| (s.name(), *s)).collect());

impl Strain {
    /// Every registered strain, in prefix order.
    pub const ALL: [Strain; 3] = [Strain::C57B6J, Strain::Cd45_1, Strain::Rag1Het];

    /// Registry name as recorded on cage cards.
    pub fn name(&self) -> &'static str {
        match self {
            Strain::C57B6J => "C57B6/J",
            Strain::Cd45_1 => "CD45.1",
            Strain::Rag1Het => "RAG1+/-",
        }
    }

    /// Cage label prefix letter.
    pub fn prefix(&self) -> char {
        match self {
            Strain::C57B6J => 'A',
            Strain::Cd45_1 => 'B',
            Strain::Rag1Het => 'C',
        }
    }

    /// Resolves a registry name (exact match).
    pub fn resolve(name: &str) -> Result<Strain, InvalidStrainError> {
        NAME_INDEX
            .get(name)
            .copied()
            .ok_or_else(|| InvalidStrainError::new(name))
    }

    /// Reverse lookup by prefix letter.
    pub fn from_prefix(prefix: char) -> Option<Strain> {
        Strain::ALL.iter().copied().find(|s| s.prefix() == prefix)
    }
}

impl fmt::Display for Strain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Strain {
    type Err = InvalidStrainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Strain::resolve(s)
    }
}

impl Serialize for Strain {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

impl<'de> Deserialize<'de> for Strain {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        Strain::resolve(&name).map_err(serde::de::Error::custom)
    }
}
