//! Column kinds that can be generated.
//!
//! The set is closed: `--table` is resolved through [`ColumnKind::from_str`]
//! and anything outside the list is rejected before generation starts.

use crate::error::PopulateError;
use std::fmt;
use std::str::FromStr;

/// A column generator selectable with `--table`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColumnKind {
    Email,
    Company,
    FirstName,
    Iban,
    LastName,
    LoremIpsum,
    Siret,
    /// Placeholder, always empty until the address schema is split into
    /// address / city / region / country / postal code tables
    City,
}

impl ColumnKind {
    /// Every kind, in the order `--list` prints them
    pub const ALL: [ColumnKind; 8] = [
        ColumnKind::City,
        ColumnKind::Company,
        ColumnKind::Email,
        ColumnKind::FirstName,
        ColumnKind::Iban,
        ColumnKind::LastName,
        ColumnKind::LoremIpsum,
        ColumnKind::Siret,
    ];

    /// Name accepted on the command line
    pub fn name(&self) -> &'static str {
        match self {
            ColumnKind::Email => "email",
            ColumnKind::Company => "company",
            ColumnKind::FirstName => "first_name",
            ColumnKind::Iban => "iban",
            ColumnKind::LastName => "last_name",
            ColumnKind::LoremIpsum => "lorem_ipsum",
            ColumnKind::Siret => "siret",
            ColumnKind::City => "city",
        }
    }

    pub fn names() -> Vec<&'static str> {
        Self::ALL.iter().map(ColumnKind::name).collect()
    }

    /// Whether the kind produces rows at all
    pub fn is_implemented(&self) -> bool {
        !matches!(self, ColumnKind::City)
    }

    /// Whether the kind ignores `--locale` and always generates French data
    pub fn is_french_only(&self) -> bool {
        matches!(self, ColumnKind::Siret)
    }
}

impl FromStr for ColumnKind {
    type Err = PopulateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ColumnKind::ALL
            .iter()
            .copied()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| PopulateError::UnknownColumnKind(s.to_string()))
    }
}

impl fmt::Display for ColumnKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
