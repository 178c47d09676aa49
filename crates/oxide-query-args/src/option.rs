//! Closed vocabularies recognized by the parser.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::lookup::{describe, lookup, LookupFailure};

/// An option accepted in front of the statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OptionName {
    /// `-as {lists|dicts}`: the shape of returned rows.
    As,
    /// `-columnsvariable name`: variable receiving the column names.
    ColumnsVariable,
    /// `--`: ends option scanning.
    EndOfOptions,
}

impl OptionName {
    /// All options, in table order.
    pub const ALL: [Self; 3] = [Self::As, Self::ColumnsVariable, Self::EndOfOptions];

    /// Literal spellings, indexed like [`OptionName::ALL`].
    pub const SPELLINGS: [&'static str; 3] = ["-as", "-columnsvariable", "--"];

    /// Matches a token against the option table, accepting unambiguous
    /// abbreviations.
    ///
    /// # Errors
    ///
    /// Returns the [`LookupFailure`] when the token names no option or
    /// more than one.
    pub fn lookup(token: &str) -> Result<Self, LookupFailure> {
        lookup(token, &Self::SPELLINGS).map(|index| Self::ALL[index])
    }

    /// Returns the literal spelling of the option.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::As => "-as",
            Self::ColumnsVariable => "-columnsvariable",
            Self::EndOfOptions => "--",
        }
    }

    /// Returns true if the option consumes the following token.
    #[must_use]
    pub const fn takes_value(self) -> bool {
        matches!(self, Self::As | Self::ColumnsVariable)
    }

    /// Returns the accepted spellings as a diagnostic list.
    #[must_use]
    pub fn choices() -> String {
        describe(&Self::SPELLINGS)
    }
}

impl fmt::Display for OptionName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Row shape requested with `-as`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResultFormat {
    /// Each row is a list of column values.
    Lists,
    /// Each row is a dictionary keyed by column name.
    #[default]
    Dicts,
}

impl ResultFormat {
    /// All formats, in table order.
    pub const ALL: [Self; 2] = [Self::Lists, Self::Dicts];

    /// Literal spellings, indexed like [`ResultFormat::ALL`].
    pub const SPELLINGS: [&'static str; 2] = ["lists", "dicts"];

    /// Matches a value against the format table, accepting unambiguous
    /// abbreviations.
    ///
    /// # Errors
    ///
    /// Returns the [`LookupFailure`] when the value names no format or
    /// more than one.
    pub fn lookup(value: &str) -> Result<Self, LookupFailure> {
        lookup(value, &Self::SPELLINGS).map(|index| Self::ALL[index])
    }

    /// Returns the canonical spelling.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Lists => "lists",
            Self::Dicts => "dicts",
        }
    }

    /// Returns the accepted spellings as a diagnostic list.
    #[must_use]
    pub fn choices() -> String {
        describe(&Self::SPELLINGS)
    }
}

impl fmt::Display for ResultFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
