//! Unambiguous-prefix lookup against a closed vocabulary.
//!
//! A key matches an entry when it equals the entry, or when it is a prefix
//! of exactly one entry in the table. Exact matches win over abbreviations.
//! The empty key never matches.

/// Why a key failed to match a vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupFailure {
    /// The key is not a prefix of any entry.
    NoMatch,
    /// The key is a prefix of more than one entry.
    Ambiguous,
}

impl LookupFailure {
    /// Returns the word used to qualify the key in diagnostics.
    #[must_use]
    pub const fn adjective(self) -> &'static str {
        match self {
            Self::NoMatch => "bad",
            Self::Ambiguous => "ambiguous",
        }
    }
}

/// Looks up `key` in `table`, returning the index of the matched entry.
///
/// # Errors
///
/// Returns [`LookupFailure::NoMatch`] if no entry starts with `key` (or the
/// key is empty) and [`LookupFailure::Ambiguous`] if several do.
///
/// # Example
///
/// ```
/// use oxide_query_args::lookup::{lookup, LookupFailure};
///
/// let table = ["lists", "dicts"];
/// assert_eq!(lookup("d", &table), Ok(1));
/// assert_eq!(lookup("sets", &table), Err(LookupFailure::NoMatch));
/// ```
pub fn lookup(key: &str, table: &[&str]) -> Result<usize, LookupFailure> {
    if let Some(index) = table.iter().position(|entry| *entry == key) {
        return Ok(index);
    }
    if key.is_empty() {
        return Err(LookupFailure::NoMatch);
    }

    let mut found = None;
    for (index, entry) in table.iter().enumerate() {
        if entry.starts_with(key) {
            if found.is_some() {
                return Err(LookupFailure::Ambiguous);
            }
            found = Some(index);
        }
    }
    found.ok_or(LookupFailure::NoMatch)
}

/// Renders the entries of `table` as an English alternative list:
/// `a`, `a or b`, `a, b, or c`.
#[must_use]
pub fn describe(table: &[&str]) -> String {
    match table {
        [] => String::new(),
        [only] => (*only).to_string(),
        [first, second] => format!("{first} or {second}"),
        [init @ .., last] => format!("{}, or {last}", init.join(", ")),
    }
}
