//! Command-level binding of the parser.
//!
//! The command form is `name argv optsVar`: the options parsed from `argv`
//! are stored in the variable `optsVar` and the tail is the command result.

use std::collections::HashMap;
use std::hash::BuildHasher;

use tracing::debug;

use crate::error::{CommandError, StoreError};
use crate::options::OptionsMap;
use crate::parser::ConvenienceArgParser;

/// Name reported in usage errors when the caller gives none.
pub const COMMAND_NAME: &str = "parse_convenience_args";

/// Destination for parsed options.
pub trait VariableStore {
    /// Stores `options` under the variable `name`, replacing any previous
    /// value.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] if the variable cannot be set.
    fn set_options(&mut self, name: &str, options: OptionsMap) -> Result<(), StoreError>;
}

impl<S: BuildHasher> VariableStore for HashMap<String, OptionsMap, S> {
    fn set_options(&mut self, name: &str, options: OptionsMap) -> Result<(), StoreError> {
        if name.is_empty() {
            return Err(StoreError::InvalidName(name.to_string()));
        }
        self.insert(name.to_string(), options);
        Ok(())
    }
}

/// A word of a command invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Word {
    /// A single string.
    Text(String),
    /// A list of strings.
    List(Vec<String>),
}

impl Word {
    /// Returns the word as a list. A text word is a one-element list.
    #[must_use]
    pub fn as_list(&self) -> &[String] {
        match self {
            Self::Text(text) => std::slice::from_ref(text),
            Self::List(items) => items,
        }
    }

    /// Returns the word as a single string, if it is one.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            Self::List(_) => None,
        }
    }
}

impl From<&str> for Word {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<Vec<String>> for Word {
    fn from(items: Vec<String>) -> Self {
        Self::List(items)
    }
}

/// Parses `tokens`, stores the options under `opts_var` and returns the
/// tail.
///
/// Nothing is stored when parsing fails.
///
/// # Errors
///
/// Returns [`CommandError::Parse`] if the tokens don't parse and
/// [`CommandError::Store`] if the store rejects the variable.
pub fn parse_into<V, T>(store: &mut V, opts_var: &str, tokens: &[T]) -> Result<Vec<T>, CommandError>
where
    V: VariableStore + ?Sized,
    T: AsRef<str> + Clone,
{
    let (options, tail) = ConvenienceArgParser::new().parse(tokens)?.into_parts();
    debug!(variable = opts_var, entries = options.len(), "Storing options");
    store.set_options(opts_var, options)?;
    Ok(tail)
}

/// Runs the `name argv optsVar` command.
///
/// # Errors
///
/// Returns [`CommandError::WrongNumArgs`] unless exactly three words are
/// given, [`CommandError::Store`] if `optsVar` is not a single string or
/// the store rejects it, and [`CommandError::Parse`] if `argv` doesn't
/// parse.
pub fn invoke<V>(store: &mut V, objv: &[Word]) -> Result<Vec<String>, CommandError>
where
    V: VariableStore + ?Sized,
{
    let [_, argv, opts_var] = objv else {
        let command = objv
            .first()
            .and_then(Word::as_text)
            .unwrap_or(COMMAND_NAME)
            .to_string();
        return Err(CommandError::WrongNumArgs { command });
    };

    let name = opts_var
        .as_text()
        .ok_or_else(|| StoreError::InvalidName(opts_var.as_list().join(" ")))?;
    parse_into(store, name, argv.as_list())
}
