//! Error types for convenience argument parsing.

use thiserror::Error;

use crate::lookup::LookupFailure;
use crate::option::{OptionName, ResultFormat};

/// Errors raised while scanning the option run.
///
/// Every variant carries the position of the offending token in the input
/// sequence. A parse that fails never hands back a partially filled
/// options map.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// A dash-prefixed token that is not a recognized option.
    #[error("{} option \"{token}\": must be {}", .failure.adjective(), OptionName::choices())]
    UnknownOption {
        /// The token as given.
        token: String,
        /// Index of the token in the input.
        position: usize,
        /// Whether nothing matched or several options did.
        failure: LookupFailure,
    },

    /// An option that takes a value was the last token.
    #[error("No value given for {option}")]
    MissingValue {
        /// The option missing its value.
        option: OptionName,
        /// Index of the option token.
        position: usize,
    },

    /// The value following an option is outside its vocabulary.
    #[error("{} variable type \"{value}\": must be {}", .failure.adjective(), ResultFormat::choices())]
    InvalidValue {
        /// The option the value belongs to.
        option: OptionName,
        /// The rejected value.
        value: String,
        /// Index of the value token.
        position: usize,
        /// Whether nothing matched or several formats did.
        failure: LookupFailure,
    },
}

impl ParseError {
    /// Returns the index of the token that caused the error.
    #[must_use]
    pub const fn position(&self) -> usize {
        match self {
            Self::UnknownOption { position, .. }
            | Self::MissingValue { position, .. }
            | Self::InvalidValue { position, .. } => *position,
        }
    }
}

/// Result type for parsing operations.
pub type Result<T> = std::result::Result<T, ParseError>;

/// Errors raised when storing parsed options into a variable store.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// The variable name cannot be assigned.
    #[error("can't set \"{0}\": invalid variable name")]
    InvalidName(String),
}

/// Errors raised by the command-level entry points.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    /// The command was called with the wrong number of words.
    #[error("wrong # args: should be \"{command} argv optsVar\"")]
    WrongNumArgs {
        /// Name the command was invoked under.
        command: String,
    },

    /// The argument list failed to parse.
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// The options could not be stored.
    #[error(transparent)]
    Store(#[from] StoreError),
}
