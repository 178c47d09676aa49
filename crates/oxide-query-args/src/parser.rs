//! Option scanning for convenience query commands.
//!
//! Accepted surface form:
//!
//! ```text
//! [-as {lists|dicts}] [-columnsvariable name] [--] statement ?params?
//! ```
//!
//! Scanning runs once, left to right, and stops at the first token that
//! does not start with `-`, at a token that starts with `--` followed by
//! more text (a statement opening with a SQL comment), or right after a
//! bare `--`. Everything from that point on is returned untouched as the
//! tail.

use serde::Serialize;
use tracing::{debug, trace};

use crate::error::{ParseError, Result};
use crate::option::{OptionName, ResultFormat};
use crate::options::OptionsMap;

/// Result of a successful parse.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParsedArgs<T> {
    /// Recognized options, with `as` always present.
    pub options: OptionsMap,
    /// Tokens following the option run, in input order.
    pub tail: Vec<T>,
    /// Number of leading tokens taken by the option run.
    #[serde(skip)]
    pub consumed: usize,
}

impl<T> ParsedArgs<T> {
    /// Splits into the options map and the tail.
    #[must_use]
    pub fn into_parts(self) -> (OptionsMap, Vec<T>) {
        (self.options, self.tail)
    }
}

/// Parser for the options accepted by convenience query commands.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConvenienceArgParser;

impl ConvenienceArgParser {
    /// Creates a parser.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Parses the leading options of `tokens`.
    ///
    /// The input is not modified; the tail is returned as owned copies of
    /// the remaining tokens.
    ///
    /// # Errors
    ///
    /// - [`ParseError::UnknownOption`] for a dash-prefixed token that names
    ///   no option, or more than one.
    /// - [`ParseError::MissingValue`] when `-as` or `-columnsvariable` is
    ///   the last token.
    /// - [`ParseError::InvalidValue`] when the `-as` value is neither
    ///   `lists` nor `dicts` (or an abbreviation of exactly one).
    ///
    /// # Example
    ///
    /// ```
    /// use oxide_query_args::{ConvenienceArgParser, ResultFormat};
    ///
    /// let parsed = ConvenienceArgParser::new()
    ///     .parse(&["-as", "lists", "SELECT 1"])
    ///     .unwrap();
    /// assert_eq!(parsed.options.format(), ResultFormat::Lists);
    /// assert_eq!(parsed.tail, vec!["SELECT 1"]);
    /// ```
    #[allow(clippy::unused_self)]
    pub fn parse<T>(&self, tokens: &[T]) -> Result<ParsedArgs<T>>
    where
        T: AsRef<str> + Clone,
    {
        let mut options = OptionsMap::new();
        let mut saw_as = false;
        let mut pos = 0;

        while let Some(token) = tokens.get(pos) {
            let text = token.as_ref();
            trace!(position = pos, token = text, "Scanning token");

            if !text.starts_with('-') {
                debug!(position = pos, "Non-option token, ending options");
                break;
            }
            if starts_with_comment(text) {
                debug!(position = pos, "Statement opens with a comment, ending options");
                break;
            }

            let option =
                OptionName::lookup(text).map_err(|failure| ParseError::UnknownOption {
                    token: text.to_string(),
                    position: pos,
                    failure,
                })?;

            match option {
                OptionName::As => {
                    let value = option_value(tokens, pos, option)?;
                    let format = ResultFormat::lookup(value).map_err(|failure| {
                        ParseError::InvalidValue {
                            option,
                            value: value.to_string(),
                            position: pos + 1,
                            failure,
                        }
                    })?;
                    debug!(format = %format, "Result format");
                    options.set_format(format);
                    saw_as = true;
                    pos += 2;
                }
                OptionName::ColumnsVariable => {
                    let value = option_value(tokens, pos, option)?;
                    debug!(variable = value, "Columns variable");
                    options.set_columns_variable(value);
                    pos += 2;
                }
                OptionName::EndOfOptions => {
                    pos += 1;
                    debug!(position = pos, "End of options marker");
                    break;
                }
            }
        }

        if !saw_as {
            options.set_format(ResultFormat::default());
        }

        let tail = tokens.get(pos..).map_or_else(Vec::new, <[T]>::to_vec);
        Ok(ParsedArgs {
            options,
            tail,
            consumed: pos,
        })
    }
}

/// Returns true for tokens like `--comment`: two dashes followed by more
/// text. A bare `--` is the end-of-options marker instead.
fn starts_with_comment(text: &str) -> bool {
    text.strip_prefix("--").is_some_and(|rest| !rest.is_empty())
}

/// Returns the token following the option at `pos`.
fn option_value<T: AsRef<str>>(tokens: &[T], pos: usize, option: OptionName) -> Result<&str> {
    tokens
        .get(pos + 1)
        .map(AsRef::as_ref)
        .ok_or(ParseError::MissingValue {
            option,
            position: pos,
        })
}

/// Parses `tokens` with a default [`ConvenienceArgParser`].
///
/// # Errors
///
/// See [`ConvenienceArgParser::parse`].
pub fn parse<T>(tokens: &[T]) -> Result<ParsedArgs<T>>
where
    T: AsRef<str> + Clone,
{
    ConvenienceArgParser::new().parse(tokens)
}
