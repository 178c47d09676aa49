//! # oxide-query-args
//!
//! Option parsing for convenience query commands such as `allrows` and
//! `foreach`, which take a statement preceded by a few options:
//!
//! ```text
//! [-as {lists|dicts}] [-columnsvariable name] [--] statement ?params?
//! ```
//!
//! The parser recognizes the leading options, checks their values and
//! hands back the remaining tokens (the statement and its parameters)
//! untouched.
//!
//! - Options may be abbreviated to any unambiguous prefix (`-a`, `-col`).
//! - `-as` defaults to `dicts` when not given.
//! - Scanning stops at the first token not starting with `-`, right after
//!   a bare `--`, or at a token such as `--comment` that opens a statement
//!   with a SQL comment.
//!
//! ## Example
//!
//! ```rust
//! use oxide_query_args::prelude::*;
//!
//! let parsed = parse(&["-columnsvariable", "cols", "SELECT * FROM users"]).unwrap();
//! assert_eq!(parsed.options.format(), ResultFormat::Dicts);
//! assert_eq!(parsed.options.columns_variable(), Some("cols"));
//! assert_eq!(parsed.tail, vec!["SELECT * FROM users"]);
//!
//! let err = parse(&["-as", "tables", "SELECT 1"]).unwrap_err();
//! assert_eq!(err.to_string(), "bad variable type \"tables\": must be lists or dicts");
//! ```
//!
//! ## Command binding
//!
//! [`command::invoke`] runs the `name argv optsVar` command form against a
//! [`command::VariableStore`]:
//!
//! ```rust
//! use std::collections::HashMap;
//! use oxide_query_args::command::{invoke, Word};
//!
//! let mut vars: HashMap<String, oxide_query_args::OptionsMap> = HashMap::new();
//! let argv = vec!["-as".to_string(), "lists".to_string(), "SELECT 1".to_string()];
//! let tail = invoke(&mut vars, &[Word::from("allrows"), Word::from(argv), Word::from("opts")]).unwrap();
//! assert_eq!(tail, vec!["SELECT 1".to_string()]);
//! assert_eq!(vars["opts"].get(oxide_query_args::OptionKey::As), Some("lists"));
//! ```

pub mod command;
pub mod error;
pub mod lookup;
pub mod option;
pub mod options;
pub mod parser;

pub use error::{CommandError, ParseError, Result, StoreError};
pub use lookup::LookupFailure;
pub use option::{OptionName, ResultFormat};
pub use options::{OptionKey, OptionsMap};
pub use parser::{parse, ConvenienceArgParser, ParsedArgs};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::command::{invoke, parse_into, VariableStore, Word};
    pub use crate::error::{CommandError, ParseError, Result, StoreError};
    pub use crate::lookup::LookupFailure;
    pub use crate::option::{OptionName, ResultFormat};
    pub use crate::options::{OptionKey, OptionsMap};
    pub use crate::parser::{parse, ConvenienceArgParser, ParsedArgs};
}
