//! Tests for parse error cases.

mod common;
use common::*;

use oxide_query_args::{LookupFailure, OptionName, ParseError};

#[test]
fn error_missing_as_value() {
    let err = parse_err(&["-as"]);
    assert_eq!(
        err,
        ParseError::MissingValue {
            option: OptionName::As,
            position: 0,
        }
    );
    assert_eq!(err.to_string(), "No value given for -as");
}

#[test]
fn error_missing_columns_variable_value() {
    let err = parse_err(&["-as", "lists", "-columnsvariable"]);
    assert_eq!(
        err,
        ParseError::MissingValue {
            option: OptionName::ColumnsVariable,
            position: 2,
        }
    );
}

#[test]
fn error_invalid_format() {
    let err = parse_err(&["-as", "tables", "select 1"]);
    assert_eq!(
        err,
        ParseError::InvalidValue {
            option: OptionName::As,
            value: "tables".to_string(),
            position: 1,
            failure: LookupFailure::NoMatch,
        }
    );
    assert_eq!(
        err.to_string(),
        "bad variable type \"tables\": must be lists or dicts"
    );
}

#[test]
fn error_format_is_case_sensitive() {
    let err = parse_err(&["-as", "LISTS", "select 1"]);
    assert!(matches!(err, ParseError::InvalidValue { .. }));
}

#[test]
fn error_unknown_option() {
    let err = parse_err(&["-limit", "10", "select 1"]);
    assert_eq!(
        err,
        ParseError::UnknownOption {
            token: "-limit".to_string(),
            position: 0,
            failure: LookupFailure::NoMatch,
        }
    );
    assert_eq!(
        err.to_string(),
        "bad option \"-limit\": must be -as, -columnsvariable, or --"
    );
}

#[test]
fn error_unknown_option_after_valid_one() {
    let err = parse_err(&["-as", "lists", "-x", "select 1"]);
    assert_eq!(err.position(), 2);
}

#[test]
fn error_lone_dash() {
    let err = parse_err(&["-"]);
    assert!(matches!(
        err,
        ParseError::UnknownOption {
            failure: LookupFailure::Ambiguous,
            ..
        }
    ));
}

#[test]
fn error_reported_before_later_tokens() {
    let err = parse_err(&["-as", "bogus", "-columnsvariable"]);
    assert!(matches!(err, ParseError::InvalidValue { position: 1, .. }));
}
