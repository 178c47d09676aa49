#![allow(dead_code)]

use oxide_query_args::{parse, ParseError, ParsedArgs};

pub fn parse_ok<'a>(tokens: &[&'a str]) -> ParsedArgs<&'a str> {
    parse(tokens).unwrap_or_else(|e| panic!("Failed to parse: {tokens:?}\nError: {e:?}"))
}

pub fn parse_err(tokens: &[&str]) -> ParseError {
    parse(tokens)
        .map(|parsed| parsed.options)
        .expect_err(&format!("Expected parse error for: {tokens:?}"))
}

/// Rebuilds the input from the option run and the tail.
pub fn reassemble<'a>(tokens: &[&'a str], parsed: &ParsedArgs<&'a str>) -> Vec<&'a str> {
    let mut all = tokens[..parsed.consumed].to_vec();
    all.extend(parsed.tail.iter().copied());
    all
}
