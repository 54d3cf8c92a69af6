// Shared lexical combinators for the chart config DSL

use nom::{
    branch::alt,
    bytes::complete::{tag, take_till},
    character::complete::{alpha1, alphanumeric1, char, digit1, multispace0},
    combinator::{map, opt, recognize},
    multi::many0,
    sequence::{delimited, pair, tuple},
    IResult,
};

/// Wrap a parser so it consumes surrounding whitespace.
pub fn ws<'a, F, O>(inner: F) -> impl FnMut(&'a str) -> IResult<&'a str, O>
where
    F: FnMut(&'a str) -> IResult<&'a str, O>,
{
    delimited(multispace0, inner, multispace0)
}

/// Bare identifier: starts with a letter or underscore.
pub fn identifier(input: &str) -> IResult<&str, String> {
    map(
        recognize(pair(
            alt((alpha1, tag("_"))),
            many0(alt((alphanumeric1, tag("_")))),
        )),
        |s: &str| s.to_string(),
    )(input)
}

/// Double-quoted string literal; no escape handling.
pub fn string_literal(input: &str) -> IResult<&str, String> {
    map(
        delimited(char('"'), take_till(|c| c == '"'), char('"')),
        |s: &str| s.to_string(),
    )(input)
}

/// Decimal number, kept as its source text.
pub fn number_literal(input: &str) -> IResult<&str, String> {
    map(
        recognize(tuple((
            opt(char('-')),
            digit1,
            opt(pair(char('.'), digit1)),
        ))),
        |s: &str| s.to_string(),
    )(input)
}

/// A column or option name: bare identifier or quoted string (source
/// column names routinely contain spaces).
pub fn name(input: &str) -> IResult<&str, String> {
    alt((string_literal, identifier))(input)
}

/// Any scalar argument value: name or number.
pub fn literal(input: &str) -> IResult<&str, String> {
    alt((string_literal, identifier, number_literal))(input)
}
