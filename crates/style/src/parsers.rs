//! Low-level nom parser functions for preset names and CSS-like values.
//!
//! This module provides composable parser functions for lengths, aspect
//! ratios and the parameterized preset names (`grid-cols-N`, `aspect-W:H`).

use nom::branch::alt;
use nom::bytes::complete::tag;
use nom::character::complete::{char, digit1, space0, u32 as parse_u32};
use nom::combinator::{map, map_res, opt, recognize, value};
use nom::sequence::{delimited, preceded, separated_pair};
use nom::{IResult, Parser};
use strata_types::{Length, LengthUnit};
use thiserror::Error;

/// Errors that can occur during value parsing.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StyleParseError {
    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Invalid value for '{property}': {value}")]
    InvalidValue { property: String, value: String },

    #[error("Unknown setting '{0}'")]
    UnknownSetting(String),
}

// --- Helper Parsers ---

fn parse_number(input: &str) -> IResult<&str, f64> {
    map_res(
        recognize((
            opt(alt((char('+'), char('-')))),
            alt((
                recognize((digit1, opt((char('.'), digit1)))),
                recognize((char('.'), digit1)),
            )),
        )),
        |s: &str| s.parse::<f64>(),
    )
    .parse(input)
}

fn parse_unit(input: &str) -> IResult<&str, LengthUnit> {
    alt((
        value(LengthUnit::Rem, tag("rem")),
        value(LengthUnit::Em, tag("em")),
        value(LengthUnit::Px, tag("px")),
        value(LengthUnit::Ch, tag("ch")),
        value(LengthUnit::Vw, tag("vw")),
        value(LengthUnit::Percent, tag("%")),
    ))
    .parse(input)
}

// --- Value Parsers ---

/// Parses a length (e.g., "1.5rem", "65ch", "100%").
///
/// The unit is mandatory except for a bare zero, and the value must be finite.
pub fn parse_length(input: &str) -> IResult<&str, Length> {
    map_res((parse_number, opt(parse_unit)), |(number, unit)| match unit {
        _ if !number.is_finite() => Err("length must be finite"),
        Some(unit) => Ok(Length::new(number, unit)),
        None if number == 0.0 => Ok(Length::zero()),
        None => Err("length is missing a unit"),
    })
    .parse(input)
}

/// Parses a ratio written as `W:H` or `W/H`, optionally spaced ("16 / 9").
///
/// Sides are returned unvalidated; callers decide what a degenerate ratio means.
pub fn parse_ratio(input: &str) -> IResult<&str, (f64, f64)> {
    separated_pair(
        parse_number,
        delimited(space0, alt((char(':'), char('/'))), space0),
        parse_number,
    )
    .parse(input)
}

/// A preset name carrying a parameter, before range validation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ParameterizedName {
    GridCols(u32),
    Aspect(f64, f64),
}

/// Parses `grid-cols-N` or `aspect-W:H` / `aspect-W/H`.
pub fn parse_parameterized_name(input: &str) -> IResult<&str, ParameterizedName> {
    alt((
        map(preceded(tag("grid-cols-"), parse_u32), ParameterizedName::GridCols),
        map(preceded(tag("aspect-"), parse_ratio), |(w, h)| {
            ParameterizedName::Aspect(w, h)
        }),
    ))
    .parse(input)
}

/// Helper to run a nom parser and convert its result to a `Result<T, StyleParseError>`.
pub fn run_parser<'a, T, F>(parser: F, input: &'a str) -> Result<T, StyleParseError>
where
    F: Fn(&'a str) -> IResult<&'a str, T>,
{
    match parser(input.trim()) {
        Ok(("", result)) => Ok(result),
        Ok((rem, _)) => Err(StyleParseError::Parse(format!(
            "Parser did not consume all input. Remainder: '{}'",
            rem
        ))),
        Err(e) => Err(StyleParseError::Parse(e.to_string())),
    }
}
