//! Strict parser for the `a,b~a,b~...` coefficient text.

use std::fmt;
use std::str::FromStr;

use super::types::{CoeffPair, Coefficients};

const FIELD_NAMES: [&str; 2] = ["a", "b"];

/// Malformed coefficient text. Pair indices are 0-based.
#[derive(Clone, Debug, PartialEq)]
pub enum ParseError {
    /// No non-blank line in the input.
    Empty,
    /// A second non-blank line was found (1-based line number).
    MultipleLines { line: usize },
    /// Nothing between two `~` separators (or a trailing `~`).
    EmptyPair { index: usize },
    /// A pair did not split into exactly two comma-separated fields.
    Arity { index: usize, found: usize },
    /// A field is not a decimal number.
    Number {
        index: usize,
        field: &'static str,
        text: String,
    },
    /// A field parsed to NaN or an infinity.
    NonFinite { index: usize, field: &'static str },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::Empty => write!(f, "coefficient text is empty"),
            ParseError::MultipleLines { line } => write!(
                f,
                "coefficients must be on one line, found more content on line {line}"
            ),
            ParseError::EmptyPair { index } => write!(f, "pair {index} is empty"),
            ParseError::Arity { index, found } => write!(
                f,
                "pair {index} has {found} comma-separated fields, expected 2"
            ),
            ParseError::Number { index, field, text } => {
                write!(f, "pair {index} field `{field}`: `{text}` is not a number")
            }
            ParseError::NonFinite { index, field } => {
                write!(f, "pair {index} field `{field}` is not finite")
            }
        }
    }
}

impl std::error::Error for ParseError {}

impl FromStr for Coefficients {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut lines = s
            .lines()
            .enumerate()
            .map(|(i, l)| (i, l.trim()))
            .filter(|(_, l)| !l.is_empty());
        let Some((_, line)) = lines.next() else {
            return Err(ParseError::Empty);
        };
        if let Some((i, _)) = lines.next() {
            return Err(ParseError::MultipleLines { line: i + 1 });
        }
        // `split` yields at least one item and empty items are errors, so the
        // collected list is never empty.
        let pairs = line
            .split('~')
            .enumerate()
            .map(|(index, raw)| parse_pair(index, raw))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Coefficients { pairs })
    }
}

fn parse_pair(index: usize, raw: &str) -> Result<CoeffPair, ParseError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(ParseError::EmptyPair { index });
    }
    let fields: Vec<&str> = raw.split(',').collect();
    if fields.len() != 2 {
        return Err(ParseError::Arity {
            index,
            found: fields.len(),
        });
    }
    let a = parse_field(index, 0, fields[0])?;
    let b = parse_field(index, 1, fields[1])?;
    Ok(CoeffPair::new(a, b))
}

fn parse_field(index: usize, field: usize, text: &str) -> Result<f64, ParseError> {
    let text = text.trim();
    let field = FIELD_NAMES[field];
    let value: f64 = text.parse().map_err(|_| ParseError::Number {
        index,
        field,
        text: text.to_string(),
    })?;
    if !value.is_finite() {
        return Err(ParseError::NonFinite { index, field });
    }
    Ok(value)
}
