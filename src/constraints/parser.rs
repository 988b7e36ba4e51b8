//! Term-level parser for the date and time expressions of a record.
//!
//! An expression is a comma-separated list of terms. Each term is an optional
//! comparison operator followed by either a literal or a cell reference:
//!
//! ```text
//! term      := operator? operand
//! operator  := "=" | "!=" | "<" | "<=" | ">" | ">=" | "≠" | "≤" | "≥"
//! operand   := date | time | reference
//! date      := YYYY ("-" | "/") M{1,2} ("-" | "/") D{1,2}
//! time      := H{1,2} ":" MM (":" SS)? ("AM" | "PM")?
//! reference := ("$" SHEET ".")? LETTERS DIGITS
//! ```

use super::{Literal, Operator};
use crate::error::ParseFailure;
use crate::model::CellRef;
use chrono::{NaiveDate, NaiveTime};

/// One parsed term, before reference resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Term {
    pub operator: Operator,
    pub operand: Operand,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operand {
    Literal(Literal),
    /// A record address. `sheet` is `None` when the term names a cell of the
    /// record's own grade.
    Reference { sheet: Option<String>, cell: CellRef },
}

/// Splits an expression into its non-blank terms, trimmed.
pub fn split_terms(expr: &str) -> impl Iterator<Item = &str> {
    expr.split(',').map(str::trim).filter(|t| !t.is_empty())
}

/// Parses one term. Whitespace around the operator and operand is ignored.
pub fn parse_term(term: &str) -> Result<Term, ParseFailure> {
    let (operator, rest) = split_operator(term.trim());
    let rest = rest.trim_start();

    let operand = if let Some(date) = parse_date(rest) {
        Operand::Literal(Literal::Date(date?))
    } else if let Some(time) = parse_time(rest) {
        Operand::Literal(Literal::Time(time?))
    } else if let Some((sheet, cell)) = parse_reference(rest) {
        Operand::Reference { sheet, cell }
    } else {
        return Err(ParseFailure::Unrecognised);
    };

    Ok(Term { operator, operand })
}

// Two-character operators must be tried before their one-character prefixes.
const OPERATORS: [(&str, Operator); 9] = [
    ("!=", Operator::Ne),
    ("<=", Operator::Le),
    (">=", Operator::Ge),
    ("≠", Operator::Ne),
    ("≤", Operator::Le),
    ("≥", Operator::Ge),
    ("=", Operator::Eq),
    ("<", Operator::Lt),
    (">", Operator::Gt),
];

fn split_operator(term: &str) -> (Operator, &str) {
    OPERATORS
        .iter()
        .find_map(|(symbol, op)| term.strip_prefix(*symbol).map(|rest| (*op, rest)))
        .unwrap_or((Operator::default(), term))
}

/// Consumes a run of ASCII digits between `min` and `max` long.
fn digits(s: &str, min: usize, max: usize) -> Option<(u32, &str)> {
    let len = s.bytes().take_while(u8::is_ascii_digit).count();
    if len < min || len > max {
        return None;
    }
    let value = s[..len].parse().ok()?;
    Some((value, &s[len..]))
}

/// `None` if the text does not have the shape of a date, `Some(Err)` if it has
/// the shape but names no calendar day.
fn parse_date(s: &str) -> Option<Result<NaiveDate, ParseFailure>> {
    let (year, rest) = digits(s, 4, 4)?;
    let sep = rest.chars().next().filter(|c| *c == '-' || *c == '/')?;
    let (month, rest) = digits(&rest[1..], 1, 2)?;
    let rest = rest.strip_prefix(sep)?;
    let (day, rest) = digits(rest, 1, 2)?;
    if !rest.trim().is_empty() {
        return None;
    }
    let year = i32::try_from(year).ok()?;
    Some(NaiveDate::from_ymd_opt(year, month, day).ok_or(ParseFailure::OutOfRange))
}

fn parse_time(s: &str) -> Option<Result<NaiveTime, ParseFailure>> {
    let (mut hour, rest) = digits(s, 1, 2)?;
    let rest = rest.strip_prefix(':')?;
    let (minute, rest) = digits(rest, 1, 2)?;
    let (second, rest) = match rest.strip_prefix(':') {
        Some(tail) => digits(tail, 1, 2)?,
        None => (0, rest),
    };

    let qualifier = rest.trim();
    if qualifier.eq_ignore_ascii_case("pm") {
        if hour < 12 {
            hour += 12;
        }
    } else if !qualifier.is_empty() && !qualifier.eq_ignore_ascii_case("am") {
        return None;
    }

    Some(NaiveTime::from_hms_opt(hour, minute, second).ok_or(ParseFailure::OutOfRange))
}

fn parse_reference(s: &str) -> Option<(Option<String>, CellRef)> {
    let s = s.trim_end();
    match s.strip_prefix('$') {
        Some(qualified) => {
            let (sheet, cell) = qualified.rsplit_once('.')?;
            if sheet.is_empty() {
                return None;
            }
            Some((Some(sheet.to_string()), cell.parse().ok()?))
        }
        None => Some((None, s.parse().ok()?)),
    }
}
