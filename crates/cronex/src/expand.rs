//! Field expansion: one raw cron field into its matched values.
//!
//! A field is a comma-separated list of terms, each of which is a range
//! (`5-10`), a step (`*/15` or `5/15`), a wildcard (`*`), or a plain value.
//! Terms expand independently and concatenate left to right, duplicates
//! included.
//!
//! Plain-value parsing is deliberately lenient: the term is truncated to the
//! field's digit width (one digit when the bound fits in one, two otherwise)
//! before validation, so `"111"` against a bound of 60 expands to `11`
//! rather than being rejected. Empty text anywhere a number is expected
//! parses as 0, and range terms are never checked against the field bound.
//! These leniencies are inherited behavior and kept on purpose.

use crate::error::{CronError, CronResult};

/// A single expanded value-token: a concrete number or the wildcard.
///
/// Numbers are 0-based stored values; for day-of-month and month the
/// renderer re-adds the `1` removed at expansion time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FieldValue {
    /// The literal `*`, standing for every value the field allows.
    Wildcard,
    /// One concrete stored value.
    Number(i64),
}

impl std::fmt::Display for FieldValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FieldValue::Wildcard => f.write_str("*"),
            FieldValue::Number(n) => write!(f, "{n}"),
        }
    }
}

/// Expand one raw field into its ordered sequence of value-tokens.
///
/// `bound` is the field's exclusive upper bound and `offset` the adjustment
/// applied to every raw value (`-1` for the 1-based fields, `0` otherwise).
///
/// # Errors
///
/// [`CronError::MalformedTerm`] if a term fails numeric or pattern parsing,
/// or a step interval is zero or negative; [`CronError::OutOfRange`] if a
/// plain value's offset-adjusted magnitude reaches `bound`.
///
/// # Examples
///
/// ```rust
/// use cronex::{expand, FieldValue};
///
/// let minutes = expand("*/15", 60, 0).unwrap();
/// assert_eq!(
///     minutes,
///     vec![
///         FieldValue::Number(0),
///         FieldValue::Number(15),
///         FieldValue::Number(30),
///         FieldValue::Number(45),
///     ]
/// );
///
/// // Day-of-month input is 1-based; storage is 0-based.
/// let days = expand("1,15", 31, -1).unwrap();
/// assert_eq!(days, vec![FieldValue::Number(0), FieldValue::Number(14)]);
/// ```
pub fn expand(expression: &str, bound: i64, offset: i64) -> CronResult<Vec<FieldValue>> {
    let mut result = Vec::new();

    for term in expression.split(',') {
        if term.contains('-') {
            expand_range(term, offset, &mut result)?;
        } else if term.contains('/') {
            expand_step(term, bound, offset, &mut result)?;
        } else if term == "*" {
            result.push(FieldValue::Wildcard);
        } else {
            result.push(expand_plain(term, bound, offset)?);
        }
    }

    Ok(result)
}

// ============================================================================
// Term productions, in precedence order
// ============================================================================

/// `A-B`: the inclusive ascending run from `A+offset` to `B+offset`.
///
/// An empty side parses as 0, so `"5-"` is the empty run and `"-5"` runs
/// from 0. The run is not checked against the field bound (inherited
/// behavior).
fn expand_range(term: &str, offset: i64, out: &mut Vec<FieldValue>) -> CronResult<()> {
    let (lower, upper) = term.split_once('-').unwrap_or((term, ""));
    let lower = parse_side(term, lower)? + offset;
    let upper = parse_side(term, upper)? + offset;

    for value in lower..=upper {
        out.push(FieldValue::Number(value));
    }
    Ok(())
}

/// `A/N`: every `N`th value from `A+offset` (`*` starts at 0) up to `bound`.
///
/// An empty start parses as 0, like a `*`, except that the offset still
/// applies. Anything after a second `/` is discarded. An interval of zero
/// or less is malformed rather than an endless loop.
fn expand_step(term: &str, bound: i64, offset: i64, out: &mut Vec<FieldValue>) -> CronResult<()> {
    let mut parts = term.split('/');
    let start = parts.next().unwrap_or(term);
    let interval = parts.next().unwrap_or("");

    let start = if start == "*" {
        0
    } else {
        parse_side(term, start)? + offset
    };
    let interval = parse_side(term, interval)?;
    if interval <= 0 {
        return Err(CronError::MalformedTerm {
            term: term.to_string(),
        });
    }

    let mut current = start;
    while current < bound {
        out.push(FieldValue::Number(current));
        // An interval this large has already cleared the bound; stopping on
        // overflow matches the values emitted so far.
        current = match current.checked_add(interval) {
            Some(next) => next,
            None => break,
        };
    }
    Ok(())
}

/// Plain value: best-effort parse of the term's leading digits.
///
/// The term is truncated to one character when `bound <= 9`, two otherwise,
/// and the truncated text must be 0-2 digits or a lone `*`. An empty
/// sub-term (`"5,"`) parses as 0, the same reading empty range and step
/// sides get. A zero-valued result skips the bound check (inherited
/// behavior).
fn expand_plain(term: &str, bound: i64, offset: i64) -> CronResult<FieldValue> {
    let width = if bound <= 9 { 1 } else { 2 };
    let truncated: String = term.chars().take(width).collect();

    if truncated == "*" {
        return Ok(FieldValue::Wildcard);
    }
    if !truncated.chars().all(|c| c.is_ascii_digit()) {
        return Err(CronError::MalformedTerm {
            term: term.to_string(),
        });
    }

    let raw = if truncated.is_empty() {
        0
    } else {
        parse_number(term, &truncated)?
    };
    let value = raw + offset;

    if value != 0 && value >= bound {
        return Err(CronError::OutOfRange {
            term: term.to_string(),
            max: bound,
        });
    }
    Ok(FieldValue::Number(value))
}

fn parse_number(term: &str, text: &str) -> CronResult<i64> {
    text.parse().map_err(|_| CronError::MalformedTerm {
        term: term.to_string(),
    })
}

/// One side of a range or step term: empty text parses as 0.
fn parse_side(term: &str, text: &str) -> CronResult<i64> {
    if text.is_empty() {
        Ok(0)
    } else {
        parse_number(term, text)
    }
}
