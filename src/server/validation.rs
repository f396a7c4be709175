//! Declarative request body validation.
//!
//! Each resource declares an ordered list of [`FieldRule`]s. [`validate`] evaluates
//! every rule against a JSON object and collects all failures, in declaration order,
//! before any store call is made.

use serde_json::{Map, Value};

use crate::{model::api::FieldErrorDto, server::error::AppError};

/// Check applied to a single field value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Check {
    /// Present, not `null`, not `""` and not `[]`.
    NotEmpty,
    /// A string shaped like `local@domain.tld`.
    Email,
    /// A string in ISO-8601 date form, optionally with a time and zone.
    Iso8601Date,
    /// A JSON number or a decimal string.
    Numeric,
    /// An integer (JSON or string) greater than or equal to the bound.
    IntMin(i64),
}

#[derive(Debug, Clone, Copy)]
pub struct FieldRule {
    pub field: &'static str,
    pub check: Check,
    /// Optional rules are skipped when the field is absent from the body.
    pub optional: bool,
    pub message: &'static str,
}

impl FieldRule {
    pub const fn required(field: &'static str, check: Check, message: &'static str) -> Self {
        Self {
            field,
            check,
            optional: false,
            message,
        }
    }

    pub const fn optional(field: &'static str, check: Check, message: &'static str) -> Self {
        Self {
            field,
            check,
            optional: true,
            message,
        }
    }
}

/// Whether rules are applied as declared or all relaxed to optional.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Create,
    Update,
}

/// Runs every rule against `body` and returns all failures together.
///
/// # Arguments
/// - `rules` - Ordered rule set of the target resource
/// - `body` - Request body object
/// - `mode` - `Update` treats every rule as optional
///
/// # Returns
/// - `Ok(())` - Every applicable rule passed
/// - `Err(AppError::Validation(_))` - One entry per failed rule, in declaration order
pub fn validate(
    rules: &[FieldRule],
    body: &Map<String, Value>,
    mode: Mode,
) -> Result<(), AppError> {
    let errors: Vec<FieldErrorDto> = rules
        .iter()
        .filter_map(|rule| {
            let value = body.get(rule.field);
            let optional = rule.optional || mode == Mode::Update;

            let passed = match value {
                None => optional,
                Some(value) => check(rule.check, value),
            };

            (!passed).then(|| FieldErrorDto {
                field: rule.field.to_string(),
                message: rule.message.to_string(),
            })
        })
        .collect();

    if errors.is_empty() {
        Ok(())
    } else {
        Err(AppError::Validation(errors))
    }
}

fn check(check: Check, value: &Value) -> bool {
    match check {
        Check::NotEmpty => is_not_empty(value),
        Check::Email => value.as_str().is_some_and(is_email),
        Check::Iso8601Date => value.as_str().is_some_and(is_iso8601_date),
        Check::Numeric => match value {
            Value::Number(_) => true,
            Value::String(s) => is_numeric(s),
            _ => false,
        },
        Check::IntMin(min) => as_integer(value).is_some_and(|n| n >= min),
    }
}

fn is_not_empty(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::String(s) => !s.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Bool(_) | Value::Number(_) | Value::Object(_) => true,
    }
}

fn is_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }

    let mut parts = value.split('@');
    let (Some(local), Some(domain), None) = (parts.next(), parts.next(), parts.next()) else {
        return false;
    };

    if local.is_empty() || !domain.contains('.') {
        return false;
    }

    domain.split('.').all(|label| {
        !label.is_empty()
            && !label.starts_with('-')
            && !label.ends_with('-')
            && label.chars().all(|c| c.is_alphanumeric() || c == '-')
    })
}

/// Accepts the ISO-8601 shapes that express-style validators accept: a year alone or
/// followed by a calendar (`-MM[-DD]`), week (`-Www[-D]`) or ordinal (`-DDD`) date in
/// extended or basic format, then an optional time of any precision and zone.
///
/// Only the grammar is checked; `1965-02-30` passes.
fn is_iso8601_date(value: &str) -> bool {
    let s = value.as_bytes();

    let start = usize::from(matches!(s.first(), Some(b'+' | b'-')));
    if number_at(s, start, 4).is_none() {
        return false;
    }
    let year_end = start + 4;

    // `196508` is neither a year nor a basic-format date
    if number_at(s, year_end, 2).is_some()
        && !s
            .get(year_end + 2)
            .is_some_and(|c| c.is_ascii_alphanumeric() || *c == b'_')
    {
        return false;
    }

    if year_end == s.len() {
        return true;
    }

    date_ends(s, year_end)
        .into_iter()
        .any(|end| time_matches(s, end))
}

/// Every position where the part of a date after the year can end.
fn date_ends(s: &[u8], i: usize) -> Vec<usize> {
    let sep: &[u8] = if s.get(i) == Some(&b'-') { b"-" } else { b"" };
    let i = i + sep.len();
    let mut ends = Vec::new();

    if number_at(s, i, 2).is_some_and(|month| (1..=12).contains(&month)) {
        ends.push(i + 2);

        let day = i + 2 + sep.len();
        if starts_with_at(s, i + 2, sep)
            && number_at(s, day, 2).is_some_and(|d| (1..=31).contains(&d))
        {
            ends.push(day + 2);
        }
    }

    if s.get(i) == Some(&b'W') && number_at(s, i + 1, 2).is_some_and(|week| week <= 53) {
        let week_end = i + 3;
        ends.push(week_end);

        for dash in [&b"-"[..], &b""[..]] {
            let weekday = week_end + dash.len();
            if starts_with_at(s, week_end, dash)
                && number_at(s, weekday, 1).is_some_and(|d| (1..=7).contains(&d))
            {
                ends.push(weekday + 1);
            }
        }
    }

    if number_at(s, i, 3).is_some_and(|day| (1..=366).contains(&day)) {
        ends.push(i + 3);
    }

    ends
}

/// Whether `s[i..]` is empty or a `T`/space separated time with optional zone.
fn time_matches(s: &[u8], i: usize) -> bool {
    if i == s.len() {
        return true;
    }
    if !s.get(i).is_some_and(|c| *c == b'T' || c.is_ascii_whitespace()) {
        return false;
    }
    let i = i + 1;

    // (end, separator used between hours and minutes) for each reading of hh[:mm]
    let mut hours: Vec<(usize, &[u8])> = Vec::new();
    if number_at(s, i, 2).is_some_and(|h| h <= 23) {
        hours.push((i + 2, &b""[..]));

        for sep in [&b":"[..], &b""[..]] {
            let minute = i + 2 + sep.len();
            if starts_with_at(s, i + 2, sep)
                && number_at(s, minute, 2).is_some_and(|m| m <= 59)
            {
                hours.push((minute + 2, sep));
            }
        }
    }
    for sep in [&b":"[..], &b""[..]] {
        if starts_with_at(s, i, b"24")
            && starts_with_at(s, i + 2, sep)
            && starts_with_at(s, i + 2 + sep.len(), b"00")
        {
            hours.push((i + 4 + sep.len(), &b""[..]));
        }
    }

    let mut clock: Vec<(usize, &[u8])> = vec![(i, &b""[..])];
    for (end, sep) in hours {
        for fraction_end in fraction_ends(s, end, true) {
            clock.push((fraction_end, sep));
        }
    }

    let mut seconds = Vec::new();
    for (end, sep) in clock {
        seconds.push(end);

        let second = end + sep.len();
        if starts_with_at(s, end, sep) && number_at(s, second, 2).is_some_and(|v| v <= 59) {
            seconds.extend(fraction_ends(s, second + 2, false));
        }
    }

    seconds
        .into_iter()
        .any(|end| zone_ends(s, end).contains(&s.len()))
}

/// `i` itself plus the end of every `[.,]digits` fraction starting at `i`.
fn fraction_ends(s: &[u8], i: usize, forbid_colon_after: bool) -> Vec<usize> {
    let mut ends = vec![i];

    if matches!(s.get(i), Some(b'.' | b',')) {
        let mut j = i + 1;
        while s.get(j).is_some_and(u8::is_ascii_digit) {
            j += 1;
            if !(forbid_colon_after && s.get(j) == Some(&b':')) {
                ends.push(j);
            }
        }
    }

    ends
}

/// `i` itself plus the end of every zone designator (`Z`, `±hh`, `±hh:mm`, `±hhmm`).
fn zone_ends(s: &[u8], i: usize) -> Vec<usize> {
    let mut ends = vec![i];

    match s.get(i) {
        Some(b'Z' | b'z') => ends.push(i + 1),
        Some(b'+' | b'-') if number_at(s, i + 1, 2).is_some_and(|h| h <= 23) => {
            let hour_end = i + 3;
            ends.push(hour_end);

            if s.get(hour_end) == Some(&b':') {
                ends.push(hour_end + 1);
            }
            for sep in [&b":"[..], &b""[..]] {
                let minute = hour_end + sep.len();
                if starts_with_at(s, hour_end, sep)
                    && number_at(s, minute, 2).is_some_and(|m| m <= 59)
                {
                    ends.push(minute + 2);
                }
            }
        }
        _ => {}
    }

    ends
}

/// Parses exactly `len` ASCII digits at `i`.
fn number_at(s: &[u8], i: usize, len: usize) -> Option<u32> {
    let digits = s.get(i..i + len)?;
    if !digits.iter().all(u8::is_ascii_digit) {
        return None;
    }

    Some(digits.iter().fold(0, |acc, d| acc * 10 + u32::from(d - b'0')))
}

fn starts_with_at(s: &[u8], i: usize, prefix: &[u8]) -> bool {
    s.get(i..).is_some_and(|rest| rest.starts_with(prefix))
}

fn is_numeric(value: &str) -> bool {
    let unsigned = value.strip_prefix(['+', '-']).unwrap_or(value);

    let (whole, fraction) = match unsigned.split_once('.') {
        Some((whole, fraction)) => (whole, Some(fraction)),
        None => (unsigned, None),
    };

    let digits = |s: &str| s.chars().all(|c| c.is_ascii_digit());

    match fraction {
        // `.5` is accepted, `5.` is not
        Some(fraction) => !fraction.is_empty() && digits(fraction) && digits(whole),
        None => !whole.is_empty() && digits(whole),
    }
}

fn as_integer(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.parse::<i64>().ok(),
        _ => None,
    }
}
