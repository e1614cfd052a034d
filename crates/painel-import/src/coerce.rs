//! Cell value coercion: currency-like strings to numbers, anything to text.

use calamine::Data;
use chrono::Timelike;

/// Outcome of a numeric coercion. `used_fallback` records whether the value
/// came from the strip-and-parse string path rather than a numeric cell, so
/// callers (and tests) can tell which path fired.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct CoercedNumber {
    pub value: f64,
    pub used_fallback: bool,
}

impl CoercedNumber {
    fn direct(value: f64) -> Self {
        Self {
            value,
            used_fallback: false,
        }
    }

    fn fallback(value: f64) -> Self {
        Self {
            value,
            used_fallback: true,
        }
    }
}

/// Coerce a cell to a number. Numeric cells pass through unchanged; anything
/// else goes through [`parse_decimal`] on its text form and defaults to 0.
pub(crate) fn coerce_number(cell: &Data) -> CoercedNumber {
    match cell {
        Data::Float(v) => CoercedNumber::direct(*v),
        Data::Int(v) => CoercedNumber::direct(*v as f64),
        // A date in a numeric column keeps its serial value rather than going
        // through the lossy text path.
        Data::DateTime(dt) => CoercedNumber::direct(dt.as_f64()),
        Data::Empty => CoercedNumber::direct(0.0),
        other => CoercedNumber::fallback(parse_decimal(&cell_to_string(other)).unwrap_or(0.0)),
    }
}

/// Parse a locale-formatted currency/number string.
///
/// Strips every character that is not a digit, comma, dot, or minus sign,
/// replaces the *first* comma with a dot, then float-parses the longest
/// numeric prefix. This reproduces the dashboard's historical behavior
/// exactly, including its quirk: `"R$ 3.500,00"` strips to `"3.500,00"`,
/// becomes `"3.500.00"`, and prefix-parses to `3.5` (the thousands dot is
/// taken as the decimal point). `"2200,50"` parses to `2200.5` as intended.
pub(crate) fn parse_decimal(raw: &str) -> Option<f64> {
    let stripped: String = raw
        .chars()
        .filter(|c| c.is_ascii_digit() || matches!(c, ',' | '.' | '-'))
        .collect();
    let replaced = stripped.replacen(',', ".", 1);
    parse_float_prefix(&replaced)
}

/// Parse the longest leading substring that forms a valid float, like JS
/// `parseFloat`: optional sign, digits with at most one dot, optional
/// exponent. `None` when no digit is consumed.
fn parse_float_prefix(s: &str) -> Option<f64> {
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }

    let mut seen_digit = false;
    let mut seen_dot = false;
    while let Some(&b) = bytes.get(end) {
        match b {
            b'0'..=b'9' => seen_digit = true,
            b'.' if !seen_dot => seen_dot = true,
            _ => break,
        }
        end += 1;
    }

    if !seen_digit {
        return None;
    }

    // Optional exponent; only consumed when at least one exponent digit
    // follows, otherwise a trailing "e" would poison the parse.
    if let Some(b'e' | b'E') = bytes.get(end) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let digits_start = exp_end;
        while matches!(bytes.get(exp_end), Some(b'0'..=b'9')) {
            exp_end += 1;
        }
        if exp_end > digits_start {
            end = exp_end;
        }
    }

    s[..end].parse().ok()
}

/// Render a cell as text. Empty cells map to `""`; integral floats print
/// without a fractional part (`3`, not `3.0`), matching how the dashboard's
/// stored strings were produced; dates print ISO, date-only at midnight.
pub(crate) fn cell_to_string(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.clone(),
        Data::Float(v) => format_number(*v),
        Data::Int(v) => v.to_string(),
        Data::Bool(b) => b.to_string(),
        Data::DateTime(dt) => match dt.as_datetime() {
            Some(when) if when.time().num_seconds_from_midnight() == 0 => {
                when.format("%Y-%m-%d").to_string()
            }
            Some(when) => when.format("%Y-%m-%d %H:%M:%S").to_string(),
            None => format_number(dt.as_f64()),
        },
        Data::DateTimeIso(s) | Data::DurationIso(s) => s.clone(),
        Data::Error(e) => e.to_string(),
    }
}

fn format_number(v: f64) -> String {
    if v.fract() == 0.0 && v.abs() < 1e15 {
        format!("{}", v as i64)
    } else {
        format!("{v}")
    }
}
