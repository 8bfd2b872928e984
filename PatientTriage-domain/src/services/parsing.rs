//! Field parsing for raw patient vitals.
//!
//! Every parser here fails soft: a value that cannot be interpreted as its
//! expected numeric form comes back as `None`, never as an error and never
//! as zero. The classifier treats that sentinel as a data-quality signal.

use serde_json::Value;

use crate::entities::{BloodPressureReading, ParsedVitals, PatientRecord};

/// Parse a raw blood pressure field.
///
/// Accepts only a string of the form "SYSTOLIC/DIASTOLIC" where both sides
/// are base-10 integers (surrounding whitespace tolerated). Anything else,
/// including a numeric JSON value, a missing `/`, more than one `/`, or a
/// side that does not parse, yields `None`. The contract is all-or-nothing:
/// the rubric needs both values together, so a partial pair is never
/// produced.
pub fn parse_blood_pressure(raw: Option<&Value>) -> Option<BloodPressureReading> {
    let text = raw?.as_str()?;
    let (systolic_part, diastolic_part) = split_reading(text)?;
    let systolic = parse_bp_side(systolic_part)?;
    let diastolic = parse_bp_side(diastolic_part)?;
    Some(BloodPressureReading {
        systolic,
        diastolic,
    })
}

/// Parse a raw temperature field into degrees Fahrenheit.
///
/// JSON numbers pass straight through. Strings are parsed by taking the
/// longest leading numeric prefix ("98.6 F" reads as 98.6), so trailing
/// text is tolerated only insofar as the prefix parser accepts it. A value
/// with no numeric prefix at all yields `None`. Clinically nonsensical but
/// numeric values are not filtered here.
pub fn parse_temperature(raw: Option<&Value>) -> Option<f64> {
    match raw? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => float_prefix(s),
        _ => None,
    }
}

/// Parse a raw age field into whole years.
///
/// Integer-valued parse: fractional input is truncated toward zero, so
/// "42.9" reads as 42 and -42.9 as -42. Strings take the longest leading
/// base-10 integer prefix; values with no such prefix yield `None`.
pub fn parse_age(raw: Option<&Value>) -> Option<i64> {
    match raw? {
        Value::Number(n) => n.as_f64().map(|f| f.trunc() as i64),
        Value::String(s) => int_prefix(s),
        _ => None,
    }
}

/// Run all three field parsers over one record.
pub fn parse_vitals(record: &PatientRecord) -> ParsedVitals {
    ParsedVitals {
        blood_pressure: parse_blood_pressure(record.blood_pressure.as_ref()),
        temperature: parse_temperature(record.temperature.as_ref()),
        age: parse_age(record.age.as_ref()),
    }
}

/// Split a reading on its separator, requiring exactly one `/`.
fn split_reading(text: &str) -> Option<(&str, &str)> {
    let mut parts = text.split('/');
    let systolic = parts.next()?;
    let diastolic = parts.next()?;
    if parts.next().is_some() {
        return None;
    }
    Some((systolic, diastolic))
}

/// One side of a blood pressure reading: a base-10 integer, whitespace
/// trimmed, empty rejected.
fn parse_bp_side(side: &str) -> Option<i64> {
    let trimmed = side.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse().ok()
}

/// Longest leading float prefix of `input`, after leading whitespace.
///
/// Grammar: optional sign, digits with an optional fractional part (or a
/// bare fractional part like ".5"), and an optional well-formed exponent.
/// Returns `None` when no digits are found.
fn float_prefix(input: &str) -> Option<f64> {
    let s = input.trim_start();
    let bytes = s.as_bytes();
    let mut i = 0;

    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        i += 1;
    }

    let int_start = i;
    while i < bytes.len() && bytes[i].is_ascii_digit() {
        i += 1;
    }
    let int_digits = i - int_start;

    let mut frac_digits = 0;
    if i < bytes.len() && bytes[i] == b'.' {
        let dot = i;
        i += 1;
        let frac_start = i;
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        frac_digits = i - frac_start;
        if int_digits == 0 && frac_digits == 0 {
            // A lone "." is not a number; back off the dot
            i = dot;
        }
    }

    if int_digits == 0 && frac_digits == 0 {
        return None;
    }

    // The exponent only counts when it carries at least one digit
    let mut end = i;
    if i < bytes.len() && (bytes[i] == b'e' || bytes[i] == b'E') {
        let mut j = i + 1;
        if matches!(bytes.get(j), Some(b'+') | Some(b'-')) {
            j += 1;
        }
        let exp_start = j;
        while j < bytes.len() && bytes[j].is_ascii_digit() {
            j += 1;
        }
        if j > exp_start {
            end = j;
        }
    }

    s[..end].parse().ok()
}

/// Longest leading base-10 integer prefix of `input`, after leading
/// whitespace. Returns `None` when no digits are found.
fn int_prefix(input: &str) -> Option<i64> {
    let s = input.trim_start();
    let bytes = s.as_bytes();
    let mut i = 0;

    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        i += 1;
    }

    let digit_start = i;
    while i < bytes.len() && bytes[i].is_ascii_digit() {
        i += 1;
    }
    if i == digit_start {
        return None;
    }

    s[..i].parse().ok()
}
