//! Form-data capability and lenient numeric parsing.
//!
//! Handlers never reach into a page directly. They read named fields through
//! [`FormSource`], which a terminal prompt, a test map, or a real page can
//! implement. Numeric fields are parsed the way browser forms traditionally
//! coerce them: the longest numeric prefix wins and anything else is "not a
//! number" (`None`).

use std::collections::{BTreeMap, HashMap};
use std::str::FromStr;

use rust_decimal::Decimal;

/// Read access to the current values of a form's fields.
pub trait FormSource {
    /// Current value of the field with the given id.
    ///
    /// Absent fields read as the empty string, matching an empty input.
    fn value(&self, field: &str) -> String;
}

impl FormSource for HashMap<String, String> {
    fn value(&self, field: &str) -> String {
        self.get(field).cloned().unwrap_or_default()
    }
}

impl FormSource for BTreeMap<String, String> {
    fn value(&self, field: &str) -> String {
        self.get(field).cloned().unwrap_or_default()
    }
}

impl<T: FormSource + ?Sized> FormSource for &T {
    fn value(&self, field: &str) -> String {
        (**self).value(field)
    }
}

/// Parse a leading base-10 integer, ignoring trailing garbage.
///
/// `"3"` and `" 3 copies"` both yield `3`; `"abc"` yields `None`.
#[must_use]
pub fn parse_int(text: &str) -> Option<i64> {
    let trimmed = text.trim_start();
    let (sign, rest) = split_sign(trimmed);
    let digits = leading_digits(rest);
    if digits.is_empty() {
        return None;
    }
    format!("{sign}{digits}").parse().ok()
}

/// Parse a leading decimal number, ignoring trailing garbage.
///
/// `"12.50"`, `"12.5 USD"` and `".5"` parse; `""` and `"free"` yield `None`.
#[must_use]
pub fn parse_float(text: &str) -> Option<Decimal> {
    let trimmed = text.trim_start();
    let (sign, rest) = split_sign(trimmed);

    let int_part = leading_digits(rest);
    let after_int = rest.get(int_part.len()..).unwrap_or_default();
    let frac_part = after_int
        .strip_prefix('.')
        .map(leading_digits)
        .unwrap_or_default();

    if int_part.is_empty() && frac_part.is_empty() {
        return None;
    }

    let int_part = if int_part.is_empty() { "0" } else { int_part };
    let literal = if frac_part.is_empty() {
        format!("{sign}{int_part}")
    } else {
        format!("{sign}{int_part}.{frac_part}")
    };
    Decimal::from_str(&literal).ok()
}

fn split_sign(text: &str) -> (&'static str, &str) {
    if let Some(rest) = text.strip_prefix('-') {
        ("-", rest)
    } else if let Some(rest) = text.strip_prefix('+') {
        ("", rest)
    } else {
        ("", text)
    }
}

fn leading_digits(text: &str) -> &str {
    let end = text
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(text.len());
    text.get(..end).unwrap_or_default()
}
