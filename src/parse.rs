//! Numeric-or-textual input values.
//!
//! Coordinates and distances may arrive either as numbers or as text. Text
//! that does not parse becomes NaN; it is never an error at this stage. The
//! NaN surfaces as a [`NavError`](crate::NavError) once a computation that
//! depends on it finishes.

use log::trace;

/// A scalar input that is either already numeric or still textual.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Value<'a> {
    Number(f64),
    Text(&'a str),
}

macro_rules! impl_from_number {
    ($($t:ty),*) => {
        $(
            impl<'a> From<$t> for Value<'a> {
                fn from(x: $t) -> Self {
                    Value::Number(x as f64)
                }
            }
        )*
    };
}

impl_from_number!(f64, f32, i8, i16, i32, i64, u8, u16, u32, u64);

impl<'a> From<&'a str> for Value<'a> {
    fn from(s: &'a str) -> Self {
        Value::Text(s)
    }
}

impl<'a> From<&'a String> for Value<'a> {
    fn from(s: &'a String) -> Self {
        Value::Text(s.as_str())
    }
}

/// Lenient conversion used for coordinate components.
///
/// Leading whitespace is skipped and the longest leading decimal literal is
/// used, so `"51.5 N"` gives `51.5`. Text with no such prefix gives NaN.
pub fn parse_float<'a, V: Into<Value<'a>>>(value: V) -> f64 {
    match value.into() {
        Value::Number(x) => x,
        Value::Text(s) => {
            let s = s.trim_start();
            let parsed = if let Some(x) = infinity_prefix(s) {
                x
            } else {
                match numeric_prefix_len(s) {
                    0 => std::f64::NAN,
                    end => s[..end].parse::<f64>().unwrap_or(std::f64::NAN),
                }
            };
            if parsed.is_nan() {
                trace!("no numeric prefix in {:?}", s);
            }
            parsed
        }
    }
}

/// Strict conversion used for distances.
///
/// Text is trimmed and must be a complete number. Blank text gives NaN.
pub fn parse_distance<'a, V: Into<Value<'a>>>(value: V) -> f64 {
    match value.into() {
        Value::Number(x) => x,
        Value::Text(s) => {
            let s = s.trim();
            if s.is_empty() {
                trace!("blank distance");
                return std::f64::NAN;
            }
            match s.parse::<f64>() {
                Ok(x) => x,
                Err(err) => {
                    trace!("distance {:?} does not parse: {}", s, err);
                    std::f64::NAN
                }
            }
        }
    }
}

fn infinity_prefix(s: &str) -> Option<f64> {
    if s.starts_with("Infinity") || s.starts_with("+Infinity") {
        Some(std::f64::INFINITY)
    } else if s.starts_with("-Infinity") {
        Some(std::f64::NEG_INFINITY)
    } else {
        None
    }
}

// Length in bytes of the decimal literal at the start of s, or 0.
fn numeric_prefix_len(s: &str) -> usize {
    let bytes = s.as_bytes();
    let mut i = 0;
    if i < bytes.len() && (bytes[i] == b'+' || bytes[i] == b'-') {
        i += 1;
    }
    let int_start = i;
    while i < bytes.len() && bytes[i].is_ascii_digit() {
        i += 1;
    }
    let mut digits = i - int_start;
    if i < bytes.len() && bytes[i] == b'.' {
        let frac_start = i + 1;
        let mut j = frac_start;
        while j < bytes.len() && bytes[j].is_ascii_digit() {
            j += 1;
        }
        digits += j - frac_start;
        if digits > 0 {
            i = j;
        }
    }
    if digits == 0 {
        return 0;
    }

    if i < bytes.len() && (bytes[i] == b'e' || bytes[i] == b'E') {
        let mut j = i + 1;
        if j < bytes.len() && (bytes[j] == b'+' || bytes[j] == b'-') {
            j += 1;
        }
        let exp_start = j;
        while j < bytes.len() && bytes[j].is_ascii_digit() {
            j += 1;
        }
        if j > exp_start {
            i = j;
        }
    }
    i
}
