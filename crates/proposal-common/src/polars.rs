//! Polars AnyValue utility functions.
//!
//! Helpers for reading Polars `AnyValue`s as numbers, plus whole-column
//! extraction used by the window filter and the correlation builder.

use polars::prelude::{AnyValue, DataFrame, PolarsResult};

/// Formats a floating-point number as a string without trailing zeros.
///
/// # Examples
///
/// ```
/// use proposal_common::format_numeric;
///
/// assert_eq!(format_numeric(1.0), "1");
/// assert_eq!(format_numeric(1.50), "1.5");
/// assert_eq!(format_numeric(0.0), "0");
/// ```
pub fn format_numeric(v: f64) -> String {
    let s = format!("{v}");
    if !s.contains('.') {
        return s;
    }
    let trimmed = s.trim_end_matches('0').trim_end_matches('.');
    if trimmed.is_empty() || trimmed == "-" {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}

/// Reads an `AnyValue` as a number for correlation.
///
/// Booleans become 1.0/0.0 so acceptance flags and one-hot indicators can be
/// correlated. Null, NaN and non-numeric values yield `None`.
pub fn any_to_f64(value: AnyValue<'_>) -> Option<f64> {
    let number = match value {
        AnyValue::Boolean(flag) => Some(if flag { 1.0 } else { 0.0 }),
        AnyValue::Float32(v) => Some(f64::from(v)),
        AnyValue::Float64(v) => Some(v),
        AnyValue::String(text) => parse_f64(text),
        AnyValue::StringOwned(text) => parse_f64(&text),
        // Integer columns (and null) share the code path.
        other => any_to_i64(other).map(|v| v as f64),
    };
    number.filter(|v| !v.is_nan())
}

/// Converts an `AnyValue` to i64, returning `None` for null or non-integral
/// values.
///
/// Spreadsheet readers often hand back integer codes as floats (`37.0`);
/// those are accepted as long as they carry no fractional part.
pub fn any_to_i64(value: AnyValue<'_>) -> Option<i64> {
    match value {
        AnyValue::Null => None,
        AnyValue::Int8(v) => Some(i64::from(v)),
        AnyValue::Int16(v) => Some(i64::from(v)),
        AnyValue::Int32(v) => Some(i64::from(v)),
        AnyValue::Int64(v) => Some(v),
        AnyValue::UInt8(v) => Some(i64::from(v)),
        AnyValue::UInt16(v) => Some(i64::from(v)),
        AnyValue::UInt32(v) => Some(i64::from(v)),
        AnyValue::UInt64(v) => i64::try_from(v).ok(),
        AnyValue::Float32(v) => float_to_i64(f64::from(v)),
        AnyValue::Float64(v) => float_to_i64(v),
        AnyValue::String(s) => parse_i64(s),
        AnyValue::StringOwned(s) => parse_i64(&s),
        _ => None,
    }
}

fn float_to_i64(v: f64) -> Option<i64> {
    if v.is_finite() && v.fract() == 0.0 && v.abs() < 9.0e15 {
        Some(v as i64)
    } else {
        None
    }
}

/// Parses trimmed text as f64; blank or malformed text is `None`.
pub fn parse_f64(value: &str) -> Option<f64> {
    value.trim().parse::<f64>().ok()
}

/// Parses a string as i64, returning None for invalid or empty strings.
///
/// Accepts integral decimals such as `"70.0"`.
pub fn parse_i64(value: &str) -> Option<i64> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed
        .parse::<i64>()
        .ok()
        .or_else(|| trimmed.parse::<f64>().ok().and_then(float_to_i64))
}

/// Reads a whole column as optional f64 values.
pub fn column_f64_values(df: &DataFrame, name: &str) -> PolarsResult<Vec<Option<f64>>> {
    let column = df.column(name)?;
    (0..column.len())
        .map(|idx| column.get(idx).map(any_to_f64))
        .collect()
}

/// Reads a whole column as optional i64 values.
pub fn column_i64_values(df: &DataFrame, name: &str) -> PolarsResult<Vec<Option<i64>>> {
    let column = df.column(name)?;
    (0..column.len())
        .map(|idx| column.get(idx).map(any_to_i64))
        .collect()
}
