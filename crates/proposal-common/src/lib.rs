//! Shared utilities for proposal crates.
//!
//! Polars `AnyValue` conversions and header matching that tolerates the
//! separator and casing drift found in exported spreadsheets.

pub mod lookup;
pub mod polars;

pub use lookup::normalize_column_key;
pub use polars::{
    any_to_f64, any_to_i64, column_f64_values, column_i64_values, format_numeric,
    parse_f64, parse_i64,
};
