use anyhow::{Context, Result};
use polars::prelude::{BooleanChunked, DataFrame, NewChunkedArray};
use tracing::debug;

use proposal_common::column_i64_values;
use proposal_model::{DATE_KEY, DateWindow};

/// Rows of a proposal table that fall inside one date window.
#[derive(Debug, Clone)]
pub struct WindowSubset {
    pub window: DateWindow,
    pub data: DataFrame,
}

impl WindowSubset {
    pub fn record_count(&self) -> usize {
        self.data.height()
    }
}

/// Keeps the rows whose `DateKey` lies inside `window` (both ends included).
/// Rows with a missing or non-integer key are dropped.
pub fn filter_window(df: &DataFrame, window: &DateWindow) -> Result<DataFrame> {
    let keys = column_i64_values(df, DATE_KEY)
        .with_context(|| format!("read {DATE_KEY} for window '{}'", window.id))?;
    let keep: Vec<bool> = keys
        .iter()
        .map(|key| key.is_some_and(|key| window.contains(key)))
        .collect();
    let mask = BooleanChunked::from_slice(window.id.into(), &keep);
    let filtered = df.filter(&mask)?;
    debug!(
        window = window.id,
        rows = filtered.height(),
        total = df.height(),
        "window filtered"
    );
    Ok(filtered)
}

/// Slices `df` into one subset per window, preserving window order.
pub fn window_subsets(df: &DataFrame, windows: &[DateWindow]) -> Result<Vec<WindowSubset>> {
    windows
        .iter()
        .map(|window| {
            Ok(WindowSubset {
                window: *window,
                data: filter_window(df, window)?,
            })
        })
        .collect()
}
