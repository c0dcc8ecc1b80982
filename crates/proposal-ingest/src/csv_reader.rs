use std::path::Path;

use anyhow::{Context, Result};
use polars::prelude::{CsvReadOptions, DataFrame, SerReader};

/// Rows sampled for schema inference. Cost and distance columns often start
/// with integers and only later carry decimals.
const INFER_SCHEMA_ROWS: usize = 10_000;

/// Reads a CSV export with a single header row.
pub fn read_csv_frame(path: &Path) -> Result<DataFrame> {
    if !path.exists() {
        anyhow::bail!("CSV file not found: {}", path.display());
    }
    let df = CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(Some(INFER_SCHEMA_ROWS))
        .try_into_reader_with_file_path(Some(path.to_path_buf()))
        .with_context(|| format!("Failed to create CSV reader: {}", path.display()))?
        .finish()
        .with_context(|| format!("Failed to read CSV: {}", path.display()))?;
    Ok(df)
}
