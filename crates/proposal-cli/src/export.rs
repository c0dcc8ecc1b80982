//! Writes computed correlation reports to disk.
//!
//! Each window produces `<id>.csv` (feature column, then one column per
//! feature; undefined entries are empty) and `<id>.json` (the full report).

use std::fs::{self, File};
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use polars::prelude::{Column, CsvWriter, DataFrame, IntoColumn, NamedFrom, SerWriter, Series};
use tracing::info;

use proposal_correlation::CorrelationReport;

use crate::analysis::WindowResult;

/// Column holding the row feature names in the CSV export.
pub const FEATURE_COLUMN: &str = "feature";

/// The matrix as a frame: a `feature` column then one column per feature.
pub fn report_frame(report: &CorrelationReport) -> Result<DataFrame> {
    let matrix = &report.matrix;
    let mut columns: Vec<Column> = Vec::with_capacity(matrix.size() + 1);
    columns.push(
        Series::new(FEATURE_COLUMN.into(), matrix.labels().to_vec()).into_column(),
    );
    for (col, label) in matrix.labels().iter().enumerate() {
        let values: Vec<Option<f64>> = (0..matrix.size())
            .map(|row| matrix.get(row, col))
            .collect();
        columns.push(Series::new(label.as_str().into(), values).into_column());
    }
    DataFrame::new(columns).context("build correlation frame")
}

pub fn write_report_csv(path: &Path, report: &CorrelationReport) -> Result<()> {
    let mut frame = report_frame(report)?;
    let file = File::create(path).with_context(|| format!("create {}", path.display()))?;
    CsvWriter::new(BufWriter::new(file))
        .include_header(true)
        .finish(&mut frame)
        .with_context(|| format!("write {}", path.display()))?;
    Ok(())
}

pub fn write_report_json(path: &Path, report: &CorrelationReport) -> Result<()> {
    let file = File::create(path).with_context(|| format!("create {}", path.display()))?;
    serde_json::to_writer_pretty(BufWriter::new(file), report)
        .with_context(|| format!("write {}", path.display()))?;
    Ok(())
}

/// Writes CSV and JSON files for every computed window; skipped windows
/// produce nothing. Returns the written paths.
pub fn export_results(output_dir: &Path, results: &[WindowResult]) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(output_dir)
        .with_context(|| format!("create output dir {}", output_dir.display()))?;
    let mut written = Vec::new();
    for result in results {
        let Some(report) = result.outcome.report() else {
            continue;
        };
        let csv_path = output_dir.join(format!("{}.csv", result.window.id));
        write_report_csv(&csv_path, report)?;
        let json_path = output_dir.join(format!("{}.json", result.window.id));
        write_report_json(&json_path, report)?;
        written.push(csv_path);
        written.push(json_path);
    }
    info!(
        output_dir = %output_dir.display(),
        files = written.len(),
        "correlation reports exported"
    );
    Ok(written)
}
