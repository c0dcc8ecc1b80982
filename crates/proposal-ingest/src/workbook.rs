//! Spreadsheet input via `calamine`.
//!
//! The first non-empty row of the selected sheet is the header. A column whose
//! non-empty cells are all numeric (or boolean) becomes `Float64`; anything
//! else is kept as text and left for downstream parsing.

use std::collections::BTreeSet;
use std::path::Path;

use anyhow::{Context, Result, anyhow, bail};
use calamine::{Data, Reader, open_workbook_auto};
use polars::prelude::{Column, DataFrame, IntoColumn, NamedFrom, Series};
use tracing::debug;

use proposal_common::format_numeric;

#[derive(Debug, Clone, PartialEq)]
enum Cell {
    Number(f64),
    Text(String),
    Empty,
}

impl Cell {
    fn from_data(data: &Data) -> Self {
        match data {
            Data::Empty => Cell::Empty,
            Data::Int(v) => Cell::Number(*v as f64),
            Data::Float(v) => Cell::Number(*v),
            Data::Bool(b) => Cell::Number(if *b { 1.0 } else { 0.0 }),
            Data::String(s) => {
                let trimmed = s.trim();
                if trimmed.is_empty() {
                    Cell::Empty
                } else {
                    Cell::Text(trimmed.to_string())
                }
            }
            other => Cell::Text(other.to_string()),
        }
    }

    fn as_text(&self) -> Option<String> {
        match self {
            Cell::Number(v) => Some(format_numeric(*v)),
            Cell::Text(s) => Some(s.clone()),
            Cell::Empty => None,
        }
    }
}

/// Reads one sheet of a workbook (`sheet = None` picks the first sheet).
pub fn read_workbook_frame(path: &Path, sheet: Option<&str>) -> Result<DataFrame> {
    let mut workbook = open_workbook_auto(path)
        .with_context(|| format!("Failed to open workbook: {}", path.display()))?;
    let sheet_names = workbook.sheet_names();
    let sheet_name = match sheet {
        Some(name) if sheet_names.iter().any(|candidate| candidate == name) => name.to_string(),
        Some(name) => bail!(
            "sheet '{name}' not found in {} (available: {})",
            path.display(),
            sheet_names.join(", ")
        ),
        None => sheet_names
            .first()
            .cloned()
            .ok_or_else(|| anyhow!("workbook has no sheets: {}", path.display()))?,
    };
    let range = workbook
        .worksheet_range(&sheet_name)
        .with_context(|| format!("read sheet '{sheet_name}'"))?;

    let rows: Vec<Vec<Cell>> = range
        .rows()
        .map(|row| row.iter().map(Cell::from_data).collect())
        .collect();
    debug!(sheet = %sheet_name, rows = rows.len(), "workbook sheet loaded");
    cells_to_frame(rows)
}

fn cells_to_frame(rows: Vec<Vec<Cell>>) -> Result<DataFrame> {
    let mut rows = rows
        .into_iter()
        .skip_while(|row| row.iter().all(|cell| *cell == Cell::Empty));
    let Some(header_row) = rows.next() else {
        return Ok(DataFrame::empty());
    };
    let headers = header_names(&header_row);
    let data: Vec<Vec<Cell>> = rows
        .filter(|row| row.iter().any(|cell| *cell != Cell::Empty))
        .collect();

    let mut columns: Vec<Column> = Vec::with_capacity(headers.len());
    for (idx, name) in headers.iter().enumerate() {
        let cells: Vec<&Cell> = data
            .iter()
            .map(|row| row.get(idx).unwrap_or(&Cell::Empty))
            .collect();
        let numeric = cells
            .iter()
            .all(|cell| matches!(cell, Cell::Number(_) | Cell::Empty));
        let series = if numeric {
            let values: Vec<Option<f64>> = cells
                .iter()
                .map(|cell| match cell {
                    Cell::Number(v) => Some(*v),
                    _ => None,
                })
                .collect();
            Series::new(name.as_str().into(), values)
        } else {
            let values: Vec<Option<String>> = cells.iter().map(|cell| cell.as_text()).collect();
            Series::new(name.as_str().into(), values)
        };
        columns.push(series.into_column());
    }
    DataFrame::new(columns).context("build frame from workbook")
}

/// Header text per column; blank headers get a positional name and repeated
/// headers a numeric suffix so the frame has unique column names.
fn header_names(row: &[Cell]) -> Vec<String> {
    let mut seen = BTreeSet::new();
    row.iter()
        .enumerate()
        .map(|(idx, cell)| {
            let base = cell
                .as_text()
                .map(|text| text.split_whitespace().collect::<Vec<_>>().join(" "))
                .filter(|text| !text.is_empty())
                .unwrap_or_else(|| format!("column_{}", idx + 1));
            let mut name = base.clone();
            let mut suffix = 2;
            while !seen.insert(name.clone()) {
                name = format!("{base}_{suffix}");
                suffix += 1;
            }
            name
        })
        .collect()
}
