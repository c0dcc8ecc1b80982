use std::path::{Path, PathBuf};

use anyhow::{Result, bail};
use polars::prelude::DataFrame;
use tracing::{info, warn};

use proposal_model::{DATE_KEY, NOT_APPROVED_BY, VENDOR_ID};

use crate::csv_reader::read_csv_frame;
use crate::headers::{HeaderRename, canonicalize_headers};
use crate::workbook::read_workbook_frame;

/// Supported input file formats, chosen by extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    Csv,
    Workbook,
}

impl InputFormat {
    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();
        match extension.as_str() {
            "csv" => Ok(InputFormat::Csv),
            "xlsx" | "xlsm" | "xlsb" | "xls" | "ods" => Ok(InputFormat::Workbook),
            _ => bail!("unsupported input format: {}", path.display()),
        }
    }
}

/// Options for [`load_proposals`].
#[derive(Debug, Clone, Default)]
pub struct LoadOptions {
    /// Worksheet to read from a workbook; the first sheet when `None`.
    pub sheet: Option<String>,
}

impl LoadOptions {
    pub fn with_sheet(mut self, sheet: Option<String>) -> Self {
        self.sheet = sheet;
        self
    }
}

/// A loaded proposal table with its provenance.
#[derive(Debug, Clone)]
pub struct LoadedTable {
    pub path: PathBuf,
    pub format: InputFormat,
    pub data: DataFrame,
    pub renamed: Vec<HeaderRename>,
}

impl LoadedTable {
    pub fn record_count(&self) -> usize {
        self.data.height()
    }
}

/// Loads a proposal export and canonicalizes its headers.
pub fn load_proposals(path: &Path, options: &LoadOptions) -> Result<LoadedTable> {
    let format = InputFormat::from_path(path)?;
    let mut data = match format {
        InputFormat::Csv => {
            if options.sheet.is_some() {
                warn!(path = %path.display(), "sheet option ignored for CSV input");
            }
            read_csv_frame(path)?
        }
        InputFormat::Workbook => read_workbook_frame(path, options.sheet.as_deref())?,
    };
    let renamed = canonicalize_headers(&mut data)?;
    for required in [VENDOR_ID, NOT_APPROVED_BY, DATE_KEY] {
        if data.column(required).is_err() {
            warn!(column = required, "input is missing an expected column");
        }
    }
    info!(
        path = %path.display(),
        rows = data.height(),
        columns = data.width(),
        renamed = renamed.len(),
        "proposals loaded"
    );
    Ok(LoadedTable {
        path: path.to_path_buf(),
        format,
        data,
        renamed,
    })
}
