use polars::prelude::{Column, DataFrame};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use proposal_model::{CategoryMaps, DECLINE_PREFIX, DeclineReason, VENDOR_PREFIX};

use crate::error::Result;
use crate::features::{FeatureTable, numeric_feature_columns};
use crate::matrix::CorrelationMatrix;
use crate::one_hot::{drop_baseline_columns, one_hot};
use crate::recode::{recode_decline_reasons, recode_vendors};

/// Fewest rows for which a correlation is attempted.
pub const MIN_ROWS: usize = 2;

/// A correlation matrix together with the subset it describes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CorrelationReport {
    pub label: String,
    /// Rows that went into the feature table.
    pub rows: usize,
    /// Rows dropped because all of their features were missing.
    pub dropped_rows: usize,
    pub matrix: CorrelationMatrix,
}

/// Result of running the builder on one subset.
#[derive(Debug, Clone, PartialEq)]
pub enum CorrelationOutcome {
    Computed(CorrelationReport),
    /// The subset had fewer than [`MIN_ROWS`] rows; nothing was computed.
    InsufficientRows { label: String, rows: usize },
}

impl CorrelationOutcome {
    pub fn label(&self) -> &str {
        match self {
            CorrelationOutcome::Computed(report) => &report.label,
            CorrelationOutcome::InsufficientRows { label, .. } => label,
        }
    }

    pub fn report(&self) -> Option<&CorrelationReport> {
        match self {
            CorrelationOutcome::Computed(report) => Some(report),
            CorrelationOutcome::InsufficientRows { .. } => None,
        }
    }
}

struct FeatureParts {
    numeric: Vec<Column>,
    vendor: Vec<Column>,
    decline: Vec<Column>,
}

/// Turns a subset of proposals into a feature table and its correlation
/// matrix. Stateless: the same subset always gives the same matrix.
#[derive(Debug, Clone, Copy)]
pub struct FeatureCorrelationBuilder<'a> {
    maps: &'a CategoryMaps,
}

impl<'a> FeatureCorrelationBuilder<'a> {
    pub fn new(maps: &'a CategoryMaps) -> Self {
        Self { maps }
    }

    pub fn maps(&self) -> &'a CategoryMaps {
        self.maps
    }

    /// Builds the feature table for `subset` without correlating it.
    pub fn feature_table(&self, subset: &DataFrame) -> Result<FeatureTable> {
        let parts = self.prepare(subset)?;
        FeatureTable::assemble(parts.numeric, parts.vendor, parts.decline)
    }

    /// Builds the correlation matrix for `subset`, labelled `label`.
    ///
    /// Subsets with fewer than [`MIN_ROWS`] rows log a warning and yield
    /// [`CorrelationOutcome::InsufficientRows`].
    pub fn build(&self, subset: &DataFrame, label: &str) -> Result<CorrelationOutcome> {
        let parts = self.prepare(subset)?;
        let rows = subset.height();
        if rows < MIN_ROWS {
            warn!(subset = label, rows, "Not enough rows to compute correlation for {label}");
            return Ok(CorrelationOutcome::InsufficientRows {
                label: label.to_string(),
                rows,
            });
        }

        let table = FeatureTable::assemble(parts.numeric, parts.vendor, parts.decline)?;
        let matrix = CorrelationMatrix::from_feature_table(&table)?;
        debug!(
            subset = label,
            rows = table.height(),
            dropped_rows = table.dropped_rows,
            features = matrix.size(),
            "correlation computed"
        );
        Ok(CorrelationOutcome::Computed(CorrelationReport {
            label: label.to_string(),
            rows: table.height(),
            dropped_rows: table.dropped_rows,
            matrix,
        }))
    }

    fn prepare(&self, subset: &DataFrame) -> Result<FeatureParts> {
        let vendors = recode_vendors(subset, &self.maps.vendors)?;
        let vendor = one_hot(&vendors, VENDOR_PREFIX);

        let reasons = recode_decline_reasons(subset, &self.maps.decline_reasons)?;
        let decline = drop_baseline_columns::<DeclineReason>(
            one_hot(&reasons, DECLINE_PREFIX),
            DECLINE_PREFIX,
        );

        let numeric = numeric_feature_columns(subset)?;
        Ok(FeatureParts {
            numeric,
            vendor,
            decline,
        })
    }
}
