use polars::prelude::{Float64Chunked, NamedFrom};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::features::FeatureTable;
use crate::pearson::pearson;

/// Square matrix of pairwise correlations, indexed by feature name.
///
/// Entries are `None` where the correlation is undefined (fewer than two
/// complete pairs, or a constant feature). Defined entries lie in [-1, 1];
/// defined diagonal entries are exactly 1.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CorrelationMatrix {
    labels: Vec<String>,
    values: Vec<Vec<Option<f64>>>,
}

impl CorrelationMatrix {
    /// Correlates every pair of columns in `table`.
    pub fn from_feature_table(table: &FeatureTable) -> Result<Self> {
        Self::from_chunked(table.float_columns()?)
    }

    /// Correlates every pair of named vectors.
    pub fn from_columns(columns: Vec<(String, Vec<Option<f64>>)>) -> Result<Self> {
        let columns = columns
            .into_iter()
            .map(|(name, values)| {
                let values = Float64Chunked::new(name.as_str().into(), values.as_slice());
                (name, values)
            })
            .collect();
        Self::from_chunked(columns)
    }

    /// Correlates every pair of named float columns. Each pair is computed
    /// once and mirrored, so the matrix is exactly symmetric.
    pub fn from_chunked(columns: Vec<(String, Float64Chunked)>) -> Result<Self> {
        let size = columns.len();
        let mut values = vec![vec![None; size]; size];
        for i in 0..size {
            for j in i..size {
                let r = pearson(&columns[i].1, &columns[j].1)?;
                let r = if i == j { r.map(|_| 1.0) } else { r };
                values[i][j] = r;
                values[j][i] = r;
            }
        }
        let labels = columns.into_iter().map(|(name, _)| name).collect();
        Ok(Self { labels, values })
    }

    pub fn size(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Entry at (`row`, `col`); `None` when undefined or out of range.
    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        self.values.get(row)?.get(col).copied().flatten()
    }

    /// Entry by feature names.
    pub fn value(&self, row: &str, col: &str) -> Option<f64> {
        let row = self.index_of(row)?;
        let col = self.index_of(col)?;
        self.get(row, col)
    }

    pub fn index_of(&self, label: &str) -> Option<usize> {
        self.labels.iter().position(|name| name == label)
    }

    /// Rows as (feature name, entries).
    pub fn rows(&self) -> impl Iterator<Item = (&str, &[Option<f64>])> {
        self.labels
            .iter()
            .map(String::as_str)
            .zip(self.values.iter().map(Vec::as_slice))
    }

    /// Correlations of one feature against every other feature, strongest
    /// first. Undefined entries are skipped.
    pub fn ranked_against(&self, label: &str) -> Vec<(&str, f64)> {
        let Some(row) = self.index_of(label) else {
            return Vec::new();
        };
        let mut ranked: Vec<(&str, f64)> = self
            .labels
            .iter()
            .enumerate()
            .filter(|(col, _)| *col != row)
            .filter_map(|(col, name)| Some((name.as_str(), self.get(row, col)?)))
            .collect();
        ranked.sort_by(|a, b| b.1.abs().total_cmp(&a.1.abs()));
        ranked
    }
}
