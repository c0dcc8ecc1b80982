//! The wide numeric table a correlation is computed from.

use polars::prelude::{
    BooleanChunked, Column, DataFrame, DataType, Float64Chunked, IntoColumn, NamedFrom,
    NewChunkedArray, Series,
};

use proposal_common::column_f64_values;
use proposal_model::NUMERIC_FEATURES;

use crate::error::Result;

/// Numeric allow-list columns present in `df`, converted to `Float64`.
///
/// Booleans become 0/1 and text is parsed; anything unparseable is null.
/// Allow-list columns missing from the schema are skipped.
pub fn numeric_feature_columns(df: &DataFrame) -> Result<Vec<Column>> {
    let mut columns = Vec::new();
    for name in NUMERIC_FEATURES {
        if df.column(name).is_err() {
            continue;
        }
        let values = column_f64_values(df, name)?;
        columns.push(Series::new(name.into(), values).into_column());
    }
    Ok(columns)
}

/// Numeric features followed by vendor and decline indicators.
#[derive(Debug, Clone)]
pub struct FeatureTable {
    /// The features, one column per variable.
    pub data: DataFrame,
    /// Rows removed because every feature value was missing.
    pub dropped_rows: usize,
}

impl FeatureTable {
    /// Concatenates the column groups in order and drops rows where every
    /// value is null.
    pub fn assemble(
        numeric: Vec<Column>,
        vendor: Vec<Column>,
        decline: Vec<Column>,
    ) -> Result<Self> {
        let columns: Vec<Column> = numeric.into_iter().chain(vendor).chain(decline).collect();
        let data = DataFrame::new(columns)?;
        let height = data.height();
        if data.width() == 0 {
            return Ok(Self {
                data,
                dropped_rows: 0,
            });
        }

        let mut keep = vec![false; height];
        for column in data.get_columns() {
            let present = column.as_materialized_series().is_not_null();
            for (slot, flag) in keep.iter_mut().zip(&present) {
                *slot |= flag.unwrap_or(false);
            }
        }
        let dropped_rows = keep.iter().filter(|flag| !**flag).count();
        let data = if dropped_rows == 0 {
            data
        } else {
            let mask = BooleanChunked::from_slice("non_empty".into(), &keep);
            data.filter(&mask)?
        };
        Ok(Self { data, dropped_rows })
    }

    pub fn height(&self) -> usize {
        self.data.height()
    }

    pub fn column_names(&self) -> Vec<String> {
        self.data
            .get_column_names()
            .into_iter()
            .map(|name| name.to_string())
            .collect()
    }

    /// Each feature cast to `Float64`, in column order. Indicators become
    /// 0/1.
    pub fn float_columns(&self) -> Result<Vec<(String, Float64Chunked)>> {
        self.data
            .get_columns()
            .iter()
            .map(|column| {
                let values = column.cast(&DataType::Float64)?;
                Ok((column.name().to_string(), values.f64()?.clone()))
            })
            .collect()
    }
}
