//! Code columns to category labels.

use polars::prelude::DataFrame;

use proposal_common::column_i64_values;
use proposal_model::{
    DeclineReason, DeclineReasonMap, NOT_APPROVED_BY, VENDOR_ID, VendorCategoryMap, VendorGroup,
};

use crate::error::{CorrelationError, Result};

/// One [`VendorGroup`] per row. Unmapped, missing and non-integer ids
/// become `Other`.
pub fn recode_vendors(df: &DataFrame, map: &VendorCategoryMap) -> Result<Vec<VendorGroup>> {
    let ids = required_codes(df, VENDOR_ID)?;
    Ok(ids.into_iter().map(|id| map.classify(id)).collect())
}

/// One [`DeclineReason`] per row. Unmapped and missing codes become
/// `OtherOrApproved`.
pub fn recode_decline_reasons(
    df: &DataFrame,
    map: &DeclineReasonMap,
) -> Result<Vec<DeclineReason>> {
    let codes = required_codes(df, NOT_APPROVED_BY)?;
    Ok(codes.into_iter().map(|code| map.classify(code)).collect())
}

fn required_codes(df: &DataFrame, name: &str) -> Result<Vec<Option<i64>>> {
    if df.column(name).is_err() {
        return Err(CorrelationError::MissingColumn(name.to_string()));
    }
    Ok(column_i64_values(df, name)?)
}
