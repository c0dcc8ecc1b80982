//! Canonical column names for proposal tables.
//!
//! Source spreadsheets are inconsistent about separators and casing
//! (`Pickup_Cost`, `NotApprovedby`, `Date_Key`). Ingestion renames every
//! recognised header to the names defined here, so downstream code only
//! ever refers to these constants.

pub const VENDOR_ID: &str = "VendorId";
pub const NOT_APPROVED_BY: &str = "NotApprovedBy";
pub const DATE_KEY: &str = "DateKey";

pub const ACCEPTED: &str = "Accepted";
pub const PICKUP_COST: &str = "PickupCost";
pub const DELIVERY_COST: &str = "DeliveryCost";
pub const TOTAL_COST: &str = "TotalCost";
pub const PICKUP_DISTANCE: &str = "PickupDistance";
pub const DELIVERY_DISTANCE: &str = "DeliveryDistance";
pub const TOTAL_DISTANCE: &str = "TotalDistance";
pub const START_PROPOSE_TO_DEADLINE_MINUTES: &str = "StartProposeToDeadlineMinutes";

/// Prefix for vendor one-hot columns.
pub const VENDOR_PREFIX: &str = "Vendor";
/// Prefix for decline-reason one-hot columns.
pub const DECLINE_PREFIX: &str = "NA";

/// Numeric columns fed into the correlation, in output order.
///
/// Any of these may be absent from a given input; absent columns are skipped.
pub const NUMERIC_FEATURES: [&str; 8] = [
    ACCEPTED,
    PICKUP_COST,
    DELIVERY_COST,
    TOTAL_COST,
    PICKUP_DISTANCE,
    DELIVERY_DISTANCE,
    TOTAL_DISTANCE,
    START_PROPOSE_TO_DEADLINE_MINUTES,
];

/// Every column name the pipeline knows about.
pub fn canonical_columns() -> impl Iterator<Item = &'static str> {
    [VENDOR_ID, NOT_APPROVED_BY, DATE_KEY]
        .into_iter()
        .chain(NUMERIC_FEATURES)
}

/// Builds a one-hot column name (`Vendor_TosiFood`, `NA_DeclineByDriver`).
pub fn dummy_column_name(prefix: &str, label: &str) -> String {
    format!("{prefix}_{label}")
}
