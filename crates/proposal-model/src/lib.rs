pub mod category;
pub mod columns;
pub mod error;
pub mod maps;
pub mod window;

pub use category::{CategoryLabel, DeclineReason, VendorGroup};
pub use columns::{
    ACCEPTED, DATE_KEY, DECLINE_PREFIX, NOT_APPROVED_BY, NUMERIC_FEATURES, TOTAL_DISTANCE,
    VENDOR_ID, VENDOR_PREFIX, canonical_columns, dummy_column_name,
};
pub use error::{ModelError, Result};
pub use maps::{CategoryMaps, DeclineReasonMap, VendorCategoryMap};
pub use window::{ANALYSIS_WINDOWS, DateKey, DateWindow};
