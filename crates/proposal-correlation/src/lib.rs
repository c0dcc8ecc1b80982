//! Feature preparation and correlation for proposal subsets.
//!
//! A subset (usually one date window) goes through:
//!
//! 1. **recode**: `VendorId` and `NotApprovedBy` codes to category labels
//! 2. **one_hot**: labels to indicator columns, baseline decline columns removed
//! 3. **features**: numeric allow-list plus indicators as a [`FeatureTable`]
//! 4. **pearson**: pairwise-complete correlation into a [`CorrelationMatrix`]
//!
//! [`FeatureCorrelationBuilder`] drives the whole sequence and hands back a
//! [`CorrelationOutcome`]; anything that draws the result implements
//! [`MatrixRenderer`].

pub mod builder;
pub mod error;
pub mod features;
pub mod matrix;
pub mod one_hot;
pub mod pearson;
pub mod recode;
pub mod render;

pub use builder::{CorrelationOutcome, CorrelationReport, FeatureCorrelationBuilder, MIN_ROWS};
pub use error::{CorrelationError, Result};
pub use features::{FeatureTable, numeric_feature_columns};
pub use matrix::CorrelationMatrix;
pub use one_hot::{baseline_column_names, drop_baseline_columns, one_hot};
pub use pearson::pearson;
pub use recode::{recode_decline_reasons, recode_vendors};
pub use render::MatrixRenderer;
