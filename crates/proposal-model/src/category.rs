//! Categorical labels derived from proposal codes.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A closed set of labels that can be expanded into one-hot columns.
pub trait CategoryLabel: Copy + Eq + fmt::Debug + 'static {
    /// Every label in the set, in declaration order.
    const ALL: &'static [Self];

    /// Label text used in the one-hot column name.
    fn as_str(&self) -> &'static str;

    /// Labels whose one-hot column is excluded from the feature table.
    ///
    /// Baseline columns correlate near-tautologically with acceptance.
    fn is_baseline(&self) -> bool {
        false
    }
}

/// Vendor grouping derived from `VendorId`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum VendorGroup {
    SupermarketOkala,
    TosiFood,
    TapsiGrocery,
    /// Fallback for unmapped or missing vendor ids.
    Other,
}

impl CategoryLabel for VendorGroup {
    const ALL: &'static [Self] = &[
        VendorGroup::SupermarketOkala,
        VendorGroup::TosiFood,
        VendorGroup::TapsiGrocery,
        VendorGroup::Other,
    ];

    fn as_str(&self) -> &'static str {
        match self {
            VendorGroup::SupermarketOkala => "Supermarket_Okala",
            VendorGroup::TosiFood => "TosiFood",
            VendorGroup::TapsiGrocery => "TapsiGrocery",
            VendorGroup::Other => "Other",
        }
    }
}

impl fmt::Display for VendorGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Reason a proposal was not approved, derived from `NotApprovedBy`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum DeclineReason {
    DeclineByDriver,
    DeclineByReminder,
    /// Fallback for unmapped codes and approved proposals (no code).
    OtherOrApproved,
}

impl CategoryLabel for DeclineReason {
    const ALL: &'static [Self] = &[
        DeclineReason::DeclineByDriver,
        DeclineReason::DeclineByReminder,
        DeclineReason::OtherOrApproved,
    ];

    fn as_str(&self) -> &'static str {
        match self {
            DeclineReason::DeclineByDriver => "DeclineByDriver",
            DeclineReason::DeclineByReminder => "DeclineByReminder",
            DeclineReason::OtherOrApproved => "OtherOrApproved",
        }
    }

    // Any decline code implies the proposal was not accepted, so every
    // reason column mirrors `Accepted`.
    fn is_baseline(&self) -> bool {
        true
    }
}

impl fmt::Display for DeclineReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
