//! Fixed code-to-label lookup tables.
//!
//! The maps are built once (usually via [`CategoryMaps::default`]) and passed
//! by reference to whatever needs to recode a table. They are never mutated.

use std::collections::BTreeMap;

use crate::category::{DeclineReason, VendorGroup};

/// Maps known `VendorId` values to a [`VendorGroup`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VendorCategoryMap {
    entries: BTreeMap<i64, VendorGroup>,
}

impl VendorCategoryMap {
    pub fn new<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (i64, VendorGroup)>,
    {
        Self {
            entries: entries.into_iter().collect(),
        }
    }

    /// Label for a vendor id. Unmapped and missing ids fall back to `Other`.
    pub fn classify(&self, vendor_id: Option<i64>) -> VendorGroup {
        vendor_id
            .and_then(|id| self.entries.get(&id).copied())
            .unwrap_or(VendorGroup::Other)
    }

    pub fn entries(&self) -> impl Iterator<Item = (i64, VendorGroup)> + '_ {
        self.entries.iter().map(|(id, group)| (*id, *group))
    }
}

impl Default for VendorCategoryMap {
    fn default() -> Self {
        Self::new([
            (37, VendorGroup::SupermarketOkala),
            (41, VendorGroup::TosiFood),
            (726, VendorGroup::TapsiGrocery),
        ])
    }
}

/// Maps known `NotApprovedBy` codes to a [`DeclineReason`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeclineReasonMap {
    entries: BTreeMap<i64, DeclineReason>,
}

impl DeclineReasonMap {
    pub fn new<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (i64, DeclineReason)>,
    {
        Self {
            entries: entries.into_iter().collect(),
        }
    }

    /// Label for a decline code. Unmapped and missing codes fall back to
    /// `OtherOrApproved`.
    pub fn classify(&self, code: Option<i64>) -> DeclineReason {
        code.and_then(|code| self.entries.get(&code).copied())
            .unwrap_or(DeclineReason::OtherOrApproved)
    }

    pub fn entries(&self) -> impl Iterator<Item = (i64, DeclineReason)> + '_ {
        self.entries.iter().map(|(code, reason)| (*code, *reason))
    }
}

impl Default for DeclineReasonMap {
    fn default() -> Self {
        Self::new([
            (70, DeclineReason::DeclineByDriver),
            (75, DeclineReason::DeclineByReminder),
        ])
    }
}

/// Both lookup tables used to recode a proposal table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryMaps {
    pub vendors: VendorCategoryMap,
    pub decline_reasons: DeclineReasonMap,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unmapped_vendor_is_other() {
        let map = VendorCategoryMap::default();
        assert_eq!(map.classify(Some(37)), VendorGroup::SupermarketOkala);
        assert_eq!(map.classify(Some(999)), VendorGroup::Other);
        assert_eq!(map.classify(None), VendorGroup::Other);
    }

    #[test]
    fn missing_decline_code_is_other_or_approved() {
        let map = DeclineReasonMap::default();
        assert_eq!(map.classify(Some(70)), DeclineReason::DeclineByDriver);
        assert_eq!(map.classify(Some(12)), DeclineReason::OtherOrApproved);
        assert_eq!(map.classify(None), DeclineReason::OtherOrApproved);
    }
}
