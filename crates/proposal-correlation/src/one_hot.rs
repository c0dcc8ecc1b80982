//! One-hot expansion of category labels.

use std::collections::{BTreeMap, BTreeSet};

use polars::prelude::{Column, IntoColumn, NamedFrom, Series};

use proposal_model::{CategoryLabel, dummy_column_name};

/// Expands `labels` into boolean indicator columns named `<prefix>_<label>`.
///
/// Only labels that occur in `labels` get a column; nothing is zero-filled.
/// Columns are ordered by name.
pub fn one_hot<L: CategoryLabel>(labels: &[L], prefix: &str) -> Vec<Column> {
    let present: BTreeMap<String, L> = labels
        .iter()
        .map(|label| (dummy_column_name(prefix, label.as_str()), *label))
        .collect();
    present
        .into_iter()
        .map(|(name, label)| {
            let values: Vec<bool> = labels.iter().map(|value| *value == label).collect();
            Series::new(name.into(), values).into_column()
        })
        .collect()
}

/// Names of the indicator columns that [`drop_baseline_columns`] removes.
pub fn baseline_column_names<L: CategoryLabel>(prefix: &str) -> BTreeSet<String> {
    L::ALL
        .iter()
        .filter(|label| label.is_baseline())
        .map(|label| dummy_column_name(prefix, label.as_str()))
        .collect()
}

/// Removes indicator columns for baseline labels, matched by column name.
pub fn drop_baseline_columns<L: CategoryLabel>(columns: Vec<Column>, prefix: &str) -> Vec<Column> {
    let baseline = baseline_column_names::<L>(prefix);
    columns
        .into_iter()
        .filter(|column| !baseline.contains(column.name().as_str()))
        .collect()
}

#[cfg(test)]
mod tests {
    use proposal_model::{DECLINE_PREFIX, DeclineReason, VENDOR_PREFIX, VendorGroup};

    use super::*;

    fn names(columns: &[Column]) -> Vec<String> {
        columns.iter().map(|c| c.name().to_string()).collect()
    }

    #[test]
    fn only_present_labels_get_columns() {
        let labels = [VendorGroup::TosiFood, VendorGroup::Other, VendorGroup::TosiFood];
        let columns = one_hot(&labels, VENDOR_PREFIX);
        assert_eq!(names(&columns), vec!["Vendor_Other", "Vendor_TosiFood"]);
        let tosi = columns[1].bool().unwrap();
        assert_eq!(tosi.get(0), Some(true));
        assert_eq!(tosi.get(1), Some(false));
        assert_eq!(tosi.get(2), Some(true));
    }

    #[test]
    fn empty_labels_produce_no_columns() {
        let columns = one_hot::<VendorGroup>(&[], VENDOR_PREFIX);
        assert!(columns.is_empty());
    }

    #[test]
    fn every_decline_reason_is_baseline() {
        let labels = DeclineReason::ALL.to_vec();
        let columns = one_hot(&labels, DECLINE_PREFIX);
        assert_eq!(columns.len(), 3);
        let kept = drop_baseline_columns::<DeclineReason>(columns, DECLINE_PREFIX);
        assert!(kept.is_empty());
    }

    #[test]
    fn vendor_columns_are_not_baseline() {
        assert!(baseline_column_names::<VendorGroup>(VENDOR_PREFIX).is_empty());
        let expected: BTreeSet<String> = [
            "NA_DeclineByDriver",
            "NA_DeclineByReminder",
            "NA_OtherOrApproved",
        ]
        .into_iter()
        .map(String::from)
        .collect();
        assert_eq!(
            baseline_column_names::<DeclineReason>(DECLINE_PREFIX),
            expected
        );
    }
}
