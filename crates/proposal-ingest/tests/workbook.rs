//! Integration tests for spreadsheet input.
//!
//! `fixtures/proposals.xlsx` has two sheets. `Proposals` uses the export's
//! drifting headers (`NotApprovedby`, `Pickup_Cost`, `Date_Key`) and stores
//! every code as a float cell. `Archive` has canonical headers and one row.

use std::path::PathBuf;

use polars::prelude::DataType;
use proposal_correlation::{
    CorrelationOutcome, FeatureCorrelationBuilder, recode_decline_reasons, recode_vendors,
};
use proposal_ingest::{InputFormat, LoadOptions, filter_window, load_proposals, read_workbook_frame};
use proposal_model::{CategoryMaps, DateWindow, DeclineReason, VendorGroup};

fn fixture() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/proposals.xlsx")
}

#[test]
fn first_sheet_is_loaded_with_canonical_headers() {
    let table = load_proposals(&fixture(), &LoadOptions::default()).expect("load workbook");

    assert_eq!(table.format, InputFormat::Workbook);
    assert_eq!(table.record_count(), 5);
    let renamed: Vec<&str> = table.renamed.iter().map(|r| r.from.as_str()).collect();
    assert_eq!(renamed, vec!["NotApprovedby", "Pickup_Cost", "Date_Key"]);
    for name in [
        "VendorId",
        "NotApprovedBy",
        "Accepted",
        "PickupCost",
        "TotalCost",
        "DateKey",
    ] {
        let column = table.data.column(name).expect(name);
        assert_eq!(column.dtype(), &DataType::Float64, "{name}");
    }
}

#[test]
fn float_codes_recode_and_filter() {
    let table = load_proposals(&fixture(), &LoadOptions::default()).expect("load workbook");
    let maps = CategoryMaps::default();

    let vendors = recode_vendors(&table.data, &maps.vendors).expect("recode vendors");
    assert_eq!(
        vendors,
        vec![
            VendorGroup::SupermarketOkala,
            VendorGroup::TosiFood,
            VendorGroup::TapsiGrocery,
            VendorGroup::Other,
            VendorGroup::SupermarketOkala,
        ]
    );
    let reasons =
        recode_decline_reasons(&table.data, &maps.decline_reasons).expect("recode reasons");
    assert_eq!(
        reasons,
        vec![
            DeclineReason::OtherOrApproved,
            DeclineReason::DeclineByDriver,
            DeclineReason::DeclineByReminder,
            DeclineReason::OtherOrApproved,
            DeclineReason::DeclineByDriver,
        ]
    );

    let before = filter_window(&table.data, DateWindow::find("before").unwrap()).unwrap();
    assert_eq!(before.height(), 3);
    let after = filter_window(&table.data, DateWindow::find("after").unwrap()).unwrap();
    assert_eq!(after.height(), 2);
}

#[test]
fn before_window_correlates_from_workbook() {
    let table = load_proposals(&fixture(), &LoadOptions::default()).expect("load workbook");
    let window = DateWindow::find("before").unwrap();
    let subset = filter_window(&table.data, window).unwrap();
    let maps = CategoryMaps::default();

    let outcome = FeatureCorrelationBuilder::new(&maps)
        .build(&subset, window.title)
        .expect("build correlation");
    let CorrelationOutcome::Computed(report) = outcome else {
        panic!("expected a matrix for {}", window.id);
    };
    assert_eq!(
        report.matrix.labels(),
        [
            "Accepted",
            "PickupCost",
            "TotalCost",
            "Vendor_Supermarket_Okala",
            "Vendor_TapsiGrocery",
            "Vendor_TosiFood",
        ]
    );
    for row in 0..report.matrix.size() {
        assert_eq!(report.matrix.get(row, row), Some(1.0));
    }
}

#[test]
fn sheet_option_selects_a_sheet() {
    let options = LoadOptions::default().with_sheet(Some("Archive".to_string()));
    let table = load_proposals(&fixture(), &options).expect("load archive sheet");

    assert_eq!(table.record_count(), 1);
    assert!(table.renamed.is_empty());
}

#[test]
fn unknown_sheet_is_an_error() {
    let error = read_workbook_frame(&fixture(), Some("Nope")).unwrap_err();
    let message = format!("{error:#}");

    assert!(message.contains("sheet 'Nope' not found"), "{message}");
    assert!(message.contains("available: Proposals, Archive"), "{message}");
    assert_eq!(message.matches("not found").count(), 1, "{message}");
}
