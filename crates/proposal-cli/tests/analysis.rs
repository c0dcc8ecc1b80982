//! End-to-end tests for window analysis and export.

use std::fs;

use proposal_cli::analysis::{WindowResult, analyze_windows, window_rows};
use proposal_cli::export::{FEATURE_COLUMN, export_results, report_frame};
use proposal_correlation::{CorrelationOutcome, CorrelationReport, MatrixRenderer};
use proposal_ingest::{LoadOptions, load_proposals};
use proposal_model::{ANALYSIS_WINDOWS, CategoryMaps};

const EXPORT: &str = "\
VendorId,NotApprovedBy,Accepted,PickupCost,DeliveryCost,DateKey
37,,1,10000,30000,20251122
41,70,0,20000,25000,20251125
726,,1,15000,31000,20251130
37,75,0,18000,22000,20251203
41,,1,9000,33000,20251210
";

#[derive(Default)]
struct RecordingRenderer {
    labels: Vec<String>,
}

impl MatrixRenderer for RecordingRenderer {
    type Error = anyhow::Error;

    fn render(&mut self, report: &CorrelationReport) -> anyhow::Result<()> {
        self.labels.push(report.label.clone());
        Ok(())
    }
}

fn analyse(dir: &tempfile::TempDir) -> (Vec<WindowResult>, RecordingRenderer) {
    let path = dir.path().join("proposals.csv");
    fs::write(&path, EXPORT).expect("write export");
    let table = load_proposals(&path, &LoadOptions::default()).expect("load export");
    let maps = CategoryMaps::default();
    let mut renderer = RecordingRenderer::default();
    let results = analyze_windows(&table.data, &maps, &ANALYSIS_WINDOWS, &mut renderer)
        .expect("analyze windows");
    (results, renderer)
}

#[test]
fn short_windows_are_skipped_not_rendered() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let (results, renderer) = analyse(&dir);

    assert_eq!(results.len(), 3);
    assert_eq!(results[0].subset_rows, 3);
    assert_eq!(results[1].subset_rows, 1);
    assert_eq!(results[2].subset_rows, 4);
    assert!(matches!(
        results[1].outcome,
        CorrelationOutcome::InsufficientRows { rows: 1, .. }
    ));
    assert_eq!(
        renderer.labels,
        vec!["Nov 22–30 (Before Changes)", "Nov 22–Dec 6 (Full Window)"]
    );
}

#[test]
fn acceptance_driver_comes_from_the_acceptance_row() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let (results, _) = analyse(&dir);

    let (feature, r) = results[0]
        .strongest_acceptance_driver()
        .expect("before window computed");
    assert_ne!(feature, "Accepted");
    assert!((-1.0..=1.0).contains(&r));
    assert!(results[1].strongest_acceptance_driver().is_none());
}

#[test]
fn export_writes_csv_and_json_for_computed_windows() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let (results, _) = analyse(&dir);
    let out = dir.path().join("out");

    let written = export_results(&out, &results).expect("export");
    let names: Vec<String> = written
        .iter()
        .filter_map(|path| path.file_name())
        .map(|name| name.to_string_lossy().into_owned())
        .collect();
    assert_eq!(names, vec!["before.csv", "before.json", "full.csv", "full.json"]);

    let report = results[0].outcome.report().expect("before computed");
    let csv = fs::read_to_string(out.join("before.csv")).expect("read csv");
    let mut lines = csv.lines();
    let header = lines.next().expect("header line");
    assert!(header.starts_with(FEATURE_COLUMN));
    assert!(header.contains("Vendor_TapsiGrocery"));
    assert_eq!(lines.count(), report.matrix.size());

    let json = fs::read_to_string(out.join("before.json")).expect("read json");
    let parsed: CorrelationReport = serde_json::from_str(&json).expect("parse report");
    assert_eq!(parsed.label, report.label);
    assert_eq!(parsed.matrix.labels(), report.matrix.labels());
}

#[test]
fn report_frame_is_square_plus_feature_column() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let (results, _) = analyse(&dir);
    let report = results[2].outcome.report().expect("full computed");

    let frame = report_frame(report).expect("frame");
    assert_eq!(frame.height(), report.matrix.size());
    assert_eq!(frame.width(), report.matrix.size() + 1);
}

#[test]
fn window_listing() {
    insta::assert_debug_snapshot!(window_rows(&ANALYSIS_WINDOWS));
}
