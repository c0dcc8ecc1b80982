use anyhow::{Context, Result};
use comfy_table::Table;
use tracing::{info, info_span};

use proposal_cli::analysis::{analyze_windows, window_rows};
use proposal_cli::export::export_results;
use proposal_cli::heatmap::ConsoleRenderer;
use proposal_ingest::{LoadOptions, load_proposals};
use proposal_model::{ANALYSIS_WINDOWS, CategoryMaps, DateWindow};

use crate::cli::AnalyzeArgs;
use crate::summary::apply_table_style;
use crate::types::AnalysisResult;

pub fn run_windows() -> Result<()> {
    let mut table = Table::new();
    table.set_header(vec!["Window", "Title", "Start", "End", "Days"]);
    apply_table_style(&mut table);
    for row in window_rows(&ANALYSIS_WINDOWS) {
        table.add_row(row.to_vec());
    }
    println!("{table}");
    Ok(())
}

pub fn run_analyze(args: &AnalyzeArgs) -> Result<AnalysisResult> {
    let span = info_span!("analyze", input = %args.input.display());
    let _guard = span.enter();

    let windows = selected_windows(&args.windows)?;
    let options = LoadOptions::default().with_sheet(args.sheet.clone());
    let table = load_proposals(&args.input, &options)
        .with_context(|| format!("load proposals: {}", args.input.display()))?;

    let maps = CategoryMaps::default();
    let mut renderer = ConsoleRenderer::new(!args.no_heatmap);
    let results = analyze_windows(&table.data, &maps, &windows, &mut renderer)?;

    let exported = match &args.output_dir {
        Some(dir) => export_results(dir, &results)?,
        None => Vec::new(),
    };
    info!(windows = results.len(), "analysis complete");

    Ok(AnalysisResult {
        input: args.input.clone(),
        total_rows: table.record_count(),
        windows: results,
        exported,
    })
}

fn selected_windows(ids: &[String]) -> Result<Vec<DateWindow>> {
    if ids.is_empty() {
        return Ok(ANALYSIS_WINDOWS.to_vec());
    }
    ids.iter()
        .map(|id| DateWindow::find(id).copied().map_err(anyhow::Error::from))
        .collect()
}
