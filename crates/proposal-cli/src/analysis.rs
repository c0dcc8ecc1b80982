//! Runs the correlation builder over each date window.

use anyhow::{Context, Result};
use polars::prelude::DataFrame;
use tracing::{info, info_span};

use proposal_correlation::{CorrelationOutcome, FeatureCorrelationBuilder, MatrixRenderer};
use proposal_ingest::filter_window;
use proposal_model::{ACCEPTED, CategoryMaps, DateWindow};

/// Outcome for one date window.
#[derive(Debug, Clone)]
pub struct WindowResult {
    pub window: DateWindow,
    /// Rows of the input that fell inside the window.
    pub subset_rows: usize,
    pub outcome: CorrelationOutcome,
}

impl WindowResult {
    /// The feature most strongly correlated with acceptance, if any.
    pub fn strongest_acceptance_driver(&self) -> Option<(&str, f64)> {
        let report = self.outcome.report()?;
        report.matrix.ranked_against(ACCEPTED).into_iter().next()
    }
}

/// Filters `data` to each window in turn, builds its correlation and hands
/// computed reports to `renderer`. Windows are independent; order only
/// affects presentation.
pub fn analyze_windows<R>(
    data: &DataFrame,
    maps: &CategoryMaps,
    windows: &[DateWindow],
    renderer: &mut R,
) -> Result<Vec<WindowResult>>
where
    R: MatrixRenderer<Error = anyhow::Error>,
{
    let builder = FeatureCorrelationBuilder::new(maps);
    let mut results = Vec::with_capacity(windows.len());
    for window in windows {
        let span = info_span!("window", id = window.id);
        let _guard = span.enter();

        let subset = filter_window(data, window)?;
        let outcome = builder
            .build(&subset, window.title)
            .with_context(|| format!("build correlation for window '{}'", window.id))?;
        if let Some(report) = outcome.report() {
            info!(
                rows = report.rows,
                features = report.matrix.size(),
                "window analysed"
            );
            renderer.render(report)?;
        }
        results.push(WindowResult {
            window: *window,
            subset_rows: subset.height(),
            outcome,
        });
    }
    Ok(results)
}

/// Rows for the `windows` listing: id, title, start, end, days.
pub fn window_rows(windows: &[DateWindow]) -> Vec<[String; 5]> {
    windows
        .iter()
        .map(|window| {
            [
                window.id.to_string(),
                window.title.to_string(),
                window.start.to_string(),
                window.end.to_string(),
                window
                    .days()
                    .map_or_else(|| "-".to_string(), |days| days.to_string()),
            ]
        })
        .collect()
}
