use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use proposal_cli::analysis::WindowResult;
use proposal_cli::heatmap::format_entry;
use proposal_correlation::CorrelationOutcome;

use crate::types::AnalysisResult;

pub fn print_summary(result: &AnalysisResult) {
    println!();
    println!("Input: {}", result.input.display());
    println!("Rows: {}", result.total_rows);
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Window"),
        header_cell("Range"),
        header_cell("Rows"),
        header_cell("Features"),
        header_cell("Status"),
        header_cell("Strongest driver of acceptance"),
    ]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Right);
    align_column(&mut table, 4, CellAlignment::Center);
    for window in &result.windows {
        table.add_row(vec![
            Cell::new(window.window.title)
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            Cell::new(format!("{} – {}", window.window.start, window.window.end)),
            Cell::new(window.subset_rows),
            features_cell(window),
            status_cell(&window.outcome),
            driver_cell(window),
        ]);
    }
    println!("{table}");
    if !result.exported.is_empty() {
        println!("Exported:");
        for path in &result.exported {
            println!("- {}", path.display());
        }
    }
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::DynamicFullWidth)
        .set_width(140);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn features_cell(window: &WindowResult) -> Cell {
    match window.outcome.report() {
        Some(report) => Cell::new(report.matrix.size()),
        None => dim_cell("-"),
    }
}

fn status_cell(outcome: &CorrelationOutcome) -> Cell {
    match outcome {
        CorrelationOutcome::Computed(_) => Cell::new("✓")
            .fg(Color::Green)
            .add_attribute(Attribute::Bold),
        CorrelationOutcome::InsufficientRows { rows, .. } => {
            Cell::new(format!("skipped ({rows} rows)")).fg(Color::Yellow)
        }
    }
}

fn driver_cell(window: &WindowResult) -> Cell {
    match window.strongest_acceptance_driver() {
        Some((feature, r)) => {
            let color = if r >= 0.0 { Color::Green } else { Color::Red };
            Cell::new(format!("{feature} ({})", format_entry(Some(r), 2))).fg(color)
        }
        None => dim_cell("-"),
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value.to_string()).fg(Color::DarkGrey)
}
