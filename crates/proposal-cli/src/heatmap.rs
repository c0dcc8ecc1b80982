//! Terminal rendering of correlation reports.
//!
//! Every report is printed twice: a plain numeric dump, then a heatmap whose
//! cell backgrounds follow a fixed red–white–green scale over [-1, 1].

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::{ASCII_MARKDOWN, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use proposal_correlation::{CorrelationReport, MatrixRenderer};

/// An RGB color with components in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Rgb {
    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    fn lerp(self, other: Rgb, t: f64) -> Rgb {
        Rgb {
            r: self.r + (other.r - self.r) * t,
            g: self.g + (other.g - self.g) * t,
            b: self.b + (other.b - self.b) * t,
        }
    }

    /// 8-bit components, rounded.
    pub fn to_bytes(self) -> (u8, u8, u8) {
        let byte = |v: f64| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        (byte(self.r), byte(self.g), byte(self.b))
    }

    fn luminance(self) -> f64 {
        0.2126 * self.r + 0.7152 * self.g + 0.0722 * self.b
    }
}

/// Three-stop diverging scale over a fixed value range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DivergingScale {
    pub negative: Rgb,
    pub neutral: Rgb,
    pub positive: Rgb,
    pub min: f64,
    pub max: f64,
}

/// Dark red for strong negative, white for none, dark green for strong
/// positive correlation.
pub const RED_WHITE_GREEN: DivergingScale = DivergingScale {
    negative: Rgb::new(0.8, 0.0, 0.0),
    neutral: Rgb::new(1.0, 1.0, 1.0),
    positive: Rgb::new(0.0, 0.5, 0.0),
    min: -1.0,
    max: 1.0,
};

impl Default for DivergingScale {
    fn default() -> Self {
        RED_WHITE_GREEN
    }
}

impl DivergingScale {
    /// Color for `value`, clamped to the scale range. The neutral stop sits
    /// at the midpoint of the range.
    pub fn color_for(&self, value: f64) -> Rgb {
        let center = (self.min + self.max) / 2.0;
        let value = value.clamp(self.min, self.max);
        if value < center {
            let t = (center - value) / (center - self.min);
            self.neutral.lerp(self.negative, t)
        } else {
            let t = (value - center) / (self.max - center);
            self.neutral.lerp(self.positive, t)
        }
    }
}

/// Formats a matrix entry with `decimals` places, `NaN` when undefined.
pub fn format_entry(value: Option<f64>, decimals: usize) -> String {
    match value {
        Some(v) => format!("{v:.decimals$}"),
        None => "NaN".to_string(),
    }
}

/// Formats a matrix entry at full precision, `NaN` when undefined.
pub fn format_full(value: Option<f64>) -> String {
    match value {
        Some(v) => v.to_string(),
        None => "NaN".to_string(),
    }
}

/// Plain numeric dump of the matrix.
pub fn matrix_table(report: &CorrelationReport) -> Table {
    let mut table = Table::new();
    table
        .load_preset(ASCII_MARKDOWN)
        .set_content_arrangement(ContentArrangement::Disabled);
    let mut header = vec![Cell::new("")];
    header.extend(report.matrix.labels().iter().map(Cell::new));
    table.set_header(header);
    for (label, values) in report.matrix.rows() {
        let mut row = vec![Cell::new(label)];
        row.extend(
            values
                .iter()
                .map(|value| Cell::new(format_full(*value)).set_alignment(CellAlignment::Right)),
        );
        table.add_row(row);
    }
    table
}

/// Color-coded matrix with 2-decimal annotations.
pub fn heatmap_table(report: &CorrelationReport, scale: &DivergingScale) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Disabled);
    let mut header = vec![Cell::new("")];
    header.extend(
        report
            .matrix
            .labels()
            .iter()
            .map(|label| header_cell(label)),
    );
    table.set_header(header);
    for (label, values) in report.matrix.rows() {
        let mut row = vec![header_cell(label)];
        row.extend(values.iter().map(|value| heat_cell(*value, scale)));
        table.add_row(row);
    }
    table
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn heat_cell(value: Option<f64>, scale: &DivergingScale) -> Cell {
    let text = format_entry(value, 2);
    let Some(value) = value else {
        return Cell::new(text)
            .fg(Color::DarkGrey)
            .set_alignment(CellAlignment::Center);
    };
    let fill = scale.color_for(value);
    let (r, g, b) = fill.to_bytes();
    let fg = if fill.luminance() < 0.5 {
        Color::White
    } else {
        Color::Black
    };
    Cell::new(text)
        .bg(Color::Rgb { r, g, b })
        .fg(fg)
        .set_alignment(CellAlignment::Center)
}

/// Prints reports to stdout: the numeric dump, then the heatmap unless
/// disabled.
#[derive(Debug, Clone, Default)]
pub struct ConsoleRenderer {
    pub heatmap: bool,
    pub scale: DivergingScale,
}

impl ConsoleRenderer {
    pub fn new(heatmap: bool) -> Self {
        Self {
            heatmap,
            scale: RED_WHITE_GREEN,
        }
    }
}

impl MatrixRenderer for ConsoleRenderer {
    type Error = anyhow::Error;

    fn render(&mut self, report: &CorrelationReport) -> anyhow::Result<()> {
        println!();
        println!("Correlation Matrix — {}:", report.label);
        println!("{}", matrix_table(report));
        if self.heatmap {
            println!();
            println!("Correlation Analysis — {}", report.label);
            println!("{}", heatmap_table(report, &self.scale));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use proposal_correlation::CorrelationMatrix;

    use super::*;

    fn report() -> CorrelationReport {
        CorrelationReport {
            label: "test".to_string(),
            rows: 3,
            dropped_rows: 0,
            matrix: CorrelationMatrix::from_columns(vec![
                ("Accepted".to_string(), vec![Some(1.0), Some(0.0), Some(1.0)]),
                ("PickupCost".to_string(), vec![Some(3.0), Some(1.0), Some(2.0)]),
                ("Vendor_Other".to_string(), vec![Some(1.0), Some(1.0), Some(1.0)]),
            ])
            .unwrap(),
        }
    }

    #[test]
    fn scale_hits_the_three_stops() {
        let scale = RED_WHITE_GREEN;
        assert_eq!(scale.color_for(-1.0).to_bytes(), (204, 0, 0));
        assert_eq!(scale.color_for(0.0).to_bytes(), (255, 255, 255));
        assert_eq!(scale.color_for(1.0).to_bytes(), (0, 128, 0));
    }

    #[test]
    fn scale_interpolates_and_clamps() {
        let scale = RED_WHITE_GREEN;
        assert_eq!(scale.color_for(0.5).to_bytes(), (128, 191, 128));
        assert_eq!(scale.color_for(-0.5).to_bytes(), (230, 128, 128));
        assert_eq!(scale.color_for(3.0), scale.color_for(1.0));
        assert_eq!(scale.color_for(-3.0), scale.color_for(-1.0));
    }

    #[test]
    fn entries_use_requested_precision() {
        assert_eq!(format_entry(Some(0.123456789), 2), "0.12");
        assert_eq!(format_entry(Some(-1.0), 2), "-1.00");
        assert_eq!(format_entry(None, 2), "NaN");
    }

    #[test]
    fn plain_entries_keep_every_decimal() {
        assert_eq!(format_full(Some(0.123456789)), "0.123456789");
        assert_eq!(format_full(Some(-1.0)), "-1");
        assert_eq!(format_full(None), "NaN");
    }

    #[test]
    fn tables_include_every_feature() {
        let report = report();
        let plain = matrix_table(&report).to_string();
        assert!(plain.contains("PickupCost"));
        assert!(plain.contains("0.866025"));
        assert!(!plain.contains("0.866025 "));
        assert!(plain.contains("NaN"));

        let heat = heatmap_table(&report, &RED_WHITE_GREEN).to_string();
        assert!(heat.contains("Vendor_Other"));
        assert!(heat.contains("1.00"));
    }
}
