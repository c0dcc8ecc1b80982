use std::path::PathBuf;

use proposal_cli::analysis::WindowResult;

#[derive(Debug)]
pub struct AnalysisResult {
    pub input: PathBuf,
    pub total_rows: usize,
    pub windows: Vec<WindowResult>,
    pub exported: Vec<PathBuf>,
}
