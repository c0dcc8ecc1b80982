//! Library side of the `proposal-lens` binary.

pub mod analysis;
pub mod export;
pub mod heatmap;
pub mod logging;
