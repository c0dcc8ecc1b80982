//! Proposal data ingestion.
//!
//! Loads a proposal export (CSV or spreadsheet) into a Polars `DataFrame`,
//! renames recognised headers to their canonical names, and slices the table
//! into date windows.

pub mod csv_reader;
pub mod headers;
pub mod reader;
pub mod window;
pub mod workbook;

pub use csv_reader::read_csv_frame;
pub use headers::{HeaderRename, canonicalize_headers};
pub use reader::{InputFormat, LoadOptions, LoadedTable, load_proposals};
pub use window::{WindowSubset, filter_window, window_subsets};
pub use workbook::read_workbook_frame;
