//! Export functionality for trips and monthly summaries.
//!
//! Flat-file exports only: CSV for spreadsheets and ad hoc analysis, JSONL
//! for downstream tooling.

mod csv;
mod jsonl;

pub use csv::{export_summary_csv, export_trips_csv};
pub use jsonl::export_trips_jsonl;
