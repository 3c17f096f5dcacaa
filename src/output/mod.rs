//! User-facing output: step progress and the JSON run summary.

pub mod progress;
mod summary;

pub use summary::{RunSummary, SUMMARY_VERSION, write_summary};
