//! JSON run summary.
//!
//! Written after the last step so batch jobs can tell which tool failed
//! without scraping logs.

use crate::error::{Error, Result};
use crate::pipeline::{PipelineReport, RunConfig, StepOutcome};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::path::Path;

/// Current version of the summary layout.
pub const SUMMARY_VERSION: &str = "1.0";

/// Summary of one pipeline run.
#[derive(Debug, Serialize)]
pub struct RunSummary<'a> {
    /// Summary layout version.
    pub summary_version: &'static str,
    /// When the summary was written.
    pub timestamp: DateTime<Utc>,
    /// Whether commands were only printed.
    pub dry_run: bool,
    /// Exit code of the last command executed.
    pub exit_code: i32,
    /// Resolved run parameters.
    pub parameters: &'a RunConfig,
    /// Executed steps.
    pub steps: &'a [StepOutcome],
    /// Steps not run after a fail-fast stop.
    pub skipped: &'a [String],
}

impl<'a> RunSummary<'a> {
    /// Build a summary stamped with the current time.
    pub fn new(parameters: &'a RunConfig, report: &'a PipelineReport, dry_run: bool) -> Self {
        Self {
            summary_version: SUMMARY_VERSION,
            timestamp: Utc::now(),
            dry_run,
            exit_code: report.exit_code,
            parameters,
            steps: &report.outcomes,
            skipped: &report.skipped,
        }
    }
}

/// Write a summary as pretty-printed JSON.
pub fn write_summary(path: &Path, summary: &RunSummary<'_>) -> Result<()> {
    let json = serde_json::to_string_pretty(summary)
        .map_err(|e| Error::SummarySerialize { source: e })?;

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent).map_err(|e| Error::SummaryWrite {
            path: path.to_path_buf(),
            source: e,
        })?;
    }

    std::fs::write(path, json).map_err(|e| Error::SummaryWrite {
        path: path.to_path_buf(),
        source: e,
    })
}
