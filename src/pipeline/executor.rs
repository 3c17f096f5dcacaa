//! Plan execution and outcome tracking.

use super::plan::Step;
use super::runner::ToolRunner;
use crate::config::ToolsConfig;
use crate::output::progress;
use indicatif::ProgressBar;
use serde::Serialize;
use std::time::Instant;
use tracing::{info, warn};

/// How to react to failing steps.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExecuteOptions {
    /// Stop at the first step with a non-zero exit code.
    pub fail_fast: bool,
}

/// Result of one executed step.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StepOutcome {
    /// Step label.
    pub step: String,
    /// Command line as run.
    pub command: String,
    /// Exit code.
    pub exit_code: i32,
    /// Wall time in seconds.
    pub duration_secs: f64,
}

impl StepOutcome {
    /// Whether the step's command exited with status 0.
    pub fn succeeded(&self) -> bool {
        self.exit_code == 0
    }
}

/// Outcome of a whole run.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PipelineReport {
    /// Executed steps, in order.
    pub outcomes: Vec<StepOutcome>,
    /// Labels of steps not run because an earlier one failed.
    pub skipped: Vec<String>,
    /// Exit code of the last command executed.
    pub exit_code: i32,
}

impl PipelineReport {
    /// Executed steps that failed.
    pub fn failures(&self) -> impl Iterator<Item = &StepOutcome> {
        self.outcomes.iter().filter(|o| !o.succeeded())
    }
}

/// Run every step in order.
///
/// Failures are logged and recorded; later steps still run unless
/// `fail_fast` is set. The report's exit code is that of the last command
/// executed.
pub fn execute(
    steps: &[Step],
    tools: &ToolsConfig,
    runner: &mut dyn ToolRunner,
    options: ExecuteOptions,
    progress_bar: Option<&ProgressBar>,
) -> PipelineReport {
    let mut report = PipelineReport::default();

    for (index, step) in steps.iter().enumerate() {
        let label = step.kind.to_string();
        info!("Running step {}/{}: {label}", index + 1, steps.len());
        progress::set_step(progress_bar, &label);

        let command = step.invocation.resolve(tools);
        let start = Instant::now();
        let exit_code = runner.run(&command);
        let outcome = StepOutcome {
            step: label,
            command: command.to_string(),
            exit_code,
            duration_secs: start.elapsed().as_secs_f64(),
        };
        progress::inc_progress(progress_bar);

        report.exit_code = exit_code;
        let failed = !outcome.succeeded();
        if failed {
            warn!("Step '{}' failed with exit code {exit_code}", outcome.step);
        }
        report.outcomes.push(outcome);

        if failed && options.fail_fast {
            report.skipped = steps[index + 1..]
                .iter()
                .map(|s| s.kind.to_string())
                .collect();
            warn!(
                "Stopping after failed step; {} step(s) not run",
                report.skipped.len()
            );
            break;
        }
    }

    let failed = report.failures().count();
    if failed > 0 {
        warn!(
            "{failed} of {} step(s) failed: {}",
            report.outcomes.len(),
            report
                .failures()
                .map(|o| o.step.as_str())
                .collect::<Vec<_>>()
                .join(", ")
        );
    } else {
        info!("Complete: {} step(s) succeeded", report.outcomes.len());
    }

    report
}
