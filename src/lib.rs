//! svj-siginj - signal-injection limit pipeline for the boosted SVJ search.
//!
//! Drives the external analysis tools through datacard generation, toy
//! generation with an injected signal, expected and observed likelihood
//! scans, and a brazil plot.

#![warn(missing_docs)]

pub mod cli;
pub mod config;
pub mod constants;
pub mod error;
pub mod output;
pub mod pipeline;

use config::{Config, load_default_config, load_explicit_config, validate_config};
use constants::exit_codes;
use output::{RunSummary, progress, write_summary};
use pipeline::{
    DryRunRunner, ExecuteOptions, PipelineReport, ProcessRunner, RunConfig, build_plan, execute,
    today,
};
use std::path::Path;
use tracing::{debug, info, warn};

pub use error::{Error, Result};

/// Main entry point for the svj-siginj CLI.
///
/// Returns the exit code the process should end with: that of the last
/// external command run.
pub fn run() -> Result<i32> {
    let cli = match cli::parse_from(std::env::args_os()) {
        Ok(cli) => cli,
        Err(Error::Usage(err)) => err.exit(),
        Err(e) => return Err(e),
    };

    init_logging(cli.verbose, cli.quiet);

    if let Err(e) = ctrlc::set_handler(|| {
        warn!("Interrupted");
        std::process::exit(exit_codes::INTERRUPTED);
    }) {
        warn!("Failed to install Ctrl+C handler: {e}");
    }

    let config = load_config(cli.config.as_deref())?;
    validate_config(&config)?;

    let run = RunConfig::resolve(&cli, &config.defaults, &today());
    if let Some(toys_date) = &run.toys_date {
        debug!("Toys date {toys_date} is accepted but not used by any step");
    }
    info!(
        "Selection {}, mInj={}, mDark={}, rinv={}, siginj={}, masses: {:?}",
        run.sel, run.m_inj, run.m_dark, run.rinv, run.siginj, run.m_med_values
    );

    let steps = build_plan(&run);
    let options = ExecuteOptions {
        fail_fast: cli.fail_fast,
    };

    let progress_enabled = !cli.quiet && !cli.no_progress && !cli.dry_run;
    let progress_bar = progress::create_step_progress(steps.len(), progress_enabled);

    let report = if cli.dry_run {
        execute(
            &steps,
            &config.tools,
            &mut DryRunRunner,
            options,
            progress_bar.as_ref(),
        )
    } else {
        let mut runner = ProcessRunner::new(config.tools.working_dir.clone());
        execute(
            &steps,
            &config.tools,
            &mut runner,
            options,
            progress_bar.as_ref(),
        )
    };

    progress::finish_progress(progress_bar, finish_message(&report));

    if let Some(path) = &cli.summary {
        write_summary(path, &RunSummary::new(&run, &report, cli.dry_run))?;
        info!("Wrote run summary: {}", path.display());
    }

    Ok(report.exit_code)
}

/// Load the explicitly named config file, or the platform default.
fn load_config(explicit: Option<&Path>) -> Result<Config> {
    match explicit {
        Some(path) => {
            info!("Loading config: {}", path.display());
            load_explicit_config(path)
        }
        None => load_default_config(),
    }
}

fn finish_message(report: &PipelineReport) -> &'static str {
    if !report.skipped.is_empty() {
        "Stopped"
    } else if report.failures().next().is_some() {
        "Completed with failures"
    } else {
        "Complete"
    }
}

fn init_logging(verbose: u8, quiet: bool) {
    use tracing_subscriber::{EnvFilter, fmt};

    let filter_str = if quiet {
        "warn"
    } else {
        match verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter_str));

    fmt().with_env_filter(filter).init();
}
