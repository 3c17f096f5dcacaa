//! CLI argument definitions.
//!
//! Flag spellings (`--only_inj`, `--mMed_values`, ...) are kept exactly as the
//! analysis group types them in its run scripts. A flag given twice takes
//! its last value, so wrapper scripts can append overrides to a base command.

use super::validators::{MassList, parse_label, parse_mass_list, parse_signal_strength};
use crate::constants::CONFIG_ENV;
use crate::error::{Error, Result};
use clap::Parser;
use clap::error::{ContextKind, ContextValue, ErrorKind};
use std::ffi::OsString;
use std::path::PathBuf;

/// Signal-injection limit pipeline for the boosted SVJ search.
///
/// Generates datacards, a signal-injected toy, expected and observed
/// likelihood scans, and a brazil plot by driving the external analysis tools.
#[derive(Debug, Parser)]
#[command(name = "svj-siginj")]
#[command(author, version, about, long_about = None)]
#[command(args_override_self = true)]
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Toys date (accepted, not used by any step).
    #[arg(short = 'd', value_name = "DATE")]
    pub toys_date: Option<String>,

    /// Only run the fits: skip datacard and toy generation.
    #[arg(short = 'f')]
    pub fits_only: bool,

    /// Only run the injected fit: skip the expected-limit scan.
    #[arg(long = "only_inj")]
    pub only_inj: bool,

    /// Selection label used in path templates [default: bdt=0.67].
    #[arg(long = "sel", value_name = "SEL", value_parser = parse_label)]
    pub sel: Option<String>,

    /// Date stamp of the merged histogram directory [default: 20241115].
    #[arg(long = "hists_date", value_name = "DATE", value_parser = parse_label)]
    pub hists_date: Option<String>,

    /// Injected signal strength [default: 0.2].
    #[arg(long = "siginj", value_name = "MU", value_parser = parse_signal_strength)]
    pub siginj: Option<String>,

    /// Injected mediator mass [default: 350].
    #[arg(long = "mInj", value_name = "MASS")]
    pub m_inj: Option<u32>,

    /// Dark-sector mass label [default: 10].
    #[arg(long = "mDark", value_name = "MASS", value_parser = parse_label)]
    pub m_dark: Option<String>,

    /// Invisible-fraction label [default: 0p3].
    #[arg(long = "rinv", value_name = "RINV", value_parser = parse_label)]
    pub rinv: Option<String>,

    /// Space-separated mediator masses for datacard generation.
    #[arg(long = "mMed_values", value_name = "MASSES", value_parser = parse_mass_list)]
    pub m_med_values: Option<MassList>,

    /// Path to a TOML config file.
    #[arg(long, value_name = "PATH", env = CONFIG_ENV)]
    pub config: Option<PathBuf>,

    /// Print the commands instead of running them.
    #[arg(long)]
    pub dry_run: bool,

    /// Stop at the first failing step.
    #[arg(long)]
    pub fail_fast: bool,

    /// Write a JSON run summary to this path.
    #[arg(long, value_name = "PATH")]
    pub summary: Option<PathBuf>,

    /// Disable the step progress bar.
    #[arg(long)]
    pub no_progress: bool,

    /// Only log warnings and errors.
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity (-v: debug, -vv: trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Parse command-line arguments.
///
/// Unrecognised flags and stray positionals become
/// [`Error::UnknownParameter`]; every other clap error (help, version,
/// malformed values) is returned as [`Error::Usage`].
pub fn parse_from<I, T>(args: I) -> Result<Cli>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    Cli::try_parse_from(args).map_err(|err| match err.kind() {
        ErrorKind::UnknownArgument => Error::UnknownParameter {
            flag: invalid_arg(&err),
        },
        _ => Error::Usage(err),
    })
}

fn invalid_arg(err: &clap::Error) -> String {
    match err.get(ContextKind::InvalidArg) {
        Some(ContextValue::String(arg)) => arg.clone(),
        Some(other) => other.to_string(),
        None => "<unknown>".to_string(),
    }
}
