//! Application-wide constants.
//!
//! Default run parameters and the fixed arguments the external tools expect
//! live here so the command lines stay consistent between steps.

/// Application name used for config directories and user-facing messages.
pub const APP_NAME: &str = "svj-siginj";

/// Environment variable pointing at an explicit config file.
pub const CONFIG_ENV: &str = "SVJ_SIGINJ_CONFIG";

/// Date format used for every date-stamped directory.
pub const DATE_FORMAT: &str = "%Y%m%d";

/// Default run parameters.
pub mod defaults {
    /// Date stamp of the merged histogram directory.
    pub const HISTS_DATE: &str = "20241115";

    /// Selection label.
    pub const SELECTION: &str = "bdt=0.67";

    /// Injected signal strength.
    pub const SIGNAL_INJECTION: &str = "0.2";

    /// Injected mediator mass.
    pub const INJECTED_MASS: u32 = 350;

    /// Dark-sector mass label.
    pub const DARK_MASS: &str = "10";

    /// Invisible-fraction label.
    pub const RINV: &str = "0p3";

    /// Mediator masses for datacard generation.
    pub const MEDIATOR_MASSES: [u32; 8] = [200, 250, 300, 350, 400, 450, 500, 550];

    /// Analysis CLI command (datacards, toys, scans).
    pub const ANALYSIS_COMMAND: [&str; 2] = ["python3", "cli_boosted.py"];

    /// Plotting CLI command.
    pub const PLOT_COMMAND: [&str; 2] = ["python3", "quick_plot.py"];
}

/// Subcommands of the external tools.
pub mod subcommands {
    /// Datacard generation.
    pub const GEN_DATACARDS: &str = "gen_datacards";

    /// Toy generation.
    pub const GEN_TOYS: &str = "gentoys";

    /// Multiprocess likelihood scan.
    pub const LIKELIHOOD_SCAN: &str = "likelihood_scan_mp";

    /// Brazil-band limit plot.
    pub const BRAZIL: &str = "brazil";
}

/// Fixed settings forwarded to the fitting tool.
pub mod fit {
    /// Random seed for toy generation and scans.
    pub const SEED: u32 = 1001;

    /// Toy count requesting a single Asimov-style toy.
    pub const ASIMOV_TOYS: &str = "-1";

    /// Lower edge of the signal-strength scan.
    pub const SCAN_MIN: &str = "0.0";

    /// Upper edge of the signal-strength scan.
    pub const SCAN_MAX: &str = "2.0";

    /// Higgs mass label the fitting tool writes into output names.
    pub const MH_LABEL: &str = "mH120";
}

/// Exit codes mirroring a POSIX shell.
pub mod exit_codes {
    /// Generic failure.
    pub const FAILURE: i32 = 1;

    /// Command found but could not be executed.
    pub const CANNOT_EXECUTE: i32 = 126;

    /// Command not found.
    pub const NOT_FOUND: i32 = 127;

    /// Offset added to a terminating signal number.
    pub const SIGNAL_BASE: i32 = 128;

    /// Interrupted by Ctrl+C (128 + SIGINT).
    pub const INTERRUPTED: i32 = 130;
}
