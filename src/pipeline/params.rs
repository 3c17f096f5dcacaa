//! Run parameters resolved from defaults, the config file and flags.

use crate::cli::Cli;
use crate::config::DefaultsConfig;
use crate::constants::DATE_FORMAT;
use serde::Serialize;

/// Parameters for one pipeline run.
///
/// Built once at startup and never mutated; every path the pipeline touches
/// is derived from these values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[allow(clippy::struct_excessive_bools)]
pub struct RunConfig {
    /// Date stamp of the merged histogram directory.
    pub hists_date: String,
    /// Date stamp of the datacard and toy directories.
    pub dc_date: String,
    /// Date stamp of the scan directory.
    pub scan_date: String,
    /// Toys date from `-d`; recorded but not used by any step.
    pub toys_date: Option<String>,
    /// Selection label.
    pub sel: String,
    /// Injected signal strength, as typed.
    pub siginj: String,
    /// Injected mediator mass.
    pub m_inj: u32,
    /// Dark-sector mass label.
    pub m_dark: String,
    /// Invisible-fraction label.
    pub rinv: String,
    /// Mediator masses for datacard generation, in order.
    pub m_med_values: Vec<u32>,
    /// Skip datacard and toy generation.
    pub fits_only: bool,
    /// Skip the expected-limit scan.
    pub only_inj: bool,
}

impl RunConfig {
    /// Resolve parameters: flags win over config defaults.
    ///
    /// `today` stamps the datacard and scan directories.
    pub fn resolve(cli: &Cli, defaults: &DefaultsConfig, today: &str) -> Self {
        Self {
            hists_date: cli
                .hists_date
                .clone()
                .unwrap_or_else(|| defaults.hists_date.clone()),
            dc_date: today.to_string(),
            scan_date: today.to_string(),
            toys_date: cli.toys_date.clone(),
            sel: cli.sel.clone().unwrap_or_else(|| defaults.sel.clone()),
            siginj: cli.siginj.clone().unwrap_or_else(|| defaults.siginj.clone()),
            m_inj: cli.m_inj.unwrap_or(defaults.m_inj),
            m_dark: cli.m_dark.clone().unwrap_or_else(|| defaults.m_dark.clone()),
            rinv: cli.rinv.clone().unwrap_or_else(|| defaults.rinv.clone()),
            m_med_values: cli
                .m_med_values
                .clone()
                .map_or_else(|| defaults.m_med_values.clone(), |list| list.into_inner()),
            fits_only: cli.fits_only,
            only_inj: cli.only_inj,
        }
    }
}

/// Today's local date in the directory date format.
pub fn today() -> String {
    chrono::Local::now().format(DATE_FORMAT).to_string()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::cli::parse_from;

    fn resolve(args: &[&str]) -> RunConfig {
        let mut argv = vec!["svj-siginj"];
        argv.extend_from_slice(args);
        let cli = parse_from(argv).unwrap();
        RunConfig::resolve(&cli, &DefaultsConfig::default(), "20260101")
    }

    #[test]
    fn test_resolve_builtin_defaults() {
        let run = resolve(&[]);
        assert_eq!(run.hists_date, "20241115");
        assert_eq!(run.dc_date, "20260101");
        assert_eq!(run.scan_date, "20260101");
        assert_eq!(run.sel, "bdt=0.67");
        assert_eq!(run.siginj, "0.2");
        assert_eq!(run.m_inj, 350);
        assert_eq!(run.m_dark, "10");
        assert_eq!(run.rinv, "0p3");
        assert_eq!(run.m_med_values, vec![200, 250, 300, 350, 400, 450, 500, 550]);
        assert!(!run.fits_only);
        assert!(!run.only_inj);
        assert!(run.toys_date.is_none());
    }

    #[test]
    fn test_flags_override_defaults() {
        let run = resolve(&["--sel", "bdt=0.55", "--mMed_values", "300 350", "-f"]);
        assert_eq!(run.sel, "bdt=0.55");
        assert_eq!(run.m_med_values, vec![300, 350]);
        assert!(run.fits_only);
    }

    #[test]
    fn test_config_defaults_apply_without_flags() {
        let cli = parse_from(["svj-siginj", "--rinv", "0p7"]).unwrap();
        let defaults = DefaultsConfig {
            m_inj: 400,
            rinv: "0p5".to_string(),
            ..DefaultsConfig::default()
        };
        let run = RunConfig::resolve(&cli, &defaults, "20260101");
        assert_eq!(run.m_inj, 400);
        assert_eq!(run.rinv, "0p7");
    }

    #[test]
    fn test_toys_date_is_recorded() {
        let run = resolve(&["-d", "20240901"]);
        assert_eq!(run.toys_date.as_deref(), Some("20240901"));
    }

    #[test]
    fn test_today_format() {
        let date = today();
        assert_eq!(date.len(), 8);
        assert!(date.chars().all(|c| c.is_ascii_digit()));
    }
}
