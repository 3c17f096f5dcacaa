//! Configuration validation.

use crate::cli::validators::{parse_label, parse_signal_strength};
use crate::config::Config;
use crate::error::{Error, Result};

/// Validate the entire configuration.
pub fn validate_config(config: &Config) -> Result<()> {
    validate_tools(config)?;
    validate_defaults(config)?;
    Ok(())
}

/// Validate external tool commands.
fn validate_tools(config: &Config) -> Result<()> {
    let tools = &config.tools;

    if tools.analysis.first().is_none_or(|p| p.trim().is_empty()) {
        return Err(Error::ConfigValidation {
            message: "tools.analysis must name a program".to_string(),
        });
    }

    if tools.plot.first().is_none_or(|p| p.trim().is_empty()) {
        return Err(Error::ConfigValidation {
            message: "tools.plot must name a program".to_string(),
        });
    }

    if let Some(dir) = &tools.working_dir
        && !dir.is_dir()
    {
        return Err(Error::ConfigValidation {
            message: format!("tools.working_dir is not a directory: {}", dir.display()),
        });
    }

    Ok(())
}

/// Validate default run parameters.
fn validate_defaults(config: &Config) -> Result<()> {
    let defaults = &config.defaults;

    for (name, value) in [
        ("hists_date", &defaults.hists_date),
        ("sel", &defaults.sel),
        ("m_dark", &defaults.m_dark),
        ("rinv", &defaults.rinv),
    ] {
        parse_label(value).map_err(|reason| Error::ConfigValidation {
            message: format!("defaults.{name}: {reason}"),
        })?;
    }

    parse_signal_strength(&defaults.siginj).map_err(|reason| Error::ConfigValidation {
        message: format!("defaults.siginj: {reason}"),
    })?;

    if defaults.m_med_values.is_empty() {
        return Err(Error::ConfigValidation {
            message: "defaults.m_med_values must list at least one mass".to_string(),
        });
    }

    Ok(())
}
