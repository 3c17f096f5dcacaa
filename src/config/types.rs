//! Configuration type definitions.

use crate::constants::defaults;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Complete application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// External tool commands.
    #[serde(default)]
    pub tools: ToolsConfig,

    /// Default run parameters.
    #[serde(default)]
    pub defaults: DefaultsConfig,
}

/// External tool commands.
///
/// Each command is a program followed by leading arguments; the subcommand
/// and its arguments are appended at invocation time.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolsConfig {
    /// Analysis CLI providing datacard, toy and scan subcommands.
    pub analysis: Vec<String>,

    /// Plotting CLI providing the brazil subcommand.
    pub plot: Vec<String>,

    /// Directory the tools run in (default: current directory).
    pub working_dir: Option<PathBuf>,
}

impl Default for ToolsConfig {
    fn default() -> Self {
        Self {
            analysis: defaults::ANALYSIS_COMMAND
                .iter()
                .map(ToString::to_string)
                .collect(),
            plot: defaults::PLOT_COMMAND
                .iter()
                .map(ToString::to_string)
                .collect(),
            working_dir: None,
        }
    }
}

/// Default run parameters, overridden by command-line flags.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DefaultsConfig {
    /// Date stamp of the merged histogram directory.
    pub hists_date: String,

    /// Selection label.
    pub sel: String,

    /// Injected signal strength, forwarded verbatim.
    pub siginj: String,

    /// Injected mediator mass.
    pub m_inj: u32,

    /// Dark-sector mass label.
    pub m_dark: String,

    /// Invisible-fraction label.
    pub rinv: String,

    /// Mediator masses for datacard generation.
    pub m_med_values: Vec<u32>,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            hists_date: defaults::HISTS_DATE.to_string(),
            sel: defaults::SELECTION.to_string(),
            siginj: defaults::SIGNAL_INJECTION.to_string(),
            m_inj: defaults::INJECTED_MASS,
            m_dark: defaults::DARK_MASS.to_string(),
            rinv: defaults::RINV.to_string(),
            m_med_values: defaults::MEDIATOR_MASSES.to_vec(),
        }
    }
}
