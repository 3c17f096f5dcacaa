//! Step sequencing.

use super::discover::expand;
use super::layout::{Layout, PathTemplate};
use super::params::RunConfig;
use super::runner::CommandLine;
use crate::config::ToolsConfig;
use crate::constants::{fit, subcommands};
use std::fmt;

/// External program family an invocation goes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tool {
    /// Analysis CLI: datacards, toys, scans.
    Analysis,
    /// Plotting CLI.
    Plot,
}

/// One argument of an invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Arg {
    /// Passed as is.
    Literal(String),
    /// A path; patterns expand to zero or more matches at run time.
    Path(PathTemplate),
}

impl Arg {
    fn literal(s: impl Into<String>) -> Self {
        Self::Literal(s.into())
    }
}

/// A tool subcommand with its arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    /// Program family.
    pub tool: Tool,
    /// Subcommand name.
    pub subcommand: &'static str,
    /// Arguments after the subcommand.
    pub args: Vec<Arg>,
}

impl Invocation {
    /// Resolve into a concrete command line, expanding path patterns
    /// against the tools' working directory.
    pub fn resolve(&self, tools: &ToolsConfig) -> CommandLine {
        let prefix = match self.tool {
            Tool::Analysis => &tools.analysis,
            Tool::Plot => &tools.plot,
        };
        let base = tools.working_dir.as_deref();

        let mut args: Vec<String> = prefix.iter().skip(1).cloned().collect();
        args.push(self.subcommand.to_string());
        for arg in &self.args {
            match arg {
                Arg::Literal(s) => args.push(s.clone()),
                Arg::Path(template) => args.extend(expand(template, base)),
            }
        }

        CommandLine {
            program: prefix.first().cloned().unwrap_or_default(),
            args,
        }
    }

    /// Render without touching the filesystem, patterns left unexpanded.
    pub fn render(&self) -> String {
        let mut parts = vec![self.subcommand.to_string()];
        parts.extend(self.args.iter().map(|arg| match arg {
            Arg::Literal(s) => s.clone(),
            Arg::Path(template) => template.to_string(),
        }));
        parts.join(" ")
    }
}

/// What a step produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepKind {
    /// Datacard for one mediator mass.
    Datacard {
        /// Mediator mass.
        mass: u32,
    },
    /// Signal-injected toy from the injected-mass datacard.
    InjectedToy,
    /// Expected-limit (Asimov) likelihood scan.
    ExpectedScan,
    /// Observed-limit scan on the injected toy.
    ObservedScan,
    /// Brazil plot over all scan results.
    Plot,
}

impl fmt::Display for StepKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Datacard { mass } => write!(f, "datacard mMed={mass}"),
            Self::InjectedToy => write!(f, "injected toy"),
            Self::ExpectedScan => write!(f, "expected scan"),
            Self::ObservedScan => write!(f, "observed scan"),
            Self::Plot => write!(f, "brazil plot"),
        }
    }
}

/// A planned pipeline step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    /// What the step produces.
    pub kind: StepKind,
    /// The command it runs.
    pub invocation: Invocation,
}

/// Build the ordered step list for a run.
///
/// `-f` drops datacard and toy generation along with the expected scan;
/// `--only_inj` drops only the expected scan. The observed scan and the
/// plot always run.
pub fn build_plan(run: &RunConfig) -> Vec<Step> {
    let layout = Layout::new(run);
    let mut steps = Vec::new();

    if !run.fits_only {
        steps.extend(
            run.m_med_values
                .iter()
                .map(|&mass| datacard_step(&layout, mass)),
        );
        steps.push(injected_toy_step(&layout, run));
        if !run.only_inj {
            steps.push(expected_scan_step(&layout));
        }
    }

    steps.push(observed_scan_step(&layout));
    steps.push(plot_step(&layout));
    steps
}

fn datacard_step(layout: &Layout<'_>, mass: u32) -> Step {
    Step {
        kind: StepKind::Datacard { mass },
        invocation: Invocation {
            tool: Tool::Analysis,
            subcommand: subcommands::GEN_DATACARDS,
            args: vec![
                Arg::literal("--bkg"),
                Arg::Path(layout.background_hists()),
                Arg::literal("--sig"),
                Arg::Path(layout.signal_hists(mass)),
            ],
        },
    }
}

fn injected_toy_step(layout: &Layout<'_>, run: &RunConfig) -> Step {
    Step {
        kind: StepKind::InjectedToy,
        invocation: Invocation {
            tool: Tool::Analysis,
            subcommand: subcommands::GEN_TOYS,
            args: vec![
                Arg::Path(layout.datacard(run.m_inj)),
                Arg::literal("-t"),
                Arg::literal(fit::ASIMOV_TOYS),
                Arg::literal("--expectSignal"),
                Arg::literal(run.siginj.clone()),
                Arg::literal("-s"),
                Arg::literal(fit::SEED.to_string()),
            ],
        },
    }
}

fn scan_args(layout: &Layout<'_>) -> Vec<Arg> {
    vec![
        Arg::Path(layout.datacard_pattern()),
        Arg::literal("--range"),
        Arg::literal(fit::SCAN_MIN),
        Arg::literal(fit::SCAN_MAX),
        Arg::literal("--seed"),
        Arg::literal(fit::SEED.to_string()),
    ]
}

fn expected_scan_step(layout: &Layout<'_>) -> Step {
    let mut args = scan_args(layout);
    args.push(Arg::literal("--asimov"));
    Step {
        kind: StepKind::ExpectedScan,
        invocation: Invocation {
            tool: Tool::Analysis,
            subcommand: subcommands::LIKELIHOOD_SCAN,
            args,
        },
    }
}

fn observed_scan_step(layout: &Layout<'_>) -> Step {
    let mut args = scan_args(layout);
    args.push(Arg::literal("--toysFile"));
    args.push(Arg::Path(layout.injected_toy()));
    Step {
        kind: StepKind::ObservedScan,
        invocation: Invocation {
            tool: Tool::Analysis,
            subcommand: subcommands::LIKELIHOOD_SCAN,
            args,
        },
    }
}

fn plot_step(layout: &Layout<'_>) -> Step {
    Step {
        kind: StepKind::Plot,
        invocation: Invocation {
            tool: Tool::Plot,
            subcommand: subcommands::BRAZIL,
            args: vec![
                Arg::Path(layout.scan_pattern()),
                Arg::literal("-o"),
                Arg::Path(layout.plot()),
            ],
        },
    }
}
