//! Pipeline planning and execution.

mod discover;
mod executor;
mod layout;
mod params;
mod plan;
mod runner;

pub use discover::{expand, wildcard_match};
pub use executor::{ExecuteOptions, PipelineReport, StepOutcome, execute};
pub use layout::{Layout, PathTemplate};
pub use params::{RunConfig, today};
pub use plan::{Arg, Invocation, Step, StepKind, Tool, build_plan};
pub use runner::{CommandLine, DryRunRunner, ProcessRunner, ToolRunner};
