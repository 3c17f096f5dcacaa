//! Tool execution.

use crate::constants::exit_codes;
use std::fmt;
use std::io;
use std::path::PathBuf;
use std::process::{Command, ExitStatus};
use tracing::{error, info, warn};

/// A fully resolved external command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandLine {
    /// Program to execute.
    pub program: String,
    /// Arguments, in order.
    pub args: Vec<String>,
}

impl fmt::Display for CommandLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&shell_quote(&self.program))?;
        for arg in &self.args {
            write!(f, " {}", shell_quote(arg))?;
        }
        Ok(())
    }
}

/// Quote an argument for display when a shell would split or expand it.
fn shell_quote(arg: &str) -> String {
    let plain = !arg.is_empty()
        && arg
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || "-_./=:+,@%*?".contains(c));
    if plain {
        arg.to_string()
    } else {
        format!("'{}'", arg.replace('\'', r"'\''"))
    }
}

/// Runs external commands, returning their exit code.
///
/// A command that cannot be started is reported as a failed exit code, not
/// an error, so the pipeline can carry on the way a shell script would.
pub trait ToolRunner {
    /// Run one command to completion.
    fn run(&mut self, command: &CommandLine) -> i32;
}

/// Runs commands as blocking subprocesses sharing this process's stdio.
#[derive(Debug, Clone, Default)]
pub struct ProcessRunner {
    working_dir: Option<PathBuf>,
}

impl ProcessRunner {
    /// Create a runner; commands run in `working_dir` when given.
    pub fn new(working_dir: Option<PathBuf>) -> Self {
        Self { working_dir }
    }
}

impl ToolRunner for ProcessRunner {
    fn run(&mut self, command: &CommandLine) -> i32 {
        info!("Issuing command: {command}");

        let mut cmd = Command::new(&command.program);
        cmd.args(&command.args);
        if let Some(dir) = &self.working_dir {
            cmd.current_dir(dir);
        }

        match cmd.status() {
            Ok(status) => {
                let code = status_code(status);
                if code == 0 {
                    info!("Command exited with status 0");
                } else {
                    warn!("Exit status {code} for command: {command}");
                }
                code
            }
            Err(e) => {
                error!("Failed to start {}: {e}", command.program);
                spawn_error_code(&e)
            }
        }
    }
}

/// Prints commands instead of running them.
#[derive(Debug, Clone, Copy, Default)]
pub struct DryRunRunner;

impl ToolRunner for DryRunRunner {
    #[allow(clippy::print_stdout)]
    fn run(&mut self, command: &CommandLine) -> i32 {
        println!("dry run: {command}");
        0
    }
}

/// Exit code of a finished process, shell style.
fn status_code(status: ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }

    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return exit_codes::SIGNAL_BASE + signal;
        }
    }

    exit_codes::FAILURE
}

/// Exit code a shell reports when a command cannot be started.
fn spawn_error_code(err: &io::Error) -> i32 {
    if err.kind() == io::ErrorKind::NotFound {
        exit_codes::NOT_FOUND
    } else {
        exit_codes::CANNOT_EXECUTE
    }
}
