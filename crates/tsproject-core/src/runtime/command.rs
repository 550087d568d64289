//! Commands and the runner that executes them

use crate::error::CommandError;
use colored::Colorize;
use std::fmt;
use std::future::Future;
use std::path::Path;
use std::process::Stdio;
use tokio::process::Command as TokioCommand;
use tracing::debug;

/// A program invocation with its arguments, run without a shell
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessCommand {
    pub program: String,
    pub args: Vec<String>,
}

impl ProcessCommand {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }
}

impl fmt::Display for ProcessCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.program)?;
        for arg in &self.args {
            if arg.is_empty() || arg.contains(char::is_whitespace) || arg.contains('\'') {
                write!(f, " '{}'", arg.replace('\'', r"'\''"))?;
            } else {
                write!(f, " {}", arg)?;
            }
        }
        Ok(())
    }
}

/// Executes external commands on behalf of the project builder
///
/// The working directory is always passed in; runners must not rely on the
/// process-wide current directory.
pub trait CommandRunner: Send + Sync {
    fn run(
        &self,
        command: &ProcessCommand,
        cwd: &Path,
    ) -> impl Future<Output = Result<(), CommandError>> + Send;
}

/// Runs commands as child processes sharing this terminal
///
/// The child inherits stdin/stdout/stderr, so package manager output goes
/// straight to the user. Only the exit status is observed.
#[derive(Debug, Clone, Default)]
pub struct SystemRunner {
    /// Print each command before running it
    pub echo: bool,
}

impl SystemRunner {
    pub fn new() -> Self {
        Self { echo: true }
    }

    pub fn quiet() -> Self {
        Self { echo: false }
    }
}

impl CommandRunner for SystemRunner {
    async fn run(&self, command: &ProcessCommand, cwd: &Path) -> Result<(), CommandError> {
        if self.echo {
            println!("{} {}", "Running:".dimmed(), command.to_string().yellow());
        }
        debug!(%command, cwd = %cwd.display(), "spawning");

        let status = TokioCommand::new(&command.program)
            .args(&command.args)
            .current_dir(cwd)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .await
            .map_err(|source| CommandError::Spawn {
                program: command.program.clone(),
                source,
            })?;

        if status.success() {
            Ok(())
        } else {
            Err(CommandError::ExitStatus {
                command: command.to_string(),
                status,
            })
        }
    }
}
