//! Execution of external diagnostic tools.
//!
//! Every command goes through [`CommandSpec`], an argv-style description: the
//! program and its arguments are passed as discrete elements and no shell is ever
//! involved. A nonzero exit code is not an error here, it comes back as part of
//! [`CommandOutput`] for the caller to interpret.

use std::fmt;
use std::process::{Output, Stdio};
use std::time::Duration;

use async_trait::async_trait;
use lazarus_common::error::RitualError;
use thiserror::Error;
use tokio::process::{Child, Command};
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    pub program: String,
    pub args: Vec<String>,
    /// Upper bound on the command's run time. The process is killed when it elapses.
    pub timeout: Option<Duration>,
}

impl CommandSpec {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            timeout: None,
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

    pub fn timeout(mut self, limit: Duration) -> Self {
        self.timeout = Some(limit);
        self
    }
}

impl fmt::Display for CommandSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}

/// How a finished command ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitState {
    Code(i32),
    /// Terminated by a signal, so there is no exit code.
    Signalled,
    /// Killed by the runner after exceeding [`CommandSpec::timeout`].
    TimedOut(Duration),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutput {
    pub program: String,
    pub stdout: String,
    pub stderr: String,
    pub exit: ExitState,
}

impl CommandOutput {
    pub fn new(program: impl Into<String>, stdout: impl Into<String>, exit: ExitState) -> Self {
        Self {
            program: program.into(),
            stdout: stdout.into(),
            stderr: String::new(),
            exit,
        }
    }

    pub fn timed_out(program: impl Into<String>, after: Duration) -> Self {
        Self::new(program, "", ExitState::TimedOut(after))
    }

    fn from_output(program: &str, output: Output) -> Self {
        let exit: ExitState = match output.status.code() {
            Some(code) => ExitState::Code(code),
            None => ExitState::Signalled,
        };
        Self {
            program: program.to_string(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            exit,
        }
    }

    pub fn success(&self) -> bool {
        self.exit == ExitState::Code(0)
    }

    /// Maps an unsuccessful exit to the matching ritual error, if any.
    pub fn failure(&self) -> Option<RitualError> {
        let program: String = self.program.clone();
        match self.exit {
            ExitState::Code(0) => None,
            ExitState::Code(code) => Some(RitualError::NonZeroExit { program, code }),
            ExitState::Signalled => Some(RitualError::Signalled { program }),
            ExitState::TimedOut(after) => Some(RitualError::Timeout { program, after }),
        }
    }

    /// Case-insensitive search of stdout, for tools that confirm with a keyword.
    pub fn reports(&self, token: &str) -> bool {
        self.stdout.to_lowercase().contains(&token.to_lowercase())
    }
}

#[derive(Error, Debug)]
pub enum CommandError {
    #[error("failed to launch '{program}': {source}")]
    Launch {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("I/O error while supervising '{program}': {source}")]
    Io {
        program: String,
        #[source]
        source: std::io::Error,
    },
}

impl From<CommandError> for RitualError {
    fn from(err: CommandError) -> Self {
        match err {
            CommandError::Launch { program, source } | CommandError::Io { program, source } => {
                RitualError::CommandExecution { program, source }
            }
        }
    }
}

/// A process started in background mode, left running while the caller does
/// other work.
#[async_trait]
pub trait BackgroundProcess: Send {
    /// Non-blocking check whether the process has already finished on its own.
    fn has_exited(&mut self) -> Result<bool, CommandError>;

    /// Kills the process and reaps it.
    async fn terminate(&mut self) -> Result<(), CommandError>;
}

/// Leaf dependency of every ritual: turns a [`CommandSpec`] into a running process.
#[async_trait]
pub trait CommandRunner: Send + Sync {
    /// Runs the command to completion and captures its output.
    async fn execute(&self, spec: &CommandSpec) -> Result<CommandOutput, CommandError>;

    /// Starts the command and returns immediately with a handle to it.
    async fn spawn(&self, spec: &CommandSpec) -> Result<Box<dyn BackgroundProcess>, CommandError>;
}

/// Runs commands on the host through `tokio::process`.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRunner;

impl SystemRunner {
    fn command(spec: &CommandSpec) -> Command {
        let mut command = Command::new(&spec.program);
        command.args(&spec.args).stdin(Stdio::null()).kill_on_drop(true);
        command
    }
}

#[async_trait]
impl CommandRunner for SystemRunner {
    async fn execute(&self, spec: &CommandSpec) -> Result<CommandOutput, CommandError> {
        debug!("Executing {spec}");
        let child: Child = Self::command(spec)
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|source| CommandError::Launch {
                program: spec.program.clone(),
                source,
            })?;

        let io_error = |source: std::io::Error| CommandError::Io {
            program: spec.program.clone(),
            source,
        };

        let output: Output = match spec.timeout {
            // Dropping the pending future drops the child, and kill_on_drop reaps it.
            Some(limit) => match tokio::time::timeout(limit, child.wait_with_output()).await {
                Ok(result) => result.map_err(io_error)?,
                Err(_) => {
                    debug!("{} timed out after {limit:?}", spec.program);
                    return Ok(CommandOutput::timed_out(&spec.program, limit));
                }
            },
            None => child.wait_with_output().await.map_err(io_error)?,
        };

        Ok(CommandOutput::from_output(&spec.program, output))
    }

    async fn spawn(&self, spec: &CommandSpec) -> Result<Box<dyn BackgroundProcess>, CommandError> {
        debug!("Spawning {spec} in background");
        let child: Child = Self::command(spec)
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|source| CommandError::Launch {
                program: spec.program.clone(),
                source,
            })?;

        Ok(Box::new(SystemProcess {
            program: spec.program.clone(),
            child,
        }))
    }
}

struct SystemProcess {
    program: String,
    child: Child,
}

#[async_trait]
impl BackgroundProcess for SystemProcess {
    fn has_exited(&mut self) -> Result<bool, CommandError> {
        self.child
            .try_wait()
            .map(|status| status.is_some())
            .map_err(|source| CommandError::Io {
                program: self.program.clone(),
                source,
            })
    }

    async fn terminate(&mut self) -> Result<(), CommandError> {
        debug!("Terminating background {}", self.program);
        self.child.kill().await.map_err(|source| CommandError::Io {
            program: self.program.clone(),
            source,
        })
    }
}
