//! A [`CommandRunner`] test double that answers from canned output.
//!
//! Commands are matched on their rendered command line (`program arg arg`).
//! Anything without a script succeeds with empty output. Every invocation is
//! recorded so tests can assert on ordering.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;

use crate::runner::{
    BackgroundProcess, CommandError, CommandOutput, CommandRunner, CommandSpec, ExitState,
};

#[derive(Debug, Clone)]
enum Script {
    Output(CommandOutput),
    LaunchFailure,
}

/// File a scripted command produces when it runs, standing in for a capture tool.
#[derive(Debug, Clone)]
struct Artifact {
    path: PathBuf,
    contents: Vec<u8>,
}

#[derive(Debug, Default)]
struct Ledger {
    specs: Vec<CommandSpec>,
    /// For each artifact-producing invocation, whether the file already existed.
    preexisting: Vec<bool>,
    terminations: usize,
}

#[derive(Debug, Default)]
pub struct ScriptedRunner {
    scripts: HashMap<String, Script>,
    artifacts: HashMap<String, Artifact>,
    background_exits_early: bool,
    ledger: Arc<Mutex<Ledger>>,
}

impl ScriptedRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answers `command_line` with `stdout` and exit code 0.
    pub fn respond(self, command_line: &str, stdout: &str) -> Self {
        self.exit_code(command_line, stdout, 0)
    }

    pub fn respond_with(mut self, command_line: &str, output: CommandOutput) -> Self {
        self.scripts
            .insert(command_line.to_string(), Script::Output(output));
        self
    }

    /// Answers `command_line` with `stdout` and the given exit code.
    pub fn exit_code(self, command_line: &str, stdout: &str, code: i32) -> Self {
        let program: &str = command_line.split_whitespace().next().unwrap_or_default();
        self.respond_with(command_line, CommandOutput::new(program, stdout, ExitState::Code(code)))
    }

    /// Makes `command_line` fail as if the program were not installed.
    pub fn fail_to_launch(mut self, command_line: &str) -> Self {
        self.scripts
            .insert(command_line.to_string(), Script::LaunchFailure);
        self
    }

    /// Makes `command_line` write `contents` to `path` when invoked.
    pub fn produces(mut self, command_line: &str, path: impl Into<PathBuf>, contents: &[u8]) -> Self {
        self.artifacts.insert(
            command_line.to_string(),
            Artifact {
                path: path.into(),
                contents: contents.to_vec(),
            },
        );
        self
    }

    /// Background processes report having exited from the first check on.
    pub fn background_exits_early(mut self) -> Self {
        self.background_exits_early = true;
        self
    }

    /// Rendered command lines in invocation order.
    pub fn invocations(&self) -> Vec<String> {
        self.lock().specs.iter().map(ToString::to_string).collect()
    }

    pub fn specs(&self) -> Vec<CommandSpec> {
        self.lock().specs.clone()
    }

    pub fn preexisting_artifacts(&self) -> Vec<bool> {
        self.lock().preexisting.clone()
    }

    pub fn terminations(&self) -> usize {
        self.lock().terminations
    }

    fn lock(&self) -> MutexGuard<'_, Ledger> {
        self.ledger.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn invoke(&self, spec: &CommandSpec) -> Result<CommandOutput, CommandError> {
        let line: String = spec.to_string();
        self.lock().specs.push(spec.clone());

        if let Some(Script::LaunchFailure) = self.scripts.get(&line) {
            return Err(CommandError::Launch {
                program: spec.program.clone(),
                source: std::io::Error::new(std::io::ErrorKind::NotFound, "scripted launch failure"),
            });
        }

        if let Some(artifact) = self.artifacts.get(&line) {
            let existed: bool = artifact.path.exists();
            self.lock().preexisting.push(existed);
            std::fs::write(&artifact.path, &artifact.contents).map_err(|source| CommandError::Io {
                program: spec.program.clone(),
                source,
            })?;
        }

        Ok(match self.scripts.get(&line) {
            Some(Script::Output(output)) => output.clone(),
            _ => CommandOutput::new(spec.program.as_str(), "", ExitState::Code(0)),
        })
    }
}

#[async_trait]
impl CommandRunner for ScriptedRunner {
    async fn execute(&self, spec: &CommandSpec) -> Result<CommandOutput, CommandError> {
        self.invoke(spec)
    }

    async fn spawn(&self, spec: &CommandSpec) -> Result<Box<dyn BackgroundProcess>, CommandError> {
        self.invoke(spec)?;
        Ok(Box::new(ScriptedProcess {
            exited: self.background_exits_early,
            ledger: self.ledger.clone(),
        }))
    }
}

struct ScriptedProcess {
    exited: bool,
    ledger: Arc<Mutex<Ledger>>,
}

#[async_trait]
impl BackgroundProcess for ScriptedProcess {
    fn has_exited(&mut self) -> Result<bool, CommandError> {
        Ok(self.exited)
    }

    async fn terminate(&mut self) -> Result<(), CommandError> {
        self.exited = true;
        self.ledger
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .terminations += 1;
        Ok(())
    }
}
