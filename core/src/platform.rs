//! The **abstraction** over the host's network tooling.
//!
//! [`CommandSet`] resolves every logical operation to the concrete command line
//! for one OS family. [`PlatformAdapter`] pairs one such strategy, selected once
//! at startup, with a [`CommandRunner`] and hands back the raw results. Callers
//! never branch on the operating system themselves; supporting another family
//! means adding another `CommandSet`.

use std::net::IpAddr;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use lazarus_common::network::interface::NetworkInterface;
use lazarus_common::platform::OsFamily;

use crate::runner::{BackgroundProcess, CommandError, CommandOutput, CommandRunner, CommandSpec};

mod posix;
mod windows;

pub use posix::PosixCommands;
pub use windows::WindowsCommands;

/// One element of a family's DHCP lease cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LeaseStep {
    Run { label: String, command: CommandSpec },
    /// Give the previous step time to take effect.
    Pause,
}

impl LeaseStep {
    pub fn run(label: impl Into<String>, command: CommandSpec) -> Self {
        LeaseStep::Run {
            label: label.into(),
            command,
        }
    }
}

/// How a family's capture tool is brought up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CaptureLaunch {
    /// The start command returns once tracing is armed; a separate stop command
    /// ends it. The start output must contain `confirmation`.
    Foreground {
        command: CommandSpec,
        confirmation: &'static str,
    },
    /// The tool runs until it exits or is terminated.
    Background(CommandSpec),
}

/// Command vocabulary of one OS family.
pub trait CommandSet: Send + Sync {
    fn family(&self) -> OsFamily;

    fn list_interfaces(&self) -> CommandSpec;
    fn link_state(&self, interface: &str) -> CommandSpec;
    fn arp_table(&self) -> CommandSpec;

    /// The ordered lease cycle: service restart, release, renew.
    fn lease_cycle(&self, interfaces: &[NetworkInterface]) -> Vec<LeaseStep>;

    /// Dumps the current address configuration.
    fn address_state(&self) -> CommandSpec;

    fn start_capture(&self, path: &Path, duration_secs: u64) -> CaptureLaunch;

    /// Explicit stop command, if the family's capture tool needs one. The
    /// output must contain the returned confirmation token.
    fn stop_capture(&self) -> Option<(CommandSpec, &'static str)>;

    fn ping(&self, target: IpAddr, count: u32, timeout: Duration) -> CommandSpec;

    /// Relative path the capture artifact lands at unless overridden.
    fn capture_file(&self) -> &'static str;
}

/// Result of one executed lease step.
#[derive(Debug)]
pub struct StepReport {
    pub label: String,
    pub command: CommandSpec,
    pub result: Result<CommandOutput, CommandError>,
}

/// Either a finished foreground start or a live background capture.
pub enum CaptureHandle {
    Foreground(CommandOutput),
    Background(Box<dyn BackgroundProcess>),
}

/// Extra wall time granted to the runner over the tool's own probe timeout.
const PING_GRACE: Duration = Duration::from_secs(2);
const CAPTURE_CONTROL_TIMEOUT: Duration = Duration::from_secs(60);

#[derive(Clone)]
pub struct PlatformAdapter {
    commands: Arc<dyn CommandSet>,
    runner: Arc<dyn CommandRunner>,
}

impl PlatformAdapter {
    pub fn new(commands: Arc<dyn CommandSet>, runner: Arc<dyn CommandRunner>) -> Self {
        Self { commands, runner }
    }

    /// Adapter for the family this binary runs on.
    pub fn for_host(runner: Arc<dyn CommandRunner>) -> Self {
        Self::for_family(OsFamily::current(), runner)
    }

    pub fn for_family(family: OsFamily, runner: Arc<dyn CommandRunner>) -> Self {
        let commands: Arc<dyn CommandSet> = match family {
            OsFamily::Windows => Arc::new(WindowsCommands),
            OsFamily::Posix => Arc::new(PosixCommands),
        };
        Self::new(commands, runner)
    }

    pub fn family(&self) -> OsFamily {
        self.commands.family()
    }

    pub fn default_capture_path(&self) -> PathBuf {
        PathBuf::from(self.commands.capture_file())
    }

    pub async fn list_interfaces(&self) -> Result<CommandOutput, CommandError> {
        self.runner.execute(&self.commands.list_interfaces()).await
    }

    pub async fn query_link_state(&self, interface: &str) -> Result<CommandOutput, CommandError> {
        self.runner.execute(&self.commands.link_state(interface)).await
    }

    pub async fn read_arp_table(&self) -> Result<CommandOutput, CommandError> {
        self.runner.execute(&self.commands.arp_table()).await
    }

    pub async fn query_addresses(&self) -> Result<CommandOutput, CommandError> {
        self.runner.execute(&self.commands.address_state()).await
    }

    /// Runs the family's lease cycle in order, pausing `pause` where the plan
    /// asks for it. Every command is attempted once regardless of how the
    /// previous one ended.
    pub async fn cycle_dhcp_lease(
        &self,
        interfaces: &[NetworkInterface],
        pause: Duration,
    ) -> Vec<StepReport> {
        let mut reports: Vec<StepReport> = Vec::new();
        for step in self.commands.lease_cycle(interfaces) {
            match step {
                LeaseStep::Pause => tokio::time::sleep(pause).await,
                LeaseStep::Run { label, command } => {
                    let result = self.runner.execute(&command).await;
                    reports.push(StepReport {
                        label,
                        command,
                        result,
                    });
                }
            }
        }
        reports
    }

    pub async fn start_capture(
        &self,
        path: &Path,
        duration_secs: u64,
    ) -> Result<(CaptureHandle, Option<&'static str>), CommandError> {
        match self.commands.start_capture(path, duration_secs) {
            CaptureLaunch::Foreground {
                command,
                confirmation,
            } => {
                let command: CommandSpec = command.timeout(CAPTURE_CONTROL_TIMEOUT);
                let output: CommandOutput = self.runner.execute(&command).await?;
                Ok((CaptureHandle::Foreground(output), Some(confirmation)))
            }
            CaptureLaunch::Background(command) => {
                let process = self.runner.spawn(&command).await?;
                Ok((CaptureHandle::Background(process), None))
            }
        }
    }

    /// Sends the family's stop command. `None` when the family stops its
    /// capture by terminating the background process instead.
    pub async fn stop_capture(
        &self,
    ) -> Option<(Result<CommandOutput, CommandError>, &'static str)> {
        let (command, confirmation) = self.commands.stop_capture()?;
        let command: CommandSpec = command.timeout(CAPTURE_CONTROL_TIMEOUT);
        Some((self.runner.execute(&command).await, confirmation))
    }

    pub async fn ping(
        &self,
        target: IpAddr,
        count: u32,
        timeout: Duration,
    ) -> Result<CommandOutput, CommandError> {
        let wall: Duration = timeout * count.max(1) + PING_GRACE;
        let command: CommandSpec = self.commands.ping(target, count, timeout).timeout(wall);
        self.runner.execute(&command).await
    }
}
