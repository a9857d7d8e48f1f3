pub mod menu;
pub mod ritual;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use lazarus_common::config::Config;
use lazarus_core::rituals::Ritual;

#[derive(Parser)]
#[command(name = "lazarus")]
#[command(about = "A dead network revival toolkit.")]
#[command(version)]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Start with séance mode (event logging) enabled
    #[arg(long, global = true)]
    pub log: bool,

    /// Directory the séance log is written to
    #[arg(long, global = true, value_name = "DIR", default_value = ".")]
    pub log_dir: PathBuf,

    /// Length of a packet capture in seconds
    #[arg(long, global = true, value_name = "SECS", default_value_t = 30)]
    pub duration: u64,

    /// Where to write the packet capture
    #[arg(long, global = true, value_name = "PATH")]
    pub capture_file: Option<PathBuf>,
}

#[derive(Subcommand, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Restart the DHCP client and cycle every lease
    #[command(alias = "d")]
    Dhcp,
    /// Look for hardware addresses claiming several IPs
    #[command(alias = "a")]
    Arp,
    /// Check link state and reachability of every interface
    #[command(alias = "c")]
    Cable,
    /// Record local traffic to a capture file
    #[command(alias = "p")]
    Capture,
}

impl Commands {
    pub fn ritual(self) -> Ritual {
        match self {
            Commands::Dhcp => Ritual::DhcpResurrection,
            Commands::Arp => Ritual::ArpGhostbuster,
            Commands::Cable => Ritual::CableCheck,
            Commands::Capture => Ritual::PacketCapture,
        }
    }
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn config(&self) -> Config {
        Config {
            capture_seconds: self.duration,
            capture_path: self.capture_file.clone(),
            log_dir: self.log_dir.clone(),
            ..Config::default()
        }
    }
}
