use std::net::{IpAddr, Ipv4Addr};
use std::path::{Path, PathBuf};
use std::time::Duration;

use chrono::Local;

/// Tunables for a toolkit run. Built from command-line flags; never persisted.
#[derive(Debug, Clone)]
pub struct Config {
    /// Length of a packet capture.
    pub capture_seconds: u64,
    /// Overrides the family's default capture artifact path.
    pub capture_path: Option<PathBuf>,
    /// Directory the séance log is created in.
    pub log_dir: PathBuf,
    /// Pause between dependent lease steps (service restart, release/renew).
    pub lease_pause: Duration,
    /// Time given to the DHCP client to settle before re-querying addresses.
    pub settle_delay: Duration,
    /// Length of one capture progress tick.
    pub capture_tick: Duration,
    pub ping_count: u32,
    pub ping_timeout: Duration,
    /// Address probed to decide whether an up link actually reaches anything.
    pub ping_anchor: IpAddr,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            capture_seconds: 30,
            capture_path: None,
            log_dir: PathBuf::from("."),
            lease_pause: Duration::from_secs(2),
            settle_delay: Duration::from_secs(5),
            capture_tick: Duration::from_secs(1),
            ping_count: 1,
            ping_timeout: Duration::from_millis(1000),
            ping_anchor: IpAddr::V4(Ipv4Addr::new(8, 8, 8, 8)),
        }
    }
}

impl Config {
    /// Configuration with every pause collapsed to zero, for driving rituals
    /// against scripted command output.
    pub fn instant() -> Self {
        Self {
            lease_pause: Duration::ZERO,
            settle_delay: Duration::ZERO,
            capture_tick: Duration::ZERO,
            ..Self::default()
        }
    }
}

/// Mutable, session-wide state handed explicitly to every ritual invocation.
#[derive(Debug, Clone)]
pub struct Session {
    /// "Séance mode": when set, journal events are appended to `log_path`.
    pub logging: bool,
    pub log_path: PathBuf,
}

impl Session {
    pub fn new(logging: bool, log_dir: &Path) -> Self {
        Self {
            logging,
            log_path: log_dir.join(default_log_file_name()),
        }
    }

    /// Flips the logging toggle and returns the new state.
    pub fn toggle_logging(&mut self) -> bool {
        self.logging = !self.logging;
        self.logging
    }
}

pub fn default_log_file_name() -> String {
    format!("lan_lazarus_{}.log", Local::now().format("%Y%m%d_%H%M%S"))
}
