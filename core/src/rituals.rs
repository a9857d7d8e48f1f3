//! The four diagnostic rituals.
//!
//! Every ritual checks for elevated privileges first and returns
//! [`OutcomeStatus::PermissionDenied`](lazarus_common::diagnostic::OutcomeStatus)
//! without touching the host when they are missing. Past that point a ritual is
//! best-effort: a failing step is journaled and the sequence moves on, and the
//! caller always gets a [`DiagnosticOutcome`] back.

use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

use lazarus_common::config::{Config, Session};
use lazarus_common::diagnostic::DiagnosticOutcome;
use lazarus_common::error::RitualError;
use lazarus_common::network::interface::NetworkInterface;
use lazarus_common::platform::OsFamily;

use crate::capture::CaptureProgress;
use crate::journal::Journal;
use crate::parser::parse_interface_list;
use crate::platform::PlatformAdapter;
use crate::runner::SystemRunner;
use crate::system::{Elevation, HostElevation};

mod arp;
mod cable;
mod capture;
mod dhcp;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ritual {
    DhcpResurrection,
    ArpGhostbuster,
    CableCheck,
    PacketCapture,
}

impl Ritual {
    pub const ALL: [Ritual; 4] = [
        Ritual::DhcpResurrection,
        Ritual::ArpGhostbuster,
        Ritual::CableCheck,
        Ritual::PacketCapture,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Ritual::DhcpResurrection => "DHCP Resurrection",
            Ritual::ArpGhostbuster => "ARP Ghostbuster",
            Ritual::CableCheck => "Cable Poltergeist Detector",
            Ritual::PacketCapture => "Offline Packet Sniffer",
        }
    }
}

impl fmt::Display for Ritual {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Runs rituals against one host through one platform adapter.
pub struct Rituals {
    adapter: PlatformAdapter,
    elevation: Arc<dyn Elevation>,
    config: Config,
}

impl Rituals {
    pub fn new(adapter: PlatformAdapter, elevation: Arc<dyn Elevation>, config: Config) -> Self {
        Self {
            adapter,
            elevation,
            config,
        }
    }

    /// Rituals against the machine this binary runs on.
    pub fn for_host(config: Config) -> Self {
        Self::new(
            PlatformAdapter::for_host(Arc::new(SystemRunner)),
            Arc::new(HostElevation),
            config,
        )
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn family(&self) -> OsFamily {
        self.adapter.family()
    }

    pub fn is_elevated(&self) -> bool {
        self.elevation.is_elevated()
    }

    /// Where the packet capture lands: the configured override or the family default.
    pub fn capture_path(&self) -> PathBuf {
        self.config
            .capture_path
            .clone()
            .unwrap_or_else(|| self.adapter.default_capture_path())
    }

    pub async fn perform(
        &self,
        ritual: Ritual,
        session: &Session,
        progress: &dyn CaptureProgress,
    ) -> DiagnosticOutcome {
        let journal = Journal::new(ritual.name(), session);

        if let Err(err) = self.require_elevation() {
            journal.error(format!("{ritual} {err}"));
            return DiagnosticOutcome::permission_denied(ritual.name());
        }

        match ritual {
            Ritual::DhcpResurrection => self.resurrect_dhcp(&journal).await,
            Ritual::ArpGhostbuster => self.bust_arp_ghosts(&journal).await,
            Ritual::CableCheck => self.detect_cable_poltergeist(&journal).await,
            Ritual::PacketCapture => self.sniff_packets(&journal, progress).await,
        }
    }

    fn require_elevation(&self) -> Result<(), RitualError> {
        match self.is_elevated() {
            true => Ok(()),
            false => Err(RitualError::PermissionDenied),
        }
    }

    /// Lists the physical interfaces. Enumeration problems are journaled and
    /// yield an empty list.
    async fn enumerate_interfaces(&self, journal: &Journal<'_>) -> Vec<NetworkInterface> {
        match self.adapter.list_interfaces().await {
            Ok(output) => {
                if let Some(err) = output.failure() {
                    journal.warn(format!("Interface listing was incomplete: {err}"));
                }
                parse_interface_list(&output.stdout, self.adapter.family())
            }
            Err(err) => {
                journal.error(format!("Error getting network interfaces: {err}"));
                Vec::new()
            }
        }
    }
}
