use std::net::{IpAddr, Ipv4Addr};

use lazarus_common::diagnostic::{DiagnosticOutcome, OutcomeStatus};
use lazarus_common::network::interface::{Connectivity, InterfaceHealth, NetworkInterface};

use super::{Ritual, Rituals};
use crate::journal::Journal;
use crate::parser::{classify_ping, parse_link_state};

impl Rituals {
    /// Checks link state and reachability of every physical interface.
    pub(super) async fn detect_cable_poltergeist(&self, journal: &Journal<'_>) -> DiagnosticOutcome {
        journal.info("Starting cable and interface diagnostics");
        let name: &str = Ritual::CableCheck.name();

        let interfaces = self.enumerate_interfaces(journal).await;
        if interfaces.is_empty() {
            journal.error("No network interfaces found!");
            return DiagnosticOutcome::failure(name, "No network interfaces found!");
        }
        journal.info(format!("Found {} network interfaces", interfaces.len()));

        let mut connected: usize = 0;
        let mut details: Vec<String> = Vec::with_capacity(interfaces.len());
        for interface in &interfaces {
            let health: InterfaceHealth = self.check_interface(interface, journal).await;
            if health == InterfaceHealth::Connected {
                connected += 1;
            }
            journal.info(format!("Interface {} status checked", interface.name));
            details.push(format!("{}: {health}", interface.name));
        }

        let total: usize = interfaces.len();
        if connected > 0 {
            DiagnosticOutcome::new(
                name,
                OutcomeStatus::Success,
                format!("{connected} of {total} interfaces have connectivity"),
                details,
            )
        } else {
            DiagnosticOutcome::new(
                name,
                OutcomeStatus::Failure,
                format!("None of {total} interfaces has connectivity"),
                details,
            )
        }
    }

    async fn check_interface(
        &self,
        interface: &NetworkInterface,
        journal: &Journal<'_>,
    ) -> InterfaceHealth {
        let name: &str = &interface.name;

        let up: bool = match self.adapter.query_link_state(name).await {
            Ok(output) => parse_link_state(&output.stdout),
            Err(err) => {
                journal.warn(format!("Could not query link state of {name}: {err}"));
                false
            }
        };
        if !up {
            journal.warn(format!("Interface {name} is DOWN"));
            return InterfaceHealth::Down;
        }
        journal.info(format!("Interface {name} is UP"));

        let target: IpAddr = if interface.signals_loopback() {
            IpAddr::V4(Ipv4Addr::LOCALHOST)
        } else {
            self.config.ping_anchor
        };

        let reached: Connectivity = match self
            .adapter
            .ping(target, self.config.ping_count, self.config.ping_timeout)
            .await
        {
            Ok(output) => classify_ping(&output),
            Err(err) => {
                journal.warn(format!("Could not test connectivity on {name}: {err}"));
                Connectivity::Disconnected
            }
        };

        match reached {
            Connectivity::Connected => {
                journal.info(format!("Interface {name} has connectivity"));
                InterfaceHealth::Connected
            }
            Connectivity::Disconnected => {
                journal.warn(format!("Interface {name} has no connectivity"));
                InterfaceHealth::Disconnected
            }
        }
    }
}
