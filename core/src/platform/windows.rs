use std::net::IpAddr;
use std::path::Path;
use std::time::Duration;

use lazarus_common::network::interface::NetworkInterface;
use lazarus_common::platform::OsFamily;

use super::{CaptureLaunch, CommandSet, LeaseStep};
use crate::runner::CommandSpec;

/// `netsh` / `ipconfig` vocabulary.
#[derive(Debug, Default, Clone, Copy)]
pub struct WindowsCommands;

impl CommandSet for WindowsCommands {
    fn family(&self) -> OsFamily {
        OsFamily::Windows
    }

    fn list_interfaces(&self) -> CommandSpec {
        CommandSpec::new("netsh").args(["interface", "show", "interface"])
    }

    fn link_state(&self, interface: &str) -> CommandSpec {
        self.list_interfaces().arg(interface)
    }

    fn arp_table(&self) -> CommandSpec {
        CommandSpec::new("arp").arg("-a")
    }

    // ipconfig acts on every adapter at once, so the interface list is not needed.
    fn lease_cycle(&self, _interfaces: &[NetworkInterface]) -> Vec<LeaseStep> {
        vec![
            LeaseStep::run("Stop DHCP client service", CommandSpec::new("net").args(["stop", "dhcp"])),
            LeaseStep::Pause,
            LeaseStep::run("Start DHCP client service", CommandSpec::new("net").args(["start", "dhcp"])),
            LeaseStep::run("Release all leases", CommandSpec::new("ipconfig").arg("/release")),
            LeaseStep::Pause,
            LeaseStep::run("Renew all leases", CommandSpec::new("ipconfig").arg("/renew")),
        ]
    }

    fn address_state(&self) -> CommandSpec {
        CommandSpec::new("ipconfig").arg("/all")
    }

    fn start_capture(&self, path: &Path, _duration_secs: u64) -> CaptureLaunch {
        CaptureLaunch::Foreground {
            command: CommandSpec::new("netsh").args([
                "trace".to_string(),
                "start".to_string(),
                "capture=yes".to_string(),
                format!("tracefile={}", path.display()),
            ]),
            confirmation: "started",
        }
    }

    fn stop_capture(&self) -> Option<(CommandSpec, &'static str)> {
        Some((CommandSpec::new("netsh").args(["trace", "stop"]), "completed"))
    }

    fn ping(&self, target: IpAddr, count: u32, timeout: Duration) -> CommandSpec {
        CommandSpec::new("ping").args([
            "-n".to_string(),
            count.to_string(),
            "-w".to_string(),
            timeout.as_millis().to_string(),
            target.to_string(),
        ])
    }

    fn capture_file(&self) -> &'static str {
        "lan_lazarus_capture.etl"
    }
}
