use std::net::IpAddr;
use std::path::Path;
use std::time::Duration;

use lazarus_common::network::interface::NetworkInterface;
use lazarus_common::platform::OsFamily;

use super::{CaptureLaunch, CommandSet, LeaseStep};
use crate::runner::CommandSpec;

/// iproute2 / dhclient / tcpdump vocabulary.
#[derive(Debug, Default, Clone, Copy)]
pub struct PosixCommands;

impl CommandSet for PosixCommands {
    fn family(&self) -> OsFamily {
        OsFamily::Posix
    }

    fn list_interfaces(&self) -> CommandSpec {
        CommandSpec::new("ip").args(["link", "show"])
    }

    fn link_state(&self, interface: &str) -> CommandSpec {
        self.list_interfaces().arg(interface)
    }

    fn arp_table(&self) -> CommandSpec {
        CommandSpec::new("arp").arg("-n")
    }

    fn lease_cycle(&self, interfaces: &[NetworkInterface]) -> Vec<LeaseStep> {
        let mut steps: Vec<LeaseStep> = vec![
            LeaseStep::run("Stop dhcpcd", CommandSpec::new("systemctl").args(["stop", "dhcpcd"])),
            LeaseStep::Pause,
            LeaseStep::run("Start dhcpcd", CommandSpec::new("systemctl").args(["start", "dhcpcd"])),
        ];

        for interface in interfaces.iter().filter(|i| !i.is_virtual_or_loopback) {
            let name: &str = &interface.name;
            steps.push(LeaseStep::run(
                format!("Release lease on {name}"),
                CommandSpec::new("dhclient").args(["-r", name]),
            ));
            steps.push(LeaseStep::Pause);
            steps.push(LeaseStep::run(
                format!("Renew lease on {name}"),
                CommandSpec::new("dhclient").arg(name),
            ));
        }
        steps
    }

    fn address_state(&self) -> CommandSpec {
        CommandSpec::new("ip").arg("addr")
    }

    // `-W 1` makes tcpdump exit after one rotation period, `-U` flushes every
    // packet so a forced kill loses nothing already captured.
    fn start_capture(&self, path: &Path, duration_secs: u64) -> CaptureLaunch {
        CaptureLaunch::Background(CommandSpec::new("tcpdump").args([
            "-U".to_string(),
            "-w".to_string(),
            path.display().to_string(),
            "-G".to_string(),
            duration_secs.to_string(),
            "-W".to_string(),
            "1".to_string(),
        ]))
    }

    fn stop_capture(&self) -> Option<(CommandSpec, &'static str)> {
        None
    }

    fn ping(&self, target: IpAddr, count: u32, timeout: Duration) -> CommandSpec {
        // iputils takes whole seconds for -W.
        let secs: u64 = timeout.as_millis().div_ceil(1000).max(1) as u64;
        CommandSpec::new("ping").args([
            "-c".to_string(),
            count.to_string(),
            "-W".to_string(),
            secs.to_string(),
            target.to_string(),
        ])
    }

    fn capture_file(&self) -> &'static str {
        "lan_lazarus_capture.pcap"
    }
}
