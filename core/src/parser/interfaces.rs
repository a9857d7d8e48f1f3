use lazarus_common::network::interface::NetworkInterface;
use lazarus_common::platform::OsFamily;
use tracing::trace;

/// Rows of `netsh interface show interface` preceding the first adapter.
const NETSH_HEADER_LINES: usize = 3;

/// Extracts the physical interfaces from a listing, in source order.
///
/// Loopback and virtual adapters (see
/// [`VIRTUAL_PREFIXES`](lazarus_common::network::interface::VIRTUAL_PREFIXES))
/// are dropped.
pub fn parse_interface_list(raw: &str, family: OsFamily) -> Vec<NetworkInterface> {
    let parsed: Vec<NetworkInterface> = match family {
        OsFamily::Windows => parse_netsh(raw),
        OsFamily::Posix => parse_ip_link(raw),
    };
    parsed
        .into_iter()
        .filter(|interface| !interface.is_virtual_or_loopback)
        .collect()
}

// Admin State    State          Type             Interface Name
// -------------------------------------------------------------------------
// Enabled        Connected      Dedicated        Ethernet 2
fn parse_netsh(raw: &str) -> Vec<NetworkInterface> {
    raw.lines()
        .skip(NETSH_HEADER_LINES)
        .filter_map(|line| {
            let columns: Vec<&str> = line.split_whitespace().collect();
            if columns.len() < 4 {
                if !line.trim().is_empty() {
                    trace!("Skipping netsh line {line:?}");
                }
                return None;
            }
            let is_up: bool = columns[0].eq_ignore_ascii_case("enabled");
            Some(NetworkInterface::new(columns[3..].join(" "), is_up))
        })
        .collect()
}

// 2: enp9s0: <BROADCAST,MULTICAST,UP,LOWER_UP> mtu 1500 qdisc fq_codel state UP
//     link/ether a8:a1:59:13:41:46 brd ff:ff:ff:ff:ff:ff
fn parse_ip_link(raw: &str) -> Vec<NetworkInterface> {
    raw.lines()
        .filter(|line| !line.starts_with(char::is_whitespace))
        .filter_map(|line| {
            let mut fields = line.splitn(3, ':');
            let _index = fields.next()?;
            let name: &str = fields.next()?.trim();
            let rest: &str = fields.next().unwrap_or_default();
            // veth pairs and VLANs print as `name@peer`.
            let name: &str = name.split('@').next().unwrap_or(name);
            if name.is_empty() {
                trace!("Skipping ip link line {line:?}");
                return None;
            }
            Some(NetworkInterface::new(name, has_up_flag(rest)))
        })
        .collect()
}

fn has_up_flag(rest: &str) -> bool {
    rest.split_once('<')
        .and_then(|(_, tail)| tail.split_once('>'))
        .map(|(flags, _)| flags.split(',').any(|flag| flag == "UP"))
        .unwrap_or(false)
}
