use std::fmt;
use std::net::IpAddr;

/// One active row of the host's ARP cache.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArpEntry {
    pub ip_address: IpAddr,
    pub mac_address: String,
    pub raw_line: String,
}

/// A hardware address observed against more than one IP address in a single scan.
///
/// `conflicting_ips` always holds at least two addresses: the one that triggered
/// the record first, followed by the one previously recorded for the MAC.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConflictRecord {
    pub mac_address: String,
    pub conflicting_ips: Vec<IpAddr>,
}

impl fmt::Display for ConflictRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ips: Vec<String> = self.conflicting_ips.iter().map(|ip| ip.to_string()).collect();
        write!(f, "MAC {} is used by multiple IPs: {}", self.mac_address, ips.join(", "))
    }
}
