use std::collections::HashMap;
use std::net::IpAddr;

use lazarus_common::network::arp::{ArpEntry, ConflictRecord};
use lazarus_common::platform::OsFamily;
use tracing::trace;

/// Reads the active entries of an ARP cache dump.
///
/// Only rows mentioning `dynamic` (Windows) or `ether` (Linux) are considered.
/// The IP address is the first column; the hardware address column depends on
/// the family.
pub fn parse_arp_table(raw: &str, family: OsFamily) -> Vec<ArpEntry> {
    let mac_column: usize = family.arp_mac_column();

    raw.lines()
        .filter(|line| {
            let lower: String = line.to_lowercase();
            lower.contains("dynamic") || lower.contains("ether")
        })
        .filter_map(|line| {
            let columns: Vec<&str> = line.split_whitespace().collect();
            if columns.len() < 3 {
                trace!("Skipping short ARP line {line:?}");
                return None;
            }
            let Ok(ip_address) = columns[0].parse::<IpAddr>() else {
                trace!("Skipping ARP line without leading address {line:?}");
                return None;
            };
            Some(ArpEntry {
                ip_address,
                mac_address: columns[mac_column].to_string(),
                raw_line: line.to_string(),
            })
        })
        .collect()
}

/// Flags every hardware address that shows up against a different IP than the
/// one last recorded for it.
///
/// Entries are visited in table order. A record pairs the current IP with the
/// previously recorded one, after which the current IP becomes the recorded one.
/// Two MACs claiming the same IP are not reported.
pub fn detect_conflicts(entries: &[ArpEntry]) -> Vec<ConflictRecord> {
    let mut last_seen: HashMap<&str, IpAddr> = HashMap::new();
    let mut conflicts: Vec<ConflictRecord> = Vec::new();

    for entry in entries {
        let mac: &str = entry.mac_address.as_str();
        if let Some(&previous) = last_seen.get(mac) {
            if previous != entry.ip_address {
                conflicts.push(ConflictRecord {
                    mac_address: entry.mac_address.clone(),
                    conflicting_ips: vec![entry.ip_address, previous],
                });
            }
        }
        last_seen.insert(mac, entry.ip_address);
    }

    conflicts
}
