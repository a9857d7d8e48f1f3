//! Interpretation of raw tool output.
//!
//! Everything in here is a pure function of its input text. Lines that do not
//! have the expected shape are skipped, never reported as errors.

use lazarus_common::network::interface::Connectivity;

use crate::runner::CommandOutput;

mod arp;
mod interfaces;

pub use arp::{detect_conflicts, parse_arp_table};
pub use interfaces::parse_interface_list;

/// Splits text into maximal runs of alphanumerics and underscores.
fn tokens(raw: &str) -> impl Iterator<Item = &str> {
    raw.split(|c: char| !(c.is_alphanumeric() || c == '_'))
        .filter(|token| !token.is_empty())
}

/// Whether a link-state dump reports the interface as up.
///
/// Windows prints `Administrative state: Enabled`, iproute2 prints the `UP`
/// flag and `state UP`. Flags such as `LOWER_UP` alone do not count.
pub fn parse_link_state(raw: &str) -> bool {
    tokens(raw).any(|token| token == "UP" || token.eq_ignore_ascii_case("enabled"))
}

/// Whether an address dump shows a dynamically assigned address.
pub fn parse_lease_status(raw: &str) -> bool {
    let lower: String = raw.to_lowercase();
    lower.contains("dhcp") || lower.contains("dynamic")
}

/// Only the exit code decides; ping's chatter differs too much across systems.
pub fn classify_ping(output: &CommandOutput) -> Connectivity {
    if output.success() {
        Connectivity::Connected
    } else {
        Connectivity::Disconnected
    }
}
