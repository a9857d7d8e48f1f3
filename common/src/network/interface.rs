use std::fmt;

/// Name prefixes (compared case-insensitively) of non-physical interfaces.
///
/// Covers the Linux loopback and veth pairs as well as the Windows
/// "Loopback Pseudo-Interface" and Hyper-V "vEthernet" adapters.
pub const VIRTUAL_PREFIXES: &[&str] = &["lo", "veth", "loopback", "vethernet"];

/// A network interface as reported by the platform's listing tool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetworkInterface {
    pub name: String,
    pub is_virtual_or_loopback: bool,
    pub is_up: bool,
}

impl NetworkInterface {
    pub fn new(name: impl Into<String>, is_up: bool) -> Self {
        let name: String = name.into();
        Self {
            is_virtual_or_loopback: is_virtual_name(&name),
            name,
            is_up,
        }
    }

    /// Whether the name hints at a loopback device, in which case pinging the
    /// public anchor would say nothing about the cable.
    ///
    /// Only a leading `lo` counts, so names that merely contain it, like
    /// `wlo1`, still ping the public anchor.
    pub fn signals_loopback(&self) -> bool {
        let lower: String = self.name.to_lowercase();
        lower.starts_with("lo") || lower.contains("loopback")
    }
}

pub fn is_virtual_name(name: &str) -> bool {
    let lower: String = name.to_lowercase();
    VIRTUAL_PREFIXES.iter().any(|prefix| lower.starts_with(prefix))
}

/// Per-interface verdict of the cable check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InterfaceHealth {
    /// Link is up and the probe target answered.
    Connected,
    /// Link is up but the probe target stayed silent.
    Disconnected,
    /// Link is down.
    Down,
}

impl fmt::Display for InterfaceHealth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InterfaceHealth::Connected => write!(f, "up, has connectivity"),
            InterfaceHealth::Disconnected => write!(f, "up, no connectivity"),
            InterfaceHealth::Down => write!(f, "down"),
        }
    }
}

/// Verdict of a single ping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Connectivity {
    Connected,
    Disconnected,
}
