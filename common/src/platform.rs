use std::fmt;

/// The two command vocabularies the toolkit knows how to drive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OsFamily {
    /// `netsh`, `ipconfig`, `net`, `arp -a`.
    Windows,
    /// `ip`, `dhclient`, `systemctl`, `arp -n`, `tcpdump`.
    Posix,
}

impl OsFamily {
    /// The family of the host this binary was built for.
    pub fn current() -> Self {
        if cfg!(windows) {
            OsFamily::Windows
        } else {
            OsFamily::Posix
        }
    }

    /// Zero-based column holding the hardware address in this family's ARP table.
    ///
    /// `arp -a` prints `ip  mac  type`, while `arp -n` prints `ip  hwtype  mac  flags  iface`.
    pub fn arp_mac_column(self) -> usize {
        match self {
            OsFamily::Windows => 1,
            OsFamily::Posix => 2,
        }
    }
}

impl fmt::Display for OsFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OsFamily::Windows => write!(f, "windows"),
            OsFamily::Posix => write!(f, "posix"),
        }
    }
}
