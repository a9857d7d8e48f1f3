use is_root::is_root;

/// Answers whether the process may reconfigure the network stack.
pub trait Elevation: Send + Sync {
    fn is_elevated(&self) -> bool;
}

/// Root on POSIX hosts, an administrator token on Windows.
#[derive(Debug, Default, Clone, Copy)]
pub struct HostElevation;

impl Elevation for HostElevation {
    fn is_elevated(&self) -> bool {
        is_root()
    }
}

/// A fixed answer, for running rituals against scripted hosts.
#[derive(Debug, Clone, Copy)]
pub struct AssumedElevation(pub bool);

impl Elevation for AssumedElevation {
    fn is_elevated(&self) -> bool {
        self.0
    }
}
