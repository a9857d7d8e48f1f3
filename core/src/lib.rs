pub mod capture;
pub mod journal;
pub mod parser;
pub mod platform;
pub mod rituals;
pub mod runner;
pub mod system;

#[cfg(any(test, feature = "testing"))]
pub mod testing;
