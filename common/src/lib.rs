//! Shared vocabulary of the LAN Lazarus toolkit: the data model produced by the
//! diagnostic rituals, the error taxonomy, and the runtime configuration.

pub mod capture;
pub mod config;
pub mod diagnostic;
pub mod error;
pub mod network;
pub mod platform;
