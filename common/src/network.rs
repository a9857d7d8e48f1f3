pub mod arp;
pub mod interface;
