//! Domain models for prefix selection.
//!
//! This module contains the core data structures used throughout the application:
//! - [`Ipv6`] - IPv6 network in CIDR notation
//! - [`DiscoveryResult`] - prefixes and routes seen on the uplink
//! - [`PrefixPair`] - the selected uplink/downlink networks
//! - [`ConfigFragment`] - rendered configuration text

mod discovery;
mod fragment;
mod ipv6;
mod prefix_pair;

// Re-export public types
pub use discovery::DiscoveryResult;
pub use fragment::{ConfigFragment, FragmentKind, Fragments};
pub use ipv6::{broadcast_addr, cut_addr, get_cidr_mask, Ipv6, MAX_LENGTH};
pub use prefix_pair::PrefixPair;

/// Disjoint networks, in the order they were produced.
pub type NetworkSet = Vec<Ipv6>;
