//! Selected uplink/downlink prefix pair.

use super::Ipv6;
use serde::Serialize;
use std::fmt;

/// The outcome of prefix selection.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrefixPair {
    /// Static /64 for the uplink side, or `None` to leave it on SLAAC.
    pub uplink: Option<Ipv6>,
    /// Private /64 for the downlink segment.
    pub downlink: Ipv6,
}

impl fmt::Display for PrefixPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.uplink {
            Some(uplink) => write!(f, "uplink={uplink} downlink={}", self.downlink),
            None => write!(f, "uplink=slaac downlink={}", self.downlink),
        }
    }
}
