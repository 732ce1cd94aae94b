//! Router discovery result model.

use super::Ipv6;
use serde::{Deserialize, Serialize};

/// Networks reported by router discovery on the uplink interface.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct DiscoveryResult {
    /// Prefixes advertised for stateless autoconfiguration.
    #[serde(default)]
    pub prefixes: Vec<Ipv6>,
    /// Networks already routed on the link, possibly including `::/0`.
    #[serde(default)]
    pub routes: Vec<Ipv6>,
}

impl DiscoveryResult {
    /// True if any router on the link announced a default route.
    pub fn has_default_route(&self) -> bool {
        self.routes.iter().any(Ipv6::is_default)
    }
}
