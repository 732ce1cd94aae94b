//! Router discovery.
//!
//! This module gathers the prefixes and routes already present on the uplink:
//! - [`cli`] - Running the discovery tool
//! - [`rdisc6`] - Parsing its output
//! - [`snapshot`] - Saved discovery results

mod cli;
mod rdisc6;
mod snapshot;

pub use cli::run;
pub use rdisc6::parse_rdisc6;
pub use snapshot::{read_discovery_snapshot, write_discovery_snapshot};

use crate::models::DiscoveryResult;
use crate::Result;

/// Probe `interface` with the discovery command and parse what it reports.
pub fn discover(command: &str, interface: &str) -> Result<DiscoveryResult> {
    log::info!("Discovering routers on {interface}");
    let output = run(&format!("{command} {interface}"))?;
    parse_rdisc6(&output)
}
