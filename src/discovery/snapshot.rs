//! Saved discovery results.
//!
//! Lets a run use a previously captured [`DiscoveryResult`] instead of
//! probing the network, e.g. on a host without `rdisc6`.

use crate::models::DiscoveryResult;
use crate::{Error, Result};
use std::path::Path;

/// Read a discovery result saved as JSON.
///
/// # Returns
/// * `Ok(DiscoveryResult)` - the saved prefixes and routes
/// * `Err(Error::DiscoveryFailed)` - the file is missing or not valid JSON
pub fn read_discovery_snapshot(path: &Path) -> Result<DiscoveryResult> {
    let json = std::fs::read_to_string(path).map_err(|e| {
        Error::DiscoveryFailed(format!("cannot read snapshot {}: {e}", path.display()))
    })?;
    log::info!("Reading discovery snapshot: {}", path.display());

    let mut deserializer = serde_json::Deserializer::from_str(&json);
    serde_path_to_error::deserialize(&mut deserializer).map_err(|e| {
        Error::DiscoveryFailed(format!(
            "error parsing snapshot {}: path={} error={}",
            path.display(),
            e.path(),
            e.inner()
        ))
    })
}

/// Write a discovery result as JSON, for later offline runs.
pub fn write_discovery_snapshot(path: &Path, discovery: &DiscoveryResult) -> Result<()> {
    let json = serde_json::to_string_pretty(discovery)?;
    log::warn!("Writing discovery snapshot: {}", path.display());
    std::fs::write(path, json)?;
    Ok(())
}
