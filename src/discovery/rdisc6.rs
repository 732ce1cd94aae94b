//! Parser for `rdisc6` router discovery output.

use crate::models::{DiscoveryResult, Ipv6};
use crate::{Error, Result};
use regex::Regex;
use std::sync::OnceLock;

static ENTRY_REGEX: OnceLock<Regex> = OnceLock::new();

/// Matches ` Prefix : <cidr>` and ` Route : <cidr>` lines.
fn get_entry_regex() -> &'static Regex {
    ENTRY_REGEX.get_or_init(|| {
        Regex::new(r"^\s?(Prefix|Route)\s*:\s*(\S*)").expect("Invalid Regex")
    })
}

/// Collect advertised prefixes and routes from `rdisc6` output.
///
/// Lines that are neither prefix nor route entries are ignored. A matching
/// line whose CIDR does not parse fails the whole discovery.
pub fn parse_rdisc6(output: &str) -> Result<DiscoveryResult> {
    let mut result = DiscoveryResult::default();

    for (n, line) in output.lines().enumerate() {
        let Some(caps) = get_entry_regex().captures(line) else {
            continue;
        };
        let net = Ipv6::new(&caps[2]).map_err(|e| {
            Error::DiscoveryFailed(format!("malformed line {}: '{}': {e}", n + 1, line.trim()))
        })?;
        log::trace!("{} {net}", &caps[1]);
        match &caps[1] {
            "Prefix" => result.prefixes.push(net),
            _ => result.routes.push(net),
        }
    }

    log::debug!(
        "rdisc6 reported {} prefixes and {} routes",
        result.prefixes.len(),
        result.routes.len()
    );
    Ok(result)
}
