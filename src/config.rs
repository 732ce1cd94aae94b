//! Runtime configuration.
//!
//! Values start from built-in defaults, are overridden by `NET_AUTOCONFIG_*`
//! environment variables (a `.env` file is loaded into the environment by
//! `main`) and finally by command line flags.

use crate::models::Ipv6;
use crate::{Error, Result};

/// Interface probed for routers and configured as uplink.
pub const DEFAULT_UPLINK_INTERFACE: &str = "wlan0";
/// Interface facing the sensor/control segment.
pub const DEFAULT_DOWNLINK_INTERFACE: &str = "usb0";
/// Private space the downlink prefix is carved from.
pub const DEFAULT_BASE_SPACE: &str = "fd00::/8";
pub const DEFAULT_DISCOVERY_COMMAND: &str = "rdisc6";

pub const ENV_UPLINK_INTERFACE: &str = "NET_AUTOCONFIG_IFACE";
pub const ENV_DOWNLINK_INTERFACE: &str = "NET_AUTOCONFIG_DOWNLINK_IFACE";
pub const ENV_BASE_SPACE: &str = "NET_AUTOCONFIG_BASE";
pub const ENV_DISCOVERY_COMMAND: &str = "NET_AUTOCONFIG_DISCOVERY_CMD";
pub const ENV_SEED: &str = "NET_AUTOCONFIG_SEED";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub uplink_interface: String,
    pub downlink_interface: String,
    pub base_space: Ipv6,
    /// Command line of the discovery tool; the interface name is appended.
    pub discovery_command: String,
    /// Fixed RNG seed for reproducible selection.
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            uplink_interface: DEFAULT_UPLINK_INTERFACE.to_string(),
            downlink_interface: DEFAULT_DOWNLINK_INTERFACE.to_string(),
            base_space: Ipv6::new(DEFAULT_BASE_SPACE)
                .unwrap_or_else(|e| panic!("Invalid default base space: {e}")),
            discovery_command: DEFAULT_DISCOVERY_COMMAND.to_string(),
            seed: None,
        }
    }
}

impl Config {
    /// Build a config from the process environment.
    pub fn from_env() -> Result<Config> {
        Config::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from defaults overridden by `lookup(variable)`.
    pub fn from_lookup<F>(lookup: F) -> Result<Config>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();
        let lookup = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(iface) = lookup(ENV_UPLINK_INTERFACE) {
            config.uplink_interface = iface;
        }
        if let Some(iface) = lookup(ENV_DOWNLINK_INTERFACE) {
            config.downlink_interface = iface;
        }
        if let Some(base) = lookup(ENV_BASE_SPACE) {
            config.base_space = parse_base_space(&base)?;
        }
        if let Some(cmd) = lookup(ENV_DISCOVERY_COMMAND) {
            config.discovery_command = cmd;
        }
        if let Some(seed) = lookup(ENV_SEED) {
            config.seed = Some(parse_seed(&seed)?);
        }

        log::debug!("config from environment: {config:?}");
        Ok(config)
    }
}

/// Parse a base space, rejecting anything that cannot hold a /63.
pub fn parse_base_space(s: &str) -> Result<Ipv6> {
    let base = Ipv6::new(s).map_err(|e| Error::Config(format!("{ENV_BASE_SPACE}: {e}")))?;
    if base.mask() > 63 {
        return Err(Error::Config(format!(
            "base space {base} is too small for two /64 networks"
        )));
    }
    Ok(base)
}

pub fn parse_seed(s: &str) -> Result<u64> {
    s.trim()
        .parse()
        .map_err(|e| Error::Config(format!("invalid seed '{s}': {e}")))
}
