//! Prefix selection for a router node bridging an existing IPv6 network and a
//! private sensor/control segment.
//!
//! The library is organized into the following modules:
//! - [`models`] - Domain models (Ipv6, DiscoveryResult, PrefixPair, ConfigFragment)
//! - [`processing`] - Free-space calculation and prefix selection
//! - [`output`] - Interface and router advertisement fragments
//! - [`discovery`] - Router discovery via rdisc6 or saved snapshots
//! - [`config`] - Runtime configuration

pub mod config;
pub mod discovery;
mod error;
pub mod models;
pub mod output;
pub mod processing;

pub use config::Config;
pub use error::{Error, Result};

use itertools::Itertools;
use log::LevelFilter;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Config as LogConfig, Root};
use log4rs::encode::pattern::PatternEncoder;
use models::{DiscoveryResult, Fragments, Ipv6, PrefixPair};
use output::{interface_fragment, router_advertisement_fragment};
use processing::{exclude_all, select_networks, ChoiceSource};

/// Default logging configuration file.
pub const LOG_CONFIG_FILE: &str = "log4rs.yml";

/// Initialize logging from [`LOG_CONFIG_FILE`], or log to stderr at `level`.
pub fn init_logging(level: LevelFilter) {
    match log4rs::init_file(LOG_CONFIG_FILE, Default::default()) {
        Ok(()) => log::debug!("Logging configured from {LOG_CONFIG_FILE}"),
        Err(file_err) => {
            let stderr = ConsoleAppender::builder()
                .target(Target::Stderr)
                .encoder(Box::new(PatternEncoder::new("{d(%H:%M:%S)} {h({l})} {m}{n}")))
                .build();
            let config = LogConfig::builder()
                .appender(Appender::builder().build("stderr", Box::new(stderr)))
                .build(Root::builder().appender("stderr").build(level));
            match config.map(log4rs::init_config) {
                Ok(Ok(_handle)) => log::debug!("{LOG_CONFIG_FILE} not used: {file_err}"),
                Ok(Err(e)) => eprintln!("Error initializing logging: {e}"),
                Err(e) => eprintln!("Error building logging config: {e}"),
            }
        }
    }
}

/// Networks that already claim address space on the uplink.
///
/// Prefixes come first, then routes, without duplicates. The default route
/// is skipped since it claims nothing of the private space.
pub fn claimed_networks(discovery: &DiscoveryResult) -> Vec<Ipv6> {
    discovery
        .prefixes
        .iter()
        .chain(discovery.routes.iter())
        .filter(|net| !net.is_default())
        .copied()
        .unique()
        .collect()
}

/// Select the uplink/downlink pair for a discovery result.
pub fn choose_prefixes<C: ChoiceSource + ?Sized>(
    discovery: &DiscoveryResult,
    base: Ipv6,
    rng: &mut C,
) -> Result<PrefixPair> {
    let claimed = claimed_networks(discovery);
    let free = exclude_all(base, &claimed);
    log::info!(
        "{} claimed networks leave {} free blocks in {base}",
        claimed.len(),
        free.len()
    );

    let pair = select_networks(&discovery.prefixes, &free, rng)?;
    log::info!("Selected {pair}");
    Ok(pair)
}

/// Routes the downlink router advertises.
///
/// A default route on the uplink is passed on as-is; otherwise the networks
/// reachable over the uplink are announced individually.
pub fn downlink_routes(pair: &PrefixPair, discovery: &DiscoveryResult) -> Option<Vec<Ipv6>> {
    if let Some(default_route) = discovery.routes.iter().copied().find(Ipv6::is_default) {
        return Some(vec![default_route]);
    }
    let routes: Vec<Ipv6> = discovery
        .prefixes
        .iter()
        .chain(discovery.routes.iter())
        .chain(pair.uplink.iter())
        .copied()
        .unique()
        .collect();
    if routes.is_empty() {
        None
    } else {
        Some(routes)
    }
}

/// Render every configuration fragment for a selected pair.
pub fn render_fragments(
    pair: &PrefixPair,
    discovery: &DiscoveryResult,
    config: &Config,
) -> Fragments {
    let routes = downlink_routes(pair, discovery);
    Fragments {
        uplink_interface: interface_fragment(pair.uplink, &config.uplink_interface),
        downlink_interface: interface_fragment(Some(pair.downlink), &config.downlink_interface),
        router_advertisement: router_advertisement_fragment(
            pair.downlink,
            &config.downlink_interface,
            routes.as_deref(),
        ),
    }
}
