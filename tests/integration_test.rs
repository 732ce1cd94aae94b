//! Integration tests for net-autoconfig
//!
//! These tests run the complete pipeline from discovery output to rendered fragments.

use net_autoconfig::discovery::{parse_rdisc6, read_discovery_snapshot};
use net_autoconfig::models::{DiscoveryResult, Ipv6};
use net_autoconfig::output::format_fragments;
use net_autoconfig::processing::exclude_all;
use net_autoconfig::{choose_prefixes, render_fragments, Config, Error};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::collections::HashSet;
use std::path::Path;

fn net(s: &str) -> Ipv6 {
    Ipv6::new(s).unwrap()
}

#[test]
fn test_full_workflow_with_rdisc6_output() {
    let output = std::fs::read_to_string("tests/test_data/rdisc6_wlan0.txt")
        .expect("Failed to read rdisc6 sample");
    let discovery = parse_rdisc6(&output).expect("Failed to parse rdisc6 output");
    assert_eq!(discovery.prefixes.len(), 2);
    assert!(discovery.has_default_route());

    let config = Config::default();
    let pair = choose_prefixes(&discovery, config.base_space, &mut ChaCha8Rng::seed_from_u64(1))
        .expect("Failed to choose prefixes");

    // the uplink already autoconfigures from the advertised prefixes
    assert_eq!(pair.uplink, None);
    assert_eq!(pair.downlink.mask(), 64);
    assert!(config.base_space.contains(&pair.downlink));
    assert!(!net("fd42:1:2:3::/64").overlaps(&pair.downlink));

    let fragments = render_fragments(&pair, &discovery, &config);
    let out = format_fragments(&fragments);
    assert!(out.contains("iface wlan0 inet6 auto"));
    assert!(out.contains(&format!("address {}", pair.downlink.first_host())));
    assert!(out.contains(&format!("prefix {}", pair.downlink)));
    assert!(out.contains("route ::/0"));
}

#[test]
fn test_unrelated_route_leaves_base_untouched() {
    let discovery = DiscoveryResult {
        prefixes: vec![],
        routes: vec![net("2001:db8::/32")],
    };
    let base = net("fd00::/8");
    assert_eq!(exclude_all(base, &discovery.routes), vec![base]);

    let pair = choose_prefixes(&discovery, base, &mut ChaCha8Rng::seed_from_u64(8)).unwrap();
    let uplink = pair.uplink.expect("uplink should be chosen without SLAAC prefixes");
    assert_eq!(uplink.mask(), 64);
    assert_eq!(pair.downlink.mask(), 64);
    assert!(base.contains(&uplink) && base.contains(&pair.downlink));
    assert!(!uplink.overlaps(&pair.downlink));
}

#[test]
fn test_claim_inside_base_is_carved_out() {
    let claim = net("fd00:1::/32");
    let base = net("fd00::/8");
    let free = exclude_all(base, &[claim]);

    assert!(free.iter().all(|n| base.contains(n) && !n.overlaps(&claim)));
    let size = |n: &Ipv6| 1u128 << (128 - u32::from(n.mask()));
    let covered: u128 = free.iter().map(size).sum::<u128>() + size(&claim);
    assert_eq!(covered, size(&base));
}

#[test]
fn test_snapshot_workflow_is_reproducible() {
    let discovery =
        read_discovery_snapshot(Path::new("tests/test_data/discovery_private_claims.json"))
            .expect("Failed to read snapshot");
    let config = Config::default();

    let first = choose_prefixes(&discovery, config.base_space, &mut ChaCha8Rng::seed_from_u64(99))
        .unwrap();
    let second = choose_prefixes(&discovery, config.base_space, &mut ChaCha8Rng::seed_from_u64(99))
        .unwrap();
    assert_eq!(first, second);
    assert_eq!(
        format_fragments(&render_fragments(&first, &discovery, &config)),
        format_fragments(&render_fragments(&second, &discovery, &config))
    );

    for claim in &discovery.routes {
        assert!(!claim.overlaps(&first.downlink));
        assert!(!claim.overlaps(&first.uplink.unwrap()));
    }
}

#[test]
fn test_seeds_spread_over_free_space() {
    let discovery = DiscoveryResult::default();
    let base = net("fd00::/8");
    let downlinks: HashSet<Ipv6> = (0..20)
        .map(|seed| {
            choose_prefixes(&discovery, base, &mut ChaCha8Rng::seed_from_u64(seed))
                .unwrap()
                .downlink
        })
        .collect();
    assert!(downlinks.len() > 1);
}

#[test]
fn test_fully_claimed_base_fails() {
    let discovery = DiscoveryResult {
        prefixes: vec![net("fd00::/9")],
        routes: vec![net("fd80::/9")],
    };
    let err = choose_prefixes(&discovery, net("fd00::/8"), &mut ChaCha8Rng::seed_from_u64(0))
        .unwrap_err();
    assert!(matches!(err, Error::Selection(_)));
    assert_eq!(err.exit_code(), 2);
}
