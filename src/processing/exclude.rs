//! Free-space calculation.
//!
//! Removes networks that are already claimed on the link from a private
//! base address space, leaving a set of disjoint CIDR blocks.

use crate::models::{Ipv6, NetworkSet};

/// Remove `claimed` from `net`, returning the sibling blocks that remain.
///
/// `net` must contain `claimed`. The result is empty when both are equal.
///
/// # Examples
/// ```
/// use net_autoconfig::models::Ipv6;
/// use net_autoconfig::processing::address_exclude;
/// let net = Ipv6::new("fd00::/62").unwrap();
/// let rest = address_exclude(net, Ipv6::new("fd00::/64").unwrap());
/// assert_eq!(rest.len(), 2);
/// ```
pub fn address_exclude(net: Ipv6, claimed: Ipv6) -> Vec<Ipv6> {
    let mut rest = Vec::new();
    if !net.contains(&claimed) {
        log::warn!("address_exclude({net}, {claimed}) called without containment");
        return rest;
    }

    let mut current = net;
    while current != claimed {
        let Some([lower, upper]) = current.subnets() else {
            break;
        };
        if lower.contains(&claimed) {
            rest.push(upper);
            current = lower;
        } else {
            rest.push(lower);
            current = upper;
        }
    }
    rest
}

/// Calculate the parts of `base` not covered by any network in `claimed`.
///
/// Claimed networks are processed in order. Each working block that encloses
/// the claim is split around it, blocks inside the claim are dropped and
/// unrelated blocks are kept as they are.
pub fn exclude_all(base: Ipv6, claimed: &[Ipv6]) -> NetworkSet {
    let mut result: NetworkSet = vec![base];

    for c in claimed {
        let mut next = Vec::with_capacity(result.len() + usize::from(c.mask()));
        for net in result {
            if net.contains(c) {
                let split = address_exclude(net, *c);
                log::debug!("{net} split around {c} into {} blocks", split.len());
                next.extend(split);
            } else if c.contains(&net) {
                log::debug!("{net} fully claimed by {c}");
            } else {
                next.push(net);
            }
        }
        result = next;
    }

    log::debug!(
        "exclude_all({base}) with {} claims left {} free blocks",
        claimed.len(),
        result.len()
    );
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn net(s: &str) -> Ipv6 {
        Ipv6::new(s).unwrap()
    }

    fn address_count(nets: &[Ipv6]) -> u128 {
        // fine for blocks no larger than /8
        nets.iter().map(|n| 1u128 << (128 - u32::from(n.mask()))).sum()
    }

    #[test]
    fn test_address_exclude_equal_is_empty() {
        assert!(address_exclude(net("fd00::/64"), net("fd00::/64")).is_empty());
    }

    #[test]
    fn test_address_exclude_halves() {
        let rest = address_exclude(net("fd00::/62"), net("fd00:0:0:1::/64"));
        assert_eq!(
            rest,
            vec![net("fd00:0:0:2::/63"), net("fd00:0:0:0::/64")]
        );
    }

    #[test]
    fn test_address_exclude_not_contained() {
        assert!(address_exclude(net("fd00::/16"), net("fe80::/10")).is_empty());
    }

    #[test]
    fn test_exclude_all_empty_claims() {
        assert_eq!(exclude_all(net("fd00::/8"), &[]), vec![net("fd00::/8")]);
    }

    #[test]
    fn test_exclude_all_unrelated_claim() {
        let free = exclude_all(net("fd00::/8"), &[net("2001:db8::/32")]);
        assert_eq!(free, vec![net("fd00::/8")]);
    }

    #[test]
    fn test_exclude_all_claim_equals_base() {
        assert!(exclude_all(net("fd00::/8"), &[net("fd00::/8")]).is_empty());
    }

    #[test]
    fn test_exclude_all_supernet_claim() {
        assert!(exclude_all(net("fd00::/8"), &[net("fc00::/7")]).is_empty());
    }

    #[test]
    fn test_exclude_all_claim_inside_base() {
        let claim = net("fd00:1::/32");
        let free = exclude_all(net("fd00::/8"), &[claim]);
        assert_eq!(free.len(), 24);
        assert!(free.iter().all(|n| !n.overlaps(&claim)));
        assert_eq!(
            address_count(&free) + address_count(&[claim]),
            address_count(&[net("fd00::/8")])
        );
    }

    #[test]
    fn test_exclude_all_two_claims() {
        let claims = [net("fd00:1::/32"), net("fd80::/9")];
        let free = exclude_all(net("fd00::/8"), &claims);
        for (i, a) in free.iter().enumerate() {
            for b in free.iter().skip(i + 1) {
                assert!(!a.overlaps(b), "{a} overlaps {b}");
            }
            assert!(claims.iter().all(|c| !c.overlaps(a)));
        }
        assert_eq!(
            address_count(&free) + address_count(&claims),
            address_count(&[net("fd00::/8")])
        );
    }

    #[test]
    fn test_exclude_all_order_independent() {
        let claims = [net("fd00:1::/32"), net("fd12:3456::/48"), net("fdff::/16")];
        let forward: HashSet<Ipv6> = exclude_all(net("fd00::/8"), &claims).into_iter().collect();
        let mut reversed = claims;
        reversed.reverse();
        let backward: HashSet<Ipv6> = exclude_all(net("fd00::/8"), &reversed)
            .into_iter()
            .collect();
        assert_eq!(forward, backward);
    }

    #[test]
    fn test_exclude_all_nested_claims() {
        // the inner claim lands in an already excluded region
        let free = exclude_all(net("fd00::/8"), &[net("fd00::/16"), net("fd00:1::/32")]);
        assert_eq!(free.len(), 8);
        assert!(free.iter().all(|n| !n.overlaps(&net("fd00::/16"))));
    }
}
