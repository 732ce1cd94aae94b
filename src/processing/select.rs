//! Uplink/downlink prefix selection.
//!
//! Picks a random free block, narrows it down to a /63 by random halving and
//! hands out the two /64 siblings inside it.

use crate::models::{Ipv6, PrefixPair};
use crate::{Error, Result};
use rand::{Rng, RngCore};

/// Prefix length both selected networks end up with.
pub const SELECTED_PREFIX_LEN: u8 = 64;

/// Source of uniform random choices.
pub trait ChoiceSource {
    /// Return an index in `0..len`. `len` is never zero.
    fn choose(&mut self, len: usize) -> usize;
}

impl<R: RngCore> ChoiceSource for R {
    fn choose(&mut self, len: usize) -> usize {
        self.gen_range(0..len)
    }
}

/// Select a pair of disjoint /64 prefixes from the free space.
///
/// # Arguments
/// * `assigned` - prefixes the uplink already autoconfigures from
/// * `free` - disjoint free blocks, see [`crate::processing::exclude_all`]
/// * `rng` - random choice source
///
/// # Returns
/// * `Ok(PrefixPair)` - downlink always set, uplink `None` when `assigned` is not empty
/// * `Err(Error::Selection)` - `free` is empty or the chosen block is smaller than a /63
pub fn select_networks<C: ChoiceSource + ?Sized>(
    assigned: &[Ipv6],
    free: &[Ipv6],
    rng: &mut C,
) -> Result<PrefixPair> {
    if free.is_empty() {
        return Err(Error::Selection(
            "no free private address block left".to_string(),
        ));
    }

    let mut block = free[rng.choose(free.len())];
    log::debug!("picked free block {block} of {}", free.len());

    let [uplink, downlink] = loop {
        match block.subnets() {
            Some(halves) if block.mask() < SELECTED_PREFIX_LEN - 1 => {
                block = halves[rng.choose(halves.len())];
            }
            Some(halves) if block.mask() == SELECTED_PREFIX_LEN - 1 => break halves,
            _ => {
                return Err(Error::Selection(format!(
                    "free block {block} is too small for two /{SELECTED_PREFIX_LEN} networks"
                )))
            }
        }
    };
    log::debug!("narrowed to {block}");

    if assigned.is_empty() {
        Ok(PrefixPair {
            uplink: Some(uplink),
            downlink,
        })
    } else {
        Ok(PrefixPair {
            uplink: None,
            downlink,
        })
    }
}
