//! IPv6 network and CIDR notation utilities.
//!
//! Provides the [`Ipv6`] struct for representing IPv6 networks in CIDR form,
//! along with the bit-level helpers used for subnet calculations.

use crate::{Error, Result};
use serde::de;
use serde::{Deserialize, Deserializer, Serialize};
use std::net::Ipv6Addr;
use std::str::FromStr;

/// Maximum length for an IPv6 prefix (128 bits).
pub const MAX_LENGTH: u8 = 128;

/// Convert a CIDR prefix length to a network mask as u128.
///
/// # Examples
/// ```
/// use net_autoconfig::models::get_cidr_mask;
/// assert_eq!(get_cidr_mask(8).unwrap(), 0xffu128 << 120);
/// ```
pub fn get_cidr_mask(len: u8) -> Result<u128> {
    if len > MAX_LENGTH {
        Err(Error::InvalidCidr(format!("prefix length /{len} is too long")))
    } else {
        let right_len = u32::from(MAX_LENGTH - len);
        Ok(u128::MAX.checked_shl(right_len).unwrap_or(0))
    }
}

/// Get the network address for a given address and prefix length.
pub fn cut_addr(addr: Ipv6Addr, len: u8) -> Result<Ipv6Addr> {
    let mask = get_cidr_mask(len)?;
    Ok(Ipv6Addr::from(u128::from(addr) & mask))
}

/// Get the last address covered by a given address and prefix length.
pub fn broadcast_addr(addr: Ipv6Addr, len: u8) -> Result<Ipv6Addr> {
    let mask = get_cidr_mask(len)?;
    Ok(Ipv6Addr::from((u128::from(addr) & mask) | !mask))
}

/// IPv6 network in CIDR notation.
///
/// Host bits are always zero, so two values compare equal exactly when
/// they describe the same address range.
#[derive(Eq, PartialEq, Ord, PartialOrd, Debug, Copy, Clone, Hash)]
pub struct Ipv6 {
    addr: Ipv6Addr,
    mask: u8,
}

impl Ipv6 {
    /// Create a new [`Ipv6`] from a CIDR string (e.g., "fd00::/8").
    pub fn new(addr_cidr: &str) -> Result<Ipv6> {
        let addr_cidr = addr_cidr.trim();
        let (addr, mask) = addr_cidr
            .split_once('/')
            .ok_or_else(|| Error::InvalidCidr(format!("missing prefix length in '{addr_cidr}'")))?;
        let addr: Ipv6Addr = addr
            .parse()
            .map_err(|_| Error::InvalidCidr(format!("invalid address '{addr}'")))?;
        let mask: u8 = mask
            .parse()
            .map_err(|_| Error::InvalidCidr(format!("invalid prefix length '{mask}'")))?;
        Ipv6::from_parts(addr, mask)
    }

    /// Build a network from an address and prefix length, zeroing host bits.
    pub fn from_parts(addr: Ipv6Addr, mask: u8) -> Result<Ipv6> {
        Ok(Ipv6 {
            addr: cut_addr(addr, mask)?,
            mask,
        })
    }

    /// The network address.
    pub fn addr(&self) -> Ipv6Addr {
        self.addr
    }

    /// The prefix length (0-128).
    pub fn mask(&self) -> u8 {
        self.mask
    }

    /// Get the lowest (network) address in the subnet.
    pub fn lo(&self) -> Ipv6Addr {
        self.addr
    }

    /// Get the highest address in the subnet.
    pub fn hi(&self) -> Ipv6Addr {
        // mask is validated on construction
        let host_bits = u128::MAX.checked_shr(u32::from(self.mask)).unwrap_or(0);
        Ipv6Addr::from(u128::from(self.addr) | host_bits)
    }

    /// True iff every address of `inner` is also an address of `self`.
    pub fn contains(&self, inner: &Ipv6) -> bool {
        self.lo() <= inner.lo() && inner.hi() <= self.hi()
    }

    pub fn contains_addr(&self, addr: Ipv6Addr) -> bool {
        self.lo() <= addr && addr <= self.hi()
    }

    /// True if the two networks share at least one address.
    pub fn overlaps(&self, other: &Ipv6) -> bool {
        self.contains(other) || other.contains(self)
    }

    /// Split into the two sibling halves one bit longer, lower half first.
    ///
    /// Returns `None` for a /128, which has no halves.
    pub fn subnets(&self) -> Option<[Ipv6; 2]> {
        if self.mask >= MAX_LENGTH {
            return None;
        }
        let mask = self.mask + 1;
        let upper_bit = 1u128 << (MAX_LENGTH - mask);
        let lower = Ipv6 {
            addr: self.addr,
            mask,
        };
        let upper = Ipv6 {
            addr: Ipv6Addr::from(u128::from(self.addr) | upper_bit),
            mask,
        };
        Some([lower, upper])
    }

    /// First usable host address (network address + 1).
    pub fn first_host(&self) -> Ipv6Addr {
        Ipv6Addr::from(u128::from(self.addr).wrapping_add(1))
    }

    /// True for `::/0`, the network a default route points at.
    pub fn is_default(&self) -> bool {
        self.mask == 0
    }
}

impl FromStr for Ipv6 {
    type Err = Error;

    fn from_str(s: &str) -> Result<Ipv6> {
        Ipv6::new(s)
    }
}

impl std::fmt::Display for Ipv6 {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}/{}", self.addr, self.mask)
    }
}

impl Serialize for Ipv6 {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Ipv6 {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Ipv6, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ipv6::new(&s).map_err(de::Error::custom)
    }
}
