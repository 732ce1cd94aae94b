//! Rendered configuration fragments.

use std::fmt;

/// Which configuration file a fragment belongs in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FragmentKind {
    /// ifupdown `interfaces(5)` stanza.
    Interfaces,
    /// `radvd.conf(5)` interface block.
    RouterAdvertisement,
}

impl FragmentKind {
    /// Conventional location of the file this kind of fragment is written to.
    pub fn target_file(&self) -> &'static str {
        match self {
            FragmentKind::Interfaces => "/etc/network/interfaces",
            FragmentKind::RouterAdvertisement => "/etc/radvd.conf",
        }
    }
}

/// A formatted text blob plus the interface it configures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigFragment {
    pub interface: String,
    pub kind: FragmentKind,
    pub text: String,
}

impl fmt::Display for ConfigFragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Every fragment produced for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragments {
    pub uplink_interface: ConfigFragment,
    pub downlink_interface: ConfigFragment,
    pub router_advertisement: ConfigFragment,
}

impl Fragments {
    /// Fragments in output order.
    pub fn iter(&self) -> impl Iterator<Item = &ConfigFragment> {
        [
            &self.uplink_interface,
            &self.downlink_interface,
            &self.router_advertisement,
        ]
        .into_iter()
    }
}
