//! ifupdown `interfaces(5)` stanzas.

use crate::models::{ConfigFragment, FragmentKind, Ipv6};

/// Render the interface stanza for `interface`.
///
/// Without a prefix the interface autoconfigures via SLAAC with privacy
/// addresses. With a prefix it gets the first host address statically.
pub fn interface_fragment(prefix: Option<Ipv6>, interface: &str) -> ConfigFragment {
    let text = match prefix {
        None => format!(
            "auto {interface}\n\
             allow-hotplug {interface}\n\
             iface {interface} inet6 auto\n\
             \tprivext 2\n\
             \tdhcp 0\n"
        ),
        Some(prefix) => format!(
            "auto {interface}\n\
             iface {interface} inet6 static\n\
             \taddress {address}\n\
             \tnetmask {netmask}\n\
             \tprivext 0\n\
             \tscope site\n",
            address = prefix.first_host(),
            netmask = prefix.mask(),
        ),
    };

    ConfigFragment {
        interface: interface.to_string(),
        kind: FragmentKind::Interfaces,
        text,
    }
}
