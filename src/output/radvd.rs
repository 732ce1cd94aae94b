//! `radvd.conf(5)` interface blocks.

use crate::models::{ConfigFragment, FragmentKind, Ipv6};
use itertools::Itertools;

/// Render the router advertisement block announcing `prefix` on `interface`.
///
/// Each entry of `routes` becomes a route declaration; `::/0` announces a
/// default route.
pub fn router_advertisement_fragment(
    prefix: Ipv6,
    interface: &str,
    routes: Option<&[Ipv6]>,
) -> ConfigFragment {
    let routes = routes
        .unwrap_or_default()
        .iter()
        .map(|route| format!("\troute {route}\n\t{{\n\t}};\n"))
        .join("");

    let text = format!(
        "interface {interface}\n\
         {{\n\
         \tAdvSendAdvert on;\n\
         \tIgnoreIfMissing on;\n\
         \tprefix {prefix}\n\
         \t{{\n\
         \t}};\n\
         {routes}\
         }};\n"
    );

    ConfigFragment {
        interface: interface.to_string(),
        kind: FragmentKind::RouterAdvertisement,
        text,
    }
}
