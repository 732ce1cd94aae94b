//! Configuration fragment rendering.
//!
//! This module turns selected prefixes into configuration text:
//! - [`interfaces`] - ifupdown interface stanzas
//! - [`radvd`] - router advertisement daemon blocks
//! - [`terminal`] - printing fragments to stdout

mod interfaces;
mod radvd;
mod terminal;

pub use interfaces::interface_fragment;
pub use radvd::router_advertisement_fragment;
pub use terminal::{format_fragments, print_fragments, print_pair_json};
