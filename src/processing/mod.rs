//! Prefix selection logic.
//!
//! This module contains the address arithmetic behind prefix selection:
//! - [`exclude`] - Removing claimed networks from the private base space
//! - [`select`] - Picking the uplink/downlink /64 pair from what is left

mod exclude;
mod select;

// Re-export public functions
pub use exclude::{address_exclude, exclude_all};
pub use select::{select_networks, ChoiceSource, SELECTED_PREFIX_LEN};
