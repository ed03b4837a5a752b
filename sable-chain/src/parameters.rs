//! Consensus parameters for each Sable network.
//!
//! Parameters that differ between networks live in [`NetworkParameters`],
//! which states every field's value for every network directly: there is no
//! defaulting or inheritance between networks, so no hidden override order
//! exists. The active network is always passed explicitly by the caller;
//! this crate never holds a process-wide "current network".

mod constants;
mod network;
mod network_params;

pub use constants::{CENT, COIN, ZEROCOIN_MODULUS};
pub use network::{magics, InvalidNetworkError, Magic, Network};
pub use network_params::NetworkParameters;
