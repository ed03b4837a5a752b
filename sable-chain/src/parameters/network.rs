//! The Sable network identifiers.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// An enum describing the possible network choices.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Network {
    /// The production mainnet.
    #[default]
    Mainnet,

    /// The public test network.
    Testnet,

    /// The private regression test network.
    Regtest,

    /// The in-process unit test network.
    ///
    /// Shares Mainnet's hard-coded consensus data, but is a distinct
    /// network so tests never observe production defaults by accident.
    Unittest,
}

/// A magic number identifying the network.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
pub struct Magic(pub [u8; 4]);

impl fmt::Debug for Magic {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_tuple("Magic").field(&hex::encode(self.0)).finish()
    }
}

/// Magic numbers used to identify different Sable networks.
pub mod magics {
    use super::*;
    /// The production mainnet.
    pub const MAINNET: Magic = Magic([0xa3, 0x5e, 0xc1, 0xf2]);
    /// The testnet.
    pub const TESTNET: Magic = Magic([0xb4, 0x6f, 0xd2, 0xe3]);
    /// The regression test network.
    pub const REGTEST: Magic = Magic([0xc5, 0x70, 0xe3, 0xf4]);
    /// The unit test network. Deliberately equal to [`MAINNET`]: unit test
    /// mode is Mainnet's consensus data without Mainnet's peers.
    pub const UNITTEST: Magic = Magic([0xa3, 0x5e, 0xc1, 0xf2]);
}

impl From<Network> for &'static str {
    fn from(network: Network) -> &'static str {
        match network {
            Network::Mainnet => "Mainnet",
            Network::Testnet => "Testnet",
            Network::Regtest => "Regtest",
            Network::Unittest => "Unittest",
        }
    }
}

impl From<&Network> for &'static str {
    fn from(network: &Network) -> &'static str {
        (*network).into()
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.into())
    }
}

impl Network {
    /// Returns an iterator over [`Network`] variants.
    pub fn iter() -> impl Iterator<Item = Self> {
        [
            Self::Mainnet,
            Self::Testnet,
            Self::Regtest,
            Self::Unittest,
        ]
        .into_iter()
    }

    /// Return the short network name used in data sources and on-disk
    /// directories.
    pub fn short_name(&self) -> &'static str {
        match self {
            Network::Mainnet => "main",
            Network::Testnet => "test",
            Network::Regtest => "regtest",
            Network::Unittest => "unittest",
        }
    }

    /// Return the lowercase network name.
    pub fn lowercase_name(&self) -> String {
        self.to_string().to_ascii_lowercase()
    }

    /// Returns `true` if this network is a testing network.
    pub fn is_a_test_network(&self) -> bool {
        *self != Network::Mainnet
    }

    /// Get the magic value associated to this network.
    pub fn magic(&self) -> Magic {
        match self {
            Network::Mainnet => magics::MAINNET,
            Network::Testnet => magics::TESTNET,
            Network::Regtest => magics::REGTEST,
            Network::Unittest => magics::UNITTEST,
        }
    }
}

impl std::str::FromStr for Network {
    type Err = InvalidNetworkError;

    fn from_str(string: &str) -> Result<Self, Self::Err> {
        match string.to_lowercase().as_str() {
            "mainnet" | "main" => Ok(Network::Mainnet),
            "testnet" | "test" => Ok(Network::Testnet),
            "regtest" => Ok(Network::Regtest),
            "unittest" => Ok(Network::Unittest),
            _ => Err(InvalidNetworkError(string.to_owned())),
        }
    }
}

/// An error indicating that Sable does not know the named network.
#[derive(Clone, Debug, Error)]
#[error("Invalid network: {0}")]
pub struct InvalidNetworkError(String);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn network_names_round_trip() {
        sable_test::init();

        for network in Network::iter() {
            assert_eq!(
                network.to_string().parse::<Network>().unwrap(),
                network,
            );
            assert_eq!(
                network.short_name().parse::<Network>().unwrap(),
                network,
            );
        }

        "highnet".parse::<Network>().unwrap_err();

        assert!(!Network::Mainnet.is_a_test_network());
        assert!(Network::Testnet.is_a_test_network());
        assert!(Network::Unittest.is_a_test_network());
    }

    #[test]
    fn magics_distinguish_public_networks() {
        sable_test::init();

        // Unittest deliberately shares Mainnet's magic, so only the networks
        // that can appear on a wire need distinct values.
        assert_ne!(magics::MAINNET, magics::TESTNET);
        assert_ne!(magics::MAINNET, magics::REGTEST);
        assert_ne!(magics::TESTNET, magics::REGTEST);
        assert_eq!(magics::UNITTEST, magics::MAINNET);
    }
}
