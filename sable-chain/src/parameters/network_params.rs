//! Per-network tunables for the zerocoin subsystem.

use crate::block::Height;

use super::{magics, Magic, Network, CENT};

/// The consensus parameters of one Sable network.
///
/// Every field's value is stated directly for every network in
/// [`NetworkParameters::for_network`]; there is no defaulting or inheritance
/// between networks.
///
/// These values are inert configuration: they are produced here and
/// consumed by validation, never computed.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct NetworkParameters {
    /// The network these parameters belong to.
    pub network: Network,

    /// The message start bytes for this network's peer protocol.
    pub magic: Magic,

    /// The default peer port.
    pub default_port: u16,

    /// The height at which zerocoin minting and spending activates.
    pub zerocoin_start_height: Height,

    /// The UNIX time at which zerocoin activates, paired with
    /// [`zerocoin_start_height`](Self::zerocoin_start_height).
    pub zerocoin_start_time: i64,

    /// The height from which spends must use serial numbers inside the
    /// valid range.
    pub enforce_serial_range_height: Height,

    /// The height at which accumulators are recalculated from scratch,
    /// if this network ever needed one.
    pub recalculate_accumulators_height: Option<Height>,

    /// The first block containing spends with fraudulent serial numbers,
    /// if this network recorded an exploit.
    pub first_fraudulent_height: Option<Height>,

    /// The last accumulator checkpoint recorded before the exploit,
    /// if this network recorded one.
    pub last_good_checkpoint_height: Option<Height>,

    /// The height from which outputs in the invalid-outpoint list are
    /// rejected as spendable, if this network recorded an exploit.
    pub enforce_invalid_utxo_height: Option<Height>,

    /// The maximum number of zerocoin spends allowed in one transaction.
    pub max_zerocoin_spends_per_transaction: u32,

    /// The fee required to mint a zerocoin, in base units.
    pub min_zerocoin_mint_fee: u64,

    /// The confirmations a mint needs before it is accumulated.
    pub mint_required_confirmations: u32,

    /// The number of mints of one denomination batched into one
    /// accumulator update.
    pub required_accumulation: u32,

    /// The default security level for accumulator witness computation.
    pub default_security_level: u32,

    /// The block header version required once zerocoin is active.
    pub zerocoin_header_version: u32,

    /// The confirmations required before a coin is stakable.
    pub zerocoin_required_stake_depth: u32,
}

impl NetworkParameters {
    /// The consensus parameters for `network`.
    pub fn for_network(network: Network) -> NetworkParameters {
        match network {
            Network::Mainnet => NetworkParameters {
                network: Network::Mainnet,
                magic: magics::MAINNET,
                default_port: 8544,
                zerocoin_start_height: Height(86_400),
                zerocoin_start_time: 1_563_003_600,
                enforce_serial_range_height: Height(253),
                recalculate_accumulators_height: Some(Height(98_000)),
                first_fraudulent_height: Some(Height(96_847)),
                last_good_checkpoint_height: Some(Height(96_840)),
                enforce_invalid_utxo_height: Some(Height(97_850)),
                max_zerocoin_spends_per_transaction: 7,
                min_zerocoin_mint_fee: CENT,
                mint_required_confirmations: 20,
                required_accumulation: 1,
                default_security_level: 100,
                zerocoin_header_version: 4,
                zerocoin_required_stake_depth: 200,
            },
            Network::Testnet => NetworkParameters {
                network: Network::Testnet,
                magic: magics::TESTNET,
                default_port: 18_544,
                zerocoin_start_height: Height(201_576),
                zerocoin_start_time: 1_501_776_000,
                enforce_serial_range_height: Height(1),
                // testnet recorded no exploit
                recalculate_accumulators_height: None,
                first_fraudulent_height: None,
                last_good_checkpoint_height: None,
                enforce_invalid_utxo_height: None,
                max_zerocoin_spends_per_transaction: 7,
                min_zerocoin_mint_fee: CENT,
                mint_required_confirmations: 20,
                required_accumulation: 1,
                default_security_level: 100,
                zerocoin_header_version: 4,
                zerocoin_required_stake_depth: 200,
            },
            Network::Regtest => NetworkParameters {
                network: Network::Regtest,
                magic: magics::REGTEST,
                default_port: 18_545,
                zerocoin_start_height: Height(300),
                zerocoin_start_time: 1_562_918_400,
                enforce_serial_range_height: Height(1),
                recalculate_accumulators_height: None,
                first_fraudulent_height: None,
                last_good_checkpoint_height: None,
                enforce_invalid_utxo_height: None,
                max_zerocoin_spends_per_transaction: 7,
                min_zerocoin_mint_fee: CENT,
                mint_required_confirmations: 20,
                required_accumulation: 1,
                default_security_level: 100,
                zerocoin_header_version: 4,
                zerocoin_required_stake_depth: 200,
            },
            Network::Unittest => NetworkParameters {
                network: Network::Unittest,
                magic: magics::UNITTEST,
                default_port: 18_546,
                zerocoin_start_height: Height(86_400),
                zerocoin_start_time: 1_563_003_600,
                enforce_serial_range_height: Height(253),
                recalculate_accumulators_height: Some(Height(98_000)),
                first_fraudulent_height: Some(Height(96_847)),
                last_good_checkpoint_height: Some(Height(96_840)),
                enforce_invalid_utxo_height: Some(Height(97_850)),
                max_zerocoin_spends_per_transaction: 7,
                min_zerocoin_mint_fee: CENT,
                mint_required_confirmations: 20,
                required_accumulation: 1,
                default_security_level: 100,
                zerocoin_header_version: 4,
                zerocoin_required_stake_depth: 200,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parameters_match_their_network() {
        sable_test::init();

        for network in Network::iter() {
            let params = NetworkParameters::for_network(network);
            assert_eq!(params.network, network);
            assert_eq!(params.magic, network.magic());
        }
    }

    #[test]
    fn exploit_heights_are_ordered() {
        sable_test::init();

        for network in Network::iter() {
            let params = NetworkParameters::for_network(network);

            // the exploit window heights are either all present or all absent
            let heights = [
                params.last_good_checkpoint_height,
                params.first_fraudulent_height,
                params.enforce_invalid_utxo_height,
                params.recalculate_accumulators_height,
            ];
            assert!(
                heights.iter().all(Option::is_some) || heights.iter().all(Option::is_none),
                "{network}: partial exploit window",
            );

            // last good checkpoint < first fraudulent block
            //   < invalid-UTXO enforcement < accumulator recalculation
            if let [Some(last_good), Some(fraudulent), Some(utxo), Some(recalculate)] = heights {
                assert!(last_good < fraudulent, "{network}");
                assert!(fraudulent < utxo, "{network}");
                assert!(utxo < recalculate, "{network}");
                assert!(params.zerocoin_start_height < last_good, "{network}");
            }
        }
    }

    #[test]
    fn unique_ports() {
        sable_test::init();

        let mut ports: Vec<u16> = Network::iter()
            .map(|network| NetworkParameters::for_network(network).default_port)
            .collect();
        ports.sort();
        ports.dedup();
        assert_eq!(ports.len(), Network::iter().count());
    }
}
