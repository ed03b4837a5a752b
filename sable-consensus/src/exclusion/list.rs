//! Exclusion lists of known-fraudulent serials and outpoints.


use std::{collections::HashSet, path::PathBuf};

use sable_chain::{parameters::Network, transaction, transparent::OutPoint, zerocoin::SerialNumber};

use crate::{
    error::{ExclusionError, SourceError},
    source::{self, RawOutPointEntry},
    Config,
};

const MAINNET_INVALID_SERIALS: &str = include_str!("invalid-serials.json");
const MAINNET_INVALID_OUTPOINTS: &str = include_str!("invalid-outpoints.json");

/// The fraud exclusion registry for one network: the set of serial numbers
/// and the set of transaction outputs that are known to have been produced
/// fraudulently.
///
/// Both sets are immutable once constructed, so the membership queries are
/// pure and safe to call concurrently from any number of validation
/// threads.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ExclusionList {
    serials: HashSet<SerialNumber>,
    outpoints: HashSet<OutPoint>,
}

impl ExclusionList {
    /// Returns the hard-coded exclusion registry for `network`.
    ///
    /// Only Mainnet recorded a real-world exploit. The test networks load
    /// empty registries, which is a normal state, not a failure: every
    /// membership query on them answers `false`.
    pub fn new(network: Network) -> Self {
        match network {
            Network::Mainnet | Network::Unittest => Self::from_sources(
                Some(MAINNET_INVALID_SERIALS),
                Some(MAINNET_INVALID_OUTPOINTS),
            )
            .expect("hard-coded Mainnet exclusion lists parse and validate"),
            Network::Testnet | Network::Regtest => ExclusionList::default(),
        }
    }

    /// Build a registry from a serial-number source and an outpoint source.
    ///
    /// The loads are independent: either source may be absent, yielding an
    /// empty set for its half of the registry. Duplicate entries within a
    /// source collapse silently.
    pub fn from_sources(
        serials: Option<&str>,
        outpoints: Option<&str>,
    ) -> Result<Self, ExclusionError> {
        let serials = serials.map(parse_serials).transpose()?.unwrap_or_default();
        let outpoints = outpoints
            .map(parse_outpoints)
            .transpose()?
            .unwrap_or_default();

        Ok(ExclusionList { serials, outpoints })
    }

    /// Load the exclusion registry for `network` from `config`.
    ///
    /// Each configured file replaces its embedded counterpart
    /// independently; unconfigured sources fall back to the hard-coded
    /// data.
    pub fn from_config(network: Network, config: &Config) -> Result<Self, ExclusionError> {
        let serial_file = read_configured(&config.invalid_serial_source, network, "serial")?;
        let outpoint_file = read_configured(&config.invalid_outpoint_source, network, "outpoint")?;

        let serials = serial_file.as_deref().or_else(|| embedded_serials(network));
        let outpoints = outpoint_file
            .as_deref()
            .or_else(|| embedded_outpoints(network));

        Self::from_sources(serials, outpoints)
    }

    /// Returns true if `serial` is a known-fraudulent serial number.
    ///
    /// Absence is an ordinary outcome, not an error. Comparison is
    /// numeric, so a query equal in value to a listed serial matches
    /// regardless of how either was zero-padded in text.
    pub fn contains_serial(&self, serial: &SerialNumber) -> bool {
        self.serials.contains(serial)
    }

    /// Returns true if `outpoint` is a known-fraudulent transaction output.
    ///
    /// Matching is exact on both the transaction identifier and the output
    /// index.
    pub fn contains_outpoint(&self, outpoint: &OutPoint) -> bool {
        self.outpoints.contains(outpoint)
    }

    /// The number of excluded serial numbers.
    pub fn serial_count(&self) -> usize {
        self.serials.len()
    }

    /// The number of excluded transaction outputs.
    pub fn outpoint_count(&self) -> usize {
        self.outpoints.len()
    }

    /// Returns true if this registry excludes nothing.
    pub fn is_empty(&self) -> bool {
        self.serials.is_empty() && self.outpoints.is_empty()
    }
}

/// The embedded serial list for `network`, if it ships one.
fn embedded_serials(network: Network) -> Option<&'static str> {
    match network {
        Network::Mainnet | Network::Unittest => Some(MAINNET_INVALID_SERIALS),
        Network::Testnet | Network::Regtest => None,
    }
}

/// The embedded outpoint list for `network`, if it ships one.
fn embedded_outpoints(network: Network) -> Option<&'static str> {
    match network {
        Network::Mainnet | Network::Unittest => Some(MAINNET_INVALID_OUTPOINTS),
        Network::Testnet | Network::Regtest => None,
    }
}

/// Read an optionally-configured external source into memory.
fn read_configured(
    path: &Option<PathBuf>,
    network: Network,
    kind: &str,
) -> Result<Option<String>, SourceError> {
    match path {
        Some(path) => {
            tracing::info!(
                ?network,
                kind,
                path = %path.display(),
                "loading exclusion list from configured source"
            );
            source::read_source(path).map(Some)
        }
        None => Ok(None),
    }
}

/// Parse a serial-number source: a JSON array of decimal digit strings.
fn parse_serials(text: &str) -> Result<HashSet<SerialNumber>, ExclusionError> {
    let raw: Vec<String> = source::parse_json(text)?;

    let mut serials = HashSet::with_capacity(raw.len());
    for (index, digits) in raw.iter().enumerate() {
        let serial = SerialNumber::from_decimal_str(digits)
            .map_err(|_| ExclusionError::InvalidSerial { index })?;
        serials.insert(serial);
    }

    Ok(serials)
}

/// Parse an outpoint source: a JSON array of transaction id and output
/// index pairs.
fn parse_outpoints(text: &str) -> Result<HashSet<OutPoint>, ExclusionError> {
    let raw: Vec<RawOutPointEntry> = source::parse_json(text)?;

    let mut outpoints = HashSet::with_capacity(raw.len());
    for (index, entry) in raw.into_iter().enumerate() {
        let txid = entry
            .txid
            .ok_or(ExclusionError::MissingTransactionId { index })?;
        let output_index = entry.n.ok_or(ExclusionError::MissingOutputIndex { index })?;
        let hash: transaction::Hash = txid
            .parse()
            .map_err(|_| ExclusionError::InvalidTransactionId { index })?;

        outpoints.insert(OutPoint {
            hash,
            index: output_index,
        });
    }

    Ok(outpoints)
}
