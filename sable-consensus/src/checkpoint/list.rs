//! Checkpoint lists for accumulator-based spend verification.
//!
//! Each list entry maps one block height to the accumulator value of every
//! coin denomination at that height.

#[cfg(test)]
mod tests;

use std::{collections::BTreeMap, path::Path, str::FromStr};

use sable_chain::{
    block::Height,
    parameters::Network,
    zerocoin::{AccumulatorValue, Denomination},
};

use crate::{
    error::CheckpointError,
    source::{self, RawCheckpointEntry},
    Config,
};

const MAINNET_CHECKPOINTS: &str = include_str!("main-checkpoints.json");
const TESTNET_CHECKPOINTS: &str = include_str!("test-checkpoints.json");
const REGTEST_CHECKPOINTS: &str = include_str!("regtest-checkpoints.json");

/// The accumulator state recorded at one checkpoint height: exactly one
/// value per coin denomination.
pub type Checkpoint = BTreeMap<Denomination, AccumulatorValue>;

/// A list of height-indexed accumulator checkpoints for one network.
///
/// Heights are sparse: the network's maintainers record a checkpoint
/// whenever the accumulators are known good, not at every block. Queries
/// therefore ask for the closest checkpoint at or below a height, which is
/// a predecessor search over the ordered heights.
///
/// The list is immutable once constructed. Since the map is read-only, a
/// `BTreeMap` gives the floor query directly and all validation of the
/// source data happens on construction.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CheckpointList(BTreeMap<Height, Checkpoint>);

impl FromStr for CheckpointList {
    type Err = CheckpointError;

    /// Parse a JSON checkpoint data source into a [`CheckpointList`].
    ///
    /// The source is an array of entries, each carrying a height and one
    /// decimal accumulator digit string per denomination.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw: Vec<RawCheckpointEntry> = source::parse_json(s)?;

        let mut entries = Vec::with_capacity(raw.len());
        for (index, entry) in raw.into_iter().enumerate() {
            entries.push(entry_from_raw(index, entry)?);
        }

        CheckpointList::from_entries(entries)
    }
}

/// Validate one raw source entry into a height and its denomination values.
fn entry_from_raw(
    index: usize,
    raw: RawCheckpointEntry,
) -> Result<(Height, Vec<(Denomination, AccumulatorValue)>), CheckpointError> {
    let height = raw.height.ok_or(CheckpointError::MissingHeight { index })?;
    if height > u64::from(Height::MAX_AS_U32) {
        return Err(CheckpointError::HeightOutOfRange { height });
    }
    let height = Height(height as u32);

    let mut values = Vec::with_capacity(raw.values.len());
    for (key, value) in &raw.values {
        let denomination: Denomination =
            key.parse()
                .map_err(|_| CheckpointError::UnknownDenomination {
                    height,
                    key: key.clone(),
                })?;

        // the numeric base must be explicit, so a bare JSON number is
        // rejected just like a non-decimal string
        let accumulator = value
            .as_str()
            .and_then(|digits| AccumulatorValue::from_decimal_str(digits).ok())
            .ok_or(CheckpointError::InvalidAccumulatorValue {
                height,
                denomination,
            })?;

        values.push((denomination, accumulator));
    }

    Ok((height, values))
}

impl CheckpointList {
    /// Returns the hard-coded checkpoint list for `network`.
    pub fn new(network: Network) -> Self {
        match network {
            Network::Mainnet => MAINNET_CHECKPOINTS
                .parse()
                .expect("hard-coded Mainnet checkpoint list parses and validates"),
            Network::Testnet => TESTNET_CHECKPOINTS
                .parse()
                .expect("hard-coded Testnet checkpoint list parses and validates"),
            Network::Regtest => REGTEST_CHECKPOINTS
                .parse()
                .expect("hard-coded Regtest checkpoint list parses and validates"),
            // unit test mode shares the checkpoints recorded for Mainnet
            Network::Unittest => MAINNET_CHECKPOINTS
                .parse()
                .expect("hard-coded Mainnet checkpoint list parses and validates"),
        }
    }

    /// Read and parse the checkpoint list at `path`.
    ///
    /// The file holds the same JSON format as the hard-coded sources.
    pub fn from_file(path: &Path) -> Result<Self, CheckpointError> {
        source::read_source(path)?.parse()
    }

    /// Load the checkpoint list for `network` from `config`, falling back
    /// to the hard-coded list when no external source is configured.
    pub fn from_config(network: Network, config: &Config) -> Result<Self, CheckpointError> {
        match &config.checkpoint_source {
            Some(path) => {
                tracing::info!(
                    ?network,
                    path = %path.display(),
                    "loading accumulator checkpoints from configured source"
                );
                Self::from_file(path)
            }
            None => Ok(Self::new(network)),
        }
    }

    /// Create a new checkpoint list from `entries`, in data source order.
    ///
    /// Heights must be strictly increasing, and each entry must carry
    /// exactly one accumulator value per denomination. An empty list is
    /// allowed: a network that has not recorded any checkpoint yet answers
    /// every query with "no checkpoint available".
    pub fn from_entries(
        entries: impl IntoIterator<Item = (Height, Vec<(Denomination, AccumulatorValue)>)>,
    ) -> Result<Self, CheckpointError> {
        let mut checkpoints: BTreeMap<Height, Checkpoint> = BTreeMap::new();
        let mut previous: Option<Height> = None;

        for (height, values) in entries {
            // a height appearing twice is a bug in the data source, so it is
            // rejected outright rather than keeping either entry
            if checkpoints.contains_key(&height) {
                return Err(CheckpointError::DuplicateHeight { height });
            }
            if let Some(previous) = previous {
                if height < previous {
                    return Err(CheckpointError::OutOfOrderHeight { height, previous });
                }
            }
            previous = Some(height);

            let mut checkpoint = Checkpoint::new();
            for (denomination, accumulator) in values {
                if checkpoint.insert(denomination, accumulator).is_some() {
                    return Err(CheckpointError::DuplicateDenomination {
                        height,
                        denomination,
                    });
                }
            }
            for denomination in Denomination::iter() {
                if !checkpoint.contains_key(&denomination) {
                    return Err(CheckpointError::MissingDenomination {
                        height,
                        denomination,
                    });
                }
            }

            checkpoints.insert(height, checkpoint);
        }

        Ok(CheckpointList(checkpoints))
    }

    /// Returns the checkpoint recorded at the greatest height at or below
    /// `height`, together with that height.
    ///
    /// Returns `None` when `height` is below the first checkpoint, or the
    /// list is empty. Callers must treat `None` as "validate against the
    /// genesis-equivalent accumulator state" and must not substitute a
    /// zeroed checkpoint.
    pub fn closest_checkpoint(&self, height: Height) -> Option<(Height, &Checkpoint)> {
        self.0
            .range(..=height)
            .next_back()
            .map(|(checkpoint_height, checkpoint)| (*checkpoint_height, checkpoint))
    }

    /// Return true if there is a checkpoint at `height`.
    pub fn contains(&self, height: Height) -> bool {
        self.0.contains_key(&height)
    }

    /// Returns the checkpoint at exactly `height`, or `None` if there is no
    /// checkpoint at that height.
    pub fn checkpoint(&self, height: Height) -> Option<&Checkpoint> {
        self.0.get(&height)
    }

    /// Return the block height of the lowest checkpoint, or `None` if the
    /// list is empty.
    pub fn min_height(&self) -> Option<Height> {
        self.0.keys().next().copied()
    }

    /// Return the block height of the highest checkpoint, or `None` if the
    /// list is empty.
    pub fn max_height(&self) -> Option<Height> {
        self.0.keys().next_back().copied()
    }

    /// The number of checkpoints in the list.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if the list has no checkpoints.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
