//! Errors that can occur when loading consensus data sources.
//!
//! Each error variant corresponds to one validation rule, so enumerating
//! all possible load failures enumerates the rules we enforce, and ensures
//! that a data source is never rejected for a non-enumerated reason.
//!
//! Load failures are unrecoverable: there is no safe partial state for
//! consensus-critical data, so callers must abort initialization for the
//! affected network. Query-time absence (no checkpoint at or below a
//! height, a serial not present in a set) is ordinary control flow
//! expressed as `Option` or `bool`, never as one of these errors.

use thiserror::Error;

use sable_chain::{block::Height, zerocoin::Denomination};

/// A syntax-level failure reading or parsing a data source.
#[derive(Error, Debug)]
pub enum SourceError {
    /// The data source was not a well-formed JSON document.
    #[error("malformed data source: {0}")]
    MalformedData(#[from] serde_json::Error),

    /// The data source could not be read.
    #[error("unreadable data source: {0}")]
    Io(#[from] std::io::Error),
}

/// A semantic violation in an accumulator checkpoint data source.
#[derive(Error, Debug)]
pub enum CheckpointError {
    /// The source failed before any checkpoint could be validated.
    #[error("checkpoint data source failed to load: {0}")]
    Source(#[from] SourceError),

    /// An entry carries no height.
    #[error("checkpoint entry {index} has no height")]
    MissingHeight {
        /// The entry's position in the data source.
        index: usize,
    },

    /// An entry's height does not fit in a block height.
    #[error("checkpoint height {height} exceeds the maximum block height")]
    HeightOutOfRange {
        /// The out-of-range height, as it appeared in the source.
        height: u64,
    },

    /// Two entries share a height.
    #[error("duplicate checkpoint height {height:?}")]
    DuplicateHeight {
        /// The repeated height.
        height: Height,
    },

    /// An entry's height is lower than an earlier entry's height.
    #[error("checkpoint heights must be strictly increasing: {height:?} appears after {previous:?}")]
    OutOfOrderHeight {
        /// The out-of-order height.
        height: Height,
        /// The height of the entry before it.
        previous: Height,
    },

    /// An entry carries a denomination Sable does not mint.
    #[error("checkpoint at height {height:?} has unknown denomination {key:?}")]
    UnknownDenomination {
        /// The entry's height.
        height: Height,
        /// The unrecognized denomination key.
        key: String,
    },

    /// An entry carries the same denomination twice.
    #[error("checkpoint at height {height:?} repeats denomination {denomination}")]
    DuplicateDenomination {
        /// The entry's height.
        height: Height,
        /// The repeated denomination.
        denomination: Denomination,
    },

    /// An entry is missing a denomination.
    #[error("checkpoint at height {height:?} is missing denomination {denomination}")]
    MissingDenomination {
        /// The entry's height.
        height: Height,
        /// The absent denomination.
        denomination: Denomination,
    },

    /// An accumulator value is not an explicit decimal digit string.
    #[error(
        "accumulator value for denomination {denomination} at height {height:?} \
         must be a decimal digit string"
    )]
    InvalidAccumulatorValue {
        /// The entry's height.
        height: Height,
        /// The denomination whose value failed to parse.
        denomination: Denomination,
    },
}

/// A semantic violation in a fraud exclusion data source.
#[derive(Error, Debug)]
pub enum ExclusionError {
    /// The source failed before any entry could be validated.
    #[error("exclusion data source failed to load: {0}")]
    Source(#[from] SourceError),

    /// A serial entry is not a decimal digit string.
    #[error("invalid serial at entry {index}: must be a decimal digit string")]
    InvalidSerial {
        /// The entry's position in the data source.
        index: usize,
    },

    /// An outpoint entry has no transaction identifier.
    #[error("invalid outpoint at entry {index}: missing transaction id")]
    MissingTransactionId {
        /// The entry's position in the data source.
        index: usize,
    },

    /// An outpoint entry has no output index.
    #[error("invalid outpoint at entry {index}: missing output index")]
    MissingOutputIndex {
        /// The entry's position in the data source.
        index: usize,
    },

    /// An outpoint entry's transaction identifier is not 32 bytes of hex.
    #[error("invalid outpoint at entry {index}: transaction id is not 32 bytes of hex")]
    InvalidTransactionId {
        /// The entry's position in the data source.
        index: usize,
    },
}
