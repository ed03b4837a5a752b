//! Structured data ingestion for consensus data sources.
//!
//! The checkpoint store and the exclusion registry both consume textual
//! JSON blobs, with no assumption about the blob's origin: the hard-coded
//! sources are embedded with `include_str!`, and [`Config`](crate::Config)
//! can point either loader at an external file in the same format. All of
//! them funnel through [`parse_json`], the single syntax-level entry point.

use std::path::Path;

use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::error::SourceError;

/// Parse `text` as a well-formed JSON document holding a `T`.
///
/// A pure function of the input text. Failure is always fatal to the
/// caller: a source that does not parse in full is treated as corrupt,
/// with no partial-acceptance mode, because a half-loaded checkpoint table
/// or exclusion list is worse than none at all.
pub(crate) fn parse_json<T: DeserializeOwned>(text: &str) -> Result<T, SourceError> {
    Ok(serde_json::from_str(text)?)
}

/// Read the data source at `path` into memory.
pub(crate) fn read_source(path: &Path) -> Result<String, SourceError> {
    Ok(std::fs::read_to_string(path)?)
}

/// One checkpoint entry, as it appears in a checkpoint data source.
///
/// The accumulator values are captured as raw JSON so the consumer can
/// insist on explicit decimal digit strings.
#[derive(Debug, Deserialize)]
pub(crate) struct RawCheckpointEntry {
    /// The block height the checkpoint was recorded at.
    pub height: Option<u64>,

    /// The accumulator values, keyed by denomination face value.
    #[serde(flatten)]
    pub values: serde_json::Map<String, serde_json::Value>,
}

/// One entry in an invalid-outpoint data source.
///
/// Both fields are optional at this layer so that an absent field is a
/// registry validation error, not a syntax error.
#[derive(Debug, Deserialize)]
pub(crate) struct RawOutPointEntry {
    /// The hex transaction identifier.
    pub txid: Option<String>,

    /// The output index within the transaction.
    pub n: Option<u32>,
}
