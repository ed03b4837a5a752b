//! Configuration for the consensus data sources.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Configuration for the hard-coded consensus data sources.
///
/// Each field optionally replaces one embedded data source with an
/// external file in the same JSON format. This exists for tests and for
/// emergency data updates that cannot wait for a release; a normal node
/// runs entirely from the embedded sources.
///
/// # Security
///
/// A replaced source is trusted exactly like the embedded one. Pointing a
/// node at an attacker-controlled checkpoint or exclusion file lets
/// counterfeit value through validation.
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(deny_unknown_fields, default)]
pub struct Config {
    /// Replaces the embedded accumulator checkpoint list for the selected
    /// network.
    pub checkpoint_source: Option<PathBuf>,

    /// Replaces the embedded invalid-serial list for the selected network.
    pub invalid_serial_source: Option<PathBuf>,

    /// Replaces the embedded invalid-outpoint list for the selected
    /// network.
    pub invalid_outpoint_source: Option<PathBuf>,
}

// we like our default configs to be explicit
#[allow(unknown_lints)]
#[allow(clippy::derivable_impls)]
impl Default for Config {
    fn default() -> Self {
        Self {
            checkpoint_source: None,
            invalid_serial_source: None,
            invalid_outpoint_source: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_defaults_to_embedded_sources() {
        sable_test::init();

        let config: Config = serde_json::from_str("{}").unwrap();
        assert_eq!(config.checkpoint_source, None);
        assert_eq!(config.invalid_serial_source, None);
        assert_eq!(config.invalid_outpoint_source, None);
    }

    #[test]
    fn unknown_config_fields_are_rejected() {
        sable_test::init();

        serde_json::from_str::<Config>(r#"{ "checkpoint_src": "x.json" }"#).unwrap_err();
    }
}
