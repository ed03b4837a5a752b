//! Tests for CheckpointList

use super::*;

use proptest::prelude::*;

use sable_chain::parameters::NetworkParameters;
use sable_test::vectors;

use crate::{error::SourceError, BoxError};

/// One accumulator value for every denomination, for building test entries.
fn all_denominations(digits: &str) -> Vec<(Denomination, AccumulatorValue)> {
    Denomination::iter()
        .map(|denomination| {
            (
                denomination,
                AccumulatorValue::from_decimal_str(digits).expect("test digits parse"),
            )
        })
        .collect()
}

/// The denomination-one accumulator value of a checkpoint, as decimal text.
fn denomination_one(checkpoint: &Checkpoint) -> String {
    checkpoint
        .get(&Denomination::One)
        .expect("checkpoints carry every denomination")
        .to_string()
}

/// Parse the hard-coded checkpoint list of every network.
#[test]
fn hard_coded_checkpoint_lists_parse_and_validate() {
    sable_test::init();

    for network in Network::iter() {
        let list = CheckpointList::new(network);
        assert!(
            !list.is_empty(),
            "{network}: hard-coded checkpoint lists have at least one checkpoint",
        );

        // the first checkpoint is recorded at zerocoin activation
        let params = NetworkParameters::for_network(network);
        assert_eq!(list.min_height(), Some(params.zerocoin_start_height), "{network}");
    }

    // unit test mode shares the checkpoints recorded for Mainnet
    assert_eq!(
        CheckpointList::new(Network::Unittest),
        CheckpointList::new(Network::Mainnet),
    );
}

/// The closest checkpoint at an indexed height is that checkpoint, and
/// between indexed heights it is the lower neighbour.
#[test]
fn closest_checkpoint_floor_semantics() -> Result<(), BoxError> {
    sable_test::init();

    let list: CheckpointList = vectors::CHECKPOINTS_TWO.parse()?;

    // exact match at the first checkpoint
    let (height, checkpoint) = list.closest_checkpoint(Height(0)).expect("has checkpoint");
    assert_eq!(height, Height(0));
    assert_eq!(denomination_one(checkpoint), "5");

    // between checkpoints, the lower one wins
    let (height, checkpoint) = list.closest_checkpoint(Height(50)).expect("has checkpoint");
    assert_eq!(height, Height(0));
    assert_eq!(denomination_one(checkpoint), "5");

    // exact match beats predecessor search ambiguity
    let (height, checkpoint) = list.closest_checkpoint(Height(100)).expect("has checkpoint");
    assert_eq!(height, Height(100));
    assert_eq!(denomination_one(checkpoint), "12");

    // above the last checkpoint, the last one wins
    let (height, _) = list
        .closest_checkpoint(Height::MAX)
        .expect("has checkpoint");
    assert_eq!(height, Height(100));

    // the exact-height accessors agree with the floor query
    assert_eq!(list.len(), 2);
    assert_eq!(list.max_height(), Some(Height(100)));
    assert!(list.contains(Height(0)));
    assert!(!list.contains(Height(50)));
    let exact = list.checkpoint(Height(100)).expect("has checkpoint");
    assert_eq!(denomination_one(exact), "12");

    Ok(())
}

/// Heights below the first checkpoint have no checkpoint available.
#[test]
fn closest_checkpoint_below_first_is_absent() -> Result<(), BoxError> {
    sable_test::init();

    let list: CheckpointList = vectors::CHECKPOINTS_OFFSET.parse()?;
    assert_eq!(list.min_height(), Some(Height(1000)));

    assert_eq!(list.closest_checkpoint(Height(0)), None);
    assert_eq!(list.closest_checkpoint(Height(999)), None);

    let (height, _) = list.closest_checkpoint(Height(1000)).expect("exact match");
    assert_eq!(height, Height(1000));
    let (height, _) = list.closest_checkpoint(Height(1049)).expect("floor");
    assert_eq!(height, Height(1005));

    Ok(())
}

/// An empty checkpoint list answers every query with a typed absence.
#[test]
fn empty_checkpoint_list() {
    sable_test::init();

    let list = CheckpointList::from_entries(Vec::new()).expect("empty lists are allowed");
    assert!(list.is_empty());
    assert_eq!(list.min_height(), None);
    assert_eq!(list.max_height(), None);
    assert_eq!(list.closest_checkpoint(Height(0)), None);
    assert_eq!(list.closest_checkpoint(Height::MAX), None);
}

/// A repeated height fails; the loader never keeps "the last one".
#[test]
fn duplicate_height_fails() {
    sable_test::init();

    let error = vectors::CHECKPOINTS_DUPLICATE_HEIGHT
        .parse::<CheckpointList>()
        .expect_err("duplicate heights are rejected");
    assert!(
        matches!(error, CheckpointError::DuplicateHeight { height: Height(10) }),
        "{error:?}",
    );
}

/// Heights that decrease between entries fail.
#[test]
fn out_of_order_height_fails() {
    sable_test::init();

    let error = vectors::CHECKPOINTS_DECREASING_HEIGHT
        .parse::<CheckpointList>()
        .expect_err("out-of-order heights are rejected");
    assert!(
        matches!(
            error,
            CheckpointError::OutOfOrderHeight {
                height: Height(10),
                previous: Height(20),
            },
        ),
        "{error:?}",
    );
}

/// A checkpoint must carry every denomination exactly once.
#[test]
fn missing_denomination_fails() {
    sable_test::init();

    let error = vectors::CHECKPOINTS_MISSING_DENOMINATION
        .parse::<CheckpointList>()
        .expect_err("missing denominations are rejected");
    assert!(
        matches!(
            error,
            CheckpointError::MissingDenomination {
                denomination: Denomination::FiveThousand,
                ..
            },
        ),
        "{error:?}",
    );
}

#[test]
fn duplicate_denomination_fails() {
    sable_test::init();

    let mut values = all_denominations("7");
    values.push((
        Denomination::One,
        AccumulatorValue::from_decimal_str("8").expect("test digits parse"),
    ));

    let error = CheckpointList::from_entries(vec![(Height(10), values)])
        .expect_err("repeated denominations are rejected");
    assert!(
        matches!(
            error,
            CheckpointError::DuplicateDenomination {
                denomination: Denomination::One,
                ..
            },
        ),
        "{error:?}",
    );
}

#[test]
fn unknown_denomination_fails() {
    sable_test::init();

    let error = vectors::CHECKPOINTS_UNKNOWN_DENOMINATION
        .parse::<CheckpointList>()
        .expect_err("unknown denominations are rejected");
    assert!(
        matches!(error, CheckpointError::UnknownDenomination { ref key, .. } if key == "25"),
        "{error:?}",
    );
}

/// Accumulator values must be explicit decimal digit strings: hex digits
/// and bare JSON numbers both fail.
#[test]
fn invalid_accumulator_value_fails() {
    sable_test::init();

    for source in [vectors::CHECKPOINTS_BAD_VALUE, vectors::CHECKPOINTS_NUMERIC_VALUE] {
        let error = source
            .parse::<CheckpointList>()
            .expect_err("non-decimal accumulator values are rejected");
        assert!(
            matches!(
                error,
                CheckpointError::InvalidAccumulatorValue {
                    denomination: Denomination::One,
                    ..
                },
            ),
            "{error:?}",
        );
    }
}

#[test]
fn missing_height_fails() {
    sable_test::init();

    let error = vectors::CHECKPOINTS_MISSING_HEIGHT
        .parse::<CheckpointList>()
        .expect_err("entries without a height are rejected");
    assert!(
        matches!(error, CheckpointError::MissingHeight { index: 0 }),
        "{error:?}",
    );
}

#[test]
fn height_out_of_range_fails() {
    sable_test::init();

    let source = vectors::CHECKPOINTS_TWO.replace("\"height\": 100", "\"height\": 4000000000");
    let error = source
        .parse::<CheckpointList>()
        .expect_err("heights above the maximum are rejected");
    assert!(
        matches!(error, CheckpointError::HeightOutOfRange { height: 4_000_000_000 }),
        "{error:?}",
    );
}

/// A syntactically broken source fails before any semantic validation.
#[test]
fn malformed_source_fails() {
    sable_test::init();

    let error = vectors::CHECKPOINTS_MALFORMED
        .parse::<CheckpointList>()
        .expect_err("malformed sources are rejected");
    assert!(
        matches!(error, CheckpointError::Source(SourceError::MalformedData(_))),
        "{error:?}",
    );
}

/// Loading the same source twice yields identical query results.
#[test]
fn loading_is_idempotent() {
    sable_test::init();

    let first: CheckpointList = vectors::CHECKPOINTS_TWO.parse().expect("source parses");
    let second: CheckpointList = vectors::CHECKPOINTS_TWO.parse().expect("source parses");
    assert_eq!(first, second);

    assert_eq!(
        CheckpointList::new(Network::Mainnet),
        CheckpointList::new(Network::Mainnet),
    );
}

/// A configured external file replaces the embedded list; a missing file is
/// a load failure.
#[test]
fn configured_source_replaces_embedded_list() {
    sable_test::init();

    let dir = tempfile::TempDir::new().expect("temp dir is created");
    let path = dir.path().join("checkpoints.json");
    std::fs::write(&path, vectors::CHECKPOINTS_OFFSET).expect("checkpoint file is written");

    let config = Config {
        checkpoint_source: Some(path),
        ..Config::default()
    };

    let list = CheckpointList::from_config(Network::Mainnet, &config)
        .expect("configured source loads");
    assert_eq!(list.min_height(), Some(Height(1000)));

    // with no configured source, the embedded list loads
    let embedded = CheckpointList::from_config(Network::Mainnet, &Config::default())
        .expect("embedded source loads");
    assert_eq!(embedded, CheckpointList::new(Network::Mainnet));

    let config = Config {
        checkpoint_source: Some(dir.path().join("no-such-file.json")),
        ..Config::default()
    };
    let error = CheckpointList::from_config(Network::Mainnet, &config)
        .expect_err("missing configured sources are load failures");
    assert!(
        matches!(error, CheckpointError::Source(SourceError::Io(_))),
        "{error:?}",
    );
}

proptest! {
    /// The closest checkpoint is always the greatest indexed height that is
    /// at or below the queried height.
    #[test]
    fn closest_checkpoint_is_the_floor(
        heights in prop::collection::btree_set(0u32..1_000_000, 1..40),
        query in 0u32..1_100_000,
    ) {
        sable_test::init();

        let entries: Vec<_> = heights
            .iter()
            .map(|&height| (Height(height), all_denominations("7")))
            .collect();
        let list = CheckpointList::from_entries(entries).expect("generated entries are valid");

        let expected = heights.iter().copied().filter(|&height| height <= query).max();
        let closest = list
            .closest_checkpoint(Height(query))
            .map(|(height, _)| height.0);

        prop_assert_eq!(closest, expected);
    }
}
