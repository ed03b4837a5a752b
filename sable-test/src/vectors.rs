//! Shared data-source vectors for Sable tests.
//!
//! These are deliberately small: the hard-coded production sources live in
//! `sable-consensus`, and these vectors only need to exercise the loaders'
//! validation rules.

/// A well-formed checkpoint source with entries at heights 0 and 100.
///
/// The denomination-one value changes between the entries, so closest-height
/// lookups can tell which checkpoint they got.
pub const CHECKPOINTS_TWO: &str = r#"[
  {
    "height": 0,
    "1": "5", "5": "6", "10": "7", "50": "8",
    "100": "9", "500": "10", "1000": "11", "5000": "12"
  },
  {
    "height": 100,
    "1": "12", "5": "13", "10": "14", "50": "15",
    "100": "16", "500": "17", "1000": "18", "5000": "19"
  }
]"#;

/// A well-formed checkpoint source whose first checkpoint is well above the
/// genesis block.
pub const CHECKPOINTS_OFFSET: &str = r#"[
  {
    "height": 1000,
    "1": "21", "5": "22", "10": "23", "50": "24",
    "100": "25", "500": "26", "1000": "27", "5000": "28"
  },
  {
    "height": 1005,
    "1": "31", "5": "32", "10": "33", "50": "34",
    "100": "35", "500": "36", "1000": "37", "5000": "38"
  },
  {
    "height": 1050,
    "1": "41", "5": "42", "10": "43", "50": "44",
    "100": "45", "500": "46", "1000": "47", "5000": "48"
  }
]"#;

/// A checkpoint source that repeats a height.
pub const CHECKPOINTS_DUPLICATE_HEIGHT: &str = r#"[
  {
    "height": 10,
    "1": "1", "5": "2", "10": "3", "50": "4",
    "100": "5", "500": "6", "1000": "7", "5000": "8"
  },
  {
    "height": 10,
    "1": "11", "5": "12", "10": "13", "50": "14",
    "100": "15", "500": "16", "1000": "17", "5000": "18"
  }
]"#;

/// A checkpoint source whose heights go backwards.
pub const CHECKPOINTS_DECREASING_HEIGHT: &str = r#"[
  {
    "height": 20,
    "1": "1", "5": "2", "10": "3", "50": "4",
    "100": "5", "500": "6", "1000": "7", "5000": "8"
  },
  {
    "height": 10,
    "1": "11", "5": "12", "10": "13", "50": "14",
    "100": "15", "500": "16", "1000": "17", "5000": "18"
  }
]"#;

/// A checkpoint source missing the five-thousand denomination.
pub const CHECKPOINTS_MISSING_DENOMINATION: &str = r#"[
  {
    "height": 10,
    "1": "1", "5": "2", "10": "3", "50": "4",
    "100": "5", "500": "6", "1000": "7"
  }
]"#;

/// A checkpoint source with a denomination Sable does not mint.
pub const CHECKPOINTS_UNKNOWN_DENOMINATION: &str = r#"[
  {
    "height": 10,
    "1": "1", "5": "2", "10": "3", "50": "4",
    "100": "5", "500": "6", "1000": "7", "5000": "8",
    "25": "9"
  }
]"#;

/// A checkpoint source with an accumulator value that is not a decimal
/// digit string.
pub const CHECKPOINTS_BAD_VALUE: &str = r#"[
  {
    "height": 10,
    "1": "12ab", "5": "2", "10": "3", "50": "4",
    "100": "5", "500": "6", "1000": "7", "5000": "8"
  }
]"#;

/// A checkpoint source carrying an accumulator value as a bare number,
/// which leaves its numeric base implicit.
pub const CHECKPOINTS_NUMERIC_VALUE: &str = r#"[
  {
    "height": 10,
    "1": 1, "5": "2", "10": "3", "50": "4",
    "100": "5", "500": "6", "1000": "7", "5000": "8"
  }
]"#;

/// A checkpoint source with an entry that has no height.
pub const CHECKPOINTS_MISSING_HEIGHT: &str = r#"[
  {
    "1": "1", "5": "2", "10": "3", "50": "4",
    "100": "5", "500": "6", "1000": "7", "5000": "8"
  }
]"#;

/// A checkpoint source that is not well-formed JSON.
pub const CHECKPOINTS_MALFORMED: &str = r#"[ { "height": 10, "#;

/// A well-formed serial list. The second entry is the first with leading
/// zero padding and must collapse into it.
pub const INVALID_SERIALS: &str = r#"[
  "12345",
  "0000012345",
  "812391857623498172346591823746519287345698123746591834765918237465"
]"#;

/// A serial list with an entry that is not a decimal digit string.
pub const INVALID_SERIALS_BAD: &str = r#"[
  "12345",
  "12x45"
]"#;

/// A well-formed outpoint list.
pub const INVALID_OUTPOINTS: &str = r#"[
  {
    "txid": "3166411bd5343e0b284a108f39a929fbbb62619784f8c6dafe520703b5b446bf",
    "n": 0
  },
  {
    "txid": "165e61451a8dca1e386268a16f8a4528602a6b1bed4ff1b43d881428050070b1",
    "n": 2
  }
]"#;

/// An outpoint list with an entry missing its transaction identifier.
pub const INVALID_OUTPOINTS_MISSING_TXID: &str = r#"[
  { "n": 0 }
]"#;

/// An outpoint list with an entry missing its output index.
pub const INVALID_OUTPOINTS_MISSING_INDEX: &str = r#"[
  { "txid": "3166411bd5343e0b284a108f39a929fbbb62619784f8c6dafe520703b5b446bf" }
]"#;

/// An outpoint list with a transaction identifier that is not 32 bytes of
/// hex.
pub const INVALID_OUTPOINTS_BAD_TXID: &str = r#"[
  { "txid": "not a txid", "n": 0 }
]"#;
