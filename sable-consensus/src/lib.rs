//! Implementation of Sable consensus checks.
//!
//! More specifically, this crate owns the consensus-critical data layer a
//! node consults while verifying zerocoin spends:
//!
//! 1. The *accumulator checkpoint store* ([`CheckpointList`]): a
//!    height-indexed map from block height to the accumulator value of each
//!    coin denomination, answering closest-checkpoint-at-or-below-height
//!    queries. A spend proof must chain from the accumulator value the
//!    store returns; looking up any other checkpoint generation silently
//!    validates the spend against the wrong accumulator, which is a
//!    consensus-divergence bug.
//!
//! 2. The *fraud exclusion registry* ([`ExclusionList`]): the sets of
//!    serial numbers and transaction outputs that are known to have been
//!    produced through a historical accumulator flaw. Validation rejects a
//!    spend that references either set, regardless of whether its
//!    cryptographic proof verifies.
//!
//! Both structures are built once from a network's hard-coded data sources
//! during single-threaded startup, and are immutable afterwards: every
//! query takes `&self`, so validation threads read them concurrently
//! without locking.
//!
//! The accumulator cryptography itself (witness computation, proof
//! verification) lives elsewhere; this crate only stores and retrieves
//! accumulator *values*.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod source;

pub mod checkpoint;
pub mod error;
pub mod exclusion;

pub use checkpoint::{Checkpoint, CheckpointList};
pub use config::Config;
pub use exclusion::ExclusionList;

/// A boxed [`std::error::Error`].
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;
