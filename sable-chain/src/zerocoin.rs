//! Zerocoin value types.
//!
//! The zerocoin scheme mints coins in a fixed set of denominations, and
//! compresses the minted coin commitments for each denomination into a
//! single accumulator value. Spends reveal a serial number derived from the
//! coin, which prevents double-spending.
//!
//! This module defines the typed representations of those values. The
//! accumulator and serial arithmetic itself (witness computation, proof
//! verification) is out of scope: equality and serialization are the only
//! operations the rest of the node needs.

mod accumulator;
mod denomination;
mod serial;

pub use accumulator::AccumulatorValue;
pub use denomination::Denomination;
pub use serial::SerialNumber;
