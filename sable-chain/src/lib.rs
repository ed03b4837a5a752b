//! Core blockchain data structures for Sable.
//!
//! This crate contains the strongly-typed primitives shared by the rest of
//! the node: block heights, transaction hashes, transparent outpoints, the
//! zerocoin value types, and the consensus parameters for each Sable
//! network.
//!
//! Structural validity is enforced by the definitions of the data structures
//! in this crate. Semantic validity (for example, that a hard-coded
//! accumulator checkpoint list is well-formed) is enforced by the code in
//! `sable-consensus`.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod block;
pub mod parameters;
pub mod serialization;
pub mod transaction;
pub mod transparent;
pub mod zerocoin;
