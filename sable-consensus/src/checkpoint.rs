//! Accumulator checkpoints for zerocoin spend verification.
//!
//! Each checkpoint consists of a block height and one accumulator value per
//! coin denomination, recorded as canonical by the network's maintainers.
//! While verifying a zerocoin spend, validation asks for the checkpoint at
//! the greatest recorded height at or below the spend's reference height,
//! and checks that the spend proof chains from that accumulator value.
//!
//! The checkpoint lists are hard-coded per network and distributed with
//! Sable. They are loaded once during startup; afterwards they are
//! immutable and queried concurrently by validation threads.

mod list;

pub use list::{Checkpoint, CheckpointList};
