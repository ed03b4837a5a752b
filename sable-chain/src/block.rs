//! Blocks, and their components.
//!
//! Only the parts of a block that this core consumes are defined here:
//! currently just the block height.

mod height;

pub use height::Height;
