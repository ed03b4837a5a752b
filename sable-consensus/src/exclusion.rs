//! The fraud exclusion registry.
//!
//! A historical flaw in the zerocoin accumulator let serial numbers be
//! reused or fabricated, so already-spent or never-minted value appeared
//! spendable. Re-deriving which spends were fraudulent at validation time
//! would be expensive, and impossible once the exploited code path is gone;
//! instead, the affected network hard-codes the enumerated serial numbers
//! and transaction outputs once, and every future validation rejects them
//! by exact match.
//!
//! A spend that references an excluded serial or outpoint is invalid even
//! when its cryptographic proof verifies.

mod list;

pub use list::ExclusionList;
