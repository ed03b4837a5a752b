//! Accumulator values.

use std::fmt;

use num_bigint::BigUint;
use num_traits::Zero;

use crate::serialization::SerializationError;

/// The cryptographic accumulator state for one denomination at one
/// checkpoint height.
///
/// Accumulator values are arbitrary-precision non-negative integers,
/// hundreds of decimal digits long. They are opaque to this crate beyond
/// their numeric identity: equality and serialization are the only
/// supported operations.
///
/// The numeric base of a textual source is always the caller's explicit
/// choice ([`from_decimal_str`](Self::from_decimal_str) or
/// [`from_hex_str`](Self::from_hex_str)), never guessed from the text.
#[derive(Clone, Eq, PartialEq, Hash)]
pub struct AccumulatorValue(BigUint);

impl AccumulatorValue {
    /// Parse an accumulator value from a decimal digit string.
    pub fn from_decimal_str(s: &str) -> Result<Self, SerializationError> {
        BigUint::parse_bytes(s.as_bytes(), 10)
            .map(AccumulatorValue)
            .ok_or(SerializationError::Parse(
                "accumulator value is not a decimal digit string",
            ))
    }

    /// Parse an accumulator value from a hexadecimal digit string,
    /// with or without a `0x` prefix.
    pub fn from_hex_str(s: &str) -> Result<Self, SerializationError> {
        let digits = s.strip_prefix("0x").unwrap_or(s);
        BigUint::parse_bytes(digits.as_bytes(), 16)
            .map(AccumulatorValue)
            .ok_or(SerializationError::Parse(
                "accumulator value is not a hexadecimal digit string",
            ))
    }

    /// Returns `true` if this is the empty accumulator state.
    ///
    /// A zero accumulator only occurs in the checkpoint recorded at
    /// activation, before any coin has been accumulated. Callers must never
    /// fabricate one as a stand-in for a missing checkpoint.
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

impl fmt::Display for AccumulatorValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Debug for AccumulatorValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("AccumulatorValue")
            .field(&self.0.to_string())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_base_parsing() {
        sable_test::init();

        let dec = AccumulatorValue::from_decimal_str("255").unwrap();
        let hex = AccumulatorValue::from_hex_str("ff").unwrap();
        let hex_prefixed = AccumulatorValue::from_hex_str("0xff").unwrap();
        assert_eq!(dec, hex);
        assert_eq!(dec, hex_prefixed);

        // equality is numeric, so leading zeros in the source collapse
        assert_eq!(
            AccumulatorValue::from_decimal_str("000255").unwrap(),
            dec,
        );

        // bases are never mixed or guessed
        AccumulatorValue::from_decimal_str("ff").unwrap_err();
        AccumulatorValue::from_decimal_str("").unwrap_err();
        AccumulatorValue::from_hex_str("0xzz").unwrap_err();
    }

    #[test]
    fn zero_accumulator() {
        sable_test::init();

        assert!(AccumulatorValue::from_decimal_str("0").unwrap().is_zero());
        assert!(!AccumulatorValue::from_decimal_str("1").unwrap().is_zero());
    }
}
