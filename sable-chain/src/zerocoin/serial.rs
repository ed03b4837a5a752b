//! Zerocoin serial numbers.

use std::fmt;

use num_bigint::BigUint;

use crate::serialization::SerializationError;

/// A zerocoin serial number.
///
/// A serial number is derived from a shielded coin at spend time and
/// revealed in the spend, preventing the same coin from being spent twice.
/// A forged serial is one produced without a corresponding legitimate mint.
///
/// Serial numbers compare numerically: two sources that differ only in
/// leading zero padding denote the same serial.
#[derive(Clone, Eq, PartialEq, Hash)]
pub struct SerialNumber(BigUint);

impl SerialNumber {
    /// Parse a serial number from a decimal digit string.
    pub fn from_decimal_str(s: &str) -> Result<Self, SerializationError> {
        BigUint::parse_bytes(s.as_bytes(), 10)
            .map(SerialNumber)
            .ok_or(SerializationError::Parse(
                "serial number is not a decimal digit string",
            ))
    }

    /// Parse a serial number from a hexadecimal digit string,
    /// with or without a `0x` prefix.
    pub fn from_hex_str(s: &str) -> Result<Self, SerializationError> {
        let digits = s.strip_prefix("0x").unwrap_or(s);
        BigUint::parse_bytes(digits.as_bytes(), 16)
            .map(SerialNumber)
            .ok_or(SerializationError::Parse(
                "serial number is not a hexadecimal digit string",
            ))
    }
}

impl From<u64> for SerialNumber {
    fn from(serial: u64) -> Self {
        SerialNumber(BigUint::from(serial))
    }
}

impl fmt::Display for SerialNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Debug for SerialNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("SerialNumber")
            .field(&self.0.to_string())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serial_equality_is_numeric() {
        sable_test::init();

        let serial = SerialNumber::from_decimal_str("12345").unwrap();
        assert_eq!(serial, SerialNumber::from(12345u64));
        assert_eq!(serial, SerialNumber::from_decimal_str("0012345").unwrap());
        assert_eq!(serial, SerialNumber::from_hex_str("3039").unwrap());
        assert_ne!(serial, SerialNumber::from(12346u64));
    }
}
