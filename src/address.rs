//! Addresses of functions to be decompiled.

use std::fmt;
use std::str::FromStr;

use regex::Regex;

use error::Error;
use error::ErrorKind;
use error::Result;

/// An address inside a function (e.g. `0x1000` or `4096`).
///
/// The address keeps the textual form in which it was given because that is
/// how it is passed to the plugin's script.
///
/// # Examples
///
/// ```
/// use retdec_ida::address::Address;
///
/// let addr: Address = "0x1040".parse().unwrap();
///
/// assert_eq!(addr.value(), 0x1040);
/// assert_eq!(addr.as_str(), "0x1040");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Address {
    value: u64,
    repr: String,
}

impl Address {
    /// Parses an address given either in decimal or in hexadecimal (with the
    /// `0x` or `0X` prefix).
    pub fn parse(s: &str) -> Result<Address> {
        let addr_regex = Regex::new(r"^(?:0[xX](?P<hex>[0-9a-fA-F]+)|(?P<dec>[0-9]+))$")
            .expect("invalid regexp - this should never happen");
        let captures = addr_regex.captures(s)
            .ok_or_else(|| Self::invalid(s, "expected a decimal or hexadecimal number"))?;
        let value = if let Some(hex) = captures.name("hex") {
            u64::from_str_radix(hex.as_str(), 16)
        } else {
            captures["dec"].parse::<u64>()
        };
        let value = value
            .map_err(|_| Self::invalid(s, "it does not fit into 64 bits"))?;
        Ok(Address { value: value, repr: s.to_string() })
    }

    /// Returns the numeric value of the address.
    pub fn value(&self) -> u64 {
        self.value
    }

    /// Returns the address as it was given.
    pub fn as_str(&self) -> &str {
        &self.repr
    }

    /// Does the address fit into a 32-bit address space?
    pub fn fits_in_32_bits(&self) -> bool {
        self.value <= u64::from(u32::MAX)
    }

    fn invalid(s: &str, reason: &str) -> Error {
        ErrorKind::Usage(format!("invalid address '{}': {}", s, reason)).into()
    }
}

impl FromStr for Address {
    type Err = Error;

    fn from_str(s: &str) -> Result<Address> {
        Address::parse(s)
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.repr)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn address_parse_accepts_decimal_number() {
        let addr = Address::parse("4096").expect("expected parse() to succeed");

        assert_eq!(addr.value(), 4096);
        assert_eq!(addr.as_str(), "4096");
    }

    #[test]
    fn address_parse_accepts_hexadecimal_number_with_either_prefix() {
        assert_eq!(Address::parse("0x1000").unwrap().value(), 0x1000);
        assert_eq!(Address::parse("0XaBc").unwrap().value(), 0xabc);
    }

    #[test]
    fn address_keeps_original_spelling() {
        let addr = Address::parse("0x00401000").unwrap();

        assert_eq!(addr.to_string(), "0x00401000");
    }

    #[test]
    fn address_parse_rejects_garbage() {
        for s in &["", "0x", "x10", "12ab", "-1", "0x1000 ", "main"] {
            let err = Address::parse(s).err().expect("expected parse() to fail");
            match *err.kind() {
                ErrorKind::Usage(ref msg) => assert!(msg.contains("invalid address")),
                ref kind => panic!("unexpected error kind: {:?}", kind),
            }
        }
    }

    #[test]
    fn address_parse_rejects_number_not_fitting_into_64_bits() {
        let result = Address::parse("0x10000000000000000");

        let err = result.err().expect("expected parse() to fail");
        assert!(err.to_string().contains("64 bits"));
    }

    #[test]
    fn address_fits_in_32_bits_checks_upper_bound() {
        assert!(Address::parse("0xffffffff").unwrap().fits_in_32_bits());
        assert!(!Address::parse("0x100000000").unwrap().fits_in_32_bits());
    }
}
