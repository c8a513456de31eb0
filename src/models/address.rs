//! Dotted-decimal IPv4 address.
//!
//! Provides [`Address`], a packed 32-bit address, and [`parse_address`] which
//! accepts exactly four base-10 octets in `0..=255` and nothing else.

use super::AddrError;
use regex::Regex;
use serde::de;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

/// Four runs of ASCII digits separated by single dots.
static DOTTED_REGEX: OnceLock<Regex> = OnceLock::new();

fn get_dotted_regex() -> &'static Regex {
    // `\d` would also match non-ASCII digits.
    DOTTED_REGEX.get_or_init(|| {
        Regex::new(r"^([0-9]+)\.([0-9]+)\.([0-9]+)\.([0-9]+)$").expect("Invalid Regex")
    })
}

/// IPv4 address packed as `octet0<<24 | octet1<<16 | octet2<<8 | octet3`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Address(u32);

impl Address {
    pub const fn new(bits: u32) -> Self {
        Address(bits)
    }

    pub const fn from_octets(a: u8, b: u8, c: u8, d: u8) -> Self {
        Address(u32::from_be_bytes([a, b, c, d]))
    }

    /// The packed 32-bit value.
    pub const fn bits(self) -> u32 {
        self.0
    }

    /// Octets, most significant first.
    pub const fn octets(self) -> [u8; 4] {
        self.0.to_be_bytes()
    }

    pub const fn first_octet(self) -> u8 {
        self.octets()[0]
    }

    pub const fn second_octet(self) -> u8 {
        self.octets()[1]
    }
}

/// Parse a dotted-decimal string into an [`Address`].
///
/// Surrounding whitespace is ignored. Anything other than exactly four
/// decimal tokens each in `0..=255` is an [`AddrError::InvalidAddress`];
/// no partial result is produced.
///
/// # Examples
/// ```
/// use ipv4_class_viz::models::parse_address;
/// assert_eq!(parse_address("10.1.2.3").unwrap().bits(), 0x0A010203);
/// assert!(parse_address("256.1.1.1").is_err());
/// ```
pub fn parse_address(text: &str) -> Result<Address, AddrError> {
    let text = text.trim();
    let invalid = || {
        log::debug!("Rejecting address {text:?}");
        AddrError::InvalidAddress(text.to_string())
    };

    let caps = get_dotted_regex().captures(text).ok_or_else(invalid)?;
    let mut octets = [0u8; 4];
    for (i, octet) in octets.iter_mut().enumerate() {
        // Out of range (or absurdly long) tokens overflow u8.
        *octet = caps[i + 1].parse::<u8>().map_err(|_| invalid())?;
    }

    Ok(Address::from_octets(
        octets[0], octets[1], octets[2], octets[3],
    ))
}

impl FromStr for Address {
    type Err = AddrError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_address(s)
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let [a, b, c, d] = self.octets();
        write!(f, "{a}.{b}.{c}.{d}")
    }
}

impl Serialize for Address {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Address {
    fn deserialize<D>(deserializer: D) -> Result<Address, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        parse_address(&s).map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_address_packs_octets() {
        let addr = parse_address("192.168.10.42").unwrap();
        assert_eq!(addr.bits(), 0xC0A80A2A);
        assert_eq!(addr.octets(), [192, 168, 10, 42]);
        assert_eq!(addr.first_octet(), 192);
        assert_eq!(addr.second_octet(), 168);
    }

    #[test]
    fn test_parse_address_bounds() {
        assert_eq!(parse_address("0.0.0.0").unwrap().bits(), 0);
        assert_eq!(parse_address("255.255.255.255").unwrap().bits(), u32::MAX);
        assert_eq!(parse_address("  10.0.0.1 ").unwrap().to_string(), "10.0.0.1");
        assert_eq!(parse_address("010.001.0.7").unwrap().to_string(), "10.1.0.7");
    }

    #[test]
    fn test_parse_address_rejects() {
        let bad = [
            "",
            "256.1.1.1",
            "1.2.3",
            "1.2.3.4.5",
            "a.b.c.d",
            "1..2.3",
            "1.2.3.",
            "-1.2.3.4",
            "+1.2.3.4",
            "1.2.3.4/24",
            "1. 2.3.4",
            "0x1.2.3.4",
            "99999999999999999999.1.1.1",
            "١.2.3.4",
        ];
        for text in bad {
            assert_eq!(
                parse_address(text),
                Err(AddrError::InvalidAddress(text.trim().to_string())),
                "{text:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_round_trip_dotted_decimal() {
        for text in ["1.2.3.4", "127.0.0.1", "172.31.255.254", "224.0.0.251"] {
            let addr: Address = text.parse().unwrap();
            assert_eq!(addr.to_string(), text);
        }
    }

    #[test]
    fn test_serde_as_dotted_string() {
        let addr = Address::from_octets(10, 1, 2, 3);
        let json = serde_json::to_string(&addr).unwrap();
        assert_eq!(json, "\"10.1.2.3\"");
        let back: Address = serde_json::from_str(&json).unwrap();
        assert_eq!(back, addr);
        assert!(serde_json::from_str::<Address>("\"10.1.2\"").is_err());
    }
}
