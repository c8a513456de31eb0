//! Classful addressing (A/B/C/D/E).

use super::{Address, PrefixLength};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Legacy address class, derived from the leading bits of the first octet.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize)]
pub enum AddrClass {
    A,
    B,
    C,
    D,
    E,
}

/// Classify an address by its first octet.
pub fn class_of(address: Address) -> AddrClass {
    match address.first_octet() {
        0..=127 => AddrClass::A,
        128..=191 => AddrClass::B,
        192..=223 => AddrClass::C,
        224..=239 => AddrClass::D,
        _ => AddrClass::E,
    }
}

/// Default network prefix implied by a class.
///
/// D and E have no standard default; they get /24 for display only.
pub fn default_prefix_for_class(class: AddrClass) -> PrefixLength {
    let len = match class {
        AddrClass::A => 8,
        AddrClass::B => 16,
        AddrClass::C | AddrClass::D | AddrClass::E => 24,
    };
    PrefixLength::clamped(len)
}

impl fmt::Display for AddrClass {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let tag = match self {
            AddrClass::A => "A",
            AddrClass::B => "B",
            AddrClass::C => "C",
            AddrClass::D => "D",
            AddrClass::E => "E",
        };
        f.write_str(tag)
    }
}

impl FromStr for AddrClass {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "A" => Ok(AddrClass::A),
            "B" => Ok(AddrClass::B),
            "C" => Ok(AddrClass::C),
            "D" => Ok(AddrClass::D),
            "E" => Ok(AddrClass::E),
            other => Err(format!("unknown address class {other:?}")),
        }
    }
}
