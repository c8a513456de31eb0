//! Network/host labelling of the bits and octets of a 32-bit value.

use crate::models::PrefixLength;
use serde::Serialize;

/// Bits per octet.
pub const OCTET_BITS: u8 = 8;

/// Which side of the prefix boundary a bit or octet falls on.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Portion {
    Network,
    Host,
    /// Octet split by the prefix boundary.
    Mixed,
}

/// One decimal octet of an address or mask, labelled for display.
#[derive(Debug, Copy, Clone, PartialEq, Serialize)]
pub struct OctetLabel {
    pub value: u8,
    pub portion: Portion,
    /// Fraction of the octet's bits that are network bits, only for [`Portion::Mixed`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mix_ratio: Option<f64>,
}

impl OctetLabel {
    /// Mix ratio as a whole percentage.
    pub fn mix_percent(&self) -> Option<u8> {
        self.mix_ratio.map(|ratio| (ratio * 100.0).round() as u8)
    }
}

/// One bit of a 32-bit value.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct BitLabel {
    /// 0 or 1
    pub value: u8,
    pub is_network: bool,
}

/// 32 bits grouped by octet, most significant first.
pub type BitGroups = [[BitLabel; 8]; 4];

/// How many of octet `octet_index`'s bits lie within the first `prefix` bits.
pub fn net_bits_in_octet(octet_index: usize, prefix: PrefixLength) -> u8 {
    let start = octet_index as i64 * OCTET_BITS as i64;
    (prefix.get() as i64 - start).clamp(0, OCTET_BITS as i64) as u8
}

/// Label each of the four octets of `value` as network, host or mixed.
pub fn render_octet_labels(value: u32, prefix: PrefixLength) -> [OctetLabel; 4] {
    let octets = value.to_be_bytes();
    std::array::from_fn(|i| {
        let net_bits = net_bits_in_octet(i, prefix);
        let (portion, mix_ratio) = match net_bits {
            OCTET_BITS => (Portion::Network, None),
            0 => (Portion::Host, None),
            n => (Portion::Mixed, Some(n as f64 / OCTET_BITS as f64)),
        };
        OctetLabel {
            value: octets[i],
            portion,
            mix_ratio,
        }
    })
}

/// Label each bit of `value`; index 0 is the most significant bit.
pub fn render_bits(value: u32, prefix: PrefixLength) -> [BitLabel; 32] {
    std::array::from_fn(|i| BitLabel {
        value: ((value >> (31 - i)) & 1) as u8,
        is_network: i < prefix.get() as usize,
    })
}

/// Split a bit row into four octet groups.
pub fn group_bits(bits: &[BitLabel; 32]) -> BitGroups {
    std::array::from_fn(|g| std::array::from_fn(|b| bits[g * OCTET_BITS as usize + b]))
}

/// Number of leading bits of the first octet that decide the class:
/// 1 for A (`0`), 2 for B (`10`), 3 for C (`110`), 0 otherwise.
pub fn class_glow_bits(first_octet: u8) -> u8 {
    match first_octet.leading_ones() {
        0 => 1,
        1 => 2,
        2 => 3,
        _ => 0,
    }
}
