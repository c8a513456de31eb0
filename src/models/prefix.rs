//! Prefix length and subnet mask.
//!
//! Provides [`PrefixLength`], a CIDR prefix always held in `0..=32`, and
//! [`compute_mask`] which turns it into a 32-bit subnet mask.

use serde::Serialize;
use std::fmt;

/// Maximum length for an IPv4 subnet mask (32 bits).
pub const MAX_LENGTH: u8 = 32;

/// Number of leading network bits, in `0..=32`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize)]
#[serde(transparent)]
pub struct PrefixLength(u8);

impl PrefixLength {
    /// `None` if `len` is above 32.
    pub const fn new(len: u8) -> Option<Self> {
        if len > MAX_LENGTH {
            None
        } else {
            Some(PrefixLength(len))
        }
    }

    /// Clamp any integer into `0..=32`.
    pub fn clamped(len: i64) -> Self {
        PrefixLength(len.clamp(0, MAX_LENGTH as i64) as u8)
    }

    /// Coerce raw user text the way the prefix field does: non-numbers
    /// become 0, fractions are truncated, everything (infinities too) is clamped.
    pub fn from_input(text: &str) -> Self {
        match text.trim().parse::<f64>() {
            Ok(v) if !v.is_nan() => PrefixLength(v.clamp(0.0, MAX_LENGTH as f64) as u8),
            _ => PrefixLength(0),
        }
    }

    pub const fn get(self) -> u8 {
        self.0
    }
}

impl fmt::Display for PrefixLength {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "/{}", self.0)
    }
}

/// Convert a prefix length to a subnet mask.
///
/// The shift is done in 64 bits so /0 and /32 need no special casing.
///
/// # Examples
/// ```
/// use ipv4_class_viz::models::{compute_mask, PrefixLength};
/// assert_eq!(compute_mask(PrefixLength::clamped(24)), 0xFFFFFF00);
/// ```
pub fn compute_mask(prefix: PrefixLength) -> u32 {
    let right_len = MAX_LENGTH - prefix.get();
    let all_bits = u32::MAX as u64;

    let mask = (all_bits >> right_len) << right_len;

    mask as u32
}
