//! The whole visualiser state as a pure function of its input.
//!
//! A [`ViewInput`] carries everything the user controls; [`compute_view`]
//! turns it into a [`ViewModel`] that a presentation layer only has to draw.

use super::render::{
    class_glow_bits, group_bits, render_bits, render_octet_labels, BitGroups, OctetLabel,
};
use crate::models::{
    class_of, classify_type, compute_mask, default_prefix_for_class, parse_address, AddrClass,
    AddrError, Address, AddressCategory, PrefixLength,
};
use serde::Serialize;

/// What the user has entered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ViewInput {
    pub address_text: String,
    /// When false the prefix comes from the address class.
    pub classless_enabled: bool,
    /// Only used when `classless_enabled` is set.
    pub prefix_length: PrefixLength,
}

impl ViewInput {
    /// Classful input for `address_text`.
    pub fn classful(address_text: &str) -> Self {
        ViewInput {
            address_text: address_text.to_string(),
            classless_enabled: false,
            prefix_length: PrefixLength::default(),
        }
    }

    /// Classless input with an explicit prefix.
    pub fn classless(address_text: &str, prefix_length: PrefixLength) -> Self {
        ViewInput {
            address_text: address_text.to_string(),
            classless_enabled: true,
            prefix_length,
        }
    }
}

/// Everything needed to draw one address.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ViewModel {
    pub address: Address,
    pub class: AddrClass,
    pub classless: bool,
    /// Effective prefix: the class default unless classless.
    pub prefix_length: PrefixLength,
    pub mask: Address,
    pub category: AddressCategory,
    pub address_octets: [OctetLabel; 4],
    pub address_bits: BitGroups,
    pub mask_octets: [OctetLabel; 4],
    pub mask_bits: BitGroups,
    /// Leading bits of the address that identify its class.
    pub glow_bits: u8,
}

/// Prefix in effect for `class` under `input`.
pub fn effective_prefix(class: AddrClass, input: &ViewInput) -> PrefixLength {
    if input.classless_enabled {
        input.prefix_length
    } else {
        default_prefix_for_class(class)
    }
}

/// Compute the view for `input`.
///
/// An unparsable address yields [`AddrError::InvalidAddress`] and nothing
/// else, so callers never draw stale or partial data.
pub fn compute_view(input: &ViewInput) -> Result<ViewModel, AddrError> {
    let address = parse_address(&input.address_text)?;
    let class = class_of(address);
    let prefix_length = effective_prefix(class, input);
    let mask = compute_mask(prefix_length);

    log::trace!(
        "compute_view({}) class={class} prefix={prefix_length} mask={:#010x}",
        address,
        mask
    );

    Ok(ViewModel {
        address,
        class,
        classless: input.classless_enabled,
        prefix_length,
        mask: Address::new(mask),
        category: classify_type(address),
        address_octets: render_octet_labels(address.bits(), prefix_length),
        address_bits: group_bits(&render_bits(address.bits(), prefix_length)),
        mask_octets: render_octet_labels(mask, prefix_length),
        mask_bits: group_bits(&render_bits(mask, prefix_length)),
        glow_bits: class_glow_bits(address.first_octet()),
    })
}
