//! Random demonstration addresses for the unicast classes.

use crate::models::{AddrClass, AddrError, Address};
use rand::Rng;
use std::ops::RangeInclusive;

/// First-octet range used when generating an address of `class`.
///
/// Class A skips 0 and 127. D and E have no generator.
pub fn first_octet_range(class: AddrClass) -> Option<RangeInclusive<u8>> {
    match class {
        AddrClass::A => Some(1..=126),
        AddrClass::B => Some(128..=191),
        AddrClass::C => Some(192..=223),
        AddrClass::D | AddrClass::E => None,
    }
}

/// Draw a random address of `class` from `rng`.
///
/// The last octet avoids the all-zero and broadcast host values.
pub fn random_address<R: Rng + ?Sized>(class: AddrClass, rng: &mut R) -> Option<Address> {
    let first = first_octet_range(class)?;
    Some(Address::from_octets(
        rng.gen_range(first),
        rng.gen(),
        rng.gen(),
        rng.gen_range(1..=254),
    ))
}

/// [`random_address`] with the thread-local generator.
pub fn random_address_for(class: AddrClass) -> Result<Address, AddrError> {
    let addr = random_address(class, &mut rand::thread_rng())
        .ok_or(AddrError::UnsupportedClass(class))?;
    log::debug!("random_address_for({class}) = {addr}");
    Ok(addr)
}
