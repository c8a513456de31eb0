//! Domain models for the IPv4 visualiser.
//!
//! This module contains the value types everything else is computed from:
//! - [`Address`] - packed IPv4 address and its dotted-decimal parser
//! - [`AddrClass`] - classful category and default prefix
//! - [`AddressCategory`] - private / special-use / public
//! - [`PrefixLength`] - CIDR prefix and the subnet mask it implies

mod address;
mod category;
mod class;
mod error;
mod prefix;

// Re-export public types
pub use address::{parse_address, Address};
pub use category::{classify_type, AddressCategory};
pub use class::{class_of, default_prefix_for_class, AddrClass};
pub use error::AddrError;
pub use prefix::{compute_mask, PrefixLength, MAX_LENGTH};
