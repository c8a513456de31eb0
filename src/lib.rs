//! Visualise an IPv4 address, its class and subnet mask bit by bit.
//!
//! Everything is a pure function of a [`ViewInput`]: parse the address,
//! pick the prefix (class default or classless), derive the mask, label each
//! bit and octet as network or host, and classify the address type.
//!
//! - [`models`] - address, class, category, prefix and mask
//! - [`processing`] - bit rendering, random addresses, the view model
//! - [`output`] - terminal and JSON rendering
//! - [`interactive`] - stdin driven mode
//! - [`config`] - environment configuration and logging

pub mod config;
pub mod interactive;
pub mod models;
pub mod output;
pub mod processing;

pub use models::{
    class_of, classify_type, compute_mask, default_prefix_for_class, parse_address, AddrClass,
    AddrError, Address, AddressCategory, PrefixLength,
};
pub use processing::{
    compute_view, random_address, random_address_for, render_bits, render_octet_labels, ViewInput,
    ViewModel,
};
