//! Computation on top of the models.
//!
//! - [`render`] - network/host labelling of bits and octets
//! - [`random`] - random addresses per class
//! - [`view`] - the full view for one user input

pub mod random;
pub mod render;
mod view;

// Re-export public functions
pub use random::{random_address, random_address_for};
pub use render::{
    class_glow_bits, render_bits, render_octet_labels, BitLabel, OctetLabel, Portion,
};
pub use view::{compute_view, effective_prefix, ViewInput, ViewModel};
