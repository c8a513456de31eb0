//! Errors produced by the address model.

use super::AddrClass;
use thiserror::Error;

/// Address errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AddrError {
    /// Input is not four dot-separated integers in 0-255
    #[error("Invalid address: {0:?}")]
    InvalidAddress(String),

    /// Random generation is only defined for the unicast classes
    #[error("Cannot generate a random address for class {0} (use A, B or C)")]
    UnsupportedClass(AddrClass),
}
