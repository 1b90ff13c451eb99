//! Error type shared by address and prefix operations.

use thiserror::Error;

/// Failures raised by address parsing and prefix arithmetic.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NetError {
    /// Text input could not be parsed as an address or prefix.
    #[error("invalid format {input:?}: {reason}")]
    Format { input: String, reason: String },

    /// The operation has no implementation for this address family yet.
    #[error("{operation} is not implemented for IPv6")]
    Unsupported { operation: &'static str },

    /// Prefix length exceeds the bit width of the address family.
    #[error("invalid prefix length /{len}, maximum is /{max}")]
    InvalidPrefixLength { len: u8, max: u8 },

    /// Both operands must belong to the same address family.
    #[error("address family mismatch: IPv{left} vs IPv{right}")]
    FamilyMismatch { left: u8, right: u8 },
}

impl NetError {
    pub(crate) fn format(input: &str, reason: impl Into<String>) -> Self {
        NetError::Format {
            input: input.to_string(),
            reason: reason.into(),
        }
    }

    pub(crate) fn unsupported(operation: &'static str) -> Self {
        log::warn!("{operation} called on an IPv6 value");
        NetError::Unsupported { operation }
    }
}
