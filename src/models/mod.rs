//! Address and prefix value types.
//!
//! This module contains the core data structures of the crate:
//! - [`Address`] - IPv4 or IPv6 address
//! - [`Prefix`] - Address with a CIDR prefix length
//! - [`get_cidr_mask`] - IPv4 mask arithmetic shared by the prefix operations

mod address;
mod mask;
mod prefix;

// Re-export public types
pub use address::{Address, IPV4_BITS, IPV6_BITS};
pub use mask::get_cidr_mask;
pub use prefix::{str_to_addr, Prefix};
