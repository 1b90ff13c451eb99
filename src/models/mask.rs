//! IPv4 mask helpers shared by the prefix arithmetic.

use super::address::IPV4_BITS;
use crate::NetError;

/// Convert a prefix length to an IPv4 network mask.
///
/// A /0 mask is all zeros; shifting through a `u64` keeps the 32-bit shift defined.
///
/// # Examples
/// ```
/// use route_prefix::models::get_cidr_mask;
/// assert_eq!(get_cidr_mask(24).unwrap(), 0xFFFFFF00);
/// ```
pub fn get_cidr_mask(len: u8) -> Result<u32, NetError> {
    if len > IPV4_BITS {
        Err(NetError::InvalidPrefixLength {
            len,
            max: IPV4_BITS,
        })
    } else {
        let right_len = IPV4_BITS - len;
        let all_bits = u32::MAX as u64;

        let mask = (all_bits >> right_len) << right_len;

        Ok(mask as u32)
    }
}

/// Keep only the top `len` bits of `bits`, shifted down to the low end.
pub(crate) fn top_bits(bits: u32, len: u8) -> u32 {
    ((bits as u64) >> (IPV4_BITS - len)) as u32
}

/// Inverse of [`top_bits`]: move a `len`-bit value back to the top of the word.
pub(crate) fn from_top_bits(value: u32, len: u8) -> u32 {
    ((value as u64) << (IPV4_BITS - len)) as u32
}
