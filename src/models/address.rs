//! Dual-stack IP address value type.
//!
//! [`Address`] holds either a 32-bit IPv4 or a 128-bit IPv6 address. The family is the enum
//! variant, so IPv4 values can never pick up stray high bits.

use super::prefix::str_to_addr;
use crate::NetError;
use serde::de;
use serde::{Deserialize, Deserializer, Serialize};
use std::cmp::Ordering;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};
use std::str::FromStr;

/// Bit width of an IPv4 address.
pub const IPV4_BITS: u8 = 32;
/// Bit width of an IPv6 address.
pub const IPV6_BITS: u8 = 128;

/// An IPv4 or IPv6 address.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Address {
    V4(u32),
    V6(u128),
}

impl Address {
    /// IPv4 address from its 32-bit value.
    pub const fn ipv4(val: u32) -> Address {
        Address::V4(val)
    }

    /// IPv4 address from four octets, most significant first.
    ///
    /// # Examples
    /// ```
    /// use route_prefix::Address;
    /// assert_eq!(Address::ipv4_from_octets(10, 0, 0, 1).to_u32(), 0x0A000001);
    /// ```
    pub const fn ipv4_from_octets(o1: u8, o2: u8, o3: u8, o4: u8) -> Address {
        Address::V4((o1 as u32) << 24 | (o2 as u32) << 16 | (o3 as u32) << 8 | o4 as u32)
    }

    /// IPv6 address from its high and low 64-bit words.
    pub const fn ipv6(higher: u64, lower: u64) -> Address {
        Address::V6((higher as u128) << 64 | lower as u128)
    }

    /// IPv6 address from eight 16-bit blocks, most significant first.
    pub fn ipv6_from_blocks(blocks: [u16; 8]) -> Address {
        let bits = blocks
            .iter()
            .fold(0u128, |acc, block| acc << 16 | *block as u128);
        Address::V6(bits)
    }

    /// Address family: 4 or 6.
    pub const fn version(&self) -> u8 {
        match self {
            Address::V4(_) => 4,
            Address::V6(_) => 6,
        }
    }

    /// Number of bits in an address of this family.
    pub const fn bit_len(&self) -> u8 {
        match self {
            Address::V4(_) => IPV4_BITS,
            Address::V6(_) => IPV6_BITS,
        }
    }

    /// High 64-bit word. Always zero for IPv4.
    pub const fn higher(&self) -> u64 {
        match self {
            Address::V4(_) => 0,
            Address::V6(bits) => (*bits >> 64) as u64,
        }
    }

    /// Low 64-bit word. IPv4 values occupy its low 32 bits.
    pub const fn lower(&self) -> u64 {
        match self {
            Address::V4(bits) => *bits as u64,
            Address::V6(bits) => *bits as u64,
        }
    }

    /// The rightmost 32 bits of the address, whatever the family.
    pub const fn to_u32(&self) -> u32 {
        self.lower() as u32
    }

    /// Three-way comparison: 0 if equal, 1 if `self` is greater, -1 otherwise.
    ///
    /// Words are compared most significant first. Comparing across families is
    /// mechanically defined but carries no meaning.
    pub fn compare(&self, other: &Address) -> i8 {
        match self.cmp(other) {
            Ordering::Less => -1,
            Ordering::Equal => 0,
            Ordering::Greater => 1,
        }
    }

    /// Network byte order representation: 4 bytes for IPv4, 16 for IPv6.
    pub fn bytes(&self) -> Vec<u8> {
        match self {
            Address::V4(bits) => bits.to_be_bytes().to_vec(),
            Address::V6(bits) => bits.to_be_bytes().to_vec(),
        }
    }

    /// Value of bit `pos`, counted from 1 at the most significant bit.
    ///
    /// Positions outside `1..=32` read as `false` for IPv4.
    ///
    /// # Errors
    /// * [`NetError::Unsupported`] for IPv6 addresses.
    pub fn bit_at_position(&self, pos: u8) -> Result<bool, NetError> {
        match self {
            Address::V4(bits) => {
                if pos == 0 || pos > IPV4_BITS {
                    return Ok(false);
                }
                Ok(*bits & (1 << (IPV4_BITS - pos)) != 0)
            }
            Address::V6(_) => Err(NetError::unsupported("bit inspection")),
        }
    }

    /// Convert to the standard library address type.
    pub fn to_std(&self) -> IpAddr {
        match self {
            Address::V4(bits) => IpAddr::V4(Ipv4Addr::from(*bits)),
            Address::V6(bits) => IpAddr::V6(Ipv6Addr::from(*bits)),
        }
    }
}

impl Ord for Address {
    fn cmp(&self, other: &Address) -> Ordering {
        self.higher()
            .cmp(&other.higher())
            .then_with(|| self.lower().cmp(&other.lower()))
            .then_with(|| self.version().cmp(&other.version()))
    }
}

impl PartialOrd for Address {
    fn partial_cmp(&self, other: &Address) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl std::fmt::Display for Address {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Address::V4(bits) => {
                let [a, b, c, d] = bits.to_be_bytes();
                write!(f, "{a}.{b}.{c}.{d}")
            }
            Address::V6(bits) => {
                // Full eight groups, no zero-run elision.
                let groups: Vec<String> = (0..8)
                    .rev()
                    .map(|i| format!("{:X}", (*bits >> (i * 16)) as u16))
                    .collect();
                write!(f, "{}", groups.join(":"))
            }
        }
    }
}

impl FromStr for Address {
    type Err = NetError;

    /// Dotted decimal for IPv4, any standard textual form for IPv6.
    fn from_str(s: &str) -> Result<Address, NetError> {
        if s.contains(':') {
            let addr = Ipv6Addr::from_str(s)
                .map_err(|e| NetError::format(s, format!("not an IPv6 address: {e}")))?;
            Ok(Address::from(addr))
        } else {
            Ok(Address::V4(str_to_addr(s)?))
        }
    }
}

impl From<Ipv4Addr> for Address {
    fn from(addr: Ipv4Addr) -> Address {
        Address::V4(u32::from(addr))
    }
}

impl From<Ipv6Addr> for Address {
    fn from(addr: Ipv6Addr) -> Address {
        Address::V6(u128::from(addr))
    }
}

impl From<IpAddr> for Address {
    fn from(addr: IpAddr) -> Address {
        match addr {
            IpAddr::V4(v4) => v4.into(),
            IpAddr::V6(v6) => v6.into(),
        }
    }
}

impl From<Address> for IpAddr {
    fn from(addr: Address) -> IpAddr {
        addr.to_std()
    }
}

impl Serialize for Address {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Address {
    fn deserialize<D>(deserializer: D) -> Result<Address, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Address::from_str(&s).map_err(de::Error::custom)
    }
}
