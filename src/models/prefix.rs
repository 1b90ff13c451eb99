//! CIDR prefix: an [`Address`] with a prefix length.
//!
//! Provides strict containment, the longest common supernet of two prefixes, and the dotted
//! decimal parser used for textual input.

use super::address::Address;
use super::mask::{from_top_bits, get_cidr_mask, top_bits};
use crate::NetError;
use serde::de;
use serde::{Deserialize, Deserializer, Serialize};
use std::str::FromStr;

/// Parse a dotted decimal IPv4 address to its 32-bit value.
///
/// Requires exactly four parts, each an integer in `0..=255`.
///
/// # Examples
/// ```
/// use route_prefix::models::str_to_addr;
/// assert_eq!(str_to_addr("10.0.0.1").unwrap(), 0x0A000001);
/// assert!(str_to_addr("1.2.3").is_err());
/// ```
pub fn str_to_addr(x: &str) -> Result<u32, NetError> {
    let parts: Vec<&str> = x.split('.').collect();
    if parts.len() != 4 {
        log::debug!("str_to_addr({x:?}) rejected: {} parts", parts.len());
        return Err(NetError::format(
            x,
            format!("expected 4 dot-separated parts, got {}", parts.len()),
        ));
    }

    let mut octets = [0u8; 4];
    for (octet, part) in octets.iter_mut().zip(&parts) {
        let value: u32 = part
            .parse()
            .map_err(|e| NetError::format(x, format!("unable to convert {part:?} to int: {e}")))?;
        *octet = u8::try_from(value)
            .map_err(|_| NetError::format(x, format!("{value} is too big for an octet")))?;
    }

    Ok(u32::from_be_bytes(octets))
}

/// An address block in CIDR notation.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Prefix {
    addr: Address,
    pfxlen: u8,
}

impl Prefix {
    /// Pair an address and a length verbatim.
    ///
    /// The length is not checked here; arithmetic on an out-of-range prefix fails with
    /// [`NetError::InvalidPrefixLength`]. Use [`Prefix::new_checked`] to reject it up front.
    pub const fn new(addr: Address, pfxlen: u8) -> Prefix {
        Prefix { addr, pfxlen }
    }

    /// Like [`Prefix::new`], but rejects a length wider than the address family.
    pub fn new_checked(addr: Address, pfxlen: u8) -> Result<Prefix, NetError> {
        let pfx = Prefix { addr, pfxlen };
        pfx.validate()?;
        Ok(pfx)
    }

    pub const fn addr(&self) -> Address {
        self.addr
    }

    pub const fn pfxlen(&self) -> u8 {
        self.pfxlen
    }

    /// Check whether `x` is a strictly more specific subnet of `self`.
    ///
    /// A prefix never contains itself or anything of equal or shorter length.
    ///
    /// # Errors
    /// * [`NetError::FamilyMismatch`] if the prefixes belong to different families.
    /// * [`NetError::InvalidPrefixLength`] if either length exceeds the family width.
    /// * [`NetError::Unsupported`] for IPv6 prefixes.
    pub fn contains(&self, x: &Prefix) -> Result<bool, NetError> {
        self.check_operand(x)?;

        if x.pfxlen <= self.pfxlen {
            return Ok(false);
        }

        match self.addr {
            Address::V4(bits) => {
                let mask = get_cidr_mask(self.pfxlen)?;
                Ok(bits & mask == x.addr.to_u32() & mask)
            }
            Address::V6(_) => Err(NetError::unsupported("containment")),
        }
    }

    /// Most specific prefix covering both `self` and `x`.
    ///
    /// The result is always strictly shorter than the shorter input, so two sibling prefixes
    /// merge into their parent rather than into either of themselves. Anything involving a /0
    /// yields the /0 default route.
    ///
    /// # Examples
    /// ```
    /// use route_prefix::{Address, Prefix};
    /// let a = Prefix::new(Address::ipv4_from_octets(192, 168, 1, 0), 24);
    /// let b = Prefix::new(Address::ipv4_from_octets(192, 168, 2, 0), 24);
    /// assert_eq!(a.get_supernet(&b).unwrap().to_string(), "192.168.0.0/22");
    /// ```
    ///
    /// # Errors
    /// Same as [`Prefix::contains`].
    pub fn get_supernet(&self, x: &Prefix) -> Result<Prefix, NetError> {
        self.check_operand(x)?;

        match (self.addr, x.addr) {
            (Address::V4(a), Address::V4(b)) => Ok(self.supernet_ipv4(x, a, b)),
            _ => Err(NetError::unsupported("supernet")),
        }
    }

    fn supernet_ipv4(&self, x: &Prefix, a: u32, b: u32) -> Prefix {
        let mut max_pfxlen = self.pfxlen.min(x.pfxlen).saturating_sub(1);
        let mut a = top_bits(a, max_pfxlen);
        let mut b = top_bits(b, max_pfxlen);

        // Terminates at length 0, where both sides are empty.
        while a != b {
            a >>= 1;
            b >>= 1;
            max_pfxlen -= 1;
        }

        let supernet = Prefix {
            addr: Address::V4(from_top_bits(a, max_pfxlen)),
            pfxlen: max_pfxlen,
        };
        log::trace!("supernet of {self} and {x} is {supernet}");
        supernet
    }

    fn validate(&self) -> Result<(), NetError> {
        let max = self.addr.bit_len();
        if self.pfxlen > max {
            return Err(NetError::InvalidPrefixLength {
                len: self.pfxlen,
                max,
            });
        }
        Ok(())
    }

    fn check_operand(&self, x: &Prefix) -> Result<(), NetError> {
        if self.addr.version() != x.addr.version() {
            return Err(NetError::FamilyMismatch {
                left: self.addr.version(),
                right: x.addr.version(),
            });
        }
        self.validate()?;
        x.validate()
    }
}

impl std::fmt::Display for Prefix {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}/{}", self.addr, self.pfxlen)
    }
}

impl FromStr for Prefix {
    type Err = NetError;

    /// Parse `<address>/<length>`, rejecting lengths wider than the family.
    fn from_str(s: &str) -> Result<Prefix, NetError> {
        let (addr, len) = s
            .split_once('/')
            .ok_or_else(|| NetError::format(s, "expected <address>/<length>"))?;
        let addr = Address::from_str(addr)?;
        let pfxlen: u8 = len
            .parse()
            .map_err(|e| NetError::format(s, format!("invalid prefix length {len:?}: {e}")))?;
        Prefix::new_checked(addr, pfxlen)
    }
}

impl Serialize for Prefix {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Prefix {
    fn deserialize<D>(deserializer: D) -> Result<Prefix, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Prefix::from_str(&s).map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pfx(s: &str) -> Prefix {
        Prefix::from_str(s).unwrap()
    }

    #[test]
    fn test_str_to_addr() {
        assert_eq!(str_to_addr("0.0.0.0").unwrap(), 0);
        assert_eq!(str_to_addr("255.255.255.255").unwrap(), u32::MAX);
        assert_eq!(str_to_addr("192.168.1.2").unwrap(), 0xC0A80102);
    }

    #[test]
    fn test_str_to_addr_out_of_range() {
        let err = str_to_addr("256.0.0.1").unwrap_err();
        assert_eq!(
            err,
            NetError::Format {
                input: "256.0.0.1".to_string(),
                reason: "256 is too big for an octet".to_string(),
            }
        );
    }

    #[test]
    fn test_str_to_addr_wrong_part_count() {
        for input in ["1.2.3", "1.2.3.4.5", "", "1234"] {
            assert!(
                matches!(str_to_addr(input), Err(NetError::Format { .. })),
                "{input:?} should not parse"
            );
        }
    }

    #[test]
    fn test_str_to_addr_not_numeric() {
        for input in ["a.b.c.d", "1.2.3.x", "1..3.4", "-1.2.3.4", " 1.2.3.4"] {
            assert!(
                matches!(str_to_addr(input), Err(NetError::Format { .. })),
                "{input:?} should not parse"
            );
        }
    }

    #[test]
    fn test_accessors_and_display() {
        let p = Prefix::new(Address::ipv4_from_octets(10, 1, 0, 0), 16);
        assert_eq!(p.addr(), Address::ipv4_from_octets(10, 1, 0, 0));
        assert_eq!(p.pfxlen(), 16);
        assert_eq!(p.to_string(), "10.1.0.0/16");
        assert_eq!(p, pfx("10.1.0.0/16"));
        assert_ne!(p, pfx("10.1.0.0/17"));
    }

    #[test]
    fn test_new_checked() {
        assert!(Prefix::new_checked(Address::ipv4(0), 32).is_ok());
        assert_eq!(
            Prefix::new_checked(Address::ipv4(0), 33),
            Err(NetError::InvalidPrefixLength { len: 33, max: 32 })
        );
        assert!(Prefix::new_checked(Address::ipv6(0, 0), 128).is_ok());
        assert!(Prefix::new_checked(Address::ipv6(0, 0), 129).is_err());
    }

    #[test]
    fn test_contains() {
        let p8 = pfx("10.0.0.0/8");
        let p16 = pfx("10.1.0.0/16");
        assert!(p8.contains(&p16).unwrap());
        assert!(!p16.contains(&p8).unwrap());
        assert!(!p8.contains(&pfx("11.0.0.0/16")).unwrap());
        assert!(pfx("0.0.0.0/0").contains(&p8).unwrap());
        assert!(pfx("10.0.0.0/31").contains(&pfx("10.0.0.1/32")).unwrap());
    }

    #[test]
    fn test_contains_is_strict() {
        let p = pfx("10.0.0.0/8");
        assert!(!p.contains(&p).unwrap());
        assert!(!p.contains(&pfx("10.0.0.0/7")).unwrap());
        assert!(!pfx("0.0.0.0/0").contains(&pfx("0.0.0.0/0")).unwrap());
    }

    #[test]
    fn test_contains_errors() {
        let v4 = pfx("10.0.0.0/8");
        let v6 = pfx("2001:db8::/32");
        assert_eq!(
            v4.contains(&v6),
            Err(NetError::FamilyMismatch { left: 4, right: 6 })
        );
        assert_eq!(
            v6.contains(&pfx("2001:db8:1::/48")),
            Err(NetError::Unsupported {
                operation: "containment"
            })
        );
        let bogus = Prefix::new(Address::ipv4(0), 40);
        assert_eq!(
            v4.contains(&bogus),
            Err(NetError::InvalidPrefixLength { len: 40, max: 32 })
        );
    }

    #[test]
    fn test_get_supernet_siblings() {
        let a = pfx("192.168.1.0/24");
        let b = pfx("192.168.2.0/24");
        assert_eq!(a.get_supernet(&b).unwrap(), pfx("192.168.0.0/22"));

        let a = pfx("10.0.0.0/25");
        let b = pfx("10.0.0.128/25");
        assert_eq!(a.get_supernet(&b).unwrap(), pfx("10.0.0.0/24"));
    }

    #[test]
    fn test_get_supernet_is_shorter_than_inputs() {
        let a = pfx("10.0.0.0/24");
        assert_eq!(a.get_supernet(&a).unwrap(), pfx("10.0.0.0/23"));
        assert_eq!(
            a.get_supernet(&pfx("10.0.0.0/16")).unwrap(),
            pfx("10.0.0.0/15")
        );
    }

    #[test]
    fn test_get_supernet_disjoint() {
        let a = pfx("10.0.0.0/8");
        let b = pfx("192.168.0.0/16");
        assert_eq!(a.get_supernet(&b).unwrap(), pfx("0.0.0.0/0"));
        assert_eq!(
            pfx("0.0.0.0/0").get_supernet(&b).unwrap(),
            pfx("0.0.0.0/0")
        );
    }

    #[test]
    fn test_get_supernet_host_routes() {
        let a = pfx("172.16.5.1/32");
        let b = pfx("172.16.5.6/32");
        assert_eq!(a.get_supernet(&b).unwrap(), pfx("172.16.5.0/29"));
    }

    #[test]
    fn test_get_supernet_errors() {
        let v6 = pfx("2001:db8::/32");
        assert_eq!(
            v6.get_supernet(&pfx("2001:db8:1::/48")),
            Err(NetError::Unsupported {
                operation: "supernet"
            })
        );
        assert_eq!(
            v6.get_supernet(&pfx("10.0.0.0/8")),
            Err(NetError::FamilyMismatch { left: 6, right: 4 })
        );
    }

    #[test]
    fn test_from_str() {
        assert_eq!(
            pfx("10.0.0.0/8"),
            Prefix::new(Address::ipv4_from_octets(10, 0, 0, 0), 8)
        );
        assert_eq!(
            pfx("2001:db8::/32").to_string(),
            "2001:DB8:0:0:0:0:0:0/32"
        );
        assert!(Prefix::from_str("10.0.0.0").is_err());
        assert!(Prefix::from_str("10.0.0.0/33").is_err());
        assert!(Prefix::from_str("10.0.0.0/x").is_err());
        assert!(Prefix::from_str("10.0.0/8").is_err());
    }

    #[test]
    fn test_ordering() {
        let mut list = vec![pfx("10.1.0.0/16"), pfx("10.0.0.0/16"), pfx("10.0.0.0/8")];
        list.sort();
        assert_eq!(
            list,
            vec![pfx("10.0.0.0/8"), pfx("10.0.0.0/16"), pfx("10.1.0.0/16")]
        );
    }

    #[test]
    fn test_serde_as_string() {
        let p = pfx("10.20.0.0/14");
        let json = serde_json::to_string(&p).unwrap();
        assert_eq!(json, "\"10.20.0.0/14\"");
        let back: Prefix = serde_json::from_str(&json).unwrap();
        assert_eq!(back, p);
        assert!(serde_json::from_str::<Prefix>("\"10.20.0.0/40\"").is_err());
    }
}
