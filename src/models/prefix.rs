//! IPv4 and IPv6 network prefixes.
//!
//! Provides [`Prefix`] for a network block in CIDR notation, along with the
//! functions that render an address as text, as a decimal integer and as
//! hexadecimal digits.

use crate::error::PrefixError;
use serde::de;
use serde::{Deserialize, Deserializer, Serialize};
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};
use std::str::FromStr;

/// Maximum prefix length for an IPv4 network (32 bits).
pub const MAX_LENGTH_V4: u8 = 32;
/// Maximum prefix length for an IPv6 network (128 bits).
pub const MAX_LENGTH_V6: u8 = 128;

/// The low `host_bits` bits set.
fn host_mask(host_bits: u8) -> u128 {
    u128::MAX.checked_shr(128 - u32::from(host_bits)).unwrap_or(0)
}

/// Convert a prefix length to a netmask for a `width`-bit address family.
///
/// The mask is right aligned in a `u128`, so for IPv4 only the low 32 bits
/// are meaningful.
///
/// # Examples
/// ```
/// use geoip_csv_converter::models::{get_cidr_mask, MAX_LENGTH_V4};
/// assert_eq!(get_cidr_mask(24, MAX_LENGTH_V4).unwrap(), 0xFFFFFF00);
/// ```
pub fn get_cidr_mask(len: u8, width: u8) -> Result<u128, PrefixError> {
    if len > width {
        return Err(PrefixError::LengthTooLong { len, max: width });
    }
    Ok(host_mask(width) & !host_mask(width - len))
}

/// Set every host bit of an IPv4 address.
pub fn last_addr_v4(addr: Ipv4Addr, len: u8) -> Result<Ipv4Addr, PrefixError> {
    let mask = get_cidr_mask(len, MAX_LENGTH_V4)? as u32;
    Ok(Ipv4Addr::from(u32::from(addr) | !mask))
}

/// Set every host bit of an IPv6 address.
pub fn last_addr_v6(addr: Ipv6Addr, len: u8) -> Result<Ipv6Addr, PrefixError> {
    let mask = get_cidr_mask(len, MAX_LENGTH_V6)?;
    Ok(Ipv6Addr::from(u128::from(addr) | !mask))
}

/// The address as one unsigned big-endian integer.
pub fn addr_to_u128(addr: IpAddr) -> u128 {
    match addr {
        IpAddr::V4(v4) => u128::from(u32::from(v4)),
        IpAddr::V6(v6) => u128::from(v6),
    }
}

/// Canonical text of an address: dotted-decimal for IPv4, RFC 5952
/// zero-compressed hextets for IPv6.
pub fn to_text(addr: IpAddr) -> String {
    addr.to_string()
}

/// Base 10 rendering of the address integer.
///
/// # Examples
/// ```
/// use geoip_csv_converter::models::to_decimal;
/// assert_eq!(to_decimal("1.1.1.0".parse().unwrap()), "16843008");
/// ```
pub fn to_decimal(addr: IpAddr) -> String {
    addr_to_u128(addr).to_string()
}

/// Lowercase base 16 rendering of the address integer, without `0x` or
/// leading zeros.
///
/// # Examples
/// ```
/// use geoip_csv_converter::models::to_hex;
/// assert_eq!(to_hex("1.1.1.0".parse().unwrap()), "1010100");
/// assert_eq!(to_hex("0.0.0.0".parse().unwrap()), "0");
/// ```
pub fn to_hex(addr: IpAddr) -> String {
    format!("{:x}", addr_to_u128(addr))
}

/// Parse the digits after the `/`. Signs, whitespace and leading zeros are
/// rejected.
fn parse_length(text: &str) -> Result<u8, PrefixError> {
    let well_formed = !text.is_empty()
        && text.bytes().all(|b| b.is_ascii_digit())
        && !(text.len() > 1 && text.starts_with('0'));
    if !well_formed {
        return Err(PrefixError::InvalidLength(text.to_string()));
    }
    text.parse()
        .map_err(|_| PrefixError::InvalidLength(text.to_string()))
}

/// A network block: an address plus a prefix length.
///
/// The family is fixed when the prefix is parsed. The address is kept as
/// written, so host bits present in the input survive in
/// [`Prefix::first_address`] and in the CIDR text.
#[derive(Eq, Debug, Copy, Clone, Hash, PartialEq)]
pub enum Prefix {
    V4 { addr: Ipv4Addr, len: u8 },
    V6 { addr: Ipv6Addr, len: u8 },
}

impl Prefix {
    /// Create a new [`Prefix`] from CIDR text (e.g. "10.0.0.0/24" or "2001:db8::/32").
    pub fn new(addr_cidr: &str) -> Result<Prefix, PrefixError> {
        let (addr, len) = addr_cidr
            .rsplit_once('/')
            .ok_or_else(|| PrefixError::MissingSlash(addr_cidr.to_string()))?;
        let addr: IpAddr = addr
            .parse()
            .map_err(|_| PrefixError::InvalidAddress(addr.to_string()))?;
        let len = parse_length(len)?;

        match addr {
            IpAddr::V4(addr) if len <= MAX_LENGTH_V4 => Ok(Prefix::V4 { addr, len }),
            IpAddr::V6(addr) if len <= MAX_LENGTH_V6 => Ok(Prefix::V6 { addr, len }),
            IpAddr::V4(_) => Err(PrefixError::LengthTooLong {
                len,
                max: MAX_LENGTH_V4,
            }),
            IpAddr::V6(_) => Err(PrefixError::LengthTooLong {
                len,
                max: MAX_LENGTH_V6,
            }),
        }
    }

    /// The prefix length in bits.
    pub fn prefix_len(&self) -> u8 {
        match self {
            Prefix::V4 { len, .. } | Prefix::V6 { len, .. } => *len,
        }
    }

    /// Width of the address family in bits.
    pub fn max_length(&self) -> u8 {
        match self {
            Prefix::V4 { .. } => MAX_LENGTH_V4,
            Prefix::V6 { .. } => MAX_LENGTH_V6,
        }
    }

    /// The lowest address in the block, as given in the input.
    pub fn first_address(&self) -> IpAddr {
        match self {
            Prefix::V4 { addr, .. } => IpAddr::V4(*addr),
            Prefix::V6 { addr, .. } => IpAddr::V6(*addr),
        }
    }

    /// The highest address in the block: every bit past the prefix length set.
    pub fn last_address(&self) -> IpAddr {
        // len never exceeds the family width once constructed
        match *self {
            Prefix::V4 { addr, len } => {
                IpAddr::V4(last_addr_v4(addr, len).unwrap_or(Ipv4Addr::BROADCAST))
            }
            Prefix::V6 { addr, len } => {
                IpAddr::V6(last_addr_v6(addr, len).unwrap_or(Ipv6Addr::from(u128::MAX)))
            }
        }
    }

    /// The canonical `address/length` text.
    pub fn to_cidr_text(&self) -> String {
        self.to_string()
    }
}

impl FromStr for Prefix {
    type Err = PrefixError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Prefix::new(s)
    }
}

impl std::fmt::Display for Prefix {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}/{}", to_text(self.first_address()), self.prefix_len())
    }
}

impl Serialize for Prefix {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.serialize_str(&self.to_cidr_text())
    }
}

impl<'de> Deserialize<'de> for Prefix {
    fn deserialize<D>(deserializer: D) -> Result<Prefix, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Prefix::new(&s).map_err(de::Error::custom)
    }
}
