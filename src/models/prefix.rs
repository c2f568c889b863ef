//! IPv4/IPv6 prefix type and CIDR utilities.
//!
//! Provides [`Prefix`] for representing a masked network address with its
//! prefix length, along with the mask helpers used by the trie and the
//! aggregation passes. Addresses of both families are held in a `u128`; IPv4
//! addresses occupy the low 32 bits.

use crate::error::InvalidPrefix;
use regex::Regex;
use serde::de;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};
use std::str::FromStr;
use std::sync::OnceLock;

/// Maximum length for an IPv4 prefix (32 bits).
pub const MAX_LENGTH_V4: u8 = 32;
/// Maximum length for an IPv6 prefix (128 bits).
pub const MAX_LENGTH_V6: u8 = 128;

/// Prefix lengths are plain decimal digits, no sign and no whitespace.
static LENGTH_REGEX: OnceLock<Regex> = OnceLock::new();

fn get_length_regex() -> &'static Regex {
    LENGTH_REGEX.get_or_init(|| Regex::new(r"^[0-9]{1,3}$").expect("Invalid Regex"))
}

/// Address family. IPv4 sorts before IPv6.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Family {
    V4,
    V6,
}

impl Family {
    /// Address width in bits.
    pub fn max_length(self) -> u8 {
        match self {
            Family::V4 => MAX_LENGTH_V4,
            Family::V6 => MAX_LENGTH_V6,
        }
    }

    /// Family of a standard library address.
    pub fn of(addr: &IpAddr) -> Family {
        match addr {
            IpAddr::V4(_) => Family::V4,
            IpAddr::V6(_) => Family::V6,
        }
    }

    /// All bits of the family's address width set.
    fn all_bits(self) -> u128 {
        u128::MAX >> (MAX_LENGTH_V6 - self.max_length())
    }
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Family::V4 => write!(f, "IPv4"),
            Family::V6 => write!(f, "IPv6"),
        }
    }
}

/// Convert a prefix length to a network mask for the given family.
///
/// # Examples
/// ```
/// use prefix_aggregate::models::{get_cidr_mask, Family};
/// assert_eq!(get_cidr_mask(Family::V4, 24).unwrap(), 0xFFFF_FF00);
/// ```
pub fn get_cidr_mask(family: Family, len: u8) -> Result<u128, InvalidPrefix> {
    let width = family.max_length();
    if len > width {
        return Err(InvalidPrefix::Length { family, len });
    }
    if len == 0 {
        return Ok(0);
    }
    let right_len = width - len;
    Ok((family.all_bits() >> right_len) << right_len)
}

/// Get the network address for a given address and prefix length.
pub fn cut_addr(family: Family, addr: u128, len: u8) -> Result<u128, InvalidPrefix> {
    Ok(addr & get_cidr_mask(family, len)?)
}

/// A network address with its prefix length, host bits always zero.
///
/// Ordering is by family, then numeric address, then length.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Prefix {
    family: Family,
    addr: u128,
    len: u8,
}

impl Prefix {
    /// Build a prefix from raw parts, masking off any host bits.
    pub fn new(family: Family, addr: u128, len: u8) -> Result<Prefix, InvalidPrefix> {
        if addr > family.all_bits() {
            return Err(InvalidPrefix::Address { family, addr });
        }
        let addr = cut_addr(family, addr, len)?;
        Ok(Prefix { family, addr, len })
    }

    /// Build a prefix from an [`IpAddr`], masking off any host bits.
    pub fn from_ip(ip: IpAddr, len: u8) -> Result<Prefix, InvalidPrefix> {
        match ip {
            IpAddr::V4(addr) => Prefix::new(Family::V4, u32::from(addr) as u128, len),
            IpAddr::V6(addr) => Prefix::new(Family::V6, u128::from(addr), len),
        }
    }

    /// Parse `addr/len` (or a bare address), masking host bits instead of
    /// rejecting them.
    pub fn parse_truncate(s: &str) -> Result<Prefix, InvalidPrefix> {
        let (ip, len) = parse_parts(s)?;
        Prefix::from_ip(ip, len)
    }

    pub fn family(&self) -> Family {
        self.family
    }

    /// Numeric network address.
    pub fn addr(&self) -> u128 {
        self.addr
    }

    /// Prefix length in bits.
    pub fn length(&self) -> u8 {
        self.len
    }

    /// Network address as a standard library address.
    pub fn network(&self) -> IpAddr {
        match self.family {
            Family::V4 => IpAddr::V4(Ipv4Addr::from(self.addr as u32)),
            Family::V6 => IpAddr::V6(Ipv6Addr::from(self.addr)),
        }
    }

    /// Highest address in the prefix.
    pub fn last(&self) -> u128 {
        let host_bits = self.family.all_bits().checked_shr(self.len.into()).unwrap_or(0);
        self.addr | host_bits
    }

    /// Bit `i` of the address, counted from the most significant bit.
    /// `i` must be below the family's address width.
    pub(crate) fn bit(&self, i: u8) -> bool {
        debug_assert!(i < self.family.max_length(), "bit {i} out of range");
        let shift = self.family.max_length() - 1 - i;
        (self.addr >> shift) & 1 == 1
    }

    /// The prefix one bit shorter that contains this one; `None` for `/0`.
    pub fn parent(&self) -> Option<Prefix> {
        let len = self.len.checked_sub(1)?;
        let mask = get_cidr_mask(self.family, len).ok()?;
        Some(Prefix {
            family: self.family,
            addr: self.addr & mask,
            len,
        })
    }

    /// True when `other` lies entirely within this prefix.
    pub fn contains(&self, other: &Prefix) -> bool {
        self.family == other.family
            && self.len <= other.len
            && cut_addr(self.family, other.addr, self.len) == Ok(self.addr)
    }
}

/// Split `addr/len` into its address and length; a bare address gets the
/// full family width.
fn parse_parts(s: &str) -> Result<(IpAddr, u8), InvalidPrefix> {
    let s = s.trim();
    let syntax = || InvalidPrefix::Syntax(s.to_string());

    let (addr_str, len_str) = match s.split_once('/') {
        Some((addr, len)) => (addr, Some(len)),
        None => (s, None),
    };
    let addr: IpAddr = addr_str.parse().map_err(|_| syntax())?;
    let family = Family::of(&addr);

    let len = match len_str {
        Some(len) if get_length_regex().is_match(len) => len.parse::<u8>().map_err(|_| syntax())?,
        Some(_) => return Err(syntax()),
        None => family.max_length(),
    };
    if len > family.max_length() {
        return Err(InvalidPrefix::Length { family, len });
    }
    Ok((addr, len))
}

impl FromStr for Prefix {
    type Err = InvalidPrefix;

    /// Strict parse: host bits set to the right of the length are an error.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (ip, len) = parse_parts(s)?;
        let prefix = Prefix::from_ip(ip, len)?;
        if prefix.network() != ip {
            return Err(InvalidPrefix::HostBits(s.trim().to_string()));
        }
        Ok(prefix)
    }
}

impl fmt::Display for Prefix {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}/{}", self.network(), self.len)
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
