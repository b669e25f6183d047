//! IPv4 address as a 32-bit integer.
//!
//! [`Address`] is the only place where dotted-decimal text and octet range
//! checks meet. Arithmetic on it never wraps across the 32-bit boundary.

use crate::error::CalcError;
use serde::{Serialize, Serializer};
use std::net::Ipv4Addr;
use std::str::FromStr;

/// An IPv4 address held as its big-endian 32-bit value.
#[derive(Eq, PartialEq, Ord, PartialOrd, Debug, Copy, Clone, Hash)]
pub struct Address(u32);

/// Returned when stepping past 0.0.0.0 or 255.255.255.255.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("address arithmetic overflowed past {0}")]
pub struct AddressOverflow(pub Address);

impl Address {
    pub const MIN: Address = Address(u32::MIN);
    pub const MAX: Address = Address(u32::MAX);

    pub const fn new(bits: u32) -> Self {
        Address(bits)
    }

    pub const fn bits(self) -> u32 {
        self.0
    }

    pub fn octets(self) -> [u8; 4] {
        self.0.to_be_bytes()
    }

    /// Parse dotted-decimal text such as `"192.168.1.0"`.
    ///
    /// Exactly four `.`-separated segments of ASCII digits are required.
    /// Leading zeros are plain decimal digits, so `"010"` is 10.
    ///
    /// # Examples
    /// ```
    /// use ipv4_subnet_calc::models::Address;
    /// assert_eq!(Address::parse("10.0.0.01").unwrap().to_string(), "10.0.0.1");
    /// assert!(Address::parse("256.1.1.1").is_err());
    /// ```
    pub fn parse(text: &str) -> Result<Address, CalcError> {
        let parts: Vec<&str> = text.split('.').collect();
        if parts.len() != 4 {
            return Err(CalcError::MalformedAddress(text.to_string()));
        }
        let mut octets = [0u8; 4];
        for (octet, part) in octets.iter_mut().zip(parts) {
            *octet = parse_octet(part, text)?;
        }
        Ok(Address(u32::from_be_bytes(octets)))
    }

    /// The next address up, or an error at 255.255.255.255.
    pub fn increment(self) -> Result<Address, AddressOverflow> {
        self.0.checked_add(1).map(Address).ok_or(AddressOverflow(self))
    }

    /// The next address down, or an error at 0.0.0.0.
    pub fn decrement(self) -> Result<Address, AddressOverflow> {
        self.0.checked_sub(1).map(Address).ok_or(AddressOverflow(self))
    }
}

fn parse_octet(part: &str, text: &str) -> Result<u8, CalcError> {
    if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
        return Err(CalcError::MalformedAddress(text.to_string()));
    }
    // Strip zeros first so long zero-padded octets still range check.
    let digits = part.trim_start_matches('0');
    if digits.len() > 3 {
        return Err(CalcError::InvalidOctetRange(text.to_string()));
    }
    let value: u16 = if digits.is_empty() {
        0
    } else {
        digits
            .parse()
            .map_err(|_| CalcError::MalformedAddress(text.to_string()))?
    };
    u8::try_from(value).map_err(|_| CalcError::InvalidOctetRange(text.to_string()))
}

impl FromStr for Address {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Address::parse(s)
    }
}

impl From<Ipv4Addr> for Address {
    fn from(addr: Ipv4Addr) -> Self {
        Address(u32::from(addr))
    }
}

impl From<Address> for Ipv4Addr {
    fn from(addr: Address) -> Self {
        Ipv4Addr::from(addr.0)
    }
}

impl std::fmt::Display for Address {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let [a, b, c, d] = self.octets();
        write!(f, "{a}.{b}.{c}.{d}")
    }
}

impl Serialize for Address {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}
