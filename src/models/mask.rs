//! Prefix length and subnet mask conversion.

use super::Address;
use crate::error::CalcError;
use serde::Serialize;

/// Maximum length for an IPv4 subnet mask (32 bits).
pub const MAX_LENGTH: u8 = 32;

/// A prefix length, always within `0..=32`.
#[derive(Eq, PartialEq, Ord, PartialOrd, Debug, Copy, Clone, Hash, Serialize)]
pub struct PrefixLength(u8);

impl PrefixLength {
    /// Returns `None` when `len` exceeds [`MAX_LENGTH`].
    pub const fn new(len: u8) -> Option<PrefixLength> {
        if len > MAX_LENGTH {
            None
        } else {
            Some(PrefixLength(len))
        }
    }

    /// Parse the decimal prefix of CIDR text, e.g. the `24` in `10.0.0.0/24`.
    ///
    /// Only ASCII digits are accepted; signs, whitespace and values above 32
    /// are rejected.
    pub fn parse(text: &str) -> Result<PrefixLength, CalcError> {
        let invalid = || CalcError::InvalidPrefixLength(text.to_string());
        if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        let digits = text.trim_start_matches('0');
        if digits.len() > 2 {
            return Err(invalid());
        }
        let len: u8 = if digits.is_empty() {
            0
        } else {
            digits.parse().map_err(|_| invalid())?
        };
        PrefixLength::new(len).ok_or_else(invalid)
    }

    pub const fn get(self) -> u8 {
        self.0
    }

    /// Number of host bits, `32 - len`.
    pub const fn host_bits(self) -> u8 {
        MAX_LENGTH - self.0
    }

    pub fn mask(self) -> Address {
        from_prefix(self)
    }
}

impl std::fmt::Display for PrefixLength {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "/{}", self.0)
    }
}

/// Convert a prefix length to a subnet mask.
///
/// # Examples
/// ```
/// use ipv4_subnet_calc::models::{from_prefix, PrefixLength};
/// let len = PrefixLength::new(24).unwrap();
/// assert_eq!(from_prefix(len).bits(), 0xFFFFFF00);
/// ```
pub fn from_prefix(prefix: PrefixLength) -> Address {
    let right_len = prefix.host_bits();
    let all_bits = u32::MAX as u64;

    // Shift in 64 bits so /0 does not overflow, then re-mask to 32 bits.
    let mask = ((all_bits >> right_len) << right_len) & all_bits;

    Address::new(mask as u32)
}

/// Convert a subnet mask back to its prefix length.
///
/// The leading one bits are counted and the mask must equal the mask
/// rebuilt from that count, so any stray low bit (`255.255.240.15`) fails.
pub fn to_prefix(mask: Address) -> Result<PrefixLength, CalcError> {
    let count = mask.bits().leading_ones() as u8;
    let prefix = PrefixLength(count);
    if from_prefix(prefix) == mask {
        Ok(prefix)
    } else {
        Err(CalcError::NonContiguousMask(mask.to_string()))
    }
}

/// The host-bit complement of a mask, e.g. `0.0.0.255` for a /24.
pub fn wildcard(prefix: PrefixLength) -> Address {
    Address::new(!from_prefix(prefix).bits())
}
