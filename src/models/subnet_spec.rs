//! Validated subnet input.

use super::{Address, PrefixLength};
use serde::Serialize;

/// Which textual form the input was written in.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceForm {
    /// `a.b.c.d/len`
    Cidr,
    /// `a.b.c.d m.m.m.m`
    IpMask,
}

/// An address and prefix length that passed validation.
///
/// Only the input parser builds these, so a `SubnetSpec` is never
/// partially valid.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct SubnetSpec {
    address: Address,
    prefix: PrefixLength,
    source_form: SourceForm,
}

impl SubnetSpec {
    pub(crate) fn new(address: Address, prefix: PrefixLength, source_form: SourceForm) -> Self {
        SubnetSpec {
            address,
            prefix,
            source_form,
        }
    }

    /// The address as entered, host bits included.
    pub fn address(&self) -> Address {
        self.address
    }

    pub fn prefix(&self) -> PrefixLength {
        self.prefix
    }

    pub fn source_form(&self) -> SourceForm {
        self.source_form
    }
}

impl std::fmt::Display for SubnetSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}{}", self.address, self.prefix)
    }
}
