//! Value types for subnet calculation.
//!
//! - [`Address`] - IPv4 address as a 32-bit integer, with dotted-decimal parsing
//! - [`PrefixLength`] - prefix length and mask conversion
//! - [`SubnetSpec`] - validated input
//! - [`NetworkInfo`], [`IspInfo`], [`SubnetReport`] - calculation results

mod address;
mod mask;
mod report;
mod subnet_spec;

// Re-export public types
pub use address::{Address, AddressOverflow};
pub use mask::{from_prefix, to_prefix, wildcard, PrefixLength, MAX_LENGTH};
pub use report::{IspInfo, NetworkInfo, SubnetReport};
pub use subnet_spec::{SourceForm, SubnetSpec};
