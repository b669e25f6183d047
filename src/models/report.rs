//! Calculation results.

use super::{from_prefix, wildcard, Address, SubnetSpec};
use serde::Serialize;

/// Network-level view of a subnet.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
pub struct NetworkInfo {
    pub network: Address,
    pub broadcast: Address,
    pub first_usable: Address,
    pub last_usable: Address,
    /// At most 2^32 - 2.
    pub usable_count: u64,
}

/// The ISP view of the same block: one address goes to the gateway and the
/// rest are customer-assignable.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
pub struct IspInfo {
    pub gateway: Address,
    pub first_usable: Address,
    pub last_usable: Address,
    pub usable_count: u64,
}

/// Everything derived from one input.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
pub struct SubnetReport {
    pub spec: SubnetSpec,
    pub network: NetworkInfo,
    pub isp: IspInfo,
}

impl SubnetReport {
    pub fn mask(&self) -> Address {
        from_prefix(self.spec.prefix())
    }

    pub fn wildcard(&self) -> Address {
        wildcard(self.spec.prefix())
    }

    /// Normalised `network/len` form of the block.
    pub fn cidr(&self) -> String {
        format!("{}{}", self.network.network, self.spec.prefix())
    }
}
