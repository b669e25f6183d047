//! ISP gateway allocation.
//!
//! An allocation policy decides which address of a customer block the ISP
//! keeps as gateway and which addresses the customer may assign. Other
//! conventions belong in their own named [`AllocationPolicy`] impls.

use super::subnet::{broadcast_addr, network_addr, step_down, step_up};
use crate::models::{IspInfo, SubnetSpec};

/// A convention for splitting a block between ISP gateway and customer.
pub trait AllocationPolicy {
    /// Short name for logs and output.
    fn name(&self) -> &'static str;

    fn allocate(&self, spec: &SubnetSpec) -> IspInfo;
}

/// The gateway takes the first usable address; the customer gets the rest
/// up to broadcast - 1.
#[derive(Debug, Default, Clone, Copy)]
pub struct FirstUsableGateway;

impl AllocationPolicy for FirstUsableGateway {
    fn name(&self) -> &'static str {
        "first-usable-gateway"
    }

    fn allocate(&self, spec: &SubnetSpec) -> IspInfo {
        let len = spec.prefix();
        let network = network_addr(spec.address(), len);
        let broadcast = broadcast_addr(spec.address(), len);

        match len.get() {
            // The single host is the gateway, nothing left for the customer.
            32 => IspInfo {
                gateway: network,
                first_usable: network,
                last_usable: network,
                usable_count: 0,
            },
            31 => IspInfo {
                gateway: network,
                first_usable: broadcast,
                last_usable: broadcast,
                usable_count: 1,
            },
            _ => {
                let gateway = step_up(network, len);
                let first_usable = step_up(gateway, len);
                let last_usable = step_down(broadcast, len);
                let usable_count = (u64::from(last_usable.bits()) + 1)
                    .saturating_sub(u64::from(first_usable.bits()));
                IspInfo {
                    gateway,
                    first_usable,
                    last_usable,
                    usable_count,
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Address;
    use crate::parser::parse_input;

    fn allocate(input: &str) -> IspInfo {
        FirstUsableGateway.allocate(&parse_input(input).unwrap())
    }

    fn addr(text: &str) -> Address {
        Address::parse(text).unwrap()
    }

    #[test]
    fn test_allocate_standard() {
        let isp = allocate("192.168.1.0/24");
        assert_eq!(isp.gateway, addr("192.168.1.1"));
        assert_eq!(isp.first_usable, addr("192.168.1.2"));
        assert_eq!(isp.last_usable, addr("192.168.1.254"));
        assert_eq!(isp.usable_count, 253);
    }

    #[test]
    fn test_allocate_slash_30_leaves_one_customer_address() {
        let isp = allocate("203.0.113.8/30");
        assert_eq!(isp.gateway, addr("203.0.113.9"));
        assert_eq!(isp.first_usable, addr("203.0.113.10"));
        assert_eq!(isp.last_usable, addr("203.0.113.10"));
        assert_eq!(isp.usable_count, 1);
    }

    #[test]
    fn test_allocate_point_to_point() {
        let isp = allocate("10.0.0.0/31");
        assert_eq!(isp.gateway, addr("10.0.0.0"));
        assert_eq!(isp.first_usable, addr("10.0.0.1"));
        assert_eq!(isp.last_usable, addr("10.0.0.1"));
        assert_eq!(isp.usable_count, 1);
    }

    #[test]
    fn test_allocate_host_route() {
        let isp = allocate("10.0.0.1/32");
        assert_eq!(isp.gateway, addr("10.0.0.1"));
        assert_eq!(isp.first_usable, addr("10.0.0.1"));
        assert_eq!(isp.last_usable, addr("10.0.0.1"));
        assert_eq!(isp.usable_count, 0);
    }

    #[test]
    fn test_allocate_whole_space() {
        let isp = allocate("0.0.0.0/0");
        assert_eq!(isp.gateway, addr("0.0.0.1"));
        assert_eq!(isp.first_usable, addr("0.0.0.2"));
        assert_eq!(isp.last_usable, addr("255.255.255.254"));
        assert_eq!(isp.usable_count, 4294967293);
    }

    #[test]
    fn test_policy_name() {
        assert_eq!(FirstUsableGateway.name(), "first-usable-gateway");
    }
}
