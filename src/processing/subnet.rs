//! Network, broadcast and usable-range derivation.

use crate::models::{from_prefix, Address, NetworkInfo, PrefixLength, SubnetSpec, MAX_LENGTH};

/// Get the network address for an address and prefix length.
pub fn network_addr(addr: Address, len: PrefixLength) -> Address {
    Address::new(addr.bits() & from_prefix(len).bits())
}

/// Calculate the broadcast address for an address and prefix length.
pub fn broadcast_addr(addr: Address, len: PrefixLength) -> Address {
    let mask = from_prefix(len).bits();
    let network_bits = addr.bits() & mask;
    Address::new(network_bits | (!mask & u32::MAX))
}

/// Number of addresses in a block, `2^(32 - len)`.
pub fn block_size(len: PrefixLength) -> u64 {
    1u64 << (MAX_LENGTH - len.get())
}

pub(crate) fn step_up(addr: Address, len: PrefixLength) -> Address {
    addr.increment()
        .unwrap_or_else(|e| panic!("Stepping up inside a {len} block: {e}"))
}

pub(crate) fn step_down(addr: Address, len: PrefixLength) -> Address {
    addr.decrement()
        .unwrap_or_else(|e| panic!("Stepping down inside a {len} block: {e}"))
}

/// Derive the network view of a subnet.
///
/// - /32 is a host route: the single address is the whole usable range.
/// - /31 follows RFC 3021: both addresses are usable.
/// - Everything else loses the network and broadcast addresses.
pub fn network_info(spec: &SubnetSpec) -> NetworkInfo {
    let len = spec.prefix();
    let network = network_addr(spec.address(), len);
    let broadcast = broadcast_addr(spec.address(), len);

    match len.get() {
        32 => NetworkInfo {
            network,
            broadcast,
            first_usable: network,
            last_usable: network,
            usable_count: 1,
        },
        31 => NetworkInfo {
            network,
            broadcast,
            first_usable: network,
            last_usable: broadcast,
            usable_count: 2,
        },
        // len <= 30 so the block spans at least four addresses.
        _ => NetworkInfo {
            network,
            broadcast,
            first_usable: step_up(network, len),
            last_usable: step_down(broadcast, len),
            usable_count: block_size(len) - 2,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_input;

    fn len(n: u8) -> PrefixLength {
        PrefixLength::new(n).unwrap()
    }

    fn addr(text: &str) -> Address {
        Address::parse(text).unwrap()
    }

    #[test]
    fn test_network_addr() {
        let ip = addr("192.168.1.42");
        assert_eq!(network_addr(ip, len(24)), addr("192.168.1.0"));
        assert_eq!(network_addr(ip, len(16)), addr("192.168.0.0"));
        assert_eq!(network_addr(ip, len(8)), addr("192.0.0.0"));
        assert_eq!(network_addr(ip, len(32)), ip);
        assert_eq!(network_addr(ip, len(0)), Address::MIN);
    }

    #[test]
    fn test_broadcast_addr() {
        let ip = addr("192.168.1.0");
        assert_eq!(broadcast_addr(ip, len(24)), addr("192.168.1.255"));
        assert_eq!(broadcast_addr(ip, len(16)), addr("192.168.255.255"));
        assert_eq!(broadcast_addr(ip, len(8)), addr("192.255.255.255"));
        assert_eq!(broadcast_addr(ip, len(32)), ip);
        assert_eq!(broadcast_addr(ip, len(0)), Address::MAX);
    }

    #[test]
    fn test_block_size() {
        assert_eq!(block_size(len(0)), 4294967296);
        assert_eq!(block_size(len(24)), 256);
        assert_eq!(block_size(len(32)), 1);
    }

    #[test]
    fn test_network_info_standard() {
        let info = network_info(&parse_input("192.168.1.77/24").unwrap());
        assert_eq!(info.network, addr("192.168.1.0"));
        assert_eq!(info.broadcast, addr("192.168.1.255"));
        assert_eq!(info.first_usable, addr("192.168.1.1"));
        assert_eq!(info.last_usable, addr("192.168.1.254"));
        assert_eq!(info.usable_count, 254);
    }

    #[test]
    fn test_network_info_slash_30() {
        let info = network_info(&parse_input("10.0.0.5/30").unwrap());
        assert_eq!(info.network, addr("10.0.0.4"));
        assert_eq!(info.first_usable, addr("10.0.0.5"));
        assert_eq!(info.last_usable, addr("10.0.0.6"));
        assert_eq!(info.usable_count, 2);
    }

    #[test]
    fn test_network_info_point_to_point() {
        let info = network_info(&parse_input("10.0.0.1/31").unwrap());
        assert_eq!(info.network, addr("10.0.0.0"));
        assert_eq!(info.broadcast, addr("10.0.0.1"));
        assert_eq!(info.first_usable, info.network);
        assert_eq!(info.last_usable, info.broadcast);
        assert_eq!(info.usable_count, 2);
    }

    #[test]
    fn test_network_info_host_route() {
        let info = network_info(&parse_input("255.255.255.255/32").unwrap());
        assert_eq!(info.network, Address::MAX);
        assert_eq!(info.broadcast, Address::MAX);
        assert_eq!(info.first_usable, Address::MAX);
        assert_eq!(info.last_usable, Address::MAX);
        assert_eq!(info.usable_count, 1);
    }

    #[test]
    fn test_network_info_whole_space() {
        let info = network_info(&parse_input("0.0.0.0/0").unwrap());
        assert_eq!(info.network, Address::MIN);
        assert_eq!(info.broadcast, Address::MAX);
        assert_eq!(info.first_usable, addr("0.0.0.1"));
        assert_eq!(info.last_usable, addr("255.255.255.254"));
        assert_eq!(info.usable_count, 4294967294);
    }
}
