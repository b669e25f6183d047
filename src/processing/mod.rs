//! Subnet arithmetic on validated input.
//!
//! - [`subnet`] - network, broadcast and usable range
//! - [`isp`] - gateway and customer range under an allocation policy

mod isp;
mod subnet;

// Re-export public functions
pub use isp::{AllocationPolicy, FirstUsableGateway};
pub use subnet::{block_size, broadcast_addr, network_addr, network_info};
