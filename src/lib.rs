//! IPv4 subnet calculator.
//!
//! Parses `a.b.c.d/len` or `a.b.c.d m.m.m.m`, then derives the network,
//! broadcast and usable range of the block plus an ISP split where the
//! gateway takes the first usable address. /31 (RFC 3021) and /32 host
//! routes get their own rules in both views.
//!
//! ```
//! let report = ipv4_subnet_calc::calculate("192.168.1.0/24").unwrap();
//! assert_eq!(report.network.usable_count, 254);
//! assert_eq!(report.isp.gateway.to_string(), "192.168.1.1");
//! ```
//!
//! Calculation is a pure function of the input text: no state, no locks,
//! no logging, safe to call from any number of threads.

pub mod config;
pub mod error;
pub mod input;
pub mod logging;
pub mod models;
pub mod output;
pub mod parser;
pub mod processing;

pub use error::{CalcError, ErrorKind};
pub use models::{IspInfo, NetworkInfo, SubnetReport, SubnetSpec};
use processing::{network_info, AllocationPolicy, FirstUsableGateway};

/// Calculate a subnet report using the first-usable-gateway ISP policy.
pub fn calculate(input: &str) -> Result<SubnetReport, CalcError> {
    calculate_with(input, &FirstUsableGateway)
}

/// Calculate a subnet report with a specific allocation policy.
pub fn calculate_with<P>(input: &str, policy: &P) -> Result<SubnetReport, CalcError>
where
    P: AllocationPolicy + ?Sized,
{
    let spec = parser::parse_input(input)?;
    Ok(SubnetReport {
        spec,
        network: network_info(&spec),
        isp: policy.allocate(&spec),
    })
}
