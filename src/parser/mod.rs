//! Turns input text into a validated [`SubnetSpec`].
//!
//! Two forms are accepted, tried in order:
//! 1. CIDR, `192.168.1.0/24`
//! 2. address and mask, `192.168.1.0 255.255.255.0`
//!
//! Once a form matches structurally its semantic errors are returned as-is;
//! the other form is never tried as a fallback.

mod grammar;

use crate::error::CalcError;
use crate::models::{to_prefix, Address, PrefixLength, SourceForm, SubnetSpec};
pub use grammar::{match_syntax, Syntax};

/// Parse and validate subnet input.
///
/// # Examples
/// ```
/// use ipv4_subnet_calc::parser::parse_input;
/// let spec = parse_input(" 172.16.0.0 255.255.0.0 ").unwrap();
/// assert_eq!(spec.prefix().get(), 16);
/// ```
pub fn parse_input(input: &str) -> Result<SubnetSpec, CalcError> {
    let input = input.trim();
    match match_syntax(input) {
        Some(Syntax::Cidr { address, prefix }) => {
            let address = Address::parse(address)?;
            let prefix = PrefixLength::parse(prefix)?;
            Ok(SubnetSpec::new(address, prefix, SourceForm::Cidr))
        }
        Some(Syntax::IpMask { address, mask }) => {
            let address = Address::parse(address)?;
            let mask_token = mask;
            let mask = Address::parse(mask_token)?;
            let prefix = to_prefix(mask)
                .map_err(|_| CalcError::NonContiguousMask(mask_token.to_string()))?;
            Ok(SubnetSpec::new(address, prefix, SourceForm::IpMask))
        }
        None => Err(CalcError::UnrecognizedSyntax(input.to_string())),
    }
}

/// Quick check whether text has the shape of subnet input.
///
/// This only looks at the grammar; values such as `300.0.0.0/40` still
/// pass and are rejected later by [`parse_input`].
pub fn is_subnet_input(input: &str) -> bool {
    match_syntax(input.trim()).is_some()
}
