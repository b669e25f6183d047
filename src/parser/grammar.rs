//! The accepted input grammars.
//!
//! Both the quick [`super::is_subnet_input`] check and the full
//! [`super::parse_input`] go through [`match_syntax`], so they cannot drift.

use regex::Regex;
use std::sync::OnceLock;

/// `a.b.c.d/len`: one slash, no whitespace, prefix checked later.
static CIDR_REGEX: OnceLock<Regex> = OnceLock::new();

/// `a.b.c.d m.m.m.m`: two dotted tokens separated by spaces or tabs.
static MASK_REGEX: OnceLock<Regex> = OnceLock::new();

fn get_cidr_regex() -> &'static Regex {
    CIDR_REGEX.get_or_init(|| Regex::new(r"^([0-9.]+)/([^/\s]+)$").expect("Invalid Regex"))
}

fn get_mask_regex() -> &'static Regex {
    MASK_REGEX.get_or_init(|| Regex::new(r"^([0-9.]+)[ \t]+([0-9.]+)$").expect("Invalid Regex"))
}

/// Raw tokens of a structurally matched input.
#[derive(Debug, PartialEq, Eq)]
pub enum Syntax<'a> {
    Cidr { address: &'a str, prefix: &'a str },
    IpMask { address: &'a str, mask: &'a str },
}

/// Match trimmed input against the CIDR form, then the mask form.
pub fn match_syntax(input: &str) -> Option<Syntax<'_>> {
    if let Some(caps) = get_cidr_regex().captures(input) {
        let (_, [address, prefix]) = caps.extract();
        return Some(Syntax::Cidr { address, prefix });
    }
    if let Some(caps) = get_mask_regex().captures(input) {
        let (_, [address, mask]) = caps.extract();
        return Some(Syntax::IpMask { address, mask });
    }
    None
}
