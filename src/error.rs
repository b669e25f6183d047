//! Classified failures for subnet input.
//!
//! Every failure of [`crate::calculate`] is one of these values; no partial
//! report is ever produced alongside an error.

use serde::Serialize;

/// A classified reason why an input could not be turned into a subnet.
///
/// Each variant carries the offending token so callers can echo it back.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CalcError {
    #[error("octet out of range 0-255 in '{0}'")]
    InvalidOctetRange(String),

    #[error("malformed address '{0}'")]
    MalformedAddress(String),

    #[error("invalid prefix length '{0}', expected 0-32")]
    InvalidPrefixLength(String),

    #[error("non-contiguous subnet mask '{0}'")]
    NonContiguousMask(String),

    #[error("unrecognized input '{0}', expected a.b.c.d/len or a.b.c.d m.m.m.m")]
    UnrecognizedSyntax(String),
}

/// The kind of a [`CalcError`] without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    InvalidOctetRange,
    MalformedAddress,
    InvalidPrefixLength,
    NonContiguousMask,
    UnrecognizedSyntax,
}

impl CalcError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            CalcError::InvalidOctetRange(_) => ErrorKind::InvalidOctetRange,
            CalcError::MalformedAddress(_) => ErrorKind::MalformedAddress,
            CalcError::InvalidPrefixLength(_) => ErrorKind::InvalidPrefixLength,
            CalcError::NonContiguousMask(_) => ErrorKind::NonContiguousMask,
            CalcError::UnrecognizedSyntax(_) => ErrorKind::UnrecognizedSyntax,
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let name = match self {
            ErrorKind::InvalidOctetRange => "invalid octet range",
            ErrorKind::MalformedAddress => "malformed address",
            ErrorKind::InvalidPrefixLength => "invalid prefix length",
            ErrorKind::NonContiguousMask => "non-contiguous mask",
            ErrorKind::UnrecognizedSyntax => "unrecognized syntax",
        };
        write!(f, "{name}")
    }
}
