//! JSON report output.

use crate::error::{CalcError, ErrorKind};
use crate::models::{Address, SubnetReport};
use serde::Serialize;

#[derive(Serialize)]
struct JsonReport<'a> {
    input: &'a str,
    policy: &'a str,
    cidr: String,
    mask: Address,
    wildcard: Address,
    #[serde(flatten)]
    report: &'a SubnetReport,
}

#[derive(Serialize)]
struct JsonError<'a> {
    input: &'a str,
    error: ErrorKind,
    message: String,
}

/// One compact JSON object, so a batch prints as one object per line.
pub fn render_report_json(
    input: &str,
    report: &SubnetReport,
    policy: &str,
) -> serde_json::Result<String> {
    serde_json::to_string(&JsonReport {
        input: input.trim(),
        policy,
        cidr: report.cidr(),
        mask: report.mask(),
        wildcard: report.wildcard(),
        report,
    })
}

pub fn render_error_json(input: &str, err: &CalcError) -> serde_json::Result<String> {
    serde_json::to_string(&JsonError {
        input: input.trim(),
        error: err.kind(),
        message: err.to_string(),
    })
}
