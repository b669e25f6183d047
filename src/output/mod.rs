//! Output formatting for subnet reports.
//!
//! - [`terminal`] - labelled text with colours
//! - [`json`] - one JSON object per line for scripts

mod json;
mod terminal;

pub use json::{render_error_json, render_report_json};
pub use terminal::{format_label, render_error, render_report};

use crate::calculate_with;
use crate::processing::AllocationPolicy;
use std::io::Write;

/// How reports are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Calculate and print each input under `policy`. Reports go to `out`,
/// errors to `err`.
///
/// Returns the number of inputs that failed.
pub fn print_reports<P, W, E>(
    inputs: &[String],
    policy: &P,
    format: OutputFormat,
    out: &mut W,
    err: &mut E,
) -> Result<usize, Box<dyn std::error::Error>>
where
    P: AllocationPolicy + ?Sized,
    W: Write,
    E: Write,
{
    log::info!(
        "Calculating {} inputs with policy {}",
        inputs.len(),
        policy.name()
    );
    let mut failed = 0;
    for (i, input) in inputs.iter().enumerate() {
        if i > 0 && format == OutputFormat::Text {
            writeln!(out)?;
        }
        match calculate_with(input, policy) {
            Ok(report) => {
                log::info!("{input} -> {}", report.cidr());
                match format {
                    OutputFormat::Text => write!(out, "{}", render_report(input, &report))?,
                    OutputFormat::Json => {
                        writeln!(out, "{}", render_report_json(input, &report, policy.name())?)?
                    }
                }
            }
            Err(e) => {
                log::warn!("Rejected input {input:?}: {e}");
                failed += 1;
                match format {
                    OutputFormat::Text => write!(err, "{}", render_error(input, &e))?,
                    OutputFormat::Json => writeln!(err, "{}", render_error_json(input, &e)?)?,
                }
            }
        }
    }
    Ok(failed)
}
