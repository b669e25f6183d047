//! Text report for the terminal.
//!
//! Field order and labels are fixed; scripts may grep them.

use crate::error::CalcError;
use crate::models::SubnetReport;
use colored::Colorize;

/// Width of the label column.
const LABEL_WIDTH: usize = 16;

/// Format a label left-aligned in the label column.
pub fn format_label(label: &str) -> String {
    let label = format!("{label}:");
    format!("{label:<LABEL_WIDTH$}")
}

fn range(first: impl ToString, last: impl ToString) -> String {
    format!("{} - {}", first.to_string(), last.to_string())
}

/// Render a report as labelled lines.
pub fn render_report(input: &str, report: &SubnetReport) -> String {
    let net = &report.network;
    let isp = &report.isp;
    let lines = [
        ("Input", input.trim().to_string().bold()),
        (
            "Subnet mask",
            format!("{} = {}", report.mask(), report.spec.prefix()).blue(),
        ),
        ("Wildcard mask", report.wildcard().to_string().blue()),
        ("Network", net.network.to_string().blue()),
        ("Broadcast", net.broadcast.to_string().blue()),
        ("Usable range", range(net.first_usable, net.last_usable).green()),
        ("Usable hosts", net.usable_count.to_string().green()),
        ("ISP gateway", isp.gateway.to_string().yellow()),
        ("Customer range", range(isp.first_usable, isp.last_usable).green()),
        ("Customer hosts", isp.usable_count.to_string().green()),
    ];

    lines
        .iter()
        .map(|(label, value)| format!("{}{value}\n", format_label(label)))
        .collect()
}

/// The single user-facing notice for any invalid input, with its kind.
pub fn render_error(input: &str, err: &CalcError) -> String {
    format!(
        "{notice} '{input}': {kind} ({err})\n",
        notice = "Invalid subnet input".red().bold(),
        input = input.trim(),
        kind = err.kind(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculate;

    #[test]
    fn test_format_label() {
        assert_eq!(format_label("Network"), "Network:        ");
        assert_eq!(format_label("Network").len(), LABEL_WIDTH);
    }

    #[test]
    fn test_render_report_order() {
        let report = calculate("192.168.1.0/24").unwrap();
        let text = render_report("192.168.1.0/24", &report);
        let labels: Vec<&str> = text
            .lines()
            .map(|l| l.split(':').next().unwrap_or_default())
            .collect();
        assert_eq!(
            labels,
            vec![
                "Input",
                "Subnet mask",
                "Wildcard mask",
                "Network",
                "Broadcast",
                "Usable range",
                "Usable hosts",
                "ISP gateway",
                "Customer range",
                "Customer hosts",
            ]
        );
        assert!(text.contains("255.255.255.0 = /24"));
        assert!(text.contains("192.168.1.1 - 192.168.1.254"));
        assert!(text.contains("192.168.1.2 - 192.168.1.254"));
        assert!(text.contains("253"));
    }

    #[test]
    fn test_render_error() {
        let err = calculate("10.0.0.0/33").unwrap_err();
        let text = render_error(" 10.0.0.0/33 ", &err);
        assert!(text.contains("Invalid subnet input"));
        assert!(text.contains("'10.0.0.0/33'"));
        assert!(text.contains("invalid prefix length"));
    }
}
