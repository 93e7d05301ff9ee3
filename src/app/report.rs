//! Report rendering.
//!
//! Turns a run outcome into the text written to standard output: the body
//! alone for a single request, the framed statistics block for a profile,
//! or one JSON document for either when JSON output is selected.

use std::fmt::Write as _;

use crate::config::{OutputFormat, REPORT_FOOTER, REPORT_HEADER};
use crate::stats::StatsSummary;
use crate::RunOutcome;

/// Formats `value` with `digits` significant digits, trailing zeros removed.
///
/// Switches to exponent notation (`1.235e+04`) when the decimal exponent is
/// below -4 or at least `digits`, like C's `%g`.
pub fn format_significant(value: f64, digits: usize) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }
    let digits = digits.max(1);

    // Rounding to `digits` first decides the exponent (9999.5 -> 1.000e4).
    let scientific = format!("{:.*e}", digits - 1, value);
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return value.to_string();
    };
    let exponent: i32 = exponent.parse().unwrap_or(0);
    let max_exponent = i32::try_from(digits).unwrap_or(i32::MAX);

    if exponent < -4 || exponent >= max_exponent {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!(
            "{}e{}{:02}",
            trim_fraction_zeros(mantissa),
            sign,
            exponent.unsigned_abs()
        )
    } else {
        let decimals = usize::try_from(max_exponent - 1 - exponent).unwrap_or(0);
        trim_fraction_zeros(&format!("{:.*}", decimals, value)).to_string()
    }
}

fn trim_fraction_zeros(s: &str) -> &str {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    }
}

fn format_codes(codes: &[u16]) -> String {
    let joined: Vec<String> = codes.iter().map(u16::to_string).collect();
    format!("[{}]", joined.join(" "))
}

/// Renders the plain-text profile report, framed by divider lines.
pub fn render_report(summary: &StatsSummary) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = writeln!(out, "{REPORT_HEADER}");
    let _ = writeln!(out, "Number of requests: {}", summary.request_count);
    let _ = writeln!(out, "Fastest time: {} ms", summary.fastest_ms);
    let _ = writeln!(out, "Slowest time: {} ms", summary.slowest_ms);
    let _ = writeln!(
        out,
        "Mean time: {} ms",
        format_significant(summary.mean_ms, 4)
    );
    let _ = writeln!(
        out,
        "Median time: {} ms",
        format_significant(summary.median_ms, 4)
    );
    let _ = writeln!(out, "Percent Success: {:.1}%", summary.percent_success);
    let _ = writeln!(out, "Error codes: {}", format_codes(&summary.error_codes));
    let _ = writeln!(
        out,
        "Smallest response: {} bytes",
        summary.smallest_response_bytes
    );
    let _ = writeln!(
        out,
        "Largest response: {} bytes",
        summary.largest_response_bytes
    );
    out.push_str(REPORT_FOOTER);
    out
}

/// Renders a run outcome in the requested format.
///
/// # Errors
///
/// Returns a `serde_json::Error` if JSON serialization fails.
pub fn render_outcome(
    outcome: &RunOutcome,
    format: OutputFormat,
) -> Result<String, serde_json::Error> {
    match (outcome, format) {
        (RunOutcome::Single(probe), OutputFormat::Plain) => Ok(probe.response.body.clone()),
        (RunOutcome::Single(probe), OutputFormat::Json) => serde_json::to_string_pretty(
            &serde_json::json!({
                "status": probe.response.status,
                "time_ms": probe.measurement.time_ms,
                "size_bytes": probe.measurement.size_bytes,
                "body": probe.response.body,
            }),
        ),
        (RunOutcome::Profile(summary), OutputFormat::Plain) => Ok(render_report(summary)),
        (RunOutcome::Profile(summary), OutputFormat::Json) => serde_json::to_string_pretty(summary),
    }
}
