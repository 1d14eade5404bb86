//! Plain-text report layout for a single record.

use std::fmt::Write as _;

use crate::record::IdentityRecord;

/// Banner printed above each report.
pub const REPORT_BANNER: &str = "==================== GENERATED IDENTITY ====================";

const LABEL_WIDTH: usize = 15;

/// Renders a record as a banner followed by one `label : value` line per
/// field, closed by a rule the same width as the banner.
///
/// # Example
///
/// ```
/// use identity_forge::{IdentityGenerator, render_report};
///
/// let record = IdentityGenerator::default().generate_batch(1, 1).remove(0);
/// let report = render_report(&record);
///
/// assert!(report.contains(&format!("Email           : {}", record.email)));
/// ```
#[must_use]
pub fn render_report(record: &IdentityRecord) -> String {
    let mut report = String::new();
    report.push_str(REPORT_BANNER);
    report.push('\n');
    for (label, value) in record.fields() {
        if writeln!(report, "{label:<LABEL_WIDTH$} : {value}").is_err() {
            break;
        }
    }
    report.push_str(&"=".repeat(REPORT_BANNER.chars().count()));
    report.push('\n');
    report
}
