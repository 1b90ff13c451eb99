//! JSON output of comparison reports.

use crate::processing::PairReport;

/// Render the reports as a pretty-printed JSON array.
pub fn to_json(reports: &[PairReport]) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(reports)
}
