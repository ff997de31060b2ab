use serde::Serialize;

use crate::operations::InfoReport;

/// Format a result as minified JSON.
pub fn format_json<T: Serialize>(result: &T) -> String {
    serde_json::to_string(result).unwrap_or_else(|e| format!("{{\"error\":\"{e}\"}}"))
}

/// Format an error as JSON.
pub fn format_error(err: &dyn std::fmt::Display) -> String {
    format_json(&serde_json::json!({ "error": err.to_string() }))
}

/// Schema DDL on the first line, then the type tags as a JSON array when an
/// inventory was read.
pub fn format_info(report: &InfoReport) -> String {
    let mut out = report.ddl.clone();
    if let Some(tags) = &report.tags {
        out.push('\n');
        out.push_str(&format_json(tags));
    }
    out
}
