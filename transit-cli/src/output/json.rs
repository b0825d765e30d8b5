//! JSON output formatting for machine-readable output.
//!
//! Always pretty-printed.

use super::OutputConfig;
use serde::Serialize;

/// JSON output formatter
pub struct JsonOutput;

impl JsonOutput {
    /// Format data as a pretty-printed JSON string
    pub fn format<T: Serialize + ?Sized>(data: &T, _config: &OutputConfig) -> String {
        serde_json::to_string_pretty(data)
            .unwrap_or_else(|e| format!("{{\n  \"error\": \"{}\"\n}}", e))
    }
}
