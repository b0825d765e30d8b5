//! CSV output formatting for data export.

/// CSV output formatter
pub struct CsvOutput;

impl CsvOutput {
    /// Format a header row followed by data rows
    pub fn from_rows(headers: &[&str], rows: &[Vec<String>]) -> String {
        let mut lines = Vec::with_capacity(rows.len() + 1);
        lines.push(
            headers
                .iter()
                .map(|h| Self::escape_value(h))
                .collect::<Vec<_>>()
                .join(","),
        );
        for row in rows {
            lines.push(
                row.iter()
                    .map(|v| Self::escape_value(v))
                    .collect::<Vec<_>>()
                    .join(","),
            );
        }
        lines.join("\n")
    }

    /// Escape a value for CSV output
    ///
    /// Values containing commas, quotes or newlines are wrapped in quotes,
    /// with embedded quotes doubled.
    pub fn escape_value(value: &str) -> String {
        if value.contains(',') || value.contains('"') || value.contains('\n') {
            format!("\"{}\"", value.replace('"', "\"\""))
        } else {
            value.to_string()
        }
    }
}
