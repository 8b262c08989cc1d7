//! CSV output formatting for data export.
//!
//! Values containing a comma, quote or line break are quoted, with embedded
//! quotes doubled.

use super::OutputConfig;
use serde::Serialize;

/// CSV output formatter
pub struct CsvOutput;

impl CsvOutput {
    /// Format data as CSV string
    ///
    /// For single objects, outputs a two-row CSV (header + values).
    /// For arrays of objects, outputs headers followed by one row per item.
    pub fn format<T: Serialize>(data: &T, _config: &OutputConfig) -> String {
        match serde_json::to_value(data) {
            Ok(serde_json::Value::Array(arr)) => Self::format_array_value(&arr),
            Ok(serde_json::Value::Object(obj)) => Self::format_object_value(&obj),
            Ok(other) => Self::value_to_csv(&other),
            Err(_) => String::new(),
        }
    }

    /// Create CSV from a header row and rows of strings
    pub fn from_rows(headers: &[&str], rows: &[Vec<String>]) -> String {
        let mut output = headers.join(",");
        for row in rows {
            output.push('\n');
            let cells: Vec<String> = row.iter().map(|c| Self::escape_value(c)).collect();
            output.push_str(&cells.join(","));
        }
        output
    }

    /// Format a JSON array as CSV
    fn format_array_value(arr: &[serde_json::Value]) -> String {
        let headers: Vec<String> = match arr.first() {
            Some(serde_json::Value::Object(first)) => first.keys().cloned().collect(),
            Some(_) => {
                return arr
                    .iter()
                    .map(Self::value_to_csv)
                    .collect::<Vec<_>>()
                    .join("\n")
            }
            None => return String::new(),
        };

        let mut output = headers.join(",");
        for item in arr {
            if let serde_json::Value::Object(obj) = item {
                let row: Vec<String> = headers
                    .iter()
                    .map(|h| obj.get(h).map(Self::value_to_csv).unwrap_or_default())
                    .collect();
                output.push('\n');
                output.push_str(&row.join(","));
            }
        }
        output
    }

    /// Format a single JSON object as CSV
    fn format_object_value(obj: &serde_json::Map<String, serde_json::Value>) -> String {
        let headers: Vec<&str> = obj.keys().map(|s| s.as_str()).collect();
        let values: Vec<String> = obj.values().map(Self::value_to_csv).collect();

        format!("{}\n{}", headers.join(","), values.join(","))
    }

    /// Convert a JSON value to a CSV cell
    fn value_to_csv(value: &serde_json::Value) -> String {
        match value {
            serde_json::Value::Null => String::new(),
            serde_json::Value::Bool(b) => b.to_string(),
            serde_json::Value::Number(n) => n.to_string(),
            serde_json::Value::String(s) => Self::escape_value(s),
            serde_json::Value::Array(arr) => Self::escape_value(
                &arr.iter()
                    .map(|v| match v {
                        serde_json::Value::String(s) => s.clone(),
                        other => other.to_string(),
                    })
                    .collect::<Vec<_>>()
                    .join(" "),
            ),
            serde_json::Value::Object(obj) => {
                Self::escape_value(&format!("{{{} fields}}", obj.len()))
            }
        }
    }

    /// Escape a string value for CSV
    fn escape_value(s: &str) -> String {
        if s.contains(',') || s.contains('\n') || s.contains('\r') || s.contains('"') {
            format!("\"{}\"", s.replace('"', "\"\""))
        } else {
            s.to_string()
        }
    }
}
