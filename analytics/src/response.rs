//! Backend result rows and their return-path normalization.
//!
//! The analytics backend answers with newline-delimited JSON objects, one
//! row per line. Each row may carry a bucket timestamp in the backend zone
//! that has to be converted back before the rows reach the caller.

use crate::interval::to_local_zone;
use serde_json::{Map, Value};

/// Row field carrying the trend bucket timestamp.
pub const DEFAULT_TIME_FIELD: &str = "order_created_at_time";

pub type Row = Map<String, Value>;

/// Parse a newline-delimited JSON body into rows. Blank lines are skipped.
pub fn parse_rows(body: &str) -> Result<Vec<Row>, serde_json::Error> {
    body.lines()
        .filter(|line| !line.trim().is_empty())
        .map(serde_json::from_str)
        .collect()
}

/// Convert the named time field of every row from the backend zone to the
/// local zone, in place. Rows without the field are left untouched; values
/// that fail to parse pass through unchanged (see interval passthrough).
pub fn localize_rows(rows: &mut [Row], time_field: &str) {
    for row in rows.iter_mut() {
        if let Some(Value::String(timestamp)) = row.get(time_field) {
            let localized = to_local_zone(timestamp);
            row.insert(time_field.to_string(), Value::String(localized));
        }
    }
}
