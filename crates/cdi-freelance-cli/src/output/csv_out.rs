use serde_json::Value;
use std::io;

use super::{flatten, format_scalar};

/// Write the result section as `field,value` CSV rows to stdout.
pub fn print_csv(value: &Value) {
    let stdout = io::stdout();
    let mut wtr = csv::Writer::from_writer(stdout.lock());

    let section = value
        .as_object()
        .and_then(|m| m.get("result"))
        .unwrap_or(value);

    match section {
        Value::Object(map) => {
            let _ = wtr.write_record(["field", "value"]);
            for (key, val) in flatten(map) {
                let _ = wtr.write_record([key.as_str(), &format_scalar(&val)]);
            }
        }
        other => {
            let _ = wtr.write_record([&format_scalar(other)]);
        }
    }

    let _ = wtr.flush();
}
