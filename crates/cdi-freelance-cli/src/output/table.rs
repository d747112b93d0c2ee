use serde_json::Value;
use tabled::{builder::Builder, Table};

use super::{flatten, format_scalar};

/// Print the result section as a two-column table, then warnings and methodology.
pub fn print_table(value: &Value) {
    let Value::Object(envelope) = value else {
        println!("{}", format_scalar(value));
        return;
    };

    let section = envelope.get("result").unwrap_or(value);
    if let Value::Object(map) = section {
        let mut builder = Builder::default();
        builder.push_record(["Field", "Value"]);
        for (key, val) in flatten(map) {
            builder.push_record([key, format_scalar(&val)]);
        }
        println!("{}", Table::from(builder));
    } else {
        println!("{}", format_scalar(section));
    }

    if let Some(Value::Array(warnings)) = envelope.get("warnings") {
        if !warnings.is_empty() {
            println!("\nWarnings:");
            for w in warnings {
                if let Value::String(s) = w {
                    println!("  - {}", s);
                }
            }
        }
    }

    if let Some(Value::String(meth)) = envelope.get("methodology") {
        println!("\nMethodology: {}", meth);
    }
}
