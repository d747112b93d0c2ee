use serde_json::Value;

use super::{flatten, format_scalar};

/// Key figures, most telling first. Dotted keys reach into nested sections.
const PRIORITY_KEYS: [&str; 9] = [
    "comparison.winner",
    "winner",
    "break_even_daily_rate",
    "corporate_tax",
    "net_annual",
    "cdi.net_annual",
    "freelance.net_annual",
    "fiscal_year",
    "version",
];

/// Print just the key answer value from the output.
pub fn print_minimal(value: &Value) {
    let result_obj = value
        .as_object()
        .and_then(|m| m.get("result"))
        .unwrap_or(value);

    if let Value::Object(map) = result_obj {
        let rows = flatten(map);
        for key in PRIORITY_KEYS {
            if let Some((_, val)) = rows.iter().find(|(k, v)| k == key && !v.is_null()) {
                println!("{}", format_scalar(val));
                return;
            }
        }

        if let Some((key, val)) = rows.first() {
            println!("{}: {}", key, format_scalar(val));
            return;
        }
    }

    println!("{}", format_scalar(result_obj));
}
