use serde_json::{json, Value};

use cdi_freelance_core::RateTable;

/// Print the active rate table with its derived micro total.
pub fn run_rates(rates: &RateTable) -> Result<Value, Box<dyn std::error::Error>> {
    Ok(json!({
        "result": rates,
        "methodology": format!(
            "Rate table for fiscal year {} (micro total {})",
            rates.fiscal_year,
            rates.micro_total_rate()
        ),
        "warnings": [],
    }))
}
