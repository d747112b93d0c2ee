use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// Monetary values in euros. A plain alias of Decimal, so no f64 enters the arithmetic.
pub type Money = Decimal;

/// Rates expressed as decimals (0.22 = 22%). Percent inputs carry a `_pct` suffix.
pub type Rate = Decimal;

/// Working-day counts. Fractional days are allowed.
pub type Days = Decimal;

/// Working days per year assumed when none are supplied.
pub const DEFAULT_WORKING_DAYS: Decimal = dec!(218);

/// At-source income tax withholding, in percent, assumed when none is supplied.
pub const DEFAULT_WITHHOLDING_PCT: Decimal = dec!(10);

/// EURL registered share capital assumed when none is supplied.
pub const DEFAULT_SHARE_CAPITAL: Decimal = dec!(1000);

pub const MONTHS_PER_YEAR: Decimal = dec!(12);

pub fn default_working_days() -> Days {
    DEFAULT_WORKING_DAYS
}

pub fn default_withholding_pct() -> Decimal {
    DEFAULT_WITHHOLDING_PCT
}

pub fn default_share_capital() -> Money {
    DEFAULT_SHARE_CAPITAL
}

/// Convert a percentage (10 = 10%) into a rate (0.10).
pub fn pct_to_rate(pct: Decimal) -> Rate {
    pct / dec!(100)
}

/// Standard computation output envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComputationOutput<T: Serialize> {
    pub result: T,
    pub methodology: String,
    pub assumptions: serde_json::Value,
    pub warnings: Vec<String>,
    pub metadata: ComputationMetadata,
}

/// Metadata for every computation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComputationMetadata {
    pub version: String,
    pub fiscal_year: i32,
    pub computation_time_us: u64,
    pub precision: String,
}

/// Helper to wrap computation results with metadata
pub fn with_metadata<T: Serialize>(
    methodology: &str,
    assumptions: &impl Serialize,
    warnings: Vec<String>,
    fiscal_year: i32,
    elapsed_us: u64,
    result: T,
) -> ComputationOutput<T> {
    ComputationOutput {
        result,
        methodology: methodology.to_string(),
        assumptions: serde_json::to_value(assumptions).unwrap_or_default(),
        warnings,
        metadata: ComputationMetadata {
            version: env!("CARGO_PKG_VERSION").to_string(),
            fiscal_year,
            computation_time_us: elapsed_us,
            precision: "rust_decimal_128bit".to_string(),
        },
    }
}
