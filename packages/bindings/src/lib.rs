use napi::Result as NapiResult;
use napi_derive::napi;
use rust_decimal::Decimal;
use serde::Deserialize;

use cdi_freelance_core::freelance::FreelanceInputs;
use cdi_freelance_core::salaried::cdi::CdiInputs;
use cdi_freelance_core::simulation::{self, ComparisonInput, SimulationInput};
use cdi_freelance_core::types::{default_withholding_pct, default_working_days};
use cdi_freelance_core::RateTable;

/// Convert any Display error into a napi::Error.
fn to_napi_error(e: impl std::fmt::Display) -> napi::Error {
    napi::Error::from_reason(e.to_string())
}

fn resolve_rates(rates: Option<RateTable>) -> RateTable {
    rates.unwrap_or_default()
}

#[derive(Deserialize)]
struct CdiRequest {
    #[serde(flatten)]
    cdi: CdiInputs,
    #[serde(default = "default_working_days")]
    working_days: Decimal,
    #[serde(default)]
    rates: Option<RateTable>,
}

#[derive(Deserialize)]
struct FreelanceRequest {
    freelance: FreelanceInputs,
    #[serde(default = "default_withholding_pct")]
    withholding_rate_pct: Decimal,
    #[serde(default)]
    rates: Option<RateTable>,
}

#[derive(Deserialize)]
struct CompareRequest {
    #[serde(flatten)]
    input: ComparisonInput,
    #[serde(default)]
    rates: Option<RateTable>,
}

// ---------------------------------------------------------------------------
// Calculators
// ---------------------------------------------------------------------------

#[napi]
pub fn calculate_cdi(input_json: String) -> NapiResult<String> {
    let request: CdiRequest = serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let rates = resolve_rates(request.rates);
    let output = simulation::run_cdi(&request.cdi, request.working_days, &rates)
        .map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

#[napi]
pub fn calculate_freelance(input_json: String) -> NapiResult<String> {
    let request: FreelanceRequest = serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let rates = resolve_rates(request.rates);
    let output =
        simulation::run_freelance(&request.freelance, request.withholding_rate_pct, &rates)
            .map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

// ---------------------------------------------------------------------------
// Comparison
// ---------------------------------------------------------------------------

#[napi]
pub fn compare(input_json: String) -> NapiResult<String> {
    let request: CompareRequest = serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let rates = resolve_rates(request.rates);
    let output = simulation::run_comparison(&request.input, &rates).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

#[napi]
pub fn simulate(input_json: String) -> NapiResult<String> {
    let input: SimulationInput = serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output = simulation::simulate(&input).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

// ---------------------------------------------------------------------------
// Rates
// ---------------------------------------------------------------------------

#[napi]
pub fn default_rate_table() -> NapiResult<String> {
    serde_json::to_string(&RateTable::default()).map_err(to_napi_error)
}
