//! Enveloped entry points.
//!
//! The calculators never fail and never warn. This layer validates the rate
//! table, clamps out-of-range inputs, records what it adjusted as warnings,
//! and wraps results in the standard [`ComputationOutput`] envelope.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::comparison::{compare, ComparisonResults};
use crate::freelance::{calculate_freelance, FreelanceInputs, FreelanceResults};
use crate::rates::RateTable;
use crate::salaried::cdi::{calculate_cdi, CdiInputs, CdiResults, EmploymentStatus};
use crate::types::{with_metadata, ComputationOutput, Days, Money, DEFAULT_WITHHOLDING_PCT};
use crate::CdiFreelanceResult;

const MAX_WORKING_DAYS: Decimal = dec!(365);
const MAX_PCT: Decimal = dec!(100);

/// Ceiling on any euro amount. Keeps every product in the calculators well
/// inside `Decimal` range.
pub const MAX_AMOUNT: Money = dec!(1000000000000000);

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationInput {
    #[serde(default)]
    pub cdi: CdiInputs,
    pub freelance: FreelanceInputs,
    /// Alternate rate table; the 2025 table when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rates: Option<RateTable>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationOutput {
    pub cdi: Option<CdiResults>,
    pub freelance: Option<FreelanceResults>,
    pub comparison: Option<ComparisonResults>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComparisonInput {
    pub cdi: CdiInputs,
    pub freelance: FreelanceInputs,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComparisonOutput {
    pub cdi: CdiResults,
    pub freelance: FreelanceResults,
    pub comparison: ComparisonResults,
}

// ---------------------------------------------------------------------------
// Sanitisation
// ---------------------------------------------------------------------------

fn clamp_non_negative(value: &mut Decimal, field: &str, warnings: &mut Vec<String>) {
    if *value < Decimal::ZERO {
        warnings.push(format!("{field} was negative ({value}); treated as 0"));
        *value = Decimal::ZERO;
    }
}

/// Clamp a euro amount into [0, MAX_AMOUNT], recording any adjustment.
pub fn clamp_amount(value: &mut Money, field: &str, warnings: &mut Vec<String>) {
    clamp_non_negative(value, field, warnings);
    if *value > MAX_AMOUNT {
        warnings.push(format!("{field} above {MAX_AMOUNT} ({value}); capped"));
        *value = MAX_AMOUNT;
    }
}

/// Clamp a percentage into [0, 100], recording any adjustment.
pub fn clamp_pct(value: &mut Decimal, field: &str, warnings: &mut Vec<String>) {
    clamp_non_negative(value, field, warnings);
    if *value > MAX_PCT {
        warnings.push(format!("{field} above 100% ({value}); capped at 100"));
        *value = MAX_PCT;
    }
}

fn clamp_working_days(value: &mut Days, warnings: &mut Vec<String>) {
    clamp_non_negative(value, "working_days", warnings);
    if *value > MAX_WORKING_DAYS {
        warnings.push(format!("working_days above 365 ({value}); capped at 365"));
        *value = MAX_WORKING_DAYS;
    }
}

/// Clamp CDI inputs into their documented ranges.
pub fn sanitise_cdi(inputs: &CdiInputs, warnings: &mut Vec<String>) -> CdiInputs {
    let mut out = inputs.clone();
    clamp_amount(&mut out.gross_annual_salary, "gross_annual_salary", warnings);
    clamp_pct(&mut out.withholding_rate_pct, "withholding_rate_pct", warnings);

    match out.status {
        EmploymentStatus::Custom => match out.custom_charge_rate_pct.as_mut() {
            Some(pct) => clamp_pct(pct, "custom_charge_rate_pct", warnings),
            None => warnings.push(
                "Custom status without custom_charge_rate_pct; fallback rate applied".into(),
            ),
        },
        _ => {
            if out.custom_charge_rate_pct.take().is_some() {
                warnings.push("custom_charge_rate_pct ignored: status is not custom".into());
            }
        }
    }
    out
}

/// Clamp freelance inputs into their documented ranges.
pub fn sanitise_freelance(
    inputs: &FreelanceInputs,
    warnings: &mut Vec<String>,
) -> FreelanceInputs {
    let mut out = inputs.clone();
    match &mut out {
        FreelanceInputs::Micro(i) => {
            clamp_amount(&mut i.daily_rate, "daily_rate", warnings);
            clamp_working_days(&mut i.working_days, warnings);
        }
        FreelanceInputs::Sasu(i) => {
            clamp_amount(&mut i.daily_rate, "daily_rate", warnings);
            clamp_working_days(&mut i.working_days, warnings);
            clamp_amount(&mut i.gross_salary, "gross_salary", warnings);
        }
        FreelanceInputs::Eurl(i) => {
            clamp_amount(&mut i.daily_rate, "daily_rate", warnings);
            clamp_working_days(&mut i.working_days, warnings);
            clamp_amount(&mut i.remuneration, "remuneration", warnings);
            clamp_amount(&mut i.share_capital, "share_capital", warnings);
        }
    }
    out
}

/// Warnings about values the calculators silently adjust.
fn calculation_warnings(
    inputs: &FreelanceInputs,
    results: &FreelanceResults,
    warnings: &mut Vec<String>,
) {
    if inputs.working_days().is_zero() {
        warnings.push("Zero working days: revenue and daily-rate figures are 0".into());
    }
    match (inputs, results) {
        (FreelanceInputs::Sasu(i), FreelanceResults::Sasu(r))
            if i.gross_salary > r.gross_salary =>
        {
            warnings.push(format!(
                "SASU salary {} exceeds annual revenue; capped at {}",
                i.gross_salary, r.gross_salary
            ));
        }
        (FreelanceInputs::Eurl(i), FreelanceResults::Eurl(r))
            if i.remuneration > r.remuneration =>
        {
            warnings.push(format!(
                "EURL remuneration {} exceeds annual revenue; capped at {}",
                i.remuneration, r.remuneration
            ));
        }
        _ => {}
    }
}

fn resolve_rates(rates: Option<&RateTable>) -> CdiFreelanceResult<RateTable> {
    let rates = rates.cloned().unwrap_or_default();
    rates.validate()?;
    Ok(rates)
}

// ---------------------------------------------------------------------------
// Entry points
// ---------------------------------------------------------------------------

/// CDI net income, enveloped.
pub fn run_cdi(
    inputs: &CdiInputs,
    working_days: Days,
    rates: &RateTable,
) -> CdiFreelanceResult<ComputationOutput<CdiResults>> {
    let start = Instant::now();
    rates.validate()?;
    let mut warnings: Vec<String> = Vec::new();

    let inputs = sanitise_cdi(inputs, &mut warnings);
    let mut working_days = working_days;
    clamp_working_days(&mut working_days, &mut warnings);

    let result = calculate_cdi(&inputs, working_days, rates);

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        "CDI net income: gross less employee charges, less at-source withholding",
        &serde_json::json!({
            "inputs": inputs,
            "working_days": working_days.to_string(),
            "employer_rate": rates.salaried.employer_rate.to_string(),
        }),
        warnings,
        rates.fiscal_year,
        elapsed,
        result,
    ))
}

/// Freelance net income for the selected structure, enveloped.
pub fn run_freelance(
    inputs: &FreelanceInputs,
    withholding_pct: Decimal,
    rates: &RateTable,
) -> CdiFreelanceResult<ComputationOutput<FreelanceResults>> {
    let start = Instant::now();
    rates.validate()?;
    let mut warnings: Vec<String> = Vec::new();

    let inputs = sanitise_freelance(inputs, &mut warnings);
    let mut withholding_pct = withholding_pct;
    clamp_pct(&mut withholding_pct, "withholding_rate_pct", &mut warnings);

    let result = calculate_freelance(&inputs, withholding_pct, rates);
    calculation_warnings(&inputs, &result, &mut warnings);

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        &format!(
            "Freelance net income ({}): revenue through social levies, IS and dividend taxation",
            inputs.structure()
        ),
        &serde_json::json!({
            "inputs": inputs,
            "withholding_rate_pct": withholding_pct.to_string(),
        }),
        warnings,
        rates.fiscal_year,
        elapsed,
        result,
    ))
}

/// Both sides plus the comparison, enveloped.
pub fn run_comparison(
    input: &ComparisonInput,
    rates: &RateTable,
) -> CdiFreelanceResult<ComputationOutput<ComparisonOutput>> {
    let start = Instant::now();
    rates.validate()?;
    let mut warnings: Vec<String> = Vec::new();

    let cdi_inputs = sanitise_cdi(&input.cdi, &mut warnings);
    let freelance_inputs = sanitise_freelance(&input.freelance, &mut warnings);

    let cdi = calculate_cdi(&cdi_inputs, freelance_inputs.working_days(), rates);
    let freelance =
        calculate_freelance(&freelance_inputs, cdi_inputs.withholding_rate_pct, rates);
    calculation_warnings(&freelance_inputs, &freelance, &mut warnings);
    let comparison = compare(&cdi, &freelance, &cdi_inputs, &freelance_inputs, rates);

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        "CDI vs freelance: net gap, winner within a 1 EUR band, \
         break-even daily rate and CDI gross",
        &serde_json::json!({
            "structure": freelance_inputs.structure(),
            "working_days": freelance_inputs.working_days().to_string(),
            "withholding_rate_pct": cdi_inputs.withholding_rate_pct.to_string(),
        }),
        warnings,
        rates.fiscal_year,
        elapsed,
        ComparisonOutput {
            cdi,
            freelance,
            comparison,
        },
    ))
}

/// Full pass over both sides.
///
/// The CDI side is computed only for a positive gross salary, the freelance
/// side only for a positive daily rate, and the comparison only when both
/// exist.
pub fn simulate(
    input: &SimulationInput,
) -> CdiFreelanceResult<ComputationOutput<SimulationOutput>> {
    let start = Instant::now();
    let rates = resolve_rates(input.rates.as_ref())?;
    let mut warnings: Vec<String> = Vec::new();

    let cdi_inputs = sanitise_cdi(&input.cdi, &mut warnings);
    let freelance_inputs = sanitise_freelance(&input.freelance, &mut warnings);

    let cdi = if cdi_inputs.gross_annual_salary > Decimal::ZERO {
        Some(calculate_cdi(&cdi_inputs, freelance_inputs.working_days(), &rates))
    } else {
        warnings.push("No gross salary: CDI side not computed".into());
        None
    };

    let freelance = if freelance_inputs.daily_rate() > Decimal::ZERO {
        let results =
            calculate_freelance(&freelance_inputs, cdi_inputs.withholding_rate_pct, &rates);
        calculation_warnings(&freelance_inputs, &results, &mut warnings);
        Some(results)
    } else {
        warnings.push("No daily rate: freelance side not computed".into());
        None
    };

    let comparison = match (&cdi, &freelance) {
        (Some(c), Some(f)) => Some(compare(c, f, &cdi_inputs, &freelance_inputs, &rates)),
        _ => None,
    };

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        "CDI vs freelance simulation",
        &serde_json::json!({
            "structure": freelance_inputs.structure(),
            "fiscal_year": rates.fiscal_year,
            "default_withholding_rate_pct": DEFAULT_WITHHOLDING_PCT.to_string(),
        }),
        warnings,
        rates.fiscal_year,
        elapsed,
        SimulationOutput {
            cdi,
            freelance,
            comparison,
        },
    ))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::comparison::Winner;
    use crate::freelance::{EurlInputs, MicroInputs, SasuInputs};
    use crate::CdiFreelanceError;

    fn micro(daily_rate: Decimal) -> FreelanceInputs {
        FreelanceInputs::Micro(MicroInputs {
            daily_rate,
            working_days: dec!(218),
        })
    }

    #[test]
    fn test_simulate_both_sides() {
        let input = SimulationInput {
            cdi: CdiInputs::new(dec!(60000), EmploymentStatus::NonExecutive),
            freelance: micro(dec!(450)),
            rates: None,
        };
        let out = simulate(&input).unwrap();
        let cmp = out.result.comparison.unwrap();
        assert_eq!(cmp.winner, Winner::Freelance);
        assert_eq!(out.result.cdi.unwrap().net_annual, dec!(42120));
        assert!(out.warnings.is_empty());
        assert_eq!(out.metadata.fiscal_year, 2025);
    }

    #[test]
    fn test_simulate_without_salary_skips_cdi() {
        let input = SimulationInput {
            cdi: CdiInputs::default(),
            freelance: micro(dec!(450)),
            rates: None,
        };
        let out = simulate(&input).unwrap();
        assert!(out.result.cdi.is_none());
        assert!(out.result.freelance.is_some());
        assert!(out.result.comparison.is_none());
        assert_eq!(out.warnings.len(), 1);
    }

    #[test]
    fn test_simulate_without_daily_rate_skips_freelance() {
        let input = SimulationInput {
            cdi: CdiInputs::new(dec!(50000), EmploymentStatus::Executive),
            freelance: micro(Decimal::ZERO),
            rates: None,
        };
        let out = simulate(&input).unwrap();
        assert!(out.result.cdi.is_some());
        assert!(out.result.freelance.is_none());
        assert!(out.result.comparison.is_none());
    }

    #[test]
    fn test_invalid_rate_table_rejected() {
        let mut rates = RateTable::default();
        rates.sasu.employer_rate = dec!(45);
        let input = SimulationInput {
            cdi: CdiInputs::new(dec!(50000), EmploymentStatus::Executive),
            freelance: micro(dec!(450)),
            rates: Some(rates),
        };
        match simulate(&input) {
            Err(CdiFreelanceError::InvalidInput { field, .. }) => {
                assert_eq!(field, "rates.sasu.employer_rate");
            }
            other => panic!("expected InvalidInput, got {other:?}"),
        }
    }

    #[test]
    fn test_sanitise_clamps_and_warns() {
        let mut warnings = Vec::new();
        let mut cdi = CdiInputs::new(dec!(-100), EmploymentStatus::Executive);
        cdi.withholding_rate_pct = dec!(150);
        cdi.custom_charge_rate_pct = Some(dec!(20));
        let out = sanitise_cdi(&cdi, &mut warnings);
        assert_eq!(out.gross_annual_salary, Decimal::ZERO);
        assert_eq!(out.withholding_rate_pct, dec!(100));
        assert!(out.custom_charge_rate_pct.is_none());
        assert_eq!(warnings.len(), 3);

        let mut warnings = Vec::new();
        let eurl = FreelanceInputs::Eurl(EurlInputs {
            daily_rate: dec!(500),
            working_days: dec!(400),
            remuneration: dec!(-1),
            share_capital: dec!(1000),
        });
        let out = sanitise_freelance(&eurl, &mut warnings);
        assert_eq!(out.working_days(), dec!(365));
        assert_eq!(warnings.len(), 2);
    }

    #[test]
    fn test_huge_amounts_capped_without_overflow() {
        let input = SimulationInput {
            cdi: CdiInputs::new(
                dec!(60000000000000000000000000000),
                EmploymentStatus::NonExecutive,
            ),
            freelance: FreelanceInputs::Sasu(SasuInputs {
                daily_rate: dec!(1000000000000000000000000000),
                working_days: dec!(218),
                gross_salary: dec!(40000),
            }),
            rates: None,
        };
        let out = simulate(&input).unwrap();
        let cdi = out.result.cdi.unwrap();
        let freelance = out.result.freelance.unwrap();
        assert_eq!(freelance.annual_revenue(), MAX_AMOUNT * dec!(218));
        assert!(cdi.net_annual > Decimal::ZERO);
        assert!(out.result.comparison.is_some());
        assert!(out.warnings.iter().any(|w| w.starts_with("daily_rate above")));
        assert!(out
            .warnings
            .iter()
            .any(|w| w.starts_with("gross_annual_salary above")));
    }

    #[test]
    fn test_amount_at_ceiling_is_untouched() {
        let mut warnings = Vec::new();
        let mut value = MAX_AMOUNT;
        clamp_amount(&mut value, "daily_rate", &mut warnings);
        assert_eq!(value, MAX_AMOUNT);
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_salary_cap_warning() {
        let inputs = FreelanceInputs::Sasu(SasuInputs {
            daily_rate: dec!(100),
            working_days: dec!(100),
            gross_salary: dec!(50000),
        });
        let out = run_freelance(&inputs, dec!(10), &RateTable::default()).unwrap();
        assert!(out.warnings.iter().any(|w| w.contains("capped at 10000")));
    }

    #[test]
    fn test_run_cdi_envelope() {
        let inputs = CdiInputs::new(dec!(60000), EmploymentStatus::NonExecutive);
        let out = run_cdi(&inputs, dec!(218), &RateTable::default()).unwrap();
        assert_eq!(out.result.net_monthly, dec!(3510));
        assert_eq!(out.metadata.precision, "rust_decimal_128bit");
        assert!(out.methodology.contains("CDI"));
    }

    #[test]
    fn test_run_comparison() {
        let input = ComparisonInput {
            cdi: CdiInputs::new(dec!(60000), EmploymentStatus::NonExecutive),
            freelance: FreelanceInputs::Eurl(EurlInputs {
                daily_rate: dec!(500),
                working_days: dec!(200),
                remuneration: dec!(60000),
                share_capital: dec!(1000),
            }),
        };
        let out = run_comparison(&input, &RateTable::default()).unwrap();
        assert_eq!(out.result.freelance.net_annual(), dec!(58699.30));
        assert_eq!(out.result.comparison.annual_gap, dec!(16579.30));
        assert_eq!(out.result.comparison.winner, Winner::Freelance);
    }
}
