//! Salaried employment (CDI) net income.
//!
//! Gross salary goes through employee charges, then at-source income tax
//! withholding (PAS). The employer cost and the daily rate a client would
//! have to pay to cover it are reported alongside.
//!
//! No error conditions: degenerate inputs yield zeros.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::rates::RateTable;
use crate::types::{
    default_withholding_pct, pct_to_rate, Days, Money, Rate, MONTHS_PER_YEAR,
};

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Employment category, which drives the employee charge rate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmploymentStatus {
    #[default]
    #[serde(alias = "cadre")]
    Executive,
    #[serde(alias = "non-cadre", alias = "non-executive")]
    NonExecutive,
    #[serde(alias = "personnalise")]
    Custom,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CdiInputs {
    #[serde(default)]
    pub gross_annual_salary: Money,
    #[serde(default)]
    pub status: EmploymentStatus,
    /// Employee charge rate in percent, only read when `status` is custom.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_charge_rate_pct: Option<Decimal>,
    /// At-source income tax withholding in percent.
    #[serde(default = "default_withholding_pct")]
    pub withholding_rate_pct: Decimal,
}

impl Default for CdiInputs {
    fn default() -> Self {
        Self::new(Decimal::ZERO, EmploymentStatus::default())
    }
}

impl CdiInputs {
    pub fn new(gross_annual_salary: Money, status: EmploymentStatus) -> Self {
        Self {
            gross_annual_salary,
            status,
            custom_charge_rate_pct: None,
            withholding_rate_pct: default_withholding_pct(),
        }
    }

    /// Withholding as a fraction.
    pub fn withholding_rate(&self) -> Rate {
        pct_to_rate(self.withholding_rate_pct)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CdiResults {
    pub net_before_withholding: Money,
    pub withholding: Money,
    /// Net after withholding; the figure every comparison uses.
    pub net_annual: Money,
    pub net_monthly: Money,
    pub employer_cost_annual: Money,
    /// Employer cost spread over the freelance side's working days.
    pub equivalent_daily_rate: Money,
    pub applied_charge_rate: Rate,
}

// ---------------------------------------------------------------------------
// Calculation
// ---------------------------------------------------------------------------

/// Employee charge rate for the given status, as a fraction.
pub fn employee_charge_rate(inputs: &CdiInputs, rates: &RateTable) -> Rate {
    match inputs.status {
        EmploymentStatus::Executive => rates.salaried.executive_employee_rate,
        EmploymentStatus::NonExecutive => rates.salaried.non_executive_employee_rate,
        EmploymentStatus::Custom => inputs
            .custom_charge_rate_pct
            .map(pct_to_rate)
            .unwrap_or(rates.salaried.custom_employee_rate_fallback),
    }
}

/// Compute CDI net income.
///
/// `working_days` comes from the freelance side and only feeds the
/// equivalent daily rate; zero or negative days give a daily rate of 0.
pub fn calculate_cdi(inputs: &CdiInputs, working_days: Days, rates: &RateTable) -> CdiResults {
    let charge_rate = employee_charge_rate(inputs, rates);
    let gross = inputs.gross_annual_salary;

    let net_before_withholding = gross * (Decimal::ONE - charge_rate);
    let withholding = net_before_withholding * inputs.withholding_rate();
    let net_annual = net_before_withholding - withholding;

    let employer_cost_annual = gross * (Decimal::ONE + rates.salaried.employer_rate);
    let equivalent_daily_rate = if working_days > Decimal::ZERO {
        employer_cost_annual / working_days
    } else {
        Decimal::ZERO
    };

    CdiResults {
        net_before_withholding,
        withholding,
        net_annual,
        net_monthly: net_annual / MONTHS_PER_YEAR,
        employer_cost_annual,
        equivalent_daily_rate,
        applied_charge_rate: charge_rate,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
