//! Micro-entreprise: every levy is a fixed share of revenue, so net income
//! is a single linear transform of revenue.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::rates::RateTable;
use crate::types::{default_working_days, Days, Money, MONTHS_PER_YEAR};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MicroInputs {
    #[serde(default)]
    pub daily_rate: Money,
    #[serde(default = "default_working_days")]
    pub working_days: Days,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MicroResults {
    pub annual_revenue: Money,
    pub social_contributions: Money,
    pub training_levy: Money,
    pub income_tax_withholding: Money,
    pub total_deductions: Money,
    pub net_annual: Money,
    pub net_monthly: Money,
}

pub fn calculate_micro(inputs: &MicroInputs, rates: &RateTable) -> MicroResults {
    let annual_revenue = inputs.daily_rate * inputs.working_days;
    let social_contributions = annual_revenue * rates.micro.social_contribution_rate;
    let training_levy = annual_revenue * rates.micro.training_levy_rate;
    let income_tax_withholding = annual_revenue * rates.micro.income_tax_rate;
    let total_deductions = annual_revenue * rates.micro_total_rate();
    let net_annual = annual_revenue - total_deductions;

    MicroResults {
        annual_revenue,
        social_contributions,
        training_levy,
        income_tax_withholding,
        total_deductions,
        net_annual,
        net_monthly: net_annual / MONTHS_PER_YEAR,
    }
}

/// Daily rate at which micro net income reaches `target`.
///
/// Only valid for this structure: net is linear in revenue here and nowhere
/// else.
pub fn micro_break_even_daily_rate(target: Money, working_days: Days, rates: &RateTable) -> Money {
    let kept_share = Decimal::ONE - rates.micro_total_rate();
    if working_days <= Decimal::ZERO || kept_share <= Decimal::ZERO {
        return Decimal::ZERO;
    }
    target / (working_days * kept_share)
}
