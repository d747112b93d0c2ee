//! SASU: the president is paid a salary (assimilé salarié) and the whole
//! post-IS result is distributed as flat-taxed dividends.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::freelance::corporate_tax::corporate_tax;
use crate::rates::RateTable;
use crate::types::{default_working_days, pct_to_rate, Days, Money, MONTHS_PER_YEAR};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SasuInputs {
    #[serde(default)]
    pub daily_rate: Money,
    #[serde(default = "default_working_days")]
    pub working_days: Days,
    /// President's gross annual salary. Capped at revenue when calculating.
    #[serde(default)]
    pub gross_salary: Money,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SasuResults {
    pub annual_revenue: Money,
    // Salary
    pub gross_salary: Money,
    pub employee_charges: Money,
    pub employer_charges: Money,
    pub salary_net_before_withholding: Money,
    pub salary_net_after_withholding: Money,
    // Company
    pub pre_tax_result: Money,
    pub corporate_tax: Money,
    pub post_tax_result: Money,
    // Dividends
    pub gross_dividends: Money,
    pub dividend_flat_tax: Money,
    pub net_dividends: Money,
    // Total
    pub net_annual: Money,
    pub net_monthly: Money,
}

/// `withholding_pct` is the household's at-source rate, in percent.
pub fn calculate_sasu(
    inputs: &SasuInputs,
    withholding_pct: Decimal,
    rates: &RateTable,
) -> SasuResults {
    let withholding_rate = pct_to_rate(withholding_pct);
    let annual_revenue = inputs.daily_rate * inputs.working_days;
    let gross_salary = inputs.gross_salary.min(annual_revenue);

    let employee_charges = gross_salary * rates.sasu.employee_rate;
    let employer_charges = gross_salary * rates.sasu.employer_rate;
    let salary_net_before_withholding = gross_salary * (Decimal::ONE - rates.sasu.employee_rate);
    let salary_net_after_withholding =
        salary_net_before_withholding * (Decimal::ONE - withholding_rate);

    let pre_tax_result = (annual_revenue - gross_salary - employer_charges).max(Decimal::ZERO);
    let corporate_tax = corporate_tax(pre_tax_result, rates);
    let post_tax_result = pre_tax_result - corporate_tax;

    let gross_dividends = post_tax_result;
    let dividend_flat_tax = gross_dividends * rates.flat_tax_rate;
    let net_dividends = gross_dividends * (Decimal::ONE - rates.flat_tax_rate);

    let net_annual = salary_net_after_withholding + net_dividends;

    SasuResults {
        annual_revenue,
        gross_salary,
        employee_charges,
        employer_charges,
        salary_net_before_withholding,
        salary_net_after_withholding,
        pre_tax_result,
        corporate_tax,
        post_tax_result,
        gross_dividends,
        dividend_flat_tax,
        net_dividends,
        net_annual,
        net_monthly: net_annual / MONTHS_PER_YEAR,
    }
}
