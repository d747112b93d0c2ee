//! EURL with a majority manager (gérant majoritaire, TNS).
//!
//! Remuneration bears TNS contributions on an abated base. Dividends up to
//! 10% of share capital are flat-taxed; the excess is treated like
//! remuneration for contribution purposes.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::freelance::corporate_tax::corporate_tax;
use crate::rates::RateTable;
use crate::types::{
    default_share_capital, default_working_days, pct_to_rate, Days, Money, MONTHS_PER_YEAR,
};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EurlInputs {
    #[serde(default)]
    pub daily_rate: Money,
    #[serde(default = "default_working_days")]
    pub working_days: Days,
    /// Manager's gross annual remuneration. Capped at revenue when calculating.
    #[serde(default)]
    pub remuneration: Money,
    #[serde(default = "default_share_capital")]
    pub share_capital: Money,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EurlResults {
    pub annual_revenue: Money,
    // Remuneration
    pub remuneration: Money,
    pub contribution_base: Money,
    pub tns_contributions: Money,
    pub remuneration_net_before_withholding: Money,
    pub remuneration_net_after_withholding: Money,
    // Company
    pub pre_tax_result: Money,
    pub corporate_tax: Money,
    pub post_tax_result: Money,
    // Dividends
    pub gross_dividends: Money,
    pub dividend_threshold: Money,
    pub flat_taxed_dividends: Money,
    pub contribution_liable_dividends: Money,
    pub dividend_tns_contributions: Money,
    pub dividend_flat_tax: Money,
    pub net_dividends: Money,
    // Total
    pub net_annual: Money,
    pub net_monthly: Money,
}

/// TNS contributions on an amount: abated base times the contribution rate.
fn tns_contributions(amount: Money, rates: &RateTable) -> (Money, Money) {
    let base = amount * (Decimal::ONE - rates.tns.abatement_rate);
    (base, base * rates.tns.contribution_rate)
}

/// `withholding_pct` is the household's at-source rate, in percent.
pub fn calculate_eurl(
    inputs: &EurlInputs,
    withholding_pct: Decimal,
    rates: &RateTable,
) -> EurlResults {
    let withholding_rate = pct_to_rate(withholding_pct);
    let annual_revenue = inputs.daily_rate * inputs.working_days;
    let remuneration = inputs.remuneration.min(annual_revenue);

    let (contribution_base, tns_on_remuneration) = tns_contributions(remuneration, rates);
    let remuneration_net_before_withholding = remuneration - tns_on_remuneration;
    let remuneration_net_after_withholding =
        remuneration_net_before_withholding * (Decimal::ONE - withholding_rate);

    // TNS contributions are not deducted here, unlike SASU employer charges.
    let pre_tax_result = (annual_revenue - remuneration).max(Decimal::ZERO);
    let corporate_tax = corporate_tax(pre_tax_result, rates);
    let post_tax_result = pre_tax_result - corporate_tax;

    let gross_dividends = post_tax_result;
    let dividend_threshold = inputs.share_capital * rates.dividend_threshold_rate;
    let flat_taxed_dividends = gross_dividends.min(dividend_threshold);
    let contribution_liable_dividends = (gross_dividends - dividend_threshold).max(Decimal::ZERO);

    let (_, dividend_tns_contributions) = tns_contributions(contribution_liable_dividends, rates);
    let net_liable_dividends = contribution_liable_dividends - dividend_tns_contributions;

    let dividend_flat_tax = flat_taxed_dividends * rates.flat_tax_rate;
    let net_flat_dividends = flat_taxed_dividends * (Decimal::ONE - rates.flat_tax_rate);

    let net_dividends = net_liable_dividends + net_flat_dividends;
    let net_annual = remuneration_net_after_withholding + net_dividends;

    EurlResults {
        annual_revenue,
        remuneration,
        contribution_base,
        tns_contributions: tns_on_remuneration,
        remuneration_net_before_withholding,
        remuneration_net_after_withholding,
        pre_tax_result,
        corporate_tax,
        post_tax_result,
        gross_dividends,
        dividend_threshold,
        flat_taxed_dividends,
        contribution_liable_dividends,
        dividend_tns_contributions,
        dividend_flat_tax,
        net_dividends,
        net_annual,
        net_monthly: net_annual / MONTHS_PER_YEAR,
    }
}
