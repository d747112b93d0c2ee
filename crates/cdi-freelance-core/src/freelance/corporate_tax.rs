use rust_decimal::Decimal;

use crate::rates::RateTable;
use crate::types::Money;

/// Corporate tax (IS) on a pre-tax company result.
///
/// Reduced rate up to the threshold, normal rate on the excess. Nothing is
/// due on a zero or negative result.
pub fn corporate_tax(pre_tax_result: Money, rates: &RateTable) -> Money {
    let schedule = &rates.corporate_tax;
    if pre_tax_result <= Decimal::ZERO {
        return Decimal::ZERO;
    }
    if pre_tax_result <= schedule.reduced_rate_threshold {
        return pre_tax_result * schedule.reduced_rate;
    }
    schedule.reduced_rate_threshold * schedule.reduced_rate
        + (pre_tax_result - schedule.reduced_rate_threshold) * schedule.normal_rate
}
