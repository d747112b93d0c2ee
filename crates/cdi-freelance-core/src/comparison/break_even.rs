//! Break-even solvers.
//!
//! Daily rate: closed form for Micro (net is linear in revenue), bisection
//! over annual revenue for SASU and EURL, whose net is piecewise with IS and
//! dividend thresholds. The bisection runs a fixed 60 halvings with no
//! tolerance check, so output is reproducible and bounded in cost.
//!
//! CDI gross: direct inversion of the CDI net formula.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::freelance::micro::micro_break_even_daily_rate;
use crate::freelance::{calculate_freelance, FreelanceInputs};
use crate::rates::RateTable;
use crate::types::{pct_to_rate, Money, Rate};

/// Halvings of the revenue interval.
pub const BISECTION_ITERATIONS: u32 = 60;

/// Upper revenue bound as a multiple of the target net.
pub const REVENUE_UPPER_BOUND_MULTIPLE: Decimal = dec!(20);

/// Minimal daily rate at which the freelance structure nets at least `target`.
///
/// Returns 0 when the inputs have no positive working days.
pub fn break_even_daily_rate(
    target: Money,
    inputs: &FreelanceInputs,
    withholding_pct: Decimal,
    rates: &RateTable,
) -> Money {
    let working_days = inputs.working_days();
    if working_days <= Decimal::ZERO {
        return Decimal::ZERO;
    }

    match inputs {
        FreelanceInputs::Micro(_) => micro_break_even_daily_rate(target, working_days, rates),
        FreelanceInputs::Sasu(_) | FreelanceInputs::Eurl(_) => {
            bisect_revenue(target, inputs, withholding_pct, rates) / working_days
        }
    }
}

/// Bisect annual revenue in [0, target × 20] for the point where net meets target.
fn bisect_revenue(
    target: Money,
    inputs: &FreelanceInputs,
    withholding_pct: Decimal,
    rates: &RateTable,
) -> Money {
    let working_days = inputs.working_days();
    let mut lo = Decimal::ZERO;
    let mut hi = target * REVENUE_UPPER_BOUND_MULTIPLE;

    for _ in 0..BISECTION_ITERATIONS {
        let mid = (lo + hi) / dec!(2);
        let trial = inputs.with_daily_rate(mid / working_days);
        let net = calculate_freelance(&trial, withholding_pct, rates).net_annual();
        if net < target {
            lo = mid;
        } else {
            hi = mid;
        }
    }

    (lo + hi) / dec!(2)
}

/// CDI gross salary whose net after charges and withholding equals `freelance_net`.
///
/// Returns 0 when charges or withholding leave nothing (denominator ≤ 0).
pub fn break_even_cdi_gross(
    freelance_net: Money,
    charge_rate: Rate,
    withholding_pct: Decimal,
) -> Money {
    let denominator =
        (Decimal::ONE - charge_rate) * (Decimal::ONE - pct_to_rate(withholding_pct));
    if denominator <= Decimal::ZERO {
        return Decimal::ZERO;
    }
    freelance_net / denominator
}
