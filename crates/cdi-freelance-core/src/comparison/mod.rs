//! CDI vs freelance comparison: gap, winner and break-even points.

pub mod break_even;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::freelance::{FreelanceInputs, FreelanceResults};
use crate::rates::RateTable;
use crate::salaried::cdi::{CdiInputs, CdiResults};
use crate::types::{Money, Rate};

pub use break_even::{break_even_cdi_gross, break_even_daily_rate};

/// Gaps smaller than one euro are reported as a tie.
pub const EQUALITY_TOLERANCE: Decimal = dec!(1);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Winner {
    Cdi,
    Freelance,
    Equal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonResults {
    pub winner: Winner,
    /// Freelance net minus CDI net.
    pub annual_gap: Money,
    /// Gap relative to CDI net, in percent.
    pub gap_pct: Rate,
    /// Daily rate at which freelance net equals CDI net.
    pub break_even_daily_rate: Money,
    /// CDI gross salary at which CDI net equals freelance net.
    pub break_even_cdi_gross: Money,
}

pub fn classify_winner(annual_gap: Money) -> Winner {
    if annual_gap.abs() < EQUALITY_TOLERANCE {
        Winner::Equal
    } else if annual_gap > Decimal::ZERO {
        Winner::Freelance
    } else {
        Winner::Cdi
    }
}

pub fn compare(
    cdi_results: &CdiResults,
    freelance_results: &FreelanceResults,
    cdi_inputs: &CdiInputs,
    freelance_inputs: &FreelanceInputs,
    rates: &RateTable,
) -> ComparisonResults {
    let cdi_net = cdi_results.net_annual;
    let freelance_net = freelance_results.net_annual();

    let annual_gap = freelance_net - cdi_net;
    let gap_pct = if cdi_net > Decimal::ZERO {
        annual_gap / cdi_net * dec!(100)
    } else {
        Decimal::ZERO
    };

    let break_even_daily_rate = break_even_daily_rate(
        cdi_net,
        freelance_inputs,
        cdi_inputs.withholding_rate_pct,
        rates,
    );
    let break_even_cdi_gross = break_even_cdi_gross(
        freelance_net,
        cdi_results.applied_charge_rate,
        cdi_inputs.withholding_rate_pct,
    );

    ComparisonResults {
        winner: classify_winner(annual_gap),
        annual_gap,
        gap_pct,
        break_even_daily_rate,
        break_even_cdi_gross,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::freelance::{calculate_freelance, MicroInputs};
    use crate::salaried::cdi::{calculate_cdi, EmploymentStatus};

    #[test]
    fn test_winner_bands() {
        assert_eq!(classify_winner(dec!(0.5)), Winner::Equal);
        assert_eq!(classify_winner(dec!(-0.99)), Winner::Equal);
        assert_eq!(classify_winner(dec!(1)), Winner::Freelance);
        assert_eq!(classify_winner(dec!(2)), Winner::Freelance);
        assert_eq!(classify_winner(dec!(-2)), Winner::Cdi);
    }

    #[test]
    fn test_micro_vs_cdi_60k() {
        let rates = RateTable::default();
        let cdi_inputs = CdiInputs::new(dec!(60000), EmploymentStatus::NonExecutive);
        let freelance_inputs = FreelanceInputs::Micro(MicroInputs {
            daily_rate: dec!(450),
            working_days: dec!(218),
        });
        let cdi = calculate_cdi(&cdi_inputs, freelance_inputs.working_days(), &rates);
        let freelance =
            calculate_freelance(&freelance_inputs, cdi_inputs.withholding_rate_pct, &rates);

        let out = compare(&cdi, &freelance, &cdi_inputs, &freelance_inputs, &rates);
        assert_eq!(out.winner, Winner::Freelance);
        assert_eq!(out.annual_gap, dec!(27962.64));
        // 42120 / (218 * 0.7144)
        assert!((out.break_even_daily_rate - dec!(270.4521)).abs() < dec!(0.001));
        // 70082.64 / 0.702
        assert!((out.break_even_cdi_gross - dec!(99832.82)).abs() < dec!(0.01));
    }

    #[test]
    fn test_zero_cdi_net_gap_pct_guard() {
        let rates = RateTable::default();
        let cdi_inputs = CdiInputs::new(Decimal::ZERO, EmploymentStatus::Executive);
        let freelance_inputs = FreelanceInputs::Micro(MicroInputs {
            daily_rate: dec!(300),
            working_days: dec!(200),
        });
        let cdi = calculate_cdi(&cdi_inputs, dec!(200), &rates);
        let freelance = calculate_freelance(&freelance_inputs, dec!(10), &rates);
        let out = compare(&cdi, &freelance, &cdi_inputs, &freelance_inputs, &rates);
        assert_eq!(out.gap_pct, Decimal::ZERO);
        assert_eq!(out.break_even_daily_rate, Decimal::ZERO);
    }
}
