use cdi_freelance_core::comparison::{break_even_daily_rate, compare, Winner};
use cdi_freelance_core::freelance::corporate_tax::corporate_tax;
use cdi_freelance_core::freelance::{
    calculate_freelance, EurlInputs, FreelanceInputs, FreelanceResults, MicroInputs, SasuInputs,
};
use cdi_freelance_core::salaried::cdi::{calculate_cdi, CdiInputs, EmploymentStatus};
use cdi_freelance_core::RateTable;
use pretty_assertions::assert_eq;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

// ===========================================================================
// Helpers
// ===========================================================================

fn micro(daily_rate: Decimal) -> FreelanceInputs {
    FreelanceInputs::Micro(MicroInputs {
        daily_rate,
        working_days: dec!(218),
    })
}

fn sasu(daily_rate: Decimal, gross_salary: Decimal) -> FreelanceInputs {
    FreelanceInputs::Sasu(SasuInputs {
        daily_rate,
        working_days: dec!(218),
        gross_salary,
    })
}

fn eurl(daily_rate: Decimal, remuneration: Decimal) -> FreelanceInputs {
    FreelanceInputs::Eurl(EurlInputs {
        daily_rate,
        working_days: dec!(218),
        remuneration,
        share_capital: dec!(1000),
    })
}

fn all_structures(daily_rate: Decimal) -> Vec<FreelanceInputs> {
    vec![
        micro(daily_rate),
        sasu(daily_rate, dec!(30000)),
        sasu(daily_rate, Decimal::ZERO),
        eurl(daily_rate, dec!(40000)),
        eurl(daily_rate, Decimal::ZERO),
    ]
}

// ===========================================================================
// Structural properties
// ===========================================================================

#[test]
fn test_net_never_exceeds_revenue() {
    let rates = RateTable::default();
    for daily_rate in [dec!(50), dec!(150), dec!(300), dec!(450), dec!(800), dec!(1500)] {
        for inputs in all_structures(daily_rate) {
            let out = calculate_freelance(&inputs, dec!(10), &rates);
            assert!(
                out.net_annual() <= out.annual_revenue(),
                "{} at {}: net {} > revenue {}",
                inputs.structure(),
                daily_rate,
                out.net_annual(),
                out.annual_revenue()
            );
        }
    }
}

#[test]
fn test_micro_closed_form_invariant() {
    let rates = RateTable::default();
    for daily_rate in [dec!(1), dec!(237.5), dec!(450), dec!(999.99)] {
        let out = calculate_freelance(&micro(daily_rate), dec!(10), &rates);
        assert_eq!(out.net_annual(), out.annual_revenue() * dec!(0.7144));
    }
}

#[test]
fn test_net_monotonic_in_daily_rate() {
    let rates = RateTable::default();
    let templates = all_structures(Decimal::ZERO);
    for template in &templates {
        let mut previous = Decimal::MIN;
        let mut daily_rate = Decimal::ZERO;
        while daily_rate <= dec!(1500) {
            let out = calculate_freelance(&template.with_daily_rate(daily_rate), dec!(10), &rates);
            assert!(
                out.net_annual() >= previous,
                "{}: net dropped at daily rate {}",
                template.structure(),
                daily_rate
            );
            previous = out.net_annual();
            daily_rate += dec!(12.5);
        }
    }
}

// ===========================================================================
// Break-even
// ===========================================================================

#[test]
fn test_break_even_round_trip_sasu_and_eurl() {
    let rates = RateTable::default();
    let target = dec!(50000);
    for inputs in [
        sasu(dec!(1), dec!(30000)),
        sasu(dec!(1), Decimal::ZERO),
        eurl(dec!(1), dec!(40000)),
        eurl(dec!(1), Decimal::ZERO),
    ] {
        let rate = break_even_daily_rate(target, &inputs, dec!(10), &rates);
        let net = calculate_freelance(&inputs.with_daily_rate(rate), dec!(10), &rates).net_annual();
        assert!(
            (net - target).abs() < dec!(1),
            "{}: net {} at break-even rate {}",
            inputs.structure(),
            net,
            rate
        );
    }
}

#[test]
fn test_comparison_break_even_reaches_cdi_net() {
    let rates = RateTable::default();
    let cdi_inputs = CdiInputs::new(dec!(60000), EmploymentStatus::NonExecutive);
    let freelance_inputs = eurl(dec!(400), dec!(30000));
    let cdi = calculate_cdi(&cdi_inputs, dec!(218), &rates);
    let freelance = calculate_freelance(&freelance_inputs, dec!(10), &rates);
    let cmp = compare(&cdi, &freelance, &cdi_inputs, &freelance_inputs, &rates);

    let at_break_even = calculate_freelance(
        &freelance_inputs.with_daily_rate(cmp.break_even_daily_rate),
        dec!(10),
        &rates,
    );
    assert!((at_break_even.net_annual() - cdi.net_annual).abs() < dec!(1));

    let cdi_at_break_even = calculate_cdi(
        &CdiInputs::new(cmp.break_even_cdi_gross, EmploymentStatus::NonExecutive),
        dec!(218),
        &rates,
    );
    assert!((cdi_at_break_even.net_annual - freelance.net_annual()).abs() < dec!(0.01));
}

// ===========================================================================
// Winner classification
// ===========================================================================

/// Micro daily rate whose net is exactly `net` over 218 days.
fn micro_rate_for_net(net: Decimal) -> Decimal {
    net / (dec!(218) * dec!(0.7144))
}

#[test]
fn test_half_euro_gap_is_equal() {
    let rates = RateTable::default();
    let cdi_inputs = CdiInputs::new(dec!(60000), EmploymentStatus::NonExecutive);
    let cdi = calculate_cdi(&cdi_inputs, dec!(218), &rates);
    let freelance_inputs = micro(micro_rate_for_net(dec!(42120.50)));
    let freelance = calculate_freelance(&freelance_inputs, dec!(10), &rates);

    let cmp = compare(&cdi, &freelance, &cdi_inputs, &freelance_inputs, &rates);
    assert!((cmp.annual_gap - dec!(0.5)).abs() < dec!(0.0001));
    assert_eq!(cmp.winner, Winner::Equal);
}

#[test]
fn test_two_euro_gap_freelance_wins() {
    let rates = RateTable::default();
    let cdi_inputs = CdiInputs::new(dec!(60000), EmploymentStatus::NonExecutive);
    let cdi = calculate_cdi(&cdi_inputs, dec!(218), &rates);
    let freelance_inputs = micro(micro_rate_for_net(dec!(42122)));
    let freelance = calculate_freelance(&freelance_inputs, dec!(10), &rates);

    let cmp = compare(&cdi, &freelance, &cdi_inputs, &freelance_inputs, &rates);
    assert_eq!(cmp.winner, Winner::Freelance);
}

#[test]
fn test_cdi_wins_with_low_daily_rate() {
    let rates = RateTable::default();
    let cdi_inputs = CdiInputs::new(dec!(60000), EmploymentStatus::Executive);
    let cdi = calculate_cdi(&cdi_inputs, dec!(218), &rates);
    let freelance_inputs = sasu(dec!(200), dec!(20000));
    let freelance = calculate_freelance(&freelance_inputs, dec!(10), &rates);

    let cmp = compare(&cdi, &freelance, &cdi_inputs, &freelance_inputs, &rates);
    assert_eq!(cmp.winner, Winner::Cdi);
    assert!(cmp.gap_pct < Decimal::ZERO);
    assert!(cmp.break_even_daily_rate > dec!(200));
}

// ===========================================================================
// Clamps and thresholds
// ===========================================================================

#[test]
fn test_salary_and_remuneration_capped_at_revenue() {
    let rates = RateTable::default();
    match calculate_freelance(&sasu(dec!(300), dec!(1000000)), dec!(10), &rates) {
        FreelanceResults::Sasu(r) => assert_eq!(r.gross_salary, dec!(65400)),
        other => panic!("unexpected {other:?}"),
    }
    match calculate_freelance(&eurl(dec!(300), dec!(1000000)), dec!(10), &rates) {
        FreelanceResults::Eurl(r) => assert_eq!(r.remuneration, dec!(65400)),
        other => panic!("unexpected {other:?}"),
    }
}

#[test]
fn test_corporate_tax_bracket_boundary() {
    let rates = RateTable::default();
    let at = corporate_tax(dec!(42500), &rates);
    assert_eq!(at, dec!(42500) * dec!(0.15));
    assert_eq!(corporate_tax(dec!(42501), &rates) - at, dec!(0.25));
}

#[test]
fn test_eurl_dividend_threshold_split() {
    let rates = RateTable::default();
    match calculate_freelance(&eurl(dec!(400), dec!(50000)), dec!(10), &rates) {
        FreelanceResults::Eurl(r) => {
            assert_eq!(r.dividend_threshold, dec!(100));
            assert!(r.gross_dividends > dec!(100));
            assert_eq!(r.flat_taxed_dividends, dec!(100));
            assert_eq!(
                r.contribution_liable_dividends,
                r.gross_dividends - dec!(100)
            );
        }
        other => panic!("unexpected {other:?}"),
    }
}

// ===========================================================================
// Rate table injection
// ===========================================================================

#[test]
fn test_alternate_rate_table_changes_results() {
    let mut rates = RateTable::default();
    rates.flat_tax_rate = dec!(0.314);
    let inputs = sasu(dec!(500), Decimal::ZERO);
    let base = calculate_freelance(&inputs, dec!(10), &RateTable::default());
    let alt = calculate_freelance(&inputs, dec!(10), &rates);
    assert!(alt.net_annual() < base.net_annual());
}
