//! Freelance structures: Micro-entreprise, SASU and EURL.
//!
//! Inputs and results are tagged unions over the structure kind, so callers
//! match exhaustively instead of probing optional fields.

pub mod corporate_tax;
pub mod eurl;
pub mod micro;
pub mod sasu;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::rates::RateTable;
use crate::types::{Days, Money};

pub use eurl::{calculate_eurl, EurlInputs, EurlResults};
pub use micro::{calculate_micro, MicroInputs, MicroResults};
pub use sasu::{calculate_sasu, SasuInputs, SasuResults};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Structure {
    Micro,
    Sasu,
    Eurl,
}

impl std::fmt::Display for Structure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Structure::Micro => write!(f, "micro"),
            Structure::Sasu => write!(f, "sasu"),
            Structure::Eurl => write!(f, "eurl"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "structure", rename_all = "snake_case")]
pub enum FreelanceInputs {
    Micro(MicroInputs),
    Sasu(SasuInputs),
    Eurl(EurlInputs),
}

impl FreelanceInputs {
    pub fn structure(&self) -> Structure {
        match self {
            FreelanceInputs::Micro(_) => Structure::Micro,
            FreelanceInputs::Sasu(_) => Structure::Sasu,
            FreelanceInputs::Eurl(_) => Structure::Eurl,
        }
    }

    pub fn daily_rate(&self) -> Money {
        match self {
            FreelanceInputs::Micro(i) => i.daily_rate,
            FreelanceInputs::Sasu(i) => i.daily_rate,
            FreelanceInputs::Eurl(i) => i.daily_rate,
        }
    }

    pub fn working_days(&self) -> Days {
        match self {
            FreelanceInputs::Micro(i) => i.working_days,
            FreelanceInputs::Sasu(i) => i.working_days,
            FreelanceInputs::Eurl(i) => i.working_days,
        }
    }

    /// Same inputs with a different daily rate.
    pub fn with_daily_rate(&self, daily_rate: Money) -> Self {
        let mut next = self.clone();
        match &mut next {
            FreelanceInputs::Micro(i) => i.daily_rate = daily_rate,
            FreelanceInputs::Sasu(i) => i.daily_rate = daily_rate,
            FreelanceInputs::Eurl(i) => i.daily_rate = daily_rate,
        }
        next
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "structure", rename_all = "snake_case")]
pub enum FreelanceResults {
    Micro(MicroResults),
    Sasu(SasuResults),
    Eurl(EurlResults),
}

impl FreelanceResults {
    pub fn structure(&self) -> Structure {
        match self {
            FreelanceResults::Micro(_) => Structure::Micro,
            FreelanceResults::Sasu(_) => Structure::Sasu,
            FreelanceResults::Eurl(_) => Structure::Eurl,
        }
    }

    pub fn annual_revenue(&self) -> Money {
        match self {
            FreelanceResults::Micro(r) => r.annual_revenue,
            FreelanceResults::Sasu(r) => r.annual_revenue,
            FreelanceResults::Eurl(r) => r.annual_revenue,
        }
    }

    pub fn net_annual(&self) -> Money {
        match self {
            FreelanceResults::Micro(r) => r.net_annual,
            FreelanceResults::Sasu(r) => r.net_annual,
            FreelanceResults::Eurl(r) => r.net_annual,
        }
    }

    pub fn net_monthly(&self) -> Money {
        match self {
            FreelanceResults::Micro(r) => r.net_monthly,
            FreelanceResults::Sasu(r) => r.net_monthly,
            FreelanceResults::Eurl(r) => r.net_monthly,
        }
    }
}

/// Run the calculator matching the input's structure.
///
/// `withholding_pct` applies to SASU salary and EURL remuneration; Micro
/// carries its own flat income tax.
pub fn calculate_freelance(
    inputs: &FreelanceInputs,
    withholding_pct: Decimal,
    rates: &RateTable,
) -> FreelanceResults {
    match inputs {
        FreelanceInputs::Micro(i) => FreelanceResults::Micro(calculate_micro(i, rates)),
        FreelanceInputs::Sasu(i) => {
            FreelanceResults::Sasu(calculate_sasu(i, withholding_pct, rates))
        }
        FreelanceInputs::Eurl(i) => {
            FreelanceResults::Eurl(calculate_eurl(i, withholding_pct, rates))
        }
    }
}
