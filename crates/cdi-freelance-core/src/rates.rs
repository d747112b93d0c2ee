//! Rate table for a single fiscal year.
//!
//! Every calculator takes a `&RateTable` rather than reading module-level
//! constants, so an alternate year can be loaded from a file and injected
//! without code changes. `RateTable::default()` is the 2025 schedule.
//!
//! All rates are fractions (0.22 = 22%).

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::error::CdiFreelanceError;
use crate::types::{Money, Rate};
use crate::CdiFreelanceResult;

// ---------------------------------------------------------------------------
// Rate groups
// ---------------------------------------------------------------------------

/// Salaried (CDI) employee and employer charges.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SalariedRates {
    /// Employee charges for executives ("cadre").
    pub executive_employee_rate: Rate,
    /// Employee charges for non-executives ("non-cadre").
    pub non_executive_employee_rate: Rate,
    /// Used when the status is custom but no rate was supplied.
    pub custom_employee_rate_fallback: Rate,
    /// Employer charges on top of gross salary.
    pub employer_rate: Rate,
}

impl Default for SalariedRates {
    fn default() -> Self {
        Self {
            executive_employee_rate: dec!(0.25),
            non_executive_employee_rate: dec!(0.22),
            custom_employee_rate_fallback: dec!(0.22),
            employer_rate: dec!(0.42),
        }
    }
}

/// Micro-entreprise (auto-entrepreneur) levies on revenue.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MicroRates {
    /// URSSAF social contributions.
    pub social_contribution_rate: Rate,
    /// Professional training levy (CFP).
    pub training_levy_rate: Rate,
    /// Flat income tax withholding (versement libératoire).
    pub income_tax_rate: Rate,
}

impl Default for MicroRates {
    fn default() -> Self {
        Self {
            social_contribution_rate: dec!(0.2616),
            training_levy_rate: dec!(0.002),
            income_tax_rate: dec!(0.022),
        }
    }
}

/// SASU president salary charges (assimilé salarié, no unemployment cover).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SasuRates {
    pub employee_rate: Rate,
    /// Weighted average employer charges.
    pub employer_rate: Rate,
}

impl Default for SasuRates {
    fn default() -> Self {
        Self {
            employee_rate: dec!(0.22),
            employer_rate: dec!(0.45),
        }
    }
}

/// Self-employed manager (TNS) contribution schedule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TnsRates {
    /// Abatement applied to remuneration before contributions (assiette unique).
    pub abatement_rate: Rate,
    /// Overall contribution rate applied to the abated base.
    pub contribution_rate: Rate,
}

impl Default for TnsRates {
    fn default() -> Self {
        Self {
            abatement_rate: dec!(0.26),
            contribution_rate: dec!(0.45),
        }
    }
}

/// Two-bracket corporate tax (IS) schedule. The top bracket is unbounded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CorporateTaxSchedule {
    pub reduced_rate_threshold: Money,
    pub reduced_rate: Rate,
    pub normal_rate: Rate,
}

impl Default for CorporateTaxSchedule {
    fn default() -> Self {
        Self {
            reduced_rate_threshold: dec!(42500),
            reduced_rate: dec!(0.15),
            normal_rate: dec!(0.25),
        }
    }
}

// ---------------------------------------------------------------------------
// Rate table
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RateTable {
    pub fiscal_year: i32,
    pub salaried: SalariedRates,
    pub micro: MicroRates,
    pub sasu: SasuRates,
    pub tns: TnsRates,
    pub corporate_tax: CorporateTaxSchedule,
    /// Prélèvement forfaitaire unique on dividends (12.8% IR + 17.2% PS).
    pub flat_tax_rate: Rate,
    /// Share of EURL share capital under which dividends escape TNS contributions.
    pub dividend_threshold_rate: Rate,
}

impl Default for RateTable {
    fn default() -> Self {
        Self {
            fiscal_year: 2025,
            salaried: SalariedRates::default(),
            micro: MicroRates::default(),
            sasu: SasuRates::default(),
            tns: TnsRates::default(),
            corporate_tax: CorporateTaxSchedule::default(),
            flat_tax_rate: dec!(0.30),
            dividend_threshold_rate: dec!(0.10),
        }
    }
}

impl RateTable {
    /// Sum of all micro levies (28.56% for 2025).
    pub fn micro_total_rate(&self) -> Rate {
        self.micro.social_contribution_rate
            + self.micro.training_levy_rate
            + self.micro.income_tax_rate
    }

    /// Check that every rate is a fraction and the IS threshold is not negative.
    pub fn validate(&self) -> CdiFreelanceResult<()> {
        let rates: [(&str, Rate); 15] = [
            (
                "salaried.executive_employee_rate",
                self.salaried.executive_employee_rate,
            ),
            (
                "salaried.non_executive_employee_rate",
                self.salaried.non_executive_employee_rate,
            ),
            (
                "salaried.custom_employee_rate_fallback",
                self.salaried.custom_employee_rate_fallback,
            ),
            ("salaried.employer_rate", self.salaried.employer_rate),
            (
                "micro.social_contribution_rate",
                self.micro.social_contribution_rate,
            ),
            ("micro.training_levy_rate", self.micro.training_levy_rate),
            ("micro.income_tax_rate", self.micro.income_tax_rate),
            ("sasu.employee_rate", self.sasu.employee_rate),
            ("sasu.employer_rate", self.sasu.employer_rate),
            ("tns.abatement_rate", self.tns.abatement_rate),
            ("tns.contribution_rate", self.tns.contribution_rate),
            ("corporate_tax.reduced_rate", self.corporate_tax.reduced_rate),
            ("corporate_tax.normal_rate", self.corporate_tax.normal_rate),
            ("flat_tax_rate", self.flat_tax_rate),
            ("dividend_threshold_rate", self.dividend_threshold_rate),
        ];

        for (field, rate) in rates {
            if rate < Decimal::ZERO || rate > Decimal::ONE {
                return Err(CdiFreelanceError::InvalidInput {
                    field: format!("rates.{field}"),
                    reason: format!("Rate must be between 0 and 1, got {rate}"),
                });
            }
        }

        if self.corporate_tax.reduced_rate_threshold < Decimal::ZERO {
            return Err(CdiFreelanceError::InvalidInput {
                field: "rates.corporate_tax.reduced_rate_threshold".into(),
                reason: "Reduced-rate threshold cannot be negative".into(),
            });
        }
        Ok(())
    }
}
