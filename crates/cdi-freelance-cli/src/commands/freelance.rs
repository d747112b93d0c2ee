use clap::{Args, ValueEnum};
use rust_decimal::Decimal;
use serde_json::{json, Value};

use cdi_freelance_core::freelance::corporate_tax::corporate_tax;
use cdi_freelance_core::freelance::{EurlInputs, FreelanceInputs, MicroInputs, SasuInputs};
use cdi_freelance_core::simulation;
use cdi_freelance_core::RateTable;

use crate::input;

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum StructureArg {
    Micro,
    Sasu,
    Eurl,
}

/// Freelance-side flags shared by `freelance`, `compare` and `break-even`
#[derive(Args)]
pub struct FreelanceFlags {
    /// Legal structure
    #[arg(long, value_enum, default_value = "micro")]
    pub structure: StructureArg,

    /// Daily billing rate in euros
    #[arg(long)]
    pub daily_rate: Option<Decimal>,

    /// Billed days per year
    #[arg(long, default_value = "218")]
    pub working_days: Decimal,

    /// SASU president's gross annual salary
    #[arg(long, default_value = "0")]
    pub salary: Decimal,

    /// EURL manager's gross annual remuneration
    #[arg(long, default_value = "0")]
    pub remuneration: Decimal,

    /// EURL registered share capital
    #[arg(long, default_value = "1000")]
    pub share_capital: Decimal,
}

impl FreelanceFlags {
    /// Build inputs; `daily_rate` falls back to `default_rate` when not given.
    pub fn to_inputs(
        &self,
        default_rate: Option<Decimal>,
    ) -> Result<FreelanceInputs, Box<dyn std::error::Error>> {
        let daily_rate = self
            .daily_rate
            .or(default_rate)
            .ok_or("--daily-rate is required (or provide --input)")?;
        Ok(match self.structure {
            StructureArg::Micro => FreelanceInputs::Micro(MicroInputs {
                daily_rate,
                working_days: self.working_days,
            }),
            StructureArg::Sasu => FreelanceInputs::Sasu(SasuInputs {
                daily_rate,
                working_days: self.working_days,
                gross_salary: self.salary,
            }),
            StructureArg::Eurl => FreelanceInputs::Eurl(EurlInputs {
                daily_rate,
                working_days: self.working_days,
                remuneration: self.remuneration,
                share_capital: self.share_capital,
            }),
        })
    }
}

/// Arguments for freelance net income
#[derive(Args)]
pub struct FreelanceArgs {
    #[command(flatten)]
    pub freelance: FreelanceFlags,

    /// At-source withholding in percent on SASU salary / EURL remuneration
    #[arg(long, default_value = "10")]
    pub withholding: Decimal,

    /// Path to JSON/YAML input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,
}

/// Arguments for the corporate tax schedule
#[derive(Args)]
#[command(allow_hyphen_values = true)]
pub struct CorporateTaxArgs {
    /// Company result before corporate tax
    #[arg(long)]
    pub pre_tax_result: Decimal,
}

pub fn run_freelance(
    args: FreelanceArgs,
    rates: &RateTable,
) -> Result<Value, Box<dyn std::error::Error>> {
    let freelance_input: FreelanceInputs = if let Some(ref path) = args.input {
        input::file::read_input(path)?
    } else if let Some(data) = input::stdin::read_stdin()? {
        data
    } else {
        args.freelance.to_inputs(None)?
    };
    let result = simulation::run_freelance(&freelance_input, args.withholding, rates)?;
    Ok(serde_json::to_value(result)?)
}

pub fn run_corporate_tax(
    args: CorporateTaxArgs,
    rates: &RateTable,
) -> Result<Value, Box<dyn std::error::Error>> {
    let tax = corporate_tax(args.pre_tax_result, rates);
    let effective_rate = if args.pre_tax_result > Decimal::ZERO {
        tax / args.pre_tax_result
    } else {
        Decimal::ZERO
    };
    Ok(json!({
        "result": {
            "pre_tax_result": args.pre_tax_result.to_string(),
            "corporate_tax": tax.to_string(),
            "post_tax_result": (args.pre_tax_result.max(Decimal::ZERO) - tax).to_string(),
            "effective_rate": effective_rate.round_dp(6).to_string(),
        },
        "methodology": "Two-bracket IS: reduced rate up to the threshold, normal rate above",
        "warnings": [],
    }))
}
