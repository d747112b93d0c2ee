use clap::{Args, ValueEnum};
use rust_decimal::Decimal;
use serde_json::Value;

use cdi_freelance_core::salaried::cdi::{CdiInputs, EmploymentStatus};
use cdi_freelance_core::simulation;
use cdi_freelance_core::RateTable;

use crate::input;

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum StatusArg {
    #[value(alias = "cadre")]
    Executive,
    #[value(alias = "non-cadre")]
    NonExecutive,
    #[value(alias = "personnalise")]
    Custom,
}

impl From<StatusArg> for EmploymentStatus {
    fn from(arg: StatusArg) -> Self {
        match arg {
            StatusArg::Executive => EmploymentStatus::Executive,
            StatusArg::NonExecutive => EmploymentStatus::NonExecutive,
            StatusArg::Custom => EmploymentStatus::Custom,
        }
    }
}

/// Salaried-side flags shared by `cdi` and `compare`
#[derive(Args)]
pub struct CdiFlags {
    /// Gross annual salary in euros
    #[arg(long)]
    pub gross: Option<Decimal>,

    /// Employment category
    #[arg(long, value_enum, default_value = "executive")]
    pub status: StatusArg,

    /// Employee charge rate in percent (custom status only)
    #[arg(long)]
    pub custom_rate: Option<Decimal>,

    /// At-source income tax withholding in percent
    #[arg(long, default_value = "10")]
    pub withholding: Decimal,
}

impl CdiFlags {
    pub fn to_inputs(&self) -> Result<CdiInputs, Box<dyn std::error::Error>> {
        Ok(CdiInputs {
            gross_annual_salary: self
                .gross
                .ok_or("--gross is required (or provide --input)")?,
            status: self.status.into(),
            custom_charge_rate_pct: self.custom_rate,
            withholding_rate_pct: self.withholding,
        })
    }
}

/// Arguments for CDI net income
#[derive(Args)]
pub struct CdiArgs {
    #[command(flatten)]
    pub cdi: CdiFlags,

    /// Working days used for the equivalent daily rate
    #[arg(long, default_value = "218")]
    pub working_days: Decimal,

    /// Path to JSON/YAML input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,
}

pub fn run_cdi(args: CdiArgs, rates: &RateTable) -> Result<Value, Box<dyn std::error::Error>> {
    let cdi_input: CdiInputs = if let Some(ref path) = args.input {
        input::file::read_input(path)?
    } else if let Some(data) = input::stdin::read_stdin()? {
        data
    } else {
        args.cdi.to_inputs()?
    };
    let result = simulation::run_cdi(&cdi_input, args.working_days, rates)?;
    Ok(serde_json::to_value(result)?)
}
