use clap::Args;
use rust_decimal::Decimal;
use serde_json::{json, Value};

use cdi_freelance_core::comparison::break_even_daily_rate;
use cdi_freelance_core::simulation::{self, ComparisonInput, SimulationInput};
use cdi_freelance_core::RateTable;

use crate::commands::freelance::FreelanceFlags;
use crate::commands::salaried::CdiFlags;
use crate::input;

/// Arguments for a CDI vs freelance comparison
#[derive(Args)]
pub struct CompareArgs {
    #[command(flatten)]
    pub cdi: CdiFlags,

    #[command(flatten)]
    pub freelance: FreelanceFlags,

    /// Path to JSON/YAML input file with `cdi` and `freelance` sections
    #[arg(long)]
    pub input: Option<String>,
}

/// Arguments for the full simulation pass
#[derive(Args)]
pub struct SimulateArgs {
    /// Path to JSON/YAML input file with `cdi`, `freelance` and optional `rates`
    #[arg(long)]
    pub input: Option<String>,
}

/// Arguments for the break-even daily rate solver
#[derive(Args)]
pub struct BreakEvenArgs {
    /// Net annual income to reach
    #[arg(long)]
    pub target_net: Decimal,

    #[command(flatten)]
    pub freelance: FreelanceFlags,

    /// At-source withholding in percent on SASU salary / EURL remuneration
    #[arg(long, default_value = "10")]
    pub withholding: Decimal,
}

pub fn run_compare(
    args: CompareArgs,
    rates: &RateTable,
) -> Result<Value, Box<dyn std::error::Error>> {
    let compare_input: ComparisonInput = if let Some(ref path) = args.input {
        input::file::read_input(path)?
    } else if let Some(data) = input::stdin::read_stdin()? {
        data
    } else {
        ComparisonInput {
            cdi: args.cdi.to_inputs()?,
            freelance: args.freelance.to_inputs(None)?,
        }
    };
    let result = simulation::run_comparison(&compare_input, rates)?;
    Ok(serde_json::to_value(result)?)
}

pub fn run_simulate(
    args: SimulateArgs,
    rates: &RateTable,
) -> Result<Value, Box<dyn std::error::Error>> {
    let mut sim_input: SimulationInput = if let Some(ref path) = args.input {
        input::file::read_input(path)?
    } else if let Some(data) = input::stdin::read_stdin()? {
        data
    } else {
        return Err("--input <file.json> or stdin required for simulate".into());
    };
    // An embedded table wins over --rates.
    if sim_input.rates.is_none() {
        sim_input.rates = Some(rates.clone());
    }
    let result = simulation::simulate(&sim_input)?;
    Ok(serde_json::to_value(result)?)
}

pub fn run_break_even(
    args: BreakEvenArgs,
    rates: &RateTable,
) -> Result<Value, Box<dyn std::error::Error>> {
    let mut warnings: Vec<String> = Vec::new();
    let raw_input = args.freelance.to_inputs(Some(Decimal::ZERO))?;
    let freelance_input = simulation::sanitise_freelance(&raw_input, &mut warnings);
    let mut target_net = args.target_net;
    simulation::clamp_amount(&mut target_net, "target_net", &mut warnings);
    let mut withholding = args.withholding;
    simulation::clamp_pct(&mut withholding, "withholding_rate_pct", &mut warnings);

    let rate = break_even_daily_rate(target_net, &freelance_input, withholding, rates);
    tracing::debug!(
        structure = %freelance_input.structure(),
        target = %target_net,
        rate = %rate,
        "solved break-even daily rate"
    );
    if freelance_input.working_days().is_zero() {
        warnings.push("Zero working days: no daily rate can reach the target".to_string());
    }
    Ok(json!({
        "result": {
            "structure": freelance_input.structure(),
            "target_net": target_net.to_string(),
            "break_even_daily_rate": rate.round_dp(2).to_string(),
            "annual_revenue": (rate * freelance_input.working_days()).round_dp(2).to_string(),
            "working_days": freelance_input.working_days().to_string(),
        },
        "methodology": "Closed form for micro; \
                        60-step bisection over annual revenue in [0, 20 x target] otherwise",
        "warnings": warnings,
    }))
}
