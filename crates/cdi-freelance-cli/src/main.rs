mod commands;
mod config;
mod input;
mod output;

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::process;
use tracing_subscriber::EnvFilter;

use commands::comparison::{BreakEvenArgs, CompareArgs, SimulateArgs};
use commands::freelance::{CorporateTaxArgs, FreelanceArgs};
use commands::salaried::CdiArgs;

/// Net income comparison between a French CDI and freelance structures
#[derive(Parser)]
#[command(
    name = "cvf",
    version,
    about = "Compare CDI salary with Micro, SASU and EURL freelance income",
    long_about = "A CLI for comparing the net annual income of a French permanent \
                  employment contract (CDI) with freelancing under Micro-entreprise, \
                  SASU or EURL, with decimal precision. Computes each side, the winner, \
                  the break-even daily rate and the equivalent CDI gross salary."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format
    #[arg(long, default_value = "json", global = true)]
    output: OutputFormat,

    /// Rate table override (JSON or YAML, partial tables allowed)
    #[arg(long, global = true)]
    rates: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Net income of a CDI employee
    Cdi(CdiArgs),
    /// Net income of a freelancer under Micro, SASU or EURL
    Freelance(FreelanceArgs),
    /// Compare a CDI with a freelance structure
    Compare(CompareArgs),
    /// Run a full simulation from a JSON or YAML document
    Simulate(SimulateArgs),
    /// Daily rate needed to reach a target net income
    BreakEven(BreakEvenArgs),
    /// Corporate tax (IS) due on a pre-tax result
    CorporateTax(CorporateTaxArgs),
    /// Print the active rate table
    Rates,
    /// Print version information
    Version,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Csv,
    Minimal,
}

impl Commands {
    fn name(&self) -> &'static str {
        match self {
            Commands::Cdi(_) => "cdi",
            Commands::Freelance(_) => "freelance",
            Commands::Compare(_) => "compare",
            Commands::Simulate(_) => "simulate",
            Commands::BreakEven(_) => "break-even",
            Commands::CorporateTax(_) => "corporate-tax",
            Commands::Rates => "rates",
            Commands::Version => "version",
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

fn run(
    command: Commands,
    rates_path: Option<&str>,
) -> Result<serde_json::Value, Box<dyn std::error::Error>> {
    let rates = config::load_rates(rates_path)?;
    tracing::debug!(command = command.name(), fiscal_year = rates.fiscal_year, "dispatching");
    match command {
        Commands::Cdi(args) => commands::salaried::run_cdi(args, &rates),
        Commands::Freelance(args) => commands::freelance::run_freelance(args, &rates),
        Commands::Compare(args) => commands::comparison::run_compare(args, &rates),
        Commands::Simulate(args) => commands::comparison::run_simulate(args, &rates),
        Commands::BreakEven(args) => commands::comparison::run_break_even(args, &rates),
        Commands::CorporateTax(args) => commands::freelance::run_corporate_tax(args, &rates),
        Commands::Rates => commands::rates::run_rates(&rates),
        Commands::Version => Ok(serde_json::json!({
            "result": { "version": env!("CARGO_PKG_VERSION") },
        })),
    }
}

fn main() {
    let cli = Cli::parse();
    init_tracing();

    match run(cli.command, cli.rates.as_deref()) {
        Ok(value) => {
            output::format_output(&cli.output, &value);
            process::exit(0);
        }
        Err(e) => {
            tracing::debug!(error = %e, "command failed");
            eprintln!("{}: {}", "error".red().bold(), e);
            process::exit(1);
        }
    }
}
