mod commands;
mod input;
mod output;

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use log::debug;
use std::process;

use commands::budget::BudgetArgs;
use commands::currency::FormatArgs;
use commands::growth::{CompoundArgs, SipArgs, SwpArgs};
use commands::holdings::{NetWorthArgs, ValuationArgs};
use commands::loans::LoanArgs;

/// Personal wealth calculations
#[derive(Parser)]
#[command(
    name = "wealth",
    version,
    about = "Personal wealth calculations",
    long_about = "Loan amortization, SIP/SWP and compound-interest projections, \
                  budget allocation, holding valuation and net worth, with \
                  decimal precision and INR lakh/crore presentation."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format
    #[arg(long, default_value = "json", global = true, env = "WEALTH_OUTPUT")]
    output: OutputFormat,
}

#[derive(Subcommand)]
enum Commands {
    /// Loan EMI and month-by-month amortization schedule
    Loan(LoanArgs),
    /// Systematic Investment Plan projection
    Sip(SipArgs),
    /// Systematic Withdrawal Plan simulation
    Swp(SwpArgs),
    /// Compound vs simple interest on a lump sum
    Compound(CompoundArgs),
    /// Format an amount for display
    Format(FormatArgs),
    /// Allocate monthly income across budget buckets
    Budget(BudgetArgs),
    /// Derive quantity, unit price or total value of a holding
    Valuation(ValuationArgs),
    /// Net worth from a portfolio of assets and liabilities
    NetWorth(NetWorthArgs),
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

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let result: Result<serde_json::Value, Box<dyn std::error::Error>> = match cli.command {
        Commands::Loan(args) => commands::loans::run_loan(args),
        Commands::Sip(args) => commands::growth::run_sip(args),
        Commands::Swp(args) => commands::growth::run_swp(args),
        Commands::Compound(args) => commands::growth::run_compound(args),
        Commands::Format(args) => commands::currency::run_format(args),
        Commands::Budget(args) => commands::budget::run_budget(args),
        Commands::Valuation(args) => commands::holdings::run_valuation(args),
        Commands::NetWorth(args) => commands::holdings::run_net_worth(args),
        Commands::Version => {
            println!("wealth {}", env!("CARGO_PKG_VERSION"));
            return;
        }
    };

    match result {
        Ok(value) => {
            debug!("rendering output as {:?}", cli.output);
            output::format_output(&cli.output, &value);
            process::exit(0);
        }
        Err(e) => {
            eprintln!("{}: {}", "error".red().bold(), e);
            process::exit(1);
        }
    }
}
