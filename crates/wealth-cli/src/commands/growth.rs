use clap::Args;
use rust_decimal::Decimal;
use serde_json::Value;

use wealth_core::growth::compound::{self, CompoundInput, CompoundingFrequency};
use wealth_core::growth::sip::{self, SipInput};
use wealth_core::growth::swp::{self, SwpInput};

use crate::input;

/// Arguments for a SIP projection
#[derive(Args)]
#[command(allow_hyphen_values = true)]
pub struct SipArgs {
    /// Path to JSON/YAML input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,

    /// Monthly contribution
    #[arg(long, alias = "amount")]
    pub contribution: Option<Decimal>,

    /// Expected annual return in percent (negative models depreciation)
    #[arg(long)]
    pub rate: Option<Decimal>,

    /// Investment horizon in years
    #[arg(long)]
    pub years: Option<u32>,
}

pub fn run_sip(args: SipArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let sip_input: SipInput = match input::load(args.input.as_deref())? {
        Some(parsed) => parsed,
        None => SipInput {
            monthly_contribution: args
                .contribution
                .ok_or("--contribution is required (or provide --input)")?,
            annual_rate_percent: args.rate.unwrap_or(Decimal::ZERO),
            years: args.years.ok_or("--years is required (or provide --input)")?,
        },
    };
    let result = sip::project_sip(&sip_input)?;
    Ok(serde_json::to_value(result)?)
}

/// Arguments for a SWP simulation
#[derive(Args)]
#[command(allow_hyphen_values = true)]
pub struct SwpArgs {
    /// Path to JSON/YAML input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,

    /// Starting corpus
    #[arg(long, alias = "amount")]
    pub initial: Option<Decimal>,

    /// Monthly withdrawal
    #[arg(long)]
    pub withdrawal: Option<Decimal>,

    /// Expected annual return in percent
    #[arg(long)]
    pub rate: Option<Decimal>,

    /// Plan length in years
    #[arg(long)]
    pub years: Option<u32>,
}

pub fn run_swp(args: SwpArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let swp_input: SwpInput = match input::load(args.input.as_deref())? {
        Some(parsed) => parsed,
        None => SwpInput {
            initial_investment: args
                .initial
                .ok_or("--initial is required (or provide --input)")?,
            monthly_withdrawal: args
                .withdrawal
                .ok_or("--withdrawal is required (or provide --input)")?,
            annual_rate_percent: args.rate.unwrap_or(Decimal::ZERO),
            years: args.years.ok_or("--years is required (or provide --input)")?,
        },
    };
    let result = swp::simulate_swp(&swp_input)?;
    Ok(serde_json::to_value(result)?)
}

/// Arguments for a compound vs simple interest comparison
#[derive(Args)]
#[command(allow_hyphen_values = true)]
pub struct CompoundArgs {
    /// Path to JSON/YAML input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,

    /// Lump sum invested
    #[arg(long, alias = "amount")]
    pub principal: Option<Decimal>,

    /// Annual rate in percent
    #[arg(long)]
    pub rate: Option<Decimal>,

    /// Horizon in years
    #[arg(long)]
    pub years: Option<u32>,

    /// daily, monthly, quarterly, half_yearly or yearly
    #[arg(long, default_value = "monthly")]
    pub frequency: CompoundingFrequency,
}

pub fn run_compound(args: CompoundArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let compound_input: CompoundInput = match input::load(args.input.as_deref())? {
        Some(parsed) => parsed,
        None => CompoundInput {
            principal: args
                .principal
                .ok_or("--principal is required (or provide --input)")?,
            annual_rate_percent: args.rate.unwrap_or(Decimal::ZERO),
            years: args.years.ok_or("--years is required (or provide --input)")?,
            frequency: args.frequency,
        },
    };
    let result = compound::compare_compound_interest(&compound_input)?;
    Ok(serde_json::to_value(result)?)
}
