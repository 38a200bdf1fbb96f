use clap::Args;
use rust_decimal::Decimal;
use serde_json::Value;

use wealth_core::loans::amortization::{self, LoanTerms};

use crate::input;

/// Arguments for loan amortization
#[derive(Args)]
#[command(allow_hyphen_values = true)]
pub struct LoanArgs {
    /// Path to JSON/YAML input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,

    /// Amount borrowed
    #[arg(long)]
    pub principal: Option<Decimal>,

    /// Annual interest rate in percent (e.g. 8.5)
    #[arg(long)]
    pub rate: Option<Decimal>,

    /// Tenure in months
    #[arg(long, alias = "tenure")]
    pub months: Option<u32>,

    /// Print the summary without the month-by-month schedule
    #[arg(long)]
    pub summary_only: bool,
}

pub fn run_loan(args: LoanArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let terms: LoanTerms = match input::load(args.input.as_deref())? {
        Some(terms) => terms,
        None => LoanTerms::new(
            args.principal
                .ok_or("--principal is required (or provide --input)")?,
            args.rate.unwrap_or(Decimal::ZERO),
            args.months
                .ok_or("--months is required (or provide --input)")?,
        ),
    };

    let result = amortization::compute_amortization(&terms)?;
    let mut value = serde_json::to_value(result)?;
    if args.summary_only {
        if let Some(result) = value.get_mut("result").and_then(Value::as_object_mut) {
            result.remove("schedule");
        }
    }
    Ok(value)
}
