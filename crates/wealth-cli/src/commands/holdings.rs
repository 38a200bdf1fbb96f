use clap::Args;
use rust_decimal::Decimal;
use serde_json::{json, Value};

use wealth_core::holdings::net_worth::{self, NetWorthInput};
use wealth_core::holdings::valuation::{self, ValuationField, ValuationFields};

use crate::input;

/// Arguments for holding valuation
#[derive(Args)]
pub struct ValuationArgs {
    /// Quantity or units held
    #[arg(long)]
    pub quantity: Option<Decimal>,

    /// Price per unit
    #[arg(long)]
    pub unit_price: Option<Decimal>,

    /// Total value of the holding
    #[arg(long)]
    pub total_value: Option<Decimal>,

    /// Field that was edited last: quantity, unit_price or total_value
    #[arg(long, default_value = "quantity")]
    pub changed: ValuationField,
}

pub fn run_valuation(args: ValuationArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let fields = ValuationFields {
        quantity: args.quantity,
        unit_price: args.unit_price,
        total_value: args.total_value,
    };
    let derived = valuation::derive_valuation(&fields, args.changed)?;
    Ok(json!({ "result": serde_json::to_value(derived)? }))
}

/// Arguments for net worth
#[derive(Args)]
pub struct NetWorthArgs {
    /// Path to JSON/YAML portfolio file
    #[arg(long)]
    pub input: Option<String>,
}

pub fn run_net_worth(args: NetWorthArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let portfolio: NetWorthInput = input::load(args.input.as_deref())?
        .ok_or("--input <portfolio.json> or stdin required for net worth")?;
    let result = net_worth::summarize_net_worth(&portfolio)?;
    Ok(serde_json::to_value(result)?)
}
