use clap::Args;
use serde_json::{json, Value};

use wealth_core::currency::{self, FormatStyle};

/// Arguments for currency formatting
#[derive(Args)]
#[command(allow_hyphen_values = true)]
pub struct FormatArgs {
    /// Amount to format (commas and exponents accepted)
    pub amount: String,

    /// ISO currency code
    #[arg(long, default_value = "INR")]
    pub currency: String,

    /// standard or indian (lakh/crore, INR only)
    #[arg(long, default_value = "standard")]
    pub style: FormatStyle,
}

pub fn run_format(args: FormatArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let formatted = currency::format_currency_str(&args.amount, &args.currency, args.style);
    Ok(json!({
        "result": {
            "formatted": formatted,
            "currency": args.currency.to_ascii_uppercase(),
        }
    }))
}
