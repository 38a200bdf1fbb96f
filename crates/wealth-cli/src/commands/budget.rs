use clap::Args;
use rust_decimal::Decimal;
use serde_json::Value;

use wealth_core::budget::{self, BudgetInput, BudgetRule};

use crate::input;

/// Arguments for budget allocation
#[derive(Args)]
pub struct BudgetArgs {
    /// Path to JSON/YAML input file with income, rule and expenses
    #[arg(long)]
    pub input: Option<String>,

    /// Monthly take-home income
    #[arg(long)]
    pub income: Option<Decimal>,

    /// Needs share in percent
    #[arg(long, default_value = "50")]
    pub needs: Decimal,

    /// Wants share in percent
    #[arg(long, default_value = "30")]
    pub wants: Decimal,

    /// Savings share in percent
    #[arg(long, default_value = "20")]
    pub savings: Decimal,
}

pub fn run_budget(args: BudgetArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let budget_input: BudgetInput = match input::load(args.input.as_deref())? {
        Some(parsed) => parsed,
        None => BudgetInput {
            monthly_income: args
                .income
                .ok_or("--income is required (or provide --input)")?,
            rule: BudgetRule {
                needs_percent: args.needs,
                wants_percent: args.wants,
                savings_percent: args.savings,
            },
            expenses: Vec::new(),
        },
    };
    let result = budget::allocate_budget(&budget_input)?;
    Ok(serde_json::to_value(result)?)
}
