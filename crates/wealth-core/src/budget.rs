use std::fmt;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::error::WealthError;
use crate::types::*;
use crate::WealthResult;

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BudgetBucket {
    Needs,
    Wants,
    Savings,
}

impl fmt::Display for BudgetBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            BudgetBucket::Needs => "needs",
            BudgetBucket::Wants => "wants",
            BudgetBucket::Savings => "savings",
        })
    }
}

/// Percentage split of monthly income. Defaults to the 50/30/20 rule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetRule {
    pub needs_percent: Decimal,
    pub wants_percent: Decimal,
    pub savings_percent: Decimal,
}

impl Default for BudgetRule {
    fn default() -> Self {
        BudgetRule {
            needs_percent: dec!(50),
            wants_percent: dec!(30),
            savings_percent: dec!(20),
        }
    }
}

impl BudgetRule {
    fn percent_for(&self, bucket: BudgetBucket) -> Decimal {
        match bucket {
            BudgetBucket::Needs => self.needs_percent,
            BudgetBucket::Wants => self.wants_percent,
            BudgetBucket::Savings => self.savings_percent,
        }
    }

    fn validate(&self) -> WealthResult<()> {
        for bucket in BUCKETS {
            if self.percent_for(bucket) < Decimal::ZERO {
                return Err(WealthError::invalid(
                    &format!("{bucket}_percent"),
                    "Bucket percentage cannot be negative",
                ));
            }
        }
        let total = self.needs_percent + self.wants_percent + self.savings_percent;
        if total != dec!(100) {
            return Err(WealthError::invalid(
                "rule",
                format!("Bucket percentages must sum to 100 (got {total})"),
            ));
        }
        Ok(())
    }
}

/// A logged expense (or, for the savings bucket, an amount set aside).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    pub label: String,
    pub bucket: BudgetBucket,
    pub amount: Money,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetInput {
    pub monthly_income: Money,
    #[serde(default)]
    pub rule: BudgetRule,
    #[serde(default)]
    pub expenses: Vec<Expense>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BucketAllocation {
    pub bucket: BudgetBucket,
    pub percent: Decimal,
    pub allocated: Money,
    pub spent: Money,
    pub remaining: Money,
    pub utilisation_percent: Decimal,
    pub over_budget: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetOutput {
    pub monthly_income: Money,
    pub allocations: Vec<BucketAllocation>,
    pub total_spent: Money,
    pub net_cash_flow: Money,
}

const BUCKETS: [BudgetBucket; 3] = [BudgetBucket::Needs, BudgetBucket::Wants, BudgetBucket::Savings];

// ---------------------------------------------------------------------------
// Core function
// ---------------------------------------------------------------------------

/// Split monthly income across the rule's buckets and measure logged
/// expenses against each allocation.
///
/// Allocations are cent-rounded; the savings bucket takes the remainder so
/// the three allocations always sum to the income.
pub fn allocate_budget(input: &BudgetInput) -> WealthResult<ComputationOutput<BudgetOutput>> {
    let mut warnings: Vec<String> = Vec::new();

    if input.monthly_income <= Decimal::ZERO {
        return Err(WealthError::invalid(
            "monthly_income",
            "Monthly income must be positive",
        ));
    }
    input.rule.validate()?;
    if let Some(bad) = input.expenses.iter().find(|e| e.amount < Decimal::ZERO) {
        return Err(WealthError::invalid(
            "expenses",
            format!("Expense '{}' has a negative amount", bad.label),
        ));
    }

    let income = round_money(input.monthly_income);
    let needs = round_money(income * percent_to_rate(input.rule.needs_percent));
    let wants = round_money(income * percent_to_rate(input.rule.wants_percent));
    let savings = income - needs - wants;

    let mut allocations = Vec::with_capacity(BUCKETS.len());
    let mut total_spent = Decimal::ZERO;

    for (bucket, allocated) in BUCKETS.into_iter().zip([needs, wants, savings]) {
        let spent = checked_sum(
            input
                .expenses
                .iter()
                .filter(|e| e.bucket == bucket)
                .map(|e| e.amount),
            "budget expenses",
        )?;
        let spent = round_money(spent);
        total_spent = total_spent
            .checked_add(spent)
            .ok_or_else(|| WealthError::overflow("total budget spending"))?;

        let utilisation_percent = if allocated.is_zero() {
            Decimal::ZERO
        } else {
            spent
                .checked_div(allocated)
                .and_then(|v| v.checked_mul(dec!(100)))
                .ok_or_else(|| WealthError::overflow(format!("{bucket} utilisation")))?
                .round_dp(2)
        };
        let over_budget = spent > allocated;

        match bucket {
            BudgetBucket::Savings if spent < allocated => warnings.push(format!(
                "Savings are {} short of the {} target",
                allocated - spent,
                allocated
            )),
            BudgetBucket::Needs | BudgetBucket::Wants if over_budget => warnings.push(format!(
                "{bucket} spending exceeds its allocation by {}",
                spent - allocated
            )),
            _ => {}
        }

        allocations.push(BucketAllocation {
            bucket,
            percent: input.rule.percent_for(bucket),
            allocated,
            spent,
            remaining: allocated - spent,
            utilisation_percent,
            over_budget,
        });
    }

    let output = BudgetOutput {
        monthly_income: income,
        allocations,
        total_spent,
        net_cash_flow: income - total_spent,
    };

    Ok(with_metadata(
        "Fixed-percentage budget allocation",
        &serde_json::json!({
            "needs_percent": input.rule.needs_percent.to_string(),
            "wants_percent": input.rule.wants_percent.to_string(),
            "savings_percent": input.rule.savings_percent.to_string(),
            "expense_count": input.expenses.len(),
        }),
        warnings,
        output,
    ))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
