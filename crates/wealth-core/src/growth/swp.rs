use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{depreciation_warning, monthly_rate, validate_years, year_label, GrowthSeriesPoint};
use crate::error::WealthError;
use crate::types::*;
use crate::WealthResult;

/// Input for a Systematic Withdrawal Plan simulation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SwpInput {
    #[serde(alias = "amount", alias = "initial")]
    pub initial_investment: Money,
    #[serde(alias = "withdrawal")]
    pub monthly_withdrawal: Money,
    #[serde(alias = "rate")]
    pub annual_rate_percent: Decimal,
    pub years: u32,
}

/// How the withdrawal plan ended.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SwpOutcome {
    /// The corpus reached zero. `month` counts from the start of the plan.
    Depleted {
        month: u32,
        year: u32,
        month_of_year: u32,
    },
    /// The plan ran its full term with money left over.
    Sustained { final_balance: Money },
}

impl SwpOutcome {
    pub fn is_depleted(&self) -> bool {
        matches!(self, SwpOutcome::Depleted { .. })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SwpOutput {
    pub total_withdrawn: Money,
    pub total_returns: Money,
    pub final_balance: Money,
    pub outcome: SwpOutcome,
    /// One point per simulated year; the depletion year, if any, is the
    /// last (partial) point.
    pub series: Vec<GrowthSeriesPoint>,
}

/// Simulate monthly withdrawals from an invested corpus.
///
/// Each month the balance first grows by the monthly rate, then
/// `min(withdrawal, balance)` is taken out. The simulation stops in the
/// first month the balance reaches zero.
pub fn simulate_swp(input: &SwpInput) -> WealthResult<ComputationOutput<SwpOutput>> {
    let mut warnings: Vec<String> = Vec::new();

    if input.initial_investment <= Decimal::ZERO {
        return Err(WealthError::invalid(
            "initial_investment",
            "Initial investment must be positive",
        ));
    }
    if input.monthly_withdrawal < Decimal::ZERO {
        return Err(WealthError::invalid(
            "monthly_withdrawal",
            "Withdrawal cannot be negative",
        ));
    }
    validate_years(input.years)?;
    let rate = monthly_rate(input.annual_rate_percent)?;
    warnings.extend(depreciation_warning(input.annual_rate_percent));

    log::debug!(
        "simulating SWP of {} from {} over {} years",
        input.monthly_withdrawal,
        input.initial_investment,
        input.years
    );

    let mut balance = input.initial_investment;
    let mut total_withdrawn = Decimal::ZERO;
    let mut total_returns = Decimal::ZERO;
    let mut depletion: Option<SwpOutcome> = None;
    let mut series = Vec::with_capacity(input.years as usize);

    for year in 1..=input.years {
        let mut withdrawn_this_year = Decimal::ZERO;
        let mut returns_this_year = Decimal::ZERO;

        for month_of_year in 1..=12 {
            let growth = balance
                .checked_mul(rate)
                .ok_or_else(|| WealthError::overflow("SWP monthly growth"))?;
            balance = balance
                .checked_add(growth)
                .ok_or_else(|| WealthError::overflow("SWP balance"))?;
            returns_this_year += growth;

            let withdrawal = input.monthly_withdrawal.min(balance);
            balance -= withdrawal;
            withdrawn_this_year += withdrawal;

            if balance <= Decimal::ZERO {
                let month = (year - 1) * 12 + month_of_year;
                depletion = Some(SwpOutcome::Depleted {
                    month,
                    year,
                    month_of_year,
                });
                break;
            }
        }

        total_withdrawn += withdrawn_this_year;
        total_returns += returns_this_year;
        series.push(GrowthSeriesPoint {
            period: year_label(year),
            invested_or_withdrawn: round_money(withdrawn_this_year),
            returns: round_money(returns_this_year),
            running_total_or_balance: round_money(balance),
        });

        if depletion.is_some() {
            break;
        }
    }

    let final_balance = round_money(balance.max(Decimal::ZERO));
    let outcome = match depletion {
        Some(outcome) => {
            if let SwpOutcome::Depleted { month, year, .. } = &outcome {
                warnings.push(format!(
                    "Corpus depleted in month {month} (year {year}) of a {} year plan",
                    input.years
                ));
            }
            outcome
        }
        None => SwpOutcome::Sustained { final_balance },
    };

    let output = SwpOutput {
        total_withdrawn: round_money(total_withdrawn),
        total_returns: round_money(total_returns),
        final_balance,
        outcome,
        series,
    };

    Ok(with_metadata(
        "SWP month-by-month simulation (growth then withdrawal)",
        &serde_json::json!({
            "initial_investment": input.initial_investment.to_string(),
            "monthly_withdrawal": input.monthly_withdrawal.to_string(),
            "annual_rate_percent": input.annual_rate_percent.to_string(),
            "years": input.years,
        }),
        warnings,
        output,
    ))
}
