use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::WealthError;
use crate::growth::compound::CompoundingFrequency;
use crate::growth::{annual_rate, MAX_YEARS};
use crate::time_value::fv_lump_sum;
use crate::types::{round_money, Money};
use crate::WealthResult;

/// Broad asset classes used for allocation totals
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssetClass {
    Equity,
    MutualFund,
    Gold,
    FixedDeposit,
    RealEstate,
    Cash,
}

impl AssetClass {
    pub fn label(self) -> &'static str {
        match self {
            AssetClass::Equity => "equity",
            AssetClass::MutualFund => "mutual_fund",
            AssetClass::Gold => "gold",
            AssetClass::FixedDeposit => "fixed_deposit",
            AssetClass::RealEstate => "real_estate",
            AssetClass::Cash => "cash",
        }
    }
}

/// A tracked asset. The `type` tag decides which fields are present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Asset {
    Equity {
        name: String,
        symbol: String,
        quantity: Decimal,
        unit_price: Money,
    },
    MutualFund {
        name: String,
        scheme: String,
        units: Decimal,
        nav: Money,
    },
    Gold {
        name: String,
        grams: Decimal,
        price_per_gram: Money,
    },
    FixedDeposit {
        name: String,
        principal: Money,
        annual_rate_percent: Decimal,
        #[serde(default)]
        compounding: CompoundingFrequency,
        start_date: NaiveDate,
        maturity_date: NaiveDate,
    },
    RealEstate {
        name: String,
        market_value: Money,
    },
    Cash {
        name: String,
        balance: Money,
    },
}

impl Asset {
    pub fn name(&self) -> &str {
        match self {
            Asset::Equity { name, .. }
            | Asset::MutualFund { name, .. }
            | Asset::Gold { name, .. }
            | Asset::FixedDeposit { name, .. }
            | Asset::RealEstate { name, .. }
            | Asset::Cash { name, .. } => name,
        }
    }

    pub fn class(&self) -> AssetClass {
        match self {
            Asset::Equity { .. } => AssetClass::Equity,
            Asset::MutualFund { .. } => AssetClass::MutualFund,
            Asset::Gold { .. } => AssetClass::Gold,
            Asset::FixedDeposit { .. } => AssetClass::FixedDeposit,
            Asset::RealEstate { .. } => AssetClass::RealEstate,
            Asset::Cash { .. } => AssetClass::Cash,
        }
    }

    /// Value of the asset on `as_of`, rounded to the minor unit.
    pub fn current_value(&self, as_of: NaiveDate) -> WealthResult<Money> {
        let value = match self {
            Asset::Equity {
                quantity,
                unit_price,
                ..
            } => priced(*quantity, *unit_price, "quantity")?,
            Asset::MutualFund { units, nav, .. } => priced(*units, *nav, "units")?,
            Asset::Gold {
                grams,
                price_per_gram,
                ..
            } => priced(*grams, *price_per_gram, "grams")?,
            Asset::FixedDeposit {
                principal,
                annual_rate_percent,
                compounding,
                start_date,
                maturity_date,
                ..
            } => fixed_deposit_value(
                *principal,
                *annual_rate_percent,
                *compounding,
                *start_date,
                *maturity_date,
                as_of,
            )?,
            Asset::RealEstate { market_value, .. } => non_negative(*market_value, "market_value")?,
            Asset::Cash { balance, .. } => *balance,
        };
        Ok(round_money(value))
    }
}

fn non_negative(value: Decimal, field: &str) -> WealthResult<Decimal> {
    if value < Decimal::ZERO {
        return Err(WealthError::invalid(field, "Value cannot be negative"));
    }
    Ok(value)
}

fn priced(quantity: Decimal, price: Money, quantity_field: &str) -> WealthResult<Money> {
    non_negative(quantity, quantity_field)?
        .checked_mul(non_negative(price, "price")?)
        .ok_or_else(|| WealthError::overflow("asset value"))
}

/// Principal grown by the whole compounding periods elapsed between the
/// start date and `as_of` (capped at maturity).
fn fixed_deposit_value(
    principal: Money,
    annual_rate_percent: Decimal,
    compounding: CompoundingFrequency,
    start_date: NaiveDate,
    maturity_date: NaiveDate,
    as_of: NaiveDate,
) -> WealthResult<Money> {
    if principal <= Decimal::ZERO {
        return Err(WealthError::invalid("principal", "Deposit principal must be positive"));
    }
    if maturity_date < start_date {
        return Err(WealthError::invalid(
            "maturity_date",
            "Maturity date must not precede the start date",
        ));
    }
    if (maturity_date - start_date).num_days() > i64::from(MAX_YEARS) * 366 {
        return Err(WealthError::invalid(
            "maturity_date",
            format!("Deposit term must not exceed {MAX_YEARS} years"),
        ));
    }
    let rate = annual_rate(annual_rate_percent)?;

    let end = as_of.min(maturity_date);
    let days = (end - start_date).num_days().max(0);
    let per_year = compounding.periods_per_year();
    // Term is capped above, so the period count fits comfortably in u32.
    let periods = (days * i64::from(per_year) / 365) as u32;

    fv_lump_sum(principal, rate / Decimal::from(per_year), periods)
}
