use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::whole_months_between;
use crate::error::WealthError;
use crate::loans::amortization::{outstanding_balance, LoanTerms};
use crate::types::{round_money, Money};
use crate::WealthResult;

/// A tracked liability, tagged by `type`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Liability {
    /// Installment loan; one payment falls due per whole month since `start_date`.
    Loan {
        name: String,
        terms: LoanTerms,
        start_date: NaiveDate,
    },
    CreditCard {
        name: String,
        outstanding: Money,
    },
    Other {
        name: String,
        outstanding: Money,
    },
}

impl Liability {
    pub fn name(&self) -> &str {
        match self {
            Liability::Loan { name, .. }
            | Liability::CreditCard { name, .. }
            | Liability::Other { name, .. } => name,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Liability::Loan { .. } => "loan",
            Liability::CreditCard { .. } => "credit_card",
            Liability::Other { .. } => "other",
        }
    }

    /// Amount owed on `as_of`.
    pub fn outstanding(&self, as_of: NaiveDate) -> WealthResult<Money> {
        match self {
            Liability::Loan {
                terms, start_date, ..
            } => outstanding_balance(terms, whole_months_between(*start_date, as_of)),
            Liability::CreditCard { outstanding, .. } | Liability::Other { outstanding, .. } => {
                if *outstanding < Decimal::ZERO {
                    return Err(WealthError::invalid(
                        "outstanding",
                        "Outstanding amount cannot be negative",
                    ));
                }
                Ok(round_money(*outstanding))
            }
        }
    }
}
