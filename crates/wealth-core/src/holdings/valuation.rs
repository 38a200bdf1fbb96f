use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::WealthError;
use crate::types::{round_money, Money};
use crate::WealthResult;

/// Decimal places kept for derived unit prices and quantities.
const UNIT_DP: u32 = 4;

/// The three linked fields of a holding entry form.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ValuationFields {
    pub quantity: Option<Decimal>,
    pub unit_price: Option<Money>,
    pub total_value: Option<Money>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValuationField {
    Quantity,
    UnitPrice,
    TotalValue,
}

impl std::str::FromStr for ValuationField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "quantity" | "units" => Ok(ValuationField::Quantity),
            "unit_price" | "price" | "nav" => Ok(ValuationField::UnitPrice),
            "total_value" | "total" | "value" => Ok(ValuationField::TotalValue),
            other => Err(format!("unknown field '{other}' (expected quantity, unit_price or total_value)")),
        }
    }
}

/// Recompute the dependent field after `last_changed` was edited.
///
/// Editing quantity or unit price sets `total_value = quantity * unit_price`.
/// Editing total value sets `unit_price = total_value / quantity`, or, when
/// there is no usable quantity, `quantity = total_value / unit_price`.
/// Fields that cannot be derived are returned unchanged.
pub fn derive_valuation(
    fields: &ValuationFields,
    last_changed: ValuationField,
) -> WealthResult<ValuationFields> {
    for (name, value) in [
        ("quantity", fields.quantity),
        ("unit_price", fields.unit_price),
        ("total_value", fields.total_value),
    ] {
        if matches!(value, Some(v) if v < Decimal::ZERO) {
            return Err(WealthError::invalid(name, "Value cannot be negative"));
        }
    }

    let mut derived = fields.clone();
    match last_changed {
        ValuationField::Quantity | ValuationField::UnitPrice => {
            if let (Some(quantity), Some(price)) = (fields.quantity, fields.unit_price) {
                let total = quantity
                    .checked_mul(price)
                    .ok_or_else(|| WealthError::overflow("holding total value"))?;
                derived.total_value = Some(round_money(total));
            }
        }
        ValuationField::TotalValue => {
            if let Some(total) = fields.total_value {
                match (fields.quantity, fields.unit_price) {
                    (Some(quantity), _) if quantity > Decimal::ZERO => {
                        let price = total
                            .checked_div(quantity)
                            .ok_or_else(|| WealthError::overflow("derived unit price"))?;
                        derived.unit_price = Some(price.round_dp(UNIT_DP));
                    }
                    (_, Some(price)) if price > Decimal::ZERO => {
                        let quantity = total
                            .checked_div(price)
                            .ok_or_else(|| WealthError::overflow("derived quantity"))?;
                        derived.quantity = Some(quantity.round_dp(UNIT_DP));
                    }
                    _ => {}
                }
            }
        }
    }
    Ok(derived)
}
