use std::collections::BTreeMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use super::asset::{Asset, AssetClass};
use super::liability::Liability;
use crate::currency::{format_currency, FormatStyle};
use crate::error::WealthError;
use crate::types::*;
use crate::WealthResult;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetWorthInput {
    pub as_of: NaiveDate,
    #[serde(default)]
    pub currency: Currency,
    #[serde(default)]
    pub style: FormatStyle,
    #[serde(default)]
    pub assets: Vec<Asset>,
    #[serde(default)]
    pub liabilities: Vec<Liability>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValuedItem {
    pub name: String,
    pub kind: String,
    pub value: Money,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassTotal {
    pub class: AssetClass,
    pub value: Money,
    /// Share of total assets, 2 dp
    pub share_percent: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetWorthOutput {
    pub as_of: NaiveDate,
    pub currency: Currency,
    pub assets: Vec<ValuedItem>,
    pub liabilities: Vec<ValuedItem>,
    pub allocation: Vec<ClassTotal>,
    pub total_assets: Money,
    pub total_liabilities: Money,
    pub net_worth: Money,
    pub net_worth_display: String,
}

/// Value every asset and liability on `as_of` and net them off.
pub fn summarize_net_worth(input: &NetWorthInput) -> WealthResult<ComputationOutput<NetWorthOutput>> {
    let mut warnings: Vec<String> = Vec::new();

    log::debug!(
        "valuing {} assets and {} liabilities as of {}",
        input.assets.len(),
        input.liabilities.len(),
        input.as_of
    );

    let mut assets = Vec::with_capacity(input.assets.len());
    let mut by_class: BTreeMap<AssetClass, Money> = BTreeMap::new();
    let mut total_assets = Decimal::ZERO;

    for asset in &input.assets {
        let value = asset.current_value(input.as_of)?;
        total_assets = total_assets
            .checked_add(value)
            .ok_or_else(|| WealthError::overflow("total assets"))?;
        let class_total = by_class.entry(asset.class()).or_insert(Decimal::ZERO);
        *class_total = class_total
            .checked_add(value)
            .ok_or_else(|| WealthError::overflow(format!("{} total", asset.class().label())))?;
        assets.push(ValuedItem {
            name: asset.name().to_string(),
            kind: asset.class().label().to_string(),
            value,
        });
    }

    let mut liabilities = Vec::with_capacity(input.liabilities.len());
    let mut total_liabilities = Decimal::ZERO;
    for liability in &input.liabilities {
        let value = liability.outstanding(input.as_of)?;
        total_liabilities = total_liabilities
            .checked_add(value)
            .ok_or_else(|| WealthError::overflow("total liabilities"))?;
        liabilities.push(ValuedItem {
            name: liability.name().to_string(),
            kind: liability.kind().to_string(),
            value,
        });
    }

    let allocation = by_class
        .into_iter()
        .map(|(class, value)| {
            let share_percent = if total_assets > Decimal::ZERO {
                value
                    .checked_div(total_assets)
                    .and_then(|v| v.checked_mul(dec!(100)))
                    .ok_or_else(|| WealthError::overflow("allocation share"))?
                    .round_dp(2)
            } else {
                Decimal::ZERO
            };
            Ok(ClassTotal {
                class,
                value,
                share_percent,
            })
        })
        .collect::<WealthResult<Vec<_>>>()?;

    let net_worth = total_assets
        .checked_sub(total_liabilities)
        .ok_or_else(|| WealthError::overflow("net worth"))?;
    if net_worth < Decimal::ZERO {
        warnings.push("Liabilities exceed assets".into());
    }
    if input.assets.is_empty() && input.liabilities.is_empty() {
        warnings.push("No assets or liabilities supplied".into());
    }

    let output = NetWorthOutput {
        as_of: input.as_of,
        currency: input.currency.clone(),
        assets,
        liabilities,
        allocation,
        total_assets,
        total_liabilities,
        net_worth,
        net_worth_display: format_currency(Some(net_worth), &input.currency, input.style),
    };

    Ok(with_metadata(
        "Net worth: assets at current value less outstanding liabilities",
        &serde_json::json!({
            "as_of": input.as_of.to_string(),
            "currency": input.currency.code(),
        }),
        warnings,
        output,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loans::amortization::LoanTerms;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn sample() -> NetWorthInput {
        NetWorthInput {
            as_of: date(2024, 2, 10),
            currency: Currency::INR,
            style: FormatStyle::Indian,
            assets: vec![
                Asset::Cash {
                    name: "Savings account".into(),
                    balance: dec!(150000),
                },
                Asset::Equity {
                    name: "Reliance".into(),
                    symbol: "RELIANCE".into(),
                    quantity: dec!(10),
                    unit_price: dec!(2500),
                },
                Asset::Equity {
                    name: "TCS".into(),
                    symbol: "TCS".into(),
                    quantity: dec!(5),
                    unit_price: dec!(5000),
                },
            ],
            liabilities: vec![Liability::Loan {
                name: "Personal loan".into(),
                terms: LoanTerms::new(dec!(100000), dec!(12), 12),
                start_date: date(2024, 1, 10),
            }],
        }
    }

    #[test]
    fn test_net_worth_totals() {
        let out = summarize_net_worth(&sample()).unwrap().result;
        assert_eq!(out.total_assets, dec!(200000));
        assert_eq!(out.total_liabilities, dec!(92115.12));
        assert_eq!(out.net_worth, dec!(107884.88));
        assert_eq!(out.net_worth_display, "₹1.08 L");
    }

    #[test]
    fn test_allocation_groups_by_class() {
        let out = summarize_net_worth(&sample()).unwrap().result;
        assert_eq!(out.allocation.len(), 2);
        let equity = out
            .allocation
            .iter()
            .find(|c| c.class == AssetClass::Equity)
            .unwrap();
        assert_eq!(equity.value, dec!(50000));
        assert_eq!(equity.share_percent, dec!(25));
        assert_eq!(out.assets[1].kind, "equity");
    }

    #[test]
    fn test_negative_net_worth_warns() {
        let mut input = sample();
        input.assets.truncate(1);
        input.assets[0] = Asset::Cash {
            name: "Wallet".into(),
            balance: dec!(1000),
        };
        let out = summarize_net_worth(&input).unwrap();
        assert!(out.result.net_worth < Decimal::ZERO);
        assert_eq!(out.warnings, vec!["Liabilities exceed assets".to_string()]);
    }

    #[test]
    fn test_empty_portfolio() {
        let input: NetWorthInput = serde_json::from_str(r#"{"as_of": "2024-01-01"}"#).unwrap();
        let out = summarize_net_worth(&input).unwrap();
        assert_eq!(out.result.net_worth, Decimal::ZERO);
        assert_eq!(out.result.net_worth_display, "₹0.00");
        assert_eq!(out.warnings.len(), 1);
    }

    #[test]
    fn test_asset_total_overflow_is_reported() {
        let cash = |name: &str| Asset::Cash {
            name: name.into(),
            balance: dec!(50000000000000000000000000000),
        };
        let input = NetWorthInput {
            as_of: date(2024, 1, 1),
            currency: Currency::INR,
            style: FormatStyle::Standard,
            assets: vec![cash("Current"), cash("Savings")],
            liabilities: vec![],
        };
        assert!(matches!(
            summarize_net_worth(&input),
            Err(WealthError::NumericOverflow { .. })
        ));
    }
}
