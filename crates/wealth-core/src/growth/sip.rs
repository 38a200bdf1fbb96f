use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{depreciation_warning, monthly_rate, validate_years, year_label, GrowthSeriesPoint};
use crate::error::WealthError;
use crate::time_value::fv_annuity_due;
use crate::types::*;
use crate::WealthResult;

/// Input for a Systematic Investment Plan projection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SipInput {
    /// Contribution made at the start of every month
    #[serde(alias = "amount")]
    pub monthly_contribution: Money,
    /// Expected annual return in percent, compounded monthly
    #[serde(alias = "rate")]
    pub annual_rate_percent: Decimal,
    pub years: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SipOutput {
    pub total_invested: Money,
    pub future_value: Money,
    pub total_returns: Money,
    pub series: Vec<GrowthSeriesPoint>,
}

/// Project the value of a fixed monthly contribution.
///
/// FV = c * ((1+r)^n - 1) / r * (1+r) with r the monthly rate and n months.
pub fn project_sip(input: &SipInput) -> WealthResult<ComputationOutput<SipOutput>> {
    let mut warnings: Vec<String> = Vec::new();

    if input.monthly_contribution < Decimal::ZERO {
        return Err(WealthError::invalid(
            "monthly_contribution",
            "Contribution cannot be negative",
        ));
    }
    validate_years(input.years)?;
    let rate = monthly_rate(input.annual_rate_percent)?;
    warnings.extend(depreciation_warning(input.annual_rate_percent));

    log::debug!(
        "projecting SIP of {} over {} years",
        input.monthly_contribution,
        input.years
    );

    let mut series = Vec::with_capacity(input.years as usize);
    let mut future_value = Decimal::ZERO;
    let mut invested = Decimal::ZERO;

    for year in 1..=input.years {
        let months = year * 12;
        invested = input
            .monthly_contribution
            .checked_mul(Decimal::from(months))
            .ok_or_else(|| WealthError::overflow("SIP invested amount"))?;
        future_value = fv_annuity_due(input.monthly_contribution, rate, months)?;

        series.push(GrowthSeriesPoint {
            period: year_label(year),
            invested_or_withdrawn: round_money(invested),
            returns: round_money(future_value - invested),
            running_total_or_balance: round_money(future_value),
        });
    }

    if input.monthly_contribution.is_zero() {
        warnings.push("Zero contribution: the projection is flat".into());
    }

    let output = SipOutput {
        total_invested: round_money(invested),
        future_value: round_money(future_value),
        total_returns: round_money(future_value - invested),
        series,
    };

    Ok(with_metadata(
        "SIP future value (annuity due, monthly compounding)",
        &serde_json::json!({
            "monthly_contribution": input.monthly_contribution.to_string(),
            "annual_rate_percent": input.annual_rate_percent.to_string(),
            "years": input.years,
        }),
        warnings,
        output,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn input(contribution: Decimal, rate: Decimal, years: u32) -> SipInput {
        SipInput {
            monthly_contribution: contribution,
            annual_rate_percent: rate,
            years,
        }
    }

    #[test]
    fn test_one_year_at_twelve_percent() {
        let out = project_sip(&input(dec!(1000), dec!(12), 1)).unwrap().result;
        assert_eq!(out.total_invested, dec!(12000));
        assert_eq!(out.future_value, dec!(12809.33));
        assert_eq!(out.total_returns, dec!(809.33));
        assert_eq!(out.series.len(), 1);
        assert_eq!(out.series[0].period, "Year 1");
    }

    #[test]
    fn test_zero_rate_is_plain_sum() {
        let out = project_sip(&input(dec!(5000), dec!(0), 10)).unwrap().result;
        assert_eq!(out.future_value, dec!(600000));
        assert_eq!(out.total_returns, Decimal::ZERO);
    }

    #[test]
    fn test_zero_contribution_is_flat() {
        let out = project_sip(&input(dec!(0), dec!(10), 5)).unwrap();
        assert!(out
            .result
            .series
            .iter()
            .all(|p| p.running_total_or_balance.is_zero()));
        assert!(!out.warnings.is_empty());
    }

    #[test]
    fn test_series_is_cumulative() {
        let out = project_sip(&input(dec!(2500), dec!(10), 15)).unwrap().result;
        assert_eq!(out.series.len(), 15);
        for pair in out.series.windows(2) {
            assert!(pair[1].invested_or_withdrawn > pair[0].invested_or_withdrawn);
            assert!(pair[1].running_total_or_balance > pair[0].running_total_or_balance);
        }
        assert_eq!(out.series.last().unwrap().running_total_or_balance, out.future_value);
    }

    #[test]
    fn test_negative_rate_shrinks_value() {
        let out = project_sip(&input(dec!(1000), dec!(-5), 3)).unwrap();
        assert!(out.result.future_value < out.result.total_invested);
        assert!(out.warnings.iter().any(|w| w.contains("depreciation")));
    }

    #[test]
    fn test_validation() {
        assert!(project_sip(&input(dec!(-1), dec!(10), 5)).is_err());
        assert!(project_sip(&input(dec!(100), dec!(10), 0)).is_err());
        assert!(project_sip(&input(dec!(100), dec!(10), 51)).is_err());
        assert!(project_sip(&input(dec!(100), dec!(-100), 5)).is_err());
    }
}
