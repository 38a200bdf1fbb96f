use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use super::{annual_rate, depreciation_warning, validate_years, year_label, GrowthSeriesPoint};
use crate::error::WealthError;
use crate::time_value::compound_factor;
use crate::types::*;
use crate::WealthResult;

/// How often interest is credited within a year
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompoundingFrequency {
    Daily,
    #[default]
    Monthly,
    Quarterly,
    #[serde(alias = "half-yearly", alias = "semi_annual")]
    HalfYearly,
    #[serde(alias = "annual", alias = "annually")]
    Yearly,
}

impl CompoundingFrequency {
    pub fn periods_per_year(self) -> u32 {
        match self {
            CompoundingFrequency::Daily => 365,
            CompoundingFrequency::Monthly => 12,
            CompoundingFrequency::Quarterly => 4,
            CompoundingFrequency::HalfYearly => 2,
            CompoundingFrequency::Yearly => 1,
        }
    }

    fn label(self) -> &'static str {
        match self {
            CompoundingFrequency::Daily => "daily",
            CompoundingFrequency::Monthly => "monthly",
            CompoundingFrequency::Quarterly => "quarterly",
            CompoundingFrequency::HalfYearly => "half_yearly",
            CompoundingFrequency::Yearly => "yearly",
        }
    }
}

impl fmt::Display for CompoundingFrequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for CompoundingFrequency {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "daily" => Ok(CompoundingFrequency::Daily),
            "monthly" => Ok(CompoundingFrequency::Monthly),
            "quarterly" => Ok(CompoundingFrequency::Quarterly),
            "half_yearly" | "semi_annual" => Ok(CompoundingFrequency::HalfYearly),
            "yearly" | "annual" | "annually" => Ok(CompoundingFrequency::Yearly),
            other => Err(format!(
                "unknown compounding frequency '{other}' (expected daily, monthly, quarterly, half_yearly or yearly)"
            )),
        }
    }
}

/// Input for a lump-sum compound vs simple interest comparison
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompoundInput {
    #[serde(alias = "amount")]
    pub principal: Money,
    #[serde(alias = "rate")]
    pub annual_rate_percent: Decimal,
    pub years: u32,
    #[serde(default)]
    pub frequency: CompoundingFrequency,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InterestComparisonYear {
    pub year: u32,
    pub compound_value: Money,
    pub simple_value: Money,
    pub compounding_benefit: Money,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompoundOutput {
    pub compound_value: Money,
    pub simple_value: Money,
    pub compound_interest: Money,
    pub simple_interest: Money,
    pub compounding_benefit: Money,
    /// (1 + r/n)^n - 1, in percent, 4 dp
    pub effective_annual_rate_percent: Decimal,
    pub series: Vec<GrowthSeriesPoint>,
    pub comparison: Vec<InterestComparisonYear>,
}

/// Compare P(1 + r/n)^(n t) against P + P r t, year by year.
pub fn compare_compound_interest(
    input: &CompoundInput,
) -> WealthResult<ComputationOutput<CompoundOutput>> {
    let mut warnings: Vec<String> = Vec::new();

    if input.principal <= Decimal::ZERO {
        return Err(WealthError::invalid(
            "principal",
            "Principal must be positive",
        ));
    }
    validate_years(input.years)?;
    let rate = annual_rate(input.annual_rate_percent)?;
    warnings.extend(depreciation_warning(input.annual_rate_percent));

    let n = input.frequency.periods_per_year();
    let yearly_factor = compound_factor(rate / Decimal::from(n), n)?;

    log::debug!(
        "compounding {} {} for {} years",
        input.principal,
        input.frequency,
        input.years
    );

    let mut series = Vec::with_capacity(input.years as usize);
    let mut comparison = Vec::with_capacity(input.years as usize);
    let mut compound_value = input.principal;
    let mut simple_value = input.principal;

    for year in 1..=input.years {
        compound_value = compound_value
            .checked_mul(yearly_factor)
            .ok_or_else(|| WealthError::overflow(format!("compound value in year {year}")))?;
        simple_value = input
            .principal
            .checked_mul(rate)
            .and_then(|v| v.checked_mul(Decimal::from(year)))
            .and_then(|v| v.checked_add(input.principal))
            .ok_or_else(|| WealthError::overflow(format!("simple value in year {year}")))?;

        series.push(GrowthSeriesPoint {
            period: year_label(year),
            invested_or_withdrawn: round_money(input.principal),
            returns: round_money(compound_value - input.principal),
            running_total_or_balance: round_money(compound_value),
        });
        comparison.push(InterestComparisonYear {
            year,
            compound_value: round_money(compound_value),
            simple_value: round_money(simple_value),
            compounding_benefit: round_money(compound_value - simple_value),
        });
    }

    if simple_value < Decimal::ZERO {
        warnings.push("Simple-interest value is negative: the loss exceeds the principal".into());
    }

    let output = CompoundOutput {
        compound_value: round_money(compound_value),
        simple_value: round_money(simple_value),
        compound_interest: round_money(compound_value - input.principal),
        simple_interest: round_money(simple_value - input.principal),
        compounding_benefit: round_money(compound_value - simple_value),
        effective_annual_rate_percent: ((yearly_factor - Decimal::ONE) * dec!(100)).round_dp(4),
        series,
        comparison,
    };

    Ok(with_metadata(
        "Compound vs simple interest on a lump sum",
        &serde_json::json!({
            "principal": input.principal.to_string(),
            "annual_rate_percent": input.annual_rate_percent.to_string(),
            "years": input.years,
            "frequency": input.frequency.to_string(),
            "periods_per_year": n,
        }),
        warnings,
        output,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(principal: Decimal, rate: Decimal, years: u32, frequency: CompoundingFrequency) -> CompoundInput {
        CompoundInput {
            principal,
            annual_rate_percent: rate,
            years,
            frequency,
        }
    }

    #[test]
    fn test_yearly_compounding_known_value() {
        let out = compare_compound_interest(&input(dec!(1000), dec!(10), 3, CompoundingFrequency::Yearly))
            .unwrap()
            .result;
        assert_eq!(out.compound_value, dec!(1331));
        assert_eq!(out.simple_value, dec!(1300));
        assert_eq!(out.compounding_benefit, dec!(31));
        assert_eq!(out.effective_annual_rate_percent, dec!(10));
    }

    #[test]
    fn test_more_frequent_compounding_earns_more() {
        let mut previous = Decimal::ZERO;
        for freq in [
            CompoundingFrequency::Yearly,
            CompoundingFrequency::HalfYearly,
            CompoundingFrequency::Quarterly,
            CompoundingFrequency::Monthly,
            CompoundingFrequency::Daily,
        ] {
            let value = compare_compound_interest(&input(dec!(100000), dec!(8), 10, freq))
                .unwrap()
                .result
                .compound_value;
            assert!(value > previous, "{freq} should beat the coarser frequency");
            previous = value;
        }
    }

    #[test]
    fn test_monthly_effective_rate() {
        let out = compare_compound_interest(&input(dec!(1000), dec!(12), 1, CompoundingFrequency::Monthly))
            .unwrap()
            .result;
        // 1.01^12 - 1 = 12.6825%
        assert_eq!(out.effective_annual_rate_percent, dec!(12.6825));
        assert_eq!(out.compound_value, dec!(1126.83));
    }

    #[test]
    fn test_zero_rate_has_no_benefit() {
        let out = compare_compound_interest(&input(dec!(5000), dec!(0), 5, CompoundingFrequency::Daily))
            .unwrap()
            .result;
        assert_eq!(out.compound_value, dec!(5000));
        assert_eq!(out.compounding_benefit, Decimal::ZERO);
        assert!(out.series.iter().all(|p| p.returns.is_zero()));
    }

    #[test]
    fn test_negative_rate_depreciates() {
        let out = compare_compound_interest(&input(dec!(10000), dec!(-10), 2, CompoundingFrequency::Yearly))
            .unwrap();
        assert_eq!(out.result.compound_value, dec!(8100));
        assert_eq!(out.result.simple_value, dec!(8000));
        assert!(!out.warnings.is_empty());
    }

    #[test]
    fn test_daily_fifty_years_stays_finite() {
        let out = compare_compound_interest(&input(dec!(1000000), dec!(15), 50, CompoundingFrequency::Daily))
            .unwrap()
            .result;
        assert_eq!(out.comparison.len(), 50);
        assert!(out.compound_value > out.simple_value);
    }

    #[test]
    fn test_absurd_rate_reports_overflow() {
        let err = compare_compound_interest(&input(dec!(1000000), dec!(50000), 50, CompoundingFrequency::Yearly))
            .unwrap_err();
        assert!(matches!(err, WealthError::NumericOverflow { .. }));
    }

    #[test]
    fn test_frequency_parsing() {
        assert_eq!("half-yearly".parse::<CompoundingFrequency>().unwrap(), CompoundingFrequency::HalfYearly);
        assert_eq!("Annual".parse::<CompoundingFrequency>().unwrap(), CompoundingFrequency::Yearly);
        assert!("weekly".parse::<CompoundingFrequency>().is_err());
        let freq: CompoundingFrequency = serde_json::from_str("\"half_yearly\"").unwrap();
        assert_eq!(freq, CompoundingFrequency::HalfYearly);
    }
}
