pub mod compound;
pub mod sip;
pub mod swp;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::error::WealthError;
use crate::types::{percent_to_rate, Money, Rate};
use crate::WealthResult;

/// Longest projection horizon accepted by the growth calculators.
pub const MAX_YEARS: u32 = 50;

/// One year of a growth projection.
///
/// `invested_or_withdrawn` is cumulative contributions for SIP and compound
/// projections, and the amount withdrawn during that year for SWP.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GrowthSeriesPoint {
    pub period: String,
    pub invested_or_withdrawn: Money,
    pub returns: Money,
    pub running_total_or_balance: Money,
}

pub(crate) fn year_label(year: u32) -> String {
    format!("Year {year}")
}

pub(crate) fn validate_years(years: u32) -> WealthResult<()> {
    if years == 0 || years > MAX_YEARS {
        return Err(WealthError::invalid(
            "years",
            format!("Projection horizon must be between 1 and {MAX_YEARS} years"),
        ));
    }
    Ok(())
}

/// Validate an annual percent rate and return it as a decimal fraction.
/// Negative rates model depreciation but cannot reach -100%.
pub(crate) fn annual_rate(annual_rate_percent: Decimal) -> WealthResult<Rate> {
    if annual_rate_percent <= dec!(-100) {
        return Err(WealthError::invalid(
            "annual_rate_percent",
            "Annual rate must be greater than -100%",
        ));
    }
    Ok(percent_to_rate(annual_rate_percent))
}

pub(crate) fn monthly_rate(annual_rate_percent: Decimal) -> WealthResult<Rate> {
    Ok(annual_rate(annual_rate_percent)? / Decimal::from(12))
}

pub(crate) fn depreciation_warning(annual_rate_percent: Decimal) -> Option<String> {
    (annual_rate_percent < Decimal::ZERO)
        .then(|| format!("Negative rate ({annual_rate_percent}%) models depreciation"))
}
