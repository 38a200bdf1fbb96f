use rust_decimal::Decimal;

use crate::error::WealthError;
use crate::types::{Money, Rate};
use crate::WealthResult;

/// (1 + r)^n by repeated checked multiplication (avoids Decimal::powd drift).
pub fn compound_factor(rate: Rate, periods: u32) -> WealthResult<Decimal> {
    let growth = Decimal::ONE
        .checked_add(rate)
        .ok_or_else(|| WealthError::overflow("compound factor"))?;
    let mut result = Decimal::ONE;
    for _ in 0..periods {
        result = result
            .checked_mul(growth)
            .ok_or_else(|| WealthError::overflow(format!("compound factor over {periods} periods")))?;
    }
    Ok(result)
}

/// Level payment that fully amortizes `principal` over `nper` periods.
///
/// payment = P * r(1+r)^n / ((1+r)^n - 1), or P / n when r = 0.
pub fn annuity_payment(principal: Money, rate: Rate, nper: u32) -> WealthResult<Money> {
    if nper == 0 {
        return Err(WealthError::invalid(
            "nper",
            "Number of periods must be > 0",
        ));
    }

    if rate.is_zero() {
        return Ok(principal / Decimal::from(nper));
    }

    let factor = compound_factor(rate, nper)?;
    let denominator = factor - Decimal::ONE;
    if denominator.is_zero() {
        return Err(WealthError::overflow("annuity denominator"));
    }

    principal
        .checked_mul(rate)
        .and_then(|v| v.checked_mul(factor))
        .and_then(|v| v.checked_div(denominator))
        .ok_or_else(|| WealthError::overflow("annuity payment"))
}

/// Future value of an annuity due (payment at the start of each period):
/// FV = pmt * ((1+r)^n - 1) / r * (1+r), or pmt * n when r = 0.
pub fn fv_annuity_due(pmt: Money, rate: Rate, nper: u32) -> WealthResult<Money> {
    if rate.is_zero() {
        return pmt
            .checked_mul(Decimal::from(nper))
            .ok_or_else(|| WealthError::overflow("annuity future value"));
    }

    let factor = compound_factor(rate, nper)?;
    pmt.checked_mul(factor - Decimal::ONE)
        .and_then(|v| v.checked_div(rate))
        .and_then(|v| v.checked_mul(Decimal::ONE + rate))
        .ok_or_else(|| WealthError::overflow("annuity future value"))
}

/// Future value of a lump sum compounded `periods` times at `rate` per period.
pub fn fv_lump_sum(present_value: Money, rate: Rate, periods: u32) -> WealthResult<Money> {
    let factor = compound_factor(rate, periods)?;
    present_value
        .checked_mul(factor)
        .ok_or_else(|| WealthError::overflow("lump-sum future value"))
}
