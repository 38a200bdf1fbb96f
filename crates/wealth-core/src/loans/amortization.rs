use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::WealthError;
use crate::time_value::annuity_payment;
use crate::types::*;
use crate::WealthResult;

/// Longest loan the calculator will schedule (50 years).
pub const MAX_TERM_MONTHS: u32 = 600;

/// Input terms of an installment loan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanTerms {
    pub principal: Money,
    /// Nominal annual rate in percent (12 = 12% p.a.)
    #[serde(alias = "annual_interest_rate", alias = "rate")]
    pub annual_rate_percent: Decimal,
    #[serde(alias = "tenure_months", alias = "months")]
    pub term_months: u32,
}

impl LoanTerms {
    pub fn new(principal: Money, annual_rate_percent: Decimal, term_months: u32) -> Self {
        LoanTerms {
            principal,
            annual_rate_percent,
            term_months,
        }
    }

    /// Periodic (monthly) rate as a decimal fraction.
    pub fn monthly_rate(&self) -> Rate {
        percent_to_rate(self.annual_rate_percent) / Decimal::from(12)
    }

    fn validate(&self) -> WealthResult<()> {
        if self.principal <= Decimal::ZERO {
            return Err(WealthError::invalid(
                "principal",
                "Loan principal must be positive",
            ));
        }
        if self.term_months == 0 {
            return Err(WealthError::invalid(
                "term_months",
                "Loan term must be at least 1 month",
            ));
        }
        if self.term_months > MAX_TERM_MONTHS {
            return Err(WealthError::invalid(
                "term_months",
                format!("Loan term must not exceed {MAX_TERM_MONTHS} months"),
            ));
        }
        if self.annual_rate_percent < Decimal::ZERO {
            return Err(WealthError::invalid(
                "annual_rate_percent",
                "Interest rate cannot be negative",
            ));
        }
        Ok(())
    }
}

/// A single month of the repayment schedule
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AmortizationEntry {
    pub month: u32,
    pub payment: Money,
    pub principal_portion: Money,
    pub interest_portion: Money,
    pub remaining_balance: Money,
}

/// Loan summary with the full month-by-month schedule
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanSummary {
    pub monthly_payment: Money,
    pub total_interest: Money,
    pub total_amount: Money,
    pub schedule: Vec<AmortizationEntry>,
}

/// Build the amortization schedule of a fixed-rate installment loan.
///
/// The schedule is run on cent-rounded balances: every row satisfies
/// `payment == principal_portion + interest_portion`, the principal portions
/// sum to the (rounded) principal, and the final row absorbs the rounding
/// residue so that its remaining balance is exactly zero.
pub fn compute_amortization(terms: &LoanTerms) -> WealthResult<ComputationOutput<LoanSummary>> {
    let mut warnings: Vec<String> = Vec::new();
    terms.validate()?;

    log::debug!(
        "amortizing {} over {} months at {}%",
        terms.principal,
        terms.term_months,
        terms.annual_rate_percent
    );

    let rate = terms.monthly_rate();
    let n = terms.term_months;
    let monthly_payment = round_money(annuity_payment(terms.principal, rate, n)?);

    if rate.is_zero() {
        warnings.push("Zero interest rate: every payment is principal only".into());
    }

    let mut schedule = Vec::with_capacity(n as usize);
    let mut balance = round_money(terms.principal);

    let first_interest = round_money(
        balance
            .checked_mul(rate)
            .ok_or_else(|| WealthError::overflow("interest for month 1"))?,
    );
    if n > 1 && !rate.is_zero() && monthly_payment <= first_interest {
        warnings.push(format!(
            "Regular payment of {monthly_payment} does not exceed the first month's interest \
             of {first_interest}: the principal is repaid in the final month"
        ));
    }
    let mut total_interest = Decimal::ZERO;
    let mut total_amount = Decimal::ZERO;

    for month in 1..=n {
        let interest = round_money(
            balance
                .checked_mul(rate)
                .ok_or_else(|| WealthError::overflow(format!("interest for month {month}")))?,
        );

        let principal_portion = if month == n {
            balance
        } else {
            (monthly_payment - interest).max(Decimal::ZERO).min(balance)
        };
        let overflow = || WealthError::overflow(format!("total repayment at month {month}"));
        let payment = principal_portion.checked_add(interest).ok_or_else(overflow)?;

        balance = balance.checked_sub(principal_portion).ok_or_else(overflow)?;
        total_interest = total_interest.checked_add(interest).ok_or_else(overflow)?;
        total_amount = total_amount.checked_add(payment).ok_or_else(overflow)?;

        schedule.push(AmortizationEntry {
            month,
            payment,
            principal_portion,
            interest_portion: interest,
            remaining_balance: balance,
        });
    }

    if let Some(last) = schedule.last() {
        if last.payment != monthly_payment {
            warnings.push(format!(
                "Final payment of {} differs from the regular payment to clear rounding residue",
                last.payment
            ));
        }
    }

    let output = LoanSummary {
        monthly_payment,
        total_interest,
        total_amount,
        schedule,
    };

    Ok(with_metadata(
        "Fixed-rate annuity amortization (monthly, cent-rounded balances)",
        &serde_json::json!({
            "principal": terms.principal.to_string(),
            "annual_rate_percent": terms.annual_rate_percent.to_string(),
            "term_months": terms.term_months,
            "rounding": "2dp, half away from zero",
        }),
        warnings,
        output,
    ))
}

/// Outstanding balance after `months_paid` scheduled payments.
pub fn outstanding_balance(terms: &LoanTerms, months_paid: u32) -> WealthResult<Money> {
    if months_paid == 0 {
        terms.validate()?;
        return Ok(round_money(terms.principal));
    }
    let summary = compute_amortization(terms)?.result;
    let idx = months_paid.min(terms.term_months) as usize - 1;
    Ok(summary.schedule[idx].remaining_balance)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn home_loan() -> LoanTerms {
        LoanTerms::new(dec!(2500000), dec!(8.5), 240)
    }

    #[test]
    fn test_zero_rate_equal_payments() {
        let out = compute_amortization(&LoanTerms::new(dec!(12000), dec!(0), 12)).unwrap();
        let summary = out.result;
        assert_eq!(summary.monthly_payment, dec!(1000));
        assert_eq!(summary.total_interest, Decimal::ZERO);
        assert_eq!(summary.schedule.len(), 12);
        for entry in &summary.schedule {
            assert_eq!(entry.payment, dec!(1000));
            assert_eq!(entry.principal_portion, dec!(1000));
            assert_eq!(entry.interest_portion, Decimal::ZERO);
        }
        assert_eq!(out.warnings.len(), 1);
    }

    #[test]
    fn test_zero_rate_uneven_split_lands_on_final_payment() {
        let summary = compute_amortization(&LoanTerms::new(dec!(1000), dec!(0), 3))
            .unwrap()
            .result;
        assert_eq!(summary.monthly_payment, dec!(333.33));
        assert_eq!(summary.schedule[2].payment, dec!(333.34));
        assert_eq!(summary.total_amount, dec!(1000));
    }

    #[test]
    fn test_known_annuity_value() {
        let summary = compute_amortization(&LoanTerms::new(dec!(100000), dec!(12), 12))
            .unwrap()
            .result;
        assert!((summary.monthly_payment - dec!(8884.88)).abs() <= dec!(0.01));
        // First month interest is 1% of the full principal
        assert_eq!(summary.schedule[0].interest_portion, dec!(1000));
        assert_eq!(summary.schedule[0].principal_portion, dec!(7884.88));
    }

    #[test]
    fn test_schedule_conserves_principal() {
        let terms = home_loan();
        let summary = compute_amortization(&terms).unwrap().result;
        let principal_paid: Decimal = summary.schedule.iter().map(|e| e.principal_portion).sum();
        assert!((principal_paid - terms.principal).abs() <= dec!(0.01));
        assert_eq!(
            summary.schedule.last().unwrap().remaining_balance,
            Decimal::ZERO
        );
    }

    #[test]
    fn test_each_row_balances() {
        let summary = compute_amortization(&home_loan()).unwrap().result;
        for entry in &summary.schedule {
            assert_eq!(entry.payment, entry.principal_portion + entry.interest_portion);
            assert!(entry.remaining_balance >= Decimal::ZERO);
        }
        assert_eq!(
            summary.total_amount,
            summary.total_interest + dec!(2500000)
        );
    }

    #[test]
    fn test_balances_decrease_monotonically() {
        let summary = compute_amortization(&home_loan()).unwrap().result;
        for pair in summary.schedule.windows(2) {
            assert!(pair[1].remaining_balance < pair[0].remaining_balance);
        }
    }

    #[test]
    fn test_rejects_bad_terms() {
        let cases = [
            (LoanTerms::new(dec!(0), dec!(10), 12), "principal"),
            (LoanTerms::new(dec!(-5), dec!(10), 12), "principal"),
            (LoanTerms::new(dec!(1000), dec!(10), 0), "term_months"),
            (LoanTerms::new(dec!(1000), dec!(10), 601), "term_months"),
            (LoanTerms::new(dec!(1000), dec!(-1), 12), "annual_rate_percent"),
        ];
        for (terms, expected) in cases {
            match compute_amortization(&terms) {
                Err(WealthError::InvalidArgument { field, .. }) => assert_eq!(field, expected),
                other => panic!("expected InvalidArgument for {expected}, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_extreme_rate_overflows_cleanly() {
        let terms = LoanTerms::new(dec!(1000000), dec!(100000), 600);
        assert!(matches!(
            compute_amortization(&terms),
            Err(WealthError::NumericOverflow { .. })
        ));
    }

    #[test]
    fn test_outstanding_balance() {
        let terms = LoanTerms::new(dec!(100000), dec!(12), 12);
        assert_eq!(outstanding_balance(&terms, 0).unwrap(), dec!(100000));
        assert_eq!(outstanding_balance(&terms, 1).unwrap(), dec!(92115.12));
        assert_eq!(outstanding_balance(&terms, 12).unwrap(), Decimal::ZERO);
        assert_eq!(outstanding_balance(&terms, 40).unwrap(), Decimal::ZERO);
    }

    #[test]
    fn test_accepts_api_field_names() {
        let terms: LoanTerms = serde_json::from_str(
            r#"{"principal": "50000", "annual_interest_rate": "9", "tenure_months": 24}"#,
        )
        .unwrap();
        assert_eq!(terms, LoanTerms::new(dec!(50000), dec!(9), 24));
    }

    #[test]
    fn test_repayment_total_overflow_is_reported() {
        let terms = LoanTerms::new(dec!(79000000000000000000000000000), dec!(12), 12);
        assert!(matches!(
            compute_amortization(&terms),
            Err(WealthError::NumericOverflow { .. })
        ));
    }

    #[test]
    fn test_payment_below_interest_is_flagged() {
        let out = compute_amortization(&LoanTerms::new(dec!(1), dec!(1), 600)).unwrap();
        assert_eq!(out.result.monthly_payment, Decimal::ZERO);
        assert!(out
            .warnings
            .iter()
            .any(|w| w.contains("first month's interest")));
        assert_eq!(out.result.schedule[599].principal_portion, dec!(1));

        let regular = compute_amortization(&LoanTerms::new(dec!(100000), dec!(12), 12)).unwrap();
        assert!(!regular
            .warnings
            .iter()
            .any(|w| w.contains("first month's interest")));
    }
}
