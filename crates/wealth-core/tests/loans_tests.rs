use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use wealth_core::loans::amortization::{compute_amortization, LoanTerms};
use wealth_core::WealthError;

// ===========================================================================
// Amortization schedule tests
// ===========================================================================

#[test]
fn test_conservation_across_terms() {
    let cases = [
        (dec!(100000), dec!(12), 12),
        (dec!(2500000), dec!(8.5), 240),
        (dec!(750000), dec!(10.75), 84),
        (dec!(999.99), dec!(24), 7),
        (dec!(45000000), dec!(6.9), 360),
        (dec!(12000), dec!(0), 12),
        (dec!(1), dec!(1), 600),
    ];
    for (principal, rate, months) in cases {
        let summary = compute_amortization(&LoanTerms::new(principal, rate, months))
            .unwrap()
            .result;
        let principal_paid: Decimal = summary.schedule.iter().map(|e| e.principal_portion).sum();
        assert!(
            (principal_paid - principal).abs() <= dec!(0.01),
            "principal {principal} at {rate}% over {months}: paid {principal_paid}"
        );
        assert_eq!(summary.schedule.len(), months as usize);
        assert_eq!(summary.schedule.last().unwrap().remaining_balance, Decimal::ZERO);
        assert_eq!(summary.total_amount, summary.total_interest + principal_paid);
    }
}

#[test]
fn test_zero_rate_twelve_thousand() {
    let summary = compute_amortization(&LoanTerms::new(dec!(12000), dec!(0), 12))
        .unwrap()
        .result;
    assert!(summary.schedule.iter().all(|e| e.payment == dec!(1000.00)
        && e.principal_portion == dec!(1000.00)
        && e.interest_portion.is_zero()));
}

#[test]
fn test_annuity_table_value() {
    let summary = compute_amortization(&LoanTerms::new(dec!(100000), dec!(12), 12))
        .unwrap()
        .result;
    assert!((summary.monthly_payment - dec!(8884.88)).abs() <= dec!(0.01));
    assert!(summary.total_interest > dec!(6600) && summary.total_interest < dec!(6700));
}

#[test]
fn test_months_are_sequential() {
    let summary = compute_amortization(&LoanTerms::new(dec!(500000), dec!(9), 60))
        .unwrap()
        .result;
    for (idx, entry) in summary.schedule.iter().enumerate() {
        assert_eq!(entry.month, idx as u32 + 1);
    }
}

#[test]
fn test_interest_share_falls_over_time() {
    let summary = compute_amortization(&LoanTerms::new(dec!(500000), dec!(9), 60))
        .unwrap()
        .result;
    let first = &summary.schedule[0];
    let last = summary.schedule.last().unwrap();
    assert!(first.interest_portion > last.interest_portion);
    assert!(first.principal_portion < last.principal_portion);
}

#[test]
fn test_invalid_arguments_name_the_field() {
    let err = compute_amortization(&LoanTerms::new(dec!(-100), dec!(5), 12)).unwrap_err();
    match err {
        WealthError::InvalidArgument { field, .. } => assert_eq!(field, "principal"),
        other => panic!("unexpected error {other:?}"),
    }
}

#[test]
fn test_schedule_totals_overflow_as_error() {
    let terms = LoanTerms::new(dec!(79000000000000000000000000000), dec!(12), 12);
    match compute_amortization(&terms) {
        Err(WealthError::NumericOverflow { context }) => assert!(context.contains("month")),
        other => panic!("expected NumericOverflow, got {other:?}"),
    }
    // Large but representable totals still compute
    let large = LoanTerms::new(dec!(1000000000000000000000000), dec!(12), 12);
    assert!(compute_amortization(&large).is_ok());
}

#[test]
fn test_output_is_idempotent() {
    let terms = LoanTerms::new(dec!(1234567.89), dec!(7.25), 180);
    let first = serde_json::to_string(&compute_amortization(&terms).unwrap()).unwrap();
    let second = serde_json::to_string(&compute_amortization(&terms).unwrap()).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_json_envelope_shape() {
    let out = compute_amortization(&LoanTerms::new(dec!(100000), dec!(12), 12)).unwrap();
    let json = serde_json::to_value(&out).unwrap();
    assert_eq!(json["result"]["monthly_payment"], "8884.88");
    assert_eq!(json["result"]["schedule"].as_array().unwrap().len(), 12);
    assert_eq!(json["metadata"]["precision"], "rust_decimal_128bit");
}
