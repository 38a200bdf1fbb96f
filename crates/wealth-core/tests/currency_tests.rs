use pretty_assertions::assert_eq;
use rust_decimal_macros::dec;
use wealth_core::currency::{format_currency, format_currency_str, FormatStyle, PLACEHOLDER};
use wealth_core::Currency;

// ===========================================================================
// Currency presentation tests
// ===========================================================================

#[test]
fn test_indian_compact_notation() {
    assert_eq!(
        format_currency(Some(dec!(12345678)), &Currency::INR, FormatStyle::Indian),
        "₹1.23 Cr"
    );
    assert_eq!(
        format_currency(Some(dec!(50000)), &Currency::INR, FormatStyle::Indian),
        "₹0.50 L"
    );
}

#[test]
fn test_style_is_ignored_outside_inr() {
    for style in [FormatStyle::Standard, FormatStyle::Indian] {
        assert_eq!(
            format_currency(Some(dec!(12345678)), &Currency::USD, style),
            "$12,345,678.00"
        );
    }
}

#[test]
fn test_code_strings_parse_to_known_currencies() {
    assert_eq!(format_currency_str("99.5", "gbp", FormatStyle::Standard), "£99.50");
    assert_eq!(format_currency_str("1234.5", "EUR", FormatStyle::Standard), "€1,234.50");
    assert_eq!(format_currency_str("1234.5", "AUD", FormatStyle::Standard), "AUD 1,234.50");
}

#[test]
fn test_never_fails_on_garbage() {
    for raw in ["", "   ", "1.2.3", "₹", "abc", "NaN"] {
        assert_eq!(format_currency_str(raw, "INR", FormatStyle::Indian), PLACEHOLDER);
    }
}

#[test]
fn test_formatting_is_deterministic() {
    let a = format_currency(Some(dec!(98765.4321)), &Currency::INR, FormatStyle::Indian);
    let b = format_currency(Some(dec!(98765.4321)), &Currency::INR, FormatStyle::Indian);
    assert_eq!(a, b);
    assert_eq!(a, "₹0.99 L");
}
