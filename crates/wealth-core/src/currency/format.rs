use std::str::FromStr;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::types::{round_money, Currency, Money};

/// Rendered in place of an amount that is absent or cannot be read.
pub const PLACEHOLDER: &str = "N/A";

const CRORE: Decimal = dec!(10000000);
const LAKH: Decimal = dec!(100000);
/// Smallest INR amount shown in lakh notation (0.10 L).
const LAKH_DISPLAY_FLOOR: Decimal = dec!(10000);

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormatStyle {
    /// Symbol prefix, groups of three, two decimals
    #[default]
    Standard,
    /// INR only: compact lakh/crore notation with Indian digit grouping
    Indian,
}

impl FromStr for FormatStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "standard" | "default" => Ok(FormatStyle::Standard),
            "indian" => Ok(FormatStyle::Indian),
            other => Err(format!("unknown format style '{other}' (expected standard or indian)")),
        }
    }
}

/// Render an amount for display. Never fails: a missing amount renders as
/// [`PLACEHOLDER`].
pub fn format_currency(amount: Option<Money>, currency: &Currency, style: FormatStyle) -> String {
    match amount {
        Some(value) => format_amount(value, currency, style),
        None => PLACEHOLDER.to_string(),
    }
}

/// Parse a loosely formatted amount ("1,50,000", " 42.5 ", "1e6") and render it.
pub fn format_currency_str(raw: &str, code: &str, style: FormatStyle) -> String {
    let currency = Currency::from(code.to_string());
    format_currency(parse_amount(raw), &currency, style)
}

/// Render a binary float; NaN and infinities render as [`PLACEHOLDER`].
pub fn format_currency_f64(amount: f64, code: &str, style: FormatStyle) -> String {
    let currency = Currency::from(code.to_string());
    format_currency(Decimal::try_from(amount).ok(), &currency, style)
}

fn parse_amount(raw: &str) -> Option<Money> {
    let cleaned: String = raw
        .chars()
        .filter(|c| !c.is_whitespace() && *c != ',' && *c != '_')
        .collect();
    if cleaned.is_empty() {
        return None;
    }
    Decimal::from_str(&cleaned)
        .or_else(|_| Decimal::from_scientific(&cleaned))
        .ok()
}

fn format_amount(amount: Money, currency: &Currency, style: FormatStyle) -> String {
    let negative = amount.is_sign_negative() && !round_money(amount).is_zero();
    let sign = if negative { "-" } else { "" };
    let magnitude = amount.abs();

    match (currency, style) {
        (Currency::INR, FormatStyle::Indian) => {
            let lakhs = round_money(magnitude / LAKH);
            if magnitude >= CRORE || lakhs >= dec!(100) {
                let crores = magnitude / CRORE;
                format!("{sign}₹{} Cr", fixed_two(crores, group_indian))
            } else if magnitude >= LAKH_DISPLAY_FLOOR {
                format!("{sign}₹{} L", fixed_two(lakhs, group_indian))
            } else {
                format!("{sign}₹{}", fixed_two(magnitude, group_indian))
            }
        }
        _ => match currency.symbol() {
            Some(symbol) => format!("{sign}{symbol}{}", fixed_two(magnitude, group_thousands)),
            None => format!(
                "{} {sign}{}",
                currency.code(),
                fixed_two(magnitude, group_thousands)
            ),
        },
    }
}

/// Two-decimal rendering of a non-negative value with the integer part
/// grouped by `group`.
fn fixed_two(value: Decimal, group: fn(&str) -> String) -> String {
    let text = round_money(value).to_string();
    match text.split_once('.') {
        Some((int_part, frac)) => format!("{}.{frac}", group(int_part)),
        None => format!("{}.00", group(&text)),
    }
}

/// 1234567 -> 1,234,567
fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// 1234567 -> 12,34,567
fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }
    let (head, tail) = digits.split_at(digits.len() - 3);
    format!("{},{tail}", group_pairs(head))
}

fn group_pairs(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 2);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 2 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
