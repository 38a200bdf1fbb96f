use napi::Result as NapiResult;
use napi_derive::napi;
use rust_decimal::Decimal;
use serde::Deserialize;
use serde_json::Value;

use wealth_core::currency::FormatStyle;
use wealth_core::holdings::valuation::{ValuationField, ValuationFields};

/// Convert any Display error into a napi::Error.
fn to_napi_error(e: impl std::fmt::Display) -> napi::Error {
    napi::Error::from_reason(e.to_string())
}

// ---------------------------------------------------------------------------
// Loans
// ---------------------------------------------------------------------------

#[napi]
pub fn compute_amortization(input_json: String) -> NapiResult<String> {
    let terms: wealth_core::loans::amortization::LoanTerms =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output =
        wealth_core::loans::amortization::compute_amortization(&terms).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

// ---------------------------------------------------------------------------
// Growth
// ---------------------------------------------------------------------------

#[napi]
pub fn project_sip(input_json: String) -> NapiResult<String> {
    let input: wealth_core::growth::sip::SipInput =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output = wealth_core::growth::sip::project_sip(&input).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

#[napi]
pub fn simulate_swp(input_json: String) -> NapiResult<String> {
    let input: wealth_core::growth::swp::SwpInput =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output = wealth_core::growth::swp::simulate_swp(&input).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

#[napi]
pub fn compare_compound_interest(input_json: String) -> NapiResult<String> {
    let input: wealth_core::growth::compound::CompoundInput =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output =
        wealth_core::growth::compound::compare_compound_interest(&input).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

// ---------------------------------------------------------------------------
// Currency
// ---------------------------------------------------------------------------

/// Formats a number or numeric string; anything unparseable renders "N/A".
#[napi]
pub fn format_currency(amount: Value, currency: Option<String>, style: Option<String>) -> String {
    let code = currency.unwrap_or_else(|| "INR".to_string());
    let style = style
        .and_then(|s| s.parse::<FormatStyle>().ok())
        .unwrap_or_default();
    let raw = match amount {
        Value::String(s) => s,
        Value::Number(n) => n.to_string(),
        _ => String::new(),
    };
    wealth_core::currency::format_currency_str(&raw, &code, style)
}

// ---------------------------------------------------------------------------
// Budget
// ---------------------------------------------------------------------------

#[napi]
pub fn allocate_budget(input_json: String) -> NapiResult<String> {
    let input: wealth_core::budget::BudgetInput =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output = wealth_core::budget::allocate_budget(&input).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

// ---------------------------------------------------------------------------
// Holdings
// ---------------------------------------------------------------------------

#[derive(Deserialize)]
struct ValuationRequest {
    #[serde(default)]
    quantity: Option<Decimal>,
    #[serde(default)]
    unit_price: Option<Decimal>,
    #[serde(default)]
    total_value: Option<Decimal>,
    changed: ValuationField,
}

#[napi]
pub fn derive_valuation(input_json: String) -> NapiResult<String> {
    let request: ValuationRequest = serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let fields = ValuationFields {
        quantity: request.quantity,
        unit_price: request.unit_price,
        total_value: request.total_value,
    };
    let derived = wealth_core::holdings::valuation::derive_valuation(&fields, request.changed)
        .map_err(to_napi_error)?;
    serde_json::to_string(&derived).map_err(to_napi_error)
}

#[napi]
pub fn summarize_net_worth(input_json: String) -> NapiResult<String> {
    let input: wealth_core::holdings::net_worth::NetWorthInput =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output =
        wealth_core::holdings::net_worth::summarize_net_worth(&input).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}
