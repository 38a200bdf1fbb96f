use serde_json::Value;

use super::scalar_text;

/// Print just the headline figure from the output.
///
/// Looks for well-known result fields in priority order, then falls back
/// to the first field in the result object.
pub fn print_minimal(value: &Value) {
    let result_obj = value
        .as_object()
        .and_then(|m| m.get("result"))
        .unwrap_or(value);

    let priority_keys = [
        "formatted",
        "monthly_payment",
        "future_value",
        "compound_value",
        "net_worth_display",
        "net_worth",
        "net_cash_flow",
        "final_balance",
        "total_value",
    ];

    if let Value::Object(map) = result_obj {
        for key in &priority_keys {
            if let Some(val) = map.get(*key) {
                if !val.is_null() {
                    println!("{}", scalar_text(val));
                    return;
                }
            }
        }

        if let Some((key, val)) = map.iter().next() {
            println!("{}: {}", key, scalar_text(val));
            return;
        }
    }

    println!("{}", scalar_text(result_obj));
}
