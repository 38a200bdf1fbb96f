pub mod format;

pub use format::{format_currency, format_currency_f64, format_currency_str, FormatStyle, PLACEHOLDER};
