pub mod error;
pub mod time_value;
pub mod types;

#[cfg(feature = "loans")]
pub mod loans;

#[cfg(feature = "growth")]
pub mod growth;

#[cfg(feature = "currency")]
pub mod currency;

#[cfg(feature = "budget")]
pub mod budget;

#[cfg(feature = "holdings")]
pub mod holdings;

pub use error::WealthError;
pub use types::*;

/// Standard result type for all wealth-core operations
pub type WealthResult<T> = Result<T, WealthError>;
