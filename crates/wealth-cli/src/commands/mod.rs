pub mod budget;
pub mod currency;
pub mod growth;
pub mod holdings;
pub mod loans;
