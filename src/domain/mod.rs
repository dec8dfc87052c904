//! Core domain types and logic.

pub mod dates;
pub mod error;
pub mod price_series;
pub mod price_table;
pub mod settings;
pub mod tickers;
