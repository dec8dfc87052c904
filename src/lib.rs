//! stockdata — download daily closing prices for a set of tickers into a CSV file.
//!
//! Hexagonal architecture: domain logic in [`domain`], port traits in [`ports`],
//! concrete implementations in [`adapters`], argument handling in [`cli`].

pub mod adapters;
pub mod cli;
pub mod domain;
pub mod ports;
