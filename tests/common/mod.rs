#![allow(dead_code)]

use chrono::NaiveDate;
use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use stockdata::domain::error::StockDataError;
pub use stockdata::domain::price_series::{DailyBar, PriceResponse, PriceSeries};
use stockdata::domain::tickers::TickerSet;
use stockdata::ports::data_port::{PriceDataPort, PriceQuery};

/// In-memory provider. Builds the response shape from the ticker count the
/// same way the Yahoo adapter does and records every call.
pub struct MockDataPort {
    pub data: HashMap<String, PriceSeries>,
    pub error: Option<String>,
    pub calls: Cell<usize>,
    pub last_query: RefCell<Option<PriceQuery>>,
}

impl MockDataPort {
    pub fn new() -> Self {
        Self {
            data: HashMap::new(),
            error: None,
            calls: Cell::new(0),
            last_query: RefCell::new(None),
        }
    }

    pub fn with_series(mut self, symbol: &str, series: PriceSeries) -> Self {
        self.data.insert(symbol.to_string(), series);
        self
    }

    pub fn with_error(mut self, reason: &str) -> Self {
        self.error = Some(reason.to_string());
        self
    }

    fn series_for(&self, symbol: &str) -> PriceSeries {
        self.data.get(symbol).cloned().unwrap_or_default()
    }
}

impl PriceDataPort for MockDataPort {
    fn fetch_prices(
        &self,
        tickers: &TickerSet,
        query: &PriceQuery,
    ) -> Result<PriceResponse, StockDataError> {
        self.calls.set(self.calls.get() + 1);
        *self.last_query.borrow_mut() = Some(*query);

        if let Some(reason) = &self.error {
            return Err(StockDataError::Network {
                reason: reason.clone(),
            });
        }

        if tickers.is_single() {
            let series = tickers
                .symbols()
                .first()
                .map(|s| self.series_for(s))
                .unwrap_or_default();
            return Ok(PriceResponse::Single(series));
        }

        Ok(PriceResponse::Grouped(
            tickers
                .distinct()
                .into_iter()
                .map(|s| (s.to_string(), self.series_for(s)))
                .collect(),
        ))
    }
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// `count` consecutive daily bars with closes `start_price`, `start_price + 1`, ...
pub fn generate_series(start_date: &str, count: usize, start_price: f64) -> PriceSeries {
    let start = NaiveDate::parse_from_str(start_date, "%Y-%m-%d").unwrap();
    PriceSeries::new(
        (0..count)
            .map(|i| {
                let price = start_price + i as f64;
                DailyBar {
                    date: start + chrono::Duration::days(i as i64),
                    close: Some(price),
                }
            })
            .collect(),
    )
}
