//! Market data port trait.

use crate::domain::dates::DateRange;
use crate::domain::error::StockDataError;
use crate::domain::price_series::PriceResponse;
use crate::domain::tickers::TickerSet;

/// Parameters of a single price request besides the tickers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriceQuery {
    pub range: DateRange,
}

pub trait PriceDataPort {
    /// Fetch split/dividend adjusted daily closes for every ticker in one
    /// call.
    ///
    /// Implementations answer with [`PriceResponse::Single`] when
    /// `tickers.is_single()` and [`PriceResponse::Grouped`] otherwise.
    fn fetch_prices(
        &self,
        tickers: &TickerSet,
        query: &PriceQuery,
    ) -> Result<PriceResponse, StockDataError>;
}
