//! Daily closing prices and the provider response shapes.

use chrono::NaiveDate;
use std::collections::BTreeSet;

/// One trading day. `close` is the adjusted close, `None` when the provider
/// left it null.
#[derive(Debug, Clone, PartialEq)]
pub struct DailyBar {
    pub date: NaiveDate,
    pub close: Option<f64>,
}

/// Bars for one symbol, ascending by date, at most one per date.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PriceSeries {
    pub bars: Vec<DailyBar>,
}

impl PriceSeries {
    /// Sort `bars` by date. When several bars share a date the one that came
    /// last in `bars` is kept.
    pub fn new(mut bars: Vec<DailyBar>) -> Self {
        bars.reverse();
        bars.sort_by_key(|b| b.date);
        bars.dedup_by_key(|b| b.date);
        Self { bars }
    }

    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    pub fn dates(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.bars.iter().map(|b| b.date)
    }
}

/// What the provider hands back for one request.
#[derive(Debug, Clone, PartialEq)]
pub enum PriceResponse {
    /// At most one ticker was requested.
    Single(PriceSeries),
    /// Several tickers, each with its own series, in request order.
    Grouped(Vec<(String, PriceSeries)>),
}

impl PriceResponse {
    /// Distinct trading dates across the whole response.
    pub fn row_count(&self) -> usize {
        match self {
            PriceResponse::Single(series) => series.dates().collect::<BTreeSet<_>>().len(),
            PriceResponse::Grouped(groups) => groups
                .iter()
                .flat_map(|(_, series)| series.dates())
                .collect::<BTreeSet<_>>()
                .len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.row_count() == 0
    }
}
