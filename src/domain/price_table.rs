//! Flat date × ticker price table and the reshape from a provider response.

use crate::domain::price_series::{PriceResponse, PriceSeries};
use crate::domain::tickers::TickerSet;
use chrono::NaiveDate;
use std::collections::{BTreeSet, HashMap};

#[derive(Debug, Clone, PartialEq)]
pub struct PriceRow {
    pub date: NaiveDate,
    pub values: Vec<Option<f64>>,
}

/// One row per trading date, one column per ticker.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceTable {
    pub columns: Vec<String>,
    pub rows: Vec<PriceRow>,
}

impl PriceTable {
    /// Reshape `response` into a table of closing prices.
    ///
    /// A flat series becomes a single column labelled with the raw ticker
    /// string. A grouped response becomes one column per ticker in request
    /// order, aligned on the union of all dates; gaps stay `None`.
    pub fn from_response(tickers: &TickerSet, response: PriceResponse) -> Self {
        match response {
            PriceResponse::Single(series) => Self::from_single(tickers.raw(), &series),
            PriceResponse::Grouped(groups) => Self::from_grouped(tickers, &groups),
        }
    }

    fn from_single(label: &str, series: &PriceSeries) -> Self {
        let rows = series
            .bars
            .iter()
            .map(|bar| PriceRow {
                date: bar.date,
                values: vec![bar.close],
            })
            .collect();

        Self {
            columns: vec![label.to_string()],
            rows,
        }
    }

    fn from_grouped(tickers: &TickerSet, groups: &[(String, PriceSeries)]) -> Self {
        let columns: Vec<String> = tickers.distinct().into_iter().map(str::to_string).collect();

        let lookups: Vec<HashMap<NaiveDate, Option<f64>>> = columns
            .iter()
            .map(|ticker| {
                groups
                    .iter()
                    .find(|(name, _)| name == ticker)
                    .map(|(_, series)| {
                        series
                            .bars
                            .iter()
                            .map(|bar| (bar.date, bar.close))
                            .collect()
                    })
                    .unwrap_or_default()
            })
            .collect();

        let timeline: BTreeSet<NaiveDate> = groups
            .iter()
            .flat_map(|(_, series)| series.dates())
            .collect();

        let rows = timeline
            .into_iter()
            .map(|date| PriceRow {
                date,
                values: lookups
                    .iter()
                    .map(|lookup| lookup.get(&date).copied().flatten())
                    .collect(),
            })
            .collect();

        Self { columns, rows }
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Values of one column, top to bottom.
    pub fn column(&self, name: &str) -> Option<Vec<Option<f64>>> {
        let idx = self.columns.iter().position(|c| c == name)?;
        Some(self.rows.iter().map(|row| row.values[idx]).collect())
    }
}
