//! Yahoo Finance price provider.
//!
//! Reads adjusted daily closes from the v8 chart endpoint, one request per
//! distinct symbol. The end date is exclusive: `period2` is midnight UTC of the end
//! day. Symbols the endpoint reports as not found come back as empty series
//! so an all-unknown request surfaces as an empty response, not an error.

use crate::domain::dates::DateRange;
use crate::domain::error::StockDataError;
use crate::domain::price_series::{DailyBar, PriceResponse, PriceSeries};
use crate::domain::settings::ProviderSettings;
use crate::domain::tickers::TickerSet;
use crate::ports::data_port::{PriceDataPort, PriceQuery};
use chrono::{DateTime, NaiveDate};
use reqwest::{StatusCode, Url};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct ChartResponse {
    chart: ChartResult,
}

#[derive(Debug, Deserialize)]
struct ChartResult {
    result: Option<Vec<ChartData>>,
    error: Option<ChartError>,
}

#[derive(Debug, Deserialize)]
struct ChartError {
    code: String,
    description: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ChartData {
    meta: Option<ChartMeta>,
    timestamp: Option<Vec<i64>>,
    indicators: Indicators,
}

#[derive(Debug, Deserialize)]
struct ChartMeta {
    gmtoffset: Option<i64>,
}

#[derive(Debug, Deserialize)]
struct Indicators {
    quote: Vec<QuoteData>,
    adjclose: Option<Vec<AdjCloseData>>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct QuoteData {
    close: Vec<Option<f64>>,
}

#[derive(Debug, Deserialize)]
struct AdjCloseData {
    adjclose: Vec<Option<f64>>,
}

pub struct YahooAdapter {
    client: reqwest::blocking::Client,
    base_url: String,
}

impl YahooAdapter {
    pub fn new(settings: &ProviderSettings) -> Result<Self, StockDataError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(settings.timeout)
            .user_agent(settings.user_agent.as_str())
            .build()
            .map_err(|e| StockDataError::Provider {
                reason: format!("failed to build HTTP client: {e}"),
            })?;

        Ok(Self {
            client,
            base_url: settings.base_url.clone(),
        })
    }

    fn chart_url(&self, symbol: &str, range: &DateRange) -> Result<Url, StockDataError> {
        let mut url = Url::parse(&self.base_url).map_err(|e| StockDataError::Provider {
            reason: format!("invalid base url {}: {e}", self.base_url),
        })?;
        url.path_segments_mut()
            .map_err(|_| StockDataError::Provider {
                reason: format!("base url {} cannot take a path", self.base_url),
            })?
            .pop_if_empty()
            .push(symbol);
        url.query_pairs_mut()
            .append_pair("period1", &midnight_utc(range.start).to_string())
            .append_pair("period2", &midnight_utc(range.end).to_string())
            .append_pair("interval", "1d")
            .append_pair("includeAdjustedClose", "true");
        Ok(url)
    }

    fn fetch_symbol(
        &self,
        symbol: &str,
        query: &PriceQuery,
    ) -> Result<PriceSeries, StockDataError> {
        let url = self.chart_url(symbol, &query.range)?;
        tracing::debug!(%url, "requesting chart");

        let resp = self
            .client
            .get(url)
            .send()
            .map_err(|e| StockDataError::Network {
                reason: format!("{symbol}: {e}"),
            })?;

        let status = resp.status();
        if status == StatusCode::NOT_FOUND {
            tracing::warn!(symbol, "symbol not found");
            return Ok(PriceSeries::default());
        }
        if !status.is_success() {
            return Err(StockDataError::Provider {
                reason: format!("HTTP {status} for {symbol}"),
            });
        }

        let body = resp.text().map_err(|e| StockDataError::Network {
            reason: format!("{symbol}: {e}"),
        })?;
        let series = parse_chart(symbol, &body)?;
        tracing::info!(symbol, bars = series.bars.len(), "fetched daily bars");
        Ok(series)
    }
}

impl PriceDataPort for YahooAdapter {
    fn fetch_prices(
        &self,
        tickers: &TickerSet,
        query: &PriceQuery,
    ) -> Result<PriceResponse, StockDataError> {
        if tickers.is_single() {
            let series = match tickers.symbols().first() {
                Some(symbol) => self.fetch_symbol(symbol, query)?,
                None => PriceSeries::default(),
            };
            return Ok(PriceResponse::Single(series));
        }

        let mut groups = Vec::with_capacity(tickers.len());
        for symbol in tickers.distinct() {
            let series = self.fetch_symbol(symbol, query)?;
            groups.push((symbol.to_string(), series));
        }
        Ok(PriceResponse::Grouped(groups))
    }
}

fn midnight_utc(date: NaiveDate) -> i64 {
    date.and_time(chrono::NaiveTime::MIN).and_utc().timestamp()
}

/// Turn a chart payload into a series of adjusted closes, dropping days with
/// no price at all. A day without `adjclose` keeps its raw close. When the
/// payload carries a second bar for a day (the live session), the later one
/// wins.
fn parse_chart(symbol: &str, body: &str) -> Result<PriceSeries, StockDataError> {
    let resp: ChartResponse = serde_json::from_str(body).map_err(|e| StockDataError::Provider {
        reason: format!("unreadable chart payload for {symbol}: {e}"),
    })?;

    let data = match (resp.chart.result, resp.chart.error) {
        (_, Some(err)) if err.code == "Not Found" => {
            tracing::warn!(symbol, "symbol not found");
            return Ok(PriceSeries::default());
        }
        (_, Some(err)) => {
            return Err(StockDataError::Provider {
                reason: format!(
                    "{symbol}: {} {}",
                    err.code,
                    err.description.unwrap_or_default()
                ),
            });
        }
        (Some(results), None) => match results.into_iter().next() {
            Some(data) => data,
            None => return Ok(PriceSeries::default()),
        },
        (None, None) => return Ok(PriceSeries::default()),
    };

    // No timestamps: the window holds no trading days.
    let Some(timestamps) = data.timestamp else {
        return Ok(PriceSeries::default());
    };

    let offset = data.meta.and_then(|m| m.gmtoffset).unwrap_or(0);
    let quote = data.indicators.quote.into_iter().next().unwrap_or_default();
    let adj_closes = data
        .indicators
        .adjclose
        .and_then(|v| v.into_iter().next())
        .map(|a| a.adjclose);

    let mut bars = Vec::with_capacity(timestamps.len());
    for (i, &ts) in timestamps.iter().enumerate() {
        let date = DateTime::from_timestamp(ts + offset, 0)
            .map(|dt| dt.date_naive())
            .ok_or_else(|| StockDataError::Provider {
                reason: format!("{symbol}: invalid timestamp {ts}"),
            })?;

        let adj = adj_closes.as_ref().and_then(|v| v.get(i).copied().flatten());
        let close = adj.or_else(|| quote.close.get(i).copied().flatten());
        if close.is_none() {
            continue;
        }

        bars.push(DailyBar { date, close });
    }

    Ok(PriceSeries::new(bars))
}
