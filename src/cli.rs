//! CLI definition, argument resolution and the download pipeline.

use chrono::{Local, NaiveDate};
use clap::Parser;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use crate::adapters::csv_adapter::CsvTableWriter;
use crate::adapters::file_config_adapter::FileConfigAdapter;
use crate::adapters::yahoo_adapter::YahooAdapter;
use crate::domain::dates::{DateRange, format_date, one_year_before};
use crate::domain::error::StockDataError;
use crate::domain::price_table::PriceTable;
use crate::domain::settings::Settings;
use crate::domain::tickers::TickerSet;
use crate::ports::data_port::{PriceDataPort, PriceQuery};
use crate::ports::table_port::TableWriterPort;

pub const DEFAULT_TICKERS: &str = "AMZN";
pub const DEFAULT_FILE_NAME: &str = "asset_prices.csv";

#[derive(Parser, Debug)]
#[command(
    name = "getstockdata",
    about = "Download daily adjusted closing prices for stock tickers into a CSV file"
)]
pub struct Cli {
    /// Stock tickers separated by space. Example: "AMZN MSFT"
    #[arg(short, long, default_value = DEFAULT_TICKERS)]
    pub tickers: String,
    /// Start date in YYYY-MM-DD format [default: one year before today]
    #[arg(short, long)]
    pub start: Option<String>,
    /// End date in YYYY-MM-DD format [default: today]
    #[arg(short, long)]
    pub end: Option<String>,
    /// Output CSV file
    #[arg(short, long, default_value = DEFAULT_FILE_NAME)]
    pub file: PathBuf,
    /// INI file with provider and output settings
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

/// Arguments after defaults are applied. Dates are still unparsed text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedArgs {
    pub file: PathBuf,
    pub tickers: String,
    pub start: String,
    pub end: String,
    pub config: Option<PathBuf>,
}

impl ResolvedArgs {
    pub fn date_range(&self) -> Result<DateRange, StockDataError> {
        DateRange::parse(&self.start, &self.end)
    }
}

/// Fill in the date defaults relative to `today`.
pub fn resolve(cli: Cli, today: NaiveDate) -> ResolvedArgs {
    ResolvedArgs {
        file: cli.file,
        tickers: cli.tickers,
        start: cli
            .start
            .unwrap_or_else(|| format_date(one_year_before(today))),
        end: cli.end.unwrap_or_else(|| format_date(today)),
        config: cli.config,
    }
}

/// Parse `args` (program name first) and resolve defaults.
///
/// Help requests come back as a `clap::Error` of kind `DisplayHelp`.
pub fn resolve_args<I, T>(args: I, today: NaiveDate) -> Result<ResolvedArgs, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    Cli::try_parse_from(args).map(|cli| resolve(cli, today))
}

pub fn load_settings(path: Option<&Path>) -> Result<Settings, StockDataError> {
    let Some(path) = path else {
        return Ok(Settings::default());
    };
    let adapter = FileConfigAdapter::from_file(path).map_err(|e| StockDataError::ConfigParse {
        file: path.display().to_string(),
        reason: e.to_string(),
    })?;
    Settings::from_config(&adapter)
}

/// Validate, fetch, reshape and write. Returns the output path.
///
/// The date range is checked before the data port is touched.
pub fn execute(
    args: &ResolvedArgs,
    data_port: &dyn PriceDataPort,
    writer: &dyn TableWriterPort,
) -> Result<PathBuf, StockDataError> {
    let range = args.date_range()?;
    let tickers = TickerSet::parse(&args.tickers);

    tracing::info!(
        tickers = %tickers.raw(),
        start = %range.start,
        end = %range.end,
        "fetching prices"
    );
    let response = data_port.fetch_prices(&tickers, &PriceQuery { range })?;

    if response.is_empty() {
        return Err(StockDataError::NoData {
            tickers: tickers.raw().to_string(),
        });
    }

    let table = PriceTable::from_response(&tickers, response);
    tracing::info!(
        rows = table.row_count(),
        columns = table.columns.len(),
        path = %args.file.display(),
        "writing price table"
    );
    writer.write_table(&table, &args.file)?;

    Ok(args.file.clone())
}

pub fn run(cli: Cli) -> ExitCode {
    let args = resolve(cli, Local::now().date_naive());

    let settings = match load_settings(args.config.as_deref()) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("error: {e}");
            return (&e).into();
        }
    };

    let provider = match YahooAdapter::new(&settings.provider) {
        Ok(p) => p,
        Err(e) => {
            eprintln!("error: {e}");
            return (&e).into();
        }
    };
    let writer = CsvTableWriter::new(settings.output.delimiter);

    match execute(&args, &provider, &writer) {
        Ok(path) => {
            println!("{}", path.display());
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {e}");
            (&e).into()
        }
    }
}
