//! Domain error types and their process exit codes.

/// Top-level error type for stockdata.
#[derive(Debug, thiserror::Error)]
pub enum StockDataError {
    #[error("invalid {field} date '{value}' (expected YYYY-MM-DD)")]
    InvalidDate { field: String, value: String },

    #[error("end date must be greater than or equal to start date ({end} < {start})")]
    DateOrder { start: String, end: String },

    #[error("not able to read stock data for '{tickers}'")]
    NoData { tickers: String },

    #[error("config parse error in {file}: {reason}")]
    ConfigParse { file: String, reason: String },

    #[error("invalid config value [{section}] {key}: {reason}")]
    ConfigInvalid {
        section: String,
        key: String,
        reason: String,
    },

    #[error("price provider error: {reason}")]
    Provider { reason: String },

    #[error("network error: {reason}")]
    Network { reason: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Csv(#[from] csv::Error),
}

impl From<&StockDataError> for std::process::ExitCode {
    fn from(err: &StockDataError) -> Self {
        let code: u8 = match err {
            StockDataError::DateOrder { .. } | StockDataError::NoData { .. } => 1,
            StockDataError::InvalidDate { .. }
            | StockDataError::ConfigParse { .. }
            | StockDataError::ConfigInvalid { .. } => 2,
            StockDataError::Provider { .. } | StockDataError::Network { .. } => 3,
            StockDataError::Io(_) | StockDataError::Csv(_) => 4,
        };
        std::process::ExitCode::from(code)
    }
}
