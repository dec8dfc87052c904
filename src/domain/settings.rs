//! Provider and output settings, read from an optional INI file.
//!
//! ```ini
//! [provider]
//! base_url = https://query2.finance.yahoo.com/v8/finance/chart
//! timeout_secs = 30
//! user_agent = Mozilla/5.0
//!
//! [output]
//! delimiter = ,
//! ```
//!
//! `;` and `#` start a comment anywhere on a line, so neither can be used
//! as a value. There is no switch for raw prices: the table always holds
//! adjusted closes, and an `auto_adjust` key left over in a file is ignored.

use crate::domain::error::StockDataError;
use crate::ports::config_port::ConfigPort;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://query2.finance.yahoo.com/v8/finance/chart";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderSettings {
    pub base_url: String,
    pub timeout: Duration,
    pub user_agent: String,
}

impl Default for ProviderSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputSettings {
    pub delimiter: u8,
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self { delimiter: b',' }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Settings {
    pub provider: ProviderSettings,
    pub output: OutputSettings,
}

impl Settings {
    /// Overlay the values present in `config` on the defaults.
    pub fn from_config(config: &dyn ConfigPort) -> Result<Self, StockDataError> {
        let mut settings = Settings::default();

        if let Some(url) = config.get_string("provider", "base_url") {
            let url = url.trim().trim_end_matches('/').to_string();
            if !(url.starts_with("http://") || url.starts_with("https://")) {
                return Err(invalid("provider", "base_url", "must be an http(s) URL"));
            }
            settings.provider.base_url = url;
        }

        match config.get_uint("provider", "timeout_secs") {
            Ok(Some(0)) => return Err(invalid("provider", "timeout_secs", "must be > 0")),
            Ok(Some(secs)) => settings.provider.timeout = Duration::from_secs(secs),
            Ok(None) => {}
            Err(reason) => return Err(invalid("provider", "timeout_secs", &reason)),
        }

        if let Some(agent) = config.get_string("provider", "user_agent") {
            if agent.trim().is_empty() {
                return Err(invalid("provider", "user_agent", "must not be empty"));
            }
            settings.provider.user_agent = agent;
        }

        if let Some(delim) = config.get_string("output", "delimiter") {
            settings.output.delimiter = parse_delimiter(&delim)?;
        }

        Ok(settings)
    }
}

fn parse_delimiter(value: &str) -> Result<u8, StockDataError> {
    match value {
        "\\t" | "tab" => Ok(b'\t'),
        s if s.len() == 1 && s.is_ascii() => Ok(s.as_bytes()[0]),
        _ => Err(invalid(
            "output",
            "delimiter",
            "must be a single ASCII character or 'tab'",
        )),
    }
}

fn invalid(section: &str, key: &str, reason: &str) -> StockDataError {
    StockDataError::ConfigInvalid {
        section: section.into(),
        key: key.into(),
        reason: reason.into(),
    }
}
