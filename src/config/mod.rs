//! Environment-driven configuration.
//!
//! Values come from process environment variables, optionally seeded from a
//! `.env` file by the binary via `dotenvy`.

use crate::error::{ScanError, ScanResult};
use chrono::{Days, Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;
use std::str::FromStr;

pub const DEFAULT_SHORT_WINDOW: usize = 50;
pub const DEFAULT_LONG_WINDOW: usize = 150;
pub const DEFAULT_LOOKBACK_DAYS: i64 = 365;
pub const DEFAULT_CONCURRENCY: usize = 8;
pub const DEFAULT_DATA_DIR: &str = "./data";

/// Get the deployment environment (`sandbox` unless `ENVIRONMENT` is set).
pub fn get_environment() -> String {
    env::var("ENVIRONMENT").unwrap_or_else(|_| "sandbox".to_string())
}

/// SMA window lengths, in bars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowConfig {
    pub short: usize,
    pub long: usize,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            short: DEFAULT_SHORT_WINDOW,
            long: DEFAULT_LONG_WINDOW,
        }
    }
}

impl WindowConfig {
    pub fn new(short: usize, long: usize) -> ScanResult<Self> {
        let windows = Self { short, long };
        windows.validate()?;
        Ok(windows)
    }

    pub fn validate(&self) -> ScanResult<()> {
        if self.short == 0 || self.long == 0 {
            return Err(ScanError::invalid_config(format!(
                "window lengths must be positive, got short={} long={}",
                self.short, self.long
            )));
        }
        if self.short >= self.long {
            return Err(ScanError::invalid_config(format!(
                "short window must be less than long window, got short={} long={}",
                self.short, self.long
            )));
        }
        Ok(())
    }
}

/// Inclusive calendar range of bars requested from the provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl AnalysisRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> ScanResult<Self> {
        if start > end {
            return Err(ScanError::invalid_config(format!(
                "analysis range start {} is after end {}",
                start, end
            )));
        }
        Ok(Self { start, end })
    }

    /// Range ending at `end` and starting `days` calendar days earlier.
    pub fn trailing(end: NaiveDate, days: i64) -> ScanResult<Self> {
        if days < 0 {
            return Err(ScanError::invalid_config(format!(
                "lookback days must be non-negative, got {}",
                days
            )));
        }
        let start = end.checked_sub_days(Days::new(days as u64)).ok_or_else(|| {
            ScanError::invalid_config(format!("lookback of {} days is out of range", days))
        })?;
        Self::new(start, end)
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for ReportFormat {
    type Err = ScanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(ScanError::invalid_config(format!(
                "unknown REPORT_FORMAT '{}', expected text or json",
                other
            ))),
        }
    }
}

/// Everything a scan run needs from its calling context.
#[derive(Debug, Clone, PartialEq)]
pub struct ScanConfig {
    pub windows: WindowConfig,
    pub range: AnalysisRange,
    pub concurrency: usize,
    pub data_dir: PathBuf,
    pub report_format: ReportFormat,
}

impl ScanConfig {
    /// Defaults with a one-year range ending at `today`.
    pub fn with_end_date(today: NaiveDate) -> ScanResult<Self> {
        Ok(Self {
            windows: WindowConfig::default(),
            range: AnalysisRange::trailing(today, DEFAULT_LOOKBACK_DAYS)?,
            concurrency: DEFAULT_CONCURRENCY,
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            report_format: ReportFormat::default(),
        })
    }

    /// Read configuration from the environment. Unset variables fall back to
    /// defaults; set but unparseable ones are configuration errors.
    pub fn from_env() -> ScanResult<Self> {
        let today = Local::now().date_naive();
        let lookback: i64 = parse_env("LOOKBACK_DAYS", DEFAULT_LOOKBACK_DAYS)?;

        let config = Self {
            windows: WindowConfig {
                short: parse_env("SHORT_WINDOW", DEFAULT_SHORT_WINDOW)?,
                long: parse_env("LONG_WINDOW", DEFAULT_LONG_WINDOW)?,
            },
            range: AnalysisRange::trailing(today, lookback)?,
            concurrency: parse_env("SCAN_CONCURRENCY", DEFAULT_CONCURRENCY)?,
            data_dir: env::var("DATA_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(DEFAULT_DATA_DIR)),
            report_format: match env::var("REPORT_FORMAT") {
                Ok(value) => value.parse()?,
                Err(_) => ReportFormat::default(),
            },
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> ScanResult<()> {
        self.windows.validate()?;
        if self.concurrency == 0 {
            return Err(ScanError::invalid_config("concurrency must be at least 1"));
        }
        Ok(())
    }
}

fn parse_env<T: FromStr>(key: &str, default: T) -> ScanResult<T> {
    match env::var(key) {
        Ok(raw) => raw.trim().parse().map_err(|_| {
            ScanError::invalid_config(format!("{} has unparseable value '{}'", key, raw))
        }),
        Err(_) => Ok(default),
    }
}
