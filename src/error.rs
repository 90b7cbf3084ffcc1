use thiserror::Error;

/// Errors raised while configuring or running a scan.
///
/// Only `InvalidConfiguration` is fatal to a run. The per-instrument variants
/// are captured by the runtime and turned into skips.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ScanError {
    #[error("Failed to fetch data for {instrument}: {reason}")]
    DataFetch { instrument: String, reason: String },

    #[error("Insufficient history for {instrument}: {available} < {required} bars")]
    InsufficientHistory {
        instrument: String,
        available: usize,
        required: usize,
    },

    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),
}

impl ScanError {
    pub fn data_fetch(instrument: impl Into<String>, reason: impl std::fmt::Display) -> Self {
        Self::DataFetch {
            instrument: instrument.into(),
            reason: reason.to_string(),
        }
    }

    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfiguration(message.into())
    }

    /// True for errors that must abort the whole run.
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::InvalidConfiguration(_))
    }
}

pub type ScanResult<T> = std::result::Result<T, ScanError>;
