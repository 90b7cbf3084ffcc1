//! JSON-file market data provider.
//!
//! Layout under the data directory:
//! - `instruments.json`: `[{"id": "600000", "name": "..."}, ...]`
//! - `prices/{id}.json`: `[{"date": "2024-01-02", "close": 10.1}, ...]`

use crate::config::AnalysisRange;
use crate::error::{ScanError, ScanResult};
use crate::models::prices::{Instrument, PricePoint};
use crate::services::market_data::{validate_prices, MarketDataProvider};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use std::path::{Component, Path, PathBuf};
use tracing::debug;

pub const INSTRUMENTS_FILE: &str = "instruments.json";
pub const PRICES_DIR: &str = "prices";

pub struct FileMarketDataProvider {
    root: PathBuf,
}

impl FileMarketDataProvider {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn prices_path(&self, instrument_id: &str) -> PathBuf {
        self.root.join(PRICES_DIR).join(format!("{}.json", instrument_id))
    }
}

/// Ids become file names, so an id must be a single plain path component.
/// Dotted codes such as `600000.SH` or `BRK.B` are fine.
pub fn is_file_safe_id(instrument_id: &str) -> bool {
    if instrument_id.contains(['/', '\\']) {
        return false;
    }
    let mut components = Path::new(instrument_id).components();
    matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    )
}

async fn read_json<T: DeserializeOwned>(path: &Path, subject: &str) -> ScanResult<T> {
    let raw = tokio::fs::read(path)
        .await
        .map_err(|e| ScanError::data_fetch(subject, format!("{}: {}", path.display(), e)))?;
    serde_json::from_slice(&raw)
        .map_err(|e| ScanError::data_fetch(subject, format!("{}: {}", path.display(), e)))
}

#[async_trait]
impl MarketDataProvider for FileMarketDataProvider {
    async fn list_instruments(&self) -> ScanResult<Vec<Instrument>> {
        let path = self.root.join(INSTRUMENTS_FILE);
        let instruments: Vec<Instrument> = read_json(&path, "instrument directory").await?;
        debug!(count = instruments.len(), path = %path.display(), "Loaded instrument directory");
        Ok(instruments)
    }

    async fn get_prices(
        &self,
        instrument_id: &str,
        range: &AnalysisRange,
    ) -> ScanResult<Vec<PricePoint>> {
        if !is_file_safe_id(instrument_id) {
            return Err(ScanError::data_fetch(instrument_id, "invalid instrument id"));
        }

        let prices: Vec<PricePoint> =
            read_json(&self.prices_path(instrument_id), instrument_id).await?;
        let prices: Vec<PricePoint> = prices
            .into_iter()
            .filter(|p| range.contains(p.date))
            .collect();
        validate_prices(instrument_id, &prices)?;
        Ok(prices)
    }
}
