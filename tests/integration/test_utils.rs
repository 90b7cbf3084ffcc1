#![allow(dead_code)]

use async_trait::async_trait;
use chrono::{Days, NaiveDate};
use smacross::config::{AnalysisRange, ScanConfig, WindowConfig};
use smacross::models::{Instrument, PricePoint};
use smacross::services::{InMemoryMarketDataProvider, MarketDataProvider};
use smacross::{ScanError, ScanResult};
use std::time::Duration;

pub const BUY_CLOSES: [f64; 6] = [10.0, 10.0, 10.0, 9.0, 9.0, 12.0];
pub const SELL_CLOSES: [f64; 6] = [10.0, 10.0, 10.0, 11.0, 11.0, 8.0];
pub const FLAT_CLOSES: [f64; 6] = [10.0; 6];

pub fn start_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()
}

pub fn prices(closes: &[f64]) -> Vec<PricePoint> {
    closes
        .iter()
        .enumerate()
        .map(|(i, &close)| PricePoint::new(start_date() + Days::new(i as u64), close))
        .collect()
}

/// Short window 2, long window 4, range covering the fixture dates.
pub fn small_config() -> ScanConfig {
    let end = start_date() + Days::new(30);
    let mut config = ScanConfig::with_end_date(end).unwrap();
    config.windows = WindowConfig::new(2, 4).unwrap();
    config.range = AnalysisRange::new(start_date(), end).unwrap();
    config.concurrency = 4;
    config
}

/// A universe exercising every outcome a scan can produce.
pub fn mixed_provider() -> InMemoryMarketDataProvider {
    InMemoryMarketDataProvider::new()
        .with_instrument(Instrument::new("600000", "Alpha Bank"), prices(&BUY_CLOSES))
        .with_unpriced_instrument(Instrument::new("600001", "Delisted Co"))
        .with_instrument(Instrument::new("600002", "Beta Steel"), prices(&SELL_CLOSES))
        .with_instrument(Instrument::new("600003", "Young Listing"), prices(&BUY_CLOSES[3..]))
        .with_instrument(Instrument::new("600004", "Flat Utility"), prices(&FLAT_CLOSES))
        .with_instrument(Instrument::new("600005", "Gamma Energy"), prices(&BUY_CLOSES))
}

/// Delays each fetch so that earlier instruments finish last.
pub struct DelayedProvider {
    pub inner: InMemoryMarketDataProvider,
    pub universe: Vec<Instrument>,
}

impl DelayedProvider {
    pub async fn new(inner: InMemoryMarketDataProvider) -> Self {
        let universe = inner.list_instruments().await.unwrap();
        Self { inner, universe }
    }
}

#[async_trait]
impl MarketDataProvider for DelayedProvider {
    async fn list_instruments(&self) -> ScanResult<Vec<Instrument>> {
        Ok(self.universe.clone())
    }

    async fn get_prices(
        &self,
        instrument_id: &str,
        range: &AnalysisRange,
    ) -> ScanResult<Vec<PricePoint>> {
        let position = self
            .universe
            .iter()
            .position(|i| i.id == instrument_id)
            .unwrap_or(0);
        let delay = (self.universe.len() - position) as u64 * 5;
        tokio::time::sleep(Duration::from_millis(delay)).await;
        self.inner.get_prices(instrument_id, range).await
    }
}

/// Provider whose directory cannot be loaded.
pub struct BrokenDirectoryProvider;

#[async_trait]
impl MarketDataProvider for BrokenDirectoryProvider {
    async fn list_instruments(&self) -> ScanResult<Vec<Instrument>> {
        Err(ScanError::data_fetch("instrument directory", "connection refused"))
    }

    async fn get_prices(
        &self,
        instrument_id: &str,
        _range: &AnalysisRange,
    ) -> ScanResult<Vec<PricePoint>> {
        Err(ScanError::data_fetch(instrument_id, "connection refused"))
    }
}
