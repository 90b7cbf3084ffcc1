//! Market data provider interface.

use crate::config::AnalysisRange;
use crate::error::{ScanError, ScanResult};
use crate::models::prices::{Instrument, PricePoint};
use async_trait::async_trait;
use std::collections::HashMap;

#[async_trait]
pub trait MarketDataProvider: Send + Sync {
    /// Directory of the instrument universe, in a stable order.
    async fn list_instruments(&self) -> ScanResult<Vec<Instrument>>;

    /// Daily closes for `instrument_id` within `range`, ascending by date.
    async fn get_prices(
        &self,
        instrument_id: &str,
        range: &AnalysisRange,
    ) -> ScanResult<Vec<PricePoint>>;
}

/// Reject series that are out of order, repeat a date or carry a
/// non-positive close. Providers run this on the in-range bars only.
pub fn validate_prices(instrument_id: &str, prices: &[PricePoint]) -> ScanResult<()> {
    if let Some(bad) = prices.iter().find(|p| !(p.close.is_finite() && p.close > 0.0)) {
        return Err(ScanError::data_fetch(
            instrument_id,
            format!("non-positive close {} on {}", bad.close, bad.date),
        ));
    }
    if let Some(pair) = prices.windows(2).find(|w| w[0].date >= w[1].date) {
        return Err(ScanError::data_fetch(
            instrument_id,
            format!("dates not strictly ascending at {} -> {}", pair[0].date, pair[1].date),
        ));
    }
    Ok(())
}

/// Provider over preloaded data. Instruments listed without prices fail
/// their fetch, which is how a delisted symbol looks to the scanner.
#[derive(Debug, Clone, Default)]
pub struct InMemoryMarketDataProvider {
    instruments: Vec<Instrument>,
    prices: HashMap<String, Vec<PricePoint>>,
}

impl InMemoryMarketDataProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_instrument(mut self, instrument: Instrument, prices: Vec<PricePoint>) -> Self {
        self.prices.insert(instrument.id.clone(), prices);
        self.instruments.push(instrument);
        self
    }

    /// List an instrument that has no price data.
    pub fn with_unpriced_instrument(mut self, instrument: Instrument) -> Self {
        self.instruments.push(instrument);
        self
    }
}

#[async_trait]
impl MarketDataProvider for InMemoryMarketDataProvider {
    async fn list_instruments(&self) -> ScanResult<Vec<Instrument>> {
        Ok(self.instruments.clone())
    }

    async fn get_prices(
        &self,
        instrument_id: &str,
        range: &AnalysisRange,
    ) -> ScanResult<Vec<PricePoint>> {
        let prices = self
            .prices
            .get(instrument_id)
            .ok_or_else(|| ScanError::data_fetch(instrument_id, "no price data"))?;
        let prices: Vec<PricePoint> = prices
            .iter()
            .filter(|p| range.contains(p.date))
            .copied()
            .collect();
        validate_prices(instrument_id, &prices)?;
        Ok(prices)
    }
}
