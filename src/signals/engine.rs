//! Batch signal evaluation across an instrument universe.

use crate::config::WindowConfig;
use crate::error::{ScanError, ScanResult};
use crate::indicators::trend::SeriesBuilder;
use crate::models::prices::{Instrument, PricePoint};
use crate::models::series::DerivedSeries;
use crate::models::signal::{Signal, SignalKind};
use crate::signals::crossover::SignalDetector;
use tracing::debug;

/// An instrument paired with its derived series.
#[derive(Debug, Clone, PartialEq)]
pub struct InstrumentSeries {
    pub instrument: Instrument,
    pub series: DerivedSeries,
}

impl InstrumentSeries {
    pub fn new(instrument: Instrument, series: DerivedSeries) -> Self {
        Self { instrument, series }
    }

    /// Build the series for `prices` with the given windows.
    pub fn from_prices(instrument: Instrument, prices: &[PricePoint], windows: &WindowConfig) -> Self {
        Self::new(instrument, SeriesBuilder::build_with(prices, windows))
    }
}

/// Buy and sell lists of one batch plus its skip counts.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BatchSignals {
    pub buy: Vec<Signal>,
    pub sell: Vec<Signal>,
    pub evaluated: usize,
    pub insufficient_history: usize,
}

pub struct SignalEngine {
    windows: WindowConfig,
}

impl SignalEngine {
    /// Fails with `InvalidConfiguration` before any instrument is touched.
    pub fn new(windows: WindowConfig) -> ScanResult<Self> {
        windows.validate()?;
        Ok(Self { windows })
    }

    pub fn windows(&self) -> &WindowConfig {
        &self.windows
    }

    /// Minimum number of bars for an instrument to be evaluated at all.
    pub fn min_bars(&self) -> usize {
        self.windows.long
    }

    pub fn check_history(&self, entry: &InstrumentSeries) -> ScanResult<()> {
        if entry.series.len() < self.min_bars() {
            return Err(ScanError::InsufficientHistory {
                instrument: entry.instrument.id.clone(),
                available: entry.series.len(),
                required: self.min_bars(),
            });
        }
        Ok(())
    }

    /// Partition `entries` into buy and sell signals.
    ///
    /// Instruments with fewer than `long` bars are skipped. Both lists keep
    /// the order of `entries`.
    pub fn evaluate_batch(&self, entries: &[InstrumentSeries]) -> (Vec<Signal>, Vec<Signal>) {
        let batch = self.evaluate_batch_counted(entries);
        (batch.buy, batch.sell)
    }

    /// Same as `evaluate_batch`, also reporting how many entries were
    /// evaluated and how many were skipped for short history.
    pub fn evaluate_batch_counted(&self, entries: &[InstrumentSeries]) -> BatchSignals {
        let mut batch = BatchSignals::default();

        for entry in entries {
            if let Err(e) = self.check_history(entry) {
                debug!(instrument = %entry.instrument.id, "Skipping: {}", e);
                batch.insufficient_history += 1;
                continue;
            }
            batch.evaluated += 1;

            let kind = SignalDetector::evaluate(&entry.series);
            let signal = || Signal::new(&entry.instrument.id, &entry.instrument.name, kind);
            match kind {
                SignalKind::Buy => batch.buy.push(signal()),
                SignalKind::Sell => batch.sell.push(signal()),
                SignalKind::None => {}
            }
        }

        batch
    }
}
