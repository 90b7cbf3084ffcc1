//! Scan runtime: fetch, build and evaluate every instrument in the universe

use crate::config::ScanConfig;
use crate::error::{ScanError, ScanResult};
use crate::models::prices::Instrument;
use crate::models::signal::{ScanReport, ScanStats};
use crate::services::market_data::MarketDataProvider;
use crate::signals::engine::{BatchSignals, InstrumentSeries, SignalEngine};
use futures_util::stream::{self, StreamExt};
use std::time::Instant;
use tracing::{debug, info, warn};

/// Result of the per-instrument stage. Failures are values so one bad
/// instrument never aborts the batch.
#[derive(Debug)]
pub enum InstrumentOutcome {
    Ready(InstrumentSeries),
    Failed(ScanError),
}

pub struct ScanRuntime {
    config: ScanConfig,
    engine: SignalEngine,
}

impl ScanRuntime {
    /// Validates the configuration up front; a bad config is fatal.
    pub fn new(config: ScanConfig) -> ScanResult<Self> {
        config.validate()?;
        let engine = SignalEngine::new(config.windows)?;
        Ok(Self { config, engine })
    }

    /// Run one scan against `provider`.
    ///
    /// Only a failure to load the instrument directory is returned as an
    /// error; per-instrument failures are logged and counted.
    pub async fn run(&self, provider: &dyn MarketDataProvider) -> ScanResult<ScanReport> {
        let started = Instant::now();
        let instruments = provider.list_instruments().await?;

        info!(
            universe = instruments.len(),
            short = self.config.windows.short,
            long = self.config.windows.long,
            start = %self.config.range.start,
            end = %self.config.range.end,
            concurrency = self.config.concurrency,
            "Starting scan of {} instruments",
            instruments.len()
        );

        let mut outcomes: Vec<(usize, InstrumentOutcome)> =
            stream::iter(instruments.into_iter().enumerate())
                .map(|(index, instrument)| async move {
                    (index, self.process_instrument(provider, instrument).await)
                })
                .buffer_unordered(self.config.concurrency)
                .collect()
                .await;

        // Completion order is arbitrary; restore universe order.
        outcomes.sort_by_key(|(index, _)| *index);

        let universe = outcomes.len();
        let mut fetch_failures = 0;
        let mut ready = Vec::with_capacity(universe);
        for (_, outcome) in outcomes {
            match outcome {
                InstrumentOutcome::Ready(entry) => ready.push(entry),
                InstrumentOutcome::Failed(e) => {
                    warn!(error = %e, "Skipping instrument");
                    fetch_failures += 1;
                }
            }
        }

        let BatchSignals {
            buy,
            sell,
            evaluated,
            insufficient_history,
        } = self.engine.evaluate_batch_counted(&ready);
        let stats = ScanStats {
            universe,
            evaluated,
            fetch_failures,
            insufficient_history,
        };

        info!(
            evaluated = stats.evaluated,
            fetch_failures = stats.fetch_failures,
            insufficient_history = stats.insufficient_history,
            buy = buy.len(),
            sell = sell.len(),
            elapsed = ?started.elapsed(),
            "Scan complete"
        );

        Ok(ScanReport { buy, sell, stats })
    }

    async fn process_instrument(
        &self,
        provider: &dyn MarketDataProvider,
        instrument: Instrument,
    ) -> InstrumentOutcome {
        match provider.get_prices(&instrument.id, &self.config.range).await {
            Ok(prices) => {
                debug!(instrument = %instrument.id, bars = prices.len(), "Fetched prices");
                InstrumentOutcome::Ready(InstrumentSeries::from_prices(
                    instrument,
                    &prices,
                    &self.config.windows,
                ))
            }
            Err(e) => InstrumentOutcome::Failed(e),
        }
    }
}
