//! Two-bar SMA crossover classification.

use crate::models::series::{DerivedBar, DerivedSeries};
use crate::models::signal::SignalKind;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CrossoverType {
    Bullish,
    Bearish,
    None,
}

/// Direction in which the short SMA crossed the long SMA between `prev` and
/// `latest`. A tie on the prior bar counts as not yet crossed.
pub fn detect_crossover(prev: (f64, f64), latest: (f64, f64)) -> CrossoverType {
    let (prev_short, prev_long) = prev;
    let (latest_short, latest_long) = latest;

    if prev_short <= prev_long && latest_short > latest_long {
        CrossoverType::Bullish
    } else if prev_short >= prev_long && latest_short < latest_long {
        CrossoverType::Bearish
    } else {
        CrossoverType::None
    }
}

/// Stateless classifier over the last two bars of a series.
pub struct SignalDetector;

impl SignalDetector {
    /// Classify the latest bar.
    ///
    /// BUY needs a bullish crossover, both slopes positive and the close above
    /// both averages; SELL is the mirror image. Anything else, including a
    /// series whose last two bars are not fully defined, is NONE.
    pub fn evaluate(series: &DerivedSeries) -> SignalKind {
        match series.tail_pair() {
            Some((prev, latest)) => Self::classify(prev, latest),
            None => SignalKind::None,
        }
    }

    fn classify(prev: &DerivedBar, latest: &DerivedBar) -> SignalKind {
        let (Some(prev_ind), Some(latest_ind)) = (prev.indicators(), latest.indicators()) else {
            return SignalKind::None;
        };
        let (prev_short, prev_long, _, _) = prev_ind;
        let (sma_short, sma_long, slope_short, slope_long) = latest_ind;
        let close = latest.close;

        match detect_crossover((prev_short, prev_long), (sma_short, sma_long)) {
            CrossoverType::Bullish
                if slope_short > 0.0
                    && slope_long > 0.0
                    && close > sma_short
                    && close > sma_long =>
            {
                SignalKind::Buy
            }
            CrossoverType::Bearish
                if slope_short < 0.0
                    && slope_long < 0.0
                    && close < sma_short
                    && close < sma_long =>
            {
                SignalKind::Sell
            }
            _ => SignalKind::None,
        }
    }
}
