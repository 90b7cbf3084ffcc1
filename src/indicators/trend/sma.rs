//! SMA (Simple Moving Average) series builder

use crate::common::math;
use crate::config::WindowConfig;
use crate::models::prices::PricePoint;
use crate::models::series::{DerivedBar, DerivedSeries};

/// Builds the derived series consumed by the signal detector.
pub struct SeriesBuilder;

impl SeriesBuilder {
    /// Compute short/long SMA and slope columns for `prices`.
    ///
    /// Never fails on short input: columns whose window has not filled are
    /// left as `None`. Windows are positional over the supplied bars, so a
    /// gap in trading days just shifts window membership.
    pub fn build(prices: &[PricePoint], short_window: usize, long_window: usize) -> DerivedSeries {
        let closes: Vec<f64> = prices.iter().map(|p| p.close).collect();

        let sma_short = math::rolling_sma(&closes, short_window);
        let sma_long = math::rolling_sma(&closes, long_window);
        let slope_short = math::first_difference(&sma_short);
        let slope_long = math::first_difference(&sma_long);

        let bars = prices
            .iter()
            .enumerate()
            .map(|(i, point)| DerivedBar {
                date: point.date,
                close: point.close,
                sma_short: sma_short[i],
                sma_long: sma_long[i],
                slope_short: slope_short[i],
                slope_long: slope_long[i],
            })
            .collect();

        DerivedSeries::new(bars)
    }

    pub fn build_with(prices: &[PricePoint], windows: &WindowConfig) -> DerivedSeries {
        Self::build(prices, windows.short, windows.long)
    }
}
