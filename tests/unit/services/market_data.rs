//! Unit tests for market data providers

use crate::fixtures::{base_date, create_test_prices};
use chrono::Days;
use smacross::config::AnalysisRange;
use smacross::models::{Instrument, PricePoint};
use smacross::services::market_data::validate_prices;
use smacross::services::{InMemoryMarketDataProvider, MarketDataProvider};
use smacross::ScanError;

fn full_range() -> AnalysisRange {
    AnalysisRange::new(base_date(), base_date() + Days::new(365)).unwrap()
}

#[test]
fn test_validate_prices_accepts_ascending_positive() {
    let prices = create_test_prices(&[10.0, 10.5, 9.9]);
    assert!(validate_prices("600000", &prices).is_ok());
}

#[test]
fn test_validate_prices_rejects_duplicate_dates() {
    let mut prices = create_test_prices(&[10.0, 10.5]);
    prices[1].date = prices[0].date;
    assert!(matches!(
        validate_prices("600000", &prices),
        Err(ScanError::DataFetch { .. })
    ));
}

#[test]
fn test_validate_prices_rejects_non_positive_close() {
    let prices = create_test_prices(&[10.0, 0.0]);
    assert!(validate_prices("600000", &prices).is_err());
    let prices = create_test_prices(&[10.0, f64::NAN]);
    assert!(validate_prices("600000", &prices).is_err());
}

#[test]
fn test_in_memory_lists_in_insertion_order() {
    let provider = InMemoryMarketDataProvider::new()
        .with_instrument(Instrument::new("B", "Beta"), create_test_prices(&[1.0]))
        .with_unpriced_instrument(Instrument::new("A", "Alpha"));

    let instruments = tokio_test::block_on(provider.list_instruments()).unwrap();
    let ids: Vec<&str> = instruments.iter().map(|i| i.id.as_str()).collect();
    assert_eq!(ids, vec!["B", "A"]);
}

#[test]
fn test_in_memory_unpriced_instrument_fails_fetch() {
    let provider =
        InMemoryMarketDataProvider::new().with_unpriced_instrument(Instrument::new("A", "Alpha"));
    let result = tokio_test::block_on(provider.get_prices("A", &full_range()));
    assert!(matches!(result, Err(ScanError::DataFetch { .. })));
}

#[test]
fn test_in_memory_filters_to_range() {
    let prices = create_test_prices(&[1.0, 2.0, 3.0, 4.0]);
    let provider = InMemoryMarketDataProvider::new()
        .with_instrument(Instrument::new("A", "Alpha"), prices.clone());
    let range = AnalysisRange::new(prices[1].date, prices[2].date).unwrap();

    let fetched: Vec<PricePoint> = tokio_test::block_on(provider.get_prices("A", &range)).unwrap();
    assert_eq!(fetched, prices[1..3].to_vec());
}

#[test]
fn test_in_memory_validates_only_bars_in_range() {
    let mut prices = create_test_prices(&[1.0, 2.0, 3.0, 4.0]);
    prices[0].close = -5.0;
    let provider = InMemoryMarketDataProvider::new()
        .with_instrument(Instrument::new("A", "Alpha"), prices.clone());

    let later = AnalysisRange::new(prices[1].date, prices[3].date).unwrap();
    let fetched = tokio_test::block_on(provider.get_prices("A", &later)).unwrap();
    assert_eq!(fetched.len(), 3);

    let result = tokio_test::block_on(provider.get_prices("A", &full_range()));
    assert!(matches!(result, Err(ScanError::DataFetch { .. })));
}
