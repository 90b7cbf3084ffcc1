//! Market data sources.

pub mod file;
pub mod market_data;

pub use file::FileMarketDataProvider;
pub use market_data::{InMemoryMarketDataProvider, MarketDataProvider};
