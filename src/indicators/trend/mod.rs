//! Trend indicators: SMA with slope

pub mod sma;

pub use sma::*;
