//! Indicator computations over price series.

pub mod trend;

pub use trend::*;
