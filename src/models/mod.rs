//! Shared data models spanning the scanner layers.

pub mod prices;
pub mod series;
pub mod signal;

pub use prices::{Instrument, PricePoint};
pub use series::{DerivedBar, DerivedSeries};
pub use signal::{ScanReport, ScanStats, Signal, SignalKind};
