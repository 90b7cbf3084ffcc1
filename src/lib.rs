//! SMA crossover scanner.
//!
//! Builds short/long simple moving averages over each instrument's closing
//! prices and flags the latest bar as a buy or sell signal when the averages
//! cross with confirming slope and price.

pub mod common;
pub mod config;
pub mod core;
pub mod error;
pub mod indicators;
pub mod logging;
pub mod models;
pub mod services;
pub mod signals;

pub use error::{ScanError, ScanResult};
