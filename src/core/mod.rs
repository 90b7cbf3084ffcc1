//! Core application primitives (scan orchestration)

pub mod runtime;

pub use runtime::*;
