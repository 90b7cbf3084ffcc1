use serde::{Deserialize, Serialize};
use std::fmt;

/// Classification of an instrument's latest bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SignalKind {
    Buy,
    Sell,
    None,
}

impl fmt::Display for SignalKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            SignalKind::Buy => "BUY",
            SignalKind::Sell => "SELL",
            SignalKind::None => "NONE",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Signal {
    pub instrument_id: String,
    pub instrument_name: String,
    pub kind: SignalKind,
}

impl Signal {
    pub fn new(
        instrument_id: impl Into<String>,
        instrument_name: impl Into<String>,
        kind: SignalKind,
    ) -> Self {
        Self {
            instrument_id: instrument_id.into(),
            instrument_name: instrument_name.into(),
            kind,
        }
    }
}

impl fmt::Display for Signal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.instrument_id, self.instrument_name)
    }
}

/// Per-run counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ScanStats {
    pub universe: usize,
    pub evaluated: usize,
    pub fetch_failures: usize,
    pub insufficient_history: usize,
}

/// Output of a scan run: buy and sell lists in universe order.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ScanReport {
    pub buy: Vec<Signal>,
    pub sell: Vec<Signal>,
    pub stats: ScanStats,
}

impl fmt::Display for ScanReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Buy signals:")?;
        for signal in &self.buy {
            writeln!(f, "{}", signal)?;
        }
        writeln!(f)?;
        writeln!(f, "Sell signals:")?;
        for signal in &self.sell {
            writeln!(f, "{}", signal)?;
        }
        Ok(())
    }
}
