use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A price bar extended with the moving averages and their slopes.
///
/// Indicator columns are `None` until their window has filled.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DerivedBar {
    pub date: NaiveDate,
    pub close: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sma_short: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sma_long: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slope_short: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slope_long: Option<f64>,
}

impl DerivedBar {
    /// All four indicator columns, if every one is defined.
    pub fn indicators(&self) -> Option<(f64, f64, f64, f64)> {
        Some((
            self.sma_short?,
            self.sma_long?,
            self.slope_short?,
            self.slope_long?,
        ))
    }

    pub fn is_complete(&self) -> bool {
        self.indicators().is_some()
    }
}

/// Bars index-aligned with the source price sequence.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DerivedSeries {
    pub bars: Vec<DerivedBar>,
}

impl DerivedSeries {
    pub fn new(bars: Vec<DerivedBar>) -> Self {
        Self { bars }
    }

    pub fn len(&self) -> usize {
        self.bars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    pub fn latest(&self) -> Option<&DerivedBar> {
        self.bars.last()
    }

    /// The last two bars as `(prev, latest)`.
    pub fn tail_pair(&self) -> Option<(&DerivedBar, &DerivedBar)> {
        match self.bars.as_slice() {
            [.., prev, latest] => Some((prev, latest)),
            _ => None,
        }
    }
}
