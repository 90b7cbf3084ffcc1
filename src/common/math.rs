//! Rolling-window math over closing prices.

/// Mean of the last `period` values, or `None` when there are fewer values.
pub fn sma(values: &[f64], period: usize) -> Option<f64> {
    if period == 0 || values.len() < period {
        return None;
    }
    let window = &values[values.len() - period..];
    Some(window.iter().sum::<f64>() / period as f64)
}

/// Rolling mean aligned with `values`.
///
/// Index `i` holds the mean of `values[i + 1 - period ..= i]`; the first
/// `period - 1` entries are `None`. Every window is summed directly so no
/// floating-point drift accumulates along long series.
pub fn rolling_sma(values: &[f64], period: usize) -> Vec<Option<f64>> {
    if period == 0 {
        return vec![None; values.len()];
    }

    (0..values.len())
        .map(|i| {
            if i + 1 < period {
                None
            } else {
                sma(&values[..=i], period)
            }
        })
        .collect()
}

/// First difference of an optional series: `out[i] = s[i] - s[i - 1]` when
/// both sides are defined.
pub fn first_difference(series: &[Option<f64>]) -> Vec<Option<f64>> {
    let mut out = Vec::with_capacity(series.len());
    out.push(None);
    for pair in series.windows(2) {
        out.push(match (pair[0], pair[1]) {
            (Some(prev), Some(curr)) => Some(curr - prev),
            _ => None,
        });
    }
    out.truncate(series.len());
    out
}
