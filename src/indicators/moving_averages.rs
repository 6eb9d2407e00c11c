//! Simple Moving Average (SMA) over closing prices

/// Calculates the Simple Moving Average of the most recent `period` closes.
///
/// SMA = (C1 + C2 + ... + Cn) / n
///
/// Returns `None` if there are not enough closes for the given period.
pub fn sma(closes: &[f64], period: usize) -> Option<f64> {
    if period == 0 || closes.len() < period {
        return None;
    }

    let window = &closes[closes.len() - period..];
    Some(window.iter().sum::<f64>() / period as f64)
}

/// Calculates the SMA for every index of `closes`.
///
/// The result is aligned with the input: index `i` holds the mean of
/// `closes[i + 1 - period..=i]`, or `None` while `i < period - 1`.
pub fn sma_series(closes: &[f64], period: usize) -> Vec<Option<f64>> {
    (0..closes.len())
        .map(|i| sma(&closes[..=i], period))
        .collect()
}
