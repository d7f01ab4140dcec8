//! Simple Moving Average.
//!
//! SMA(n)[i] = mean of the trailing n values.
//! Warmup: first (n-1) outputs are None.

use crate::domain::indicator::rolling::RollingWindow;

pub fn calculate_sma(values: &[f64], period: usize) -> Vec<Option<f64>> {
    let mut window = RollingWindow::new(period);
    values
        .iter()
        .map(|&v| {
            window.push(v);
            window.mean()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn sma_warmup() {
        let out = calculate_sma(&[10.0, 20.0, 30.0, 40.0, 50.0], 3);
        assert_eq!(out[0], None);
        assert_eq!(out[1], None);
        assert!(out[2].is_some());
        assert!(out[3].is_some());
        assert!(out[4].is_some());
    }

    #[test]
    fn sma_rolling_means() {
        let out = calculate_sma(&[10.0, 20.0, 30.0, 40.0, 50.0], 3);
        assert_relative_eq!(out[2].unwrap(), 20.0);
        assert_relative_eq!(out[3].unwrap(), 30.0);
        assert_relative_eq!(out[4].unwrap(), 40.0);
    }

    #[test]
    fn sma_period_one_tracks_input() {
        let out = calculate_sma(&[10.0, 20.0, 30.0], 1);
        assert_relative_eq!(out[0].unwrap(), 10.0);
        assert_relative_eq!(out[1].unwrap(), 20.0);
        assert_relative_eq!(out[2].unwrap(), 30.0);
    }

    #[test]
    fn sma_short_series_stays_undefined() {
        let out = calculate_sma(&[10.0, 20.0], 5);
        assert_eq!(out, vec![None, None]);
    }

    #[test]
    fn sma_empty_input() {
        assert!(calculate_sma(&[], 3).is_empty());
    }

    #[test]
    fn sma_zero_period() {
        let out = calculate_sma(&[10.0, 20.0], 0);
        assert_eq!(out, vec![None, None]);
    }
}
