//! Bollinger Bands.
//!
//! Middle = SMA(period) of close; upper/lower = middle +/- mult * stddev,
//! where stddev is the population standard deviation over the same window
//! (divides by n, not n-1).
//!
//! Default parameters: period=20, mult=2.0.
//! Warmup: first (period-1) bars are None.

use crate::domain::indicator::rolling::RollingWindow;

pub const DEFAULT_PERIOD: usize = 20;
pub const DEFAULT_MULT: f64 = 2.0;

#[derive(Debug, Clone)]
pub struct BollingerBands {
    pub middle: Vec<Option<f64>>,
    pub stddev: Vec<Option<f64>>,
    pub upper: Vec<Option<f64>>,
    pub lower: Vec<Option<f64>>,
}

pub fn calculate_bollinger(closes: &[f64], period: usize, mult: f64) -> BollingerBands {
    let mut window = RollingWindow::new(period);
    let mut bands = BollingerBands {
        middle: Vec::with_capacity(closes.len()),
        stddev: Vec::with_capacity(closes.len()),
        upper: Vec::with_capacity(closes.len()),
        lower: Vec::with_capacity(closes.len()),
    };

    for &close in closes {
        window.push(close);
        let middle = window.mean();
        let stddev = window.stddev();
        let band = match (middle, stddev) {
            (Some(m), Some(s)) => (Some(m + mult * s), Some(m - mult * s)),
            _ => (None, None),
        };
        bands.middle.push(middle);
        bands.stddev.push(stddev);
        bands.upper.push(band.0);
        bands.lower.push(band.1);
    }

    bands
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn bollinger_warmup() {
        let closes = [10.0, 20.0, 30.0, 40.0];
        let bands = calculate_bollinger(&closes, 3, 2.0);

        assert_eq!(bands.middle[0], None);
        assert_eq!(bands.upper[1], None);
        assert!(bands.middle[2].is_some());
        assert!(bands.upper[3].is_some());
        assert!(bands.lower[3].is_some());
    }

    #[test]
    fn bollinger_hand_check() {
        let bands = calculate_bollinger(&[10.0, 20.0, 30.0], 3, 2.0);

        let middle: f64 = 20.0;
        let variance = ((10.0 - middle).powi(2) + (20.0 - middle).powi(2)
            + (30.0 - middle).powi(2))
            / 3.0;
        let stddev = variance.sqrt();

        assert_relative_eq!(bands.middle[2].unwrap(), middle, epsilon = 1e-10);
        assert_relative_eq!(bands.stddev[2].unwrap(), stddev, epsilon = 1e-10);
        assert_relative_eq!(
            bands.upper[2].unwrap(),
            middle + 2.0 * stddev,
            epsilon = 1e-10
        );
        assert_relative_eq!(
            bands.lower[2].unwrap(),
            middle - 2.0 * stddev,
            epsilon = 1e-10
        );
    }

    #[test]
    fn bollinger_constant_closes_collapse_to_middle() {
        let bands = calculate_bollinger(&[100.0; 5], 3, 2.0);
        for i in 2..5 {
            assert_relative_eq!(bands.middle[i].unwrap(), 100.0);
            assert_relative_eq!(bands.stddev[i].unwrap(), 0.0, epsilon = 1e-10);
            assert_relative_eq!(bands.upper[i].unwrap(), 100.0, epsilon = 1e-9);
            assert_relative_eq!(bands.lower[i].unwrap(), 100.0, epsilon = 1e-9);
        }
    }

    #[test]
    fn bollinger_short_series_stays_undefined() {
        let bands = calculate_bollinger(&[10.0, 20.0], 20, 2.0);
        assert_eq!(bands.middle, vec![None, None]);
        assert_eq!(bands.upper, vec![None, None]);
    }

    #[test]
    fn bollinger_empty_input() {
        let bands = calculate_bollinger(&[], DEFAULT_PERIOD, DEFAULT_MULT);
        assert!(bands.middle.is_empty());
        assert!(bands.stddev.is_empty());
    }
}
