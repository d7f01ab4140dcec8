//! MACD (Moving Average Convergence/Divergence).
//!
//! MACD line = EMA(fast) - EMA(slow); signal = EMA(signal_span) of the
//! MACD line, seeded with its first value.
//! With the first-value EMA seed both lines are defined from the first bar
//! whenever the close series has at least two bars.
//!
//! Default parameters: fast=12, slow=26, signal=9.

use crate::domain::indicator::ema::calculate_ema;

pub const DEFAULT_FAST: usize = 12;
pub const DEFAULT_SLOW: usize = 26;
pub const DEFAULT_SIGNAL: usize = 9;

#[derive(Debug, Clone)]
pub struct MacdSeries {
    pub macd: Vec<Option<f64>>,
    pub signal: Vec<Option<f64>>,
}

pub fn calculate_macd(closes: &[f64], fast: usize, slow: usize, signal_span: usize) -> MacdSeries {
    let ema_fast = calculate_ema(closes, fast);
    let ema_slow = calculate_ema(closes, slow);

    let macd: Vec<Option<f64>> = ema_fast
        .iter()
        .zip(&ema_slow)
        .map(|(f, s)| match (f, s) {
            (Some(f), Some(s)) => Some(f - s),
            _ => None,
        })
        .collect();

    // The MACD line is all-defined or all-undefined, so the signal EMA
    // runs over the plain values when they exist.
    let line: Vec<f64> = macd.iter().flatten().copied().collect();
    let signal = if line.len() == macd.len() {
        calculate_ema(&line, signal_span)
    } else {
        vec![None; macd.len()]
    };

    MacdSeries { macd, signal }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn macd_hand_check() {
        let out = calculate_macd(&[10.0, 11.0, 12.0], 2, 3, 2);

        // EMA(2) with k = 2/3 and EMA(3) with k = 1/2, both seeded at 10
        let ema2_1 = 11.0 * (2.0 / 3.0) + 10.0 / 3.0;
        let ema2_2 = 12.0 * (2.0 / 3.0) + ema2_1 / 3.0;
        let macd_1 = ema2_1 - 10.5;
        let macd_2 = ema2_2 - 11.25;

        assert_relative_eq!(out.macd[0].unwrap(), 0.0);
        assert_relative_eq!(out.macd[1].unwrap(), macd_1, epsilon = 1e-10);
        assert_relative_eq!(out.macd[2].unwrap(), macd_2, epsilon = 1e-10);

        let sig_1 = macd_1 * (2.0 / 3.0);
        let sig_2 = macd_2 * (2.0 / 3.0) + sig_1 / 3.0;
        assert_relative_eq!(out.signal[0].unwrap(), 0.0);
        assert_relative_eq!(out.signal[1].unwrap(), sig_1, epsilon = 1e-10);
        assert_relative_eq!(out.signal[2].unwrap(), sig_2, epsilon = 1e-10);
    }

    #[test]
    fn macd_of_constant_closes_is_zero() {
        let out = calculate_macd(&[50.0; 30], DEFAULT_FAST, DEFAULT_SLOW, DEFAULT_SIGNAL);
        for (m, s) in out.macd.iter().zip(&out.signal) {
            assert_relative_eq!(m.unwrap(), 0.0);
            assert_relative_eq!(s.unwrap(), 0.0);
        }
    }

    #[test]
    fn macd_single_close_is_undefined() {
        let out = calculate_macd(&[100.0], DEFAULT_FAST, DEFAULT_SLOW, DEFAULT_SIGNAL);
        assert_eq!(out.macd, vec![None]);
        assert_eq!(out.signal, vec![None]);
    }

    #[test]
    fn macd_empty_input() {
        let out = calculate_macd(&[], DEFAULT_FAST, DEFAULT_SLOW, DEFAULT_SIGNAL);
        assert!(out.macd.is_empty());
        assert!(out.signal.is_empty());
    }

    #[test]
    fn macd_positive_in_steady_uptrend() {
        let closes: Vec<f64> = (0..40).map(|i| 100.0 + i as f64 * 2.0).collect();
        let out = calculate_macd(&closes, DEFAULT_FAST, DEFAULT_SLOW, DEFAULT_SIGNAL);
        // the fast EMA pulls ahead of the slow EMA while price keeps rising
        assert!(out.macd.last().unwrap().unwrap() > 0.0);
    }
}
