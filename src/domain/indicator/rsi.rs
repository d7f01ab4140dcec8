//! RSI (Relative Strength Index).
//!
//! Per-bar change splits into gain = max(change, 0) and loss = max(-change, 0);
//! average gain/loss are n-period simple rolling means of those series.
//! RSI = 100 - 100/(1 + avg_gain/avg_loss).
//! An average loss of zero pins RSI at 100 (policy, not a division artifact).
//! Warmup: the first n bars are None (n price changes fill the windows).

use crate::domain::indicator::rolling::RollingWindow;

pub fn calculate_rsi(closes: &[f64], period: usize) -> Vec<Option<f64>> {
    if period == 0 || closes.len() < 2 {
        return vec![None; closes.len()];
    }

    let mut gains = RollingWindow::new(period);
    let mut losses = RollingWindow::new(period);
    let mut out = Vec::with_capacity(closes.len());
    out.push(None);

    for i in 1..closes.len() {
        let change = closes[i] - closes[i - 1];
        gains.push(change.max(0.0));
        losses.push((-change).max(0.0));

        out.push(match (gains.mean(), losses.mean()) {
            (Some(avg_gain), Some(avg_loss)) => {
                if avg_loss == 0.0 {
                    Some(100.0)
                } else {
                    Some(100.0 - 100.0 / (1.0 + avg_gain / avg_loss))
                }
            }
            _ => None,
        });
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn rsi_empty_input() {
        assert!(calculate_rsi(&[], 14).is_empty());
    }

    #[test]
    fn rsi_single_close_is_undefined() {
        assert_eq!(calculate_rsi(&[100.0], 14), vec![None]);
    }

    #[test]
    fn rsi_warmup_period() {
        let closes: Vec<f64> = (0..16).map(|i| 100.0 + (i % 5) as f64 * 2.0).collect();
        let out = calculate_rsi(&closes, 14);

        assert_eq!(out.len(), 16);
        for (i, v) in out.iter().take(14).enumerate() {
            assert!(v.is_none(), "bar {} should be undefined", i);
        }
        assert!(out[14].is_some());
        assert!(out[15].is_some());
    }

    #[test]
    fn rsi_all_gains_is_100() {
        let closes: Vec<f64> = (0..15).map(|i| 100.0 + i as f64).collect();
        let out = calculate_rsi(&closes, 14);
        assert_relative_eq!(out[14].unwrap(), 100.0);
    }

    #[test]
    fn rsi_constant_closes_is_100() {
        // no losses at all, so the zero-loss policy applies
        let closes = vec![100.0; 20];
        let out = calculate_rsi(&closes, 14);
        for v in &out[14..] {
            assert_relative_eq!(v.unwrap(), 100.0);
        }
    }

    #[test]
    fn rsi_all_losses_is_0() {
        let closes: Vec<f64> = (0..15).map(|i| 100.0 - i as f64).collect();
        let out = calculate_rsi(&closes, 14);
        assert_relative_eq!(out[14].unwrap(), 0.0);
    }

    #[test]
    fn rsi_simple_mean_hand_check() {
        // period 2: changes are +1, +2, -1
        let out = calculate_rsi(&[10.0, 11.0, 13.0, 12.0], 2);
        assert_eq!(out[0], None);
        assert_eq!(out[1], None);
        // window [+1, +2]: no losses
        assert_relative_eq!(out[2].unwrap(), 100.0);
        // window [+2, -1]: avg gain 1, avg loss 0.5, RS 2
        assert_relative_eq!(out[3].unwrap(), 100.0 - 100.0 / 3.0, epsilon = 1e-10);
    }

    #[test]
    fn rsi_stays_in_range() {
        let closes: Vec<f64> = (0..40)
            .map(|i| 100.0 + ((i % 7) as f64 - 3.0) * 2.0)
            .collect();
        for v in calculate_rsi(&closes, 14).into_iter().flatten() {
            assert!((0.0..=100.0).contains(&v), "RSI {} out of range", v);
        }
    }

    #[test]
    fn rsi_zero_period() {
        assert_eq!(calculate_rsi(&[10.0, 11.0], 0), vec![None, None]);
    }
}
