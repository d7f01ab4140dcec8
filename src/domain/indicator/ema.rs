//! Exponential Moving Average.
//!
//! k = 2/(span+1), seed with the first value (no warmup bias adjustment),
//! then EMA[i] = V[i]*k + EMA[i-1]*(1-k).
//! Series shorter than two values stay undefined throughout.

pub fn calculate_ema(values: &[f64], span: usize) -> Vec<Option<f64>> {
    if span == 0 || values.len() < 2 {
        return vec![None; values.len()];
    }

    let k = 2.0 / (span as f64 + 1.0);
    let mut out = Vec::with_capacity(values.len());
    let mut ema = values[0];
    out.push(Some(ema));

    for &v in &values[1..] {
        ema = v * k + ema * (1.0 - k);
        out.push(Some(ema));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn ema_seed_is_first_value() {
        let out = calculate_ema(&[10.0, 20.0, 30.0], 3);
        assert_relative_eq!(out[0].unwrap(), 10.0);
    }

    #[test]
    fn ema_recursive_calculation() {
        let out = calculate_ema(&[10.0, 20.0, 30.0, 40.0], 3);
        let k = 2.0 / 4.0;

        let ema_1 = 20.0 * k + 10.0 * (1.0 - k);
        assert_relative_eq!(out[1].unwrap(), ema_1);

        let ema_2 = 30.0 * k + ema_1 * (1.0 - k);
        assert_relative_eq!(out[2].unwrap(), ema_2);

        let ema_3 = 40.0 * k + ema_2 * (1.0 - k);
        assert_relative_eq!(out[3].unwrap(), ema_3);
    }

    #[test]
    fn ema_equal_prices() {
        let out = calculate_ema(&[100.0, 100.0, 100.0, 100.0], 3);
        for v in out {
            assert_relative_eq!(v.unwrap(), 100.0);
        }
    }

    #[test]
    fn ema_single_value_is_undefined() {
        assert_eq!(calculate_ema(&[10.0], 3), vec![None]);
    }

    #[test]
    fn ema_empty_input() {
        assert!(calculate_ema(&[], 3).is_empty());
    }

    #[test]
    fn ema_zero_span() {
        assert_eq!(calculate_ema(&[10.0, 20.0], 0), vec![None, None]);
    }

    #[test]
    fn ema_smoothing_factor() {
        let span = 10;
        let k = 2.0 / (span as f64 + 1.0);
        assert_relative_eq!(k, 2.0 / 11.0);
    }
}
