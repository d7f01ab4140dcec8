//! Indicator Engine: augments an OHLCV series with derived columns.
//!
//! Output has the same length and timestamp order as the input; every
//! derived column is None until its rolling window has enough history.
//! Degenerate inputs (empty, shorter than a window) are valid and simply
//! leave the affected columns undefined.

use crate::domain::bar::Bar;
use crate::domain::indicator::bollinger::{calculate_bollinger, DEFAULT_MULT, DEFAULT_PERIOD};
use crate::domain::indicator::ema::calculate_ema;
use crate::domain::indicator::macd::{calculate_macd, DEFAULT_FAST, DEFAULT_SIGNAL, DEFAULT_SLOW};
use crate::domain::indicator::rsi::calculate_rsi;
use crate::domain::indicator::sma::calculate_sma;

pub const RSI_PERIOD: usize = 14;
pub const VOLUME_MA_PERIOD: usize = 20;

/// One OHLCV bar plus its derived indicator columns.
#[derive(Debug, Clone, PartialEq)]
pub struct EnrichedBar {
    pub bar: Bar,
    pub rsi14: Option<f64>,
    pub ema12: Option<f64>,
    pub ema26: Option<f64>,
    pub macd: Option<f64>,
    pub signal: Option<f64>,
    pub ma5: Option<f64>,
    pub ma20: Option<f64>,
    pub ma60: Option<f64>,
    pub ma120: Option<f64>,
    pub stddev20: Option<f64>,
    pub bb_upper: Option<f64>,
    pub bb_lower: Option<f64>,
    pub volume_ma20: Option<f64>,
}

pub fn enrich(bars: &[Bar]) -> Vec<EnrichedBar> {
    let closes: Vec<f64> = bars.iter().map(|b| b.close).collect();
    let volumes: Vec<f64> = bars.iter().map(|b| b.volume as f64).collect();

    let rsi14 = calculate_rsi(&closes, RSI_PERIOD);
    let ema12 = calculate_ema(&closes, DEFAULT_FAST);
    let ema26 = calculate_ema(&closes, DEFAULT_SLOW);
    let macd = calculate_macd(&closes, DEFAULT_FAST, DEFAULT_SLOW, DEFAULT_SIGNAL);
    let ma5 = calculate_sma(&closes, 5);
    let ma60 = calculate_sma(&closes, 60);
    let ma120 = calculate_sma(&closes, 120);
    // the Bollinger middle band doubles as MA20
    let bands = calculate_bollinger(&closes, DEFAULT_PERIOD, DEFAULT_MULT);
    let volume_ma20 = calculate_sma(&volumes, VOLUME_MA_PERIOD);

    bars.iter()
        .enumerate()
        .map(|(i, bar)| EnrichedBar {
            bar: bar.clone(),
            rsi14: rsi14[i],
            ema12: ema12[i],
            ema26: ema26[i],
            macd: macd.macd[i],
            signal: macd.signal[i],
            ma5: ma5[i],
            ma20: bands.middle[i],
            ma60: ma60[i],
            ma120: ma120[i],
            stddev20: bands.stddev[i],
            bb_upper: bands.upper[i],
            bb_lower: bands.lower[i],
            volume_ma20: volume_ma20[i],
        })
        .collect()
}
