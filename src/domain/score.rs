//! Heuristic scoring engine.
//!
//! Scores the two most recent bars of an enriched series against a fixed
//! rule set and maps the total to a letter grade. Series shorter than
//! `MIN_SCORING_BARS` get the declared degenerate result instead of an
//! error. Reasons keep rule evaluation order, which the dashboard and
//! the tests both rely on.

use crate::domain::enrich::EnrichedBar;
use std::fmt;

/// Bars required before the rule set is worth evaluating.
pub const MIN_SCORING_BARS: usize = 60;

pub const REASON_INSUFFICIENT_DATA: &str = "insufficient data";
pub const REASON_CLOSE_ABOVE_MA20: &str = "close above MA20";
pub const REASON_MA20_ABOVE_MA60: &str = "MA20 above MA60";
pub const REASON_VOLUME_ABOVE_AVERAGE: &str = "volume above 20-day average";
pub const REASON_RISING_ON_VOLUME: &str = "price and volume both rising";
pub const REASON_RSI_BUY_SIDE: &str = "RSI above 50 (buy side)";
pub const REASON_RSI_OVERBOUGHT: &str = "RSI at or above 70 (overbought)";
pub const REASON_GOLDEN_CROSS: &str = "MACD above signal (golden cross)";
pub const REASON_MACD_UPTREND: &str = "MACD positive (uptrend)";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Grade {
    S,
    A,
    B,
    C,
}

impl Grade {
    pub fn from_score(score: u32) -> Grade {
        match score {
            90.. => Grade::S,
            70..=89 => Grade::A,
            50..=69 => Grade::B,
            _ => Grade::C,
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Grade::S => "S",
            Grade::A => "A",
            Grade::B => "B",
            Grade::C => "C",
        };
        write!(f, "{}", s)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScoreResult {
    pub score: u32,
    pub grade: Grade,
    pub reasons: Vec<String>,
}

impl ScoreResult {
    fn insufficient_data() -> Self {
        ScoreResult {
            score: 0,
            grade: Grade::C,
            reasons: vec![REASON_INSUFFICIENT_DATA.to_string()],
        }
    }
}

/// Score an enriched series. Undefined indicator columns make their
/// conditions false; nothing here can fail or panic.
pub fn score_series(series: &[EnrichedBar]) -> ScoreResult {
    if series.len() < MIN_SCORING_BARS {
        return ScoreResult::insufficient_data();
    }

    let current = &series[series.len() - 1];
    let previous = &series[series.len() - 2];

    let mut score = 0u32;
    let mut reasons = Vec::new();

    if let Some(ma20) = current.ma20 {
        if current.bar.close > ma20 {
            score += 20;
            reasons.push(REASON_CLOSE_ABOVE_MA20.to_string());
        }
    }

    if let (Some(ma20), Some(ma60)) = (current.ma20, current.ma60) {
        if ma20 > ma60 {
            score += 20;
            reasons.push(REASON_MA20_ABOVE_MA60.to_string());
        }
    }

    if let Some(volume_ma20) = current.volume_ma20 {
        if current.bar.volume as f64 > volume_ma20 {
            score += 10;
            reasons.push(REASON_VOLUME_ABOVE_AVERAGE.to_string());
        }
    }

    if current.bar.close > previous.bar.close && current.bar.volume > previous.bar.volume {
        score += 10;
        reasons.push(REASON_RISING_ON_VOLUME.to_string());
    }

    if let Some(rsi) = current.rsi14 {
        if rsi > 50.0 {
            score += 10;
            reasons.push(REASON_RSI_BUY_SIDE.to_string());
        }
        if rsi >= 70.0 {
            // warning only, no points
            reasons.push(REASON_RSI_OVERBOUGHT.to_string());
        } else {
            score += 10;
        }
    }

    if let (Some(macd), Some(signal)) = (current.macd, current.signal) {
        if macd > signal {
            score += 20;
            reasons.push(REASON_GOLDEN_CROSS.to_string());
        } else if macd > 0.0 {
            score += 10;
            reasons.push(REASON_MACD_UPTREND.to_string());
        }
    }

    ScoreResult {
        score,
        grade: Grade::from_score(score),
        reasons,
    }
}
