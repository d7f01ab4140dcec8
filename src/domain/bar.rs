//! OHLCV bar representation.

use chrono::{DateTime, Utc};

/// One time-bucketed price/volume observation.
///
/// Series are ordered ascending by timestamp with no duplicates.
/// Expected shape: high >= max(open, close), low <= min(open, close).
#[derive(Debug, Clone, PartialEq)]
pub struct Bar {
    pub timestamp: DateTime<Utc>,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: u64,
}

impl Bar {
    /// Close at or above open.
    pub fn is_bullish(&self) -> bool {
        self.close >= self.open
    }

    /// (top, bottom) of the candle body.
    pub fn body(&self) -> (f64, f64) {
        if self.is_bullish() {
            (self.close, self.open)
        } else {
            (self.open, self.close)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample_bar() -> Bar {
        Bar {
            timestamp: Utc.with_ymd_and_hms(2024, 1, 15, 0, 0, 0).unwrap(),
            open: 100.0,
            high: 110.0,
            low: 90.0,
            close: 105.0,
            volume: 50_000,
        }
    }

    #[test]
    fn bullish_bar() {
        let bar = sample_bar();
        assert!(bar.is_bullish());
        let (top, bottom) = bar.body();
        assert!((top - 105.0).abs() < f64::EPSILON);
        assert!((bottom - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn bearish_bar() {
        let bar = Bar {
            close: 95.0,
            ..sample_bar()
        };
        assert!(!bar.is_bullish());
        let (top, bottom) = bar.body();
        assert!((top - 100.0).abs() < f64::EPSILON);
        assert!((bottom - 95.0).abs() < f64::EPSILON);
    }

    #[test]
    fn doji_counts_as_bullish() {
        let bar = Bar {
            close: 100.0,
            ..sample_bar()
        };
        assert!(bar.is_bullish());
    }
}
