//! Chart types and their market-data fetch parameters.

use crate::domain::bar::Bar;
use crate::domain::error::StockdashError;
use chrono::Duration;

/// Intraday bar sizes the gateway accepts, in minutes.
pub const INTRADAY_MINUTES: [u32; 5] = [1, 15, 30, 60, 90];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartType {
    Daily,
    Weekly,
    Monthly,
    Intraday { minutes: u32 },
}

impl ChartType {
    /// Build an intraday chart type, rejecting bar sizes the gateway
    /// does not serve.
    pub fn intraday(minutes: u32) -> Result<Self, StockdashError> {
        if INTRADAY_MINUTES.contains(&minutes) {
            Ok(ChartType::Intraday { minutes })
        } else {
            Err(StockdashError::InvalidArgument {
                reason: format!(
                    "unsupported intraday bar size {minutes}m (supported: 1, 15, 30, 60, 90)"
                ),
            })
        }
    }

    pub fn from_name(name: &str) -> Result<Self, StockdashError> {
        match name.to_lowercase().as_str() {
            "daily" => Ok(ChartType::Daily),
            "weekly" => Ok(ChartType::Weekly),
            "monthly" => Ok(ChartType::Monthly),
            other => Err(StockdashError::InvalidArgument {
                reason: format!("unknown chart type '{other}' (expected daily, weekly or monthly)"),
            }),
        }
    }

    /// Bar interval parameter for the history request.
    pub fn interval(&self) -> String {
        match self {
            ChartType::Daily => "1d".to_string(),
            ChartType::Weekly => "1wk".to_string(),
            ChartType::Monthly => "1mo".to_string(),
            ChartType::Intraday { minutes } => format!("{minutes}m"),
        }
    }

    /// Fetch range parameter for the history request.
    pub fn range(&self) -> &'static str {
        match self {
            ChartType::Daily => "2y",
            ChartType::Weekly => "5y",
            ChartType::Monthly => "max",
            ChartType::Intraday { .. } => "5d",
        }
    }

    /// Trailing window of fetched bars that the dashboard actually draws.
    pub fn display_window(&self) -> Duration {
        match self {
            ChartType::Daily => Duration::days(100),
            ChartType::Weekly => Duration::days(365),
            ChartType::Monthly => Duration::days(3 * 365),
            ChartType::Intraday { .. } => Duration::days(1),
        }
    }

    /// Moving-average overlays only make sense at daily resolution and up.
    pub fn has_ma_overlays(&self) -> bool {
        !matches!(self, ChartType::Intraday { .. })
    }

    pub fn label(&self) -> String {
        match self {
            ChartType::Daily => "daily".to_string(),
            ChartType::Weekly => "weekly".to_string(),
            ChartType::Monthly => "monthly".to_string(),
            ChartType::Intraday { minutes } => format!("{minutes}-minute"),
        }
    }
}

/// Trailing slice of `bars` that falls inside the chart's display window,
/// measured back from the final bar. Empty input stays empty.
pub fn display_slice(bars: &[Bar], chart: ChartType) -> &[Bar] {
    let Some(last) = bars.last() else {
        return bars;
    };
    let cutoff = last.timestamp - chart.display_window();
    let start = bars.partition_point(|bar| bar.timestamp < cutoff);
    &bars[start..]
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn bar_at(day: u32, close: f64) -> Bar {
        Bar {
            timestamp: Utc.with_ymd_and_hms(2024, 1, day, 0, 0, 0).unwrap(),
            open: close,
            high: close,
            low: close,
            close,
            volume: 1_000,
        }
    }

    #[test]
    fn fetch_parameters_per_chart_type() {
        assert_eq!(ChartType::Daily.interval(), "1d");
        assert_eq!(ChartType::Daily.range(), "2y");
        assert_eq!(ChartType::Weekly.interval(), "1wk");
        assert_eq!(ChartType::Weekly.range(), "5y");
        assert_eq!(ChartType::Monthly.interval(), "1mo");
        assert_eq!(ChartType::Monthly.range(), "max");
        let intraday = ChartType::intraday(15).unwrap();
        assert_eq!(intraday.interval(), "15m");
        assert_eq!(intraday.range(), "5d");
    }

    #[test]
    fn intraday_rejects_unsupported_bar_size() {
        assert!(ChartType::intraday(7).is_err());
        assert!(ChartType::intraday(60).is_ok());
    }

    #[test]
    fn from_name_is_case_insensitive() {
        assert_eq!(ChartType::from_name("Daily").unwrap(), ChartType::Daily);
        assert_eq!(ChartType::from_name("WEEKLY").unwrap(), ChartType::Weekly);
        assert!(ChartType::from_name("hourly").is_err());
    }

    #[test]
    fn overlays_skip_intraday() {
        assert!(ChartType::Daily.has_ma_overlays());
        assert!(ChartType::Monthly.has_ma_overlays());
        assert!(!ChartType::intraday(30).unwrap().has_ma_overlays());
    }

    #[test]
    fn display_slice_keeps_trailing_window() {
        let bars: Vec<Bar> = (1..=30).map(|d| bar_at(d, 100.0 + d as f64)).collect();
        let chart = ChartType::intraday(15).unwrap();
        // 1-day window measured from the last bar keeps bars 29 and 30.
        let slice = display_slice(&bars, chart);
        assert_eq!(slice.len(), 2);
        assert!((slice[0].close - 129.0).abs() < f64::EPSILON);
    }

    #[test]
    fn display_slice_of_empty_series() {
        assert!(display_slice(&[], ChartType::Daily).is_empty());
    }

    #[test]
    fn display_slice_keeps_everything_inside_window() {
        let bars: Vec<Bar> = (1..=30).map(|d| bar_at(d, 100.0)).collect();
        let slice = display_slice(&bars, ChartType::Daily);
        assert_eq!(slice.len(), 30);
    }
}
