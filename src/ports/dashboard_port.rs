//! Dashboard rendering port trait.

use crate::domain::chart::ChartType;
use crate::domain::enrich::EnrichedBar;
use crate::domain::error::StockdashError;
use crate::domain::quote::{CompanyInfo, NewsItem};
use crate::domain::score::ScoreResult;
use chrono::{DateTime, Utc};

/// Everything one dashboard render needs. The series is already cut to
/// the chart's display window; the flags are the user's section toggles.
pub struct DashboardContext<'a> {
    pub ticker: &'a str,
    pub chart: ChartType,
    pub generated_at: DateTime<Utc>,
    pub series: &'a [EnrichedBar],
    pub score: &'a ScoreResult,
    pub info: &'a CompanyInfo,
    pub news: &'a [NewsItem],
    pub show_ma: bool,
    pub show_bollinger: bool,
    pub show_volume: bool,
    pub show_macd: bool,
    pub show_rsi: bool,
}

pub trait DashboardPort {
    /// Render a self-contained dashboard document. The caller decides
    /// where the output goes.
    fn render(&self, ctx: &DashboardContext) -> Result<String, StockdashError>;
}
