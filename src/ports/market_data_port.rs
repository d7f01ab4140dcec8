//! Market data access port trait.

use crate::domain::bar::Bar;
use crate::domain::chart::ChartType;
use crate::domain::error::StockdashError;
use crate::domain::quote::{CompanyInfo, NewsItem};

pub trait MarketDataPort {
    /// Price history for one ticker at the chart type's resolution.
    /// An empty vector means the gateway had nothing for this ticker;
    /// callers treat that as "no data", not as a failure.
    fn fetch_history(&self, ticker: &str, chart: ChartType) -> Result<Vec<Bar>, StockdashError>;

    /// Company metadata. All-empty info is a valid answer.
    fn fetch_info(&self, ticker: &str) -> Result<CompanyInfo, StockdashError>;

    /// Recent headlines, newest first, at most `limit` items.
    fn fetch_news(&self, ticker: &str, limit: usize)
        -> Result<Vec<NewsItem>, StockdashError>;
}
