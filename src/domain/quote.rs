//! Company metadata and news records.
//!
//! Every metadata field is optional; the dashboard renders missing
//! values as dashes rather than failing the page for one absent field.

pub const DEFAULT_PUBLISHER: &str = "Yahoo Finance";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CompanyInfo {
    pub name: Option<String>,
    pub currency: Option<String>,
    pub current_price: Option<f64>,
    pub previous_close: Option<f64>,
    pub bid: Option<f64>,
    pub ask: Option<f64>,
    pub bid_size: Option<u64>,
    pub ask_size: Option<u64>,
    pub market_cap: Option<f64>,
    pub trailing_pe: Option<f64>,
    pub price_to_book: Option<f64>,
    pub fifty_two_week_high: Option<f64>,
    pub fifty_two_week_low: Option<f64>,
    pub dividend_yield: Option<f64>,
}

impl CompanyInfo {
    pub fn is_empty(&self) -> bool {
        *self == CompanyInfo::default()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewsItem {
    pub title: String,
    pub link: String,
    pub publisher: String,
}

impl NewsItem {
    /// Assemble an item from optional feed fields. Items missing a title
    /// or link are dropped; a missing publisher gets the default.
    pub fn from_parts(
        title: Option<String>,
        link: Option<String>,
        publisher: Option<String>,
    ) -> Option<NewsItem> {
        let title = title.filter(|t| !t.trim().is_empty())?;
        let link = link.filter(|l| !l.trim().is_empty())?;
        Some(NewsItem {
            title,
            link,
            publisher: publisher
                .filter(|p| !p.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_PUBLISHER.to_string()),
        })
    }
}
