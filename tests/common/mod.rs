#![allow(dead_code)]

use chrono::{DateTime, Duration, TimeZone, Utc};
use std::collections::HashMap;
use stockdash::domain::bar::Bar;
use stockdash::domain::chart::ChartType;
use stockdash::domain::error::StockdashError;
use stockdash::domain::quote::{CompanyInfo, NewsItem};
use stockdash::ports::market_data_port::MarketDataPort;

pub struct MockMarketData {
    pub history: HashMap<String, Vec<Bar>>,
    pub info: HashMap<String, CompanyInfo>,
    pub news: HashMap<String, Vec<NewsItem>>,
    pub errors: HashMap<String, String>,
}

impl MockMarketData {
    pub fn new() -> Self {
        Self {
            history: HashMap::new(),
            info: HashMap::new(),
            news: HashMap::new(),
            errors: HashMap::new(),
        }
    }

    pub fn with_bars(mut self, ticker: &str, bars: Vec<Bar>) -> Self {
        self.history.insert(ticker.to_string(), bars);
        self
    }

    pub fn with_info(mut self, ticker: &str, info: CompanyInfo) -> Self {
        self.info.insert(ticker.to_string(), info);
        self
    }

    pub fn with_news(mut self, ticker: &str, news: Vec<NewsItem>) -> Self {
        self.news.insert(ticker.to_string(), news);
        self
    }

    pub fn with_error(mut self, ticker: &str, reason: &str) -> Self {
        self.errors.insert(ticker.to_string(), reason.to_string());
        self
    }
}

impl MarketDataPort for MockMarketData {
    fn fetch_history(&self, ticker: &str, _chart: ChartType) -> Result<Vec<Bar>, StockdashError> {
        if let Some(reason) = self.errors.get(ticker) {
            return Err(StockdashError::Gateway {
                message: reason.clone(),
            });
        }
        Ok(self.history.get(ticker).cloned().unwrap_or_default())
    }

    fn fetch_info(&self, ticker: &str) -> Result<CompanyInfo, StockdashError> {
        if let Some(reason) = self.errors.get(ticker) {
            return Err(StockdashError::Gateway {
                message: reason.clone(),
            });
        }
        Ok(self.info.get(ticker).cloned().unwrap_or_default())
    }

    fn fetch_news(&self, ticker: &str, limit: usize) -> Result<Vec<NewsItem>, StockdashError> {
        let mut items = self.news.get(ticker).cloned().unwrap_or_default();
        items.truncate(limit);
        Ok(items)
    }
}

pub fn ts(day_offset: i64) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap() + Duration::days(day_offset)
}

pub fn make_bar(day_offset: i64, close: f64, volume: u64) -> Bar {
    Bar {
        timestamp: ts(day_offset),
        open: close - 1.0,
        high: close + 1.0,
        low: close - 2.0,
        close,
        volume,
    }
}

/// Steadily rising series: close climbs by `step` per bar, volume by 10.
pub fn rising_bars(count: usize, start_price: f64, step: f64) -> Vec<Bar> {
    (0..count)
        .map(|i| make_bar(i as i64, start_price + i as f64 * step, 1_000 + i as u64 * 10))
        .collect()
}

/// Flat series: constant close and volume.
pub fn flat_bars(count: usize, price: f64) -> Vec<Bar> {
    (0..count).map(|i| make_bar(i as i64, price, 1_000)).collect()
}
