//! Yahoo Finance HTTP gateway.
//!
//! Three endpoints: v8 chart for price history, v10 quoteSummary for
//! company metadata, v1 search for headlines. Responses are full of
//! nullable holes; history rows missing any field are skipped, metadata
//! fields map to None, and an API-level "no result" is an empty answer
//! rather than an error. Requests need a browser User-Agent or Yahoo
//! rejects them.

use crate::domain::bar::Bar;
use crate::domain::chart::ChartType;
use crate::domain::error::StockdashError;
use crate::domain::quote::{CompanyInfo, NewsItem};
use crate::ports::market_data_port::MarketDataPort;
use chrono::{TimeZone, Utc};
use serde::Deserialize;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://query1.finance.yahoo.com";
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

const SUMMARY_MODULES: &str = "price,summaryDetail,defaultKeyStatistics,financialData";

pub struct YahooAdapter {
    client: reqwest::blocking::Client,
    base_url: String,
}

impl YahooAdapter {
    pub fn new(base_url: &str, user_agent: &str, timeout_secs: u64) -> Result<Self, StockdashError> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(user_agent)
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .map_err(|e| StockdashError::Gateway {
                message: format!("cannot build HTTP client: {e}"),
            })?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn get_text(&self, url: &str) -> Result<String, StockdashError> {
        let gateway = |e: reqwest::Error| StockdashError::Gateway {
            message: e.to_string(),
        };
        self.client
            .get(url)
            .send()
            .map_err(gateway)?
            .error_for_status()
            .map_err(gateway)?
            .text()
            .map_err(gateway)
    }
}

impl MarketDataPort for YahooAdapter {
    fn fetch_history(&self, ticker: &str, chart: ChartType) -> Result<Vec<Bar>, StockdashError> {
        let url = format!(
            "{}/v8/finance/chart/{}?interval={}&range={}",
            self.base_url,
            ticker,
            chart.interval(),
            chart.range()
        );
        parse_chart(&self.get_text(&url)?)
    }

    fn fetch_info(&self, ticker: &str) -> Result<CompanyInfo, StockdashError> {
        let url = format!(
            "{}/v10/finance/quoteSummary/{}?modules={}",
            self.base_url, ticker, SUMMARY_MODULES
        );
        parse_summary(&self.get_text(&url)?)
    }

    fn fetch_news(&self, ticker: &str, limit: usize) -> Result<Vec<NewsItem>, StockdashError> {
        let url = format!(
            "{}/v1/finance/search?q={}&newsCount={}",
            self.base_url, ticker, limit
        );
        parse_search(&self.get_text(&url)?, limit)
    }
}

// ---- v8 chart ----

#[derive(Debug, Deserialize)]
struct ChartEnvelope {
    chart: ChartSection,
}

#[derive(Debug, Deserialize)]
struct ChartSection {
    result: Option<Vec<ChartData>>,
    error: Option<ApiError>,
}

#[derive(Debug, Deserialize)]
struct ChartData {
    timestamp: Option<Vec<i64>>,
    indicators: Indicators,
}

#[derive(Debug, Deserialize)]
struct Indicators {
    quote: Vec<QuoteBlock>,
}

#[derive(Debug, Default, Deserialize)]
struct QuoteBlock {
    #[serde(default)]
    open: Vec<Option<f64>>,
    #[serde(default)]
    high: Vec<Option<f64>>,
    #[serde(default)]
    low: Vec<Option<f64>>,
    #[serde(default)]
    close: Vec<Option<f64>>,
    #[serde(default)]
    volume: Vec<Option<u64>>,
}

#[derive(Debug, Deserialize)]
struct ApiError {
    code: String,
    description: String,
}

fn decode<'a, T: Deserialize<'a>>(body: &'a str) -> Result<T, StockdashError> {
    serde_json::from_str(body).map_err(|e| StockdashError::Gateway {
        message: format!("unexpected response shape: {e}"),
    })
}

fn parse_chart(body: &str) -> Result<Vec<Bar>, StockdashError> {
    let envelope: ChartEnvelope = decode(body)?;

    if let Some(error) = envelope.chart.error {
        return Err(StockdashError::Gateway {
            message: format!("{}: {}", error.code, error.description),
        });
    }

    let Some(data) = envelope.chart.result.and_then(|r| r.into_iter().next()) else {
        return Ok(Vec::new());
    };
    let Some(timestamps) = data.timestamp else {
        return Ok(Vec::new());
    };
    let quote = data.indicators.quote.into_iter().next().unwrap_or_default();

    let mut bars = Vec::with_capacity(timestamps.len());
    for (i, &ts) in timestamps.iter().enumerate() {
        // a row missing any field is an incomplete bar and is dropped
        let (Some(open), Some(high), Some(low), Some(close), Some(volume)) = (
            quote.open.get(i).copied().flatten(),
            quote.high.get(i).copied().flatten(),
            quote.low.get(i).copied().flatten(),
            quote.close.get(i).copied().flatten(),
            quote.volume.get(i).copied().flatten(),
        ) else {
            continue;
        };
        let Some(timestamp) = Utc.timestamp_opt(ts, 0).single() else {
            continue;
        };
        bars.push(Bar {
            timestamp,
            open,
            high,
            low,
            close,
            volume,
        });
    }

    bars.sort_by_key(|b| b.timestamp);
    Ok(bars)
}

// ---- v10 quoteSummary ----

#[derive(Debug, Deserialize)]
struct SummaryEnvelope {
    #[serde(rename = "quoteSummary")]
    quote_summary: SummarySection,
}

#[derive(Debug, Deserialize)]
struct SummarySection {
    result: Option<Vec<SummaryModules>>,
}

#[derive(Debug, Deserialize)]
struct SummaryModules {
    price: Option<PriceModule>,
    #[serde(rename = "summaryDetail")]
    summary_detail: Option<SummaryDetailModule>,
    #[serde(rename = "defaultKeyStatistics")]
    key_statistics: Option<KeyStatisticsModule>,
    #[serde(rename = "financialData")]
    financial_data: Option<FinancialDataModule>,
}

#[derive(Debug, Deserialize)]
struct PriceModule {
    #[serde(rename = "longName")]
    long_name: Option<String>,
    #[serde(rename = "shortName")]
    short_name: Option<String>,
    currency: Option<String>,
    #[serde(rename = "regularMarketPrice")]
    regular_market_price: Option<RawValue>,
    #[serde(rename = "marketCap")]
    market_cap: Option<RawValue>,
}

#[derive(Debug, Deserialize)]
struct SummaryDetailModule {
    #[serde(rename = "previousClose")]
    previous_close: Option<RawValue>,
    bid: Option<RawValue>,
    ask: Option<RawValue>,
    #[serde(rename = "bidSize")]
    bid_size: Option<RawValue>,
    #[serde(rename = "askSize")]
    ask_size: Option<RawValue>,
    #[serde(rename = "trailingPE")]
    trailing_pe: Option<RawValue>,
    #[serde(rename = "fiftyTwoWeekHigh")]
    fifty_two_week_high: Option<RawValue>,
    #[serde(rename = "fiftyTwoWeekLow")]
    fifty_two_week_low: Option<RawValue>,
    #[serde(rename = "dividendYield")]
    dividend_yield: Option<RawValue>,
    #[serde(rename = "marketCap")]
    market_cap: Option<RawValue>,
}

#[derive(Debug, Deserialize)]
struct KeyStatisticsModule {
    #[serde(rename = "priceToBook")]
    price_to_book: Option<RawValue>,
}

#[derive(Debug, Deserialize)]
struct FinancialDataModule {
    #[serde(rename = "currentPrice")]
    current_price: Option<RawValue>,
}

/// Yahoo wraps numbers as `{"raw": 123.4, "fmt": "123.40"}`, and empty
/// values as `{}`.
#[derive(Debug, Deserialize)]
struct RawValue {
    raw: Option<f64>,
}

fn raw(value: &Option<RawValue>) -> Option<f64> {
    value.as_ref().and_then(|v| v.raw)
}

fn parse_summary(body: &str) -> Result<CompanyInfo, StockdashError> {
    let envelope: SummaryEnvelope = decode(body)?;

    // an absent result (bad ticker, delisted) is an empty mapping
    let Some(modules) = envelope
        .quote_summary
        .result
        .and_then(|r| r.into_iter().next())
    else {
        return Ok(CompanyInfo::default());
    };

    let price = modules.price;
    let detail = modules.summary_detail;
    let stats = modules.key_statistics;
    let financial = modules.financial_data;

    let mut info = CompanyInfo::default();

    if let Some(price) = &price {
        info.name = price.long_name.clone().or_else(|| price.short_name.clone());
        info.currency = price.currency.clone();
    }

    // currentPrice when the financialData module carries it, otherwise
    // the regular market price
    info.current_price = financial
        .as_ref()
        .and_then(|f| raw(&f.current_price))
        .or_else(|| price.as_ref().and_then(|p| raw(&p.regular_market_price)));

    info.market_cap = price
        .as_ref()
        .and_then(|p| raw(&p.market_cap))
        .or_else(|| detail.as_ref().and_then(|d| raw(&d.market_cap)));

    if let Some(detail) = &detail {
        info.previous_close = raw(&detail.previous_close);
        info.bid = raw(&detail.bid);
        info.ask = raw(&detail.ask);
        info.bid_size = raw(&detail.bid_size).map(|v| v as u64);
        info.ask_size = raw(&detail.ask_size).map(|v| v as u64);
        info.trailing_pe = raw(&detail.trailing_pe);
        info.fifty_two_week_high = raw(&detail.fifty_two_week_high);
        info.fifty_two_week_low = raw(&detail.fifty_two_week_low);
        info.dividend_yield = raw(&detail.dividend_yield);
    }

    info.price_to_book = stats.as_ref().and_then(|s| raw(&s.price_to_book));

    Ok(info)
}

// ---- v1 search (news) ----

#[derive(Debug, Deserialize)]
struct SearchEnvelope {
    news: Option<Vec<SearchNewsItem>>,
}

#[derive(Debug, Deserialize)]
struct SearchNewsItem {
    title: Option<String>,
    link: Option<String>,
    publisher: Option<String>,
}

fn parse_search(body: &str, limit: usize) -> Result<Vec<NewsItem>, StockdashError> {
    let envelope: SearchEnvelope = decode(body)?;
    let items = envelope
        .news
        .unwrap_or_default()
        .into_iter()
        .filter_map(|n| NewsItem::from_parts(n.title, n.link, n.publisher))
        .take(limit)
        .collect();
    Ok(items)
}
