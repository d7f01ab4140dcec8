//! Offline market-data adapter reading per-ticker CSV files.
//!
//! Serves `{data_dir}/{TICKER}.csv` with columns
//! `timestamp,open,high,low,close,volume`, where timestamp is RFC 3339
//! or a plain `YYYY-MM-DD`. The file is served as-is regardless of the
//! requested chart type. Metadata and news are not available offline
//! and come back empty.

use crate::domain::bar::Bar;
use crate::domain::chart::ChartType;
use crate::domain::error::StockdashError;
use crate::domain::quote::{CompanyInfo, NewsItem};
use crate::ports::market_data_port::MarketDataPort;
use chrono::{DateTime, NaiveDate, Utc};
use std::fs;
use std::path::PathBuf;

pub struct CsvMarketData {
    data_dir: PathBuf,
}

impl CsvMarketData {
    pub fn new(data_dir: PathBuf) -> Self {
        Self { data_dir }
    }

    fn csv_path(&self, ticker: &str) -> PathBuf {
        self.data_dir.join(format!("{}.csv", ticker))
    }

    fn parse_timestamp(value: &str) -> Option<DateTime<Utc>> {
        if let Ok(ts) = DateTime::parse_from_rfc3339(value) {
            return Some(ts.with_timezone(&Utc));
        }
        let date = NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()?;
        Some(date.and_hms_opt(0, 0, 0)?.and_utc())
    }
}

impl MarketDataPort for CsvMarketData {
    fn fetch_history(
        &self,
        ticker: &str,
        _chart: ChartType,
    ) -> Result<Vec<Bar>, StockdashError> {
        let path = self.csv_path(ticker);
        let content = fs::read_to_string(&path).map_err(|e| StockdashError::Gateway {
            message: format!("failed to read {}: {}", path.display(), e),
        })?;

        let mut rdr = csv::Reader::from_reader(content.as_bytes());
        let mut bars = Vec::new();

        for (i, result) in rdr.records().enumerate() {
            let line = i + 2; // header is line 1
            let record = result.map_err(|e| StockdashError::Gateway {
                message: format!("{} line {}: {}", path.display(), line, e),
            })?;

            let field = |idx: usize, name: &str| -> Result<String, StockdashError> {
                record
                    .get(idx)
                    .map(str::to_string)
                    .ok_or_else(|| StockdashError::Gateway {
                        message: format!("{} line {}: missing {} column", path.display(), line, name),
                    })
            };

            let timestamp = Self::parse_timestamp(&field(0, "timestamp")?).ok_or_else(|| {
                StockdashError::Gateway {
                    message: format!("{} line {}: invalid timestamp", path.display(), line),
                }
            })?;

            let parse_f64 = |idx: usize, name: &str| -> Result<f64, StockdashError> {
                field(idx, name)?
                    .parse()
                    .map_err(|e| StockdashError::Gateway {
                        message: format!("{} line {}: invalid {}: {}", path.display(), line, name, e),
                    })
            };

            let open = parse_f64(1, "open")?;
            let high = parse_f64(2, "high")?;
            let low = parse_f64(3, "low")?;
            let close = parse_f64(4, "close")?;
            let volume: u64 = field(5, "volume")?
                .parse()
                .map_err(|e| StockdashError::Gateway {
                    message: format!("{} line {}: invalid volume: {}", path.display(), line, e),
                })?;

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

    fn fetch_info(&self, _ticker: &str) -> Result<CompanyInfo, StockdashError> {
        Ok(CompanyInfo::default())
    }

    fn fetch_news(
        &self,
        _ticker: &str,
        _limit: usize,
    ) -> Result<Vec<NewsItem>, StockdashError> {
        Ok(Vec::new())
    }
}
