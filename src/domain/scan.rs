//! Batch scan: score a watchlist and rank the results.
//!
//! Each ticker is fetched, enriched and scored in supplied order. A
//! gateway failure or an empty series skips that ticker with a recorded
//! reason; nothing escapes the loop. Short-but-nonempty series score as
//! the declared degenerate result and rank like any other entry.

use crate::domain::chart::ChartType;
use crate::domain::enrich::enrich;
use crate::domain::score::{score_series, ScoreResult};
use crate::ports::market_data_port::MarketDataPort;

#[derive(Debug, Clone)]
pub struct TickerScore {
    pub ticker: String,
    pub result: ScoreResult,
}

#[derive(Debug, Clone)]
pub struct SkippedTicker {
    pub ticker: String,
    pub reason: String,
}

#[derive(Debug, Clone, Default)]
pub struct ScanOutcome {
    /// Scored tickers, best first; equal scores keep input order.
    pub ranked: Vec<TickerScore>,
    pub skipped: Vec<SkippedTicker>,
}

pub fn run_scan(
    gateway: &dyn MarketDataPort,
    tickers: &[String],
    chart: ChartType,
) -> ScanOutcome {
    let mut ranked: Vec<TickerScore> = Vec::new();
    let mut skipped = Vec::new();
    let total = tickers.len();

    for (i, ticker) in tickers.iter().enumerate() {
        eprintln!("[{}/{}] {}", i + 1, total, ticker);

        let bars = match gateway.fetch_history(ticker, chart) {
            Ok(bars) => bars,
            Err(e) => {
                eprintln!("Warning: skipping {} ({})", ticker, e);
                skipped.push(SkippedTicker {
                    ticker: ticker.clone(),
                    reason: e.to_string(),
                });
                continue;
            }
        };

        if bars.is_empty() {
            eprintln!("Warning: skipping {} (no data found)", ticker);
            skipped.push(SkippedTicker {
                ticker: ticker.clone(),
                reason: "no data found".to_string(),
            });
            continue;
        }

        let result = score_series(&enrich(&bars));
        eprintln!("  {}: score {} [{}]", ticker, result.score, result.grade);
        ranked.push(TickerScore {
            ticker: ticker.clone(),
            result,
        });
    }

    // sort_by is stable, so ties stay in input order
    ranked.sort_by(|a, b| b.result.score.cmp(&a.result.score));

    ScanOutcome { ranked, skipped }
}
