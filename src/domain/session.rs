//! Explicit application state for one CLI session.
//!
//! Everything the original page kept in implicit widget state lives here
//! instead: the bounded search history and the loaded portfolio. Handlers
//! receive the state, mutate it, and the CLI persists what changed.

use crate::domain::portfolio::Portfolio;

pub const HISTORY_CAPACITY: usize = 20;

/// Most-recent-first list of searched tickers, capped at
/// `HISTORY_CAPACITY`. Re-searching a ticker moves it to the front.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchHistory {
    tickers: Vec<String>,
}

impl SearchHistory {
    pub fn new() -> Self {
        SearchHistory::default()
    }

    pub fn record(&mut self, ticker: &str) {
        let ticker = ticker.trim().to_uppercase();
        if ticker.is_empty() {
            return;
        }
        self.tickers.retain(|t| t != &ticker);
        self.tickers.insert(0, ticker);
        self.tickers.truncate(HISTORY_CAPACITY);
    }

    pub fn clear(&mut self) {
        self.tickers.clear();
    }

    pub fn tickers(&self) -> &[String] {
        &self.tickers
    }

    pub fn is_empty(&self) -> bool {
        self.tickers.is_empty()
    }

    /// One ticker per line, most recent first.
    pub fn to_lines(&self) -> String {
        self.tickers.join("\n")
    }

    /// Inverse of `to_lines`. Blank lines and duplicates in hand-edited
    /// files are dropped; the capacity cap applies to oversized files.
    pub fn from_lines(text: &str) -> Self {
        let mut seen = std::collections::HashSet::new();
        let tickers: Vec<String> = text
            .lines()
            .map(|l| l.trim().to_uppercase())
            .filter(|l| !l.is_empty() && seen.insert(l.clone()))
            .take(HISTORY_CAPACITY)
            .collect();
        SearchHistory { tickers }
    }
}

/// State threaded through the CLI handlers.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub history: SearchHistory,
    pub portfolio: Portfolio,
}
