//! Watchlist parsing for the batch scan.
//!
//! Turns the free-text ticker list the user supplies into a normalized
//! vector: split on commas, trim, uppercase, reject empties and
//! duplicates.

use std::collections::HashSet;

#[derive(Debug, Clone, thiserror::Error)]
pub enum WatchlistError {
    #[error("empty ticker list")]
    Empty,

    #[error("empty token in ticker list")]
    EmptyToken,

    #[error("duplicate ticker: {0}")]
    DuplicateTicker(String),
}

pub fn parse_tickers(input: &str) -> Result<Vec<String>, WatchlistError> {
    if input.trim().is_empty() {
        return Err(WatchlistError::Empty);
    }

    let mut tickers = Vec::new();
    let mut seen = HashSet::new();

    for token in input.split(',') {
        let trimmed = token.trim();
        if trimmed.is_empty() {
            return Err(WatchlistError::EmptyToken);
        }
        let ticker = trimmed.to_uppercase();
        if seen.contains(&ticker) {
            return Err(WatchlistError::DuplicateTicker(ticker));
        }
        seen.insert(ticker.clone());
        tickers.push(ticker);
    }

    Ok(tickers)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_tickers_basic() {
        let result = parse_tickers("AAPL,MSFT,GOOG").unwrap();
        assert_eq!(result, vec!["AAPL", "MSFT", "GOOG"]);
    }

    #[test]
    fn test_parse_tickers_with_whitespace() {
        let result = parse_tickers("  AAPL , MSFT ,GOOG  ").unwrap();
        assert_eq!(result, vec!["AAPL", "MSFT", "GOOG"]);
    }

    #[test]
    fn test_parse_tickers_uppercase() {
        let result = parse_tickers("aapl,msft").unwrap();
        assert_eq!(result, vec!["AAPL", "MSFT"]);
    }

    #[test]
    fn test_parse_tickers_exchange_suffix() {
        let result = parse_tickers("005930.ks,000660.KS").unwrap();
        assert_eq!(result, vec!["005930.KS", "000660.KS"]);
    }

    #[test]
    fn test_parse_tickers_single() {
        let result = parse_tickers("TSLA").unwrap();
        assert_eq!(result, vec!["TSLA"]);
    }

    #[test]
    fn test_parse_tickers_blank_input() {
        assert!(matches!(parse_tickers("   "), Err(WatchlistError::Empty)));
    }

    #[test]
    fn test_parse_tickers_empty_token() {
        let result = parse_tickers("AAPL,,MSFT");
        assert!(matches!(result, Err(WatchlistError::EmptyToken)));
    }

    #[test]
    fn test_parse_tickers_duplicate() {
        let result = parse_tickers("AAPL,msft,aapl");
        assert!(matches!(result, Err(WatchlistError::DuplicateTicker(s)) if s == "AAPL"));
    }
}
