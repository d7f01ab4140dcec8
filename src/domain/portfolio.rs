//! Paper portfolio: purchased lots and collection operations.

use crate::domain::error::StockdashError;
use chrono::NaiveDate;
use std::collections::{HashMap, HashSet};

/// One purchased lot. The same ticker may appear in any number of lots.
#[derive(Debug, Clone, PartialEq)]
pub struct PortfolioEntry {
    pub ticker: String,
    pub buy_price: f64,
    pub qty: u32,
    pub date: NaiveDate,
}

impl PortfolioEntry {
    pub fn cost(&self) -> f64 {
        self.buy_price * self.qty as f64
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Portfolio {
    entries: Vec<PortfolioEntry>,
}

impl Portfolio {
    pub fn new() -> Self {
        Portfolio::default()
    }

    pub fn from_entries(entries: Vec<PortfolioEntry>) -> Self {
        Portfolio { entries }
    }

    pub fn entries(&self) -> &[PortfolioEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn add(&mut self, entry: PortfolioEntry) {
        self.entries.push(entry);
    }

    /// Replace the lot at `index` (the position shown by `portfolio list`).
    pub fn edit(&mut self, index: usize, entry: PortfolioEntry) -> Result<(), StockdashError> {
        let slot = self.entries.get_mut(index).ok_or_else(|| Self::bad_index(index))?;
        *slot = entry;
        Ok(())
    }

    pub fn remove(&mut self, index: usize) -> Result<PortfolioEntry, StockdashError> {
        if index >= self.entries.len() {
            return Err(Self::bad_index(index));
        }
        Ok(self.entries.remove(index))
    }

    /// Sum of buy_price * qty over all lots.
    pub fn total_cost(&self) -> f64 {
        self.entries.iter().map(|e| e.cost()).sum()
    }

    /// Value the portfolio against current quotes. Lots whose ticker has
    /// no quote fall back to their cost.
    pub fn market_value(&self, prices: &HashMap<String, f64>) -> f64 {
        self.entries
            .iter()
            .map(|e| match prices.get(&e.ticker) {
                Some(&price) => price * e.qty as f64,
                None => e.cost(),
            })
            .sum()
    }

    /// Distinct tickers in first-seen order, for quote fetching.
    pub fn tickers(&self) -> Vec<String> {
        let mut seen = HashSet::new();
        let mut out = Vec::new();
        for entry in &self.entries {
            if seen.insert(entry.ticker.clone()) {
                out.push(entry.ticker.clone());
            }
        }
        out
    }

    fn bad_index(index: usize) -> StockdashError {
        StockdashError::InvalidArgument {
            reason: format!("no portfolio entry at index {index}"),
        }
    }
}
