//! CSV portfolio persistence adapter.
//!
//! One row per lot, columns `ticker,buy_price,qty,date`. Every save is a
//! full-file rewrite. Export writes a dated copy; import parses an
//! external file without touching the backing one.

use crate::domain::error::StockdashError;
use crate::domain::portfolio::{Portfolio, PortfolioEntry};
use crate::ports::portfolio_store::PortfolioStore;
use chrono::{Local, NaiveDate};
use std::path::{Path, PathBuf};

pub struct CsvPortfolioAdapter {
    file: PathBuf,
}

impl CsvPortfolioAdapter {
    pub fn new(file: PathBuf) -> Self {
        Self { file }
    }

    fn read_csv(path: &Path) -> Result<Portfolio, StockdashError> {
        let malformed = |reason: String| StockdashError::MalformedPortfolio {
            path: path.display().to_string(),
            reason,
        };

        let mut rdr = csv::Reader::from_path(path)
            .map_err(|e| malformed(format!("cannot open: {e}")))?;
        let mut entries = Vec::new();

        for (i, result) in rdr.records().enumerate() {
            let line = i + 2; // header is line 1
            let record = result.map_err(|e| malformed(format!("line {line}: {e}")))?;

            let field = |idx: usize, name: &str| {
                record
                    .get(idx)
                    .map(str::trim)
                    .filter(|v| !v.is_empty())
                    .map(str::to_string)
                    .ok_or_else(|| malformed(format!("line {line}: missing {name}")))
            };

            let ticker = field(0, "ticker")?;
            let buy_price: f64 = field(1, "buy_price")?
                .parse()
                .map_err(|e| malformed(format!("line {line}: invalid buy_price: {e}")))?;
            let qty: u32 = field(2, "qty")?
                .parse()
                .map_err(|e| malformed(format!("line {line}: invalid qty: {e}")))?;
            let date = NaiveDate::parse_from_str(&field(3, "date")?, "%Y-%m-%d")
                .map_err(|e| malformed(format!("line {line}: invalid date: {e}")))?;

            entries.push(PortfolioEntry {
                ticker,
                buy_price,
                qty,
                date,
            });
        }

        Ok(Portfolio::from_entries(entries))
    }

    fn write_csv(path: &Path, portfolio: &Portfolio) -> Result<(), StockdashError> {
        let store_err = |e: csv::Error| StockdashError::Store {
            reason: format!("cannot write {}: {}", path.display(), e),
        };

        let mut wtr = csv::Writer::from_path(path).map_err(store_err)?;
        wtr.write_record(["ticker", "buy_price", "qty", "date"])
            .map_err(store_err)?;
        for entry in portfolio.entries() {
            wtr.write_record([
                entry.ticker.as_str(),
                &entry.buy_price.to_string(),
                &entry.qty.to_string(),
                &entry.date.format("%Y-%m-%d").to_string(),
            ])
            .map_err(store_err)?;
        }
        wtr.flush().map_err(|e| StockdashError::Store {
            reason: format!("cannot write {}: {}", path.display(), e),
        })?;
        Ok(())
    }
}

impl PortfolioStore for CsvPortfolioAdapter {
    fn load(&self) -> Result<Portfolio, StockdashError> {
        if !self.file.exists() {
            return Ok(Portfolio::new());
        }
        Self::read_csv(&self.file)
    }

    fn save(&self, portfolio: &Portfolio) -> Result<(), StockdashError> {
        Self::write_csv(&self.file, portfolio)
    }

    fn export_dated(
        &self,
        portfolio: &Portfolio,
        dir: &Path,
    ) -> Result<PathBuf, StockdashError> {
        let name = format!("portfolio_{}.csv", Local::now().format("%Y%m%d"));
        let path = dir.join(name);
        Self::write_csv(&path, portfolio)?;
        Ok(path)
    }

    fn import(&self, path: &Path) -> Result<Portfolio, StockdashError> {
        Self::read_csv(path)
    }
}
