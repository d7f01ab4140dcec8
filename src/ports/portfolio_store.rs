//! Portfolio persistence port trait.

use crate::domain::error::StockdashError;
use crate::domain::portfolio::Portfolio;
use std::path::{Path, PathBuf};

pub trait PortfolioStore {
    /// Load the saved portfolio. A store whose file does not exist yet
    /// is an empty portfolio, not an error.
    fn load(&self) -> Result<Portfolio, StockdashError>;

    /// Persist the whole collection (full-file rewrite).
    fn save(&self, portfolio: &Portfolio) -> Result<(), StockdashError>;

    /// Write a dated copy (`portfolio_YYYYMMDD.csv`) into `dir` and
    /// return the path written.
    fn export_dated(&self, portfolio: &Portfolio, dir: &Path)
        -> Result<PathBuf, StockdashError>;

    /// Parse an external file into a portfolio. Callers replace their
    /// in-memory collection only on success, so a malformed file leaves
    /// prior state untouched.
    fn import(&self, path: &Path) -> Result<Portfolio, StockdashError>;
}
