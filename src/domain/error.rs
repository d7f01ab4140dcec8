//! Domain error types.

use crate::domain::watchlist::WatchlistError;

/// Top-level error type for stockdash.
#[derive(Debug, thiserror::Error)]
pub enum StockdashError {
    #[error("market data unavailable: {message}")]
    Gateway { message: String },

    #[error("config parse error in {file}: {reason}")]
    ConfigParse { file: String, reason: String },

    #[error("malformed portfolio file {path}: {reason}")]
    MalformedPortfolio { path: String, reason: String },

    #[error("portfolio store error: {reason}")]
    Store { reason: String },

    #[error(transparent)]
    Watchlist(#[from] WatchlistError),

    #[error("invalid argument: {reason}")]
    InvalidArgument { reason: String },

    #[error("dashboard render error: {reason}")]
    Render { reason: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl From<&StockdashError> for std::process::ExitCode {
    fn from(err: &StockdashError) -> Self {
        let code: u8 = match err {
            StockdashError::Io(_) => 1,
            StockdashError::ConfigParse { .. } => 2,
            StockdashError::MalformedPortfolio { .. } | StockdashError::Store { .. } => 3,
            StockdashError::Watchlist(_) | StockdashError::InvalidArgument { .. } => 4,
            StockdashError::Gateway { .. } => 5,
            StockdashError::Render { .. } => 6,
        };
        std::process::ExitCode::from(code)
    }
}
