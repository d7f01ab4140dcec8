//! Core domain types and logic.

pub mod bar;
pub mod chart;
pub mod enrich;
pub mod error;
pub mod indicator;
pub mod portfolio;
pub mod quote;
pub mod scan;
pub mod score;
pub mod session;
pub mod watchlist;
