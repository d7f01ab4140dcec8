//! Concrete adapter implementations for ports.

pub mod csv_market_data;
pub mod csv_portfolio_adapter;
pub mod file_config_adapter;
pub mod html_dashboard;
pub mod yahoo_adapter;
