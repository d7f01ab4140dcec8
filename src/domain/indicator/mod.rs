//! Technical indicator implementations.
//!
//! Each indicator is a pure function over a value slice, returning one
//! output per input in the same order. Outputs are `None` until the
//! indicator's rolling window has enough history ("warmup"), so a series
//! shorter than the window comes back entirely undefined rather than as
//! an error.

pub mod bollinger;
pub mod ema;
pub mod macd;
pub mod rolling;
pub mod rsi;
pub mod sma;
