//! Fixed-size rolling window accumulator.
//!
//! Ring buffer over the last n values with a running sum and sum of
//! squares, so each push is O(1) regardless of window size. Mean and
//! standard deviation are None until the window has filled.

#[derive(Debug, Clone)]
pub struct RollingWindow {
    period: usize,
    buf: Vec<f64>,
    next: usize,
    filled: usize,
    sum: f64,
    sum_sq: f64,
}

impl RollingWindow {
    pub fn new(period: usize) -> Self {
        RollingWindow {
            period,
            buf: vec![0.0; period],
            next: 0,
            filled: 0,
            sum: 0.0,
            sum_sq: 0.0,
        }
    }

    /// Push a value, evicting the oldest once the window is full.
    /// A zero-period window accepts nothing and never yields a value.
    pub fn push(&mut self, value: f64) {
        if self.period == 0 {
            return;
        }
        if self.filled == self.period {
            let old = self.buf[self.next];
            self.sum -= old;
            self.sum_sq -= old * old;
        } else {
            self.filled += 1;
        }
        self.buf[self.next] = value;
        self.sum += value;
        self.sum_sq += value * value;
        self.next = (self.next + 1) % self.period;
    }

    pub fn is_full(&self) -> bool {
        self.period > 0 && self.filled == self.period
    }

    pub fn mean(&self) -> Option<f64> {
        if self.is_full() {
            Some(self.sum / self.period as f64)
        } else {
            None
        }
    }

    /// Population standard deviation over the window.
    ///
    /// Computed as sqrt(sum_sq/n - mean^2); floating-point cancellation
    /// can push the variance a hair below zero, so it is clamped first.
    pub fn stddev(&self) -> Option<f64> {
        let mean = self.mean()?;
        let variance = (self.sum_sq / self.period as f64 - mean * mean).max(0.0);
        Some(variance.sqrt())
    }
}
