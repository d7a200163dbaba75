// src/daily/rolling.rs
use std::collections::VecDeque;

#[cfg(test)]
#[path = "rolling_test.rs"]
mod tests;

/// Trailing window over the last `size` values.
///
/// The mean is always divided by `size`, so the first few days of a series
/// average over a partially filled window.
#[derive(Debug, Clone)]
pub struct RollingWindow {
    size: usize,
    values: VecDeque<i64>,
    sum: i64,
}

impl RollingWindow {
    #[must_use]
    pub fn new(size: usize) -> Self {
        Self {
            size: size.max(1),
            values: VecDeque::with_capacity(size + 1),
            sum: 0,
        }
    }

    /// Adds a value and returns the floored mean of the window.
    pub fn push(&mut self, value: i64) -> i64 {
        self.values.push_back(value);
        self.sum += value;
        while self.values.len() > self.size {
            if let Some(old) = self.values.pop_front() {
                self.sum -= old;
            }
        }
        self.mean()
    }

    #[must_use]
    pub fn mean(&self) -> i64 {
        #[allow(clippy::cast_possible_wrap)]
        let divisor = self.size as i64;
        self.sum.div_euclid(divisor)
    }
}
