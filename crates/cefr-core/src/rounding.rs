//! Rounding and averaging of scores.
//!
//! Rounding formats the exact binary value with `digits` decimals and parses it
//! back. That is round-half-to-even on the exact decimal expansion, so
//! `round_to(2.675, 2)` is `2.67` (the double is slightly below 2.675) and
//! `round_to(0.125, 2)` is `0.12`.

/// Requested precision above this is clamped to it.
pub const MAX_ROUND_DIGITS: u32 = 32;

/// Round `value` to `digits` decimal places.
pub fn round_to(value: f64, digits: u32) -> f64 {
    if !value.is_finite() {
        return value;
    }
    let precision = digits.min(MAX_ROUND_DIGITS) as usize;
    format!("{value:.precision$}").parse().unwrap_or(value)
}

/// Running mean over present scores; absent scores are ignored.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Mean {
    sum: f64,
    count: usize,
}

impl Mean {
    pub fn push(&mut self, score: Option<f64>) {
        if let Some(value) = score {
            self.sum += value;
            self.count += 1;
        }
    }

    pub fn count(&self) -> usize {
        self.count
    }

    /// Unrounded mean, absent when nothing was pushed.
    pub fn value(&self) -> Option<f64> {
        if self.count == 0 {
            return None;
        }
        Some(self.sum / self.count as f64)
    }

    pub fn rounded(&self, digits: u32) -> Option<f64> {
        self.value().map(|mean| round_to(mean, digits))
    }
}

impl FromIterator<Option<f64>> for Mean {
    fn from_iter<I: IntoIterator<Item = Option<f64>>>(iter: I) -> Self {
        let mut mean = Mean::default();
        for score in iter {
            mean.push(score);
        }
        mean
    }
}
