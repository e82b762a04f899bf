use serde::Serialize;

/// Minimum/maximum word-count bounds for the run. Any negative value
/// disables that side of the check; with both disabled the word count is
/// purely informational.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Thresholds {
    pub min: f64,
    pub max: f64,
}

impl Thresholds {
    pub const DISABLED: f64 = -1.0;

    #[must_use]
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Both bounds disabled: evaluation always passes.
    #[must_use]
    pub const fn disabled() -> Self {
        Self {
            min: Self::DISABLED,
            max: Self::DISABLED,
        }
    }

    #[must_use]
    pub fn min_enabled(&self) -> bool {
        self.min >= 0.0
    }

    #[must_use]
    pub fn max_enabled(&self) -> bool {
        self.max >= 0.0
    }

    /// Classify one document's word count against the bounds.
    ///
    /// Pure and total: a disabled bound always passes. The two bounds are
    /// evaluated independently of each other.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn evaluate(&self, word_count: usize) -> BoundsVerdict {
        let count = word_count as f64;
        BoundsVerdict {
            min_pass: !self.min_enabled() || self.min <= count,
            max_pass: !self.max_enabled() || self.max >= count,
        }
    }
}

impl Default for Thresholds {
    fn default() -> Self {
        Self::disabled()
    }
}

/// Per-bound pass/fail verdict for a single document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundsVerdict {
    pub min_pass: bool,
    pub max_pass: bool,
}

#[cfg(test)]
#[path = "threshold_tests.rs"]
mod tests;
