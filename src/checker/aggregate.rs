use serde::Serialize;

use super::DocumentResult;

/// Run-level outcome: every per-file result in discovery order plus the
/// overall pass/fail decision. Computed once, after all files are processed.
/// The aggregator performs no I/O; rendering and process-status signaling
/// consume the verdict elsewhere.
#[derive(Debug, Clone, Serialize)]
pub struct RunVerdict {
    pub results: Vec<DocumentResult>,
    pub overall_pass: bool,
}

pub struct RunAggregator {
    require_all_pass: bool,
}

impl RunAggregator {
    #[must_use]
    pub const fn new(require_all_pass: bool) -> Self {
        Self { require_all_pass }
    }

    /// Combine per-file results into the run verdict.
    ///
    /// With `require_all_pass` the empty set passes vacuously ("for all"
    /// semantics); without it the empty set fails, since no file could
    /// possibly have passed ("any" semantics).
    #[must_use]
    pub fn aggregate(&self, results: Vec<DocumentResult>) -> RunVerdict {
        let pass_count = results.iter().filter(|r| r.is_passed()).count();
        let overall_pass = if self.require_all_pass {
            pass_count == results.len()
        } else {
            pass_count > 0
        };
        RunVerdict {
            results,
            overall_pass,
        }
    }
}

#[cfg(test)]
#[path = "aggregate_tests.rs"]
mod tests;
