mod aggregate;
mod threshold;

pub use aggregate::{RunAggregator, RunVerdict};
pub use threshold::{BoundsVerdict, Thresholds};

use std::path::PathBuf;

use serde::Serialize;

/// Fully evaluated outcome for one candidate document. Built once, after all
/// of the document's pages were processed, and never mutated afterwards.
#[derive(Debug, Clone, Serialize)]
pub struct DocumentResult {
    pub name: String,
    pub path: PathBuf,
    pub word_count: usize,
    pub min_pass: bool,
    pub max_pass: bool,
}

impl DocumentResult {
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        path: impl Into<PathBuf>,
        word_count: usize,
        verdict: BoundsVerdict,
    ) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            word_count,
            min_pass: verdict.min_pass,
            max_pass: verdict.max_pass,
        }
    }

    /// A file passes iff both bounds pass.
    #[must_use]
    pub const fn is_passed(&self) -> bool {
        self.min_pass && self.max_pass
    }
}

/// A candidate file whose decoding failed. The document's result is never
/// populated; the failure identifies the document by name so it stays
/// actionable in the report.
#[derive(Debug, Clone, Serialize)]
pub struct DocumentFailure {
    pub name: String,
    pub message: String,
}

impl DocumentFailure {
    #[must_use]
    pub fn new(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            message: message.into(),
        }
    }
}
