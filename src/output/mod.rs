mod json;
mod markdown;
mod text;

pub use json::JsonFormatter;
pub use markdown::MarkdownFormatter;
pub use text::{ColorMode, TextFormatter};

use crate::checker::{DocumentFailure, RunVerdict, Thresholds};
use crate::error::Result;

/// Everything a formatter needs to render one run: the verdict (per-file
/// results in discovery order plus the overall decision), the thresholds
/// that produced it, and any per-document decode failures.
pub struct RunReport<'a> {
    pub verdict: &'a RunVerdict,
    pub thresholds: Thresholds,
    pub failures: &'a [DocumentFailure],
}

impl RunReport<'_> {
    #[must_use]
    pub fn passed_count(&self) -> usize {
        self.verdict
            .results
            .iter()
            .filter(|r| r.is_passed())
            .count()
    }
}

/// Trait for formatting a run report into various output formats.
///
/// Formatting never fails for any verdict shape; it degrades to omitting
/// threshold markers when a bound is disabled.
pub trait OutputFormatter {
    /// Format the run report into a string.
    ///
    /// # Errors
    /// Returns an error only if serialization itself fails.
    fn format(&self, report: &RunReport) -> Result<String>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Markdown,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            "markdown" | "md" => Ok(Self::Markdown),
            _ => Err(format!("Unknown output format: {s}")),
        }
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
