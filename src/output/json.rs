use serde::Serialize;

use crate::checker::{DocumentFailure, DocumentResult, Thresholds};
use crate::error::Result;

use super::{OutputFormatter, RunReport};

pub struct JsonFormatter;

#[derive(Serialize)]
struct JsonOutput<'a> {
    summary: Summary,
    thresholds: Thresholds,
    results: &'a [DocumentResult],
    failures: &'a [DocumentFailure],
}

#[derive(Serialize)]
struct Summary {
    total_files: usize,
    passed: usize,
    failed: usize,
    errors: usize,
    overall_pass: bool,
}

impl OutputFormatter for JsonFormatter {
    fn format(&self, report: &RunReport) -> Result<String> {
        let passed = report.passed_count();
        let total = report.verdict.results.len();

        let output = JsonOutput {
            summary: Summary {
                total_files: total,
                passed,
                failed: total - passed,
                errors: report.failures.len(),
                overall_pass: report.verdict.overall_pass,
            },
            thresholds: report.thresholds,
            results: &report.verdict.results,
            failures: report.failures,
        };

        Ok(serde_json::to_string_pretty(&output)?)
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
