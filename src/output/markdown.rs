use std::fmt::Write;

use crate::error::Result;

use super::{OutputFormatter, RunReport};

/// Renders the run report as a Markdown document, suitable for posting as a
/// pull-request comment body.
pub struct MarkdownFormatter;

impl MarkdownFormatter {
    const fn marker(pass: bool) -> &'static str {
        if pass { "✅" } else { "❌" }
    }
}

impl OutputFormatter for MarkdownFormatter {
    fn format(&self, report: &RunReport) -> Result<String> {
        let mut output = String::new();
        let thresholds = report.thresholds;

        writeln!(output, "## Word Count Report").ok();
        writeln!(output).ok();

        let mut bounds = Vec::new();
        if thresholds.min_enabled() {
            bounds.push(format!("min {}", thresholds.min));
        }
        if thresholds.max_enabled() {
            bounds.push(format!("max {}", thresholds.max));
        }
        if !bounds.is_empty() {
            writeln!(output, "**Thresholds:** {}", bounds.join(", ")).ok();
            writeln!(output).ok();
        }

        if !report.verdict.results.is_empty() {
            let mut header = String::from("| File | Words |");
            let mut rule = String::from("|------|-------|");
            if thresholds.min_enabled() {
                header.push_str(" Min |");
                rule.push_str("-----|");
            }
            if thresholds.max_enabled() {
                header.push_str(" Max |");
                rule.push_str("-----|");
            }
            header.push_str(" Status |");
            rule.push_str("--------|");
            writeln!(output, "{header}").ok();
            writeln!(output, "{rule}").ok();

            for result in &report.verdict.results {
                let mut row = format!("| {} | {} |", result.name, result.word_count);
                if thresholds.min_enabled() {
                    let _ = write!(row, " {} |", Self::marker(result.min_pass));
                }
                if thresholds.max_enabled() {
                    let _ = write!(row, " {} |", Self::marker(result.max_pass));
                }
                let status = if result.is_passed() { "Passed" } else { "Failed" };
                let _ = write!(row, " {status} |");
                writeln!(output, "{row}").ok();
            }
            writeln!(output).ok();
        }

        if !report.failures.is_empty() {
            writeln!(output, "### Errors").ok();
            writeln!(output).ok();
            for failure in report.failures {
                writeln!(output, "- `{}`: {}", failure.name, failure.message).ok();
            }
            writeln!(output).ok();
        }

        let passed = report.passed_count();
        let total = report.verdict.results.len();
        let overall = if report.verdict.overall_pass {
            "✅ Passed"
        } else {
            "❌ Failed"
        };
        writeln!(output, "**Overall: {overall}** ({passed}/{total} files passed)").ok();

        Ok(output)
    }
}

#[cfg(test)]
#[path = "markdown_tests.rs"]
mod tests;
