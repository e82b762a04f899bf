use std::io::Write as IoWrite;

use crate::checker::DocumentResult;
use crate::error::Result;

use super::{OutputFormatter, RunReport};

/// Color output mode for terminal display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    /// Auto-detect: use colors if stdout is a TTY and `NO_COLOR` is not set
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// ANSI color codes
mod ansi {
    pub const RED: &str = "\x1b[31m";
    pub const GREEN: &str = "\x1b[32m";
    pub const RESET: &str = "\x1b[0m";
}

pub struct TextFormatter {
    use_colors: bool,
}

impl TextFormatter {
    #[must_use]
    pub fn new(mode: ColorMode) -> Self {
        Self {
            use_colors: Self::should_use_colors(mode),
        }
    }

    fn should_use_colors(mode: ColorMode) -> bool {
        match mode {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => {
                // Respect NO_COLOR environment variable
                if std::env::var("NO_COLOR").is_ok() {
                    return false;
                }
                std::io::IsTerminal::is_terminal(&std::io::stdout())
            }
        }
    }

    fn colorize(&self, text: &str, pass: bool) -> String {
        if !self.use_colors {
            return text.to_string();
        }
        let color = if pass { ansi::GREEN } else { ansi::RED };
        format!("{color}{text}{}", ansi::RESET)
    }

    fn format_result(&self, result: &DocumentResult, report: &RunReport, output: &mut Vec<u8>) {
        let (icon, status) = if result.is_passed() {
            ("✓", "PASSED")
        } else {
            ("✗", "FAILED")
        };
        let colored_status = self.colorize(status, result.is_passed());
        writeln!(output, "{icon} {colored_status}: {}", result.name).ok();

        let mut bounds = Vec::new();
        if report.thresholds.min_enabled() {
            bounds.push(format!(
                "min {}: {}",
                report.thresholds.min,
                if result.min_pass { "PASS" } else { "FAIL" }
            ));
        }
        if report.thresholds.max_enabled() {
            bounds.push(format!(
                "max {}: {}",
                report.thresholds.max,
                if result.max_pass { "PASS" } else { "FAIL" }
            ));
        }
        if bounds.is_empty() {
            writeln!(output, "  Words: {}", result.word_count).ok();
        } else {
            writeln!(
                output,
                "  Words: {} ({})",
                result.word_count,
                bounds.join(", ")
            )
            .ok();
        }
    }
}

impl OutputFormatter for TextFormatter {
    fn format(&self, report: &RunReport) -> Result<String> {
        let mut output = Vec::new();

        for result in &report.verdict.results {
            self.format_result(result, report, &mut output);
        }

        for failure in report.failures {
            let colored = self.colorize("ERROR", false);
            writeln!(output, "✗ {colored}: {}", failure.name).ok();
            writeln!(output, "  {}", failure.message).ok();
        }

        let passed = report.passed_count();
        let total = report.verdict.results.len();
        writeln!(output).ok();
        writeln!(
            output,
            "Summary: {total} file(s) checked, {passed} passed, {} failed, {} error(s)",
            total - passed,
            report.failures.len()
        )
        .ok();

        let verdict = if report.verdict.overall_pass {
            self.colorize("PASSED", true)
        } else {
            self.colorize("FAILED", false)
        };
        writeln!(output, "Run verdict: {verdict}").ok();

        Ok(String::from_utf8_lossy(&output).into_owned())
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
