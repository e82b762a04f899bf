use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::output::OutputFormat;

/// Color output control
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum ColorChoice {
    /// Auto-detect terminal capability
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

#[derive(Parser, Debug)]
#[command(name = "wordcount-guard")]
#[command(author, version, about = "PDF word count guard - enforce word count limits")]
#[command(long_about = "A tool to count words in PDF documents and enforce \
    minimum/maximum word-count thresholds.\n\n\
    Exit codes:\n  \
    0 - Run verdict passed\n  \
    1 - Run verdict failed\n  \
    2 - Configuration or document decode error")]
pub struct Cli {
    /// Increase output verbosity (-v, -vv for more)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Control color output
    #[arg(long, value_enum, default_value = "auto", global = true)]
    pub color: ColorChoice,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Check PDF word counts against thresholds
    Check(CheckArgs),

    /// Display word counts without checking thresholds
    Stats(StatsArgs),
}

#[derive(Parser, Debug)]
pub struct CheckArgs {
    /// Paths to check (files or directories)
    #[arg(default_value = ".")]
    pub paths: Vec<PathBuf>,

    /// Glob patterns selecting candidate files (can be specified multiple times)
    #[arg(long, short = 'g', default_value = "**/*.pdf")]
    pub glob: Vec<String>,

    /// Exclude patterns (glob syntax, can be specified multiple times)
    #[arg(long, short = 'x')]
    pub exclude: Vec<String>,

    /// Minimum word count per document (negative disables the bound)
    #[arg(long, default_value_t = -1.0, allow_negative_numbers = true)]
    pub min_words: f64,

    /// Maximum word count per document (negative disables the bound)
    #[arg(long, default_value_t = -1.0, allow_negative_numbers = true)]
    pub max_words: f64,

    /// Pass the run if at least one file passes (default: all files must pass)
    #[arg(long)]
    pub any_pass: bool,

    /// Output format [possible values: text, json, markdown]
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,

    /// Write output to file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Report only, never fail the run on a threshold verdict
    #[arg(long)]
    pub warn_only: bool,
}

#[derive(Parser, Debug)]
pub struct StatsArgs {
    /// Paths to analyze (files or directories)
    #[arg(default_value = ".")]
    pub paths: Vec<PathBuf>,

    /// Glob patterns selecting candidate files (can be specified multiple times)
    #[arg(long, short = 'g', default_value = "**/*.pdf")]
    pub glob: Vec<String>,

    /// Exclude patterns (glob syntax, can be specified multiple times)
    #[arg(long, short = 'x')]
    pub exclude: Vec<String>,

    /// Output format [possible values: text, json, markdown]
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,

    /// Write output to file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
