use std::fs;
use std::path::{Path, PathBuf};

use clap::Parser;
use log::info;
use rayon::prelude::*;

use wordcount_guard::checker::{
    DocumentFailure, DocumentResult, RunAggregator, RunVerdict, Thresholds,
};
use wordcount_guard::cli::{CheckArgs, Cli, ColorChoice, Commands, StatsArgs};
use wordcount_guard::counter::{DocumentWordCounter, WhitespaceTokenizer};
use wordcount_guard::decoder::PdfDocument;
use wordcount_guard::output::{
    ColorMode, JsonFormatter, MarkdownFormatter, OutputFormat, OutputFormatter, RunReport,
    TextFormatter,
};
use wordcount_guard::scanner::{DirectoryScanner, FileScanner, GlobFilter};
use wordcount_guard::{EXIT_CHECK_FAILED, EXIT_CONFIG_ERROR, EXIT_SUCCESS};

const fn color_choice_to_mode(choice: ColorChoice) -> ColorMode {
    match choice {
        ColorChoice::Auto => ColorMode::Auto,
        ColorChoice::Always => ColorMode::Always,
        ColorChoice::Never => ColorMode::Never,
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let exit_code = match &cli.command {
        Commands::Check(args) => run_check(args, &cli),
        Commands::Stats(args) => run_stats(args, &cli),
    };

    std::process::exit(exit_code);
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn run_check(args: &CheckArgs, cli: &Cli) -> i32 {
    match run_check_impl(args, cli) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_CONFIG_ERROR
        }
    }
}

fn run_check_impl(args: &CheckArgs, cli: &Cli) -> wordcount_guard::Result<i32> {
    let thresholds = Thresholds::new(args.min_words, args.max_words);

    // 1. Discover candidate files
    let files = discover_files(&args.paths, &args.glob, &args.exclude)?;

    // 2. Process each file (parallel with rayon, discovery order preserved)
    let (verdict, failures) = process_files(&files, thresholds, !args.any_pass);

    // 3. Format and write output
    let report = RunReport {
        verdict: &verdict,
        thresholds,
        failures: &failures,
    };
    let color_mode = color_choice_to_mode(cli.color);
    let output = format_output(args.format, &report, color_mode)?;
    write_output(args.output.as_deref(), &output, cli.quiet)?;

    // 4. Determine exit code: decode errors dominate, then the run verdict
    if !failures.is_empty() {
        return Ok(EXIT_CONFIG_ERROR);
    }
    if !verdict.overall_pass && !args.warn_only {
        return Ok(EXIT_CHECK_FAILED);
    }
    Ok(EXIT_SUCCESS)
}

fn run_stats(args: &StatsArgs, cli: &Cli) -> i32 {
    match run_stats_impl(args, cli) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_CONFIG_ERROR
        }
    }
}

fn run_stats_impl(args: &StatsArgs, cli: &Cli) -> wordcount_guard::Result<i32> {
    // Informational mode: both bounds disabled, every file passes
    let thresholds = Thresholds::disabled();

    let files = discover_files(&args.paths, &args.glob, &args.exclude)?;
    let (verdict, failures) = process_files(&files, thresholds, true);

    let report = RunReport {
        verdict: &verdict,
        thresholds,
        failures: &failures,
    };
    let color_mode = color_choice_to_mode(cli.color);
    let output = format_output(args.format, &report, color_mode)?;
    write_output(args.output.as_deref(), &output, cli.quiet)?;

    if failures.is_empty() {
        Ok(EXIT_SUCCESS)
    } else {
        Ok(EXIT_CONFIG_ERROR)
    }
}

fn discover_files(
    paths: &[PathBuf],
    globs: &[String],
    excludes: &[String],
) -> wordcount_guard::Result<Vec<PathBuf>> {
    let filter = GlobFilter::new(globs, excludes)?;
    let scanner = DirectoryScanner::new(filter);

    let mut all_files = Vec::new();
    for path in paths {
        let files = scanner.scan(path)?;
        all_files.extend(files);
    }
    info!("{} candidate file(s) discovered", all_files.len());
    Ok(all_files)
}

fn process_files(
    files: &[PathBuf],
    thresholds: Thresholds,
    require_all_pass: bool,
) -> (RunVerdict, Vec<DocumentFailure>) {
    let outcomes: Vec<Result<DocumentResult, DocumentFailure>> = files
        .par_iter()
        .map(|path| process_file(path, thresholds))
        .collect();

    let mut results = Vec::new();
    let mut failures = Vec::new();
    for outcome in outcomes {
        match outcome {
            Ok(result) => results.push(result),
            Err(failure) => failures.push(failure),
        }
    }

    let verdict = RunAggregator::new(require_all_pass).aggregate(results);
    (verdict, failures)
}

fn process_file(
    path: &Path,
    thresholds: Thresholds,
) -> Result<DocumentResult, DocumentFailure> {
    match count_document(path) {
        Ok((name, word_count)) => {
            info!("{name}: {word_count} word(s)");
            let verdict = thresholds.evaluate(word_count);
            Ok(DocumentResult::new(name, path, word_count, verdict))
        }
        Err(e) => {
            let name = path.file_name().map_or_else(
                || path.display().to_string(),
                |n| n.to_string_lossy().into_owned(),
            );
            Err(DocumentFailure::new(name, e.to_string()))
        }
    }
}

fn count_document(path: &Path) -> wordcount_guard::Result<(String, usize)> {
    let document = PdfDocument::open(path)?;
    let counter = DocumentWordCounter::new(WhitespaceTokenizer);
    let word_count = counter.count_words(&document)?;
    Ok((document.name().to_string(), word_count))
}

fn format_output(
    format: OutputFormat,
    report: &RunReport,
    color_mode: ColorMode,
) -> wordcount_guard::Result<String> {
    match format {
        OutputFormat::Text => TextFormatter::new(color_mode).format(report),
        OutputFormat::Json => JsonFormatter.format(report),
        OutputFormat::Markdown => MarkdownFormatter.format(report),
    }
}

fn write_output(
    output_path: Option<&Path>,
    content: &str,
    quiet: bool,
) -> wordcount_guard::Result<()> {
    if let Some(path) = output_path {
        fs::write(path, content)?;
    } else if !quiet {
        print!("{content}");
    }
    Ok(())
}

#[cfg(test)]
#[path = "main_tests.rs"]
mod tests;
