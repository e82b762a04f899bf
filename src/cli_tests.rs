use std::path::PathBuf;

use super::*;

#[test]
fn cli_check_default_path() {
    let cli = Cli::parse_from(["wordcount-guard", "check"]);
    match cli.command {
        Commands::Check(args) => {
            assert_eq!(args.paths, vec![PathBuf::from(".")]);
        }
        Commands::Stats(_) => panic!("Expected Check command"),
    }
}

#[test]
fn cli_check_with_paths() {
    let cli = Cli::parse_from(["wordcount-guard", "check", "docs", "papers"]);
    match cli.command {
        Commands::Check(args) => {
            assert_eq!(
                args.paths,
                vec![PathBuf::from("docs"), PathBuf::from("papers")]
            );
        }
        Commands::Stats(_) => panic!("Expected Check command"),
    }
}

#[test]
fn cli_check_threshold_defaults_are_disabled() {
    let cli = Cli::parse_from(["wordcount-guard", "check"]);
    match cli.command {
        Commands::Check(args) => {
            assert!(args.min_words < 0.0);
            assert!(args.max_words < 0.0);
            assert!(!args.any_pass);
            assert!(!args.warn_only);
        }
        Commands::Stats(_) => panic!("Expected Check command"),
    }
}

#[test]
fn cli_check_with_thresholds() {
    let cli = Cli::parse_from([
        "wordcount-guard",
        "check",
        "--min-words",
        "250",
        "--max-words",
        "5000",
    ]);
    match cli.command {
        Commands::Check(args) => {
            assert!((args.min_words - 250.0).abs() < f64::EPSILON);
            assert!((args.max_words - 5000.0).abs() < f64::EPSILON);
        }
        Commands::Stats(_) => panic!("Expected Check command"),
    }
}

#[test]
fn cli_check_negative_threshold_parses() {
    let cli = Cli::parse_from(["wordcount-guard", "check", "--min-words", "-1"]);
    match cli.command {
        Commands::Check(args) => {
            assert!(args.min_words < 0.0);
        }
        Commands::Stats(_) => panic!("Expected Check command"),
    }
}

#[test]
fn cli_check_rejects_non_numeric_threshold() {
    let result = Cli::try_parse_from(["wordcount-guard", "check", "--min-words", "many"]);
    assert!(result.is_err());
}

#[test]
fn cli_check_with_globs_and_excludes() {
    let cli = Cli::parse_from([
        "wordcount-guard",
        "check",
        "--glob",
        "papers/**/*.pdf",
        "-x",
        "**/drafts/**",
    ]);
    match cli.command {
        Commands::Check(args) => {
            assert_eq!(args.glob, vec!["papers/**/*.pdf".to_string()]);
            assert_eq!(args.exclude, vec!["**/drafts/**".to_string()]);
        }
        Commands::Stats(_) => panic!("Expected Check command"),
    }
}

#[test]
fn cli_check_with_format() {
    let cli = Cli::parse_from(["wordcount-guard", "check", "--format", "markdown"]);
    match cli.command {
        Commands::Check(args) => {
            assert_eq!(args.format, crate::output::OutputFormat::Markdown);
        }
        Commands::Stats(_) => panic!("Expected Check command"),
    }
}

#[test]
fn cli_stats_has_no_threshold_flags() {
    let result = Cli::try_parse_from(["wordcount-guard", "stats", "--min-words", "10"]);
    assert!(result.is_err());
}

#[test]
fn cli_global_flags() {
    let cli = Cli::parse_from(["wordcount-guard", "-vv", "--quiet", "check"]);
    assert_eq!(cli.verbose, 2);
    assert!(cli.quiet);
}
