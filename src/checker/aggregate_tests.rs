use super::*;
use crate::checker::{BoundsVerdict, DocumentResult};

fn result(name: &str, min_pass: bool, max_pass: bool) -> DocumentResult {
    DocumentResult::new(
        name,
        format!("docs/{name}"),
        100,
        BoundsVerdict { min_pass, max_pass },
    )
}

#[test]
fn require_all_fails_when_any_file_fails() {
    let results = vec![
        result("a.pdf", true, true),
        result("b.pdf", true, true),
        result("c.pdf", false, true),
    ];
    let verdict = RunAggregator::new(true).aggregate(results);
    assert!(!verdict.overall_pass);
}

#[test]
fn any_pass_succeeds_when_one_file_passes() {
    let results = vec![
        result("a.pdf", true, true),
        result("b.pdf", true, true),
        result("c.pdf", false, true),
    ];
    let verdict = RunAggregator::new(false).aggregate(results);
    assert!(verdict.overall_pass);
}

#[test]
fn empty_run_passes_vacuously_under_require_all() {
    let verdict = RunAggregator::new(true).aggregate(vec![]);
    assert!(verdict.overall_pass);
}

#[test]
fn empty_run_fails_under_any_pass() {
    let verdict = RunAggregator::new(false).aggregate(vec![]);
    assert!(!verdict.overall_pass);
}

#[test]
fn a_file_passes_only_when_both_bounds_pass() {
    assert!(result("a.pdf", true, true).is_passed());
    assert!(!result("a.pdf", true, false).is_passed());
    assert!(!result("a.pdf", false, true).is_passed());
    assert!(!result("a.pdf", false, false).is_passed());
}

#[test]
fn results_order_is_preserved() {
    let results = vec![
        result("z.pdf", true, true),
        result("a.pdf", false, true),
        result("m.pdf", true, true),
    ];
    let verdict = RunAggregator::new(false).aggregate(results);
    let names: Vec<&str> = verdict.results.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, ["z.pdf", "a.pdf", "m.pdf"]);
}
