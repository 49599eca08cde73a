use std::fs::{self};

use evalexp::{evaluate, get_result, parse};
use walkdir::WalkDir;

#[test]
fn book_examples_work() {
    let mut count = 0;

    for entry in
        WalkDir::new("book/src").into_iter()
                                .filter_map(Result::ok)
                                .filter(|e| e.path().extension().is_some_and(|ext| ext == "md"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        for (source, expected) in extract_examples(&content) {
            count += 1;
            match get_result(&source) {
                Ok(value) => assert_same(value, expected, &source),
                Err(e) => panic!("Example in {path:?} failed:\n{source}\nError: {e}"),
            }
        }
    }

    assert!(count > 0, "No examples found in book/src");
}

/// Collects `expression == value` lines from fenced `evalexp` blocks.
fn extract_examples(content: &str) -> Vec<(String, f64)> {
    let mut examples = Vec::new();
    let mut inside = false;

    for line in content.lines() {
        let trimmed = line.trim_start();
        if trimmed.starts_with("```evalexp") {
            inside = true;
            continue;
        }
        if inside && trimmed.starts_with("```") {
            inside = false;
            continue;
        }
        if inside && let Some((source, expected)) = trimmed.rsplit_once("==") {
            let expected = expected.trim()
                                   .parse()
                                   .unwrap_or_else(|e| panic!("Bad expected value in '{line}': {e}"));
            examples.push((source.trim().to_string(), expected));
        }
    }

    examples
}

fn assert_same(actual: f64, expected: f64, src: &str) {
    let same = if expected.is_nan() {
        actual.is_nan()
    } else {
        actual == expected
    };
    assert!(same, "'{src}' evaluated to {actual}, expected {expected}");
}

fn assert_value(src: &str, expected: f64) {
    match get_result(src) {
        Ok(value) => assert_same(value, expected, src),
        Err(e) => panic!("Expression '{src}' failed: {e}"),
    }
}

fn assert_failure(src: &str) {
    if get_result(src).is_ok() {
        panic!("Expression '{src}' succeeded but was expected to fail")
    }
}

#[test]
fn basic_arithmetic() {
    assert_value("1+2+3+4", 10.0);
    assert_value("1*2*3*4", 24.0);
    assert_value("1 + 2.5", 3.5);
    assert_value("125", 125.0);
    assert_value("8 - 5", 3.0);
    assert_value("10 / 4", 2.5);
}

#[test]
fn multiplication_binds_tighter_than_addition() {
    assert_value("1+2*3+4", 11.0);
    assert_value("1*2+3*4", 14.0);
    assert_value("1+(2*3)/4+5", 7.5);
}

#[test]
fn operators_are_left_associative() {
    assert_value("1-2-3-4", -8.0);
    assert_value("1/2/3/4", 1.0 / 2.0 / 3.0 / 4.0);
    assert_value("5/(4+3)/2", 5.0 / 7.0 / 2.0);
    assert_value("8/4*2", 4.0);
    assert_value("1-2+3", 2.0);
}

#[test]
fn parentheses_override_precedence() {
    assert_value("(1+2)*(3+4)", 21.0);
    assert_value("1+(2*3)*(4+5)", 55.0);
    assert_value("1-(2-3-4)", 6.0);
    assert_value("((((7))))", 7.0);
}

#[test]
fn unary_minus() {
    assert_value("-1", -1.0);
    assert_value("-1+(-2)", -3.0);
    assert_value("-1+(-2.0)", -3.0);
    assert_value("--3", 3.0);
    assert_value("1 - -1", 2.0);
    assert_value("-2*-3", 6.0);
    assert_value("-(1+2)*3", -9.0);
}

#[test]
fn number_forms() {
    assert_value("2.", 2.0);
    assert_value("007", 7.0);
    assert_value("0.125", 0.125);
    assert_value("3.50", 3.5);
}

#[test]
fn whitespace_is_ignored() {
    assert_value("   1*2", 2.0);
    assert_value("\t1 +\n2\r\n* 3 ", 7.0);
}

#[test]
fn division_by_zero_follows_ieee754() {
    assert_value("5/0", f64::INFINITY);
    assert_value("-5/0", f64::NEG_INFINITY);
    assert_value("5/-0", f64::NEG_INFINITY);
    assert_value("0/0", f64::NAN);
}

#[test]
fn evaluation_is_idempotent() {
    let expr = parse("1+(2*3)/4+5").unwrap();

    let first = evaluate(&expr).unwrap();
    let second = evaluate(&expr).unwrap();

    assert_eq!(first.to_bits(), second.to_bits());
}

#[test]
fn malformed_expressions_fail() {
    assert_failure("");
    assert_failure("   ");
    assert_failure("1*2,5");
    assert_failure("1*2.5e2");
    assert_failure("M1 + 2.5");
    assert_failure("1 + 2&5");
    assert_failure("1 * 2.5.6");
    assert_failure("1 ** 2.5");
    assert_failure("*1 / 2.5");
    assert_failure("(1+2");
    assert_failure("1+");
    assert_failure("()");
}
