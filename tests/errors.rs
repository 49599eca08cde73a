use evalexp::{
    DivisionMode, Evaluator, EvaluatorError, MAX_NESTING_DEPTH, ParseError, ParseOptions,
    error::ParseErrorKind, evaluate, get_result, parse, parse_with_options,
};

fn assert_parse_error(src: &str, kind: ParseErrorKind, position: usize) -> ParseError {
    match parse(src) {
        Ok(expr) => panic!("'{src}' parsed as {expr:?} but was expected to fail"),
        Err(e) => {
            assert_eq!(e.kind(), kind, "wrong kind for '{src}': {e}");
            assert_eq!(e.position(), position, "wrong position for '{src}': {e}");
            e
        },
    }
}

#[test]
fn comma_is_not_a_decimal_separator() {
    let e = assert_parse_error("1*2,5", ParseErrorKind::UnexpectedToken, 3);
    assert_eq!(e,
               ParseError::UnexpectedToken { token:    ",".to_string(),
                                             position: 3, });

    assert_parse_error("   1*2,5", ParseErrorKind::UnexpectedToken, 6);
}

#[test]
fn second_decimal_point_is_rejected() {
    let e = assert_parse_error("1*2.5.6", ParseErrorKind::UnexpectedToken, 5);
    assert!(e.message().contains("'.'"), "{e}");
}

#[test]
fn exponent_notation_is_not_supported() {
    let e = assert_parse_error("1*2.5e2", ParseErrorKind::UnexpectedToken, 5);
    assert!(e.message().contains("'e'"), "{e}");
}

#[test]
fn expression_cannot_start_with_binary_operator() {
    let e = assert_parse_error("*1/2.5", ParseErrorKind::UnexpectedToken, 0);
    assert!(e.message().contains("'*'"), "{e}");
}

#[test]
fn doubled_operator_is_rejected() {
    assert_parse_error("1**2.5", ParseErrorKind::UnexpectedToken, 2);
    assert_parse_error("1 // 2", ParseErrorKind::UnexpectedToken, 3);
    assert_parse_error("1 +* 2", ParseErrorKind::UnexpectedToken, 3);
}

#[test]
fn unrecognised_characters_are_rejected() {
    assert_parse_error("M1 + 2.5", ParseErrorKind::UnexpectedToken, 0);
    assert_parse_error("1 + 2&5", ParseErrorKind::UnexpectedToken, 5);
    assert_parse_error(".5", ParseErrorKind::UnexpectedToken, 0);
}

#[test]
fn missing_closing_parenthesis() {
    let e = assert_parse_error("(1+2", ParseErrorKind::ExpectedToken, 4);
    assert_eq!(e,
               ParseError::ExpectedToken { expected: ')',
                                           found:    "end of input".to_string(),
                                           position: 4, });

    assert_parse_error("(1 2)", ParseErrorKind::ExpectedToken, 3);
    assert_parse_error("((1) ", ParseErrorKind::ExpectedToken, 5);
}

#[test]
fn final_parenthesis_closes_every_open_group() {
    assert_eq!(get_result("((1)").unwrap(), 1.0);
    assert_eq!(get_result("2*((3+4)").unwrap(), 14.0);
    assert_eq!(get_result("(((1)").unwrap(), 1.0);
}

#[test]
fn strict_options_require_a_parenthesis_per_group() {
    let e = parse_with_options("((1)", ParseOptions::strict()).unwrap_err();
    assert_eq!(e,
               ParseError::ExpectedToken { expected: ')',
                                           found:    "end of input".to_string(),
                                           position: 4, });

    assert!(parse_with_options("((1))", ParseOptions::strict()).is_ok());
}

#[test]
fn incomplete_expressions_report_end_of_input() {
    let e = assert_parse_error("1+", ParseErrorKind::UnexpectedToken, 2);
    assert_eq!(e.message(), "Unexpected token 'end of input' at position 2.");

    assert_parse_error("", ParseErrorKind::UnexpectedToken, 0);
    assert_parse_error("  -  ", ParseErrorKind::UnexpectedToken, 5);
}

#[test]
fn empty_parentheses_are_rejected() {
    assert_parse_error("()", ParseErrorKind::UnexpectedToken, 1);
}

#[test]
fn lexical_errors_in_lookahead_are_reported() {
    // The character after a complete expression is scanned as lookahead.
    assert_parse_error("1+2 garbage", ParseErrorKind::UnexpectedToken, 4);
}

#[test]
fn deeply_nested_parentheses_are_rejected() {
    let src = "(".repeat(10_000) + "1";
    let e = assert_parse_error(&src, ParseErrorKind::NestingTooDeep, MAX_NESTING_DEPTH);
    assert_eq!(e.message(), "Expression nested deeper than 256 levels at position 256.");
}

#[test]
fn long_negation_runs_are_rejected() {
    let src = "-".repeat(200_000) + "1";
    assert_parse_error(&src, ParseErrorKind::NestingTooDeep, MAX_NESTING_DEPTH);
}

#[test]
fn nesting_up_to_the_limit_is_accepted() {
    let depth = MAX_NESTING_DEPTH;
    let src = format!("{}1{}", "(".repeat(depth), ")".repeat(depth));
    assert_eq!(get_result(&src).unwrap(), 1.0);

    let src = "-".repeat(depth) + "1";
    assert_eq!(get_result(&src).unwrap(), 1.0);

    // Parentheses and negations share one budget.
    let src = format!("-{}1{}", "(".repeat(depth), ")".repeat(depth));
    let e = parse(&src).unwrap_err();
    assert_eq!(e.kind(), ParseErrorKind::NestingTooDeep);
    assert_eq!(e.position(), depth);
}

#[test]
fn nesting_limit_is_configurable() {
    let options = ParseOptions { max_nesting: 2,
                                 ..ParseOptions::default() };

    assert!(parse_with_options("((1))", options).is_ok());
    let e = parse_with_options("-((1))", options).unwrap_err();
    assert_eq!(e,
               ParseError::NestingTooDeep { limit:    2,
                                            position: 2, });
}

#[test]
fn long_operator_chains_do_not_exhaust_the_stack() {
    let src = "1+".repeat(100_000) + "1";
    let expr = parse(&src).unwrap();
    assert_eq!(expr.depth(), 100_001);
    assert_eq!(evaluate(&expr), Ok(100_001.0));

    let src = "2*".repeat(50_000) + "0";
    assert_eq!(get_result(&src).unwrap(), 0.0);
}

#[test]
fn strict_division_reports_zero_divisor() {
    let evaluator = Evaluator::with_division(DivisionMode::Strict);

    let expr = parse("1 + 5/(2-2)").unwrap();
    assert_eq!(evaluator.evaluate(&expr), Err(EvaluatorError::DivisionByZero));

    let expr = parse("5/-0").unwrap();
    assert_eq!(evaluator.evaluate(&expr), Err(EvaluatorError::DivisionByZero));

    let expr = parse("5/2").unwrap();
    assert_eq!(evaluator.evaluate(&expr), Ok(2.5));
}

#[test]
fn errors_convert_to_boxed_errors() {
    let e = get_result("1 + 2&5").unwrap_err();
    assert_eq!(e.to_string(), "Unexpected token '&' at position 5.");
}
