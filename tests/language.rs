use std::{
    collections::{BTreeMap, HashMap},
    fs::{self},
};

use calcite::{Calculator, Error, ParseError, RuntimeError, evaluate, parse, util::num::approx_eq};
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

        for (i, (expression, expected)) in extract_examples(&content).into_iter().enumerate() {
            count += 1;
            let result = evaluate(&expression);
            match expected.as_str() {
                "error" => assert!(result.is_err(),
                                   "Example {} in {:?} should fail:\n{}\nGot: {:?}",
                                   i + 1,
                                   path,
                                   expression,
                                   result),
                value => {
                    let expected: f64 = value.parse()
                                             .unwrap_or_else(|_| panic!("Bad expectation {value:?}"));
                    match result {
                        Ok(actual) => assert!(approx_eq(actual, expected, 1e-12),
                                              "Example {} in {:?}:\n{}\nExpected {}, got {}",
                                              i + 1,
                                              path,
                                              expression,
                                              expected,
                                              actual),
                        Err(e) => panic!("Example {} in {:?} failed:\n{}\nError: {:?}",
                                         i + 1,
                                         path,
                                         expression,
                                         e),
                    }
                },
            }
        }
    }

    assert!(count > 0, "No examples found in book/src");
}

/// Collects `expression => expected` lines from ```calcite blocks.
fn extract_examples(content: &str) -> Vec<(String, String)> {
    let mut examples = Vec::new();
    let mut inside = false;

    for line in content.lines() {
        let trimmed = line.trim_start();
        if trimmed.starts_with("```calcite") {
            inside = true;
            continue;
        }
        if inside && trimmed.starts_with("```") {
            inside = false;
            continue;
        }
        if inside && let Some((expression, expected)) = line.rsplit_once("=>") {
            examples.push((expression.trim().to_string(), expected.trim().to_string()));
        }
    }

    examples
}

fn assert_value(src: &str, expected: f64) {
    match evaluate(src) {
        Ok(actual) => assert!(approx_eq(actual, expected, 1e-12),
                              "'{src}' evaluated to {actual}, expected {expected}"),
        Err(e) => panic!("'{src}' failed: {e}"),
    }
}

fn assert_failure(src: &str) -> Error {
    match evaluate(src) {
        Ok(value) => panic!("'{src}' evaluated to {value} but was expected to fail"),
        Err(e) => e,
    }
}

#[test]
fn precedence_and_associativity() {
    assert_value("2 + 3 * 4", 14.0);
    assert_value("(2 + 3) * 4", 20.0);
    assert_value("2 ^ 3 ^ 2", 64.0);
    assert_value("2 * 3 ^ 2", 36.0);
    assert_value("10 - 4 - 3", 3.0);
    assert_value("100 / 10 / 2", 5.0);
    assert_value("2 - 3 * 4 + 5", -15.0);
    assert_value("10 - 2 * 3 - 4", 8.0);
    assert_value("1 + 2 * 3 - 4 / 2", 5.0);
}

#[test]
fn builtin_operators() {
    assert_value("7 % 3", 1.0);
    assert_value("-7 % 3", -1.0);
    assert_value("5.5 % 2", 1.5);
    assert_value("2 ^ 10", 1024.0);
    assert_value("2 ^ 0.5", std::f64::consts::SQRT_2);
    assert_value("1 / 4", 0.25);
}

#[test]
fn grouping_and_unary_signs() {
    assert_value("((2))", 2.0);
    assert_value("( 3 )", 3.0);
    assert_value("(1 + (2 * (3 + 4)))", 15.0);
    assert_value("2 * (3 + 4) - (1)", 13.0);
    assert_value("-5 + 3", -2.0);
    assert_value("+5 - 3", 2.0);
    assert_value("(-3) * 2", -6.0);
    assert_value("-(2 + 3) * 4", -20.0);
    assert_value("2 * (-(1 + 1))", -4.0);
}

#[test]
fn numbers_and_whitespace() {
    assert_value("42", 42.0);
    assert_value(".5 + .5", 1.0);
    assert_value("1e3", 1000.0);
    assert_value("2.5e2", 250.0);
    assert_value("  \t 1 +\n 2 ", 3.0);
    assert_value("1+2*3", 7.0);
}

#[test]
fn empty_input_is_zero() {
    assert_value("", 0.0);
    assert_value("   ", 0.0);
    assert_eq!(parse(None::<&str>, &[("x", 1.0)]), Ok(0.0));
}

#[test]
fn malformed_numbers_are_errors() {
    assert_eq!(assert_failure("1.2.3"),
               Error::Parse(ParseError::InvalidNumber { literal: "1.2.3".to_string(),
                                                        index:   0, }));
    assert_eq!(assert_failure("2 + 1e-3"),
               Error::Parse(ParseError::InvalidNumber { literal: "1e".to_string(),
                                                        index:   4, }));
    assert!(matches!(assert_failure("e"), Error::Parse(ParseError::InvalidNumber { .. })));
}

#[test]
fn parenthesis_errors() {
    assert_eq!(assert_failure("(1 + 2"),
               Error::Parse(ParseError::UnmatchedParenthesis { index: 0 }));
    assert_eq!(assert_failure("2 * ((1 + 2)"),
               Error::Parse(ParseError::UnmatchedParenthesis { index: 4 }));
    assert_eq!(assert_failure("1 + 2)"),
               Error::Parse(ParseError::IllegalExpression { index: 5 }));
    assert_eq!(assert_failure("()"), Error::Parse(ParseError::EmptyGroup { index: 0 }));
    assert_eq!(assert_failure("1 + ( )"), Error::Parse(ParseError::EmptyGroup { index: 4 }));
}

#[test]
fn illegal_expressions() {
    assert_eq!(assert_failure("2 + x"),
               Error::Parse(ParseError::IllegalExpression { index: 4 }));
    assert_eq!(assert_failure("* 3"),
               Error::Parse(ParseError::IllegalLeadingOperator { operator: "*".to_string() }));
    assert_eq!(assert_failure("-"),
               Error::Parse(ParseError::IllegalLeadingOperator { operator: "-".to_string() }));
    assert_eq!(assert_failure("--5"),
               Error::Parse(ParseError::IllegalLeadingOperator { operator: "-".to_string() }));
    assert_eq!(assert_failure("(* 3) + 1"),
               Error::Parse(ParseError::IllegalLeadingOperator { operator: "*".to_string() }));
}

#[test]
fn evaluation_errors() {
    assert_eq!(assert_failure("10 / 0"), Error::Runtime(RuntimeError::DivisionByZero));
    assert_eq!(assert_failure("1 / (2 - 2)"), Error::Runtime(RuntimeError::DivisionByZero));
    assert_eq!(assert_failure("2 +"),
               Error::Runtime(RuntimeError::MissingOperand { after: Some("+".to_string()) }));
    assert_eq!(assert_failure("2 + * 3"),
               Error::Runtime(RuntimeError::ExpectedOperand { found: "*".to_string() }));
    assert_eq!(assert_failure("2 3"),
               Error::Runtime(RuntimeError::ExpectedOperator { found: "3".to_string() }));
    assert_eq!(assert_failure("2 (3)"),
               Error::Runtime(RuntimeError::ExpectedOperator { found: "3".to_string() }));
}

#[test]
fn variables_are_substituted() {
    assert_eq!(parse("$x + 1", &[("x", 5.0)]), Ok(6.0));
    assert_eq!(parse("$a-$b", &[("a", 5.0), ("b", 3.0)]), Ok(2.0));
    assert_eq!(parse("2 * $x", &[("x", -3.0)]), Ok(-6.0));
    assert_eq!(parse("$x_1 ^ 2", &[("x_1", 0.5)]), Ok(0.25));
    assert_eq!(parse("($r + 1) * $r", &[("r", 2.0)]), Ok(6.0));

    let map = HashMap::from([("width".to_string(), 4.0), ("height".to_string(), 2.5)]);
    assert_eq!(parse("$width * $height", &map), Ok(10.0));

    let tree = BTreeMap::from([("n", 7.0)]);
    assert_eq!(parse("$n % 4", &tree), Ok(3.0));

    let pairs = vec![("k".to_string(), 0.1)];
    assert_eq!(parse("$k * 10", &pairs), Ok(1.0));
}

#[test]
fn undefined_variables_are_errors() {
    assert_eq!(parse("$y + 1", &[("x", 5.0)]),
               Err(Error::Parse(ParseError::UndefinedVariable { name: "y".to_string() })));

    let unset = HashMap::from([("y", None), ("x", Some(2.0))]);
    assert_eq!(parse("$x", &unset), Ok(2.0));
    assert_eq!(parse("$y", &unset),
               Err(Error::Parse(ParseError::UndefinedVariable { name: "y".to_string() })));

    assert_eq!(parse("$x", &[("x", f64::NAN)]),
               Err(Error::Parse(ParseError::NonFiniteVariable { name: "x".to_string() })));
    assert_eq!(parse("$ + 1", &[("x", 1.0)]),
               Err(Error::Parse(ParseError::IllegalExpression { index: 0 })));
}

#[test]
fn nesting_limit() {
    let shallow = Calculator::new().with_max_depth(2);
    assert_eq!(shallow.evaluate("((1 + 1) * 2)"), Ok(4.0));
    assert_eq!(shallow.evaluate("(((1)))"),
               Err(Error::Parse(ParseError::NestingTooDeep { limit: 2 })));

    let deep = format!("{}1{}", "(".repeat(300), ")".repeat(300));
    assert_eq!(evaluate(&deep),
               Err(Error::Parse(ParseError::NestingTooDeep { limit: calcite::DEFAULT_MAX_DEPTH })));

    let fine = format!("{}1{}", "(".repeat(100), ")".repeat(100));
    assert_value(&fine, 1.0);
}

#[test]
fn errors_have_messages() {
    assert_eq!(assert_failure("10 / 0").to_string(), "Division by zero.");
    assert_eq!(assert_failure("(1").to_string(),
               "Error at offset 0: Expected closing parenthesis ')' but none found.");
    assert_eq!(parse("$y", &[("x", 1.0)]).unwrap_err().to_string(),
               "Variable 'y' is not defined.");
}
