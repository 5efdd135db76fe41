mod common;

use common::{run_errors, parse};
use rlox::interpreter::Interpreter;

#[test]
fn runtime_errors_carry_their_line() {
    assert_eq!(
        run_errors("var a = 1;\nvar b = 2;\nprint a + nil;"),
        vec!["[line 3] Error: Operands must be two numbers or two strings."]
    );
}

#[test]
fn execution_stops_at_the_first_runtime_error() {
    let parsed = parse("print 1; print nil + 1; print 2;");
    assert!(parsed.is_ok());

    let mut interpreter = Interpreter::with_output(Vec::new());
    let err = interpreter.interpret(&parsed.statements).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Operands must be two numbers or two strings."
    );

    // Only the statement before the failure printed anything.
    let printed = String::from_utf8(interpreter.into_output()).unwrap();
    assert_eq!(printed, "1\n");
}

#[test]
fn operand_errors_name_the_offending_type() {
    assert_eq!(
        run_errors("print nil - 1;"),
        vec!["[line 1] Error: Operand must be a number. Got nil instead."]
    );
    assert_eq!(
        run_errors("print true * 2;"),
        vec!["[line 1] Error: Operand must be a number. Got boolean instead."]
    );
    assert_eq!(
        run_errors("print \"s\" / 2;"),
        vec!["[line 1] Error: Operand must be a number. Got string instead."]
    );
}

#[test]
fn undefined_variable_names_the_variable() {
    assert_eq!(
        run_errors("print nowhere;"),
        vec!["[line 1] Error: Undefined variable 'nowhere'."]
    );
}

#[test]
fn division_by_zero_reports_the_operator_line() {
    assert_eq!(
        run_errors("var a = 1;\nprint a /\n0;"),
        vec!["[line 2] Error: Division by zero."]
    );
}

#[test]
fn parse_errors_suppress_execution_entirely() {
    // Even well-formed statements before the error never run.
    let errors = run_errors("print 1;\nvar = 2;");
    assert_eq!(errors, vec!["[line 2] Error at '=': Expect variable name."]);
}

#[test]
fn all_parse_errors_are_reported_together() {
    let errors = run_errors("var = 1;\nprint ;\nbreak;");
    assert_eq!(
        errors,
        vec![
            "[line 1] Error at '=': Expect variable name.",
            "[line 2] Error at ';': Expect expression.",
            "[line 3] Error at 'break': Break outside of loop.",
        ]
    );
}
