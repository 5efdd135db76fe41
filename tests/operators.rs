mod common;

use common::{run, run_errors};

#[test]
fn arithmetic_follows_precedence() {
    assert_eq!(run("print 1 + 2 * 3;"), "7\n");
    assert_eq!(run("print (1 + 2) * 3;"), "9\n");
    assert_eq!(run("print 10 - 4 - 3;"), "3\n");
}

#[test]
fn integral_results_print_without_decimals() {
    assert_eq!(run("print 6 / 2;"), "3\n");
    assert_eq!(run("print 7 / 2;"), "3.5\n");
    assert_eq!(run("print -0.5 + 0.5;"), "0\n");
}

#[test]
fn unary_negation_and_not() {
    assert_eq!(run("print -3 + 1;"), "-2\n");
    assert_eq!(run("print !true;"), "false\n");
    assert_eq!(run("print !nil;"), "true\n");
    assert_eq!(run("print !!0;"), "true\n");
}

#[test]
fn string_concatenation() {
    assert_eq!(run("print \"foo\" + \"bar\";"), "foobar\n");
    assert_eq!(run("print \"\" + \"x\";"), "x\n");
}

#[test]
fn plus_rejects_mixed_operands() {
    assert_eq!(
        run_errors("print 1 + \"a\";"),
        vec!["[line 1] Error: Operands must be two numbers or two strings."]
    );
}

#[test]
fn negation_rejects_non_numbers() {
    assert_eq!(
        run_errors("print -\"a\";"),
        vec!["[line 1] Error: Operand must be a number. Got string instead."]
    );
    assert_eq!(
        run_errors("print -nil;"),
        vec!["[line 1] Error: Operand must be a number. Got nil instead."]
    );
}

#[test]
fn comparison_rejects_non_numbers() {
    assert_eq!(
        run_errors("print \"a\" < \"b\";"),
        vec!["[line 1] Error: Operand must be a number. Got string instead."]
    );
}

#[test]
fn comparisons() {
    assert_eq!(run("print 1 < 2;"), "true\n");
    assert_eq!(run("print 2 <= 2;"), "true\n");
    assert_eq!(run("print 1 > 2;"), "false\n");
    assert_eq!(run("print 2 >= 3;"), "false\n");
}

#[test]
fn equality_never_crosses_types() {
    assert_eq!(run("print 1 == \"1\";"), "false\n");
    assert_eq!(run("print nil == false;"), "false\n");
    assert_eq!(run("print nil == nil;"), "true\n");
    assert_eq!(run("print \"a\" == \"a\";"), "true\n");
    assert_eq!(run("print 1 != 2;"), "true\n");
}

#[test]
fn division_by_zero_is_an_error() {
    assert_eq!(
        run_errors("print 1 / 0;"),
        vec!["[line 1] Error: Division by zero."]
    );
}

#[test]
fn logical_operators_return_an_operand() {
    // Short-circuiting yields the deciding operand itself, not a boolean.
    assert_eq!(run("print nil or \"fallback\";"), "fallback\n");
    assert_eq!(run("print 1 or 2;"), "1\n");
    assert_eq!(run("print 1 and 2;"), "2\n");
    assert_eq!(run("print false and 2;"), "false\n");
}

#[test]
fn short_circuit_skips_the_right_operand() {
    // The division never runs.
    assert_eq!(run("print false and 1 / 0;"), "false\n");
    assert_eq!(run("print true or 1 / 0;"), "true\n");
}

#[test]
fn ternary_selects_a_branch() {
    assert_eq!(run("print true ? 1 : 2;"), "1\n");
    assert_eq!(run("print false ? 1 : 2;"), "2\n");
    assert_eq!(run("print 1 < 2 ? \"yes\" : \"no\";"), "yes\n");
}

#[test]
fn ternary_evaluates_only_the_taken_branch() {
    assert_eq!(run("print true ? 1 : 1 / 0;"), "1\n");
}

#[test]
fn comma_evaluates_left_to_right_and_keeps_the_right() {
    assert_eq!(run("print 1, 2, 3;"), "3\n");
    assert_eq!(run("var a = 1; print (a + 1, a + 2);"), "3\n");
}
