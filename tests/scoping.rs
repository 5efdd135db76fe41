mod common;

use common::{run, run_errors};

#[test]
fn inner_declaration_shadows_outer() {
    let out = run("var a = \"outer\";\n\
                   {\n\
                     var a = \"inner\";\n\
                     print a;\n\
                   }\n\
                   print a;");
    assert_eq!(out, "inner\nouter\n");
}

#[test]
fn inner_scope_reads_outer_bindings() {
    assert_eq!(run("var a = 1; { print a; }"), "1\n");
}

#[test]
fn assignment_mutates_the_enclosing_binding() {
    assert_eq!(run("var a = 1; { a = 2; } print a;"), "2\n");
}

#[test]
fn block_bindings_die_with_the_block() {
    assert_eq!(
        run_errors("{ var a = 1; }\nprint a;"),
        vec!["[line 2] Error: Undefined variable 'a'."]
    );
}

#[test]
fn redeclaration_in_the_same_scope_rebinds() {
    assert_eq!(run("var a = 1; var a = 2; print a;"), "2\n");
}

#[test]
fn reading_an_uninitialized_variable_fails() {
    assert_eq!(
        run_errors("var a;\nprint a;"),
        vec!["[line 2] Error: Access to uninitialized variable 'a'."]
    );
}

#[test]
fn assigning_initializes_a_declared_variable() {
    assert_eq!(run("var a; a = 5; print a;"), "5\n");
}

#[test]
fn uninitialized_is_distinct_from_undefined() {
    assert_eq!(
        run_errors("print missing;"),
        vec!["[line 1] Error: Undefined variable 'missing'."]
    );
}

#[test]
fn assignment_never_creates_a_binding() {
    assert_eq!(
        run_errors("missing = 1;"),
        vec!["[line 1] Error: Undefined variable 'missing'."]
    );
}

#[test]
fn shadowing_declaration_may_read_the_outer_binding() {
    assert_eq!(run("var a = 1; { var a = a + 1; print a; } print a;"), "2\n1\n");
}

#[test]
fn uninitialized_shadow_hides_an_initialized_outer() {
    assert_eq!(
        run_errors("var a = 1;\n{\n  var a;\n  print a;\n}"),
        vec!["[line 4] Error: Access to uninitialized variable 'a'."]
    );
}
