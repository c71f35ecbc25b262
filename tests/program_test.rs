mod common;
use basic::mach::Runtime;
use common::*;

#[test]
fn test_let_print_end() {
    let mut r = Runtime::default();
    enter_all(&mut r, &["10 LET x = 5", "20 PRINT x", "30 END"]);
    assert_eq!(exec(&mut r, "RUN"), "5\n");
}

#[test]
fn test_if_skips_line() {
    let mut r = Runtime::default();
    enter_all(
        &mut r,
        &["10 IF 1 < 2 THEN 30", "20 PRINT 999", "30 PRINT 1"],
    );
    assert_eq!(exec(&mut r, "RUN"), "1\n");
}

#[test]
fn test_remove_only_line() {
    let mut r = Runtime::default();
    enter_all(&mut r, &["10 PRINT 1", "10"]);
    assert_eq!(exec(&mut r, "RUN"), "");
    assert_eq!(exec(&mut r, "LIST"), "");
}

#[test]
fn test_list_order_ignores_insertion_order() {
    let mut r = Runtime::default();
    enter_all(&mut r, &["30 END", "10 LET a = 1", "20 PRINT a", "15 REM hi"]);
    assert_eq!(
        exec(&mut r, "LIST"),
        "10 LET a = 1\n15 REM hi\n20 PRINT a\n30 END\n"
    );
}

#[test]
fn test_redefine_line() {
    let mut r = Runtime::default();
    enter_all(&mut r, &["10 PRINT 1", "20 PRINT 2", "10 PRINT 3"]);
    assert_eq!(exec(&mut r, "RUN"), "3\n2\n");
    assert_eq!(exec(&mut r, "LIST"), "10 PRINT 3\n20 PRINT 2\n");
}

#[test]
fn test_bad_line_is_not_stored() {
    let mut r = Runtime::default();
    enter_all(&mut r, &["10 PRINT 1"]);
    assert_eq!(exec(&mut r, "10 PRINT"), "SYNTAX ERROR\n");
    assert_eq!(exec(&mut r, "LIST"), "10 PRINT 1\n");
}

#[test]
fn test_goto() {
    let mut r = Runtime::default();
    enter_all(
        &mut r,
        &["10 GOTO 30", "20 PRINT 2", "30 PRINT 3", "40 GOTO 60", "50 PRINT 5"],
    );
    assert_eq!(exec(&mut r, "RUN"), "3\nLINE NUMBER ERROR\n");
}

#[test]
fn test_runtime_errors_end_the_run() {
    let mut r = Runtime::default();
    enter_all(&mut r, &["10 PRINT 1", "20 PRINT 1 / 0", "30 PRINT 3"]);
    assert_eq!(exec(&mut r, "RUN"), "1\nDIVIDE BY ZERO\n");
    assert!(!r.program().is_running());
    enter_all(&mut r, &["20 PRINT nope"]);
    assert_eq!(exec(&mut r, "RUN"), "1\nVARIABLE NOT DEFINED\n");
}

#[test]
fn test_countdown() {
    let mut r = Runtime::default();
    enter_all(
        &mut r,
        &[
            "10 LET n = 3",
            "20 PRINT n",
            "30 LET n = n - 1",
            "40 IF n > 0 THEN 20",
            "50 PRINT 0 - 1",
        ],
    );
    assert_eq!(exec(&mut r, "RUN"), "3\n2\n1\n-1\n");
}

#[test]
fn test_run_keeps_variables() {
    let mut r = Runtime::default();
    enter_all(&mut r, &["10 PRINT k"]);
    assert_eq!(exec(&mut r, "LET k = 8"), "");
    assert_eq!(exec(&mut r, "RUN"), "8\n");
}

#[test]
fn test_clear() {
    let mut r = Runtime::default();
    enter_all(&mut r, &["10 PRINT 1", "LET a = 2"]);
    assert_eq!(exec(&mut r, "CLEAR"), "");
    assert_eq!(exec(&mut r, "LIST"), "");
    assert_eq!(exec(&mut r, "PRINT a"), "VARIABLE NOT DEFINED\n");
    assert_eq!(exec(&mut r, "RUN"), "");
}

#[test]
fn test_large_line_number() {
    let mut r = Runtime::default();
    assert_eq!(exec(&mut r, "1000000 PRINT 7"), "");
    assert_eq!(exec(&mut r, "LIST"), "1000000 PRINT 7\n");
    assert_eq!(exec(&mut r, "RUN"), "7\n");
}

#[test]
fn test_clear_discards_variables() {
    let mut r = Runtime::default();
    assert_eq!(exec(&mut r, "LET x = 3"), "");
    assert_eq!(r.var().len(), 1);
    assert_eq!(exec(&mut r, "CLEAR"), "");
    assert!(r.var().is_empty());
}
